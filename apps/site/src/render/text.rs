use maud::{html, Markup};

/// Free text to paragraphs: a blank line starts a new `<p>`, a single
/// newline becomes `<br>`. Text is escaped like any other value.
pub fn paragraphs(text: &str) -> Markup {
    let mut blocks: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.lines().map(str::trim) {
        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    html! {
        @for block in &blocks {
            p {
                @for (i, line) in block.iter().enumerate() {
                    @if i > 0 { br; }
                    (line)
                }
            }
        }
    }
}

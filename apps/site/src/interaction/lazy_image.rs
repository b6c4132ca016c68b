/// How far outside the viewport an image starts loading. The layout hands it
/// to the page script through `data-lazy-margin` on `<body>`.
pub const ROOT_MARGIN: &str = "50px 0px";
pub const LOADED_CLASS: &str = "loaded";
/// 1x1 transparent GIF shown until the real source is assigned.
pub const PLACEHOLDER_SRC: &str =
    "data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LazyState {
    /// Deferred source set, observer watching.
    Registered,
    /// Source assigned, observer released.
    Loaded,
}

/// One deferred image. Loads at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LazyImage {
    src: String,
    state: LazyState,
}

impl LazyImage {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            state: LazyState::Registered,
        }
    }

    pub fn state(&self) -> LazyState {
        self.state
    }

    /// Viewport proximity reached. Returns the source to assign the first
    /// time only; later calls are no-ops.
    pub fn on_intersect(&mut self) -> Option<&str> {
        match self.state {
            LazyState::Registered => {
                self.state = LazyState::Loaded;
                Some(self.src.as_str())
            }
            LazyState::Loaded => None,
        }
    }

    /// Value of the `data-src` attribute, present only until loaded.
    pub fn data_src(&self) -> Option<&str> {
        match self.state {
            LazyState::Registered => Some(self.src.as_str()),
            LazyState::Loaded => None,
        }
    }

    /// Value of the `src` attribute.
    pub fn current_src(&self) -> &str {
        match self.state {
            LazyState::Registered => PLACEHOLDER_SRC,
            LazyState::Loaded => self.src.as_str(),
        }
    }

    pub fn class(&self) -> Option<&'static str> {
        match self.state {
            LazyState::Registered => None,
            LazyState::Loaded => Some(LOADED_CLASS),
        }
    }
}

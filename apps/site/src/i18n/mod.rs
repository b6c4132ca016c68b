// Language selection and the localized UI string table.
// Renderers resolve `Language::strings()` once per page and read fields from it.

pub mod language;
pub mod strings;

pub use language::Language;
pub use strings::UiStrings;

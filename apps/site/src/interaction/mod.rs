// Client-side behavior, modelled server-side.
// The server renders the initial state from these types; assets/main.js
// implements the same transitions in the browser.

pub mod lazy_image;
pub mod nav;

pub use lazy_image::{LazyImage, ROOT_MARGIN};
pub use nav::{NavEvent, NavState};

//! Bilingual (French/English) salon website: edge language routing, content
//! provider, page renderers and the axum origin server.

pub mod config;
pub mod content;
pub mod edge;
pub mod errors;
pub mod i18n;
pub mod interaction;
pub mod render;
pub mod routes;
pub mod state;

// Public API exports (shared between client and server)
pub mod config;
pub mod domain;
pub mod shared;

// Dioxus components, layouts and the page shell
pub mod app;

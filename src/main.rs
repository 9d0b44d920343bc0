//! Site header navigation - entry point
//!
//! Serves the page shell with `dioxus::serve` when built with the `server`
//! feature, otherwise launches it in the browser or a desktop window.

use site_header_nav::app::App;

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();
}

// Server entry point - dioxus::serve creates its own runtime
#[cfg(feature = "server")]
fn main() {
    init_tracing();
    tracing::info!("Starting site header navigation server...");

    dioxus::serve(|| async move { Ok(dioxus::server::router(App)) });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    web_sys::console::log_1(&"[WASM] Site header navigation initialized".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    init_tracing();
    dioxus::launch(App);
}

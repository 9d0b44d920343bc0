use dioxus::prelude::*;

use crate::app::layouts::Header;
use crate::shared::hooks::use_page_state_provider;

/// Page shell: owns the dropdown flags for the lifetime of the page
#[component]
pub fn App() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    use_page_state_provider();

    use_effect(|| {
        tracing::info!("Header navigation initialized");
    });

    rsx! {
        document::Link { rel: "stylesheet", href: BUNDLE_CSS }
        Header {}
        main { class: "c-header__main" }
    }
}

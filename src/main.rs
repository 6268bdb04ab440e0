//! Web SEO Guard desktop entry point.
//!
//! ```bash
//! GEMINI_API_KEY=... dx serve --features desktop
//! ```

use seoguard::{app::App, lifecycle};

fn main() {
    lifecycle::init_logging();
    let backend = lifecycle::load_backend();

    dioxus::LaunchBuilder::new().with_context(backend).launch(App);
}

use leptos::*;
use leptos_meta::*;
use style_guide::StyleGuideApp;
use theme_runtime::{initial_mode_from_query, ThemeMode, ThemeProvider};

/// Resolves the boot display mode from the page query string, defaulting to
/// light when no override is present.
fn boot_mode() -> ThemeMode {
    web_sys::window()
        .and_then(|window| window.location().search().ok())
        .and_then(|search| initial_mode_from_query(&search))
        .unwrap_or_default()
}

#[component]
pub fn GuideApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Visual Style Guide" />
        <Meta
            name="description"
            content="Component showcase and design-system reference rendered from shared UI primitives."
        />

        <ThemeProvider initial=boot_mode()>
            <StyleGuideApp />
        </ThemeProvider>
    }
}

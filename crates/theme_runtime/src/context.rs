//! Provider and context wiring for the display mode.

use std::rc::Rc;

use leptos::*;

use crate::applier::{DocumentThemeApplier, ThemeApplier};
use crate::mode::{reduce_theme, ThemeAction, ThemeMode};

#[derive(Clone, Copy)]
/// Leptos context exposing the current mode and the single toggle entry
/// point.
pub struct ThemeContext {
    /// Reactive read-only display mode.
    pub mode: ReadSignal<ThemeMode>,
    toggle: Callback<()>,
}

impl ThemeContext {
    /// Flips the display mode.
    pub fn toggle(&self) {
        self.toggle.call(());
    }

    /// Whether the dark palette is currently active.
    pub fn is_dark(&self) -> bool {
        self.mode.get().is_dark()
    }
}

#[component]
/// Owns the display-mode signal and keeps the root marker synchronized.
///
/// Descendants read the mode and request toggles through [`ThemeContext`];
/// nothing else mutates the state.
pub fn ThemeProvider(
    /// Initial mode; defaults to light with the marker absent.
    #[prop(optional)]
    initial: Option<ThemeMode>,
    /// Marker capability override, used by tests and alternate hosts.
    #[prop(optional)]
    applier: Option<Rc<dyn ThemeApplier>>,
    children: Children,
) -> impl IntoView {
    let applier = applier.unwrap_or_else(|| Rc::new(DocumentThemeApplier));
    let mode = create_rw_signal(initial.unwrap_or_default());

    let toggle = Callback::new(move |_| {
        mode.update(|mode| {
            reduce_theme(mode, ThemeAction::Toggle);
        });
    });

    create_effect(move |_| {
        applier.apply(mode.get());
    });

    provide_context(ThemeContext {
        mode: mode.read_only(),
        toggle,
    });

    children().into_view()
}

/// Returns the current [`ThemeContext`].
///
/// # Panics
///
/// Panics if called outside [`ThemeProvider`].
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not provided")
}

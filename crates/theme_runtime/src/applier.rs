//! The root-marker capability.
//!
//! Keeping the document mutation behind [`ThemeApplier`] means the toggle
//! transition never touches the DOM directly; the provider synchronizes
//! whatever applier it was handed.

use leptos::logging;

use crate::mode::ThemeMode;

/// Marker attribute applied to the document root element while dark mode is
/// active.
pub const THEME_MARKER_ATTR: &str = "data-theme";

/// Capability that synchronizes a presentation root with a [`ThemeMode`].
pub trait ThemeApplier {
    /// Makes the presentation root reflect `mode`.
    fn apply(&self, mode: ThemeMode);
}

/// Production applier targeting the browser document root element.
///
/// Dark mode sets `data-theme="dark"` on `<html>`; light mode removes the
/// attribute so the marker is absent exactly when the default palette is
/// active. Failures are logged and leave the mode signal authoritative for
/// the next application.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentThemeApplier;

impl ThemeApplier for DocumentThemeApplier {
    fn apply(&self, mode: ThemeMode) {
        let Some(root) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        else {
            return;
        };

        let result = if mode.is_dark() {
            root.set_attribute(THEME_MARKER_ATTR, mode.token())
        } else {
            root.remove_attribute(THEME_MARKER_ATTR)
        };
        if let Err(err) = result {
            logging::warn!("theme marker update failed: {err:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::mode::{reduce_theme, ThemeAction};

    /// Records every applied mode, standing in for the document root.
    #[derive(Clone, Default)]
    struct RecordingApplier {
        applied: Rc<RefCell<Vec<ThemeMode>>>,
    }

    impl ThemeApplier for RecordingApplier {
        fn apply(&self, mode: ThemeMode) {
            self.applied.borrow_mut().push(mode);
        }
    }

    fn run_toggles(applier: &RecordingApplier, toggles: usize) -> ThemeMode {
        let mut mode = ThemeMode::default();
        applier.apply(mode);
        for _ in 0..toggles {
            if reduce_theme(&mut mode, ThemeAction::Toggle) {
                applier.apply(mode);
            }
        }
        mode
    }

    #[test]
    fn marker_state_tracks_every_transition() {
        let applier = RecordingApplier::default();
        let final_mode = run_toggles(&applier, 3);

        assert_eq!(final_mode, ThemeMode::Dark);
        assert_eq!(
            *applier.applied.borrow(),
            vec![
                ThemeMode::Light,
                ThemeMode::Dark,
                ThemeMode::Light,
                ThemeMode::Dark,
            ]
        );
    }

    #[test]
    fn even_sequences_leave_the_marker_absent() {
        let applier = RecordingApplier::default();
        let final_mode = run_toggles(&applier, 6);

        assert_eq!(final_mode, ThemeMode::Light);
        assert_eq!(
            applier.applied.borrow().last().copied(),
            Some(ThemeMode::Light)
        );
    }
}

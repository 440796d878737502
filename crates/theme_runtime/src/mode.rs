//! Display-mode model and pure transition logic.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Page-wide display mode.
pub enum ThemeMode {
    /// Default light palette; the root marker is absent.
    #[default]
    Light,
    /// Dark palette; the root marker is present.
    Dark,
}

impl ThemeMode {
    /// Returns the opposite mode.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Whether the dark palette is active.
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Stable token used by the root marker and boot overrides.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Actions accepted by the theme reducer.
pub enum ThemeAction {
    /// Flip the current mode.
    Toggle,
    /// Force a specific mode (boot overrides).
    Set(ThemeMode),
}

/// Applies `action` to `mode`, returning whether the state changed.
pub fn reduce_theme(mode: &mut ThemeMode, action: ThemeAction) -> bool {
    let next = match action {
        ThemeAction::Toggle => mode.toggled(),
        ThemeAction::Set(next) => next,
    };
    if next == *mode {
        return false;
    }
    *mode = next;
    true
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn starts_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
        assert!(!ThemeMode::default().is_dark());
    }

    #[test]
    fn even_toggle_sequences_restore_the_initial_mode() {
        for toggles in [0usize, 2, 4, 10] {
            let mut mode = ThemeMode::default();
            for _ in 0..toggles {
                reduce_theme(&mut mode, ThemeAction::Toggle);
            }
            assert_eq!(mode, ThemeMode::Light, "after {toggles} toggles");
        }
    }

    #[test]
    fn odd_toggle_sequences_end_dark() {
        for toggles in [1usize, 3, 7] {
            let mut mode = ThemeMode::default();
            for _ in 0..toggles {
                reduce_theme(&mut mode, ThemeAction::Toggle);
            }
            assert_eq!(mode, ThemeMode::Dark, "after {toggles} toggles");
            assert!(mode.is_dark());
        }
    }

    #[test]
    fn toggle_always_reports_a_change() {
        let mut mode = ThemeMode::Light;
        assert!(reduce_theme(&mut mode, ThemeAction::Toggle));
        assert!(reduce_theme(&mut mode, ThemeAction::Toggle));
        assert_eq!(mode, ThemeMode::Light);
    }

    #[test]
    fn set_reports_change_only_when_the_mode_differs() {
        let mut mode = ThemeMode::Light;
        assert!(!reduce_theme(&mut mode, ThemeAction::Set(ThemeMode::Light)));
        assert!(reduce_theme(&mut mode, ThemeAction::Set(ThemeMode::Dark)));
        assert!(!reduce_theme(&mut mode, ThemeAction::Set(ThemeMode::Dark)));
        assert_eq!(mode, ThemeMode::Dark);
    }

    #[test]
    fn tokens_round_trip_through_serde() {
        let serialized = serde_json::to_string(&ThemeMode::Dark).expect("serialize");
        assert_eq!(serialized, "\"dark\"");
        let restored: ThemeMode = serde_json::from_str(&serialized).expect("deserialize");
        assert_eq!(restored, ThemeMode::Dark);
        assert_eq!(ThemeMode::Light.token(), "light");
    }
}

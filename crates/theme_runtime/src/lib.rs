//! Display-mode runtime for the style-guide page.
//!
//! Owns the single piece of shared state in the application: the light/dark
//! [`ThemeMode`]. The mode lives in a root provider, transitions through a
//! pure reducer, and reaches the document through the [`ThemeApplier`]
//! capability so the core toggle logic stays independently testable from any
//! DOM mutation.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod applier;
mod boot;
mod context;
mod mode;

pub use applier::{DocumentThemeApplier, ThemeApplier};
pub use boot::initial_mode_from_query;
pub use context::{use_theme, ThemeContext, ThemeProvider};
pub use mode::{reduce_theme, ThemeAction, ThemeMode};

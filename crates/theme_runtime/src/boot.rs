//! Boot-time mode overrides from the page query string.

use crate::mode::ThemeMode;

/// Parses a `theme=` override out of a raw query string.
///
/// Accepts the string with or without the leading `?`. Unknown values yield
/// no override so the page falls back to the light default.
pub fn initial_mode_from_query(query: &str) -> Option<ThemeMode> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| key.trim() == "theme")
        .and_then(|(_, value)| match value.trim() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_supported_modes() {
        assert_eq!(initial_mode_from_query("?theme=dark"), Some(ThemeMode::Dark));
        assert_eq!(initial_mode_from_query("theme=light"), Some(ThemeMode::Light));
        assert_eq!(
            initial_mode_from_query("?foo=1&theme=dark&bar=2"),
            Some(ThemeMode::Dark)
        );
    }

    #[test]
    fn ignores_missing_or_unknown_values() {
        assert_eq!(initial_mode_from_query(""), None);
        assert_eq!(initial_mode_from_query("?theme=solarized"), None);
        assert_eq!(initial_mode_from_query("?mode=dark"), None);
        assert_eq!(initial_mode_from_query("?theme"), None);
    }
}

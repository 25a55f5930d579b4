//! Light/dark theme, persisted under the localStorage key `theme`.

use crate::browser;

pub const STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Stored values other than `"dark"` (including absence) mean light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon shown on the toggle button: the sun offers the way back out
    /// of dark mode.
    pub fn icon_class(self) -> &'static str {
        match self {
            Theme::Light => "fas fa-moon",
            Theme::Dark => "fas fa-sun",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

pub fn saved() -> Theme {
    Theme::from_stored(browser::storage_get(STORAGE_KEY).as_deref())
}

pub fn store(theme: Theme) {
    browser::storage_set(STORAGE_KEY, theme.as_str());
}

/// Applies the theme as a `dark` class on `<body>`.
pub fn apply(theme: Theme) {
    if let Some(body) = browser::document().and_then(|d| d.body()) {
        let _ = body.class_list().toggle_with_force("dark", theme.is_dark());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_value_round_trips() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_stored(Some(theme.as_str())), theme);
        }
    }

    #[test]
    fn unknown_or_missing_value_falls_back_to_light() {
        assert_eq!(Theme::from_stored(None), Theme::Light);
        assert_eq!(Theme::from_stored(Some("solarized")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("")), Theme::Light);
    }

    #[test]
    fn toggling_twice_is_identity() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }
}

use log::warn;
use web_sys::window;

/// Class placed on `<html>` while the dark theme is active.
pub const DARK_MARKER: &str = "dark";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn marker(self) -> Option<&'static str> {
        self.is_dark().then_some(DARK_MARKER)
    }

    /// Label for the action that switches away from this theme.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "LIGHT MODE",
            Theme::Light => "DARK MODE",
        }
    }

    /// Adds or removes the marker on the document root.
    pub fn apply(self) {
        let Some(root) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            warn!("No document root to apply theme to");
            return;
        };

        if let Err(e) = root.class_list().toggle_with_force(DARK_MARKER, self.is_dark()) {
            warn!("Failed to apply theme: {:?}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::default().marker(), Some("dark"));
    }

    #[test]
    fn toggling_twice_is_identity() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn only_two_values_are_reachable() {
        let mut seen = vec![Theme::default()];
        let mut current = Theme::default();
        for _ in 0..10 {
            current = current.toggled();
            if !seen.contains(&current) {
                seen.push(current);
            }
        }
        assert_eq!(seen, vec![Theme::Dark, Theme::Light]);
    }

    #[test]
    fn marker_only_in_dark_mode() {
        assert_eq!(Theme::Light.marker(), None);
        assert_eq!(Theme::Dark.toggle_label(), "LIGHT MODE");
        assert_eq!(Theme::Light.toggle_label(), "DARK MODE");
    }
}

//! Message styling.

use owo_colors::OwoColorize;

/// Theme for consistent styling
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub colors_enabled: bool,
}

impl Theme {
    /// Create a new theme
    pub const fn new(colors_enabled: bool) -> Self {
        Self { colors_enabled }
    }

    /// Create a theme from current settings
    pub fn from_env() -> Self {
        Self::new(super::colors_enabled())
    }

    /// Format a success message
    pub fn success(&self, text: &str) -> String {
        if self.colors_enabled {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    /// Format an error message
    pub fn error(&self, text: &str) -> String {
        if self.colors_enabled {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }

    /// Format a progress or warning message
    pub fn warning(&self, text: &str) -> String {
        if self.colors_enabled {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    /// Format a package name
    pub fn package(&self, name: &str) -> String {
        if self.colors_enabled {
            name.cyan().bold().to_string()
        } else {
            name.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_leaves_text_alone() {
        let theme = Theme::new(false);
        assert_eq!(theme.success("done"), "done");
        assert_eq!(theme.error("failed"), "failed");
        assert_eq!(theme.warning("working"), "working");
        assert_eq!(theme.package("acme/widget"), "acme/widget");
    }

    #[test]
    fn colored_theme_wraps_text() {
        let theme = Theme::new(true);
        let text = theme.error("failed");
        assert!(text.contains("failed"));
        assert!(text.starts_with("\u{1b}["));
        assert_ne!(theme.success("x"), theme.error("x"));
    }
}

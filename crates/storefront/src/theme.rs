//! Palette and font weights injected into the card styling.
//!
//! The theme renders to `/theme.css` as CSS custom properties plus one
//! background rule per badge modifier. `static/css/main.css` only references
//! the custom properties, so swapping the palette never touches markup.

use askama::Template;

use crate::components::shoe_card::VariantStyle;

/// Accent treatments available to badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accent {
    Primary,
    Secondary,
}

/// Grayscale ramp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayRamp {
    pub g100: String,
    pub g300: String,
    pub g500: String,
    pub g700: String,
    pub g900: String,
}

/// Color palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub white: String,
    pub gray: GrayRamp,
    pub primary: String,
    pub secondary: String,
}

impl Palette {
    /// Resolve an accent to its color.
    #[must_use]
    pub fn accent(&self, accent: Accent) -> &str {
        match accent {
            Accent::Primary => &self.primary,
            Accent::Secondary => &self.secondary,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            white: "hsl(0deg 0% 100%)".to_string(),
            gray: GrayRamp {
                g100: "hsl(185deg 5% 95%)".to_string(),
                g300: "hsl(190deg 5% 80%)".to_string(),
                g500: "hsl(196deg 4% 60%)".to_string(),
                g700: "hsl(220deg 5% 40%)".to_string(),
                g900: "hsl(220deg 3% 20%)".to_string(),
            },
            primary: "hsl(340deg 65% 47%)".to_string(),
            secondary: "hsl(240deg 60% 63%)".to_string(),
        }
    }
}

/// Named font weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weights {
    pub normal: u16,
    pub medium: u16,
    pub bold: u16,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            normal: 500,
            medium: 600,
            bold: 800,
        }
    }
}

/// Visual constants for the storefront.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Theme {
    pub colors: Palette,
    pub weights: Weights,
}

impl Theme {
    /// Default theme with optional accent overrides.
    #[must_use]
    pub fn with_accents(primary: Option<String>, secondary: Option<String>) -> Self {
        let mut theme = Self::default();
        if let Some(primary) = primary {
            theme.colors.primary = primary;
        }
        if let Some(secondary) = secondary {
            theme.colors.secondary = secondary;
        }
        theme
    }

    /// Build the stylesheet for this theme.
    #[must_use]
    pub fn stylesheet(&self) -> ThemeStylesheet<'_> {
        let badge_rules = VariantStyle::all()
            .iter()
            .map(|style| BadgeRule {
                modifier: style.modifier,
                background: self.colors.accent(style.accent),
            })
            .collect();

        ThemeStylesheet {
            theme: self,
            badge_rules,
        }
    }
}

/// Badge background rule emitted into the theme stylesheet.
pub struct BadgeRule<'a> {
    pub modifier: &'static str,
    pub background: &'a str,
}

/// `/theme.css` template.
#[derive(Template)]
#[template(path = "theme.css", escape = "none")]
pub struct ThemeStylesheet<'a> {
    pub theme: &'a Theme,
    pub badge_rules: Vec<BadgeRule<'a>>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_resolution() {
        let palette = Palette::default();
        assert_eq!(palette.accent(Accent::Primary), "hsl(340deg 65% 47%)");
        assert_eq!(palette.accent(Accent::Secondary), "hsl(240deg 60% 63%)");
    }

    #[test]
    fn test_with_accents_overrides_only_given_colors() {
        let theme = Theme::with_accents(Some("#d11d5c".to_string()), None);
        assert_eq!(theme.colors.primary, "#d11d5c");
        assert_eq!(theme.colors.secondary, Palette::default().secondary);
        assert_eq!(theme.colors.gray, Palette::default().gray);
    }

    #[test]
    fn test_stylesheet_declares_custom_properties() {
        let css = Theme::default().stylesheet().render().unwrap();
        assert!(css.contains("--color-primary: hsl(340deg 65% 47%);"));
        assert!(css.contains("--color-gray-700: hsl(220deg 5% 40%);"));
        assert!(css.contains("--weight-medium: 600;"));
    }

    #[test]
    fn test_stylesheet_maps_badges_to_accents() {
        let theme = Theme::with_accents(Some("red".to_string()), Some("blue".to_string()));
        let css = theme.stylesheet().render().unwrap();
        assert!(css.contains(".shoe-card__tag--on-sale {\n  background-color: red;\n}"));
        assert!(css.contains(".shoe-card__tag--new-release {\n  background-color: blue;\n}"));
    }
}

//! Design system and theme provider for LinkUp
//!
//! Two themes are supported, mirroring the system color scheme:
//! - Light: white background, dark text
//! - Dark: near-black background, light text
//!
//! Screens consume the semantic slots (`background`, `card`, `text`, `icon`,
//! `tint`) rather than raw palette values, and derive translucent variants
//! with [`with_alpha`].
//!
//! # Usage
//!
//! ```rust
//! use app_ui::theme::{get_theme, with_alpha, ThemeName};
//!
//! let theme = get_theme(ThemeName::Dark);
//! assert!(theme.is_dark());
//! let border = with_alpha(&theme.colors.icon, 0x40);
//! assert!(border.ends_with("40"));
//! ```

use serde::{Deserialize, Serialize};

/// A color represented as an RGB(A) hex string (e.g., "#FFFFFF" or "#FFFFFF80")
pub type Color = String;

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() < 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Convert RGB to hex string
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// Append an alpha byte to an opaque hex color.
///
/// The screens build their translucent borders and placeholders this way
/// (e.g. the input border is the icon color at 0x40).
pub fn with_alpha(color: &str, alpha: u8) -> Color {
    format!("{}{:02X}", color, alpha)
}

/// LinkUp brand colors
pub mod brand {
    /// Primary brand color (link blue)
    pub const TINT: &str = "#2F80ED";

    /// Brand color lifted for dark backgrounds
    pub const TINT_DARK: &str = "#5B9BFF";

    /// Inline validation / destructive red
    pub const ERROR: &str = "#FF3B30";

    /// Unfocused tab bar icon gray
    pub const TAB_INACTIVE: &str = "#999999";

    /// Pure white
    pub const WHITE: &str = "#FFFFFF";

    /// Pure black
    pub const BLACK: &str = "#000000";
}

// =============================================================================
// Theme Definition
// =============================================================================

/// Semantic colors consumed by the screens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    /// Screen background
    pub background: Color,
    /// Elevated surfaces (inputs, dropdowns)
    pub card: Color,
    /// Primary text
    pub text: Color,
    /// Muted text and glyphs; alpha-suffixed for borders and placeholders
    pub icon: Color,
    /// Brand accent (buttons, links, focused tab icons)
    pub tint: Color,
    /// Inline validation errors
    pub error: Color,
    /// Unfocused tab bar icons
    pub tab_inactive: Color,
}

/// Theme name enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl ThemeName {
    /// Get the color scheme name
    pub fn color_scheme(&self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
        }
    }
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeName::Light => write!(f, "Light"),
            ThemeName::Dark => write!(f, "Dark"),
        }
    }
}

impl std::str::FromStr for ThemeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeName::Light),
            "dark" => Ok(ThemeName::Dark),
            _ => Err(format!("Unknown theme: {}", s)),
        }
    }
}

/// Complete theme definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name
    pub name: ThemeName,
    /// Color scheme ("light" or "dark")
    pub color_scheme: String,
    /// Semantic theme colors
    pub colors: ThemeColors,
}

impl Theme {
    /// Check if this is a dark theme
    pub fn is_dark(&self) -> bool {
        matches!(self.name, ThemeName::Dark)
    }

    /// Input/dropdown border: the icon color at 25% alpha
    pub fn border(&self) -> Color {
        with_alpha(&self.colors.icon, 0x40)
    }

    /// Placeholder text: the icon color at 50% alpha
    pub fn placeholder(&self) -> Color {
        with_alpha(&self.colors.icon, 0x80)
    }
}

/// Create the light theme
pub fn light_theme() -> Theme {
    Theme {
        name: ThemeName::Light,
        color_scheme: "light".to_string(),
        colors: ThemeColors {
            background: "#FFFFFF".to_string(),
            card: "#F4F6F8".to_string(),
            text: "#11181C".to_string(),
            icon: "#687076".to_string(),
            tint: brand::TINT.to_string(),
            error: brand::ERROR.to_string(),
            tab_inactive: brand::TAB_INACTIVE.to_string(),
        },
    }
}

/// Create the dark theme
pub fn dark_theme() -> Theme {
    Theme {
        name: ThemeName::Dark,
        color_scheme: "dark".to_string(),
        colors: ThemeColors {
            background: "#10141A".to_string(),
            card: "#1C232D".to_string(),
            text: "#ECEDEE".to_string(),
            icon: "#9BA1A6".to_string(),
            tint: brand::TINT_DARK.to_string(),
            error: brand::ERROR.to_string(),
            tab_inactive: brand::TAB_INACTIVE.to_string(),
        },
    }
}

/// Get a theme by name
pub fn get_theme(name: ThemeName) -> Theme {
    match name {
        ThemeName::Light => light_theme(),
        ThemeName::Dark => dark_theme(),
    }
}

/// All available themes
pub fn all_themes() -> Vec<Theme> {
    vec![light_theme(), dark_theme()]
}

/// Active theme selection
///
/// Follows the system color scheme unless the user pins a theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ThemeState {
    /// User-pinned theme; None follows the system
    pub pinned: Option<ThemeName>,
}

impl ThemeState {
    /// Create a state that follows the system scheme
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin a specific theme
    pub fn pin(&mut self, name: ThemeName) {
        self.pinned = Some(name);
    }

    /// Return to following the system scheme
    pub fn follow_system(&mut self) {
        self.pinned = None;
    }

    /// Resolve the effective theme given the system scheme
    pub fn resolve(&self, system: ThemeName) -> Theme {
        get_theme(self.pinned.unwrap_or(system))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#2F80ED"), Some((0x2F, 0x80, 0xED)));
        assert_eq!(parse_hex_color("2F80ED"), Some((0x2F, 0x80, 0xED)));
        assert_eq!(parse_hex_color("#FFF"), None);
        assert_eq!(parse_hex_color("#GGGGGG"), None);
    }

    #[test]
    fn test_rgb_to_hex_round_trip() {
        let hex = rgb_to_hex(0x2F, 0x80, 0xED);
        assert_eq!(hex, "#2F80ED");
        assert_eq!(parse_hex_color(&hex), Some((0x2F, 0x80, 0xED)));
    }

    #[test]
    fn test_with_alpha_suffixes() {
        assert_eq!(with_alpha("#687076", 0x40), "#68707640");
        assert_eq!(with_alpha("#687076", 0x80), "#68707680");
    }

    #[test]
    fn test_theme_lookup() {
        assert_eq!(get_theme(ThemeName::Light).name, ThemeName::Light);
        assert_eq!(get_theme(ThemeName::Dark).name, ThemeName::Dark);
        assert_eq!(all_themes().len(), 2);
    }

    #[test]
    fn test_is_dark() {
        assert!(!light_theme().is_dark());
        assert!(dark_theme().is_dark());
    }

    #[test]
    fn test_derived_colors() {
        let theme = light_theme();
        assert_eq!(theme.border(), "#68707640");
        assert_eq!(theme.placeholder(), "#68707680");
    }

    #[test]
    fn test_theme_name_from_str() {
        assert_eq!("dark".parse::<ThemeName>(), Ok(ThemeName::Dark));
        assert_eq!("LIGHT".parse::<ThemeName>(), Ok(ThemeName::Light));
        assert!("dim".parse::<ThemeName>().is_err());
    }

    #[test]
    fn test_theme_state_resolution() {
        let mut state = ThemeState::new();
        assert_eq!(state.resolve(ThemeName::Dark).name, ThemeName::Dark);

        state.pin(ThemeName::Light);
        assert_eq!(state.resolve(ThemeName::Dark).name, ThemeName::Light);

        state.follow_system();
        assert_eq!(state.resolve(ThemeName::Dark).name, ThemeName::Dark);
    }

    #[test]
    fn test_theme_serialization() {
        let theme = dark_theme();
        let json = serde_json::to_string(&theme).unwrap();
        let parsed: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(theme, parsed);
    }
}

//! Typography system for LinkUp
//!
//! Font sizes, weights, and line heights for the text roles the screens use,
//! plus a variant-to-style mapping for the `Text` component.

use serde::{Deserialize, Serialize};

/// Font size scale in pixels
pub mod font_size {
    /// Screen headers (24px)
    pub const HEADER: f32 = 24.0;
    /// Sub-headers under screen titles (18px)
    pub const SUB_HEADER: f32 = 18.0;
    /// Body copy and input text (14px)
    pub const BODY: f32 = 14.0;
    /// Primary button labels (16px)
    pub const BUTTON: f32 = 16.0;
    /// Captions, hints, inline errors (12px)
    pub const CAPTION: f32 = 12.0;
    /// Smallest legible text (12px)
    pub const SMALL: f32 = 12.0;
}

/// Line heights in pixels
pub mod line_height {
    /// Header line height (32px)
    pub const HEADER: f32 = 32.0;
    /// Sub-header line height (26px)
    pub const SUB_HEADER: f32 = 26.0;
    /// Body line height (22px)
    pub const BODY: f32 = 22.0;
    /// Button line height (24px)
    pub const BUTTON: f32 = 24.0;
    /// Caption line height (18px)
    pub const CAPTION: f32 = 18.0;
}

/// Font weights
pub mod font_weight {
    /// Regular (400)
    pub const REGULAR: u16 = 400;
    /// Medium (500)
    pub const MEDIUM: u16 = 500;
    /// Semi-bold (600)
    pub const SEMI_BOLD: u16 = 600;
    /// Bold (700)
    pub const BOLD: u16 = 700;
}

/// A typography style definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub font_size: f32,
    /// Font weight (400, 500, 600, 700)
    pub font_weight: u16,
    /// Line height in pixels
    pub line_height: f32,
}

impl TextStyle {
    /// Create a new text style
    pub fn new(font_size: f32, font_weight: u16, line_height: f32) -> Self {
        Self { font_size, font_weight, line_height }
    }

    /// Override the weight
    pub fn with_weight(mut self, weight: u16) -> Self {
        self.font_weight = weight;
        self
    }
}

/// Text roles used across the screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TypographyVariant {
    /// Screen header ("Welcome Back 👋")
    Header,
    /// Sub-header under the screen title
    SubHeader,
    /// Body copy and input text
    #[default]
    Body,
    /// Input labels
    Label,
    /// Primary button labels
    Button,
    /// Captions, dividers, dropdown pills
    Caption,
    /// Inline validation errors under inputs
    ErrorText,
    /// Tappable links ("Sign up", "Forgot Password?")
    Link,
}

impl TypographyVariant {
    /// Get the text style for this variant
    pub fn style(&self) -> TextStyle {
        match self {
            Self::Header => {
                TextStyle::new(font_size::HEADER, font_weight::BOLD, line_height::HEADER)
            }
            Self::SubHeader => {
                TextStyle::new(font_size::SUB_HEADER, font_weight::REGULAR, line_height::SUB_HEADER)
            }
            Self::Body => TextStyle::new(font_size::BODY, font_weight::REGULAR, line_height::BODY),
            Self::Label => TextStyle::new(font_size::BODY, font_weight::MEDIUM, line_height::BODY),
            Self::Button => {
                TextStyle::new(font_size::BUTTON, font_weight::SEMI_BOLD, line_height::BUTTON)
            }
            Self::Caption => {
                TextStyle::new(font_size::CAPTION, font_weight::MEDIUM, line_height::CAPTION)
            }
            Self::ErrorText => {
                TextStyle::new(font_size::CAPTION, font_weight::REGULAR, line_height::CAPTION)
            }
            Self::Link => TextStyle::new(font_size::BODY, font_weight::SEMI_BOLD, line_height::BODY),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_style() {
        let style = TypographyVariant::Header.style();
        assert_eq!(style.font_size, 24.0);
        assert_eq!(style.font_weight, font_weight::BOLD);
        assert_eq!(style.line_height, 32.0);
    }

    #[test]
    fn test_button_style() {
        let style = TypographyVariant::Button.style();
        assert_eq!(style.font_size, 16.0);
        assert_eq!(style.line_height, 24.0);
    }

    #[test]
    fn test_error_text_is_caption_sized() {
        assert_eq!(TypographyVariant::ErrorText.style().font_size, font_size::CAPTION);
    }

    #[test]
    fn test_with_weight_override() {
        let style = TypographyVariant::Body.style().with_weight(font_weight::BOLD);
        assert_eq!(style.font_weight, font_weight::BOLD);
        assert_eq!(style.font_size, font_size::BODY);
    }

    #[test]
    fn test_variant_serialization() {
        let json = serde_json::to_string(&TypographyVariant::SubHeader).unwrap();
        assert_eq!(json, "\"sub-header\"");
    }
}

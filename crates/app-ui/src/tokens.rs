//! Design tokens for LinkUp
//!
//! Spacing, sizing, radius, shadow, and layering constants shared by the
//! screens and the component library.

use serde::{Deserialize, Serialize};

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale in pixels
pub mod spacing {
    /// 4px - Extra small
    pub const XS: f32 = 4.0;
    /// 8px - Small
    pub const SM: f32 = 8.0;
    /// 12px - Medium
    pub const MD: f32 = 12.0;
    /// 16px - Large
    pub const LG: f32 = 16.0;
    /// 20px - Extra large
    pub const XL: f32 = 20.0;
    /// 24px - 2x large
    pub const XXL: f32 = 24.0;
    /// 32px - 3x large
    pub const XXXL: f32 = 32.0;

    /// Horizontal screen padding (24px)
    pub const SCREEN_X: f32 = XXL;
    /// Top screen padding above the language pill (60px)
    pub const SCREEN_TOP: f32 = 60.0;
    /// Bottom screen padding (40px)
    pub const SCREEN_BOTTOM: f32 = 40.0;
    /// Vertical margin around section dividers (32px)
    pub const SECTION: f32 = XXXL;
}

// =============================================================================
// Sizing Tokens
// =============================================================================

/// Size tokens for component dimensions
pub mod sizing {
    /// Text input height (56px)
    pub const INPUT_HEIGHT: f32 = 56.0;
    /// Primary button height (56px)
    pub const BUTTON_HEIGHT: f32 = 56.0;
    /// Tab bar height (70px)
    pub const TAB_BAR_HEIGHT: f32 = 70.0;
    /// Tab bar top padding (10px)
    pub const TAB_BAR_PADDING_TOP: f32 = 10.0;
    /// Tab bar icon size (28px)
    pub const TAB_ICON: f32 = 28.0;
    /// Provider button icon size (24px)
    pub const PROVIDER_ICON: f32 = 24.0;
    /// Auth screen logo (120px square)
    pub const LOGO: f32 = 120.0;
    /// Terms checkbox outer box (20px)
    pub const CHECKBOX: f32 = 20.0;
    /// Terms checkbox inner fill (10px)
    pub const CHECKBOX_INNER: f32 = 10.0;
    /// Minimum width of the language pill (120px)
    pub const LANGUAGE_PILL_MIN_WIDTH: f32 = 120.0;
    /// Minimum width of the language dropdown (140px)
    pub const LANGUAGE_DROPDOWN_MIN_WIDTH: f32 = 140.0;
}

// =============================================================================
// Radius Tokens
// =============================================================================

/// Corner radii in pixels
pub mod radius {
    /// Inputs and primary buttons (16px)
    pub const FIELD: f32 = 16.0;
    /// Dropdown panels (12px)
    pub const DROPDOWN: f32 = 12.0;
    /// Language pill (20px)
    pub const PILL: f32 = 20.0;
    /// Checkbox outer box (6px)
    pub const CHECKBOX: f32 = 6.0;
    /// Checkbox inner fill (3px)
    pub const CHECKBOX_INNER: f32 = 3.0;
}

// =============================================================================
// Shadows
// =============================================================================

/// A drop shadow definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    /// Horizontal offset
    pub offset_x: f32,
    /// Vertical offset
    pub offset_y: f32,
    /// Shadow opacity (0.0 - 1.0)
    pub opacity: f32,
    /// Blur radius
    pub blur: f32,
    /// Android elevation
    pub elevation: u8,
}

/// Shadow presets
pub mod shadows {
    use super::Shadow;

    /// Floating dropdown shadow
    pub fn dropdown() -> Shadow {
        Shadow { offset_x: 0.0, offset_y: 2.0, opacity: 0.1, blur: 4.0, elevation: 5 }
    }

    /// Raised button shadow
    pub fn button() -> Shadow {
        Shadow { offset_x: 0.0, offset_y: 2.0, opacity: 0.1, blur: 4.0, elevation: 3 }
    }
}

// =============================================================================
// Layering
// =============================================================================

/// Z-index layers
pub mod z_index {
    /// Base content
    pub const BASE: i32 = 0;
    /// Language dropdown over the form
    pub const DROPDOWN: i32 = 10;
    /// Blocking alerts and acknowledgments
    pub const ALERT: i32 = 100;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_dimensions_match_screens() {
        assert_eq!(sizing::INPUT_HEIGHT, 56.0);
        assert_eq!(sizing::BUTTON_HEIGHT, 56.0);
        assert_eq!(radius::FIELD, 16.0);
    }

    #[test]
    fn test_tab_bar_dimensions() {
        assert_eq!(sizing::TAB_BAR_HEIGHT, 70.0);
        assert_eq!(sizing::TAB_ICON, 28.0);
    }

    #[test]
    fn test_shadow_presets() {
        assert_eq!(shadows::dropdown().elevation, 5);
        assert_eq!(shadows::button().elevation, 3);
    }

    #[test]
    fn test_layer_ordering() {
        assert!(z_index::BASE < z_index::DROPDOWN);
        assert!(z_index::DROPDOWN < z_index::ALERT);
    }
}

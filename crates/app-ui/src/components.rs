//! UI component library for LinkUp
//!
//! Components are Rust structs with serializable properties that the host
//! shell renders. Each component provides type-safe props with builder
//! methods and theme-aware computed styles; the screens assemble them into
//! [`Element`] trees.

use crate::theme::{with_alpha, Color, Theme};
use crate::tokens::{radius, sizing};
use crate::typography::TypographyVariant;
use serde::{Deserialize, Serialize};

// =============================================================================
// Common Types
// =============================================================================

/// Event handler callback identifier resolved by the host shell
pub type EventHandler = String;

/// Spacing values (margin, padding)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Spacing {
    /// Uniform spacing on all sides
    Uniform(f32),
    /// Vertical and horizontal spacing
    Symmetric {
        /// Vertical spacing
        vertical: f32,
        /// Horizontal spacing
        horizontal: f32,
    },
    /// Individual spacing per side
    Individual {
        /// Top spacing
        top: f32,
        /// Right spacing
        right: f32,
        /// Bottom spacing
        bottom: f32,
        /// Left spacing
        left: f32,
    },
}

impl Default for Spacing {
    fn default() -> Self {
        Spacing::Uniform(0.0)
    }
}

impl Spacing {
    /// Create uniform spacing
    pub fn uniform(value: f32) -> Self {
        Spacing::Uniform(value)
    }

    /// Create symmetric spacing
    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Spacing::Symmetric { vertical, horizontal }
    }

    /// Create individual spacing
    pub fn individual(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Spacing::Individual { top, right, bottom, left }
    }
}

/// Cross-axis alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Stretch to fill
    #[default]
    Stretch,
    /// Align to start
    Start,
    /// Align to center
    Center,
    /// Align to end
    End,
}

/// Main-axis distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    /// Start (default)
    #[default]
    Start,
    /// Center
    Center,
    /// End
    End,
    /// Space between
    SpaceBetween,
}

/// Flex direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlexDirection {
    /// Row (horizontal)
    Row,
    /// Column (vertical)
    #[default]
    Column,
}

/// Accessibility properties
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccessibilityProps {
    /// Accessible label for screen readers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// ARIA role
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Whether the element is disabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

/// A node in a rendered component tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    /// Layout container
    Container(Container),
    /// Text run
    Text(Text),
    /// Text input
    Input(Input),
    /// Button
    Button(Button),
    /// Checkbox
    Checkbox(Checkbox),
    /// Icon
    Icon(Icon),
    /// Bitmap image
    Image(Image),
    /// Horizontal rule with optional inline label
    Divider(Divider),
}

// =============================================================================
// Container
// =============================================================================

/// Layout container with flex properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Container {
    /// Layout direction
    pub direction: FlexDirection,
    /// Main-axis distribution
    pub justify: JustifyContent,
    /// Cross-axis alignment
    pub align: Alignment,
    /// Gap between children
    pub gap: f32,
    /// Inner padding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Spacing>,
    /// Background color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    /// Stacking layer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
    /// Child elements
    pub children: Vec<Element>,
}

impl Container {
    /// Create an empty column container
    pub fn column() -> Self {
        Self::default()
    }

    /// Create an empty row container
    pub fn row() -> Self {
        Self { direction: FlexDirection::Row, ..Self::default() }
    }

    /// Set main-axis distribution
    pub fn with_justify(mut self, justify: JustifyContent) -> Self {
        self.justify = justify;
        self
    }

    /// Set cross-axis alignment
    pub fn with_align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Set the gap between children
    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    /// Set inner padding
    pub fn with_padding(mut self, padding: Spacing) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Set background color
    pub fn with_background(mut self, color: impl Into<Color>) -> Self {
        self.background = Some(color.into());
        self
    }

    /// Set stacking layer
    pub fn with_z_index(mut self, z: i32) -> Self {
        self.z_index = Some(z);
        self
    }

    /// Append a child element
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Append several child elements
    pub fn with_children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }
}

// =============================================================================
// Text
// =============================================================================

/// Text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Left aligned
    #[default]
    Left,
    /// Centered
    Center,
    /// Right aligned
    Right,
}

/// Typography component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    /// Text content
    pub content: String,
    /// Typography role
    pub variant: TypographyVariant,
    /// Color override (defaults to the theme text color)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Alignment
    pub align: TextAlign,
    /// Press handler for tappable runs ("Sign up", "Forgot Password?")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_press: Option<EventHandler>,
}

impl Text {
    /// Create body text
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            variant: TypographyVariant::Body,
            color: None,
            align: TextAlign::Left,
            on_press: None,
        }
    }

    /// Set the typography role
    pub fn with_variant(mut self, variant: TypographyVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the text color
    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the alignment
    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Make the run tappable
    pub fn on_press(mut self, handler: impl Into<String>) -> Self {
        self.on_press = Some(handler.into());
        self
    }
}

// =============================================================================
// Input
// =============================================================================

/// Input content types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    /// Plain text
    #[default]
    Text,
    /// Email address (email keyboard, no auto-capitalize)
    Email,
    /// Password (masked entry)
    Password,
}

/// Text input component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Input {
    /// Content type
    pub input_type: InputType,
    /// Current value
    pub value: String,
    /// Placeholder text
    pub placeholder: String,
    /// Label rendered above the field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Inline error rendered under the field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Change handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_change: Option<EventHandler>,
    /// Accessibility
    pub accessibility: AccessibilityProps,
}

/// Resolved input colors and metrics for the active theme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputStyles {
    /// Field height
    pub height: f32,
    /// Corner radius
    pub border_radius: f32,
    /// Border color
    pub border_color: Color,
    /// Field background
    pub background: Color,
    /// Entered text color
    pub text_color: Color,
    /// Placeholder color
    pub placeholder_color: Color,
    /// Whether glyphs are masked
    pub secure: bool,
}

impl Input {
    /// Create a plain text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an email input
    pub fn email() -> Self {
        Self { input_type: InputType::Email, ..Self::default() }
    }

    /// Create a masked password input
    pub fn password() -> Self {
        Self { input_type: InputType::Password, ..Self::default() }
    }

    /// Set the current value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the placeholder
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the inline error
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Set the change handler
    pub fn on_change(mut self, handler: impl Into<String>) -> Self {
        self.on_change = Some(handler.into());
        self
    }

    /// Resolve colors and metrics against a theme
    pub fn computed_styles(&self, theme: &Theme) -> InputStyles {
        InputStyles {
            height: sizing::INPUT_HEIGHT,
            border_radius: radius::FIELD,
            border_color: theme.border(),
            background: theme.colors.card.clone(),
            text_color: theme.colors.text.clone(),
            placeholder_color: theme.placeholder(),
            secure: self.input_type == InputType::Password,
        }
    }
}

// =============================================================================
// Button
// =============================================================================

/// Button style variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Solid tinted background (primary actions)
    #[default]
    Solid,
    /// Outlined with no fill (provider buttons)
    Outline,
}

/// Button component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    /// Button label
    pub label: String,
    /// Style variant
    pub variant: ButtonVariant,
    /// Whether the control is non-interactive
    pub disabled: bool,
    /// Press handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_press: Option<EventHandler>,
    /// Leading icon name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Accessibility
    pub accessibility: AccessibilityProps,
}

/// Resolved button colors and metrics for the active theme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonStyles {
    /// Button height
    pub height: f32,
    /// Corner radius
    pub border_radius: f32,
    /// Fill color (None for outline buttons)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    /// Border color (None for solid buttons)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    /// Label color
    pub text_color: Color,
}

impl Button {
    /// Create a solid button
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::Solid,
            disabled: false,
            on_press: None,
            icon: None,
            accessibility: AccessibilityProps::default(),
        }
    }

    /// Create an outline button
    pub fn outline(label: impl Into<String>) -> Self {
        Self { variant: ButtonVariant::Outline, ..Self::new(label) }
    }

    /// Set the disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self.accessibility.disabled = Some(disabled);
        self
    }

    /// Set the press handler
    pub fn on_press(mut self, handler: impl Into<String>) -> Self {
        self.on_press = Some(handler.into());
        self
    }

    /// Set a leading icon
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Resolve colors and metrics against a theme.
    ///
    /// A disabled solid button renders the washed-out fill the signup screen
    /// uses while the terms are unaccepted.
    pub fn computed_styles(&self, theme: &Theme) -> ButtonStyles {
        match self.variant {
            ButtonVariant::Solid => {
                if self.disabled {
                    ButtonStyles {
                        height: sizing::BUTTON_HEIGHT,
                        border_radius: radius::FIELD,
                        background: Some(with_alpha(&theme.colors.icon, 0x40)),
                        border_color: None,
                        text_color: with_alpha(&theme.colors.icon, 0x80),
                    }
                } else {
                    ButtonStyles {
                        height: sizing::BUTTON_HEIGHT,
                        border_radius: radius::FIELD,
                        background: Some(theme.colors.tint.clone()),
                        border_color: None,
                        text_color: "#FFFFFF".to_string(),
                    }
                }
            }
            ButtonVariant::Outline => ButtonStyles {
                height: sizing::BUTTON_HEIGHT,
                border_radius: radius::FIELD,
                background: None,
                border_color: Some(theme.border()),
                text_color: theme.colors.text.clone(),
            },
        }
    }
}

// =============================================================================
// Checkbox
// =============================================================================

/// Checkbox component (the signup terms control)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Checkbox {
    /// Whether the box is checked
    pub checked: bool,
    /// Label rendered next to the box
    pub label: String,
    /// Toggle handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_toggle: Option<EventHandler>,
    /// Accessibility
    pub accessibility: AccessibilityProps,
}

impl Checkbox {
    /// Create an unchecked checkbox
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), ..Self::default() }
    }

    /// Set the checked state
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Set the toggle handler
    pub fn on_toggle(mut self, handler: impl Into<String>) -> Self {
        self.on_toggle = Some(handler.into());
        self
    }
}

// =============================================================================
// Icon and Image
// =============================================================================

/// Icon component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icon {
    /// Icon name in the host icon set
    pub name: String,
    /// Size in pixels
    pub size: f32,
    /// Color
    pub color: Color,
}

impl Icon {
    /// Create an icon
    pub fn new(name: impl Into<String>, size: f32, color: impl Into<Color>) -> Self {
        Self { name: name.into(), size, color: color.into() }
    }
}

/// Bitmap image component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Asset path
    pub source: String,
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl Image {
    /// Create an image
    pub fn new(source: impl Into<String>, width: f32, height: f32) -> Self {
        Self { source: source.into(), width, height }
    }
}

// =============================================================================
// Divider
// =============================================================================

/// Horizontal rule, optionally with a centered inline label
/// ("or continue with")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Divider {
    /// Inline label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Divider {
    /// Create a plain divider
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a labeled divider
    pub fn labeled(label: impl Into<String>) -> Self {
        Self { label: Some(label.into()) }
    }
}

//! User interface for LinkUp
//!
//! This crate provides the UI layer: the component library, screens,
//! navigation, theming, and design system primitives. Components are
//! serializable trees consumed by the host shell; behavior stays in Rust.
//!
//! # Modules
//!
//! - [`theme`] - Light/dark themes and color helpers
//! - [`tokens`] - Design tokens (spacing, sizing, radii, shadows)
//! - [`typography`] - Font scale and text styles
//! - [`components`] - UI component library
//! - [`navigation`] - Routes, history stack, tabs
//! - [`animation`] - Tab bar focus springs
//! - [`screens`] - Login, signup, and the gated tab area
//!
//! # Example
//!
//! ```rust
//! use app_ui::navigation::{Route, SharedNavigation};
//! use app_ui::screens::LoginScreen;
//! use app_ui::theme::{get_theme, ThemeName};
//!
//! let nav = SharedNavigation::new();
//! nav.replace(Route::Login);
//!
//! let mut screen = LoginScreen::new();
//! screen.set_email("a@b.com");
//! let tree = screen.view(&get_theme(ThemeName::Dark));
//! let _ = serde_json::to_string(&tree).unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod animation;
pub mod components;
pub mod navigation;
pub mod screens;
pub mod theme;
pub mod tokens;
pub mod typography;

// Re-export commonly used types
pub use theme::{
    all_themes, dark_theme, get_theme, light_theme, with_alpha, Color, Theme, ThemeColors,
    ThemeName, ThemeState,
};

pub use tokens::{radius, shadows, sizing, spacing, z_index, Shadow};

pub use typography::{font_size, font_weight, line_height, TextStyle, TypographyVariant};

pub use components::{
    Button, ButtonStyles, ButtonVariant, Checkbox, Container, Divider, Element, Icon, Image,
    Input, InputStyles, InputType, Text, TextAlign,
};

pub use navigation::{NavigationStack, NavigationState, Route, SharedNavigation, StackEntry, Tab};

pub use animation::{Spring, SpringConfig, TabFocusAnimation};

pub use screens::{LoginScreen, LoginSuccessAction, SignupScreen, TabArea};

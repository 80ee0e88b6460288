//! Application screens
//!
//! Each screen is a small controller: it owns its form value and transient
//! dialogs, applies edits by replacing the form wholesale, and exposes a
//! `view` that assembles the component tree for the active theme. Navigation
//! goes through [`SharedNavigation`]; the tab area additionally runs the
//! session gate on mount.

use std::sync::Arc;

use app_core::auth::{
    forgot_password_prompt, provider_login, Alert, IdentityProvider, LoginForm, LoginSubmit,
    ProviderLogin, SignupForm, SignupSubmit,
};
use app_state::{GateTask, SessionGate};
use i18n::{Language, LanguagePicker};
use serde::{Deserialize, Serialize};

use crate::animation::TabFocusAnimation;
use crate::components::{
    Button, Checkbox, Container, Divider, Element, Icon, Image, Input, JustifyContent, Spacing,
    Text, TextAlign,
};
use crate::navigation::{Route, SharedNavigation, Tab};
use crate::theme::Theme;
use crate::tokens::{sizing, spacing, z_index};
use crate::typography::TypographyVariant;

// =============================================================================
// Shared fragments
// =============================================================================

/// Path of the logo asset shown on both auth screens
pub const LOGO_ASSET: &str = "assets/logos/linkup.png";

fn language_selector(picker: &LanguagePicker, theme: &Theme) -> Element {
    let pill = Container::row()
        .with_justify(JustifyContent::SpaceBetween)
        .with_child(Element::Text(
            Text::new(picker.selected_label())
                .with_variant(TypographyVariant::Caption)
                .with_color(theme.colors.text.clone())
                .on_press("toggle_language_dropdown"),
        ))
        .with_child(Element::Text(
            Text::new("▼")
                .with_variant(TypographyVariant::Caption)
                .with_color(theme.colors.icon.clone()),
        ));

    let mut selector = Container::column()
        .with_align(crate::components::Alignment::End)
        .with_z_index(z_index::DROPDOWN)
        .with_child(Element::Container(pill));

    if picker.open {
        let items = Language::all().into_iter().map(|language| {
            Element::Text(
                Text::new(language.label())
                    .with_color(theme.colors.text.clone())
                    .on_press(format!("select_language:{}", language.code())),
            )
        });
        selector = selector.with_child(Element::Container(
            Container::column()
                .with_background(theme.colors.card.clone())
                .with_children(items),
        ));
    }

    Element::Container(selector)
}

fn screen_header(title: &str, subtitle: &str, theme: &Theme) -> Element {
    Element::Container(
        Container::column()
            .with_gap(spacing::SM)
            .with_child(Element::Text(
                Text::new(title)
                    .with_variant(TypographyVariant::Header)
                    .with_color(theme.colors.text.clone())
                    .with_align(TextAlign::Center),
            ))
            .with_child(Element::Text(
                Text::new(subtitle)
                    .with_variant(TypographyVariant::SubHeader)
                    .with_color(theme.colors.icon.clone())
                    .with_align(TextAlign::Center),
            )),
    )
}

fn logo() -> Element {
    Element::Image(Image::new(LOGO_ASSET, sizing::LOGO, sizing::LOGO))
}

fn alert_dialog(alert: &Alert, dismiss_handler: &str, theme: &Theme) -> Element {
    Element::Container(
        Container::column()
            .with_z_index(z_index::ALERT)
            .with_background(theme.colors.card.clone())
            .with_gap(spacing::MD)
            .with_child(Element::Text(
                Text::new(alert.title.clone())
                    .with_variant(TypographyVariant::Header)
                    .with_color(theme.colors.text.clone()),
            ))
            .with_child(Element::Text(
                Text::new(alert.message.clone()).with_color(theme.colors.text.clone()),
            ))
            .with_child(Element::Button(Button::new("OK").on_press(dismiss_handler))),
    )
}

fn screen_padding() -> Spacing {
    Spacing::individual(
        spacing::SCREEN_TOP,
        spacing::SCREEN_X,
        spacing::SCREEN_BOTTOM,
        spacing::SCREEN_X,
    )
}

// =============================================================================
// Login screen
// =============================================================================

/// What the login screen does after a passing submission.
///
/// The redirect into the tab area is deliberately not wired up yet; the
/// default is a no-op until product confirms the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LoginSuccessAction {
    /// Stay on the login screen
    #[default]
    Stay,
    /// Replace-navigate to a destination
    Replace(Route),
}

/// Login screen controller
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginScreen {
    /// Current form value
    pub form: LoginForm,
    /// Language dropdown state
    pub language: LanguagePicker,
    /// Pending blocking dialog
    pub alert: Option<Alert>,
    /// Configured success behavior
    pub success_action: LoginSuccessAction,
}

impl LoginScreen {
    /// Create the screen with empty fields
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the success behavior
    pub fn with_success_action(mut self, action: LoginSuccessAction) -> Self {
        self.success_action = action;
        self
    }

    /// Replace the email field
    pub fn set_email(&mut self, email: &str) {
        self.form = self.form.clone().with_email(email);
    }

    /// Replace the password field
    pub fn set_password(&mut self, password: &str) {
        self.form = self.form.clone().with_password(password);
    }

    /// Run a submission attempt.
    ///
    /// Failures block with an alert; a pass applies the configured success
    /// action and nothing else.
    pub fn submit(&mut self, nav: &SharedNavigation) {
        match self.form.submit() {
            LoginSubmit::Blocked(error) => {
                self.alert = Some(Alert::error(error));
            }
            LoginSubmit::Accepted => match self.success_action {
                LoginSuccessAction::Stay => {}
                LoginSuccessAction::Replace(route) => nav.replace(route),
            },
        }
    }

    /// Dismiss the pending alert
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Show the forgot-password prompt
    pub fn forgot_password(&mut self) {
        self.alert = Some(forgot_password_prompt());
    }

    /// Press the Google button (stub)
    pub fn google_sign_in(&self) -> ProviderLogin {
        provider_login(IdentityProvider::Google)
    }

    /// Navigate to the signup screen
    pub fn go_to_signup(&self, nav: &SharedNavigation) {
        nav.push(Route::Signup);
    }

    /// Build the component tree
    pub fn view(&self, theme: &Theme) -> Element {
        let email = Input::email()
            .with_label("Email")
            .with_placeholder("Enter your email")
            .with_value(self.form.email.clone())
            .on_change("set_email");

        let password_header = Container::row()
            .with_justify(JustifyContent::SpaceBetween)
            .with_child(Element::Text(
                Text::new("Password")
                    .with_variant(TypographyVariant::Label)
                    .with_color(theme.colors.text.clone()),
            ))
            .with_child(Element::Text(
                Text::new("Forgot Password?")
                    .with_variant(TypographyVariant::Caption)
                    .with_color(theme.colors.tint.clone())
                    .on_press("forgot_password"),
            ));

        let password = Input::password()
            .with_placeholder("Enter your password")
            .with_value(self.form.password.clone())
            .on_change("set_password");

        let form = Container::column()
            .with_gap(spacing::XL)
            .with_child(Element::Input(email))
            .with_child(Element::Container(password_header))
            .with_child(Element::Input(password))
            .with_child(Element::Button(Button::new("Login").on_press("submit")))
            .with_child(Element::Divider(Divider::labeled("or continue with")))
            .with_child(Element::Button(
                Button::outline("Continue with Google")
                    .with_icon("google")
                    .on_press("google_sign_in"),
            ));

        let footer = Container::row()
            .with_justify(JustifyContent::Center)
            .with_child(Element::Text(
                Text::new("Don't have an account? ").with_color(theme.colors.icon.clone()),
            ))
            .with_child(Element::Text(
                Text::new("Sign up")
                    .with_variant(TypographyVariant::Link)
                    .with_color(theme.colors.tint.clone())
                    .on_press("go_to_signup"),
            ));

        let mut screen = Container::column()
            .with_padding(screen_padding())
            .with_background(theme.colors.background.clone())
            .with_gap(spacing::XXXL)
            .with_child(language_selector(&self.language, theme))
            .with_child(logo())
            .with_child(screen_header(
                "Welcome Back 👋",
                "Login to continue to your account",
                theme,
            ))
            .with_child(Element::Container(form))
            .with_child(Element::Container(footer));

        if let Some(alert) = &self.alert {
            screen = screen.with_child(alert_dialog(alert, "dismiss_alert", theme));
        }

        Element::Container(screen)
    }
}

// =============================================================================
// Signup screen
// =============================================================================

/// Signup screen controller
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SignupScreen {
    /// Current form value
    pub form: SignupForm,
    /// Language dropdown state
    pub language: LanguagePicker,
    /// Pending blocking dialog for a failed rule
    pub alert: Option<Alert>,
    /// Pending success acknowledgment; navigation waits for its dismissal
    pub acknowledgment: Option<Alert>,
}

impl SignupScreen {
    /// Create the screen with empty fields
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the name field
    pub fn set_name(&mut self, name: &str) {
        self.form = self.form.clone().with_name(name);
    }

    /// Replace the email field
    pub fn set_email(&mut self, email: &str) {
        self.form = self.form.clone().with_email(email);
    }

    /// Replace the password field
    pub fn set_password(&mut self, password: &str) {
        self.form = self.form.clone().with_password(password);
    }

    /// Replace the confirmation field
    pub fn set_confirm_password(&mut self, confirm: &str) {
        self.form = self.form.clone().with_confirm_password(confirm);
    }

    /// Toggle the terms checkbox
    pub fn toggle_terms(&mut self) {
        let accepted = !self.form.accept_terms;
        self.form = self.form.clone().with_accept_terms(accepted);
    }

    /// Run a submission attempt.
    ///
    /// While the terms are unaccepted the control is non-interactive and the
    /// press is swallowed. Failures block with an alert; a pass stores the
    /// acknowledgment, which must be dismissed before any navigation.
    pub fn submit(&mut self) {
        if !self.form.submit_enabled() {
            return;
        }
        match self.form.submit() {
            SignupSubmit::Blocked(error) => {
                self.alert = Some(Alert::error(error));
            }
            SignupSubmit::Accepted(ack) => {
                self.acknowledgment = Some(ack);
            }
        }
    }

    /// Dismiss the pending error alert
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Dismiss the success acknowledgment and replace-navigate to login
    pub fn dismiss_acknowledgment(&mut self, nav: &SharedNavigation) {
        if self.acknowledgment.take().is_some() {
            nav.replace(Route::Login);
        }
    }

    /// Press the Google button (stub)
    pub fn google_sign_up(&self) -> ProviderLogin {
        provider_login(IdentityProvider::Google)
    }

    /// Build the component tree
    pub fn view(&self, theme: &Theme) -> Element {
        let name = Input::new()
            .with_label("Full Name")
            .with_placeholder("Enter your full name")
            .with_value(self.form.name.clone())
            .on_change("set_name");

        let email = Input::email()
            .with_label("Email")
            .with_placeholder("Enter your email")
            .with_value(self.form.email.clone())
            .on_change("set_email");

        let mut password = Input::password()
            .with_label("Password")
            .with_placeholder("Create a password (min. 6 characters)")
            .with_value(self.form.password.clone())
            .on_change("set_password");
        if let Some(hint) = self.form.password_hint() {
            password = password.with_error(hint.to_string());
        }

        let mut confirm = Input::password()
            .with_label("Confirm Password")
            .with_placeholder("Confirm your password")
            .with_value(self.form.confirm_password.clone())
            .on_change("set_confirm_password");
        if let Some(hint) = self.form.confirmation_hint() {
            confirm = confirm.with_error(hint.to_string());
        }

        let terms = Checkbox::new("I agree to the Terms of Service and Privacy Policy")
            .checked(self.form.accept_terms)
            .on_toggle("toggle_terms");

        let submit = Button::new("Create Account")
            .disabled(!self.form.submit_enabled())
            .on_press("submit");

        let form = Container::column()
            .with_gap(spacing::LG)
            .with_child(Element::Input(name))
            .with_child(Element::Input(email))
            .with_child(Element::Input(password))
            .with_child(Element::Input(confirm))
            .with_child(Element::Checkbox(terms))
            .with_child(Element::Button(submit))
            .with_child(Element::Divider(Divider::labeled("or sign up with")))
            .with_child(Element::Button(
                Button::outline("Continue with Google")
                    .with_icon("google")
                    .on_press("google_sign_up"),
            ));

        let footer = Container::row()
            .with_justify(JustifyContent::Center)
            .with_child(Element::Text(
                Text::new("Already have an account? ").with_color(theme.colors.icon.clone()),
            ))
            .with_child(Element::Text(
                Text::new("Login")
                    .with_variant(TypographyVariant::Link)
                    .with_color(theme.colors.tint.clone()),
            ));

        let mut screen = Container::column()
            .with_padding(screen_padding())
            .with_background(theme.colors.background.clone())
            .with_gap(spacing::XXXL)
            .with_child(language_selector(&self.language, theme))
            .with_child(logo())
            .with_child(screen_header("Create Account 🚀", "Sign up to get started", theme))
            .with_child(Element::Container(form))
            .with_child(Element::Container(footer));

        if let Some(alert) = &self.alert {
            screen = screen.with_child(alert_dialog(alert, "dismiss_alert", theme));
        }
        if let Some(ack) = &self.acknowledgment {
            screen = screen.with_child(alert_dialog(ack, "dismiss_acknowledgment", theme));
        }

        Element::Container(screen)
    }
}

// =============================================================================
// Tab area
// =============================================================================

/// The gated tab area: five tabs, a bar of animated buttons, and the session
/// gate check on mount.
#[derive(Debug, Clone, PartialEq)]
pub struct TabArea {
    /// Focused tab
    pub active_tab: Tab,
    animations: Vec<(Tab, TabFocusAnimation)>,
}

impl Default for TabArea {
    fn default() -> Self {
        Self::new()
    }
}

impl TabArea {
    /// Create the tab area with Home focused
    pub fn new() -> Self {
        let animations = Tab::all()
            .into_iter()
            .map(|tab| (tab, TabFocusAnimation::new(tab == Tab::Home)))
            .collect();
        Self { active_tab: Tab::Home, animations }
    }

    /// Run the session gate for this activation.
    ///
    /// Fire-and-forget: the returned handle does not need to be awaited; the
    /// redirect (if any) lands through the navigation handle.
    pub fn mount(&self, gate: &SessionGate, nav: &SharedNavigation) -> GateTask {
        gate.activate(Arc::new(nav.clone()))
    }

    /// Switch tabs, retargeting the focus animations
    pub fn switch_tab(&mut self, tab: Tab, nav: &SharedNavigation) {
        self.active_tab = tab;
        nav.switch_tab(tab);
        for (entry_tab, animation) in &mut self.animations {
            animation.set_focused(*entry_tab == tab);
        }
    }

    /// Advance all focus animations by `dt` seconds
    pub fn advance_animations(&mut self, dt: f32) {
        for (_, animation) in &mut self.animations {
            animation.advance(dt);
        }
    }

    /// The focus animation of one tab button
    pub fn animation(&self, tab: Tab) -> &TabFocusAnimation {
        self.animations
            .iter()
            .find(|(entry_tab, _)| *entry_tab == tab)
            .map(|(_, animation)| animation)
            .expect("every tab has an animation")
    }

    /// Build the tab bar (no labels, 70px, animated icon buttons)
    pub fn tab_bar(&self, theme: &Theme) -> Element {
        let buttons = Tab::all().into_iter().map(|tab| {
            let focused = tab == self.active_tab;
            let color = if focused {
                theme.colors.tint.clone()
            } else {
                theme.colors.tab_inactive.clone()
            };
            Element::Icon(Icon::new(tab.icon(), sizing::TAB_ICON, color))
        });

        Element::Container(
            Container::row()
                .with_justify(JustifyContent::SpaceBetween)
                .with_padding(Spacing::individual(sizing::TAB_BAR_PADDING_TOP, 0.0, 0.0, 0.0))
                .with_background(theme.colors.background.clone())
                .with_children(buttons),
        )
    }

    /// Build the placeholder body for the focused tab
    pub fn screen(&self, theme: &Theme) -> Element {
        let tab = self.active_tab;
        Element::Container(
            Container::column()
                .with_justify(JustifyContent::Center)
                .with_align(crate::components::Alignment::Center)
                .with_background(theme.colors.background.clone())
                .with_child(Element::Text(
                    Text::new(format!("{} {}", tab.emoji(), tab.title()))
                        .with_variant(TypographyVariant::Header)
                        .with_color(theme.colors.text.clone()),
                )),
        )
    }
}

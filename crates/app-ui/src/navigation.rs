//! Navigation system for LinkUp
//!
//! A small string-identified route set, a history stack with push/replace
//! semantics, and tab switching inside the gated tab area. The shared
//! navigation handle is the sink the session gate redirects through.
//!
//! `replace` discards the current history entry, so a gate redirect (or the
//! post-signup hop back to login) leaves nothing for back-navigation to
//! return to.

use app_state::LoginRedirect;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// =============================================================================
// Routes
// =============================================================================

/// All destinations in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    /// The gated tab area root
    #[default]
    Tabs,
    /// Login screen
    Login,
    /// Create-account screen
    Signup,
    /// Generic modal
    Modal,
}

impl Route {
    /// Get the URL path for this route
    pub fn to_path(&self) -> &'static str {
        match self {
            Route::Tabs => "/",
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::Modal => "/modal",
        }
    }

    /// Parse a path back into a route
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Route::Tabs),
            "/login" => Some(Route::Login),
            "/signup" => Some(Route::Signup),
            "/modal" => Some(Route::Modal),
            _ => None,
        }
    }

    /// Check if this route sits behind the session gate
    pub fn requires_auth(&self) -> bool {
        matches!(self, Route::Tabs)
    }

    /// Display title for this route
    pub fn title(&self) -> &'static str {
        match self {
            Route::Tabs => "LinkUp",
            Route::Login => "Log In",
            Route::Signup => "Sign Up",
            Route::Modal => "Modal",
        }
    }
}

// =============================================================================
// Tabs
// =============================================================================

/// Tabs of the gated tab area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Home feed
    #[default]
    Home,
    /// Search
    Search,
    /// Trending
    Trending,
    /// Chat
    Chat,
    /// Profile
    Profile,
}

impl Tab {
    /// Icon name for the tab bar
    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Search => "search",
            Tab::Trending => "flame",
            Tab::Chat => "chatbubble",
            Tab::Profile => "person",
        }
    }

    /// Display title
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Search => "Search",
            Tab::Trending => "Trending",
            Tab::Chat => "Chat",
            Tab::Profile => "Profile",
        }
    }

    /// Emoji for the placeholder screen body
    pub fn emoji(&self) -> &'static str {
        match self {
            Tab::Home => "🏠",
            Tab::Search => "🔍",
            Tab::Trending => "🔥",
            Tab::Chat => "💬",
            Tab::Profile => "👤",
        }
    }

    /// All tabs in bar order
    pub fn all() -> [Tab; 5] {
        [Tab::Home, Tab::Search, Tab::Trending, Tab::Chat, Tab::Profile]
    }
}

// =============================================================================
// Navigation Stack
// =============================================================================

/// A navigation history entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackEntry {
    /// The route
    pub route: Route,
    /// Unique key for this entry
    pub key: String,
}

impl StackEntry {
    /// Create a new stack entry
    pub fn new(route: Route) -> Self {
        Self { route, key: uuid::Uuid::new_v4().to_string() }
    }
}

/// Navigation history stack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationStack {
    /// Stack entries (bottom to top)
    entries: Vec<StackEntry>,
}

impl NavigationStack {
    /// Create a new stack with a root route
    pub fn new(root: Route) -> Self {
        Self { entries: vec![StackEntry::new(root)] }
    }

    /// Push a route onto the stack
    pub fn push(&mut self, route: Route) {
        self.entries.push(StackEntry::new(route));
    }

    /// Pop the top route (returns true if popped, false if at root)
    pub fn pop(&mut self) -> bool {
        if self.entries.len() > 1 {
            self.entries.pop();
            true
        } else {
            false
        }
    }

    /// Replace the top route, discarding the current entry.
    ///
    /// Back-navigation cannot return to the replaced entry afterwards.
    pub fn replace(&mut self, route: Route) {
        if let Some(last) = self.entries.last_mut() {
            *last = StackEntry::new(route);
        }
    }

    /// Reset to a new root
    pub fn reset(&mut self, route: Route) {
        self.entries = vec![StackEntry::new(route)];
    }

    /// Get the current (top) route
    pub fn current(&self) -> Route {
        self.entries.last().expect("Stack is never empty").route
    }

    /// Check if back-navigation is possible
    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    /// Get stack depth
    pub fn depth(&self) -> usize {
        self.entries.len()
    }
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new(Route::Tabs)
    }
}

// =============================================================================
// Navigation State
// =============================================================================

/// Complete navigation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationState {
    /// History stack, rooted at the tab area
    pub stack: NavigationStack,
    /// Active tab within the tab area
    pub active_tab: Tab,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self { stack: NavigationStack::default(), active_tab: Tab::Home }
    }
}

impl NavigationState {
    /// Create the initial navigation state
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current route
    pub fn current_route(&self) -> Route {
        self.stack.current()
    }

    /// Push a route
    pub fn push(&mut self, route: Route) {
        self.stack.push(route);
    }

    /// Replace the current route, discarding its history entry
    pub fn replace(&mut self, route: Route) {
        self.stack.replace(route);
    }

    /// Go back (returns false at the root)
    pub fn go_back(&mut self) -> bool {
        self.stack.pop()
    }

    /// Switch the active tab (no history entry is created)
    pub fn switch_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }
}

// =============================================================================
// Shared handle
// =============================================================================

/// Cloneable handle to the navigation state shared with background tasks
#[derive(Clone, Default)]
pub struct SharedNavigation {
    state: Arc<RwLock<NavigationState>>,
}

impl SharedNavigation {
    /// Create a handle over the initial navigation state
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the current route
    pub fn current_route(&self) -> Route {
        self.state.read().current_route()
    }

    /// Snapshot the active tab
    pub fn active_tab(&self) -> Tab {
        self.state.read().active_tab
    }

    /// Push a route
    pub fn push(&self, route: Route) {
        self.state.write().push(route);
    }

    /// Replace the current route
    pub fn replace(&self, route: Route) {
        self.state.write().replace(route);
    }

    /// Go back
    pub fn go_back(&self) -> bool {
        self.state.write().go_back()
    }

    /// Switch the active tab
    pub fn switch_tab(&self, tab: Tab) {
        self.state.write().switch_tab(tab);
    }

    /// Check if back-navigation is possible
    pub fn can_go_back(&self) -> bool {
        self.state.read().stack.can_go_back()
    }
}

impl LoginRedirect for SharedNavigation {
    fn redirect_to_login(&self) {
        self.replace(Route::Login);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Tabs.to_path(), "/");
        assert_eq!(Route::Login.to_path(), "/login");
        assert_eq!(Route::Signup.to_path(), "/signup");
        assert_eq!(Route::from_path("/login"), Some(Route::Login));
        assert_eq!(Route::from_path("/nope"), None);
    }

    #[test]
    fn test_only_tab_area_requires_auth() {
        assert!(Route::Tabs.requires_auth());
        assert!(!Route::Login.requires_auth());
        assert!(!Route::Signup.requires_auth());
        assert!(!Route::Modal.requires_auth());
    }

    #[test]
    fn test_tab_icons() {
        assert_eq!(Tab::Home.icon(), "home");
        assert_eq!(Tab::Trending.icon(), "flame");
        assert_eq!(Tab::Chat.icon(), "chatbubble");
        assert_eq!(Tab::all().len(), 5);
    }

    #[test]
    fn test_stack_push_pop() {
        let mut stack = NavigationStack::new(Route::Tabs);
        assert_eq!(stack.depth(), 1);
        assert!(!stack.can_go_back());

        stack.push(Route::Login);
        assert_eq!(stack.current(), Route::Login);
        assert!(stack.can_go_back());

        assert!(stack.pop());
        assert_eq!(stack.current(), Route::Tabs);
        assert!(!stack.pop());
    }

    #[test]
    fn test_replace_discards_history_entry() {
        let mut stack = NavigationStack::new(Route::Tabs);
        stack.replace(Route::Login);

        assert_eq!(stack.current(), Route::Login);
        assert_eq!(stack.depth(), 1);
        // The tab area entry is gone; back cannot return to it.
        assert!(!stack.pop());
        assert_eq!(stack.current(), Route::Login);
    }

    #[test]
    fn test_tab_switch_keeps_history_flat() {
        let mut state = NavigationState::new();
        state.switch_tab(Tab::Chat);

        assert_eq!(state.active_tab, Tab::Chat);
        assert_eq!(state.current_route(), Route::Tabs);
        assert_eq!(state.stack.depth(), 1);
    }

    #[test]
    fn test_shared_navigation_redirect_to_login() {
        let nav = SharedNavigation::new();
        assert_eq!(nav.current_route(), Route::Tabs);

        nav.redirect_to_login();

        assert_eq!(nav.current_route(), Route::Login);
        assert!(!nav.can_go_back());
    }

    #[test]
    fn test_shared_navigation_is_shared() {
        let nav = SharedNavigation::new();
        let clone = nav.clone();

        clone.push(Route::Signup);
        assert_eq!(nav.current_route(), Route::Signup);
    }

    #[test]
    fn test_navigation_state_serialization() {
        let state = NavigationState::new();
        let json = serde_json::to_string(&state).unwrap();
        let parsed: NavigationState = serde_json::from_str(&json).unwrap();
        assert_eq!(state.active_tab, parsed.active_tab);
        assert_eq!(state.current_route(), parsed.current_route());
    }
}

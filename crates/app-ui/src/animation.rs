//! Spring animation for the tab bar
//!
//! Each tab button lifts and grows while focused: vertical offset and scale
//! are driven by a damped spring toward one of two target states, re-aimed
//! every time the focus flag flips. The motion only has to settle at the
//! rest state within bounded time; it is not required to be bit-exact.

use serde::{Deserialize, Serialize};

/// Damped spring parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    /// Spring stiffness
    pub stiffness: f32,
    /// Damping coefficient
    pub damping: f32,
    /// Attached mass
    pub mass: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self { stiffness: 100.0, damping: 12.0, mass: 1.0 }
    }
}

/// Thresholds under which a spring snaps to rest
const REST_DISPLACEMENT: f32 = 0.01;
const REST_VELOCITY: f32 = 0.01;

/// A single animated value driven by a damped spring
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spring {
    /// Current value
    pub value: f32,
    /// Current velocity
    pub velocity: f32,
    /// Target value
    pub target: f32,
    /// Spring parameters
    pub config: SpringConfig,
}

impl Spring {
    /// Create a spring at rest at `value`
    pub fn new(value: f32) -> Self {
        Self { value, velocity: 0.0, target: value, config: SpringConfig::default() }
    }

    /// Create a spring with custom parameters
    pub fn with_config(value: f32, config: SpringConfig) -> Self {
        Self { config, ..Self::new(value) }
    }

    /// Re-aim the spring; velocity carries over so retargeting mid-flight
    /// stays continuous.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Advance the simulation by `dt` seconds (semi-implicit Euler).
    pub fn step(&mut self, dt: f32) {
        let displacement = self.value - self.target;
        let acceleration =
            (-self.config.stiffness * displacement - self.config.damping * self.velocity)
                / self.config.mass;

        self.velocity += acceleration * dt;
        self.value += self.velocity * dt;

        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }

    /// Whether the spring is at rest at its target
    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < REST_DISPLACEMENT
            && self.velocity.abs() < REST_VELOCITY
    }
}

// =============================================================================
// Tab focus animation
// =============================================================================

/// Vertical lift of a focused tab icon
pub const FOCUSED_OFFSET: f32 = -12.0;
/// Scale of a focused tab icon
pub const FOCUSED_SCALE: f32 = 1.15;
/// Offset at rest
pub const REST_OFFSET: f32 = 0.0;
/// Scale at rest
pub const REST_SCALE: f32 = 1.0;

/// The animated transform of one tab button
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TabFocusAnimation {
    offset: Spring,
    scale: Spring,
    focused: bool,
}

impl Default for TabFocusAnimation {
    fn default() -> Self {
        Self::new(false)
    }
}

impl TabFocusAnimation {
    /// Create an animation in the given focus state, already settled there
    pub fn new(focused: bool) -> Self {
        let (offset, scale) = if focused {
            (FOCUSED_OFFSET, FOCUSED_SCALE)
        } else {
            (REST_OFFSET, REST_SCALE)
        };
        Self { offset: Spring::new(offset), scale: Spring::new(scale), focused }
    }

    /// Whether the button currently has focus
    pub fn focused(&self) -> bool {
        self.focused
    }

    /// Flip focus; re-aims both springs only when the flag actually changes.
    pub fn set_focused(&mut self, focused: bool) {
        if self.focused == focused {
            return;
        }
        self.focused = focused;
        if focused {
            self.offset.set_target(FOCUSED_OFFSET);
            self.scale.set_target(FOCUSED_SCALE);
        } else {
            self.offset.set_target(REST_OFFSET);
            self.scale.set_target(REST_SCALE);
        }
    }

    /// Advance both springs by `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        self.offset.step(dt);
        self.scale.step(dt);
    }

    /// Current (translate_y, scale) transform
    pub fn transform(&self) -> (f32, f32) {
        (self.offset.value, self.scale.value)
    }

    /// Whether both springs are at rest
    pub fn is_settled(&self) -> bool {
        self.offset.is_settled() && self.scale.is_settled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;
    const MAX_FRAMES: usize = 600; // 10 seconds is far beyond any real settle

    fn settle(animation: &mut TabFocusAnimation) -> usize {
        for frame in 0..MAX_FRAMES {
            if animation.is_settled() {
                return frame;
            }
            animation.advance(FRAME);
        }
        panic!("animation did not settle within {MAX_FRAMES} frames");
    }

    #[test]
    fn test_starts_settled_at_rest() {
        let animation = TabFocusAnimation::new(false);
        assert!(animation.is_settled());
        assert_eq!(animation.transform(), (REST_OFFSET, REST_SCALE));
    }

    #[test]
    fn test_focus_settles_at_lifted_state() {
        let mut animation = TabFocusAnimation::new(false);
        animation.set_focused(true);
        assert!(!animation.is_settled());

        settle(&mut animation);

        let (offset, scale) = animation.transform();
        assert!((offset - FOCUSED_OFFSET).abs() < 0.05);
        assert!((scale - FOCUSED_SCALE).abs() < 0.05);
    }

    #[test]
    fn test_blur_returns_to_rest() {
        let mut animation = TabFocusAnimation::new(true);
        animation.set_focused(false);

        settle(&mut animation);

        let (offset, scale) = animation.transform();
        assert!((offset - REST_OFFSET).abs() < 0.05);
        assert!((scale - REST_SCALE).abs() < 0.05);
    }

    #[test]
    fn test_retarget_mid_flight_settles() {
        let mut animation = TabFocusAnimation::new(false);
        animation.set_focused(true);

        // Interrupt the lift halfway through.
        for _ in 0..5 {
            animation.advance(FRAME);
        }
        animation.set_focused(false);

        settle(&mut animation);
        let (offset, _) = animation.transform();
        assert!((offset - REST_OFFSET).abs() < 0.05);
    }

    #[test]
    fn test_redundant_focus_is_a_no_op() {
        let mut animation = TabFocusAnimation::new(true);
        assert!(animation.is_settled());

        animation.set_focused(true);
        assert!(animation.is_settled());
    }

    #[test]
    fn test_spring_settles_within_bounded_time() {
        let mut spring = Spring::new(0.0);
        spring.set_target(100.0);

        let mut frames = 0;
        while !spring.is_settled() {
            spring.step(FRAME);
            frames += 1;
            assert!(frames < MAX_FRAMES, "spring did not settle");
        }
        assert_eq!(spring.value, 100.0);
    }
}

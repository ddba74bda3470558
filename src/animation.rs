//! Quarter-turn animation timing.

use std::f32::consts::PI;

use crate::prelude::*;

/// Degrees in one quarter turn, the unit of every animation.
pub const QUARTER_TURN: f32 = 90.0;

// Use cosine from 0.0 to PI for easing.
const EASING_FN: fn(f32) -> f32 = |x| (1.0 - (x * PI).cos()) / 2.0;

/// Animation speed presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, enum_iterator::Sequence)]
pub enum Speed {
    Slow,
    Normal,
    Fast,
}

impl Default for Speed {
    fn default() -> Self {
        Speed::Normal
    }
}

impl Speed {
    /// Degrees per second.
    pub fn angular_velocity(self) -> f32 {
        match self {
            Speed::Slow => 240.0,
            Speed::Normal => 480.0,
            Speed::Fast => 960.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Speed::Slow => "Slow",
            Speed::Normal => "Normal",
            Speed::Fast => "Fast",
        }
    }
}

impl core::str::FromStr for Speed {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Speed> {
        enum_iterator::all::<Speed>()
            .find(|speed| speed.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| anyhow::anyhow!("Unrecognized speed {}", s))
    }
}

impl std::fmt::Display for Speed {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Accumulated rotation of the move being animated.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnimationClock {
    angle: f32,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.angle = 0.0;
    }

    pub fn advance(&mut self, dt: Duration, speed: Speed) {
        self.angle += speed.angular_velocity() * dt.as_secs_f32();
        if self.angle > QUARTER_TURN {
            self.angle = QUARTER_TURN;
        }
    }

    /// Raw, uneased angle in degrees.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn is_done(&self) -> bool {
        self.angle >= QUARTER_TURN
    }

    /// Linear progress from 0.0 to 1.0.
    pub fn progress(&self) -> f32 {
        (self.angle / QUARTER_TURN).clamp(0.0, 1.0)
    }

    /// Eased angle in degrees, from 0.0 to `QUARTER_TURN`.
    pub fn eased_angle(&self) -> f32 {
        EASING_FN(self.progress()) * QUARTER_TURN
    }
}

use bevy::prelude::*;

/// Countdown attached to a depleted flower until it refills on its own.
/// Removed once the flower is reset, whether by the timer or by hand.
#[derive(Component, Debug)]
pub struct Regrowth {
    pub timer: Timer,
}

impl Regrowth {
    pub fn new(seconds: f32) -> Self {
        Self {
            timer: Timer::from_seconds(seconds, TimerMode::Once),
        }
    }

    /// Advances the countdown, returning true once it has run out.
    pub fn tick(&mut self, delta: std::time::Duration) -> bool {
        self.timer.tick(delta);
        self.timer.finished()
    }
}

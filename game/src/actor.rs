use std::rc::Rc;

use macroquad::math::Vec2;

use crate::config::Tuning;
use crate::direction::Direction;
use crate::geometry::Outline;
use crate::paths::MouthPaths;

/// Mutable per-actor state, separate from the shared outlines.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ActorState {
    /// Lower-left corner of the sprite box, y-up.
    pub(crate) position: Vec2,
    pub(crate) facing: Direction,
    pub(crate) mouth_open: bool,
    pub(crate) last_toggle: f64,
    pub(crate) direction_dirty: bool,
    /// Distance units per second.
    pub(crate) velocity: Vec2,
}

impl ActorState {
    pub(crate) fn new(position: Vec2, now: f64) -> Self {
        Self {
            position,
            facing: Direction::Right,
            mouth_open: false,
            last_toggle: now,
            direction_dirty: false,
            velocity: Vec2::ZERO,
        }
    }
}

/// A chomping sprite steered by swipes.
pub(crate) struct Actor {
    pub(crate) state: ActorState,
    paths: Rc<MouthPaths>,
    tuning: Tuning,
}

impl Actor {
    pub(crate) fn new(position: Vec2, now: f64, paths: Rc<MouthPaths>, tuning: Tuning) -> Self {
        Self {
            state: ActorState::new(position, now),
            paths,
            tuning,
        }
    }

    /// An actor whose sprite box is centered on `center`.
    pub(crate) fn centered(
        center: Vec2,
        now: f64,
        paths: Rc<MouthPaths>,
        tuning: Tuning,
    ) -> Self {
        let position = center - Vec2::splat(tuning.radius);
        Self::new(position, now, paths, tuning)
    }

    pub(crate) fn size(&self) -> Vec2 {
        Vec2::splat(2.0 * self.tuning.radius)
    }

    pub(crate) fn line_width(&self) -> f32 {
        self.tuning.line_width
    }

    /// The outline matching the current facing and mouth state.
    pub(crate) fn active_outline(&self) -> &Outline {
        self.paths.outline(self.state.facing, self.state.mouth_open)
    }

    pub(crate) fn on_swipe(&mut self, start: Vec2, end: Vec2) {
        if let Some(dir) = Direction::from_swipe(start, end) {
            self.steer(dir);
        }
    }

    pub(crate) fn steer(&mut self, dir: Direction) {
        if self.state.facing != dir {
            log::debug!("Facing {:?} -> {:?}", self.state.facing, dir);
            self.state.facing = dir;
            self.state.direction_dirty = true;
        }
    }

    /// Run the chomp cadence and restart movement after a direction change.
    pub(crate) fn tick(&mut self, now: f64) {
        let state = &mut self.state;
        if state.direction_dirty || now - state.last_toggle > self.tuning.chomp_interval {
            state.mouth_open = !state.mouth_open;
            state.last_toggle = now;
            log::trace!("Mouth open: {}", state.mouth_open);
        }
        if state.direction_dirty {
            state.velocity = state.facing.unit() * self.tuning.speed();
            state.direction_dirty = false;
            log::debug!("Moving {:?} at {:?}", state.facing, state.velocity);
        }
    }

    /// Integrate the velocity over `dt` seconds.
    pub(crate) fn advance(&mut self, dt: f32) {
        self.state.position += self.state.velocity * dt;
    }
}

#[cfg(test)]
mod tests;

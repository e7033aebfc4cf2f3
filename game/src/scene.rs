use std::rc::Rc;

use macroquad::math::Vec2;

use crate::actor::Actor;
use crate::config::Tuning;
use crate::direction::Direction;
use crate::paths::MouthPaths;
use crate::wrap::wrap;

/// Owns the actor and the screen bounds it wraps around.
pub(crate) struct Scene {
    screen: Vec2,
    tuning: Tuning,
    paths: Rc<MouthPaths>,
    actor: Option<Actor>,
}

impl Scene {
    pub(crate) fn new(screen: Vec2, tuning: Tuning) -> Self {
        let paths = Rc::new(MouthPaths::new(&tuning));
        Self {
            screen,
            tuning,
            paths,
            actor: None,
        }
    }

    /// Spawn the actor in the middle of the screen, replacing any previous one.
    pub(crate) fn start(&mut self, now: f64) {
        log::info!("Starting scene {}x{}", self.screen.x, self.screen.y);
        self.actor = Some(Actor::centered(
            self.screen / 2.0,
            now,
            Rc::clone(&self.paths),
            self.tuning.clone(),
        ));
    }

    pub(crate) fn actor(&self) -> Option<&Actor> {
        self.actor.as_ref()
    }

    pub(crate) fn screen(&self) -> Vec2 {
        self.screen
    }

    pub(crate) fn resize(&mut self, screen: Vec2) {
        self.screen = screen;
    }

    pub(crate) fn swipe(&mut self, start: Vec2, end: Vec2) {
        if let Some(actor) = &mut self.actor {
            actor.on_swipe(start, end);
        }
    }

    pub(crate) fn steer(&mut self, dir: Direction) {
        if let Some(actor) = &mut self.actor {
            actor.steer(dir);
        }
    }

    /// Wrap, chomp, then move by `dt` seconds.
    pub(crate) fn tick(&mut self, now: f64, dt: f32) {
        for actor in self.actor.iter_mut() {
            actor.state.position = wrap(actor.state.position, actor.size(), self.screen);
            actor.tick(now);
            actor.advance(dt);
        }
    }
}

use macroquad::prelude::*;

use crate::config::Tuning;
use crate::input::{Input, InputState};
use crate::render::render;
use crate::scene::Scene;

pub struct App {
    scene: Scene,
    input: InputState,
}

impl App {
    pub fn new() -> Self {
        let mut scene = Scene::new(
            vec2(screen_width(), screen_height()),
            Tuning::load().clone(),
        );
        scene.start(get_time());
        Self {
            scene,
            input: InputState::new(),
        }
    }

    fn handle_input(&mut self, action: Input) -> bool {
        match action {
            Input::Swipe { start, end } => self.scene.swipe(start, end),
            Input::Steer(dir) => self.scene.steer(dir),
            Input::Quit => return false,
        }
        true
    }

    /// Run one frame of the game loop. Returns false if the game should exit.
    pub fn tick(&mut self) -> bool {
        for action in self.input.poll() {
            if !self.handle_input(action) {
                return false;
            }
        }

        self.scene.resize(vec2(screen_width(), screen_height()));
        self.scene.tick(get_time(), get_frame_time());
        render(&self.scene);

        true
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

use macroquad::prelude::*;

use crate::direction::Direction;

/// A parsed input action from touch, mouse or keyboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Input {
    /// A gesture from `start` to `end`, in y-up world coordinates.
    Swipe { start: Vec2, end: Vec2 },
    Steer(Direction),
    Quit,
}

/// Tracks gesture start points across frames.
pub(crate) struct InputState {
    touch_start: Option<(u64, Vec2)>,
    mouse_start: Option<Vec2>,
}

impl InputState {
    pub(crate) fn new() -> Self {
        Self {
            touch_start: None,
            mouse_start: None,
        }
    }

    /// Poll every input source for this frame.
    pub(crate) fn poll(&mut self) -> Vec<Input> {
        let height = screen_height();
        let mut inputs = self.poll_keyboard();
        inputs.extend(self.poll_touch(height));
        inputs.extend(self.poll_mouse(height));
        inputs
    }

    fn poll_keyboard(&self) -> Vec<Input> {
        let mut inputs = Vec::new();

        if is_key_pressed(KeyCode::Escape) {
            inputs.push(Input::Quit);
        }

        for (keys, dir) in [
            ([KeyCode::Up, KeyCode::W], Direction::Up),
            ([KeyCode::Down, KeyCode::S], Direction::Down),
            ([KeyCode::Left, KeyCode::A], Direction::Left),
            ([KeyCode::Right, KeyCode::D], Direction::Right),
        ] {
            if keys.into_iter().any(is_key_pressed) {
                inputs.push(Input::Steer(dir));
            }
        }

        inputs
    }

    fn poll_touch(&mut self, height: f32) -> Option<Input> {
        touches().into_iter().find_map(|touch| {
            let pos = to_world(touch.position, height);
            self.on_touch(touch.id, touch.phase, pos)
        })
    }

    /// Track one touch event. `pos` is in world coordinates.
    ///
    /// A touch that ends where it started is still reported; the actor
    /// ignores zero-length swipes. Only the tracked touch can end or cancel
    /// the gesture.
    fn on_touch(&mut self, id: u64, phase: TouchPhase, pos: Vec2) -> Option<Input> {
        match phase {
            TouchPhase::Started => {
                self.touch_start = Some((id, pos));
                None
            }
            TouchPhase::Cancelled => {
                if self.touch_start.is_some_and(|(start_id, _)| start_id == id) {
                    self.touch_start = None;
                }
                None
            }
            TouchPhase::Ended => {
                let (start_id, start) = self.touch_start?;
                if start_id != id {
                    return None;
                }
                self.touch_start = None;
                Some(Input::Swipe { start, end: pos })
            }
            _ => None,
        }
    }

    fn poll_mouse(&mut self, height: f32) -> Option<Input> {
        let pos = to_world(Vec2::from(mouse_position()), height);
        self.on_mouse(
            is_mouse_button_pressed(MouseButton::Left),
            is_mouse_button_released(MouseButton::Left),
            pos,
        )
    }

    /// Mouse drags stand in for swipes on desktop. Ignored while a touch is
    /// in progress.
    fn on_mouse(&mut self, pressed: bool, released: bool, pos: Vec2) -> Option<Input> {
        if self.touch_start.is_some() {
            self.mouse_start = None;
            return None;
        }
        if pressed {
            self.mouse_start = Some(pos);
        }
        if released {
            let start = self.mouse_start.take()?;
            return Some(Input::Swipe { start, end: pos });
        }
        None
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

/// Screen coordinates are y-down; the scene is y-up.
pub(crate) fn to_world(screen: Vec2, height: f32) -> Vec2 {
    Vec2::new(screen.x, height - screen.y)
}

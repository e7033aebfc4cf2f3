use macroquad::math::Vec2;

use crate::config::Tuning;
use crate::direction::Direction;
use crate::geometry::Outline;

/// One outline per direction, indexed by `Direction as usize`.
#[derive(Clone, Debug)]
pub(crate) struct PathSet {
    outlines: [Outline; 4],
}

impl PathSet {
    pub(crate) fn get(&self, dir: Direction) -> &Outline {
        &self.outlines[dir as usize]
    }

    #[cfg(test)]
    pub(crate) fn iter(&self) -> impl Iterator<Item = (Direction, &Outline)> {
        Direction::all().into_iter().zip(&self.outlines)
    }
}

/// Build the Right-facing wedge of a circle of `radius` centered at
/// `(radius, radius)`, then rotate it 90° at a time for Up, Left and Down.
pub(crate) fn generate_path_set(start_deg: f32, end_deg: f32, radius: f32) -> PathSet {
    let center = Vec2::splat(radius);
    let right = Outline::arc_wedge(center, radius, start_deg, end_deg);
    let up = right.rotated(90.0);
    let left = up.rotated(90.0);
    let down = left.rotated(90.0);
    PathSet {
        outlines: [right, up, left, down],
    }
}

/// The open and closed outlines of an actor.
#[derive(Clone, Debug)]
pub(crate) struct MouthPaths {
    pub(crate) open: PathSet,
    pub(crate) closed: PathSet,
}

impl MouthPaths {
    pub(crate) fn new(tuning: &Tuning) -> Self {
        let [open_start, open_end] = tuning.open_mouth;
        let [closed_start, closed_end] = tuning.closed_mouth;
        Self {
            open: generate_path_set(open_start, open_end, tuning.radius),
            closed: generate_path_set(closed_start, closed_end, tuning.radius),
        }
    }

    pub(crate) fn outline(&self, dir: Direction, mouth_open: bool) -> &Outline {
        if mouth_open {
            self.open.get(dir)
        } else {
            self.closed.get(dir)
        }
    }
}

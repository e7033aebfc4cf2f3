use macroquad::math::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    Right,
    Up,
    Left,
    Down,
}

impl Direction {
    /// Directions in the order their outlines are generated: each one is the
    /// previous rotated by 90° counter-clockwise.
    #[cfg(test)]
    pub(crate) fn all() -> [Self; 4] {
        [Self::Right, Self::Up, Self::Left, Self::Down]
    }

    /// Unit vector in y-up world coordinates.
    pub(crate) fn unit(self) -> Vec2 {
        match self {
            Self::Right => Vec2::new(1.0, 0.0),
            Self::Up => Vec2::new(0.0, 1.0),
            Self::Left => Vec2::new(-1.0, 0.0),
            Self::Down => Vec2::new(0.0, -1.0),
        }
    }

    #[cfg(test)]
    pub(crate) fn rotate_ccw(self) -> Self {
        match self {
            Self::Right => Self::Up,
            Self::Up => Self::Left,
            Self::Left => Self::Down,
            Self::Down => Self::Right,
        }
    }

    /// Classify a swipe from `start` to `end`.
    /// Returns None if the two points coincide.
    pub(crate) fn from_swipe(start: Vec2, end: Vec2) -> Option<Self> {
        if start == end {
            return None;
        }
        let dx = f64::from(start.x - end.x);
        let dy = f64::from(start.y - end.y);
        Some(Self::from_degrees(dx.atan2(dy).to_degrees()))
    }

    /// Bucket an angle in degrees, measured by `atan2(-dx, -dy)` of the swipe.
    ///
    /// The angle is truncated toward zero first, so every bucket is
    /// lower-inclusive on whole degrees.
    pub(crate) fn from_degrees(degrees: f64) -> Self {
        match degrees.trunc() as i32 {
            -135..-45 => Self::Right,
            -45..45 => Self::Down,
            45..135 => Self::Left,
            _ => Self::Up,
        }
    }
}

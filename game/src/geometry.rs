use macroquad::math::{Affine2, Rect, Vec2};

/// A closed polygon. The last point connects back to the first.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Outline {
    points: Vec<Vec2>,
}

impl Outline {
    #[cfg(test)]
    pub(crate) fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    /// A pie wedge: the arc center, then the arc from `start_deg` to `end_deg`
    /// through increasing angles, closed by the chord back to the center.
    ///
    /// One sample per whole degree of sweep; both endpoints are exact.
    pub(crate) fn arc_wedge(center: Vec2, radius: f32, start_deg: f32, end_deg: f32) -> Self {
        let sweep = (end_deg - start_deg).max(0.0);
        let segments = (sweep.ceil() as usize).max(1);
        let mut points = Vec::with_capacity(segments + 2);
        points.push(center);
        for i in 0..=segments {
            let deg = start_deg + sweep * i as f32 / segments as f32;
            points.push(center + radius * Vec2::from_angle(deg.to_radians()));
        }
        Self { points }
    }

    pub(crate) fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Axis-aligned bounding box. Empty outlines give a zero rect.
    pub(crate) fn bounds(&self) -> Rect {
        let Some(&first) = self.points.first() else {
            return Rect::new(0.0, 0.0, 0.0, 0.0);
        };
        let (min, max) = self
            .points
            .iter()
            .fold((first, first), |(min, max), &p| (min.min(p), max.max(p)));
        let size = max - min;
        Rect::new(min.x, min.y, size.x, size.y)
    }

    /// Rotate counter-clockwise (y-up) about the center of the bounding box.
    pub(crate) fn rotated(&self, degrees: f32) -> Self {
        let center = self.bounds().center();
        let transform = Affine2::from_translation(center)
            * Affine2::from_angle(degrees.to_radians())
            * Affine2::from_translation(-center);
        self.transformed(transform)
    }

    pub(crate) fn translated(&self, offset: Vec2) -> Self {
        self.transformed(Affine2::from_translation(offset))
    }

    fn transformed(&self, transform: Affine2) -> Self {
        Self {
            points: self
                .points
                .iter()
                .map(|&p| transform.transform_point2(p))
                .collect(),
        }
    }

    #[cfg(test)]
    pub(crate) fn approx_eq(&self, other: &Outline, eps: f32) -> bool {
        self.points.len() == other.points.len()
            && self
                .points
                .iter()
                .zip(&other.points)
                .all(|(a, b)| a.abs_diff_eq(*b, eps))
    }
}

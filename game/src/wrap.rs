use macroquad::math::Vec2;

/// Wrap an actor that has left the screen back onto the opposite edge.
///
/// `position` is the lower-left corner of a box of `size`. Past the far edge
/// the box reappears just beyond the near edge; past the near edge it
/// reappears half a box beyond the far edge. Both axes use the same rule.
pub(crate) fn wrap(position: Vec2, size: Vec2, screen: Vec2) -> Vec2 {
    Vec2::new(
        wrap_axis(position.x, size.x, screen.x),
        wrap_axis(position.y, size.y, screen.y),
    )
}

fn wrap_axis(p: f32, size: f32, screen: f32) -> f32 {
    if p - size >= screen {
        -size
    } else if p < -size {
        screen + size / 2.0
    } else {
        p
    }
}

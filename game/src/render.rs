use macroquad::prelude::*;

use crate::actor::Actor;
use crate::scene::Scene;

const BACKGROUND: Color = Color::new(0.12, 0.12, 0.16, 1.0);
const FILL: Color = YELLOW;
const STROKE: Color = BLACK;

/// World (y-up) to screen (y-down).
fn to_screen(world: Vec2, height: f32) -> Vec2 {
    vec2(world.x, height - world.y)
}

fn draw_actor(actor: &Actor, height: f32) {
    let origin = actor.state.position;
    let points: Vec<Vec2> = actor
        .active_outline()
        .translated(origin)
        .points()
        .iter()
        .map(|&p| to_screen(p, height))
        .collect();
    let Some((&apex, rim)) = points.split_first() else {
        return;
    };

    // Arc outlines are star-shaped around their first point.
    for pair in rim.windows(2) {
        draw_triangle(apex, pair[0], pair[1], FILL);
    }

    let thickness = actor.line_width();
    for (a, b) in points.iter().zip(points.iter().cycle().skip(1)) {
        draw_line(a.x, a.y, b.x, b.y, thickness, STROKE);
    }
}

pub(crate) fn render(scene: &Scene) {
    clear_background(BACKGROUND);

    let height = scene.screen().y;
    if let Some(actor) = scene.actor() {
        draw_actor(actor, height);
    }
}

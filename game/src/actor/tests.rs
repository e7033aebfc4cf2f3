use super::*;

const EPS: f32 = 1e-3;

fn actor_at(now: f64) -> Actor {
    let tuning = Tuning::default();
    let paths = Rc::new(MouthPaths::new(&tuning));
    Actor::centered(Vec2::new(200.0, 300.0), now, paths, tuning)
}

fn toggles_over(actor: &mut Actor, frames: impl Iterator<Item = f64>) -> usize {
    let mut toggles = 0;
    for now in frames {
        let before = actor.state.mouth_open;
        actor.tick(now);
        if actor.state.mouth_open != before {
            toggles += 1;
        }
    }
    toggles
}

#[test]
fn starts_facing_right_closed_and_still() {
    let actor = actor_at(0.0);
    assert_eq!(actor.state.facing, Direction::Right);
    assert!(!actor.state.mouth_open);
    assert!(!actor.state.direction_dirty);
    assert_eq!(actor.state.velocity, Vec2::ZERO);
    assert_eq!(actor.state.position, Vec2::new(185.0, 285.0));
}

#[test]
fn zero_length_swipe_is_a_no_op() {
    let mut actor = actor_at(0.0);
    let before = actor.state.clone();
    for p in [Vec2::ZERO, Vec2::new(3.0, -7.5), Vec2::new(-100.0, 42.0)] {
        actor.on_swipe(p, p);
        assert_eq!(actor.state, before);
    }
}

#[test]
fn swipe_in_current_direction_changes_nothing() {
    let mut actor = actor_at(0.0);
    actor.on_swipe(Vec2::ZERO, Vec2::new(50.0, 0.0));
    assert_eq!(actor.state.facing, Direction::Right);
    assert!(!actor.state.direction_dirty);
}

#[test]
fn swipe_sets_facing_and_dirty_flag() {
    let mut actor = actor_at(0.0);
    actor.on_swipe(Vec2::ZERO, Vec2::new(-10.0, 0.0));
    assert_eq!(actor.state.facing, Direction::Left);
    assert!(actor.state.direction_dirty);
}

#[test]
fn mouth_toggles_once_per_interval() {
    let mut actor = actor_at(0.0);
    // 50 fps for one second
    let frames = (1..=50).map(|i| f64::from(i) / 50.0);
    let toggles = toggles_over(&mut actor, frames);
    assert_eq!(toggles, 3);
}

#[test]
fn mouth_waits_for_the_full_interval() {
    let mut actor = actor_at(10.0);
    actor.tick(10.25);
    assert!(!actor.state.mouth_open);
    actor.tick(10.26);
    assert!(actor.state.mouth_open);
    assert_eq!(actor.state.last_toggle, 10.26);
    actor.tick(10.3);
    assert!(actor.state.mouth_open);
}

#[test]
fn direction_change_toggles_immediately() {
    let mut actor = actor_at(0.0);
    actor.tick(0.3);
    assert!(actor.state.mouth_open);

    actor.steer(Direction::Down);
    actor.tick(0.31);
    assert!(!actor.state.mouth_open);
    assert!(!actor.state.direction_dirty);
    assert_eq!(actor.state.last_toggle, 0.31);

    // Clean again: the next toggle waits for the interval.
    actor.tick(0.32);
    assert!(!actor.state.mouth_open);
}

#[test]
fn direction_change_replaces_velocity() {
    let mut actor = actor_at(0.0);
    actor.steer(Direction::Left);
    actor.tick(0.0);
    assert!(actor.state.velocity.abs_diff_eq(Vec2::new(-250.0, 0.0), EPS));

    actor.steer(Direction::Down);
    actor.tick(0.1);
    assert!(actor.state.velocity.abs_diff_eq(Vec2::new(0.0, -250.0), EPS));
}

#[test]
fn advance_covers_one_step_per_step_duration() {
    let mut actor = actor_at(0.0);
    let start = actor.state.position;
    actor.steer(Direction::Left);
    actor.tick(0.0);
    actor.advance(0.1);
    assert!(actor.state.position.abs_diff_eq(start + Vec2::new(-25.0, 0.0), EPS));
}

#[test]
fn active_outline_follows_state() {
    let mut actor = actor_at(0.0);
    assert!(std::ptr::eq(
        actor.active_outline(),
        actor.paths.closed.get(Direction::Right)
    ));
    actor.steer(Direction::Down);
    actor.tick(0.0);
    assert!(std::ptr::eq(
        actor.active_outline(),
        actor.paths.open.get(Direction::Down)
    ));
}

#[test]
fn swipe_up_starts_moving_up_with_open_mouth() {
    let mut actor = actor_at(0.0);
    let start = actor.state.position;

    actor.on_swipe(Vec2::new(100.0, 100.0), Vec2::new(100.0, 180.0));
    assert_eq!(actor.state.facing, Direction::Up);

    actor.tick(0.05);
    assert!(actor.state.mouth_open);
    assert!(std::ptr::eq(
        actor.active_outline(),
        actor.paths.open.get(Direction::Up)
    ));
    assert!(actor.state.velocity.abs_diff_eq(Vec2::new(0.0, 250.0), EPS));

    actor.advance(0.1);
    assert!(actor.state.position.abs_diff_eq(start + Vec2::new(0.0, 25.0), EPS));
}

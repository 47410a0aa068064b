//! Per-frame simulation update
//!
//! Advances sprites, runs platformer physics, keeps the player on stage and
//! checks the goal.

use super::state::GameState;

/// Advance the game state by one frame
pub fn tick(state: &mut GameState) {
    state.time_ticks += 1;

    // Sprite updates: only the player has a velocity
    state.entities.update_all();

    // Physics against the current solid set
    let walls = state.walls();
    let physics = *state.physics();
    let falling = state.player().velocity.y < 0.0;
    let contacts = physics.step(state.player_mut(), &walls);
    if contacts.below && falling {
        log::debug!("Player landed at {:?}", state.player().center);
    }
    if contacts.above {
        log::debug!("Player hit a ceiling at {:?}", state.player().center);
    }

    // Keep the player on stage
    let screen_width = state.settings().screen_width;
    let player = state.player_mut();
    if player.left() < 0.0 {
        player.set_left(0.0);
    }
    if player.right() > screen_width {
        player.set_right(screen_width);
    }

    // Win check fires once; the banner is appended on the winning tick only
    if !state.game_won && state.player().collides_with(state.goal()) {
        state.win();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::Role;
    use crate::sim::input::{Control, Key, key_press, key_release};
    use crate::sim::test_support::{new_state, stand_at};
    use glam::Vec2;
    use proptest::prelude::*;

    /// Put the player at rest on the platform, centered at `x`
    fn stand_on_platform(state: &mut GameState, x: f32) {
        let top = state
            .entities
            .with_role(Role::Platform)
            .map(|e| e.sprite.top())
            .next()
            .unwrap();
        let player = state.player_mut();
        player.center.x = x;
        player.set_bottom(top);
        player.velocity = Vec2::ZERO;
    }

    #[test]
    fn test_player_settles_on_floor() {
        let mut state = new_state();
        for _ in 0..10 {
            tick(&mut state);
        }
        assert_eq!(state.player().bottom(), state.floor().top());
        assert_eq!(state.player().velocity.y, 0.0);
        assert!(state.can_jump());
        assert_eq!(state.time_ticks, 10);
    }

    #[test]
    fn test_walk_right() {
        let mut state = new_state();
        stand_at(&mut state, 100.0);
        key_press(&mut state, Key::Right);
        tick(&mut state);
        // Sprite update and physics step each move the player
        assert_eq!(state.player().center.x, 106.0);
        key_release(&mut state, Key::Right);
        tick(&mut state);
        assert_eq!(state.player().center.x, 106.0);
    }

    #[test]
    fn test_jump_arc_lands() {
        let mut state = new_state();
        stand_at(&mut state, 100.0);
        key_press(&mut state, Key::Up);
        tick(&mut state);
        assert!(state.player().bottom() > state.floor().top());
        assert!(!state.can_jump());

        // Airborne jump press is ignored
        let vy = state.player().velocity.y;
        key_press(&mut state, Key::Up);
        assert_eq!(state.player().velocity.y, vy);

        for _ in 0..40 {
            tick(&mut state);
        }
        assert_eq!(state.player().bottom(), state.floor().top());
    }

    #[test]
    fn test_clamped_at_left_edge() {
        let mut state = new_state();
        key_press(&mut state, Key::A);
        for _ in 0..20 {
            tick(&mut state);
        }
        assert_eq!(state.player().left(), 0.0);
    }

    #[test]
    fn test_clamped_at_right_edge() {
        let mut state = new_state();
        stand_at(&mut state, 780.0);
        key_press(&mut state, Key::D);
        for _ in 0..5 {
            tick(&mut state);
        }
        assert_eq!(state.player().right(), 800.0);
    }

    #[test]
    fn test_box_is_solid_next_tick() {
        let mut state = new_state();
        assert!(state.place_box(Vec2::new(200.0, 48.0)));
        // Drop the player onto the box
        let player = state.player_mut();
        player.center.x = 200.0;
        player.set_bottom(100.0);
        for _ in 0..20 {
            tick(&mut state);
        }
        assert_eq!(state.player().bottom(), 64.0);
    }

    #[test]
    fn test_reaching_goal_wins() {
        let mut state = new_state();
        stand_on_platform(&mut state, 640.0);
        key_press(&mut state, Key::Right);

        let mut ticks = 0;
        while !state.game_won && ticks < 30 {
            tick(&mut state);
            ticks += 1;
        }
        assert!(state.game_won);
        assert_eq!(state.player().velocity.x, 0.0);

        let banner = state.render_list().last().unwrap();
        assert_eq!(banner.role, Role::Banner);
        assert_eq!(banner.sprite.center, Vec2::new(400.0, 300.0));

        // Further keys are inert, quit still works
        let entities = state.render_list().count();
        key_press(&mut state, Key::Left);
        key_press(&mut state, Key::Down);
        key_press(&mut state, Key::R);
        assert_eq!(state.player().velocity.x, 0.0);
        assert_eq!(state.render_list().count(), entities);
        assert_eq!(key_press(&mut state, Key::Q), Control::Quit);
    }

    #[test]
    fn test_banner_appended_once() {
        let mut state = new_state();
        stand_on_platform(&mut state, 700.0);
        for _ in 0..10 {
            tick(&mut state);
        }
        assert!(state.game_won);
        assert_eq!(state.entities.count(Role::Banner), 1);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Press(Key),
        Release(Key),
        Tick(u8),
    }

    fn key() -> impl Strategy<Value = Key> {
        prop_oneof![
            Just(Key::Left),
            Just(Key::Right),
            Just(Key::A),
            Just(Key::D),
            Just(Key::Up),
            Just(Key::Down),
            Just(Key::R),
        ]
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            key().prop_map(Op::Press),
            key().prop_map(Op::Release),
            (1u8..40).prop_map(Op::Tick),
        ]
    }

    proptest! {
        #[test]
        fn prop_player_stays_on_stage(ops in prop::collection::vec(op(), 1..60)) {
            let mut state = new_state();
            for op in ops {
                match op {
                    Op::Press(key) => { key_press(&mut state, key); }
                    Op::Release(key) => key_release(&mut state, key),
                    Op::Tick(n) => {
                        for _ in 0..n {
                            tick(&mut state);
                            prop_assert!(state.player().left() >= 0.0);
                            prop_assert!(state.player().right() <= 800.0);
                        }
                    }
                }
            }
        }

        #[test]
        fn prop_accepted_boxes_counted_once(xs in prop::collection::vec(0.0f32..800.0, 1..20)) {
            let mut state = new_state();
            for x in xs {
                let before = state.box_count();
                let accepted = state.place_box(Vec2::new(x, 48.0));
                let expected = if accepted { before + 1 } else { before };
                prop_assert_eq!(state.box_count(), expected);
                prop_assert_eq!(accepted, x - 16.0 > state.player().right());
                prop_assert_eq!(state.player().left(), 10.0);
            }
        }
    }
}

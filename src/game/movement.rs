//! Fixed-tick player movement with wall sliding.
//!
//! [`step`] advances the player by exactly one tick. It is a pure function of the
//! held keys, the wall set, the current position and the playfield size: no clock
//! is read, so one call always moves the player by at most `speed` units no matter
//! how much real time has passed.
//!
//! # Resolution Order
//!
//! 1. Build the displacement from the held keys (opposing keys cancel).
//! 2. Rescale diagonal displacement so its length equals `speed`.
//! 3. Clamp the candidate position into the playfield, per axis.
//! 4. Accept the candidate if it is free; otherwise try the new `x` alone, then the
//!    new `y` alone; otherwise stay put.

use log::trace;

use crate::game::collision::CollisionSystem;
use crate::game::keys::InputState;
use crate::game::player::Player;

/// Displacement for one tick given the held keys.
///
/// Axis-aligned movement covers `speed` units; diagonal movement is normalized to
/// cover the same distance rather than `speed * sqrt(2)`.
pub fn displacement(input: &InputState, speed: f64) -> (f64, f64) {
    let axis = |negative: bool, positive: bool| {
        (f64::from(u8::from(positive)) - f64::from(u8::from(negative))) * speed
    };
    let dx = axis(input.left, input.right);
    let dy = axis(input.up, input.down);

    if dx != 0.0 && dy != 0.0 {
        let length = dx.hypot(dy);
        (dx / length * speed, dy / length * speed)
    } else {
        (dx, dy)
    }
}

/// Clamps `value` into `[0, bound - size]`.
///
/// Written as min-then-max so an oversized hitbox pins to zero instead of panicking.
fn clamp_axis(value: f64, bound: f64, size: f64) -> f64 {
    value.min(bound - size).max(0.0)
}

/// Advances `player` by one tick and returns its new state.
///
/// `bounds` is the playfield `(width, height)`. The returned player always lies
/// inside the playfield and never overlaps a wall it was not already overlapping.
pub fn step(
    input: &InputState,
    collision: &CollisionSystem,
    player: &Player,
    bounds: (f64, f64),
    speed: f64,
) -> Player {
    let (dx, dy) = displacement(input, speed);
    let (old_x, old_y) = player.position();
    let new_x = clamp_axis(old_x + dx, bounds.0, player.width);
    let new_y = clamp_axis(old_y + dy, bounds.1, player.height);

    let is_free = |x: f64, y: f64| !collision.collides(&player.rect_at(x, y));

    let resolved = if is_free(new_x, new_y) {
        (new_x, new_y)
    } else if is_free(new_x, old_y) {
        (new_x, old_y)
    } else if is_free(old_x, new_y) {
        (old_x, new_y)
    } else {
        trace!("Move to ({new_x:.2}, {new_y:.2}) blocked on both axes");
        (old_x, old_y)
    };

    let mut next = *player;
    next.set_position(resolved);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::collision::Rect;
    use crate::game::keys::GameKey;

    const SPEED: f64 = 5.0;
    const BOUNDS: (f64, f64) = (400.0, 400.0);

    fn held(keys: &[GameKey]) -> InputState {
        let mut input = InputState::new();
        for key in keys {
            input.press_key(*key);
        }
        input
    }

    fn player_at(x: f64, y: f64) -> Player {
        Player::new(x, y, 30.0, 30.0)
    }

    #[test]
    fn test_no_input_never_moves() {
        let walls = CollisionSystem::from_walls(vec![Rect::new(0.0, 0.0, 40.0, 40.0)]);
        let mut player = player_at(40.0, 40.0);
        for _ in 0..100 {
            player = step(&InputState::new(), &walls, &player, BOUNDS, SPEED);
        }
        assert_eq!(player.position(), (40.0, 40.0));
    }

    #[test]
    fn test_axis_movement_covers_speed() {
        let walls = CollisionSystem::new();
        let moved = step(
            &held(&[GameKey::MoveLeft]),
            &walls,
            &player_at(100.0, 100.0),
            BOUNDS,
            SPEED,
        );
        assert_eq!(moved.position(), (95.0, 100.0));

        let moved = step(
            &held(&[GameKey::MoveDown]),
            &walls,
            &player_at(100.0, 100.0),
            BOUNDS,
            SPEED,
        );
        assert_eq!(moved.position(), (100.0, 105.0));
    }

    #[test]
    fn test_diagonal_is_normalized() {
        let (dx, dy) = displacement(&held(&[GameKey::MoveRight, GameKey::MoveDown]), SPEED);
        assert!((dx.hypot(dy) - SPEED).abs() < 1e-9);
        assert!(dx > 0.0 && dy > 0.0);
        assert!((dx - dy).abs() < 1e-12);

        let walls = CollisionSystem::new();
        let moved = step(
            &held(&[GameKey::MoveRight, GameKey::MoveDown]),
            &walls,
            &player_at(100.0, 100.0),
            BOUNDS,
            SPEED,
        );
        let travelled = (moved.x - 100.0).hypot(moved.y - 100.0);
        assert!((travelled - SPEED).abs() < 1e-9);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let (dx, dy) = displacement(&held(&[GameKey::MoveLeft, GameKey::MoveRight]), SPEED);
        assert_eq!((dx, dy), (0.0, 0.0));

        // Horizontal cancels, vertical stays at full speed.
        let (dx, dy) = displacement(
            &held(&[GameKey::MoveLeft, GameKey::MoveRight, GameKey::MoveUp]),
            SPEED,
        );
        assert_eq!((dx, dy), (0.0, -SPEED));

        let all = held(&[
            GameKey::MoveLeft,
            GameKey::MoveRight,
            GameKey::MoveUp,
            GameKey::MoveDown,
        ]);
        assert_eq!(displacement(&all, SPEED), (0.0, 0.0));
    }

    #[test]
    fn test_clamped_at_origin() {
        let walls = CollisionSystem::new();
        let moved = step(
            &held(&[GameKey::MoveUp, GameKey::MoveLeft]),
            &walls,
            &player_at(0.0, 0.0),
            BOUNDS,
            SPEED,
        );
        assert_eq!(moved.position(), (0.0, 0.0));
    }

    #[test]
    fn test_clamped_at_far_edge() {
        let walls = CollisionSystem::new();
        let moved = step(
            &held(&[GameKey::MoveRight, GameKey::MoveDown]),
            &walls,
            &player_at(368.0, 369.0),
            BOUNDS,
            SPEED,
        );
        assert_eq!(moved.position(), (370.0, 370.0));
    }

    #[test]
    fn test_oversized_player_pins_to_origin() {
        let walls = CollisionSystem::new();
        let player = Player::new(0.0, 0.0, 500.0, 500.0);
        let moved = step(&held(&[GameKey::MoveRight]), &walls, &player, BOUNDS, SPEED);
        assert_eq!(moved.position(), (0.0, 0.0));
    }

    #[test]
    fn test_slides_down_along_wall_on_the_right() {
        let walls = CollisionSystem::from_walls(vec![Rect::new(30.0, 0.0, 40.0, 40.0)]);
        let moved = step(
            &held(&[GameKey::MoveRight, GameKey::MoveDown]),
            &walls,
            &player_at(0.0, 0.0),
            BOUNDS,
            SPEED,
        );
        assert_eq!(moved.x, 0.0);
        assert!(moved.y > 0.0);
    }

    #[test]
    fn test_slides_right_along_wall_below() {
        let walls = CollisionSystem::from_walls(vec![Rect::new(0.0, 130.0, 400.0, 40.0)]);
        let moved = step(
            &held(&[GameKey::MoveRight, GameKey::MoveDown]),
            &walls,
            &player_at(100.0, 100.0),
            BOUNDS,
            SPEED,
        );
        assert!(moved.x > 100.0);
        assert_eq!(moved.y, 100.0);
    }

    #[test]
    fn test_surrounded_player_cannot_move() {
        let walls = CollisionSystem::from_walls(vec![
            Rect::new(10.0, 40.0, 30.0, 30.0),
            Rect::new(70.0, 40.0, 30.0, 30.0),
            Rect::new(40.0, 10.0, 30.0, 30.0),
            Rect::new(40.0, 70.0, 30.0, 30.0),
        ]);
        let player = player_at(40.0, 40.0);
        let keys = [
            GameKey::MoveUp,
            GameKey::MoveDown,
            GameKey::MoveLeft,
            GameKey::MoveRight,
        ];

        for mask in 0..16u8 {
            let pressed: Vec<GameKey> = keys
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, key)| *key)
                .collect();
            let moved = step(&held(&pressed), &walls, &player, BOUNDS, SPEED);
            assert_eq!(moved.position(), (40.0, 40.0), "moved with {pressed:?}");
        }
    }

    #[test]
    fn test_flush_against_wall_can_move_away() {
        let walls = CollisionSystem::from_walls(vec![Rect::new(70.0, 40.0, 40.0, 40.0)]);
        let moved = step(
            &held(&[GameKey::MoveLeft]),
            &walls,
            &player_at(40.0, 40.0),
            BOUNDS,
            SPEED,
        );
        assert_eq!(moved.position(), (35.0, 40.0));
    }
}

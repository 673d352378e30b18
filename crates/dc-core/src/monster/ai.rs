//! Enemy AI
//!
//! Once per turn, after the player has acted, each living enemy either steps
//! toward a nearby player, wanders one cell, or stays put. A step that is
//! blocked is simply lost for that turn.

use tracing::trace;

use super::EnemyId;
use crate::PURSUIT_RANGE;
use crate::dungeon::{Dungeon, Position};
use crate::rng::GameRng;

/// Wander directions: up, right, down, left
const DIRECTIONS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// AI action result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiAction {
    /// Moved to new position
    Moved(Position),
    /// Chose not to move
    Waited,
    /// Wanted to move but the destination was taken or solid
    Blocked,
}

/// Pick the step an enemy wants to take this turn.
///
/// A hostile enemy within [`PURSUIT_RANGE`] (Manhattan) of the player moves
/// along the axis with the larger gap, preferring vertical on a tie.
/// Otherwise it wanders in a random cardinal direction two turns out of three.
pub fn choose_step(
    from: Position,
    hostile: bool,
    player: Position,
    rng: &mut GameRng,
) -> (i32, i32) {
    let dx = player.x - from.x;
    let dy = player.y - from.y;

    if hostile && from.distance(player) < PURSUIT_RANGE {
        if dx.abs() > dy.abs() {
            (dx.signum(), 0)
        } else {
            (0, dy.signum())
        }
    } else if rng.rn2(3) > 0 {
        DIRECTIONS[rng.rn2(DIRECTIONS.len() as u32) as usize]
    } else {
        (0, 0)
    }
}

/// Process one AI turn for a single enemy
pub fn process_enemy_ai(
    id: EnemyId,
    dungeon: &mut Dungeon,
    player: Position,
    rng: &mut GameRng,
) -> AiAction {
    let (from, hostile) = match dungeon.enemy(id) {
        Some(e) if e.is_alive() => (e.pos, e.hostile),
        _ => return AiAction::Waited,
    };

    let (dx, dy) = choose_step(from, hostile, player, rng);
    if (dx, dy) == (0, 0) {
        return AiAction::Waited;
    }

    let to = from.offset(dx, dy);

    // Never onto the player, never through walls, never onto another enemy
    if to == player || !dungeon.is_walkable(to) || dungeon.enemy_at(to).is_some() {
        return AiAction::Blocked;
    }

    dungeon.move_enemy(id, to);
    AiAction::Moved(to)
}

/// Enemy phase of a turn: every living enemy acts exactly once
pub fn move_enemies(
    dungeon: &mut Dungeon,
    player: Position,
    rng: &mut GameRng,
) -> Vec<(EnemyId, AiAction)> {
    let ids: Vec<EnemyId> = dungeon.enemies().iter().map(|e| e.id).collect();

    ids.into_iter()
        .map(|id| {
            let action = process_enemy_ai(id, dungeon, player, rng);
            trace!(enemy = id.0, ?action, "enemy turn");
            (id, action)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monster::EnemyKind;

    fn open_room() -> Dungeon {
        Dungeon::from_ascii(
            1,
            &[
                "#########",
                "#.......#",
                "#.......#",
                "#.......#",
                "#.......#",
                "#.......#",
                "#########",
            ],
        )
    }

    #[test]
    fn test_pursues_along_larger_axis() {
        let mut rng = GameRng::new(42);
        let player = Position::new(5, 2);
        assert_eq!(choose_step(Position::new(2, 3), true, player, &mut rng), (1, 0));
        assert_eq!(choose_step(Position::new(5, 5), true, player, &mut rng), (0, -1));
    }

    #[test]
    fn test_tie_prefers_vertical() {
        let mut rng = GameRng::new(42);
        let player = Position::new(3, 3);
        assert_eq!(choose_step(Position::new(1, 1), true, player, &mut rng), (0, 1));
        assert_eq!(choose_step(Position::new(5, 5), true, player, &mut rng), (0, -1));
    }

    #[test]
    fn test_far_or_peaceful_enemies_wander() {
        let mut rng = GameRng::new(42);
        let player = Position::new(1, 1);
        for _ in 0..100 {
            let (dx, dy) = choose_step(Position::new(20, 20), true, player, &mut rng);
            assert!(dx.abs() + dy.abs() <= 1);
            let (dx, dy) = choose_step(Position::new(2, 1), false, player, &mut rng);
            assert!(dx.abs() + dy.abs() <= 1);
        }
    }

    #[test]
    fn test_pursuit_stops_at_range() {
        let from = Position::new(1, 1);

        // Distance 4 always closes in
        for seed in 0..200 {
            let mut rng = GameRng::new(seed);
            assert_eq!(choose_step(from, true, Position::new(5, 1), &mut rng), (1, 0));
        }

        // Distance 5 wanders
        let steps: Vec<_> = (0..200)
            .map(|seed| {
                let mut rng = GameRng::new(seed);
                choose_step(from, true, Position::new(6, 1), &mut rng)
            })
            .collect();
        assert!(steps.contains(&(0, 0)));
        assert!(steps.iter().any(|&step| step != (1, 0)));
    }

    #[test]
    fn test_enemy_closes_in() {
        let mut rng = GameRng::new(42);
        let mut d = open_room();
        let id = d.add_enemy(EnemyKind::Orc, Position::new(1, 1));
        let player = Position::new(4, 2);

        let action = process_enemy_ai(id, &mut d, player, &mut rng);
        assert_eq!(action, AiAction::Moved(Position::new(2, 1)));
    }

    #[test]
    fn test_never_steps_onto_player() {
        let mut rng = GameRng::new(42);
        let mut d = open_room();
        let id = d.add_enemy(EnemyKind::Goblin, Position::new(3, 2));
        let player = Position::new(3, 3);

        assert_eq!(process_enemy_ai(id, &mut d, player, &mut rng), AiAction::Blocked);
        assert_eq!(d.enemy(id).unwrap().pos, Position::new(3, 2));
    }

    #[test]
    fn test_blocked_by_other_enemy() {
        let mut rng = GameRng::new(42);
        let mut d = open_room();
        let front = d.add_enemy(EnemyKind::Rat, Position::new(3, 3));
        let back = d.add_enemy(EnemyKind::Rat, Position::new(3, 2));
        let player = Position::new(3, 5);

        // The rat behind is processed without re-trying another direction
        assert_eq!(process_enemy_ai(back, &mut d, player, &mut rng), AiAction::Blocked);
        assert_eq!(
            process_enemy_ai(front, &mut d, player, &mut rng),
            AiAction::Moved(Position::new(3, 4))
        );
    }

    #[test]
    fn test_wanderers_stay_on_floor() {
        let mut rng = GameRng::new(7);
        let mut d = open_room();
        d.add_enemy(EnemyKind::Skeleton, Position::new(4, 3));
        d.add_enemy(EnemyKind::Troll, Position::new(2, 4));
        let player = Position::new(60, 60);

        for _ in 0..200 {
            move_enemies(&mut d, player, &mut rng);
            for e in d.enemies() {
                assert!(d.is_walkable(e.pos));
            }
            assert_ne!(d.enemies()[0].pos, d.enemies()[1].pos);
        }
    }

    #[test]
    fn test_every_enemy_acts_once() {
        let mut rng = GameRng::new(3);
        let mut d = open_room();
        d.add_enemy(EnemyKind::Rat, Position::new(1, 1));
        d.add_enemy(EnemyKind::Rat, Position::new(7, 5));
        let actions = move_enemies(&mut d, Position::new(4, 3), &mut rng);
        assert_eq!(actions.len(), 2);
    }
}

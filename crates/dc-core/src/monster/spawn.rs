//! Enemy creation

use tracing::debug;

use super::{EnemyId, EnemyKind};
use crate::config::CountRange;
use crate::dungeon::{Dungeon, Position};
use crate::rng::GameRng;

/// Cells around the player tried, in order, for a wandering monster
const NEIGHBORS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Populate a level with enemies.
///
/// Enemies go into any room but the first, which is where the player starts.
/// Levels with fewer than two rooms get none. Returns the number spawned.
pub fn spawn_enemies(dungeon: &mut Dungeon, count: CountRange, rng: &mut GameRng) -> usize {
    let wanted = count.roll(rng);
    let mut spawned = 0;

    for _ in 0..wanted {
        let room_count = dungeon.rooms().len();
        if room_count <= 1 {
            break;
        }

        let room = dungeon.rooms()[1 + rng.rn2(room_count as u32 - 1) as usize];
        let pos = room.random_position(rng);
        let kind = *rng.choose(&EnemyKind::ALL).unwrap_or(&EnemyKind::Goblin);

        dungeon.add_enemy(kind, pos);
        spawned += 1;
    }

    spawned
}

/// Place one wandering monster next to the player.
///
/// The first adjacent cell (diagonals included) that is walkable and free of
/// enemies gets a Goblin or a Rat. Returns `None` when the player is boxed in.
pub fn spawn_near(dungeon: &mut Dungeon, player: Position, rng: &mut GameRng) -> Option<EnemyId> {
    let pos = NEIGHBORS
        .iter()
        .map(|&(dx, dy)| player.offset(dx, dy))
        .find(|&p| dungeon.is_walkable(p) && dungeon.enemy_at(p).is_none())?;

    let kind = *rng.choose(&EnemyKind::WANDERERS).unwrap_or(&EnemyKind::Rat);
    let id = dungeon.add_enemy(kind, pos);
    debug!(?kind, %pos, "wandering monster appears");
    Some(id)
}

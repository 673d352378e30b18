//! Enemy instances and the enemy type table

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::dungeon::Position;

/// Unique identifier for enemy instances, stable for the life of a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnemyId(pub u32);

/// Enemy types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum EnemyKind {
    Goblin,
    Orc,
    Troll,
    Rat,
    Skeleton,
}

impl EnemyKind {
    /// Every kind, in spawn-table order
    pub const ALL: [EnemyKind; 5] = [
        EnemyKind::Goblin,
        EnemyKind::Orc,
        EnemyKind::Troll,
        EnemyKind::Rat,
        EnemyKind::Skeleton,
    ];

    /// Kinds that can interrupt a rest
    pub const WANDERERS: [EnemyKind; 2] = [EnemyKind::Goblin, EnemyKind::Rat];

    pub const fn symbol(self) -> char {
        match self {
            EnemyKind::Goblin => 'g',
            EnemyKind::Orc => 'o',
            EnemyKind::Troll => 'T',
            EnemyKind::Rat => 'r',
            EnemyKind::Skeleton => 's',
        }
    }

    pub const fn base_health(self) -> i32 {
        match self {
            EnemyKind::Goblin => 3,
            EnemyKind::Orc => 5,
            EnemyKind::Troll => 8,
            EnemyKind::Rat => 1,
            EnemyKind::Skeleton => 4,
        }
    }

    pub const fn damage(self) -> i32 {
        match self {
            EnemyKind::Goblin => 1,
            EnemyKind::Orc => 2,
            EnemyKind::Troll => 3,
            EnemyKind::Rat => 1,
            EnemyKind::Skeleton => 2,
        }
    }
}

/// An enemy on the current level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EnemyId,
    pub kind: EnemyKind,
    pub pos: Position,
    /// Positive while alive
    pub health: i32,
    pub damage: i32,
    /// Hostile enemies chase a nearby player
    pub hostile: bool,
}

impl Enemy {
    pub fn new(id: EnemyId, kind: EnemyKind, pos: Position) -> Self {
        Self {
            id,
            kind,
            pos,
            health: kind.base_health(),
            damage: kind.damage(),
            hostile: true,
        }
    }

    pub fn name(&self) -> String {
        self.kind.to_string()
    }

    pub const fn symbol(&self) -> char {
        self.kind.symbol()
    }

    pub const fn is_alive(&self) -> bool {
        self.health > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_stat_table() {
        let table: Vec<_> = EnemyKind::iter()
            .map(|k| (k.to_string(), k.symbol(), k.base_health(), k.damage()))
            .collect();
        assert_eq!(
            table,
            vec![
                ("Goblin".to_string(), 'g', 3, 1),
                ("Orc".to_string(), 'o', 5, 2),
                ("Troll".to_string(), 'T', 8, 3),
                ("Rat".to_string(), 'r', 1, 1),
                ("Skeleton".to_string(), 's', 4, 2),
            ]
        );
        assert!(EnemyKind::iter().eq(EnemyKind::ALL));
    }

    #[test]
    fn test_new_enemy_is_alive_and_hostile() {
        let e = Enemy::new(EnemyId(1), EnemyKind::Troll, Position::new(2, 2));
        assert!(e.is_alive());
        assert!(e.hostile);
        assert_eq!(e.health, 8);
        assert_eq!(e.name(), "Troll");
    }
}

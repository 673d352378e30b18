//! Monster system
//!
//! Enemy types, spawning, and the per-turn AI.

mod ai;
mod enemy;
mod spawn;

pub use ai::{choose_step, move_enemies, process_enemy_ai, AiAction};
pub use enemy::{Enemy, EnemyId, EnemyKind};
pub use spawn::{spawn_enemies, spawn_near};

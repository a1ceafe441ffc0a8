// In: src/lib.rs

//! Turn-based battle rules engine.
//!
//! Computes battle stats from genetics, orders submitted actions, resolves
//! accuracy and damage, walks the status-condition state machine, and
//! orchestrates full turns against a pluggable async store. All randomness
//! is injected per turn, so every outcome is reproducible.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod errors;
pub mod move_data;
pub mod pokemon;
pub mod store;

// --- PUBLIC API RE-EXPORTS ---

// Core engine entry points and battle state.
pub use battle::engine::BattleEngine;
pub use battle::state::{
    ActionChoice, ActionLogEntry, Battle, BattleId, BattlePokemonState, BattleStatus, MoveUsage,
    RankedStat, StatRanks, TrainerAction, TurnOutcome, TurnRng, Weather,
};

// Rules math for callers that want the calculators directly.
pub use battle::stats::{calculate_stats, ComputedStats};

// Effect registries.
pub use battle::ability_effects::{AbilityEffect, AbilityKind};
pub use battle::move_effects::{MoveEffect, MoveEffectKind};

// Data model.
pub use move_data::{MoveCategory, MoveData, MoveId, TypeChart};
pub use pokemon::{
    BaseStats, Nature, PokemonType, Stat, StatSpread, StatusCondition, TeamId, TrainedPokemon,
    TrainedPokemonId, TrainerId,
};

// Persistence contract.
pub use store::{BattleStore, InMemoryStore};

// Crate-specific error and result types.
pub use errors::{BattleError, BattleResult};

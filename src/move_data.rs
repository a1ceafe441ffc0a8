// In: src/move_data.rs

use crate::pokemon::PokemonType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type MoveId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

/// Static move data, fetched through the store.
///
/// `accuracy: None` means the move never misses; `power: None` means the
/// move carries no damage payload (its effect does all the work).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveData {
    pub id: MoveId,
    pub name: String,
    pub move_type: PokemonType,
    pub category: MoveCategory,
    pub power: Option<u16>,
    pub accuracy: Option<f64>,
    pub max_pp: u8,
    pub priority: i8,
}

impl MoveData {
    /// A move only goes through the accuracy and damage pipeline when it is
    /// a non-status move with a power value.
    pub fn is_damaging(&self) -> bool {
        self.category != MoveCategory::Status && self.power.is_some()
    }
}

/// Type effectiveness chart. Entries map (attacking type, defending type)
/// to a multiplier; a missing entry reads as neutral (1.0).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypeChart {
    entries: HashMap<(PokemonType, PokemonType), f64>,
}

impl TypeChart {
    pub fn new() -> Self {
        TypeChart::default()
    }

    pub fn from_entries(
        entries: impl IntoIterator<Item = ((PokemonType, PokemonType), f64)>,
    ) -> Self {
        TypeChart {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn set(&mut self, attacking: PokemonType, defending: PokemonType, multiplier: f64) {
        self.entries.insert((attacking, defending), multiplier);
    }

    pub fn effectiveness(&self, attacking: PokemonType, defending: PokemonType) -> f64 {
        self.entries
            .get(&(attacking, defending))
            .copied()
            .unwrap_or(1.0)
    }

    /// Combined effectiveness of a move type against a (possibly dual-typed)
    /// defender: the per-type multipliers multiplied together.
    pub fn combined_effectiveness(&self, attacking: PokemonType, defending: &[PokemonType]) -> f64 {
        defending
            .iter()
            .map(|&t| self.effectiveness(attacking, t))
            .product()
    }
}

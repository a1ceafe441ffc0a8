// In: src/battle/ability_effects/stat_mods.rs

use super::{AbilityEffect, Combatant};
use crate::battle::state::Weather;
use crate::move_data::{MoveCategory, MoveData};
use async_trait::async_trait;

/// Boosts move accuracy by 30%, capped at 100.
pub struct CompoundEyes;

#[async_trait]
impl AbilityEffect for CompoundEyes {
    fn modify_accuracy(&self, _mv: &MoveData, accuracy: f64) -> Option<f64> {
        Some((accuracy * 1.3).floor().min(100.0))
    }
}

/// 20% harder to hit in a sandstorm.
pub struct SandVeil;

#[async_trait]
impl AbilityEffect for SandVeil {
    fn evasion_bonus(&self, _holder: &Combatant<'_>, weather: Weather) -> Option<f64> {
        (weather == Weather::Sandstorm).then_some(0.2)
    }
}

/// Doubles speed in rain.
pub struct SwiftSwim;

#[async_trait]
impl AbilityEffect for SwiftSwim {
    fn modify_speed(&self, _holder: &Combatant<'_>, weather: Weather, speed: f64) -> Option<f64> {
        (weather == Weather::Rain).then_some(speed * 2.0)
    }
}

/// Doubles speed in harsh sunlight.
pub struct Chlorophyll;

#[async_trait]
impl AbilityEffect for Chlorophyll {
    fn modify_speed(&self, _holder: &Combatant<'_>, weather: Weather, speed: f64) -> Option<f64> {
        (weather == Weather::Sun).then_some(speed * 2.0)
    }
}

/// Status moves gain one priority bracket.
pub struct Prankster;

#[async_trait]
impl AbilityEffect for Prankster {
    fn modify_priority(&self, mv: &MoveData, priority: i8) -> Option<i8> {
        (mv.category == MoveCategory::Status).then_some(priority + 1)
    }
}

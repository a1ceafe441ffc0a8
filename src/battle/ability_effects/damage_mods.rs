// In: src/battle/ability_effects/damage_mods.rs

use super::{AbilityEffect, Combatant};
use crate::move_data::{MoveCategory, MoveData};
use crate::pokemon::PokemonType;
use async_trait::async_trait;

/// Halves incoming damage while at full HP.
pub struct Multiscale;

#[async_trait]
impl AbilityEffect for Multiscale {
    fn modify_damage(&self, defender: &Combatant<'_>, _mv: &MoveData, damage: f64) -> Option<f64> {
        (defender.state.current_hp == defender.state.max_hp).then_some(damage * 0.5)
    }
}

/// Halves incoming Fire and Ice damage.
pub struct ThickFat;

#[async_trait]
impl AbilityEffect for ThickFat {
    fn modify_damage(&self, _defender: &Combatant<'_>, mv: &MoveData, damage: f64) -> Option<f64> {
        matches!(mv.move_type, PokemonType::Fire | PokemonType::Ice).then_some(damage * 0.5)
    }
}

/// Physical attacks hit half again as hard while the attacker carries a
/// status condition.
pub struct Guts;

#[async_trait]
impl AbilityEffect for Guts {
    fn modify_damage_dealt(
        &self,
        attacker: &Combatant<'_>,
        mv: &MoveData,
        damage: f64,
    ) -> Option<f64> {
        (attacker.state.status.is_some() && mv.category == MoveCategory::Physical)
            .then_some(damage * 1.5)
    }
}

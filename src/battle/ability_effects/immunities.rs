// In: src/battle/ability_effects/immunities.rs

use super::{AbilityEffect, EffectContext};
use crate::battle::state::BattlePokemonState;
use crate::errors::{BattleError, BattleResult};
use crate::move_data::MoveData;
use crate::pokemon::{PokemonType, StatusCondition};
use async_trait::async_trait;

/// Ignores the defender's ability-based immunities and protections.
/// The marker itself has no hooks; the calculators consult
/// `breaks_abilities` before running defender hooks.
pub struct MoldBreaker;

#[async_trait]
impl AbilityEffect for MoldBreaker {
    fn breaks_abilities(&self) -> bool {
        true
    }
}

/// Immune to Ground moves.
pub struct Levitate;

#[async_trait]
impl AbilityEffect for Levitate {
    fn is_immune_to_type(&self, move_type: PokemonType) -> bool {
        move_type == PokemonType::Ground
    }
}

async fn absorb_heal(
    holder: &BattlePokemonState,
    ctx: &EffectContext<'_>,
    ability: &str,
) -> BattleResult<Option<String>> {
    let mut state = ctx
        .store
        .find_state(holder.id)
        .await?
        .ok_or_else(|| BattleError::not_found("battle pokemon state", holder.id))?;
    let healed = state.heal(state.max_hp / 4);
    if healed > 0 {
        ctx.store.update_state(&state).await?;
    }
    Ok(Some(format!("{} absorbed the attack!", ability)))
}

/// Immune to Electric moves; absorbing one restores a quarter of max HP.
pub struct VoltAbsorb;

#[async_trait]
impl AbilityEffect for VoltAbsorb {
    fn is_immune_to_type(&self, move_type: PokemonType) -> bool {
        move_type == PokemonType::Electric
    }

    async fn on_after_taking_damage(
        &self,
        holder: &BattlePokemonState,
        mv: &MoveData,
        ctx: &EffectContext<'_>,
    ) -> BattleResult<Option<String>> {
        if mv.move_type != PokemonType::Electric {
            return Ok(None);
        }
        absorb_heal(holder, ctx, "Volt Absorb").await
    }
}

/// Immune to Water moves; absorbing one restores a quarter of max HP.
pub struct WaterAbsorb;

#[async_trait]
impl AbilityEffect for WaterAbsorb {
    fn is_immune_to_type(&self, move_type: PokemonType) -> bool {
        move_type == PokemonType::Water
    }

    async fn on_after_taking_damage(
        &self,
        holder: &BattlePokemonState,
        mv: &MoveData,
        ctx: &EffectContext<'_>,
    ) -> BattleResult<Option<String>> {
        if mv.move_type != PokemonType::Water {
            return Ok(None);
        }
        absorb_heal(holder, ctx, "Water Absorb").await
    }
}

/// Cannot be poisoned.
pub struct Immunity;

#[async_trait]
impl AbilityEffect for Immunity {
    fn blocks_status(&self, status: StatusCondition) -> bool {
        matches!(status, StatusCondition::Poison | StatusCondition::BadPoison)
    }
}

/// Cannot fall asleep.
pub struct Insomnia;

#[async_trait]
impl AbilityEffect for Insomnia {
    fn blocks_status(&self, status: StatusCondition) -> bool {
        status == StatusCondition::Sleep
    }
}

/// Cannot be paralyzed.
pub struct Limber;

#[async_trait]
impl AbilityEffect for Limber {
    fn blocks_status(&self, status: StatusCondition) -> bool {
        status == StatusCondition::Paralysis
    }
}

/// Cannot be burned.
pub struct WaterVeil;

#[async_trait]
impl AbilityEffect for WaterVeil {
    fn blocks_status(&self, status: StatusCondition) -> bool {
        status == StatusCondition::Burn
    }
}

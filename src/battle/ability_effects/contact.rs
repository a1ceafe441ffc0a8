// In: src/battle/ability_effects/contact.rs

use super::{AbilityEffect, EffectContext};
use crate::battle::conditions::{status_name, try_inflict_status};
use crate::battle::state::{BattlePokemonState, TurnRng};
use crate::errors::BattleResult;
use crate::pokemon::{PokemonType, StatusCondition};
use async_trait::async_trait;

const CONTACT_STATUS_CHANCE: u8 = 30;

async fn contact_inflict(
    attacker: &BattlePokemonState,
    ctx: &EffectContext<'_>,
    rng: &mut TurnRng,
    status: StatusCondition,
    immune_types: &[PokemonType],
    reason: &str,
) -> BattleResult<Option<String>> {
    if rng.next_outcome(reason) >= CONTACT_STATUS_CHANCE {
        return Ok(None);
    }
    // The holder's own protection rules apply to the attacker; nothing
    // breaks them in this direction.
    let stuck = try_inflict_status(ctx, attacker, status, immune_types, false).await?;
    Ok(stuck.then(|| format!("The attacker was {} on contact!", status_name(status))))
}

/// 30% chance to paralyze an attacker that lands a hit. Electric-types
/// shrug it off.
pub struct Static;

#[async_trait]
impl AbilityEffect for Static {
    async fn contact_status(
        &self,
        _holder: &BattlePokemonState,
        attacker: &BattlePokemonState,
        ctx: &EffectContext<'_>,
        rng: &mut TurnRng,
    ) -> BattleResult<Option<String>> {
        contact_inflict(
            attacker,
            ctx,
            rng,
            StatusCondition::Paralysis,
            &[PokemonType::Electric],
            "Static Contact Check",
        )
        .await
    }
}

/// 30% chance to burn an attacker that lands a hit. Fire-types are immune.
pub struct FlameBody;

#[async_trait]
impl AbilityEffect for FlameBody {
    async fn contact_status(
        &self,
        _holder: &BattlePokemonState,
        attacker: &BattlePokemonState,
        ctx: &EffectContext<'_>,
        rng: &mut TurnRng,
    ) -> BattleResult<Option<String>> {
        contact_inflict(
            attacker,
            ctx,
            rng,
            StatusCondition::Burn,
            &[PokemonType::Fire],
            "Flame Body Contact Check",
        )
        .await
    }
}

/// 30% chance to poison an attacker that lands a hit. Poison- and
/// Steel-types are immune.
pub struct PoisonPoint;

#[async_trait]
impl AbilityEffect for PoisonPoint {
    async fn contact_status(
        &self,
        _holder: &BattlePokemonState,
        attacker: &BattlePokemonState,
        ctx: &EffectContext<'_>,
        rng: &mut TurnRng,
    ) -> BattleResult<Option<String>> {
        contact_inflict(
            attacker,
            ctx,
            rng,
            StatusCondition::Poison,
            &[PokemonType::Poison, PokemonType::Steel],
            "Poison Point Contact Check",
        )
        .await
    }
}

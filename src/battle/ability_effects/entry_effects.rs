// In: src/battle/ability_effects/entry_effects.rs

use super::{AbilityEffect, EffectContext};
use crate::battle::state::{BattlePokemonState, RankedStat, Weather};
use crate::errors::{BattleError, BattleResult};
use async_trait::async_trait;

/// Lowers the opposing active pokemon's Attack by one rank on entry.
pub struct Intimidate;

#[async_trait]
impl AbilityEffect for Intimidate {
    async fn on_entry(
        &self,
        holder: &BattlePokemonState,
        ctx: &EffectContext<'_>,
    ) -> BattleResult<Option<String>> {
        let opponent_id = ctx.battle.opponent_of(holder.trainer_id);
        let Some(mut foe) = ctx
            .store
            .find_active_state(ctx.battle.id, opponent_id)
            .await?
        else {
            return Ok(None);
        };
        if foe.ranks.modify(RankedStat::Attack, -1) == 0 {
            return Ok(None);
        }
        ctx.store.update_state(&foe).await?;
        Ok(Some("Intimidate lowered the foe's Attack!".to_string()))
    }
}

async fn set_weather(ctx: &EffectContext<'_>, weather: Weather) -> BattleResult<bool> {
    if ctx.battle.weather == weather {
        return Ok(false);
    }
    let mut battle = ctx
        .store
        .find_battle(ctx.battle.id)
        .await?
        .ok_or_else(|| BattleError::not_found("battle", ctx.battle.id))?;
    battle.weather = weather;
    ctx.store.update_battle(&battle).await?;
    Ok(true)
}

/// Summons rain on entry.
pub struct Drizzle;

#[async_trait]
impl AbilityEffect for Drizzle {
    async fn on_entry(
        &self,
        _holder: &BattlePokemonState,
        ctx: &EffectContext<'_>,
    ) -> BattleResult<Option<String>> {
        let changed = set_weather(ctx, Weather::Rain).await?;
        Ok(changed.then(|| "Drizzle made it rain!".to_string()))
    }
}

/// Summons harsh sunlight on entry.
pub struct Drought;

#[async_trait]
impl AbilityEffect for Drought {
    async fn on_entry(
        &self,
        _holder: &BattlePokemonState,
        ctx: &EffectContext<'_>,
    ) -> BattleResult<Option<String>> {
        let changed = set_weather(ctx, Weather::Sun).await?;
        Ok(changed.then(|| "Drought turned the sunlight harsh!".to_string()))
    }
}

/// Raises its own Speed by one rank at the end of every turn.
pub struct SpeedBoost;

#[async_trait]
impl AbilityEffect for SpeedBoost {
    async fn on_turn_end(
        &self,
        holder: &BattlePokemonState,
        ctx: &EffectContext<'_>,
    ) -> BattleResult<Option<String>> {
        let mut state = ctx
            .store
            .find_state(holder.id)
            .await?
            .ok_or_else(|| BattleError::not_found("battle pokemon state", holder.id))?;
        if state.is_fainted() || state.ranks.modify(RankedStat::Speed, 1) == 0 {
            return Ok(None);
        }
        ctx.store.update_state(&state).await?;
        Ok(Some("Speed Boost raised its Speed!".to_string()))
    }
}

/// Recovers a third of max HP when withdrawn from battle.
pub struct Regenerator;

#[async_trait]
impl AbilityEffect for Regenerator {
    async fn on_switch_out(
        &self,
        holder: &BattlePokemonState,
        ctx: &EffectContext<'_>,
    ) -> BattleResult<Option<String>> {
        let mut state = ctx
            .store
            .find_state(holder.id)
            .await?
            .ok_or_else(|| BattleError::not_found("battle pokemon state", holder.id))?;
        if state.is_fainted() {
            return Ok(None);
        }
        let healed = state.heal(state.max_hp / 3);
        if healed == 0 {
            return Ok(None);
        }
        ctx.store.update_state(&state).await?;
        Ok(Some("Regenerator restored some HP!".to_string()))
    }
}

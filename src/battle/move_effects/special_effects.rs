// In: src/battle/move_effects/special_effects.rs

// --- IMPORTS ---
use super::MoveEffect;
use crate::battle::ability_effects::EffectContext;
use crate::battle::state::{BattlePokemonState, TurnRng, Weather};
use crate::errors::{BattleError, BattleResult};
use crate::move_data::MoveData;
use async_trait::async_trait;

/// Recoil: the user takes a fraction of the damage it dealt.
pub struct Recoil {
    divisor: u32,
}

#[async_trait]
impl MoveEffect for Recoil {
    async fn after_damage(
        &self,
        user: &BattlePokemonState,
        _target: &BattlePokemonState,
        damage: u32,
        _mv: &MoveData,
        ctx: &EffectContext<'_>,
    ) -> BattleResult<Option<String>> {
        let recoil = damage / self.divisor;
        if recoil == 0 {
            return Ok(None);
        }
        let mut state = ctx
            .store
            .find_state(user.id)
            .await?
            .ok_or_else(|| BattleError::not_found("battle pokemon state", user.id))?;
        state.apply_damage(recoil);
        ctx.store.update_state(&state).await?;
        Ok(Some(format!("It was hurt by recoil ({} HP)!", recoil)))
    }
}

/// A status move that changes the weather.
pub struct WeatherMove {
    weather: Weather,
    message: &'static str,
}

#[async_trait]
impl MoveEffect for WeatherMove {
    async fn on_use(
        &self,
        _user: &BattlePokemonState,
        _target: &BattlePokemonState,
        _mv: &MoveData,
        ctx: &EffectContext<'_>,
        _rng: &mut TurnRng,
    ) -> BattleResult<Option<String>> {
        if ctx.battle.weather == self.weather {
            return Ok(Some("But it failed!".to_string()));
        }
        let mut battle = ctx
            .store
            .find_battle(ctx.battle.id)
            .await?
            .ok_or_else(|| BattleError::not_found("battle", ctx.battle.id))?;
        battle.weather = self.weather;
        ctx.store.update_battle(&battle).await?;
        Ok(Some(self.message.to_string()))
    }
}

/// Wipes every stat rank on both active pokemon.
pub struct HazeEffect;

#[async_trait]
impl MoveEffect for HazeEffect {
    async fn on_use(
        &self,
        _user: &BattlePokemonState,
        _target: &BattlePokemonState,
        _mv: &MoveData,
        ctx: &EffectContext<'_>,
        _rng: &mut TurnRng,
    ) -> BattleResult<Option<String>> {
        for trainer_id in [ctx.battle.trainer1_id, ctx.battle.trainer2_id] {
            if let Some(mut state) = ctx
                .store
                .find_active_state(ctx.battle.id, trainer_id)
                .await?
            {
                state.ranks.reset();
                ctx.store.update_state(&state).await?;
            }
        }
        Ok(Some("All stat changes were eliminated!".to_string()))
    }
}

// A third of the damage dealt comes back on the user
pub static DOUBLE_EDGE: Recoil = Recoil { divisor: 3 };

pub static RAIN_DANCE: WeatherMove = WeatherMove {
    weather: Weather::Rain,
    message: "It started to rain!",
};

pub static SUNNY_DAY: WeatherMove = WeatherMove {
    weather: Weather::Sun,
    message: "The sunlight turned harsh!",
};

pub static HAZE: HazeEffect = HazeEffect;

// In: src/battle/move_effects/status_effects.rs

// --- IMPORTS ---
use super::MoveEffect;
use crate::battle::ability_effects::EffectContext;
use crate::battle::conditions::{status_name, try_inflict_status};
use crate::battle::state::{BattlePokemonState, TurnRng};
use crate::errors::BattleResult;
use crate::move_data::MoveData;
use crate::pokemon::{PokemonType, StatusCondition};
use async_trait::async_trait;

/// A damaging move with a chance of leaving a status on the target.
pub struct StatusStrike {
    chance: u8,
    status: StatusCondition,
    immune_types: &'static [PokemonType],
}

#[async_trait]
impl MoveEffect for StatusStrike {
    async fn on_hit(
        &self,
        _user: &BattlePokemonState,
        target: &BattlePokemonState,
        mv: &MoveData,
        ctx: &EffectContext<'_>,
        rng: &mut TurnRng,
    ) -> BattleResult<Option<String>> {
        let reason = format!("{} Status Check", mv.name);
        if rng.next_outcome(&reason) >= self.chance {
            return Ok(None);
        }
        let stuck = try_inflict_status(
            ctx,
            target,
            self.status,
            self.immune_types,
            ctx.attacker_breaks_abilities,
        )
        .await?;
        Ok(stuck.then(|| format!("The target was {}!", status_name(self.status))))
    }
}

/// A pure status move whose entire payload is inflicting a condition.
pub struct StatusInflict {
    status: StatusCondition,
    immune_types: &'static [PokemonType],
}

#[async_trait]
impl MoveEffect for StatusInflict {
    async fn on_use(
        &self,
        _user: &BattlePokemonState,
        target: &BattlePokemonState,
        _mv: &MoveData,
        ctx: &EffectContext<'_>,
        _rng: &mut TurnRng,
    ) -> BattleResult<Option<String>> {
        let stuck = try_inflict_status(
            ctx,
            target,
            self.status,
            self.immune_types,
            ctx.attacker_breaks_abilities,
        )
        .await?;
        Ok(Some(if stuck {
            format!("The target was {}!", status_name(self.status))
        } else {
            "But it failed!".to_string()
        }))
    }
}

pub static FLAMETHROWER: StatusStrike = StatusStrike {
    chance: 10,
    status: StatusCondition::Burn,
    immune_types: &[PokemonType::Fire],
};

pub static THUNDERBOLT: StatusStrike = StatusStrike {
    chance: 10,
    status: StatusCondition::Paralysis,
    immune_types: &[PokemonType::Electric],
};

pub static ICE_BEAM: StatusStrike = StatusStrike {
    chance: 10,
    status: StatusCondition::Freeze,
    immune_types: &[PokemonType::Ice],
};

pub static POISON_STING: StatusStrike = StatusStrike {
    chance: 30,
    status: StatusCondition::Poison,
    immune_types: &[PokemonType::Poison, PokemonType::Steel],
};

pub static TOXIC: StatusInflict = StatusInflict {
    status: StatusCondition::BadPoison,
    immune_types: &[PokemonType::Poison, PokemonType::Steel],
};

pub static THUNDER_WAVE: StatusInflict = StatusInflict {
    status: StatusCondition::Paralysis,
    immune_types: &[PokemonType::Electric],
};

pub static WILL_O_WISP: StatusInflict = StatusInflict {
    status: StatusCondition::Burn,
    immune_types: &[PokemonType::Fire],
};

pub static SLEEP_POWDER: StatusInflict = StatusInflict {
    status: StatusCondition::Sleep,
    immune_types: &[PokemonType::Grass],
};

pub static CONFUSE_RAY: StatusInflict = StatusInflict {
    status: StatusCondition::Confusion,
    immune_types: &[],
};

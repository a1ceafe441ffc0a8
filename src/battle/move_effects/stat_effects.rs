// In: src/battle/move_effects/stat_effects.rs

// --- IMPORTS ---
use super::MoveEffect;
use crate::battle::ability_effects::EffectContext;
use crate::battle::state::{BattlePokemonState, RankedStat, TurnRng};
use crate::errors::{BattleError, BattleResult};
use crate::move_data::MoveData;
use async_trait::async_trait;

#[derive(Clone, Copy)]
enum Side {
    User,
    Target,
}

/// A status move that shifts one stat rank on one side.
pub struct StatChange {
    side: Side,
    stat: RankedStat,
    delta: i8,
}

fn stat_label(stat: RankedStat) -> &'static str {
    match stat {
        RankedStat::Attack => "Attack",
        RankedStat::Defense => "Defense",
        RankedStat::SpAttack => "Sp. Atk",
        RankedStat::SpDefense => "Sp. Def",
        RankedStat::Speed => "Speed",
        RankedStat::Accuracy => "accuracy",
        RankedStat::Evasion => "evasiveness",
    }
}

#[async_trait]
impl MoveEffect for StatChange {
    async fn on_use(
        &self,
        user: &BattlePokemonState,
        target: &BattlePokemonState,
        _mv: &MoveData,
        ctx: &EffectContext<'_>,
        _rng: &mut TurnRng,
    ) -> BattleResult<Option<String>> {
        let subject_id = match self.side {
            Side::User => user.id,
            Side::Target => target.id,
        };
        let mut state = ctx
            .store
            .find_state(subject_id)
            .await?
            .ok_or_else(|| BattleError::not_found("battle pokemon state", subject_id))?;
        if state.ranks.modify(self.stat, self.delta) == 0 {
            return Ok(Some("But it failed!".to_string()));
        }
        ctx.store.update_state(&state).await?;

        let direction = match self.side {
            Side::User => "Its",
            Side::Target => "The foe's",
        };
        let verb = if self.delta >= 2 {
            "rose sharply"
        } else if self.delta > 0 {
            "rose"
        } else if self.delta <= -2 {
            "fell harshly"
        } else {
            "fell"
        };
        Ok(Some(format!(
            "{} {} {}!",
            direction,
            stat_label(self.stat),
            verb
        )))
    }
}

pub static GROWL: StatChange = StatChange {
    side: Side::Target,
    stat: RankedStat::Attack,
    delta: -1,
};

pub static TAIL_WHIP: StatChange = StatChange {
    side: Side::Target,
    stat: RankedStat::Defense,
    delta: -1,
};

pub static SWORDS_DANCE: StatChange = StatChange {
    side: Side::User,
    stat: RankedStat::Attack,
    delta: 2,
};

pub static HARDEN: StatChange = StatChange {
    side: Side::User,
    stat: RankedStat::Defense,
    delta: 1,
};

pub static AGILITY: StatChange = StatChange {
    side: Side::User,
    stat: RankedStat::Speed,
    delta: 2,
};

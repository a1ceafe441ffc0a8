// In: src/battle/move_effects/mod.rs

// --- HELPER MODULES ---
mod special_effects;
mod stat_effects;
mod status_effects;

// --- IMPORTS ---
use crate::battle::ability_effects::EffectContext;
use crate::battle::state::{BattlePokemonState, TurnRng};
use crate::errors::BattleResult;
use crate::move_data::MoveData;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Hooks a move can implement beyond its damage payload. All default to
/// no-ops; the orchestrator calls exactly one path per action:
/// `on_use` for status moves, `on_miss` on a miss, and
/// `after_damage` + `on_hit` on a landed damaging move.
#[async_trait]
pub trait MoveEffect: Send + Sync {
    async fn on_use(
        &self,
        _user: &BattlePokemonState,
        _target: &BattlePokemonState,
        _mv: &MoveData,
        _ctx: &EffectContext<'_>,
        _rng: &mut TurnRng,
    ) -> BattleResult<Option<String>> {
        Ok(None)
    }

    async fn on_hit(
        &self,
        _user: &BattlePokemonState,
        _target: &BattlePokemonState,
        _mv: &MoveData,
        _ctx: &EffectContext<'_>,
        _rng: &mut TurnRng,
    ) -> BattleResult<Option<String>> {
        Ok(None)
    }

    async fn on_miss(
        &self,
        _user: &BattlePokemonState,
        _mv: &MoveData,
        _ctx: &EffectContext<'_>,
    ) -> BattleResult<Option<String>> {
        Ok(None)
    }

    /// Runs after damage was applied, with the HP actually removed.
    async fn after_damage(
        &self,
        _user: &BattlePokemonState,
        _target: &BattlePokemonState,
        _damage: u32,
        _mv: &MoveData,
        _ctx: &EffectContext<'_>,
    ) -> BattleResult<Option<String>> {
        Ok(None)
    }
}

/// The closed set of implemented move effects, looked up by move name.
/// Moves whose names are not listed here are plain damage (or inert status
/// moves).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveEffectKind {
    Flamethrower,
    Thunderbolt,
    IceBeam,
    PoisonSting,
    Toxic,
    ThunderWave,
    WillOWisp,
    SleepPowder,
    ConfuseRay,
    Growl,
    TailWhip,
    SwordsDance,
    Harden,
    Agility,
    DoubleEdge,
    RainDance,
    SunnyDay,
    Haze,
}

impl MoveEffectKind {
    pub fn from_name(name: &str) -> Option<Self> {
        use MoveEffectKind::*;
        Some(match name {
            "Flamethrower" => Flamethrower,
            "Thunderbolt" => Thunderbolt,
            "Ice Beam" => IceBeam,
            "Poison Sting" => PoisonSting,
            "Toxic" => Toxic,
            "Thunder Wave" => ThunderWave,
            "Will-O-Wisp" => WillOWisp,
            "Sleep Powder" => SleepPowder,
            "Confuse Ray" => ConfuseRay,
            "Growl" => Growl,
            "Tail Whip" => TailWhip,
            "Swords Dance" => SwordsDance,
            "Harden" => Harden,
            "Agility" => Agility,
            "Double-Edge" => DoubleEdge,
            "Rain Dance" => RainDance,
            "Sunny Day" => SunnyDay,
            "Haze" => Haze,
            _ => return None,
        })
    }

    pub fn effect(self) -> &'static dyn MoveEffect {
        use MoveEffectKind::*;
        match self {
            Flamethrower => &status_effects::FLAMETHROWER,
            Thunderbolt => &status_effects::THUNDERBOLT,
            IceBeam => &status_effects::ICE_BEAM,
            PoisonSting => &status_effects::POISON_STING,
            Toxic => &status_effects::TOXIC,
            ThunderWave => &status_effects::THUNDER_WAVE,
            WillOWisp => &status_effects::WILL_O_WISP,
            SleepPowder => &status_effects::SLEEP_POWDER,
            ConfuseRay => &status_effects::CONFUSE_RAY,
            Growl => &stat_effects::GROWL,
            TailWhip => &stat_effects::TAIL_WHIP,
            SwordsDance => &stat_effects::SWORDS_DANCE,
            Harden => &stat_effects::HARDEN,
            Agility => &stat_effects::AGILITY,
            DoubleEdge => &special_effects::DOUBLE_EDGE,
            RainDance => &special_effects::RAIN_DANCE,
            SunnyDay => &special_effects::SUNNY_DAY,
            Haze => &special_effects::HAZE,
        }
    }
}

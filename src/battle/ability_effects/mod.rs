// In: src/battle/ability_effects/mod.rs

// --- HELPER MODULES ---
mod contact;
mod damage_mods;
mod entry_effects;
mod immunities;
mod stat_mods;

// --- IMPORTS ---
use crate::battle::state::{Battle, BattlePokemonState, TurnRng, Weather};
use crate::battle::stats::ComputedStats;
use crate::errors::BattleResult;
use crate::move_data::MoveData;
use crate::pokemon::{PokemonType, StatusCondition, TrainedPokemon};
use crate::store::BattleStore;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Everything a stateful hook needs to read or mutate battle state.
/// `attacker_breaks_abilities` is set per move action; outside a move flow
/// it is false.
pub struct EffectContext<'a> {
    pub store: &'a dyn BattleStore,
    pub battle: &'a Battle,
    pub attacker_breaks_abilities: bool,
}

/// One side of a move resolution, fully assembled: persisted state, static
/// data, computed stats, and a recognized ability (if any).
pub struct Combatant<'a> {
    pub state: &'a BattlePokemonState,
    pub pokemon: &'a TrainedPokemon,
    pub stats: ComputedStats,
    pub ability: Option<AbilityKind>,
}

impl Combatant<'_> {
    pub fn effect(&self) -> Option<&'static dyn AbilityEffect> {
        self.ability.map(AbilityKind::effect)
    }

    pub fn breaks_abilities(&self) -> bool {
        self.effect().is_some_and(|e| e.breaks_abilities())
    }
}

/// Capability-style ability hooks. An effect overrides only the hooks it
/// cares about; everything else is a no-op.
///
/// The sync hooks feed the pure calculators; the async hooks run at battle
/// lifecycle points and may touch the store.
#[async_trait]
pub trait AbilityEffect: Send + Sync {
    /// True for abilities that ignore the defender's ability-based
    /// immunities, evasion bonuses, and status protection.
    fn breaks_abilities(&self) -> bool {
        false
    }

    fn modify_priority(&self, _mv: &MoveData, _priority: i8) -> Option<i8> {
        None
    }

    fn modify_speed(&self, _holder: &Combatant<'_>, _weather: Weather, _speed: f64) -> Option<f64> {
        None
    }

    /// Replacement for the move's base accuracy (percent).
    fn modify_accuracy(&self, _mv: &MoveData, _accuracy: f64) -> Option<f64> {
        None
    }

    /// Extra evasion as a fraction in [0, 1]; applied as `x (1 - v)`.
    fn evasion_bonus(&self, _holder: &Combatant<'_>, _weather: Weather) -> Option<f64> {
        None
    }

    /// Attacker-side replacement for the running damage total.
    fn modify_damage_dealt(
        &self,
        _attacker: &Combatant<'_>,
        _mv: &MoveData,
        _damage: f64,
    ) -> Option<f64> {
        None
    }

    /// Defender-side replacement for the running damage total.
    fn modify_damage(&self, _defender: &Combatant<'_>, _mv: &MoveData, _damage: f64) -> Option<f64> {
        None
    }

    fn is_immune_to_type(&self, _move_type: PokemonType) -> bool {
        false
    }

    fn blocks_status(&self, _status: StatusCondition) -> bool {
        false
    }

    async fn on_entry(
        &self,
        _holder: &BattlePokemonState,
        _ctx: &EffectContext<'_>,
    ) -> BattleResult<Option<String>> {
        Ok(None)
    }

    async fn on_switch_out(
        &self,
        _holder: &BattlePokemonState,
        _ctx: &EffectContext<'_>,
    ) -> BattleResult<Option<String>> {
        Ok(None)
    }

    async fn on_turn_end(
        &self,
        _holder: &BattlePokemonState,
        _ctx: &EffectContext<'_>,
    ) -> BattleResult<Option<String>> {
        Ok(None)
    }

    /// Fires when a damaging move resolved to zero damage against the
    /// holder (the immunity soaked the hit).
    async fn on_after_taking_damage(
        &self,
        _holder: &BattlePokemonState,
        _mv: &MoveData,
        _ctx: &EffectContext<'_>,
    ) -> BattleResult<Option<String>> {
        Ok(None)
    }

    /// Fires on the defender after it took damage from a move; may inflict
    /// a status on the attacker.
    async fn contact_status(
        &self,
        _holder: &BattlePokemonState,
        _attacker: &BattlePokemonState,
        _ctx: &EffectContext<'_>,
        _rng: &mut TurnRng,
    ) -> BattleResult<Option<String>> {
        Ok(None)
    }
}

/// The closed set of implemented abilities. Ability names on trained
/// pokemon are free-form strings; this enum is the only place they are
/// interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityKind {
    Intimidate,
    MoldBreaker,
    CompoundEyes,
    SandVeil,
    Levitate,
    VoltAbsorb,
    WaterAbsorb,
    Multiscale,
    ThickFat,
    Guts,
    Static,
    FlameBody,
    PoisonPoint,
    SwiftSwim,
    Chlorophyll,
    Prankster,
    Immunity,
    Insomnia,
    Limber,
    WaterVeil,
    Drizzle,
    Drought,
    SpeedBoost,
    Regenerator,
}

impl AbilityKind {
    pub fn from_name(name: &str) -> Option<Self> {
        use AbilityKind::*;
        Some(match name {
            "Intimidate" => Intimidate,
            "Mold Breaker" => MoldBreaker,
            "Compound Eyes" => CompoundEyes,
            "Sand Veil" => SandVeil,
            "Levitate" => Levitate,
            "Volt Absorb" => VoltAbsorb,
            "Water Absorb" => WaterAbsorb,
            "Multiscale" => Multiscale,
            "Thick Fat" => ThickFat,
            "Guts" => Guts,
            "Static" => Static,
            "Flame Body" => FlameBody,
            "Poison Point" => PoisonPoint,
            "Swift Swim" => SwiftSwim,
            "Chlorophyll" => Chlorophyll,
            "Prankster" => Prankster,
            "Immunity" => Immunity,
            "Insomnia" => Insomnia,
            "Limber" => Limber,
            "Water Veil" => WaterVeil,
            "Drizzle" => Drizzle,
            "Drought" => Drought,
            "Speed Boost" => SpeedBoost,
            "Regenerator" => Regenerator,
            _ => return None,
        })
    }

    pub fn name(self) -> &'static str {
        use AbilityKind::*;
        match self {
            Intimidate => "Intimidate",
            MoldBreaker => "Mold Breaker",
            CompoundEyes => "Compound Eyes",
            SandVeil => "Sand Veil",
            Levitate => "Levitate",
            VoltAbsorb => "Volt Absorb",
            WaterAbsorb => "Water Absorb",
            Multiscale => "Multiscale",
            ThickFat => "Thick Fat",
            Guts => "Guts",
            Static => "Static",
            FlameBody => "Flame Body",
            PoisonPoint => "Poison Point",
            SwiftSwim => "Swift Swim",
            Chlorophyll => "Chlorophyll",
            Prankster => "Prankster",
            Immunity => "Immunity",
            Insomnia => "Insomnia",
            Limber => "Limber",
            WaterVeil => "Water Veil",
            Drizzle => "Drizzle",
            Drought => "Drought",
            SpeedBoost => "Speed Boost",
            Regenerator => "Regenerator",
        }
    }

    /// Look up an ability by the optional name stored on a trained pokemon.
    pub fn from_optional_name(name: Option<&str>) -> Option<Self> {
        name.and_then(Self::from_name)
    }

    pub fn effect(self) -> &'static dyn AbilityEffect {
        use AbilityKind::*;
        match self {
            Intimidate => &self::entry_effects::Intimidate,
            MoldBreaker => &self::immunities::MoldBreaker,
            CompoundEyes => &self::stat_mods::CompoundEyes,
            SandVeil => &self::stat_mods::SandVeil,
            Levitate => &self::immunities::Levitate,
            VoltAbsorb => &self::immunities::VoltAbsorb,
            WaterAbsorb => &self::immunities::WaterAbsorb,
            Multiscale => &self::damage_mods::Multiscale,
            ThickFat => &self::damage_mods::ThickFat,
            Guts => &self::damage_mods::Guts,
            Static => &self::contact::Static,
            FlameBody => &self::contact::FlameBody,
            PoisonPoint => &self::contact::PoisonPoint,
            SwiftSwim => &self::stat_mods::SwiftSwim,
            Chlorophyll => &self::stat_mods::Chlorophyll,
            Prankster => &self::stat_mods::Prankster,
            Immunity => &self::immunities::Immunity,
            Insomnia => &self::immunities::Insomnia,
            Limber => &self::immunities::Limber,
            WaterVeil => &self::immunities::WaterVeil,
            Drizzle => &self::entry_effects::Drizzle,
            Drought => &self::entry_effects::Drought,
            SpeedBoost => &self::entry_effects::SpeedBoost,
            Regenerator => &self::entry_effects::Regenerator,
        }
    }
}

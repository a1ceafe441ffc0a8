// In: src/pokemon.rs

use serde::{Deserialize, Serialize};

pub type TrainedPokemonId = u64;
pub type TrainerId = u64;
pub type TeamId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PokemonType {
    Normal,
    Fighting,
    Flying,
    Poison,
    Ground,
    Rock,
    Bug,
    Ghost,
    Steel,
    Fire,
    Water,
    Grass,
    Electric,
    Psychic,
    Ice,
    Dragon,
    Dark,
    Fairy,
}

/// Non-volatile status conditions. A pokemon carries at most one; absence
/// means healthy. Bad-poison and sleep progression counters are tracked by
/// the turn orchestrator, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusCondition {
    Burn,
    Freeze,
    Paralysis,
    Poison,
    BadPoison,
    Sleep,
    Flinch,
    Confusion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stat {
    Hp,
    Attack,
    Defense,
    SpAttack,
    SpDefense,
    Speed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub sp_attack: u16,
    pub sp_defense: u16,
    pub speed: u16,
}

impl BaseStats {
    pub fn get(&self, stat: Stat) -> u16 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::SpAttack => self.sp_attack,
            Stat::SpDefense => self.sp_defense,
            Stat::Speed => self.speed,
        }
    }
}

/// Per-stat genetic values (IVs) or training values (EVs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatSpread {
    pub hp: u8,
    pub attack: u8,
    pub defense: u8,
    pub sp_attack: u8,
    pub sp_defense: u8,
    pub speed: u8,
}

impl StatSpread {
    pub fn uniform(value: u8) -> Self {
        StatSpread {
            hp: value,
            attack: value,
            defense: value,
            sp_attack: value,
            sp_defense: value,
            speed: value,
        }
    }

    pub fn get(&self, stat: Stat) -> u8 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::SpAttack => self.sp_attack,
            Stat::SpDefense => self.sp_defense,
            Stat::Speed => self.speed,
        }
    }
}

/// All 25 natures. Five of them raise and lower the same stat, which makes
/// them neutral in practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Nature {
    Hardy,
    Lonely,
    Brave,
    Adamant,
    Naughty,
    Bold,
    Docile,
    Relaxed,
    Impish,
    Lax,
    Timid,
    Hasty,
    Serious,
    Jolly,
    Naive,
    Modest,
    Mild,
    Quiet,
    Bashful,
    Rash,
    Calm,
    Gentle,
    Sassy,
    Careful,
    Quirky,
}

impl Nature {
    /// The (raised, lowered) stat pair for this nature.
    pub fn modifiers(self) -> (Stat, Stat) {
        use Nature::*;
        use Stat::*;
        match self {
            Hardy => (Attack, Attack),
            Lonely => (Attack, Defense),
            Brave => (Attack, Speed),
            Adamant => (Attack, SpAttack),
            Naughty => (Attack, SpDefense),
            Bold => (Defense, Attack),
            Docile => (Defense, Defense),
            Relaxed => (Defense, Speed),
            Impish => (Defense, SpAttack),
            Lax => (Defense, SpDefense),
            Timid => (Speed, Attack),
            Hasty => (Speed, Defense),
            Serious => (Speed, Speed),
            Jolly => (Speed, SpAttack),
            Naive => (Speed, SpDefense),
            Modest => (SpAttack, Attack),
            Mild => (SpAttack, Defense),
            Quiet => (SpAttack, Speed),
            Bashful => (SpAttack, SpAttack),
            Rash => (SpAttack, SpDefense),
            Calm => (SpDefense, Attack),
            Gentle => (SpDefense, Defense),
            Sassy => (SpDefense, Speed),
            Careful => (SpDefense, SpAttack),
            Quirky => (SpDefense, SpDefense),
        }
    }

    /// Nature multiplier for a stat: 1.1 raised, 0.9 lowered, 1.0 otherwise.
    /// Neutral natures (raised == lowered) always return 1.0.
    pub fn multiplier(self, stat: Stat) -> f64 {
        let (raised, lowered) = self.modifiers();
        if raised == lowered {
            1.0
        } else if stat == raised {
            1.1
        } else if stat == lowered {
            0.9
        } else {
            1.0
        }
    }
}

/// A trainer-owned pokemon as it exists outside any battle: genetics,
/// typing, known moves, and an ability name. The ability is a free-form
/// string; only names the effect registry recognizes do anything in battle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainedPokemon {
    pub id: TrainedPokemonId,
    pub name: String,
    pub level: u8,
    pub types: Vec<PokemonType>,
    pub base_stats: BaseStats,
    pub ivs: StatSpread,
    pub evs: StatSpread,
    pub nature: Option<Nature>,
    pub ability: Option<String>,
    pub move_ids: Vec<crate::move_data::MoveId>,
}

impl TrainedPokemon {
    pub fn has_type(&self, t: PokemonType) -> bool {
        self.types.contains(&t)
    }
}

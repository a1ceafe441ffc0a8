// In: src/battle/stats.rs

use crate::pokemon::{Nature, Stat, TrainedPokemon};
use serde::{Deserialize, Serialize};

/// Fully calculated stats for one pokemon, before any in-battle rank
/// modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputedStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub sp_attack: u32,
    pub sp_defense: u32,
    pub speed: u32,
}

impl ComputedStats {
    pub fn get(&self, stat: Stat) -> u32 {
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

/// Calculate final stats from genetics.
///
/// HP = floor((2*Base + IV + floor(EV/4)) * Level / 100) + Level + 10
/// Other = (floor((2*Base + IV + floor(EV/4)) * Level / 100) + 5) * nature
pub fn calculate_stats(pokemon: &TrainedPokemon) -> ComputedStats {
    ComputedStats {
        hp: calculate_hp(pokemon),
        attack: calculate_other(pokemon, Stat::Attack),
        defense: calculate_other(pokemon, Stat::Defense),
        sp_attack: calculate_other(pokemon, Stat::SpAttack),
        sp_defense: calculate_other(pokemon, Stat::SpDefense),
        speed: calculate_other(pokemon, Stat::Speed),
    }
}

fn stat_core(pokemon: &TrainedPokemon, stat: Stat) -> u32 {
    let base = pokemon.base_stats.get(stat) as u32;
    let iv = pokemon.ivs.get(stat) as u32;
    let ev = pokemon.evs.get(stat) as u32;
    (2 * base + iv + ev / 4) * pokemon.level as u32 / 100
}

fn calculate_hp(pokemon: &TrainedPokemon) -> u32 {
    stat_core(pokemon, Stat::Hp) + pokemon.level as u32 + 10
}

fn calculate_other(pokemon: &TrainedPokemon, stat: Stat) -> u32 {
    let flat = stat_core(pokemon, stat) + 5;
    let multiplier = pokemon
        .nature
        .map(|n| n.multiplier(stat))
        .unwrap_or(1.0);
    (flat as f64 * multiplier).floor() as u32
}

/// Battle-stat rank multiplier (attack/defense/speed families).
/// Positive ranks: (2 + r) / 2. Negative ranks: 2 / (2 - r).
pub fn stat_rank_multiplier(rank: i8) -> f64 {
    let rank = rank.clamp(-6, 6);
    if rank >= 0 {
        (2.0 + rank as f64) / 2.0
    } else {
        2.0 / (2.0 - rank as f64)
    }
}

/// Accuracy/evasion rank multiplier.
/// Positive ranks: (3 + r) / 3. Negative ranks: 3 / (3 - r).
pub fn accuracy_rank_multiplier(rank: i8) -> f64 {
    let rank = rank.clamp(-6, 6);
    if rank >= 0 {
        (3.0 + rank as f64) / 3.0
    } else {
        3.0 / (3.0 - rank as f64)
    }
}

/// A computed stat scaled by its rank, floored back to an integer.
pub fn ranked_stat(stat: u32, rank: i8) -> u32 {
    (stat as f64 * stat_rank_multiplier(rank)).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pokemon::{BaseStats, PokemonType, StatSpread};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn max_trained(nature: Option<Nature>) -> TrainedPokemon {
        TrainedPokemon {
            id: 1,
            name: "Benchmark".to_string(),
            level: 50,
            types: vec![PokemonType::Normal],
            base_stats: BaseStats {
                hp: 100,
                attack: 100,
                defense: 100,
                sp_attack: 100,
                sp_defense: 100,
                speed: 100,
            },
            ivs: StatSpread::uniform(31),
            evs: StatSpread::uniform(252),
            nature,
            ability: None,
            move_ids: vec![],
        }
    }

    #[test]
    fn benchmark_spread_at_level_fifty() {
        // base 100, IV 31, EV 252, level 50, no nature
        let stats = calculate_stats(&max_trained(None));
        assert_eq!(stats.hp, 207);
        assert_eq!(stats.attack, 152);
        assert_eq!(stats.speed, 152);
    }

    #[test]
    fn nature_applies_after_flat_formula() {
        let stats = calculate_stats(&max_trained(Some(Nature::Adamant)));
        assert_eq!(stats.attack, (152.0_f64 * 1.1).floor() as u32); // 167
        assert_eq!(stats.sp_attack, (152.0_f64 * 0.9).floor() as u32); // 136
        assert_eq!(stats.hp, 207); // HP never takes a nature
    }

    #[test]
    fn neutral_nature_changes_nothing() {
        let stats = calculate_stats(&max_trained(Some(Nature::Serious)));
        assert_eq!(stats, calculate_stats(&max_trained(None)));
    }

    #[rstest]
    #[case(0, 1.0)]
    #[case(1, 1.5)]
    #[case(2, 2.0)]
    #[case(6, 4.0)]
    #[case(-1, 2.0 / 3.0)]
    #[case(-2, 0.5)]
    #[case(-6, 0.25)]
    fn battle_rank_multipliers(#[case] rank: i8, #[case] expected: f64) {
        assert!((stat_rank_multiplier(rank) - expected).abs() < 1e-9);
    }

    #[rstest]
    #[case(0, 1.0)]
    #[case(1, 4.0 / 3.0)]
    #[case(6, 3.0)]
    #[case(-1, 0.75)]
    #[case(-6, 1.0 / 3.0)]
    fn accuracy_rank_multipliers(#[case] rank: i8, #[case] expected: f64) {
        assert!((accuracy_rank_multiplier(rank) - expected).abs() < 1e-9);
    }

    #[test]
    fn out_of_range_ranks_clamp_before_lookup() {
        assert_eq!(stat_rank_multiplier(9), stat_rank_multiplier(6));
        assert_eq!(accuracy_rank_multiplier(-9), accuracy_rank_multiplier(-6));
    }

    #[test]
    fn ranked_stat_floors() {
        assert_eq!(ranked_stat(100, 2), 200);
        assert_eq!(ranked_stat(100, -1), 66); // 100 * 2/3 floored
        assert_eq!(ranked_stat(151, 1), 226); // 226.5 floored
    }
}

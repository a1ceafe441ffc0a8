// In: src/battle/damage.rs

use crate::battle::ability_effects::Combatant;
use crate::battle::state::Weather;
use crate::battle::stats::ranked_stat;
use crate::move_data::{MoveCategory, MoveData, TypeChart};
use crate::pokemon::{PokemonType, StatusCondition};

/// Every battle is fought at this level.
pub const BATTLE_LEVEL: u64 = 50;

const CONFUSION_POWER: u64 = 40;

/// The flat damage core: floor(floor((2L/5 + 2) * power * atk / def) / 50) + 2.
fn base_damage(power: u64, attack: u64, defense: u64) -> u64 {
    let level_term = 2 * BATTLE_LEVEL / 5 + 2;
    (level_term * power * attack) / defense.max(1) / 50 + 2
}

/// Full damage pipeline for a damaging move. Returns 0 for status moves,
/// powerless moves, immunities, and totals that round down to nothing —
/// there is no minimum-1 floor.
pub fn calculate_damage(
    attacker: &Combatant<'_>,
    defender: &Combatant<'_>,
    mv: &MoveData,
    chart: &TypeChart,
    weather: Weather,
) -> u32 {
    let Some(power) = mv.power else {
        return 0;
    };
    let (mut attack, defense) = match mv.category {
        MoveCategory::Physical => (
            ranked_stat(attacker.stats.attack, attacker.state.ranks.attack),
            ranked_stat(defender.stats.defense, defender.state.ranks.defense),
        ),
        MoveCategory::Special => (
            ranked_stat(attacker.stats.sp_attack, attacker.state.ranks.sp_attack),
            ranked_stat(defender.stats.sp_defense, defender.state.ranks.sp_defense),
        ),
        MoveCategory::Status => return 0,
    };

    // Burn cuts the effective Attack stat itself, before the base formula
    if attacker.state.status == Some(StatusCondition::Burn) && mv.category == MoveCategory::Physical
    {
        attack /= 2;
    }

    let base = base_damage(power as u64, attack as u64, defense as u64);
    let mut multiplier = 1.0_f64;

    if attacker.pokemon.has_type(mv.move_type) {
        multiplier *= 1.5;
    }

    let effectiveness = chart.combined_effectiveness(mv.move_type, &defender.pokemon.types);
    multiplier *= effectiveness;

    // Hooks replace the running total; the multiplier is re-derived so the
    // final floor happens exactly once.
    if let Some(effect) = attacker.effect() {
        let running = base as f64 * multiplier;
        if let Some(replaced) = effect.modify_damage_dealt(attacker, mv, running) {
            multiplier = replaced / base as f64;
        }
    }
    if let Some(effect) = defender.effect() {
        let running = base as f64 * multiplier;
        if let Some(replaced) = effect.modify_damage(defender, mv, running) {
            multiplier = replaced / base as f64;
        }
    }

    multiplier *= weather_multiplier(weather, mv.move_type);

    if effectiveness == 0.0 {
        return 0;
    }
    if !attacker.breaks_abilities() {
        if let Some(effect) = defender.effect() {
            if effect.is_immune_to_type(mv.move_type) {
                return 0;
            }
        }
    }

    let total = (base as f64 * multiplier).floor();
    if total <= 0.0 {
        0
    } else {
        total as u32
    }
}

/// Sun feeds Fire and starves Water; rain does the opposite.
fn weather_multiplier(weather: Weather, move_type: PokemonType) -> f64 {
    match (weather, move_type) {
        (Weather::Sun, PokemonType::Fire) => 1.5,
        (Weather::Sun, PokemonType::Water) => 0.5,
        (Weather::Rain, PokemonType::Water) => 1.5,
        (Weather::Rain, PokemonType::Fire) => 0.5,
        _ => 1.0,
    }
}

/// A confused pokemon striking itself: a fixed 40-power typeless physical
/// hit through the base formula only. No STAB, chart, weather, or hooks.
pub fn confusion_self_hit_damage(victim: &Combatant<'_>) -> u32 {
    let attack = ranked_stat(victim.stats.attack, victim.state.ranks.attack);
    let defense = ranked_stat(victim.stats.defense, victim.state.ranks.defense);
    base_damage(CONFUSION_POWER, attack as u64, defense as u64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::ability_effects::AbilityKind;
    use crate::battle::state::BattlePokemonState;
    use crate::battle::stats::ComputedStats;
    use crate::pokemon::{BaseStats, StatSpread, TrainedPokemon};
    use pretty_assertions::assert_eq;

    fn trained(id: u64, types: Vec<PokemonType>) -> TrainedPokemon {
        TrainedPokemon {
            id,
            name: format!("Subject {}", id),
            level: 50,
            types,
            base_stats: BaseStats {
                hp: 80,
                attack: 80,
                defense: 80,
                sp_attack: 80,
                sp_defense: 80,
                speed: 80,
            },
            ivs: StatSpread::default(),
            evs: StatSpread::default(),
            nature: None,
            ability: None,
            move_ids: vec![],
        }
    }

    fn state(id: u64) -> BattlePokemonState {
        BattlePokemonState::new(id, 1, id, id, 100, 100).unwrap()
    }

    fn flat_stats() -> ComputedStats {
        ComputedStats {
            hp: 100,
            attack: 100,
            defense: 100,
            sp_attack: 100,
            sp_defense: 100,
            speed: 100,
        }
    }

    fn strike(move_type: PokemonType, category: MoveCategory, power: u16) -> MoveData {
        MoveData {
            id: 1,
            name: "Test Strike".to_string(),
            move_type,
            category,
            power: Some(power),
            accuracy: Some(100.0),
            max_pp: 15,
            priority: 0,
        }
    }

    fn combatant<'a>(
        state: &'a BattlePokemonState,
        pokemon: &'a TrainedPokemon,
        ability: Option<AbilityKind>,
    ) -> Combatant<'a> {
        Combatant {
            state,
            pokemon,
            stats: flat_stats(),
            ability,
        }
    }

    #[test]
    fn baseline_hundred_power_between_flat_hundreds() {
        let ap = trained(1, vec![PokemonType::Water]);
        let dp = trained(2, vec![PokemonType::Normal]);
        let (a, d) = (state(1), state(2));
        let mv = strike(PokemonType::Fire, MoveCategory::Physical, 100);
        let damage = calculate_damage(
            &combatant(&a, &ap, None),
            &combatant(&d, &dp, None),
            &mv,
            &TypeChart::new(),
            Weather::None,
        );
        assert_eq!(damage, 46);
    }

    #[test]
    fn stab_is_half_again() {
        let ap = trained(1, vec![PokemonType::Fire]);
        let dp = trained(2, vec![PokemonType::Normal]);
        let (a, d) = (state(1), state(2));
        let mv = strike(PokemonType::Fire, MoveCategory::Physical, 100);
        let damage = calculate_damage(
            &combatant(&a, &ap, None),
            &combatant(&d, &dp, None),
            &mv,
            &TypeChart::new(),
            Weather::None,
        );
        assert_eq!(damage, 69); // floor(46 * 1.5)
    }

    #[test]
    fn chart_immunity_means_zero() {
        let ap = trained(1, vec![PokemonType::Normal]);
        let dp = trained(2, vec![PokemonType::Ghost]);
        let (a, d) = (state(1), state(2));
        let mv = strike(PokemonType::Normal, MoveCategory::Physical, 100);
        let mut chart = TypeChart::new();
        chart.set(PokemonType::Normal, PokemonType::Ghost, 0.0);
        let damage = calculate_damage(
            &combatant(&a, &ap, None),
            &combatant(&d, &dp, None),
            &mv,
            &chart,
            Weather::None,
        );
        assert_eq!(damage, 0);
    }

    #[test]
    fn no_minimum_one_floor() {
        let ap = trained(1, vec![PokemonType::Water]);
        let dp = trained(2, vec![PokemonType::Rock]);
        let mut a = state(1);
        a.ranks.attack = -6;
        let mut d = state(2);
        d.ranks.defense = 6;
        let mv = strike(PokemonType::Fire, MoveCategory::Physical, 10);
        let mut chart = TypeChart::new();
        chart.set(PokemonType::Fire, PokemonType::Rock, 0.5);
        // atk 25 vs def 400, power 10: base lands at 2; halved and floored to 1,
        // then rank-crushed totals can reach 0
        let damage = calculate_damage(
            &combatant(&a, &ap, None),
            &combatant(&d, &dp, None),
            &mv,
            &chart,
            Weather::None,
        );
        assert_eq!(damage, 1); // floor(2 * 0.5); still no clamp upward
        chart.set(PokemonType::Fire, PokemonType::Rock, 0.25);
        let damage = calculate_damage(
            &combatant(&a, &ap, None),
            &combatant(&d, &dp, None),
            &mv,
            &chart,
            Weather::None,
        );
        assert_eq!(damage, 0); // floor(2 * 0.25) = 0, and it stays 0
    }

    #[test]
    fn burn_halves_physical_but_not_special() {
        let ap = trained(1, vec![PokemonType::Water]);
        let dp = trained(2, vec![PokemonType::Normal]);
        let mut a = state(1);
        a.status = Some(StatusCondition::Burn);
        let d = state(2);
        let chart = TypeChart::new();
        let physical = strike(PokemonType::Fire, MoveCategory::Physical, 100);
        let special = strike(PokemonType::Fire, MoveCategory::Special, 100);
        // Attack 100 drops to 50 before the formula: 22 * 100 * 50 / 100 / 50 + 2
        assert_eq!(
            calculate_damage(
                &combatant(&a, &ap, None),
                &combatant(&d, &dp, None),
                &physical,
                &chart,
                Weather::None,
            ),
            24
        );
        assert_eq!(
            calculate_damage(
                &combatant(&a, &ap, None),
                &combatant(&d, &dp, None),
                &special,
                &chart,
                Weather::None,
            ),
            46
        );
    }

    #[test]
    fn weather_swings_fire_and_water() {
        let ap = trained(1, vec![PokemonType::Normal]);
        let dp = trained(2, vec![PokemonType::Normal]);
        let (a, d) = (state(1), state(2));
        let chart = TypeChart::new();
        let fire = strike(PokemonType::Fire, MoveCategory::Special, 100);
        let water = strike(PokemonType::Water, MoveCategory::Special, 100);

        let sun_fire = calculate_damage(
            &combatant(&a, &ap, None),
            &combatant(&d, &dp, None),
            &fire,
            &chart,
            Weather::Sun,
        );
        let sun_water = calculate_damage(
            &combatant(&a, &ap, None),
            &combatant(&d, &dp, None),
            &water,
            &chart,
            Weather::Sun,
        );
        let rain_water = calculate_damage(
            &combatant(&a, &ap, None),
            &combatant(&d, &dp, None),
            &water,
            &chart,
            Weather::Rain,
        );
        assert_eq!(sun_fire, 69);
        assert_eq!(sun_water, 23);
        assert_eq!(rain_water, 69);
    }

    #[test]
    fn multiscale_halves_at_full_hp_only() {
        let ap = trained(1, vec![PokemonType::Water]);
        let dp = trained(2, vec![PokemonType::Normal]);
        let a = state(1);
        let full = state(2);
        let mut chipped = state(2);
        chipped.current_hp = 99;
        let mv = strike(PokemonType::Fire, MoveCategory::Physical, 100);
        let chart = TypeChart::new();
        assert_eq!(
            calculate_damage(
                &combatant(&a, &ap, None),
                &combatant(&full, &dp, Some(AbilityKind::Multiscale)),
                &mv,
                &chart,
                Weather::None,
            ),
            23
        );
        assert_eq!(
            calculate_damage(
                &combatant(&a, &ap, None),
                &combatant(&chipped, &dp, Some(AbilityKind::Multiscale)),
                &mv,
                &chart,
                Weather::None,
            ),
            46
        );
    }

    #[test]
    fn guts_compounds_with_burn() {
        let ap = trained(1, vec![PokemonType::Water]);
        let dp = trained(2, vec![PokemonType::Normal]);
        let mut a = state(1);
        a.status = Some(StatusCondition::Burn);
        let d = state(2);
        let mv = strike(PokemonType::Fire, MoveCategory::Physical, 100);
        // burn cuts attack to 50 (base 24), Guts replaces with 36.0
        let damage = calculate_damage(
            &combatant(&a, &ap, Some(AbilityKind::Guts)),
            &combatant(&d, &dp, None),
            &mv,
            &TypeChart::new(),
            Weather::None,
        );
        assert_eq!(damage, 36);
    }

    #[test]
    fn levitate_soaks_ground_unless_broken() {
        let ap = trained(1, vec![PokemonType::Normal]);
        let dp = trained(2, vec![PokemonType::Normal]);
        let (a, d) = (state(1), state(2));
        let mv = strike(PokemonType::Ground, MoveCategory::Physical, 100);
        let chart = TypeChart::new();
        assert_eq!(
            calculate_damage(
                &combatant(&a, &ap, None),
                &combatant(&d, &dp, Some(AbilityKind::Levitate)),
                &mv,
                &chart,
                Weather::None,
            ),
            0
        );
        assert_eq!(
            calculate_damage(
                &combatant(&a, &ap, Some(AbilityKind::MoldBreaker)),
                &combatant(&d, &dp, Some(AbilityKind::Levitate)),
                &mv,
                &chart,
                Weather::None,
            ),
            46
        );
    }

    #[test]
    fn confusion_self_hit_uses_own_stats() {
        let ap = trained(1, vec![PokemonType::Fire]);
        let a = state(1);
        // 22 * 40 * 100 / 100 = 880; 880 / 50 = 17; + 2 = 19
        assert_eq!(confusion_self_hit_damage(&combatant(&a, &ap, None)), 19);
    }
}

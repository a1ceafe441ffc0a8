// In: src/battle/accuracy.rs

use crate::battle::ability_effects::Combatant;
use crate::battle::state::{TurnRng, Weather};
use crate::battle::stats::accuracy_rank_multiplier;
use crate::move_data::MoveData;

/// Resolve whether a move connects.
///
/// Moves without an accuracy value never miss. Otherwise the pipeline is:
/// the attacker's accuracy rank and defender's evasion rank scale the base
/// accuracy, the attacker's ability may replace that rank-adjusted value,
/// the defender's ability may shave off a fraction (unless the attacker
/// breaks abilities), and the result clamps to [0, 100] before the roll.
pub fn move_hits(
    attacker: &Combatant<'_>,
    defender: &Combatant<'_>,
    mv: &MoveData,
    weather: Weather,
    rng: &mut TurnRng,
) -> bool {
    let Some(base_accuracy) = mv.accuracy else {
        return true;
    };

    let mut accuracy = base_accuracy;
    accuracy *= accuracy_rank_multiplier(attacker.state.ranks.accuracy);
    accuracy /= accuracy_rank_multiplier(defender.state.ranks.evasion);

    // The attacker's ability sees the rank-adjusted value, not the base
    if let Some(effect) = attacker.effect() {
        if let Some(replaced) = effect.modify_accuracy(mv, accuracy) {
            accuracy = replaced;
        }
    }

    if !attacker.breaks_abilities() {
        if let Some(effect) = defender.effect() {
            if let Some(bonus) = effect.evasion_bonus(defender, weather) {
                accuracy *= 1.0 - bonus.clamp(0.0, 1.0);
            }
        }
    }

    let effective = accuracy.clamp(0.0, 100.0);
    (rng.next_outcome("Accuracy Roll") as f64) < effective
}

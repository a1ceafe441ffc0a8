// In: src/battle/conditions.rs

use crate::battle::ability_effects::{AbilityKind, EffectContext};
use crate::battle::state::{BattlePokemonState, TurnRng};
use crate::errors::{BattleError, BattleResult};
use crate::pokemon::{PokemonType, StatusCondition};

/// Outcome of the pre-action status gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActCheck {
    /// Free to act
    Acts,
    /// Frozen solid, but the 20% thaw roll succeeded: the status clears and
    /// the action proceeds
    Thawed,
    /// The status prevents the action this turn
    Blocked,
}

/// Can the pokemon act this turn? Sleep and flinch always block; freeze
/// thaws 20% of the time; paralysis lets 75% of actions through. Everything
/// else never interferes here.
pub fn can_act(status: Option<StatusCondition>, rng: &mut TurnRng) -> ActCheck {
    match status {
        None => ActCheck::Acts,
        Some(StatusCondition::Sleep) | Some(StatusCondition::Flinch) => ActCheck::Blocked,
        Some(StatusCondition::Freeze) => {
            if rng.next_outcome("Thaw Check") < 20 {
                ActCheck::Thawed
            } else {
                ActCheck::Blocked
            }
        }
        Some(StatusCondition::Paralysis) => {
            if rng.next_outcome("Paralysis Check") < 75 {
                ActCheck::Acts
            } else {
                ActCheck::Blocked
            }
        }
        Some(StatusCondition::Burn)
        | Some(StatusCondition::Poison)
        | Some(StatusCondition::BadPoison)
        | Some(StatusCondition::Confusion) => ActCheck::Acts,
    }
}

/// 33% chance a confused pokemon strikes itself instead of moving.
pub fn confusion_self_hit(rng: &mut TurnRng) -> bool {
    rng.next_outcome("Confusion Check") < 33
}

/// Confusion runs 1 to 4 turns. `turns_confused` counts completed turn-ends
/// since infliction: the first never clears, the last always does, and the
/// two in between clear 33% of the time.
pub fn confusion_clears(turns_confused: u32, rng: &mut TurnRng) -> bool {
    match turns_confused {
        0 => false,
        1 | 2 => rng.next_outcome("Confusion Clear Check") < 33,
        _ => true,
    }
}

/// End-of-turn chip damage for a status. `bad_poison_turns` counts completed
/// turn-ends since infliction, so the first tick uses 1/16 of max HP and the
/// fraction grows until it caps at half.
pub fn turn_end_damage(status: StatusCondition, max_hp: u32, bad_poison_turns: u32) -> u32 {
    match status {
        StatusCondition::Burn => max_hp / 16,
        StatusCondition::Poison => max_hp / 8,
        StatusCondition::BadPoison => {
            let fraction = ((bad_poison_turns + 1) as f64 / 16.0).min(0.5);
            (max_hp as f64 * fraction).floor() as u32
        }
        _ => 0,
    }
}

/// Wake-up chance (percent) at the nth turn-end spent asleep: 33%, then
/// 50%, then guaranteed.
pub fn sleep_wake_chance(nights_asleep: u32) -> u8 {
    match nights_asleep {
        0 | 1 => 33,
        2 => 50,
        _ => 100,
    }
}

pub fn status_name(status: StatusCondition) -> &'static str {
    match status {
        StatusCondition::Burn => "burned",
        StatusCondition::Freeze => "frozen",
        StatusCondition::Paralysis => "paralyzed",
        StatusCondition::Poison => "poisoned",
        StatusCondition::BadPoison => "badly poisoned",
        StatusCondition::Sleep => "asleep",
        StatusCondition::Flinch => "flinching",
        StatusCondition::Confusion => "confused",
    }
}

/// Try to put a status on `target`, honoring the standard protections: an
/// occupied status slot, type-based immunity, and the target's ability
/// (unless `breaks_protection`). Returns whether the status stuck.
pub async fn try_inflict_status(
    ctx: &EffectContext<'_>,
    target: &BattlePokemonState,
    status: StatusCondition,
    immune_types: &[PokemonType],
    breaks_protection: bool,
) -> BattleResult<bool> {
    let mut state = ctx
        .store
        .find_state(target.id)
        .await?
        .ok_or_else(|| BattleError::not_found("battle pokemon state", target.id))?;
    if state.status.is_some() {
        return Ok(false);
    }

    let trained = ctx
        .store
        .find_trained_pokemon(state.trained_pokemon_id)
        .await?
        .ok_or_else(|| BattleError::not_found("trained pokemon", state.trained_pokemon_id))?;
    if trained.types.iter().any(|t| immune_types.contains(t)) {
        return Ok(false);
    }
    if !breaks_protection {
        if let Some(kind) = AbilityKind::from_optional_name(trained.ability.as_deref()) {
            if kind.effect().blocks_status(status) {
                return Ok(false);
            }
        }
    }

    state.status = Some(status);
    ctx.store.update_state(&state).await?;
    Ok(true)
}

// In: src/battle/order.rs

use crate::battle::ability_effects::Combatant;
use crate::battle::state::{ActionChoice, Battle, TrainerAction, Weather};
use crate::battle::stats::ranked_stat;
use crate::move_data::MoveData;
use crate::pokemon::StatusCondition;

/// A submitted action paired with everything ordering needs: the acting
/// combatant and, for moves, the resolved move data.
pub struct PendingAction<'a> {
    pub action: TrainerAction,
    pub combatant: Combatant<'a>,
    pub move_data: Option<&'a MoveData>,
}

impl PendingAction<'_> {
    fn is_switch(&self) -> bool {
        matches!(self.action.choice, ActionChoice::Switch { .. })
    }

    fn priority(&self) -> i8 {
        let Some(mv) = self.move_data else {
            return 0;
        };
        let mut priority = mv.priority;
        if let Some(effect) = self.combatant.effect() {
            if let Some(modified) = effect.modify_priority(mv, priority) {
                priority = modified;
            }
        }
        priority
    }
}

/// Speed as it matters for turn order: the computed stat through its rank,
/// halved by paralysis, then ability-adjusted, floored at the end.
pub fn effective_speed(combatant: &Combatant<'_>, weather: Weather) -> u32 {
    let mut speed = ranked_stat(combatant.stats.speed, combatant.state.ranks.speed) as f64;
    if combatant.state.status == Some(StatusCondition::Paralysis) {
        speed *= 0.5;
    }
    if let Some(effect) = combatant.effect() {
        if let Some(modified) = effect.modify_speed(combatant, weather, speed) {
            speed = modified;
        }
    }
    speed.floor() as u32
}

/// Decide who acts first. Switches always precede moves (two switches keep
/// submission order); moves compare priority, then effective speed, and a
/// full tie goes to trainer 1.
pub fn order_actions<'a>(
    battle: &Battle,
    weather: Weather,
    first: PendingAction<'a>,
    second: PendingAction<'a>,
) -> [PendingAction<'a>; 2] {
    let first_leads = match (first.is_switch(), second.is_switch()) {
        (true, _) => true,
        (false, true) => false,
        (false, false) => {
            let (p1, p2) = (first.priority(), second.priority());
            if p1 != p2 {
                p1 > p2
            } else {
                let s1 = effective_speed(&first.combatant, weather);
                let s2 = effective_speed(&second.combatant, weather);
                if s1 != s2 {
                    s1 > s2
                } else {
                    first.action.trainer_id == battle.trainer1_id
                }
            }
        }
    };

    if first_leads {
        [first, second]
    } else {
        [second, first]
    }
}

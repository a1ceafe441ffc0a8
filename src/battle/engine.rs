// In: src/battle/engine.rs

use crate::battle::ability_effects::{AbilityKind, Combatant, EffectContext};
use crate::battle::accuracy::move_hits;
use crate::battle::conditions::{
    can_act, confusion_clears, confusion_self_hit, sleep_wake_chance, turn_end_damage, ActCheck,
};
use crate::battle::damage::{calculate_damage, confusion_self_hit_damage};
use crate::battle::move_effects::MoveEffectKind;
use crate::battle::order::{order_actions, PendingAction};
use crate::battle::state::{
    ActionChoice, ActionLogEntry, Battle, BattleId, BattlePokemonState, BattleStatus, MoveUsage,
    StateId, TrainerAction, TurnOutcome, TurnRng,
};
use crate::battle::stats::{calculate_stats, ComputedStats};
use crate::errors::{BattleError, BattleResult};
use crate::move_data::{MoveData, MoveId};
use crate::pokemon::{StatusCondition, TeamId, TrainedPokemon, TrainedPokemonId, TrainerId};
use crate::store::BattleStore;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

/// One side of a move resolution with everything fetched and computed.
struct Fighter {
    state: BattlePokemonState,
    pokemon: TrainedPokemon,
    stats: ComputedStats,
    ability: Option<AbilityKind>,
}

impl Fighter {
    fn combatant(&self) -> Combatant<'_> {
        Combatant {
            state: &self.state,
            pokemon: &self.pokemon,
            stats: self.stats,
            ability: self.ability,
        }
    }
}

/// The turn orchestrator. Owns the store handle, one async lock per battle
/// (turns for the same battle never interleave), and the status progression
/// counters (bad poison, sleep, confusion), which are working data and
/// never persisted.
pub struct BattleEngine {
    store: Arc<dyn BattleStore>,
    locks: Mutex<HashMap<BattleId, Arc<tokio::sync::Mutex<()>>>>,
    bad_poison_turns: Mutex<HashMap<(BattleId, StateId), u32>>,
    sleep_turns: Mutex<HashMap<(BattleId, StateId), u32>>,
    confusion_turns: Mutex<HashMap<(BattleId, StateId), u32>>,
}

impl BattleEngine {
    pub fn new(store: Arc<dyn BattleStore>) -> Self {
        BattleEngine {
            store,
            locks: Mutex::new(HashMap::new()),
            bad_poison_turns: Mutex::new(HashMap::new()),
            sleep_turns: Mutex::new(HashMap::new()),
            confusion_turns: Mutex::new(HashMap::new()),
        }
    }

    // --- BATTLE SETUP ---

    /// Create a battle between two trainers, each bringing a team: one state
    /// row per team member at full calculated HP, move usage rows at max PP,
    /// leads activated and their entry abilities fired.
    pub async fn start_battle(
        &self,
        trainer1_id: TrainerId,
        trainer2_id: TrainerId,
        team1_id: TeamId,
        team2_id: TeamId,
    ) -> BattleResult<Battle> {
        let battle = Battle::new(0, trainer1_id, trainer2_id, team1_id, team2_id)?;
        let battle = self.store.create_battle(battle).await?;
        info!(battle_id = battle.id, trainer1_id, trainer2_id, "battle started");

        for (trainer_id, team_id) in [(trainer1_id, team1_id), (trainer2_id, team2_id)] {
            let members = self.store.team_members(team_id).await?;
            if members.is_empty() {
                return Err(BattleError::validation(format!(
                    "team {} has no members",
                    team_id
                )));
            }
            for (position, &pokemon_id) in members.iter().enumerate() {
                self.enroll_team_member(&battle, trainer_id, pokemon_id, position == 0)
                    .await?;
            }
        }

        // Entry abilities may have rewritten the battle row (weather setters)
        self.require_battle(battle.id).await
    }

    async fn enroll_team_member(
        &self,
        battle: &Battle,
        trainer_id: TrainerId,
        pokemon_id: TrainedPokemonId,
        is_lead: bool,
    ) -> BattleResult<()> {
        let trained = self.require_trained_pokemon(pokemon_id).await?;
        let stats = calculate_stats(&trained);
        let state = BattlePokemonState::new(0, battle.id, trainer_id, pokemon_id, stats.hp, stats.hp)?;
        let mut state = self.store.create_state(state).await?;

        for &move_id in &trained.move_ids {
            let data = self.require_move_data(move_id).await?;
            let usage = MoveUsage::new(0, battle.id, state.id, move_id, data.max_pp)?;
            self.store.create_move_usage(usage).await?;
        }

        if is_lead {
            state.is_active = true;
            self.store.update_state(&state).await?;
            self.fire_entry_ability(battle, &state).await?;
        }
        Ok(())
    }

    async fn fire_entry_ability(
        &self,
        battle: &Battle,
        state: &BattlePokemonState,
    ) -> BattleResult<Option<String>> {
        let trained = self.require_trained_pokemon(state.trained_pokemon_id).await?;
        let Some(kind) = AbilityKind::from_optional_name(trained.ability.as_deref()) else {
            return Ok(None);
        };
        let ctx = self.context(battle);
        kind.effect().on_entry(state, &ctx).await
    }

    // --- TURN EXECUTION ---

    /// Run one full turn. The battle's lock is held for the whole call, so
    /// turns for the same battle are strictly serialized.
    pub async fn execute_turn(
        &self,
        battle_id: BattleId,
        first: TrainerAction,
        second: TrainerAction,
        rng: &mut TurnRng,
    ) -> BattleResult<TurnOutcome> {
        let lock = self.battle_lock(battle_id);
        let _guard = lock.lock().await;

        let battle = self.require_battle(battle_id).await?;
        if battle.status != BattleStatus::Active {
            return Err(BattleError::invalid_state(format!(
                "battle {} is not active",
                battle_id
            )));
        }
        if first.trainer_id == second.trainer_id
            || !battle.has_trainer(first.trainer_id)
            || !battle.has_trainer(second.trainer_id)
        {
            return Err(BattleError::validation(
                "each trainer must submit exactly one action",
            ));
        }
        debug!(battle_id, turn = battle.turn_number, "executing turn");

        let ordered = self.determine_order(&battle, first, second).await?;

        let mut log = Vec::new();
        for action in ordered {
            let result = match action.choice {
                ActionChoice::Switch { trained_pokemon_id } => {
                    self.execute_switch(battle_id, action.trainer_id, trained_pokemon_id)
                        .await?
                }
                ActionChoice::UseMove { move_id } => {
                    self.execute_move(battle_id, action.trainer_id, move_id, rng)
                        .await?
                }
            };
            debug!(battle_id, trainer_id = action.trainer_id, %result, "action resolved");
            log.push(ActionLogEntry::for_action(
                action.trainer_id,
                action.choice,
                result,
            ));

            if let Some(outcome) = self.try_complete(battle_id, &log).await? {
                return Ok(outcome);
            }
        }

        let battle = self.require_battle(battle_id).await?;
        for trainer_id in [battle.trainer1_id, battle.trainer2_id] {
            self.process_turn_end(&battle, trainer_id, rng, &mut log)
                .await?;
            if let Some(outcome) = self.try_complete(battle_id, &log).await? {
                return Ok(outcome);
            }
        }

        let mut battle = self.require_battle(battle_id).await?;
        battle.turn_number += 1;
        self.store.update_battle(&battle).await?;
        Ok(TurnOutcome {
            battle,
            log,
            winner_trainer_id: None,
        })
    }

    /// Resolve both submitted actions into an execution order.
    async fn determine_order(
        &self,
        battle: &Battle,
        first: TrainerAction,
        second: TrainerAction,
    ) -> BattleResult<[TrainerAction; 2]> {
        let fighter1 = self.load_active_fighter(battle.id, first.trainer_id).await?;
        let fighter2 = self.load_active_fighter(battle.id, second.trainer_id).await?;
        let move1 = self.action_move_data(&first).await?;
        let move2 = self.action_move_data(&second).await?;

        let pending1 = PendingAction {
            action: first,
            combatant: fighter1.combatant(),
            move_data: move1.as_ref(),
        };
        let pending2 = PendingAction {
            action: second,
            combatant: fighter2.combatant(),
            move_data: move2.as_ref(),
        };
        let [lead, follow] = order_actions(battle, battle.weather, pending1, pending2);
        Ok([lead.action, follow.action])
    }

    async fn action_move_data(&self, action: &TrainerAction) -> BattleResult<Option<MoveData>> {
        match action.choice {
            ActionChoice::UseMove { move_id } => Ok(Some(self.require_move_data(move_id).await?)),
            ActionChoice::Switch { .. } => Ok(None),
        }
    }

    // --- SWITCHING ---

    async fn execute_switch(
        &self,
        battle_id: BattleId,
        trainer_id: TrainerId,
        target_pokemon_id: TrainedPokemonId,
    ) -> BattleResult<String> {
        let battle = self.require_battle(battle_id).await?;
        let ctx = self.context(&battle);
        let mut messages = Vec::new();

        if let Some(outgoing) = self.store.find_active_state(battle_id, trainer_id).await? {
            let trained = self.require_trained_pokemon(outgoing.trained_pokemon_id).await?;
            if let Some(kind) = AbilityKind::from_optional_name(trained.ability.as_deref()) {
                if let Some(msg) = kind.effect().on_switch_out(&outgoing, &ctx).await? {
                    messages.push(msg);
                }
            }
            // Withdrawing clears every status condition and its counters
            let mut outgoing = self.require_state(outgoing.id).await?;
            outgoing.status = None;
            outgoing.is_active = false;
            self.store.update_state(&outgoing).await?;
            self.clear_counters(battle_id, outgoing.id);
        }

        let mut incoming = self
            .store
            .find_state_by_pokemon(battle_id, target_pokemon_id)
            .await?
            .ok_or_else(|| BattleError::not_found("battle pokemon state", target_pokemon_id))?;
        if incoming.trainer_id != trainer_id {
            return Err(BattleError::validation(
                "cannot switch to another trainer's pokemon",
            ));
        }
        if !incoming.is_able() {
            return Err(BattleError::validation(
                "cannot switch to a fainted or abandoned pokemon",
            ));
        }
        incoming.is_active = true;
        self.store.update_state(&incoming).await?;

        let trained = self.require_trained_pokemon(target_pokemon_id).await?;
        messages.insert(0, format!("Go, {}!", trained.name));
        if let Some(msg) = self.fire_entry_ability(&battle, &incoming).await? {
            messages.push(msg);
        }
        Ok(messages.join(" "))
    }

    // --- MOVE EXECUTION ---

    async fn execute_move(
        &self,
        battle_id: BattleId,
        trainer_id: TrainerId,
        move_id: MoveId,
        rng: &mut TurnRng,
    ) -> BattleResult<String> {
        let battle = self.require_battle(battle_id).await?;
        let mut attacker = self.load_active_fighter(battle_id, trainer_id).await?;
        if attacker.state.is_fainted() {
            return Ok(format!("{} has fainted and cannot act!", attacker.pokemon.name));
        }

        // Pre-action status gate
        let mut prefix = Vec::new();
        match can_act(attacker.state.status, rng) {
            ActCheck::Blocked => {
                return Ok(blocked_message(&attacker.pokemon.name, attacker.state.status));
            }
            ActCheck::Thawed => {
                attacker.state.status = None;
                self.store.update_state(&attacker.state).await?;
                prefix.push(format!("{} thawed out!", attacker.pokemon.name));
            }
            ActCheck::Acts => {}
        }

        if attacker.state.status == Some(StatusCondition::Confusion) {
            prefix.push(format!("{} is confused!", attacker.pokemon.name));
            if confusion_self_hit(rng) {
                let damage = confusion_self_hit_damage(&attacker.combatant());
                attacker.state.apply_damage(damage);
                self.store.update_state(&attacker.state).await?;
                prefix.push(format!(
                    "It hurt itself in its confusion ({} damage)!",
                    damage
                ));
                return Ok(prefix.join(" "));
            }
        }

        let mv = self.require_move_data(move_id).await?;
        let effect = MoveEffectKind::from_name(&mv.name).map(MoveEffectKind::effect);
        let defender_trainer = battle.opponent_of(trainer_id);
        let defender = self.load_active_fighter(battle_id, defender_trainer).await?;

        let ctx = EffectContext {
            store: self.store.as_ref(),
            battle: &battle,
            attacker_breaks_abilities: attacker.combatant().breaks_abilities(),
        };
        let mut messages = prefix;

        if mv.is_damaging() {
            let hit = move_hits(
                &attacker.combatant(),
                &defender.combatant(),
                &mv,
                battle.weather,
                rng,
            );
            if !hit {
                self.consume_pp(attacker.state.id, move_id).await?;
                if let Some(effect) = effect {
                    if let Some(msg) = effect.on_miss(&attacker.state, &mv, &ctx).await? {
                        messages.push(msg);
                    }
                }
                messages.insert(0, format!("Used {} but it missed!", mv.name));
                return Ok(messages.join(" "));
            }

            let chart = self.store.type_chart().await?;
            let damage = calculate_damage(
                &attacker.combatant(),
                &defender.combatant(),
                &mv,
                &chart,
                battle.weather,
            );

            let mut defender_state = self.require_state(defender.state.id).await?;
            defender_state.apply_damage(damage);
            self.store.update_state(&defender_state).await?;

            // Work from the persisted row from here on
            let defender_state = self.require_state(defender.state.id).await?;
            if damage == 0 {
                if let Some(kind) = defender.ability {
                    if let Some(msg) = kind
                        .effect()
                        .on_after_taking_damage(&defender_state, &mv, &ctx)
                        .await?
                    {
                        messages.push(msg);
                    }
                }
            }
            if damage > 0 {
                if let Some(kind) = defender.ability {
                    if let Some(msg) = kind
                        .effect()
                        .contact_status(&defender_state, &attacker.state, &ctx, rng)
                        .await?
                    {
                        messages.push(msg);
                    }
                }
            }

            self.consume_pp(attacker.state.id, move_id).await?;
            if let Some(effect) = effect {
                if let Some(msg) = effect
                    .after_damage(&attacker.state, &defender_state, damage, &mv, &ctx)
                    .await?
                {
                    messages.push(msg);
                }
                if let Some(msg) = effect
                    .on_hit(&attacker.state, &defender_state, &mv, &ctx, rng)
                    .await?
                {
                    messages.push(msg);
                }
            }
            messages.insert(0, format!("Used {} and dealt {} damage!", mv.name, damage));
        } else {
            self.consume_pp(attacker.state.id, move_id).await?;
            let mut effect_message = None;
            if let Some(effect) = effect {
                effect_message = effect
                    .on_use(&attacker.state, &defender.state, &mv, &ctx, rng)
                    .await?;
            }
            messages.insert(0, format!("Used {}!", mv.name));
            messages.push(effect_message.unwrap_or_else(|| "(Status move)".to_string()));
        }

        Ok(messages.join(" "))
    }

    async fn consume_pp(&self, state_id: StateId, move_id: MoveId) -> BattleResult<()> {
        let mut usage = self
            .store
            .find_move_usage(state_id, move_id)
            .await?
            .ok_or_else(|| BattleError::not_found("move usage", move_id))?;
        usage.consume_pp();
        self.store.update_move_usage(&usage).await
    }

    // --- END OF TURN ---

    async fn process_turn_end(
        &self,
        battle: &Battle,
        trainer_id: TrainerId,
        rng: &mut TurnRng,
        log: &mut Vec<ActionLogEntry>,
    ) -> BattleResult<()> {
        let Some(state) = self.store.find_active_state(battle.id, trainer_id).await? else {
            return Ok(());
        };
        if state.is_fainted() {
            return Ok(());
        }
        let trained = self.require_trained_pokemon(state.trained_pokemon_id).await?;
        let mut state = state;

        match state.status {
            Some(StatusCondition::Sleep) => {
                let nights = self.bump_counter(&self.sleep_turns, battle.id, state.id);
                let chance = sleep_wake_chance(nights);
                if rng.next_outcome("Sleep Wake Check") < chance {
                    state.status = None;
                    self.store.update_state(&state).await?;
                    self.remove_counter(&self.sleep_turns, battle.id, state.id);
                    log.push(ActionLogEntry::turn_end(
                        trainer_id,
                        format!("{} woke up!", trained.name),
                    ));
                }
            }
            Some(StatusCondition::Flinch) => {
                state.status = None;
                self.store.update_state(&state).await?;
            }
            Some(StatusCondition::Confusion) => {
                let turns = self.read_counter(&self.confusion_turns, battle.id, state.id);
                self.bump_counter(&self.confusion_turns, battle.id, state.id);
                if confusion_clears(turns, rng) {
                    state.status = None;
                    self.store.update_state(&state).await?;
                    self.remove_counter(&self.confusion_turns, battle.id, state.id);
                    log.push(ActionLogEntry::turn_end(
                        trainer_id,
                        format!("{} snapped out of its confusion!", trained.name),
                    ));
                }
            }
            Some(status @ StatusCondition::Burn)
            | Some(status @ StatusCondition::Poison)
            | Some(status @ StatusCondition::BadPoison) => {
                let turns = if status == StatusCondition::BadPoison {
                    self.read_counter(&self.bad_poison_turns, battle.id, state.id)
                } else {
                    0
                };
                let damage = turn_end_damage(status, state.max_hp, turns);
                if status == StatusCondition::BadPoison {
                    self.bump_counter(&self.bad_poison_turns, battle.id, state.id);
                }
                if damage > 0 {
                    state.apply_damage(damage);
                    self.store.update_state(&state).await?;
                    log.push(ActionLogEntry::turn_end(
                        trainer_id,
                        format!(
                            "{} took {} damage from its status condition!",
                            trained.name, damage
                        ),
                    ));
                }
            }
            _ => {}
        }

        if state.is_fainted() {
            return Ok(());
        }
        if let Some(kind) = AbilityKind::from_optional_name(trained.ability.as_deref()) {
            let ctx = self.context(battle);
            if let Some(msg) = kind.effect().on_turn_end(&state, &ctx).await? {
                log.push(ActionLogEntry::turn_end(trainer_id, msg));
            }
        }
        Ok(())
    }

    // --- WIN CONDITIONS ---

    /// A trainer is defeated when none of their pokemon can still fight.
    async fn check_winner(&self, battle: &Battle) -> BattleResult<Option<TrainerId>> {
        let states = self.store.states_for_battle(battle.id).await?;
        let standing = |trainer_id: TrainerId| {
            states
                .iter()
                .any(|s| s.trainer_id == trainer_id && s.is_able())
        };
        if !standing(battle.trainer1_id) {
            Ok(Some(battle.trainer2_id))
        } else if !standing(battle.trainer2_id) {
            Ok(Some(battle.trainer1_id))
        } else {
            Ok(None)
        }
    }

    /// Win check + short-circuit: on a win the battle completes with the
    /// turn number untouched and the outcome returns immediately.
    async fn try_complete(
        &self,
        battle_id: BattleId,
        log: &[ActionLogEntry],
    ) -> BattleResult<Option<TurnOutcome>> {
        let mut battle = self.require_battle(battle_id).await?;
        let Some(winner) = self.check_winner(&battle).await? else {
            return Ok(None);
        };
        battle.complete(winner);
        self.store.update_battle(&battle).await?;
        self.clear_battle_counters(battle_id);
        info!(battle_id, winner_trainer_id = winner, "battle completed");
        Ok(Some(TurnOutcome {
            battle,
            log: log.to_vec(),
            winner_trainer_id: Some(winner),
        }))
    }

    /// A trainer forfeits. Their remaining pokemon are marked abandoned,
    /// the battle ends as Abandoned, and the opponent takes the win.
    pub async fn abandon_battle(
        &self,
        battle_id: BattleId,
        trainer_id: TrainerId,
    ) -> BattleResult<Battle> {
        let lock = self.battle_lock(battle_id);
        let _guard = lock.lock().await;

        let mut battle = self.require_battle(battle_id).await?;
        if battle.status != BattleStatus::Active {
            return Err(BattleError::invalid_state(format!(
                "battle {} is not active",
                battle_id
            )));
        }
        if !battle.has_trainer(trainer_id) {
            return Err(BattleError::validation(format!(
                "trainer {} is not in battle {}",
                trainer_id, battle_id
            )));
        }

        for mut state in self.store.states_for_battle(battle_id).await? {
            if state.trainer_id == trainer_id && !state.is_abandoned {
                state.is_abandoned = true;
                self.store.update_state(&state).await?;
            }
        }

        let winner = battle.opponent_of(trainer_id);
        battle.abandon(winner);
        self.store.update_battle(&battle).await?;
        self.clear_battle_counters(battle_id);
        info!(battle_id, deserter_id = trainer_id, winner_trainer_id = winner, "battle abandoned");
        Ok(battle)
    }

    // --- FETCH HELPERS ---

    fn context<'a>(&'a self, battle: &'a Battle) -> EffectContext<'a> {
        EffectContext {
            store: self.store.as_ref(),
            battle,
            attacker_breaks_abilities: false,
        }
    }

    async fn load_active_fighter(
        &self,
        battle_id: BattleId,
        trainer_id: TrainerId,
    ) -> BattleResult<Fighter> {
        let state = self
            .store
            .find_active_state(battle_id, trainer_id)
            .await?
            .ok_or_else(|| BattleError::not_found("active pokemon for trainer", trainer_id))?;
        let pokemon = self.require_trained_pokemon(state.trained_pokemon_id).await?;
        let stats = calculate_stats(&pokemon);
        let ability = AbilityKind::from_optional_name(pokemon.ability.as_deref());
        Ok(Fighter {
            state,
            pokemon,
            stats,
            ability,
        })
    }

    async fn require_battle(&self, id: BattleId) -> BattleResult<Battle> {
        self.store
            .find_battle(id)
            .await?
            .ok_or_else(|| BattleError::not_found("battle", id))
    }

    async fn require_state(&self, id: StateId) -> BattleResult<BattlePokemonState> {
        self.store
            .find_state(id)
            .await?
            .ok_or_else(|| BattleError::not_found("battle pokemon state", id))
    }

    async fn require_trained_pokemon(&self, id: TrainedPokemonId) -> BattleResult<TrainedPokemon> {
        self.store
            .find_trained_pokemon(id)
            .await?
            .ok_or_else(|| BattleError::not_found("trained pokemon", id))
    }

    async fn require_move_data(&self, id: MoveId) -> BattleResult<MoveData> {
        self.store
            .find_move_data(id)
            .await?
            .ok_or_else(|| BattleError::not_found("move", id))
    }

    // --- COUNTERS & LOCKS ---

    fn battle_lock(&self, battle_id: BattleId) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = lock_map(&self.locks);
        locks
            .entry(battle_id)
            .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(())))
            .clone()
    }

    fn bump_counter(
        &self,
        map: &Mutex<HashMap<(BattleId, StateId), u32>>,
        battle_id: BattleId,
        state_id: StateId,
    ) -> u32 {
        let mut counters = lock_map(map);
        let entry = counters.entry((battle_id, state_id)).or_insert(0);
        *entry += 1;
        *entry
    }

    fn read_counter(
        &self,
        map: &Mutex<HashMap<(BattleId, StateId), u32>>,
        battle_id: BattleId,
        state_id: StateId,
    ) -> u32 {
        lock_map(map)
            .get(&(battle_id, state_id))
            .copied()
            .unwrap_or(0)
    }

    fn remove_counter(
        &self,
        map: &Mutex<HashMap<(BattleId, StateId), u32>>,
        battle_id: BattleId,
        state_id: StateId,
    ) {
        lock_map(map).remove(&(battle_id, state_id));
    }

    fn clear_counters(&self, battle_id: BattleId, state_id: StateId) {
        self.remove_counter(&self.bad_poison_turns, battle_id, state_id);
        self.remove_counter(&self.sleep_turns, battle_id, state_id);
        self.remove_counter(&self.confusion_turns, battle_id, state_id);
    }

    fn clear_battle_counters(&self, battle_id: BattleId) {
        lock_map(&self.bad_poison_turns).retain(|(b, _), _| *b != battle_id);
        lock_map(&self.sleep_turns).retain(|(b, _), _| *b != battle_id);
        lock_map(&self.confusion_turns).retain(|(b, _), _| *b != battle_id);
        lock_map(&self.locks).remove(&battle_id);
    }
}

fn lock_map<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    // Lock poisoning only happens if a holder panicked; propagate the data.
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

fn blocked_message(name: &str, status: Option<StatusCondition>) -> String {
    match status {
        Some(StatusCondition::Sleep) => format!("{} is fast asleep.", name),
        Some(StatusCondition::Freeze) => format!("{} is frozen solid!", name),
        Some(StatusCondition::Paralysis) => format!("{} is paralyzed! It can't move!", name),
        Some(StatusCondition::Flinch) => format!("{} flinched and couldn't move!", name),
        _ => format!("{} can't move!", name),
    }
}

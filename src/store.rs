// In: src/store.rs

use crate::battle::state::{Battle, BattleId, BattlePokemonState, MoveUsage, StateId};
use crate::errors::{BattleError, BattleResult};
use crate::move_data::{MoveData, MoveId, TypeChart};
use crate::pokemon::{TeamId, TrainedPokemon, TrainedPokemonId, TrainerId};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Persistence contract for everything the engine reads and writes.
///
/// Finders return `Ok(None)` for absent rows; the engine decides when an
/// absence is a `NotFound` error. `create_*` methods assign the id — any
/// caller-provided id is replaced.
#[async_trait]
pub trait BattleStore: Send + Sync {
    async fn find_battle(&self, id: BattleId) -> BattleResult<Option<Battle>>;
    async fn create_battle(&self, battle: Battle) -> BattleResult<Battle>;
    async fn update_battle(&self, battle: &Battle) -> BattleResult<()>;

    async fn states_for_battle(&self, battle_id: BattleId)
        -> BattleResult<Vec<BattlePokemonState>>;
    async fn find_state(&self, id: StateId) -> BattleResult<Option<BattlePokemonState>>;
    async fn find_active_state(
        &self,
        battle_id: BattleId,
        trainer_id: TrainerId,
    ) -> BattleResult<Option<BattlePokemonState>>;
    async fn find_state_by_pokemon(
        &self,
        battle_id: BattleId,
        trained_pokemon_id: TrainedPokemonId,
    ) -> BattleResult<Option<BattlePokemonState>>;
    async fn create_state(&self, state: BattlePokemonState) -> BattleResult<BattlePokemonState>;
    async fn update_state(&self, state: &BattlePokemonState) -> BattleResult<()>;

    async fn find_move_usage(
        &self,
        state_id: StateId,
        move_id: MoveId,
    ) -> BattleResult<Option<MoveUsage>>;
    async fn create_move_usage(&self, usage: MoveUsage) -> BattleResult<MoveUsage>;
    async fn update_move_usage(&self, usage: &MoveUsage) -> BattleResult<()>;

    async fn find_trained_pokemon(
        &self,
        id: TrainedPokemonId,
    ) -> BattleResult<Option<TrainedPokemon>>;
    async fn find_move_data(&self, id: MoveId) -> BattleResult<Option<MoveData>>;
    /// A team's members, ordered by party position.
    async fn team_members(&self, team_id: TeamId) -> BattleResult<Vec<TrainedPokemonId>>;
    async fn type_chart(&self) -> BattleResult<TypeChart>;
}

#[derive(Default)]
struct StoreInner {
    battles: HashMap<BattleId, Battle>,
    states: HashMap<StateId, BattlePokemonState>,
    usages: HashMap<(StateId, MoveId), MoveUsage>,
    pokemon: HashMap<TrainedPokemonId, TrainedPokemon>,
    moves: HashMap<MoveId, MoveData>,
    teams: HashMap<TeamId, Vec<TrainedPokemonId>>,
    type_chart: TypeChart,
    next_battle_id: BattleId,
    next_state_id: StateId,
    next_usage_id: u64,
}

/// Hashmap-backed store for tests and self-contained use. Reference data
/// (pokemon, moves, teams, type chart) is seeded up front; battle rows are
/// created by the engine.
#[derive(Default)]
pub struct InMemoryStore {
    inner: Mutex<StoreInner>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        InMemoryStore::default()
    }

    pub fn add_trained_pokemon(&self, pokemon: TrainedPokemon) {
        self.lock().pokemon.insert(pokemon.id, pokemon);
    }

    pub fn add_move(&self, data: MoveData) {
        self.lock().moves.insert(data.id, data);
    }

    pub fn set_team(&self, team_id: TeamId, members: Vec<TrainedPokemonId>) {
        self.lock().teams.insert(team_id, members);
    }

    pub fn set_type_chart(&self, chart: TypeChart) {
        self.lock().type_chart = chart;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StoreInner> {
        // Lock poisoning only happens if a holder panicked; propagate it.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl BattleStore for InMemoryStore {
    async fn find_battle(&self, id: BattleId) -> BattleResult<Option<Battle>> {
        Ok(self.lock().battles.get(&id).cloned())
    }

    async fn create_battle(&self, mut battle: Battle) -> BattleResult<Battle> {
        let mut inner = self.lock();
        inner.next_battle_id += 1;
        battle.id = inner.next_battle_id;
        inner.battles.insert(battle.id, battle.clone());
        Ok(battle)
    }

    async fn update_battle(&self, battle: &Battle) -> BattleResult<()> {
        let mut inner = self.lock();
        if !inner.battles.contains_key(&battle.id) {
            return Err(BattleError::not_found("battle", battle.id));
        }
        inner.battles.insert(battle.id, battle.clone());
        Ok(())
    }

    async fn states_for_battle(
        &self,
        battle_id: BattleId,
    ) -> BattleResult<Vec<BattlePokemonState>> {
        let inner = self.lock();
        let mut states: Vec<_> = inner
            .states
            .values()
            .filter(|s| s.battle_id == battle_id)
            .cloned()
            .collect();
        states.sort_by_key(|s| s.id);
        Ok(states)
    }

    async fn find_state(&self, id: StateId) -> BattleResult<Option<BattlePokemonState>> {
        Ok(self.lock().states.get(&id).cloned())
    }

    async fn find_active_state(
        &self,
        battle_id: BattleId,
        trainer_id: TrainerId,
    ) -> BattleResult<Option<BattlePokemonState>> {
        Ok(self
            .lock()
            .states
            .values()
            .find(|s| s.battle_id == battle_id && s.trainer_id == trainer_id && s.is_active)
            .cloned())
    }

    async fn find_state_by_pokemon(
        &self,
        battle_id: BattleId,
        trained_pokemon_id: TrainedPokemonId,
    ) -> BattleResult<Option<BattlePokemonState>> {
        Ok(self
            .lock()
            .states
            .values()
            .find(|s| s.battle_id == battle_id && s.trained_pokemon_id == trained_pokemon_id)
            .cloned())
    }

    async fn create_state(&self, mut state: BattlePokemonState) -> BattleResult<BattlePokemonState> {
        let mut inner = self.lock();
        inner.next_state_id += 1;
        state.id = inner.next_state_id;
        inner.states.insert(state.id, state.clone());
        Ok(state)
    }

    async fn update_state(&self, state: &BattlePokemonState) -> BattleResult<()> {
        let mut inner = self.lock();
        if !inner.states.contains_key(&state.id) {
            return Err(BattleError::not_found("battle pokemon state", state.id));
        }
        inner.states.insert(state.id, state.clone());
        Ok(())
    }

    async fn find_move_usage(
        &self,
        state_id: StateId,
        move_id: MoveId,
    ) -> BattleResult<Option<MoveUsage>> {
        Ok(self.lock().usages.get(&(state_id, move_id)).cloned())
    }

    async fn create_move_usage(&self, mut usage: MoveUsage) -> BattleResult<MoveUsage> {
        let mut inner = self.lock();
        inner.next_usage_id += 1;
        usage.id = inner.next_usage_id;
        inner.usages.insert((usage.state_id, usage.move_id), usage.clone());
        Ok(usage)
    }

    async fn update_move_usage(&self, usage: &MoveUsage) -> BattleResult<()> {
        let mut inner = self.lock();
        let key = (usage.state_id, usage.move_id);
        if !inner.usages.contains_key(&key) {
            return Err(BattleError::not_found("move usage", usage.id));
        }
        inner.usages.insert(key, usage.clone());
        Ok(())
    }

    async fn find_trained_pokemon(
        &self,
        id: TrainedPokemonId,
    ) -> BattleResult<Option<TrainedPokemon>> {
        Ok(self.lock().pokemon.get(&id).cloned())
    }

    async fn find_move_data(&self, id: MoveId) -> BattleResult<Option<MoveData>> {
        Ok(self.lock().moves.get(&id).cloned())
    }

    async fn team_members(&self, team_id: TeamId) -> BattleResult<Vec<TrainedPokemonId>> {
        Ok(self.lock().teams.get(&team_id).cloned().unwrap_or_default())
    }

    async fn type_chart(&self) -> BattleResult<TypeChart> {
        Ok(self.lock().type_chart.clone())
    }
}

// In: src/battle/tests/common.rs

use crate::battle::engine::BattleEngine;
use crate::battle::state::{Battle, BattleId, BattlePokemonState};
use crate::move_data::{MoveCategory, MoveData, MoveId};
use crate::pokemon::{
    BaseStats, PokemonType, StatSpread, TeamId, TrainedPokemon, TrainedPokemonId, TrainerId,
};
use crate::store::{BattleStore, InMemoryStore};
use std::sync::Arc;

pub const TRAINER_ONE: TrainerId = 10;
pub const TRAINER_TWO: TrainerId = 20;
pub const TEAM_ONE: TeamId = 100;
pub const TEAM_TWO: TeamId = 200;

pub const TACKLE: MoveId = 1;
pub const THUNDERBOLT: MoveId = 2;
pub const TOXIC: MoveId = 3;
pub const GROWL: MoveId = 4;
pub const THUNDER_WAVE: MoveId = 5;
pub const SLEEP_POWDER: MoveId = 6;
pub const DOUBLE_EDGE: MoveId = 7;
pub const WILL_O_WISP: MoveId = 8;
pub const HYDRO_PUMP: MoveId = 9;
pub const FLAMETHROWER: MoveId = 10;
pub const CONFUSE_RAY: MoveId = 11;

/// A builder for trained pokemon with predictable defaults: level 50,
/// flat 80 base stats, no IVs, EVs, or nature. That computes to 140 HP
/// and 85 in every other stat, so damage math in tests stays simple.
///
/// # Example
/// ```
/// let pokemon = TestPokemonBuilder::new(1, "Sparky")
///     .with_ability("Static")
///     .with_moves(vec![THUNDERBOLT, GROWL])
///     .build();
/// ```
pub struct TestPokemonBuilder {
    id: TrainedPokemonId,
    name: String,
    types: Vec<PokemonType>,
    base_speed: u16,
    ability: Option<String>,
    move_ids: Vec<MoveId>,
}

impl TestPokemonBuilder {
    pub fn new(id: TrainedPokemonId, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            types: vec![PokemonType::Normal],
            base_speed: 80,
            ability: None,
            move_ids: vec![TACKLE, GROWL],
        }
    }

    pub fn with_types(mut self, types: Vec<PokemonType>) -> Self {
        self.types = types;
        self
    }

    /// Overrides the base Speed stat; base 100 computes to 105, which
    /// outruns the default 85.
    pub fn with_base_speed(mut self, base_speed: u16) -> Self {
        self.base_speed = base_speed;
        self
    }

    pub fn with_ability(mut self, ability: &str) -> Self {
        self.ability = Some(ability.to_string());
        self
    }

    pub fn with_moves(mut self, move_ids: Vec<MoveId>) -> Self {
        self.move_ids = move_ids;
        self
    }

    pub fn build(self) -> TrainedPokemon {
        TrainedPokemon {
            id: self.id,
            name: self.name,
            level: 50,
            types: self.types,
            base_stats: BaseStats {
                hp: 80,
                attack: 80,
                defense: 80,
                sp_attack: 80,
                sp_defense: 80,
                speed: self.base_speed,
            },
            ivs: StatSpread::default(),
            evs: StatSpread::default(),
            nature: None,
            ability: self.ability,
            move_ids: self.move_ids,
        }
    }
}

fn mv(
    id: MoveId,
    name: &str,
    move_type: PokemonType,
    category: MoveCategory,
    power: Option<u16>,
    accuracy: Option<f64>,
    max_pp: u8,
) -> MoveData {
    MoveData {
        id,
        name: name.to_string(),
        move_type,
        category,
        power,
        accuracy,
        max_pp,
        priority: 0,
    }
}

/// Seeds the move roster every test battle draws from.
pub fn seed_moves(store: &InMemoryStore) {
    use MoveCategory::*;
    use PokemonType::*;
    let moves = [
        mv(TACKLE, "Tackle", Normal, Physical, Some(40), Some(100.0), 35),
        mv(THUNDERBOLT, "Thunderbolt", Electric, Special, Some(90), Some(100.0), 15),
        mv(TOXIC, "Toxic", Poison, Status, None, Some(90.0), 10),
        mv(GROWL, "Growl", Normal, Status, None, Some(100.0), 40),
        mv(THUNDER_WAVE, "Thunder Wave", Electric, Status, None, Some(90.0), 20),
        mv(SLEEP_POWDER, "Sleep Powder", Grass, Status, None, Some(75.0), 15),
        mv(DOUBLE_EDGE, "Double-Edge", Normal, Physical, Some(120), Some(100.0), 15),
        mv(WILL_O_WISP, "Will-O-Wisp", Fire, Status, None, Some(85.0), 15),
        mv(HYDRO_PUMP, "Hydro Pump", Water, Special, Some(110), Some(80.0), 5),
        mv(FLAMETHROWER, "Flamethrower", Fire, Special, Some(90), Some(100.0), 15),
        mv(CONFUSE_RAY, "Confuse Ray", Ghost, Status, None, Some(100.0), 10),
    ];
    for data in moves {
        store.add_move(data);
    }
}

pub fn engine_with(store: &Arc<InMemoryStore>) -> BattleEngine {
    BattleEngine::new(store.clone())
}

/// A started battle with its store and engine, ready for `execute_turn`.
pub struct Arena {
    pub store: Arc<InMemoryStore>,
    pub engine: BattleEngine,
    pub battle: Battle,
}

/// Seeds both teams and starts the battle. The first pokemon of each team
/// leads.
pub async fn with_teams(team1: Vec<TrainedPokemon>, team2: Vec<TrainedPokemon>) -> Arena {
    let store = Arc::new(InMemoryStore::new());
    seed_moves(&store);
    let team1_ids: Vec<_> = team1.iter().map(|p| p.id).collect();
    let team2_ids: Vec<_> = team2.iter().map(|p| p.id).collect();
    for pokemon in team1.into_iter().chain(team2) {
        store.add_trained_pokemon(pokemon);
    }
    store.set_team(TEAM_ONE, team1_ids);
    store.set_team(TEAM_TWO, team2_ids);

    let engine = engine_with(&store);
    let battle = engine
        .start_battle(TRAINER_ONE, TRAINER_TWO, TEAM_ONE, TEAM_TWO)
        .await
        .expect("battle should start");
    Arena {
        store,
        engine,
        battle,
    }
}

pub async fn one_on_one(lead1: TrainedPokemon, lead2: TrainedPokemon) -> Arena {
    with_teams(vec![lead1], vec![lead2]).await
}

/// Fetches the current battle state row for a pokemon.
pub async fn state_of(
    store: &InMemoryStore,
    battle_id: BattleId,
    pokemon_id: TrainedPokemonId,
) -> BattlePokemonState {
    store
        .find_state_by_pokemon(battle_id, pokemon_id)
        .await
        .expect("store should answer")
        .expect("state should exist")
}

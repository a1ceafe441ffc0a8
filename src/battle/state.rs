// In: src/battle/state.rs

use crate::errors::{BattleError, BattleResult};
use crate::move_data::MoveId;
use crate::pokemon::{StatusCondition, TeamId, TrainedPokemonId, TrainerId};
use serde::{Deserialize, Serialize};

pub type BattleId = u64;
pub type StateId = u64;
pub type UsageId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleStatus {
    Active,
    Completed,
    Abandoned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Weather {
    #[default]
    None,
    Sun,
    Rain,
    Sandstorm,
    Hail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FieldCondition {
    #[default]
    None,
    ElectricTerrain,
    GrassyTerrain,
    MistyTerrain,
    PsychicTerrain,
}

/// A battle between two trainers, each fielding one team. Turn-scoped
/// working data (action order, status counters) lives in the engine, not
/// here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Battle {
    pub id: BattleId,
    pub trainer1_id: TrainerId,
    pub trainer2_id: TrainerId,
    pub team1_id: TeamId,
    pub team2_id: TeamId,
    pub status: BattleStatus,
    pub turn_number: u32,
    pub weather: Weather,
    pub field: FieldCondition,
    pub winner_trainer_id: Option<TrainerId>,
}

impl Battle {
    pub fn new(
        id: BattleId,
        trainer1_id: TrainerId,
        trainer2_id: TrainerId,
        team1_id: TeamId,
        team2_id: TeamId,
    ) -> BattleResult<Self> {
        if trainer1_id == trainer2_id {
            return Err(BattleError::validation(
                "a battle requires two distinct trainers",
            ));
        }
        if team1_id == team2_id {
            return Err(BattleError::validation(
                "a battle requires two distinct teams",
            ));
        }
        Ok(Battle {
            id,
            trainer1_id,
            trainer2_id,
            team1_id,
            team2_id,
            status: BattleStatus::Active,
            turn_number: 1,
            weather: Weather::None,
            field: FieldCondition::None,
            winner_trainer_id: None,
        })
    }

    pub fn has_trainer(&self, trainer_id: TrainerId) -> bool {
        self.trainer1_id == trainer_id || self.trainer2_id == trainer_id
    }

    pub fn opponent_of(&self, trainer_id: TrainerId) -> TrainerId {
        if trainer_id == self.trainer1_id {
            self.trainer2_id
        } else {
            self.trainer1_id
        }
    }

    pub fn complete(&mut self, winner_trainer_id: TrainerId) {
        self.status = BattleStatus::Completed;
        self.winner_trainer_id = Some(winner_trainer_id);
    }

    /// One trainer walked away; the one who stayed wins.
    pub fn abandon(&mut self, winner_trainer_id: TrainerId) {
        self.status = BattleStatus::Abandoned;
        self.winner_trainer_id = Some(winner_trainer_id);
    }
}

/// The seven rank-modified stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RankedStat {
    Attack,
    Defense,
    SpAttack,
    SpDefense,
    Speed,
    Accuracy,
    Evasion,
}

pub const RANK_MIN: i8 = -6;
pub const RANK_MAX: i8 = 6;

/// In-battle stat ranks. Mutation clamps to [-6, 6]; the multiplier math
/// lives in `battle::stats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatRanks {
    pub attack: i8,
    pub defense: i8,
    pub sp_attack: i8,
    pub sp_defense: i8,
    pub speed: i8,
    pub accuracy: i8,
    pub evasion: i8,
}

impl StatRanks {
    pub fn get(&self, stat: RankedStat) -> i8 {
        match stat {
            RankedStat::Attack => self.attack,
            RankedStat::Defense => self.defense,
            RankedStat::SpAttack => self.sp_attack,
            RankedStat::SpDefense => self.sp_defense,
            RankedStat::Speed => self.speed,
            RankedStat::Accuracy => self.accuracy,
            RankedStat::Evasion => self.evasion,
        }
    }

    /// Shift a rank by `delta`, clamping to the legal range. Returns the
    /// actual change applied (zero when already pinned at a bound).
    pub fn modify(&mut self, stat: RankedStat, delta: i8) -> i8 {
        let slot = match stat {
            RankedStat::Attack => &mut self.attack,
            RankedStat::Defense => &mut self.defense,
            RankedStat::SpAttack => &mut self.sp_attack,
            RankedStat::SpDefense => &mut self.sp_defense,
            RankedStat::Speed => &mut self.speed,
            RankedStat::Accuracy => &mut self.accuracy,
            RankedStat::Evasion => &mut self.evasion,
        };
        let before = *slot;
        *slot = (before + delta).clamp(RANK_MIN, RANK_MAX);
        *slot - before
    }

    pub fn reset(&mut self) {
        *self = StatRanks::default();
    }
}

/// Per-battle state of one team member: current HP, ranks, status, and
/// whether it currently occupies the active slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattlePokemonState {
    pub id: StateId,
    pub battle_id: BattleId,
    pub trainer_id: TrainerId,
    pub trained_pokemon_id: TrainedPokemonId,
    pub current_hp: u32,
    pub max_hp: u32,
    pub ranks: StatRanks,
    pub status: Option<StatusCondition>,
    pub is_active: bool,
    pub is_abandoned: bool,
}

impl BattlePokemonState {
    pub fn new(
        id: StateId,
        battle_id: BattleId,
        trainer_id: TrainerId,
        trained_pokemon_id: TrainedPokemonId,
        current_hp: u32,
        max_hp: u32,
    ) -> BattleResult<Self> {
        if max_hp == 0 {
            return Err(BattleError::validation("max HP must be positive"));
        }
        if current_hp > max_hp {
            return Err(BattleError::validation(format!(
                "current HP {} exceeds max HP {}",
                current_hp, max_hp
            )));
        }
        Ok(BattlePokemonState {
            id,
            battle_id,
            trainer_id,
            trained_pokemon_id,
            current_hp,
            max_hp,
            ranks: StatRanks::default(),
            status: None,
            is_active: false,
            is_abandoned: false,
        })
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }

    /// True when this pokemon can still fight for its trainer.
    pub fn is_able(&self) -> bool {
        !self.is_fainted() && !self.is_abandoned
    }

    /// Apply damage, flooring HP at zero. Returns the HP actually lost.
    pub fn apply_damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.current_hp);
        self.current_hp -= lost;
        lost
    }

    /// Restore HP up to the maximum. Returns the HP actually recovered.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let gained = amount.min(self.max_hp - self.current_hp);
        self.current_hp += gained;
        gained
    }
}

/// PP bookkeeping for one known move of one battle pokemon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveUsage {
    pub id: UsageId,
    pub battle_id: BattleId,
    pub state_id: StateId,
    pub move_id: MoveId,
    pub current_pp: u8,
    pub max_pp: u8,
}

impl MoveUsage {
    pub fn new(
        id: UsageId,
        battle_id: BattleId,
        state_id: StateId,
        move_id: MoveId,
        max_pp: u8,
    ) -> BattleResult<Self> {
        if max_pp == 0 {
            return Err(BattleError::validation("a move must have at least 1 PP"));
        }
        Ok(MoveUsage {
            id,
            battle_id,
            state_id,
            move_id,
            current_pp: max_pp,
            max_pp,
        })
    }

    /// Spend one PP, clamping at zero.
    pub fn consume_pp(&mut self) {
        self.current_pp = self.current_pp.saturating_sub(1);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionChoice {
    UseMove { move_id: MoveId },
    Switch { trained_pokemon_id: TrainedPokemonId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainerAction {
    pub trainer_id: TrainerId,
    pub choice: ActionChoice,
}

impl TrainerAction {
    pub fn use_move(trainer_id: TrainerId, move_id: MoveId) -> Self {
        TrainerAction {
            trainer_id,
            choice: ActionChoice::UseMove { move_id },
        }
    }

    pub fn switch(trainer_id: TrainerId, trained_pokemon_id: TrainedPokemonId) -> Self {
        TrainerAction {
            trainer_id,
            choice: ActionChoice::Switch { trained_pokemon_id },
        }
    }
}

/// One resolved action as it appears in the turn log. Entries without an
/// action come from the end-of-turn phase (status damage, ability ticks).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionLogEntry {
    pub trainer_id: TrainerId,
    pub action: Option<ActionChoice>,
    pub result: String,
}

impl ActionLogEntry {
    pub fn for_action(trainer_id: TrainerId, action: ActionChoice, result: String) -> Self {
        ActionLogEntry {
            trainer_id,
            action: Some(action),
            result,
        }
    }

    pub fn turn_end(trainer_id: TrainerId, result: String) -> Self {
        ActionLogEntry {
            trainer_id,
            action: None,
            result,
        }
    }
}

/// What `execute_turn` hands back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub battle: Battle,
    pub log: Vec<ActionLogEntry>,
    pub winner_trainer_id: Option<TrainerId>,
}

/// Injectable randomness for a turn. Tests script the outcome queue;
/// production pre-generates values in [0, 100). Every draw carries a reason
/// label so scripted tests read top to bottom.
pub struct TurnRng {
    outcomes: Vec<u8>,
    index: usize,
}

impl TurnRng {
    pub fn new_for_test(outcomes: Vec<u8>) -> Self {
        Self { outcomes, index: 0 }
    }

    pub fn new_random() -> Self {
        use rand::Rng;
        let mut rng = rand::rng();
        // Pre-generate enough values for any single turn
        let outcomes: Vec<u8> = (0..200).map(|_| rng.random_range(0..100)).collect();
        Self { outcomes, index: 0 }
    }

    /// Draw the next value in [0, 100). Comparisons use `draw < threshold`,
    /// so a threshold of 100 always passes and 0 never does.
    pub fn next_outcome(&mut self, reason: &str) -> u8 {
        if self.index >= self.outcomes.len() {
            panic!(
                "TurnRng exhausted! Tried to get a value for: '{}'. Need more random values.",
                reason
            );
        }
        let outcome = self.outcomes[self.index];

        #[cfg(test)]
        println!("[RNG] Consumed {} for: {}", outcome, reason);

        self.index += 1;
        outcome
    }
}

// In: src/battle/tests/test_status_conditions.rs

use crate::battle::state::{TrainerAction, TurnRng};
use crate::battle::tests::common::*;
use crate::pokemon::StatusCondition;
use crate::store::BattleStore;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn toxic_damage_ramps_each_turn() {
    let arena = one_on_one(
        TestPokemonBuilder::new(1, "Setter")
            .with_moves(vec![TOXIC, GROWL])
            .build(),
        TestPokemonBuilder::new(2, "Victim").build(),
    )
    .await;

    // Turn 1: Toxic lands, then the first tick takes 1/16 of 140
    let mut rng = TurnRng::new_for_test(vec![50]);
    arena
        .engine
        .execute_turn(
            arena.battle.id,
            TrainerAction::use_move(TRAINER_ONE, TOXIC),
            TrainerAction::use_move(TRAINER_TWO, TACKLE),
            &mut rng,
        )
        .await
        .unwrap();
    let s2 = state_of(&arena.store, arena.battle.id, 2).await;
    assert_eq!(s2.status, Some(StatusCondition::BadPoison));
    assert_eq!(s2.current_hp, 140 - 8);

    // Turn 2: the tick grows to 2/16
    let mut rng = TurnRng::new_for_test(vec![50]);
    arena
        .engine
        .execute_turn(
            arena.battle.id,
            TrainerAction::use_move(TRAINER_ONE, GROWL),
            TrainerAction::use_move(TRAINER_TWO, TACKLE),
            &mut rng,
        )
        .await
        .unwrap();
    let s2 = state_of(&arena.store, arena.battle.id, 2).await;
    assert_eq!(s2.current_hp, 140 - 8 - 17);
}

#[tokio::test]
async fn sleep_blocks_then_wakes_on_schedule() {
    let arena = one_on_one(
        TestPokemonBuilder::new(1, "Powderer")
            .with_moves(vec![SLEEP_POWDER, GROWL])
            .build(),
        TestPokemonBuilder::new(2, "Dozer").build(),
    )
    .await;

    // Turn 1: Sleep Powder lands first, the victim's move is blocked, and
    // the first wake check (33%) fails on a 60
    let mut rng = TurnRng::new_for_test(vec![60]);
    let outcome = arena
        .engine
        .execute_turn(
            arena.battle.id,
            TrainerAction::use_move(TRAINER_ONE, SLEEP_POWDER),
            TrainerAction::use_move(TRAINER_TWO, TACKLE),
            &mut rng,
        )
        .await
        .unwrap();
    assert!(outcome.log[1].result.contains("fast asleep"));
    let s2 = state_of(&arena.store, arena.battle.id, 2).await;
    assert_eq!(s2.status, Some(StatusCondition::Sleep));

    // Turn 2: the second wake check widens to 50% and a 10 clears it
    let mut rng = TurnRng::new_for_test(vec![10]);
    let outcome = arena
        .engine
        .execute_turn(
            arena.battle.id,
            TrainerAction::use_move(TRAINER_ONE, GROWL),
            TrainerAction::use_move(TRAINER_TWO, TACKLE),
            &mut rng,
        )
        .await
        .unwrap();
    assert!(outcome.log.iter().any(|e| e.result.contains("woke up")));
    let s2 = state_of(&arena.store, arena.battle.id, 2).await;
    assert_eq!(s2.status, None);
}

#[tokio::test]
async fn paralysis_halves_speed_and_sometimes_blocks() {
    let arena = one_on_one(
        TestPokemonBuilder::new(1, "Waver")
            .with_moves(vec![THUNDER_WAVE, GROWL])
            .build(),
        TestPokemonBuilder::new(2, "Racer").with_base_speed(100).build(),
    )
    .await;

    // Turn 1: the faster side attacks first, then gets paralyzed
    let mut rng = TurnRng::new_for_test(vec![50]);
    let outcome = arena
        .engine
        .execute_turn(
            arena.battle.id,
            TrainerAction::use_move(TRAINER_ONE, THUNDER_WAVE),
            TrainerAction::use_move(TRAINER_TWO, TACKLE),
            &mut rng,
        )
        .await
        .unwrap();
    assert_eq!(outcome.log[0].trainer_id, TRAINER_TWO);
    let s2 = state_of(&arena.store, arena.battle.id, 2).await;
    assert_eq!(s2.status, Some(StatusCondition::Paralysis));

    // Turn 2: 105 speed halves to 52, losing to 85; the paralysis check
    // (75% acts) fails on a 75
    let mut rng = TurnRng::new_for_test(vec![75]);
    let outcome = arena
        .engine
        .execute_turn(
            arena.battle.id,
            TrainerAction::use_move(TRAINER_ONE, GROWL),
            TrainerAction::use_move(TRAINER_TWO, TACKLE),
            &mut rng,
        )
        .await
        .unwrap();
    assert_eq!(outcome.log[0].trainer_id, TRAINER_ONE);
    assert!(outcome.log[1].result.contains("paralyzed"));
    let s1 = state_of(&arena.store, arena.battle.id, 1).await;
    assert_eq!(s1.current_hp, 140 - 28); // only turn 1's Tackle landed
}

#[tokio::test]
async fn flinch_blocks_once_and_clears() {
    let arena = one_on_one(
        TestPokemonBuilder::new(1, "Startler").build(),
        TestPokemonBuilder::new(2, "Startled").build(),
    )
    .await;
    let mut s2 = state_of(&arena.store, arena.battle.id, 2).await;
    s2.status = Some(StatusCondition::Flinch);
    arena.store.update_state(&s2).await.unwrap();

    let mut rng = TurnRng::new_for_test(vec![]);
    let outcome = arena
        .engine
        .execute_turn(
            arena.battle.id,
            TrainerAction::use_move(TRAINER_ONE, GROWL),
            TrainerAction::use_move(TRAINER_TWO, TACKLE),
            &mut rng,
        )
        .await
        .unwrap();
    assert!(outcome.log[1].result.contains("flinched"));
    let s2 = state_of(&arena.store, arena.battle.id, 2).await;
    assert_eq!(s2.status, None);
}

#[tokio::test]
async fn frozen_attacker_can_thaw_and_act() {
    let arena = one_on_one(
        TestPokemonBuilder::new(1, "Icicle").build(),
        TestPokemonBuilder::new(2, "Bystander").build(),
    )
    .await;
    let mut s1 = state_of(&arena.store, arena.battle.id, 1).await;
    s1.status = Some(StatusCondition::Freeze);
    arena.store.update_state(&s1).await.unwrap();

    // Thaw check passes on 10 (< 20), then the accuracy roll
    let mut rng = TurnRng::new_for_test(vec![10, 50]);
    let outcome = arena
        .engine
        .execute_turn(
            arena.battle.id,
            TrainerAction::use_move(TRAINER_ONE, TACKLE),
            TrainerAction::use_move(TRAINER_TWO, GROWL),
            &mut rng,
        )
        .await
        .unwrap();
    assert!(outcome.log[0].result.contains("thawed out"));
    let s1 = state_of(&arena.store, arena.battle.id, 1).await;
    let s2 = state_of(&arena.store, arena.battle.id, 2).await;
    assert_eq!(s1.status, None);
    assert_eq!(s2.current_hp, 140 - 28);
}

#[tokio::test]
async fn confused_pokemon_can_hurt_itself_instead() {
    let arena = one_on_one(
        TestPokemonBuilder::new(1, "Caster")
            .with_moves(vec![CONFUSE_RAY, GROWL])
            .build(),
        TestPokemonBuilder::new(2, "Dazed").build(),
    )
    .await;

    // Confuse Ray lands first; the victim's confusion check (33% self-hit)
    // then trips on a 32, replacing its Tackle with a 40-power self-strike
    let mut rng = TurnRng::new_for_test(vec![32]);
    let outcome = arena
        .engine
        .execute_turn(
            arena.battle.id,
            TrainerAction::use_move(TRAINER_ONE, CONFUSE_RAY),
            TrainerAction::use_move(TRAINER_TWO, TACKLE),
            &mut rng,
        )
        .await
        .unwrap();

    assert!(outcome.log[1].result.contains("is confused!"));
    assert!(outcome.log[1].result.contains("hurt itself"));
    let s1 = state_of(&arena.store, arena.battle.id, 1).await;
    let s2 = state_of(&arena.store, arena.battle.id, 2).await;
    // 40 power against its own 85/85: 19; the Tackle never came out
    assert_eq!(s2.current_hp, 140 - 19);
    assert_eq!(s1.current_hp, 140);
    assert_eq!(s2.status, Some(StatusCondition::Confusion));
}

#[tokio::test]
async fn confusion_wears_off_after_a_few_turns() {
    let arena = one_on_one(
        TestPokemonBuilder::new(1, "Caster")
            .with_moves(vec![CONFUSE_RAY, GROWL])
            .build(),
        TestPokemonBuilder::new(2, "Dazed").build(),
    )
    .await;

    // Turn 1: confusion lands; the 33% self-hit check passes it on a 40 and
    // the infliction turn never rolls to clear
    let mut rng = TurnRng::new_for_test(vec![40]);
    arena
        .engine
        .execute_turn(
            arena.battle.id,
            TrainerAction::use_move(TRAINER_ONE, CONFUSE_RAY),
            TrainerAction::use_move(TRAINER_TWO, GROWL),
            &mut rng,
        )
        .await
        .unwrap();
    let s2 = state_of(&arena.store, arena.battle.id, 2).await;
    assert_eq!(s2.status, Some(StatusCondition::Confusion));

    // Turn 2: the clear check (33%) succeeds on a 10 at turn end
    let mut rng = TurnRng::new_for_test(vec![40, 10]);
    let outcome = arena
        .engine
        .execute_turn(
            arena.battle.id,
            TrainerAction::use_move(TRAINER_ONE, GROWL),
            TrainerAction::use_move(TRAINER_TWO, GROWL),
            &mut rng,
        )
        .await
        .unwrap();
    assert!(outcome
        .log
        .iter()
        .any(|e| e.result.contains("snapped out of its confusion")));
    let s2 = state_of(&arena.store, arena.battle.id, 2).await;
    assert_eq!(s2.status, None);
}

#[tokio::test]
async fn burn_ticks_a_sixteenth_at_turn_end() {
    let arena = one_on_one(
        TestPokemonBuilder::new(1, "Arsonist")
            .with_moves(vec![WILL_O_WISP])
            .build(),
        TestPokemonBuilder::new(2, "Kindling").build(),
    )
    .await;

    let mut rng = TurnRng::new_for_test(vec![]);
    arena
        .engine
        .execute_turn(
            arena.battle.id,
            TrainerAction::use_move(TRAINER_ONE, WILL_O_WISP),
            TrainerAction::use_move(TRAINER_TWO, GROWL),
            &mut rng,
        )
        .await
        .unwrap();
    let s2 = state_of(&arena.store, arena.battle.id, 2).await;
    assert_eq!(s2.status, Some(StatusCondition::Burn));
    assert_eq!(s2.current_hp, 140 - 8);
}

//! Turn sequencing integration tests.
//!
//! Covers the response window, begin-turn bookkeeping (resources, draw,
//! attack damage, untap), the wound sweep and the game result.

mod common;

use common::*;
use convergence::core::ManaColor;
use convergence::{GameResult, GameState, Intent, ZoneKind, ZoneRef};
use serde_json::json;

fn cards() -> serde_json::Value {
    json!({
        "Raider": { "art": "raider", "cardType": ["Creature"], "power": 2, "toughness": 2, "keywords": ["Haste"] },
        "Walker": { "art": "walker", "cardType": ["Creature"], "power": 1, "toughness": 3 },
        "Ore": { "art": "ore", "cardType": ["Resource"], "produces": "R" },
        "Crystal": { "art": "crystal", "cardType": ["Resource"], "produces": "UU" }
    })
}

#[test]
fn test_attack_resolves_at_next_turn_boundary() {
    let mut state = game(cards());
    let raider = place(&mut state, "Raider", P0, ZoneKind::Defense);

    assert!(state.apply(P0, Intent::EnterAttack { card: raider }));
    state.update();
    state.object_mut(raider).unwrap().damage = 1;

    assert!(state.apply(P0, Intent::EndTurn));
    finish_window(&mut state);
    assert_eq!(state.active_player(), P1);
    assert_eq!(life(&state, P1), 20, "attack damage waits for P0's next turn");

    pass_turn(&mut state);
    assert_eq!(state.active_player(), P0);
    assert_eq!(life(&state, P1), 18);

    let obj = state.object(raider).unwrap();
    assert!(obj.is_attacking());
    assert!(!obj.tapped);
    assert_eq!(obj.damage, 0);
}

#[test]
fn test_response_window_counts_down() {
    let mut state = game(cards());
    assert_eq!(state.turn_number(), 1);

    assert!(state.apply(P0, Intent::EndTurn));
    assert_eq!(state.active_player(), P1);
    assert_eq!(state.response_timer(), Some(2));

    state.update();
    assert_eq!(state.response_timer(), Some(1));
    assert_eq!(state.turn_number(), 1);

    state.update();
    assert_eq!(state.response_timer(), None);
    assert_eq!(state.turn_number(), 2);
}

#[test]
fn test_end_turn_only_for_active_player() {
    let mut state = game(cards());

    assert!(!state.apply(P1, Intent::EndTurn));
    assert!(state.apply(P0, Intent::EndTurn));
    // P1 is active now, but the window is still open.
    assert!(!state.apply(P1, Intent::EndTurn));

    finish_window(&mut state);
    assert!(state.apply(P1, Intent::EndTurn));
}

#[test]
fn test_creature_enters_tapped_without_haste() {
    let mut state = game(cards());
    let walker = place(&mut state, "Walker", P0, ZoneKind::Hand);
    let raider = place(&mut state, "Raider", P0, ZoneKind::Hand);

    assert!(state.apply(P0, Intent::Play { card: walker }));
    assert!(state.apply(P0, Intent::Play { card: raider }));
    state.update();

    assert!(state.object(walker).unwrap().tapped);
    assert!(!state.object(raider).unwrap().tapped);
    assert!(!state.apply(P0, Intent::EnterAttack { card: walker }));
    assert!(state.apply(P0, Intent::EnterAttack { card: raider }));

    // Walker untaps at P0's next turn.
    pass_turn(&mut state);
    pass_turn(&mut state);
    assert!(!state.object(walker).unwrap().tapped);
}

#[test]
fn test_play_out_of_turn_rejected() {
    let mut state = game(cards());
    let walker = place(&mut state, "Walker", P1, ZoneKind::Hand);
    assert!(!state.apply(P1, Intent::Play { card: walker }));
    assert_eq!(state.object(walker).unwrap().zone_kind(), Some(ZoneKind::Hand));
}

#[test]
fn test_land_drop_and_resource_refresh() {
    let mut state = game(cards());
    let ore = place(&mut state, "Ore", P0, ZoneKind::Hand);
    let crystal = place(&mut state, "Crystal", P0, ZoneKind::Hand);

    assert!(state.apply(P0, Intent::Play { card: ore }));
    assert!(!state.apply(P0, Intent::Play { card: crystal }), "one land drop per turn");
    state.update();
    assert_eq!(state.object(ore).unwrap().zone, Some(ZoneRef::new(P0, ZoneKind::Resources)));
    assert!(!state.is_in_play(ore));
    assert!(state.player(P0).resources.is_zero());

    pass_turn(&mut state);
    pass_turn(&mut state);
    assert_eq!(state.player(P0).resources.get(ManaColor::Red), 1);

    assert!(state.apply(P0, Intent::Play { card: crystal }));
    pass_turn(&mut state);
    pass_turn(&mut state);
    let resources = state.player(P0).resources;
    assert_eq!(resources.get(ManaColor::Red), 1);
    assert_eq!(resources.get(ManaColor::Blue), 2);
}

#[test]
fn test_card_cost_is_paid() {
    let mut state = game(json!({
        "Ore": { "art": "ore", "cardType": ["Resource"], "produces": "R" },
        "Imp": { "art": "imp", "cardType": ["Creature"], "power": 1, "toughness": 1, "cost": "R" }
    }));
    let imp = place(&mut state, "Imp", P0, ZoneKind::Hand);
    assert!(!state.apply(P0, Intent::Play { card: imp }));

    state.player_mut(P0).resources = "R".parse().unwrap();
    assert!(state.apply(P0, Intent::Play { card: imp }));
    assert!(state.player(P0).resources.is_zero());
}

#[test]
fn test_start_deals_opening_hands() {
    let decks = json!([
        ["Walker", "Walker", "Walker", "Ore", "Ore", "Ore", "Ore"],
        ["Walker", "Walker", "Walker", "Ore", "Ore", "Ore", "Ore"]
    ]);
    let config = config_with_decks(cards(), decks, 3);
    let mut state = GameState::new(&config).unwrap();
    state.start();

    let hand = |state: &GameState, p| state.zone(ZoneRef::new(p, ZoneKind::Hand)).len();
    let library = |state: &GameState, p| state.zone(ZoneRef::new(p, ZoneKind::Laboratory)).len();
    // P0 also drew for its first turn.
    assert_eq!(hand(&state, P0), 4);
    assert_eq!(library(&state, P0), 3);
    assert_eq!(hand(&state, P1), 3);
    assert_eq!(library(&state, P1), 4);

    for kind in [ZoneKind::Hand, ZoneKind::Laboratory] {
        let zone = state.zone(ZoneRef::new(P0, kind));
        for (slot, id) in zone.contents().iter().enumerate() {
            assert_eq!(state.object(*id).unwrap().slot, slot);
        }
    }
}

#[test]
fn test_same_seed_same_game() {
    let decks = json!([
        ["Walker", "Ore", "Raider", "Crystal", "Walker", "Ore"],
        ["Ore", "Walker", "Raider"]
    ]);
    let config = config_with_decks(cards(), decks, 2);

    let mut a = GameState::new(&config).unwrap();
    let mut b = GameState::new(&config).unwrap();
    a.start();
    b.start();

    let order = |state: &GameState| state.zone(ZoneRef::new(P0, ZoneKind::Hand)).contents().to_vec();
    assert_eq!(order(&a), order(&b));
}

#[test]
fn test_draw_from_empty_library() {
    let mut state = game(cards());
    assert_eq!(state.draw(P0), None);
    pass_turn(&mut state);
    assert!(state.zone(ZoneRef::new(P1, ZoneKind::Hand)).is_empty());
}

#[test]
fn test_sweep_discards_lethal_damage() {
    let mut state = game(cards());
    let walker = place(&mut state, "Walker", P0, ZoneKind::Defense);
    let survivor = place(&mut state, "Walker", P0, ZoneKind::Defense);
    state.object_mut(walker).unwrap().damage = 3;
    state.object_mut(survivor).unwrap().damage = 2;

    pass_turn(&mut state);

    assert!(state.zone(ZoneRef::new(P0, ZoneKind::DiscardPile)).contains(walker));
    let obj = state.object(walker).unwrap();
    assert_eq!(obj.damage, 0, "leaving play clears transient state");
    assert!(!obj.dead);
    assert!(state.is_in_play(survivor));
}

#[test]
fn test_result_and_rejection_after_game_over() {
    let mut state = game(cards());
    assert_eq!(state.result(), None);

    state.player_mut(P1).life = 0;
    assert_eq!(state.result(), Some(GameResult::Winner(P0)));
    assert!(!state.apply(P0, Intent::EndTurn));

    state.player_mut(P0).life = -3;
    assert_eq!(state.result(), Some(GameResult::Draw));
}

#[test]
fn test_history_records_every_intent() {
    let mut state = game(cards());
    let walker = place(&mut state, "Walker", P1, ZoneKind::Hand);

    state.apply(P1, Intent::Play { card: walker });
    state.apply(P0, Intent::EndTurn);

    let history = state.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].player, P1);
    assert_eq!(history[0].intent, Intent::Play { card: walker });
    assert_eq!(history[0].sequence, 0);
    assert_eq!(history[1].intent, Intent::EndTurn);
    assert_eq!(history[1].sequence, 1);
    assert_eq!(history[1].turn, 1);

    finish_window(&mut state);
    assert_eq!(state.turn_history().count(), 0);
}

#[test]
fn test_sweep_discards_wounded_attacker_with_pending_withdraw() {
    let mut state = game(cards());
    let raider = place(&mut state, "Raider", P0, ZoneKind::Defense);
    assert!(state.apply(P0, Intent::EnterAttack { card: raider }));
    state.update();

    state.object_mut(raider).unwrap().damage = 2;
    assert!(state.apply(P0, Intent::WithdrawAttack { card: raider }));
    assert!(state.apply(P0, Intent::EndTurn));

    let obj = state.object(raider).unwrap();
    assert_eq!(obj.zone, Some(ZoneRef::new(P0, ZoneKind::DiscardPile)));
    assert!(!state.is_in_play(raider));

    pass_turn(&mut state);
    pass_turn(&mut state);
    assert!(state.zone(ZoneRef::new(P0, ZoneKind::DiscardPile)).contains(raider));
}

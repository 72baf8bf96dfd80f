//! Blocking and damage integration tests.

mod common;

use common::*;
use convergence::{Intent, ZoneKind, ZoneRef};
use serde_json::json;

fn cards() -> serde_json::Value {
    json!({
        "Brute": { "art": "brute", "cardType": ["Creature"], "power": 3, "toughness": 3 },
        "Guard": { "art": "guard", "cardType": ["Creature"], "power": 2, "toughness": 2 },
        "Hawk": { "art": "hawk", "cardType": ["Creature"], "power": 1, "toughness": 1, "keywords": ["Flying"] },
        "Archer": { "art": "archer", "cardType": ["Creature"], "power": 1, "toughness": 2, "keywords": ["Reach"] },
        "Viper": { "art": "viper", "cardType": ["Creature"], "power": 1, "toughness": 1, "keywords": ["Deathtouch"] },
        "Priest": { "art": "priest", "cardType": ["Creature"], "power": 2, "toughness": 2, "keywords": ["Lifelink"] },
        "Rhino": { "art": "rhino", "cardType": ["Creature"], "power": 4, "toughness": 4, "keywords": ["Trample"] }
    })
}

#[test]
fn test_block_trades_damage() {
    let mut state = game(cards());
    let brute = place(&mut state, "Brute", P0, ZoneKind::Defense);
    let guard = place(&mut state, "Guard", P1, ZoneKind::Defense);

    assert!(state.apply(P0, Intent::EnterAttack { card: brute }));
    state.update();
    assert!(state.object(brute).unwrap().is_attacking());

    assert!(state.apply(P1, Intent::UseOn { card: guard, target: brute }));

    let attacker = state.object(brute).unwrap();
    assert_eq!(attacker.damage, 2);
    assert!(!attacker.is_lethally_wounded());
    assert!(attacker.tapped, "blocked attacker without trample is tapped");

    let blocker = state.object(guard).unwrap();
    assert_eq!(blocker.damage, 3);
    assert!(blocker.is_lethally_wounded());
    assert!(!blocker.tapped);

    // The sweep at end of turn sends the blocker away.
    pass_turn(&mut state);
    assert!(state.zone(ZoneRef::new(P1, ZoneKind::DiscardPile)).contains(guard));
    assert!(!state.is_in_play(guard));
    assert!(state.is_in_play(brute));
}

#[test]
fn test_blocked_attacker_deals_no_turn_damage() {
    let mut state = game(cards());
    let brute = place(&mut state, "Brute", P0, ZoneKind::Defense);
    let archer = place(&mut state, "Archer", P1, ZoneKind::Defense);

    state.apply(P0, Intent::EnterAttack { card: brute });
    state.update();
    assert!(state.apply(P1, Intent::UseOn { card: archer, target: brute }));

    pass_turn(&mut state);
    pass_turn(&mut state);
    assert_eq!(life(&state, P1), 20);
}

#[test]
fn test_flying_attacker_needs_flying_or_reach() {
    let mut state = game(cards());
    let hawk = place(&mut state, "Hawk", P0, ZoneKind::Defense);
    let guard = place(&mut state, "Guard", P1, ZoneKind::Defense);
    let archer = place(&mut state, "Archer", P1, ZoneKind::Defense);

    state.apply(P0, Intent::EnterAttack { card: hawk });
    state.update();

    assert!(!state.apply(P1, Intent::UseOn { card: guard, target: hawk }));
    assert_eq!(state.object(hawk).unwrap().damage, 0);
    assert_eq!(state.object(guard).unwrap().damage, 0);
    assert!(!state.object(hawk).unwrap().tapped);

    assert!(state.apply(P1, Intent::UseOn { card: archer, target: hawk }));
    assert_eq!(state.object(hawk).unwrap().damage, 1);
}

#[test]
fn test_tapped_creature_cannot_block() {
    let mut state = game(cards());
    let brute = place(&mut state, "Brute", P0, ZoneKind::Defense);
    let guard = place(&mut state, "Guard", P1, ZoneKind::Defense);
    state.object_mut(guard).unwrap().tapped = true;

    state.apply(P0, Intent::EnterAttack { card: brute });
    state.update();
    assert!(!state.apply(P1, Intent::UseOn { card: guard, target: brute }));
}

#[test]
fn test_cannot_block_with_opponents_creature() {
    let mut state = game(cards());
    let brute = place(&mut state, "Brute", P0, ZoneKind::Defense);
    let guard = place(&mut state, "Guard", P1, ZoneKind::Defense);

    state.apply(P0, Intent::EnterAttack { card: brute });
    state.update();
    assert!(!state.apply(P0, Intent::UseOn { card: guard, target: brute }));
}

#[test]
fn test_deathtouch_destroys() {
    let mut state = game(cards());
    let rhino = place(&mut state, "Rhino", P0, ZoneKind::Defense);
    let viper = place(&mut state, "Viper", P1, ZoneKind::Defense);

    state.apply(P0, Intent::EnterAttack { card: rhino });
    state.update();
    assert!(state.apply(P1, Intent::UseOn { card: viper, target: rhino }));

    let attacker = state.object(rhino).unwrap();
    assert_eq!(attacker.damage, 1);
    assert!(attacker.destroyed);
    assert!(attacker.is_lethally_wounded());
    assert!(!attacker.tapped, "trample keeps the attacker untapped");
}

#[test]
fn test_lifelink_blocker_heals_controller() {
    let mut state = game(cards());
    let brute = place(&mut state, "Brute", P0, ZoneKind::Defense);
    let priest = place(&mut state, "Priest", P1, ZoneKind::Defense);

    state.apply(P0, Intent::EnterAttack { card: brute });
    state.update();
    assert!(state.apply(P1, Intent::UseOn { card: priest, target: brute }));
    assert_eq!(life(&state, P1), 22);
}

#[test]
fn test_attack_requires_untapped_defender() {
    let mut state = game(cards());
    let brute = place(&mut state, "Brute", P0, ZoneKind::Defense);
    let guard = place(&mut state, "Guard", P1, ZoneKind::Defense);

    // Not P1's turn, and not P0's creature.
    assert!(!state.apply(P1, Intent::EnterAttack { card: guard }));
    assert!(!state.apply(P0, Intent::EnterAttack { card: guard }));

    state.object_mut(brute).unwrap().tapped = true;
    assert!(!state.apply(P0, Intent::EnterAttack { card: brute }));
}

#[test]
fn test_withdraw_attack() {
    let mut state = game(cards());
    let brute = place(&mut state, "Brute", P0, ZoneKind::Defense);

    assert!(!state.apply(P0, Intent::WithdrawAttack { card: brute }));
    state.apply(P0, Intent::EnterAttack { card: brute });
    state.update();
    assert!(state.apply(P0, Intent::WithdrawAttack { card: brute }));
    state.update();

    let obj = state.object(brute).unwrap();
    assert_eq!(obj.zone, Some(ZoneRef::new(P0, ZoneKind::Defense)));
    assert!(state.is_in_play(brute));
}

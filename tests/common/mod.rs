//! Shared fixtures for integration tests.

#![allow(dead_code)]

use convergence::{EntityId, GameConfig, GameState, PlayerId, ZoneKind};
use serde_json::{json, Value};

pub const P0: PlayerId = PlayerId::new(0);
pub const P1: PlayerId = PlayerId::new(1);

fn zone(in_play: bool, hidden: bool) -> Value {
    json!({ "inPlay": in_play, "isHidden": hidden })
}

pub fn player() -> Value {
    json!({
        "home": zone(true, false),
        "resources": zone(false, false),
        "attack": zone(true, false),
        "defense": zone(true, false),
        "hand": zone(false, false),
        "discardPile": zone(false, false),
        "laboratory": zone(false, true),
        "homebase": { "art": "base", "cardType": ["Homebase"] },
        "startingLife": 20
    })
}

/// A game config with the given card table and decks.
pub fn config_with_decks(cards: Value, decks: Value, opening_hand: u32) -> GameConfig {
    GameConfig::from_value(json!({
        "cards": cards,
        "players": [player(), player()],
        "decks": decks,
        "responseWindowTicks": 2,
        "openingHand": opening_hand,
        "seed": 7
    }))
    .unwrap()
}

/// A started game with empty decks; cards are placed by the test.
pub fn game(cards: Value) -> GameState {
    let config = config_with_decks(cards, json!([[], []]), 0);
    let mut state = GameState::new(&config).unwrap();
    state.start();
    state
}

/// Create a card straight into a zone.
pub fn place(state: &mut GameState, name: &str, owner: PlayerId, kind: ZoneKind) -> EntityId {
    let id = state.create_card(name, owner, kind).unwrap();
    state.flush_zone_changes();
    id
}

/// Run ticks until the response window closes.
pub fn finish_window(state: &mut GameState) {
    while state.in_response_window() {
        state.update();
    }
}

/// End the active player's turn and let the next one begin.
pub fn pass_turn(state: &mut GameState) {
    let active = state.active_player();
    assert!(state.end_turn_start_timer(active));
    finish_window(state);
}

pub fn life(state: &GameState, player: PlayerId) -> i32 {
    state.player(player).life
}

//! Loading content and building a game from it.

mod common;

use common::*;
use convergence::{CardType, GameConfig, GameState, LoadError, ZoneKind, ZoneRef};
use serde_json::json;

fn cards() -> serde_json::Value {
    json!({
        "Scout": { "art": "scout", "cardType": ["Creature"], "power": 1, "toughness": 1 },
        "Ore": { "art": "ore", "cardType": ["Resource"], "produces": "R" }
    })
}

#[test]
fn test_new_places_homebases_and_decks() {
    let config = config_with_decks(cards(), json!([["Scout", "Ore"], ["Ore"]]), 0);
    let state = GameState::new(&config).unwrap();

    for player in [P0, P1] {
        let homebase = state.object(state.homebase(player)).unwrap();
        assert!(homebase.is_type(CardType::Homebase));
        assert_eq!(homebase.owner, player);
        assert_eq!(homebase.zone, Some(ZoneRef::new(player, ZoneKind::Home)));
        assert!(state.is_in_play(homebase.id));
        assert_eq!(state.player(player).life, 20);
    }
    assert_eq!(state.zone(ZoneRef::new(P0, ZoneKind::Laboratory)).len(), 2);
    assert_eq!(state.zone(ZoneRef::new(P1, ZoneKind::Laboratory)).len(), 1);
    assert_eq!(state.objects().len(), 5);
    assert!(state.pending_zone_changes().is_empty());
    assert!(state.history().is_empty());
    assert_eq!(state.cards().len(), 2);
}

#[test]
fn test_unknown_card_in_deck() {
    let mut config = config_with_decks(cards(), json!([[], []]), 0);
    config.decks[1].push("Dragon".to_string());

    match GameState::new(&config) {
        Err(LoadError::UnknownCard { player, name }) => {
            assert_eq!(player, 1);
            assert_eq!(name, "Dragon");
        }
        other => panic!("expected UnknownCard, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_bad_card_data_is_fatal() {
    let bad_mana = json!({
        "cards": { "Ore": { "art": "ore", "cardType": ["Resource"], "produces": "R?" } },
        "players": [player(), player()],
        "decks": [[], []]
    });
    assert!(matches!(GameConfig::from_value(bad_mana), Err(LoadError::Json(_))));

    let bad_keyword = json!({
        "cards": { "Scout": { "art": "scout", "cardType": ["Creature"], "keywords": ["Shroud"] } },
        "players": [player(), player()],
        "decks": [[], []]
    });
    assert!(matches!(GameConfig::from_value(bad_keyword), Err(LoadError::Json(_))));

    let bad_command = json!({
        "cards": { "Zap": { "art": "zap", "cardType": ["Action"], "effect": { "type": "explode" } } },
        "players": [player(), player()],
        "decks": [[], []]
    });
    assert!(matches!(GameConfig::from_value(bad_command), Err(LoadError::Json(_))));
}

#[test]
fn test_from_path() {
    let value = json!({
        "cards": cards(),
        "players": [player(), player()],
        "decks": [["Scout"], ["Scout"]],
        "seed": 11
    });
    let path = std::env::temp_dir().join(format!("convergence-load-{}.json", std::process::id()));
    std::fs::write(&path, value.to_string()).unwrap();

    let config = GameConfig::from_path(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(config.seed, 11);
    assert_eq!(config.decks[0], vec!["Scout".to_string()]);

    let missing = GameConfig::from_path(path.with_extension("missing"));
    assert!(matches!(missing, Err(LoadError::Io(_))));
}

use std::sync::Arc;

use arena_content::ContentFactory;
use arena_core::{CatalogError, GameConfig, MatchPhase};
use arena_runtime::{FighterSpec, RuntimeError, SessionRegistry};

fn registry() -> SessionRegistry {
    let catalog = ContentFactory::bundled().load_catalog().unwrap();
    let config = GameConfig::new().with_computer_skill_chance(0.0);
    SessionRegistry::new(Arc::new(catalog), config)
        .unwrap()
        .with_seed(1234)
}

fn hero() -> FighterSpec {
    FighterSpec::new("Aria", "Warrior", "sword", "chainmail")
}

fn enemy() -> FighterSpec {
    FighterSpec::new("Bandit", "Thief", "knife", "t-shirt")
}

#[test]
fn full_setup_then_rounds() {
    let mut registry = registry();
    let id = registry.open_session();

    registry.begin_setup(id).unwrap();
    registry.choose_hero(id, hero()).unwrap();
    assert_eq!(registry.snapshot(id).unwrap().phase, MatchPhase::Setup);
    registry.choose_enemy(id, enemy()).unwrap();

    let snapshot = registry.snapshot(id).unwrap();
    assert_eq!(snapshot.phase, MatchPhase::InProgress);
    assert_eq!(snapshot.hero.as_ref().unwrap().name, "Aria");
    assert_eq!(snapshot.enemy.as_ref().unwrap().max_health, 50.0);

    let report = registry.attack(id).unwrap();
    assert!(!report.is_rejected());
    assert_eq!(report.entries.len(), 2);
    assert!(registry.snapshot(id).unwrap().enemy.unwrap().health < 50.0);
}

#[test]
fn enemy_requires_hero() {
    let mut registry = registry();
    let id = registry.open_session();
    registry.begin_setup(id).unwrap();

    let err = registry.choose_enemy(id, enemy()).unwrap_err();

    assert!(matches!(err, RuntimeError::HeroNotChosen));
}

#[test]
fn unknown_names_are_reported() {
    let mut registry = registry();
    let id = registry.open_session();

    let err = registry
        .choose_hero(id, FighterSpec::new("Aria", "Wizard", "sword", "plate"))
        .unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Catalog(CatalogError::UnknownClass(ref name)) if name == "Wizard"
    ));

    let err = registry
        .choose_hero(id, FighterSpec::new("Aria", "Warrior", "spoon", "plate"))
        .unwrap_err();
    assert!(matches!(err, RuntimeError::Catalog(CatalogError::UnknownWeapon(_))));

    assert!(registry.snapshot(id).unwrap().hero.is_none());
}

#[test]
fn setup_is_refused_while_fighting() {
    let mut registry = registry();
    let id = registry.open_session();
    registry.choose_hero(id, hero()).unwrap();
    registry.choose_enemy(id, enemy()).unwrap();

    assert!(matches!(
        registry.begin_setup(id),
        Err(RuntimeError::FightInProgress)
    ));
    assert!(matches!(
        registry.choose_hero(id, hero()),
        Err(RuntimeError::FightInProgress)
    ));
}

#[test]
fn ending_then_restarting_clears_the_match() {
    let mut registry = registry();
    let id = registry.open_session();
    registry.choose_hero(id, hero()).unwrap();
    registry.choose_enemy(id, enemy()).unwrap();

    assert_eq!(registry.end_fight(id).unwrap(), "The fight is over!");
    assert_eq!(registry.attack(id).unwrap().narration(), "The fight is over!");
    assert_eq!(
        registry.snapshot(id).unwrap().phase,
        MatchPhase::Ended { outcome: None }
    );

    registry.begin_setup(id).unwrap();
    let snapshot = registry.snapshot(id).unwrap();
    assert_eq!(snapshot.phase, MatchPhase::Setup);
    assert!(snapshot.hero.is_none());
    assert!(snapshot.game_on);
}

#[test]
fn sessions_are_independent() {
    let mut registry = registry();
    let first = registry.open_session();
    let second = registry.open_session();
    assert_ne!(first, second);

    registry.choose_hero(first, hero()).unwrap();
    registry.choose_enemy(first, enemy()).unwrap();
    registry.attack(first).unwrap();

    let other = registry.snapshot(second).unwrap();
    assert!(other.hero.is_none());
    assert_eq!(other.phase, MatchPhase::Setup);

    assert!(registry.close_session(first));
    assert!(!registry.close_session(first));
    assert!(matches!(
        registry.attack(first),
        Err(RuntimeError::UnknownSession(id)) if id == first
    ));
    assert_eq!(registry.session_count(), 1);
}

#[test]
fn seeded_registries_replay_identically() {
    let play = || {
        let mut registry = registry();
        let id = registry.open_session();
        registry.choose_hero(id, hero()).unwrap();
        registry.choose_enemy(id, enemy()).unwrap();
        (0..5)
            .map(|_| registry.attack(id).unwrap().narration())
            .collect::<Vec<_>>()
    };

    assert_eq!(play(), play());
}

#[test]
fn blank_fighter_name_falls_back_to_role() {
    let mut registry = registry();
    let id = registry.open_session();

    registry
        .choose_hero(id, FighterSpec::new("  ", "Ranger", "axe", "plate"))
        .unwrap();

    assert_eq!(registry.snapshot(id).unwrap().hero.unwrap().name, "Hero");
}

#[test]
fn listing_follows_catalog_order() {
    let listing = registry().catalog_listing();

    assert_eq!(listing.classes, ["Warrior", "Ranger", "Thief"]);
    assert_eq!(listing.weapons.first().map(String::as_str), Some("knife"));
    assert_eq!(listing.armors.len(), 4);
}

#[test]
fn snapshot_serializes_to_json() {
    let mut registry = registry();
    let id = registry.open_session();
    registry.choose_hero(id, hero()).unwrap();

    let json = serde_json::to_value(registry.snapshot(id).unwrap()).unwrap();

    assert_eq!(json["hero"]["class"], "Warrior");
    assert_eq!(json["enemy"], serde_json::Value::Null);
    assert_eq!(json["game_on"], true);
}

#[test]
fn invalid_config_is_rejected() {
    let catalog = ContentFactory::bundled().load_catalog().unwrap();
    let config = GameConfig::new().with_stamina_regen(f64::NAN);

    assert!(matches!(
        SessionRegistry::new(Arc::new(catalog), config),
        Err(RuntimeError::Config(_))
    ));
}

use ellens_alien_game::GameConfig;

#[test]
fn test_default_config() {
    let config = GameConfig::default();
    assert_eq!(config.default_health, 3);

    let alien = config.alien_at(4, 5);
    assert_eq!(alien.health(), 3);
    assert_eq!(alien.position(), (4, 5));
}

#[test]
fn test_partial_ron_keeps_defaults() {
    let config = GameConfig::from_ron("(default_health: 7)").unwrap();
    assert_eq!(config.default_health, 7);
    assert_eq!(config.app_name, GameConfig::default().app_name);
    assert_eq!(config.alien_at(0, 0).health(), 7);
}

#[test]
fn test_full_ron() {
    let config =
        GameConfig::from_ron(r#"GameConfig(app_name: "Range", default_health: 1)"#).unwrap();
    assert_eq!(config.app_name, "Range");
    assert_eq!(config.default_health, 1);
}

#[test]
fn test_malformed_ron_is_rejected() {
    assert!(GameConfig::from_ron("(default_health: \"lots\")").is_err());
    assert!(GameConfig::from_ron("(default_health: 3").is_err());
}

#[test]
fn test_load_reads_file() {
    let path = std::env::temp_dir().join(format!("alien_game_config_{}.ron", std::process::id()));
    std::fs::write(&path, "(default_health: 2)").unwrap();
    let config = GameConfig::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(config.default_health, 2);
}

#[test]
fn test_load_missing_file_fails() {
    let path = std::env::temp_dir().join("alien_game_config_does_not_exist.ron");
    let err = GameConfig::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("failed to read config"));
}

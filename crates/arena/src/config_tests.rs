use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_empty_toml_gives_defaults() {
    let config = ArenaConfig::from_toml_str("").unwrap();
    assert_eq!(config, ArenaConfig::default());
}

#[test]
fn test_toml_overrides_fields() {
    let config = ArenaConfig::from_toml_str(
        r#"
        game = "draughts"
        depth = 3
        black = "minimax"
        games = 6
        seed = 11
        "#,
    )
    .unwrap();
    assert_eq!(config.game, GameKind::Draughts);
    assert_eq!(config.depth, Some(3));
    assert_eq!(config.white, EngineKind::Minimax);
    assert_eq!(config.black, EngineKind::Minimax);
    assert_eq!(config.games, 6);
    assert_eq!(config.seed, Some(11));
    assert_eq!(config.max_plies, 200);
}

#[test]
fn test_unknown_game_in_toml_fails() {
    assert!(matches!(
        ArenaConfig::from_toml_str("game = \"go\""),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_flags_override_and_positionals_are_kept() {
    let mut config = ArenaConfig::default();
    let rest = config
        .apply_args(&args(&["tictactoe", "--depth", "full", "-w", "random", "--no-alternate", "-q"]))
        .unwrap();
    assert_eq!(rest, vec!["tictactoe".to_string()]);
    assert_eq!(config.depth, None);
    assert_eq!(config.white, EngineKind::Random);
    assert!(!config.alternate_colors);
    assert!(!config.verbose);
}

#[test]
fn test_bad_flag_values_are_reported() {
    let mut config = ArenaConfig::default();
    assert!(matches!(
        config.apply_args(&args(&["--games", "many"])),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert!(matches!(
        config.apply_args(&args(&["--depth"])),
        Err(ConfigError::MissingValue(_))
    ));
    assert!(matches!(
        config.apply_args(&args(&["--colour", "blue"])),
        Err(ConfigError::UnknownOption(_))
    ));
}

#[test]
fn test_missing_config_file_is_an_io_error() {
    let err = ArenaConfig::from_args(&args(&["--config", "/nonexistent/arena.toml"])).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_config_round_trips_through_toml() {
    let config = ArenaConfig {
        game: GameKind::TicTacToe,
        seed: Some(3),
        ..Default::default()
    };
    let text = toml::to_string(&config).unwrap();
    assert_eq!(ArenaConfig::from_toml_str(&text).unwrap(), config);
}

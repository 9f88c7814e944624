use frog_jump::config::*;
use frog_jump::error::GameError;

use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn defaults_are_valid() {
    let config = GameConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.width, 1000.0);
    assert_eq!(config.height, 650.0);
    assert_eq!(config.jump_speed, 20.0);
    assert_eq!(config.scroll_speed, 5.0);
    assert_eq!(config.spawn_interval, Span::new(2, 6));
}

#[test]
fn conveyor_spans_screen_plus_one_tile() {
    let config = GameConfig::default();
    assert_eq!(config.ground_top(), 64.0);
    assert_eq!(config.tile_count(), 17);
    assert_eq!(config.conveyor_length(), 1088.0);
    assert!(config.conveyor_length() >= config.width + config.tile_size);
}

#[test]
fn conveyor_for_exact_multiple_width() {
    let config = GameConfig {
        width: 640.0,
        ..GameConfig::default()
    };
    assert_eq!(config.tile_count(), 11);
    assert_eq!(config.conveyor_length(), 640.0 + 64.0);
}

#[test]
fn empty_toml_gives_defaults() {
    let config = GameConfig::from_toml_str("").unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn partial_toml_overrides_named_fields() {
    let config = GameConfig::from_toml_str(
        r#"
        jump_speed = 24.0
        sound = false
        spawn_interval = { min = 1, max = 3 }

        [glyphs]
        fly = "}o{"
        "#,
    )
    .unwrap();
    assert_eq!(config.jump_speed, 24.0);
    assert!(!config.sound);
    assert_eq!(config.spawn_interval, Span::new(1, 3));
    assert_eq!(config.glyphs.get("fly").map(String::as_str), Some("}o{"));
    assert_eq!(config.gravity, 1.0);
}

#[test]
fn unknown_field_is_a_parse_error() {
    let err = GameConfig::from_toml_str("lives = 3").unwrap_err();
    assert!(matches!(err, GameError::ConfigParse(_)));
}

#[test]
fn zero_spawn_interval_is_rejected() {
    let err = GameConfig::from_toml_str("spawn_interval = { min = 0, max = 4 }").unwrap_err();
    assert!(matches!(err, GameError::InvalidConfig(_)));
}

#[test]
fn empty_spawn_interval_is_rejected() {
    let err = GameConfig::from_toml_str("spawn_interval = { min = 4, max = 4 }").unwrap_err();
    assert!(matches!(err, GameError::InvalidConfig(_)));
}

#[test]
fn non_positive_gravity_is_rejected() {
    let err = GameConfig::from_toml_str("gravity = 0.0").unwrap_err();
    assert!(matches!(err, GameError::InvalidConfig(_)));
}

#[test]
fn off_screen_player_is_rejected() {
    let err = GameConfig::from_toml_str("player_left = 990.0").unwrap_err();
    assert!(matches!(err, GameError::InvalidConfig(_)));
}

fn assert_invalid(toml: &str) {
    let err = GameConfig::from_toml_str(toml).unwrap_err();
    assert!(matches!(err, GameError::InvalidConfig(_)), "{toml} gave {err:?}");
}

#[test]
fn infinite_scalars_are_rejected() {
    assert_invalid("width = inf");
    assert_invalid("jump_speed = inf");
    assert_invalid("death_speed = inf");
    assert_invalid("player_left = nan");
}

#[test]
fn infinite_bands_are_rejected() {
    assert_invalid("death_angle = { min = 30.0, max = inf }");
    assert_invalid("death_spin = { min = -inf, max = 4.0 }");
    assert_invalid("decoration_respawn = { min = 0.0, max = inf }");
}

#[test]
fn oversized_conveyor_is_rejected() {
    assert_invalid("tile_size = 0.001");
    assert_invalid("width = 1.0e30");

    let config = GameConfig {
        width: MAX_GROUND_TILES as f32 * 64.0,
        ..GameConfig::default()
    };
    assert!(config.validate().is_ok());
    assert_eq!(config.tile_count(), MAX_GROUND_TILES + 1);
}

#[test]
fn death_angle_must_point_upward() {
    assert_invalid("death_angle = { min = 200.0, max = 260.0 }");
    assert_invalid("death_angle = { min = -30.0, max = 45.0 }");
    assert_invalid("death_angle = { min = 0.0, max = 45.0 }");
    assert_invalid("death_angle = { min = 90.0, max = 181.0 }");
    assert!(GameConfig::from_toml_str("death_angle = { min = 1.0, max = 180.0 }").is_ok());
}

#[test]
fn missing_file_is_an_io_error() {
    let err = GameConfig::load("/definitely/not/here/frog_jump.toml").unwrap_err();
    assert!(matches!(err, GameError::Io(_)));
}

#[test]
fn span_samples_stay_half_open() {
    let span = Span::new(2u32, 6u32);
    let mut rng = StdRng::seed_from_u64(7);
    let mut seen = [false; 6];
    for _ in 0..500 {
        let v = span.sample(&mut rng);
        assert!(span.contains(v));
        seen[v as usize] = true;
    }
    assert_eq!(seen, [false, false, true, true, true, true]);
}

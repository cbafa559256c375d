use super::loader::GameTuning;
use ron::Options;
use ron::extensions::Extensions;

fn parse(source: &str) -> GameTuning {
    Options::default()
        .with_default_extension(Extensions::IMPLICIT_SOME)
        .from_str(source)
        .expect("tuning source should parse")
}

#[test]
fn test_partial_tuning_keeps_defaults() {
    let tuning = parse("(player: (move_speed: 300.0))");
    assert_eq!(tuning.player.move_speed, 300.0);

    let defaults = GameTuning::default();
    assert_eq!(tuning.player.jump_speed, defaults.player.jump_speed);
    assert_eq!(tuning.combat.max_health, defaults.combat.max_health);
    assert_eq!(tuning.enemies.move_speed, defaults.enemies.move_speed);
}

#[test]
fn test_empty_tuning_parses() {
    let tuning = parse("()");
    let defaults = GameTuning::default();
    assert_eq!(tuning.combat.max_health, defaults.combat.max_health);
    assert_eq!(tuning.hazards.web_slow_ratio, defaults.hazards.web_slow_ratio);
}

#[test]
fn test_sections_override_independently() {
    let tuning = parse("(combat: (max_health: 9), hazards: (spike_damage: 2))");
    assert_eq!(tuning.combat.max_health, 9);
    assert_eq!(tuning.hazards.spike_damage, 2);
    assert_eq!(tuning.player.move_speed, GameTuning::default().player.move_speed);
}

use super::*;

#[test]
fn default_level_is_info() {
    assert_eq!(level_for(false, false), LevelFilter::Info);
}

#[test]
fn verbose_enables_debug() {
    assert_eq!(level_for(false, true), LevelFilter::Debug);
}

#[test]
fn quiet_keeps_warnings_and_errors() {
    assert_eq!(level_for(true, false), LevelFilter::Warn);
}

#[test]
fn verbose_wins_over_quiet() {
    assert_eq!(level_for(true, true), LevelFilter::Debug);
}

use crate::LogLevel;

use log::LevelFilter;

#[test]
fn test_known_levels_parse() {
    assert_eq!(*LogLevel::parse_lenient("off"), LevelFilter::Off);
    assert_eq!(*LogLevel::parse_lenient("ERROR"), LevelFilter::Error);
    assert_eq!(*LogLevel::parse_lenient("Warn"), LevelFilter::Warn);
    assert_eq!(*LogLevel::parse_lenient("debug"), LevelFilter::Debug);
    assert_eq!(*LogLevel::parse_lenient(" trace "), LevelFilter::Trace);
}

#[test]
fn test_unknown_level_falls_back_to_info() {
    assert_eq!(*LogLevel::parse_lenient("verbose"), LevelFilter::Info);
}

#[test]
fn test_non_string_level_in_toml_falls_back_to_info() {
    #[derive(serde::Deserialize)]
    struct Wrapper {
        level: LogLevel,
    }

    let wrapper: Wrapper = toml::from_str("level = 3").unwrap();
    assert_eq!(*wrapper.level, LevelFilter::Info);
}

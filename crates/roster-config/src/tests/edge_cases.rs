use crate::{ApiBackend, Config};
use crate::tests::{setup_config_dir, write_config};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err};
use serial_test::serial;

// =========================================================================
// Edge Cases
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error_mentions_file() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(&temp, "this is not valid toml {{{{");

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("config.toml"));
}

#[test]
#[serial]
fn given_unknown_backend_in_toml_when_load_then_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(&temp, "[api]\nbackend = \"soap\"");

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_backend_in_any_case_in_toml_when_load_then_parsed_like_env() {
    for (spelling, expected) in [("REST", ApiBackend::Rest), (" Keyed ", ApiBackend::Keyed)] {
        // Given
        let (temp, _guard) = setup_config_dir();
        write_config(&temp, &format!("[api]\nbackend = \"{spelling}\""));

        // When
        let config = Config::load().unwrap();

        // Then
        assert_that!(config.api.backend, eq(expected));
        assert_eq!(config.api.backend, spelling.parse::<ApiBackend>().unwrap());
    }
}

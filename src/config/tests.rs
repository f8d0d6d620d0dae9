//! Unit tests for configuration loading and precedence.

use ortho_config::MergeComposer;
use rstest::rstest;
use serde_json::{Value, json};

use super::BrowserConfig;
use crate::panel::SplitOrientation;

/// Applies a configuration layer to the composer based on the layer type.
fn apply_layer(composer: &mut MergeComposer, layer_type: &str, value: Value) {
    match layer_type {
        "defaults" => composer.push_defaults(value),
        "file" => composer.push_file(value, None),
        "environment" => composer.push_environment(value),
        "cli" => composer.push_cli(value),
        _ => panic!("unknown layer type: {layer_type}"),
    }
}

#[rstest]
#[case::file_overrides_defaults(
    vec![("defaults", json!({"login": "default"})), ("file", json!({"login": "file-login"}))],
    "file-login",
    "file should override default"
)]
#[case::environment_overrides_file(
    vec![("file", json!({"login": "file-login"})), ("environment", json!({"login": "env-login"}))],
    "env-login",
    "environment should override file"
)]
#[case::cli_overrides_environment(
    vec![("environment", json!({"login": "env-login"})), ("cli", json!({"login": "cli-login"}))],
    "cli-login",
    "CLI should override environment"
)]
fn login_layer_precedence(
    #[case] layers: Vec<(&str, Value)>,
    #[case] expected: &str,
    #[case] message: &str,
) {
    let mut composer = MergeComposer::new();

    for (layer_type, value) in layers {
        apply_layer(&mut composer, layer_type, value);
    }

    let config =
        BrowserConfig::merge_from_layers(composer.layers()).expect("merge should succeed");

    assert_eq!(config.login.as_deref(), Some(expected), "{message}");
}

#[rstest]
fn defaults_leave_login_unset() {
    let mut composer = MergeComposer::new();
    composer.push_defaults(json!({"login": null, "split_orientation": null}));

    let config =
        BrowserConfig::merge_from_layers(composer.layers()).expect("merge should succeed");

    assert!(config.login.is_none(), "login should be None");
    assert_eq!(config.orientation(), SplitOrientation::Horizontal);
}

#[rstest]
#[case("0", SplitOrientation::Vertical)]
#[case("1", SplitOrientation::Horizontal)]
#[case("sideways", SplitOrientation::Horizontal)]
fn orientation_resolves_stored_code(#[case] stored: &str, #[case] expected: SplitOrientation) {
    let config = BrowserConfig {
        split_orientation: Some(stored.to_owned()),
        ..BrowserConfig::default()
    };

    assert_eq!(config.orientation(), expected);
}

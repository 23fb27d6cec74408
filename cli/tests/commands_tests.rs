use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use wps_cli::{run_exceptions, run_filter, run_plural, Config};
use wps_plural::Pluralizer;

const ITEMS: &str = r#"[
    {"size": 3, "name": "a", "user": {"forename": "Bob"}},
    {"size": 5, "name": "b", "user": {"forename": "Eve"}},
    {"name": "c"}
]"#;

fn parse(output: &str) -> Value {
    serde_json::from_str(output).unwrap()
}

#[test]
fn plural_prints_prefixed_form() {
    let out = run_plural(&Pluralizer::new(), "knife", 3, true).unwrap();
    assert_eq!(out, "3 knives");
}

#[test]
fn plural_error_mentions_word() {
    let err = run_plural(&Pluralizer::new(), "boy", -1, false).unwrap_err();
    assert!(format!("{err:#}").contains("negative count"));
    assert!(err.to_string().contains("\"boy\""));
}

#[test]
fn plural_honors_config_exceptions() {
    let config = Config::parse("[plural.exceptions]\ncactus = \"cacti\"\n").unwrap();
    let out = run_plural(&config.pluralizer(), "cactus", 2, false).unwrap();
    assert_eq!(out, "cacti");
}

#[test]
fn filter_with_json_spec() {
    let out = run_filter(r#"["size", ["user", {"forename": "bob"}]]"#, ITEMS).unwrap();
    assert_eq!(
        parse(&out),
        json!([{"size": 3, "name": "a", "user": {"forename": "Bob"}}])
    );
}

#[test]
fn filter_with_bare_property_name() {
    let out = run_filter("size", ITEMS).unwrap();
    assert_eq!(parse(&out).as_array().map(Vec::len), Some(2));
}

#[test]
fn filter_can_return_nothing() {
    let out = run_filter(r#"{"size": 9}"#, ITEMS).unwrap();
    assert_eq!(parse(&out), json!([]));
}

#[test]
fn filter_rejects_empty_input() {
    let err = run_filter("size", "[]").unwrap_err();
    assert!(err.to_string().contains("no records"));
}

#[test]
fn filter_rejects_non_array_input() {
    assert!(run_filter("size", r#"{"size": 3}"#).is_err());
    assert!(run_filter("size", "not json").is_err());
}

#[test]
fn filter_rejects_malformed_json_spec() {
    let err = run_filter(r#"["size""#, r#"[{"size": 3}, {"size": 5}]"#).unwrap_err();
    assert!(err.to_string().contains("not valid JSON"));
    assert!(run_filter(r#"{"size": }"#, ITEMS).is_err());
    assert!(run_filter("size name", ITEMS).is_err());
}

#[test]
fn filter_rejects_invalid_spec() {
    let err = run_filter("[42]", ITEMS).unwrap_err();
    assert!(err.to_string().contains("invalid filter spec"));
}

#[test]
fn exceptions_lists_effective_table() {
    let config =
        Config::parse("[plural]\nreplace-defaults = true\n[plural.exceptions]\nox = \"oxen\"\n")
            .unwrap();
    let out = run_exceptions(&config.pluralizer()).unwrap();
    assert_eq!(parse(&out), json!({"ox": "oxen"}));
}

#[test]
fn default_exceptions_include_builtin_table() {
    let out = run_exceptions(&Config::default().pluralizer()).unwrap();
    assert_eq!(parse(&out)["mouse"], json!("mice"));
}

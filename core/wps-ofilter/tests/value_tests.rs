use serde_json::json;
use wps_ofilter::{is_empty, loose_eq};

#[test]
fn empty_values() {
    for v in [json!(null), json!(false), json!(0), json!(0.0), json!(""), json!("0"), json!([])] {
        assert!(is_empty(&v), "{v} should be empty");
    }
}

#[test]
fn non_empty_values() {
    for v in [json!(true), json!(1), json!(-0.5), json!("a"), json!("00"), json!([0]), json!({})] {
        assert!(!is_empty(&v), "{v} should not be empty");
    }
}

#[test]
fn string_equality_ignores_case() {
    assert!(loose_eq(&json!("Bob"), &json!("bOB")));
    assert!(!loose_eq(&json!("Bob"), &json!("Bobby")));
}

#[test]
fn numeric_strings_compare_as_numbers() {
    assert!(loose_eq(&json!("3"), &json!(3)));
    assert!(loose_eq(&json!("3.00"), &json!("3")));
    assert!(loose_eq(&json!(2.5), &json!("2.5")));
    assert!(!loose_eq(&json!("3"), &json!(4)));
}

#[test]
fn booleans_and_null() {
    assert!(loose_eq(&json!(true), &json!(1)));
    assert!(loose_eq(&json!(false), &json!("")));
    assert!(loose_eq(&json!(null), &json!("")));
    assert!(!loose_eq(&json!(null), &json!(0)));
}

#[test]
fn containers_never_equal() {
    assert!(!loose_eq(&json!([1]), &json!([1])));
    assert!(!loose_eq(&json!({"a": 1}), &json!("a")));
}

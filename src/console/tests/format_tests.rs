use serde_json::json;

use crate::console::format::{display, encode, format_message};

#[test]
fn empty_args_format_to_an_empty_message() {
    assert_eq!(format_message(&[]).unwrap(), "");
}

#[test]
fn args_without_specifiers_are_space_joined() {
    let msg = format_message(&[json!("a"), json!(1), json!({"b": 2})]).unwrap();
    assert_eq!(msg, r#"a 1 {"b":2}"#);
}

#[test]
fn non_string_first_arg_skips_template_handling() {
    let msg = format_message(&[json!(1), json!("a %s b")]).unwrap();
    assert_eq!(msg, "1 a %s b");
}

#[test]
fn string_specifier_renders_raw_strings() {
    let msg = format_message(&[json!("hello %s"), json!("world")]).unwrap();
    assert_eq!(msg, "hello world");
}

#[test]
fn string_specifier_encodes_non_strings() {
    let msg = format_message(&[json!("got %s"), json!([1, 2])]).unwrap();
    assert_eq!(msg, "got [1,2]");
}

#[test]
fn integer_specifier_truncates_and_rejects_non_numbers() {
    assert_eq!(
        format_message(&[json!("n=%d"), json!(4.9)]).unwrap(),
        "n=4"
    );
    assert_eq!(
        format_message(&[json!("n=%i"), json!("four")]).unwrap(),
        "n=NaN"
    );
}

#[test]
fn float_specifier_keeps_the_fraction() {
    assert_eq!(
        format_message(&[json!("f=%f"), json!(2.5)]).unwrap(),
        "f=2.5"
    );
}

#[test]
fn json_specifiers_use_the_structural_encoding() {
    assert_eq!(
        format_message(&[json!("j=%j"), json!("x")]).unwrap(),
        r#"j="x""#
    );
    assert_eq!(
        format_message(&[json!("o=%O"), json!({"k": 1})]).unwrap(),
        r#"o={"k":1}"#
    );
}

#[test]
fn percent_escape_collapses_to_a_literal_percent() {
    let msg = format_message(&[json!("%d%% done"), json!(90)]).unwrap();
    assert_eq!(msg, "90% done");
}

#[test]
fn leftover_args_are_appended_space_separated() {
    let msg = format_message(&[json!("x: %s"), json!("a"), json!("b"), json!(3)]).unwrap();
    assert_eq!(msg, "x: a b 3");
}

#[test]
fn specifiers_beyond_the_args_stay_literal() {
    let msg = format_message(&[json!("a %s then %d"), json!("y")]).unwrap();
    assert_eq!(msg, "a y then %d");
}

#[test]
fn display_renders_strings_raw_and_encode_quotes_them() {
    assert_eq!(display(&json!("s")).unwrap(), "s");
    assert_eq!(encode(&json!("s")).unwrap(), r#""s""#);
    assert_eq!(display(&json!(null)).unwrap(), "null");
    assert_eq!(display(&json!(true)).unwrap(), "true");
}

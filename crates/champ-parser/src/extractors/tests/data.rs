use champ_core::enums::DataKind;

use super::*;
use pretty_assertions::assert_eq;

const FIXTURE: &str = include_str!("../../../tests/fixtures/data.js");

#[test]
fn every_binding_with_a_value_extracted() {
    let file = parse_and_extract(FIXTURE);
    let names: Vec<&str> = file.data.values().map(|d| d.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "INLINE",
            "LIST",
            "VARIABLE_INT",
            "VARIABLE_OBJECT",
            "VARIABLE_STRING",
            "counter",
        ]
    );
}

#[test]
fn default_const() {
    let file = parse_and_extract(FIXTURE);
    let d = data(&file, "VARIABLE_INT");
    assert!(d.default);
    assert!(d.exported);
    assert_eq!(d.kind, DataKind::Const);
    assert_eq!(d.value, "42");
    assert_eq!(d.description.as_deref(), Some("The answer."));
}

#[test]
fn object_literal_is_reinflated() {
    let file = parse_and_extract(FIXTURE);
    let d = data(&file, "VARIABLE_OBJECT");
    assert!(!d.exported);
    assert_eq!(d.kind, DataKind::Var);
    assert_eq!(d.value, "{ key1: 'value1', key2: 'value2', key3: 'value3', }");
}

#[test]
fn exported_let() {
    let file = parse_and_extract(FIXTURE);
    let d = data(&file, "VARIABLE_STRING");
    assert!(d.exported);
    assert!(!d.default);
    assert_eq!(d.kind, DataKind::Let);
    assert_eq!(d.value, "'rosebud'");
}

#[test]
fn values_span_brackets_and_respect_strings() {
    let file = parse_and_extract(FIXTURE);
    assert_eq!(data(&file, "LIST").value, "[ 1, 2, ]");
    assert_eq!(data(&file, "INLINE").value, "\"a;b\"");
    assert_eq!(data(&file, "counter").value, "compute(1, 2)");
}

#[test]
fn default_implies_exported() {
    let file = parse_and_extract(FIXTURE);
    for d in file.data.values() {
        assert!(!d.default || d.exported, "{} is default but not exported", d.id);
    }
}

#[test]
fn declaration_lists_record_every_binding() {
    let file = parse_and_extract("/** Pair. */\nexport const a = 1, b = { c: 2 },\n  d = f(3, 4);\n");
    assert_eq!(data(&file, "a").value, "1");
    assert_eq!(data(&file, "a").description.as_deref(), Some("Pair."));
    assert_eq!(data(&file, "b").value, "{ c: 2 }");
    assert_eq!(data(&file, "b").line, 2);
    let d = data(&file, "d");
    assert_eq!(d.value, "f(3, 4)");
    assert_eq!(d.line, 3);
    assert_eq!(d.kind, DataKind::Const);
    assert!(d.exported);
}

#[test]
fn operator_at_line_end_continues_the_value() {
    let file = parse_and_extract("const greeting = 'x' +\n  'y'\nconst next = 2\n");
    assert_eq!(data(&file, "greeting").value, "'x' + 'y'");
    assert_eq!(data(&file, "next").value, "2");
    assert_eq!(data(&file, "next").line, 3);
}

#[test]
fn non_ascii_identifiers_do_not_match() {
    let file = parse_and_extract("const café = 3;\nconst plain = 4;\n");
    let names: Vec<&str> = file.data.values().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["plain"]);
}

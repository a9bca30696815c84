use champ_core::entities::{Class, Data, File, Function};
use pretty_assertions::assert_eq;

use crate::file::extract_file;

mod classes;
mod data;

const MODULE: &str = "repo.sample";

fn parse_and_extract(source: &str) -> File {
    extract_file(MODULE, "repo/sample.js", "/src/repo/sample.js", source)
}

fn id(name: &str) -> String {
    format!("{MODULE}.{name}")
}

fn class<'a>(file: &'a File, name: &str) -> &'a Class {
    file.classes
        .get(&id(name))
        .unwrap_or_else(|| panic!("should find class '{name}', got {:?}", file.classes.keys()))
}

fn function<'a>(file: &'a File, name: &str) -> &'a Function {
    file.functions
        .get(&id(name))
        .unwrap_or_else(|| panic!("should find function '{name}', got {:?}", file.functions.keys()))
}

fn data<'a>(file: &'a File, name: &str) -> &'a Data {
    file.data
        .get(&id(name))
        .unwrap_or_else(|| panic!("should find data '{name}', got {:?}", file.data.keys()))
}

#[test]
fn empty_file_yields_empty_record() {
    let file = parse_and_extract("");
    assert!(file.is_empty());
    assert_eq!(file.description, None);
}

#[test]
fn comment_only_file_yields_empty_record() {
    let file = parse_and_extract("// nothing here\n/* class Hidden {} */\n/** const A = 1; */\n");
    assert!(file.is_empty());
}

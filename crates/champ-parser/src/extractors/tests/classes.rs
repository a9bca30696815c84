use champ_core::enums::{AttributePrefix, MethodPrefix};

use super::*;
use pretty_assertions::assert_eq;

const FIXTURE: &str = include_str!("../../../tests/fixtures/classes.js");

#[test]
fn declarations_and_expressions_extracted() {
    let file = parse_and_extract(FIXTURE);
    let names: Vec<&str> = file.classes.values().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["AwesomeClass", "CustomWelcome", "MotherClass", "Panel"]);
}

#[test]
fn class_expression_is_not_data() {
    let file = parse_and_extract(FIXTURE);
    assert!(file.data.is_empty(), "data: {:?}", file.data.keys());
    let welcome = class(&file, "CustomWelcome");
    assert!(welcome.methods.contains_key(&id("CustomWelcome.greeting")));
}

#[test]
fn export_flags_and_parent() {
    let file = parse_and_extract(FIXTURE);
    let awesome = class(&file, "AwesomeClass");
    assert!(awesome.exported);
    assert!(awesome.default);
    assert_eq!(awesome.parent.as_deref(), Some("MotherClass"));

    let panel = class(&file, "Panel");
    assert!(panel.exported);
    assert!(!panel.default);
    assert_eq!(panel.parent.as_deref(), Some("React.Component"));

    let mother = class(&file, "MotherClass");
    assert!(!mother.exported);
    assert_eq!(mother.parent, None);
}

#[test]
fn methods_with_prefixes() {
    let file = parse_and_extract(FIXTURE);
    let awesome = class(&file, "AwesomeClass");
    let ids: Vec<&str> = awesome.methods.keys().map(String::as_str).collect();
    assert_eq!(
        ids,
        vec![
            "repo.sample.AwesomeClass.awesomeMethod",
            "repo.sample.AwesomeClass.constructor",
            "repo.sample.AwesomeClass.entries",
            "repo.sample.AwesomeClass.instance.get",
            "repo.sample.AwesomeClass.load",
            "repo.sample.AwesomeClass.name.get",
            "repo.sample.AwesomeClass.name.set",
        ]
    );

    let getter = &awesome.methods[&id("AwesomeClass.name.get")];
    assert_eq!(getter.prefix, MethodPrefix::Get);
    assert_eq!(getter.name, "name");
    let setter = &awesome.methods[&id("AwesomeClass.name.set")];
    assert_eq!(setter.prefix, MethodPrefix::Set);
    assert_eq!(setter.arguments, vec!["value"]);

    let instance = &awesome.methods[&id("AwesomeClass.instance.get")];
    assert_eq!(instance.prefix, MethodPrefix::Get);

    let load = &awesome.methods[&id("AwesomeClass.load")];
    assert_eq!(load.prefix, MethodPrefix::Static);
    assert_eq!(load.arguments, vec!["url", "{ retries = 3 } = {}"]);

    let entries = &awesome.methods[&id("AwesomeClass.entries")];
    assert_eq!(entries.prefix, MethodPrefix::None);
}

#[test]
fn arrow_method_is_also_an_attribute() {
    let file = parse_and_extract(FIXTURE);
    let awesome = class(&file, "AwesomeClass");

    let method = &awesome.methods[&id("AwesomeClass.awesomeMethod")];
    assert!(method.arguments.is_empty());

    let attribute = &awesome.attributes[&id("AwesomeClass.awesomeMethod")];
    assert_eq!(attribute.value, "() => { console.log('Method example'); }");
    assert_eq!(attribute.prefix, AttributePrefix::None);
}

#[test]
fn attributes_with_values() {
    let file = parse_and_extract(FIXTURE);
    let awesome = class(&file, "AwesomeClass");
    assert_eq!(awesome.attributes.len(), 3);

    let attribute = &awesome.attributes[&id("AwesomeClass.attribute")];
    assert_eq!(attribute.prefix, AttributePrefix::Static);
    assert_eq!(attribute.value, "42");

    let classic = &awesome.attributes[&id("AwesomeClass.classicAttribute")];
    assert_eq!(classic.prefix, AttributePrefix::None);
    assert_eq!(classic.value, "{ test: 'a test', }");
}

#[test]
fn members_carry_class_and_module_ids() {
    let file = parse_and_extract(FIXTURE);
    for class in file.classes.values() {
        assert!(class.id.starts_with(&format!("{MODULE}.")));
        for method in class.methods.values() {
            assert!(method.id.starts_with(&format!("{}.", class.id)));
            assert_eq!(method.class_id, class.id);
            assert_eq!(method.module_id, class.module_id);
        }
        for attribute in class.attributes.values() {
            assert!(attribute.id.starts_with(&format!("{}.", class.id)));
            assert_eq!(attribute.module_id, class.module_id);
        }
    }
}

#[test]
fn ordinary_method_hides_plain_attribute_of_same_name() {
    let file = parse_and_extract("class A {\n  size = 1;\n  size() {\n    return 2;\n  }\n}\n");
    let a = class(&file, "A");
    assert!(a.methods.contains_key(&id("A.size")));
    assert!(a.attributes.is_empty());
}

#[test]
fn members_separated_by_semicolons_on_one_line() {
    let file = parse_and_extract("class A { a = 1; b = 2; run() {} }\n");
    let a = class(&file, "A");
    assert_eq!(a.attributes[&id("A.a")].value, "1");
    assert_eq!(a.attributes[&id("A.b")].value, "2");
    assert!(a.methods.contains_key(&id("A.run")));
}

#[test]
fn braces_in_strings_do_not_hide_classes() {
    let file = parse_and_extract("const open = '{';\n\nclass After {\n  go() {}\n}\n");
    assert!(class(&file, "After").methods.contains_key(&id("After.go")));
    assert_eq!(data(&file, "open").value, "'{'");
}

#[test]
fn members_sharing_a_line_after_bodies() {
    let file = parse_and_extract(
        "class A {\n  get a() { return 1 } set a(v) { this.x = v }\n  run() {} stop = () => {}\n  size = 3\n}\n",
    );
    let a = class(&file, "A");
    let methods: Vec<&str> = a.methods.keys().map(String::as_str).collect();
    assert_eq!(
        methods,
        vec!["repo.sample.A.a.get", "repo.sample.A.a.set", "repo.sample.A.run", "repo.sample.A.stop"]
    );
    assert_eq!(a.methods[&id("A.a.set")].line, 2);
    assert_eq!(a.methods[&id("A.stop")].line, 3);
    assert_eq!(a.attributes[&id("A.size")].value, "3");
    assert_eq!(a.attributes[&id("A.stop")].value, "() => {}");
}

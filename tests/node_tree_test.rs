use rstest::{fixture, rstest};
use xml_confnode::{Config, ConfigNode, Error, Field, PathMatch};

const APP_XML: &str = r#"<?xml version="1.0"?>
<app name="demo" version="2">
    <!-- primary and replica -->
    <db id="primary">
        <host>db1.internal</host>
        <host>db1-backup.internal</host>
    </db>
    <cache ttl="60"/>
    <db id="replica">
        <host>db2.internal</host>
    </db>
    <title>
        Demo Application
    </title>
    <empty>   </empty>
</app>"#;

#[fixture]
fn app() -> ConfigNode {
    Config::builder().with_xml(APP_XML).build().unwrap()
}

fn names(nodes: &[ConfigNode]) -> Vec<&str> {
    nodes.iter().filter_map(ConfigNode::name).collect()
}

#[rstest]
fn test_structure_follows_document(app: ConfigNode) {
    assert_eq!(app.name(), Some("app"));
    assert_eq!(names(app.children()), ["db", "cache", "db", "title", "empty"]);
    assert_eq!(app.attributes().len(), 2);
    assert_eq!(app.attribute("version"), Some("2"));

    let primary = &app.children()[0];
    assert_eq!(names(primary.children()), ["host", "host"]);
    assert_eq!(primary.children()[1].value(), Some("db1-backup.internal"));
}

#[rstest]
#[case("/app/title", Some("Demo Application"))]
#[case("/app/empty", None)]
#[case("/app/cache", None)]
fn test_values(app: ConfigNode, #[case] path: &str, #[case] expected: Option<&str>) {
    let node = app.child_at(path).unwrap();
    assert_eq!(node.value(), expected);
}

#[rstest]
fn test_terminal_path_is_self(app: ConfigNode) {
    let matched = app.children_at("/app").unwrap();
    assert!(matches!(matched, PathMatch::Node(node) if node.identity_eq(&app)));
}

#[rstest]
#[case("/other")]
#[case("/other/db")]
#[case("db")]
#[case("")]
fn test_foreign_paths_are_absent(app: ConfigNode, #[case] path: &str) {
    assert!(app.children_at(path).is_none());
}

#[rstest]
fn test_last_sequence_replaces_and_union_collects(app: ConfigNode) {
    let values = |m: PathMatch<'_>| -> Vec<String> {
        m.into_vec()
            .into_iter()
            .filter_map(|n| n.value().map(str::to_string))
            .collect()
    };

    assert_eq!(values(app.children_at("/app/db/host").unwrap()), ["db2.internal"]);
    assert_eq!(
        values(app.children_union("/app/db/host").unwrap()),
        ["db1.internal", "db1-backup.internal", "db2.internal"]
    );
    assert_eq!(app.children_at("/app/db").unwrap().into_vec().len(), 2);
}

#[rstest]
fn test_remove_children_clears_everything(mut app: ConfigNode) {
    app.remove_children("/app/db");
    assert!(!app.has_children());
    assert_eq!(app.attribute("name"), Some("demo"));
}

#[rstest]
fn test_getter_prefers_child_over_attribute(mut app: ConfigNode) {
    assert_eq!(app.call("getName", &[]).unwrap(), Some(Field::Attribute("demo")));

    app.add_child_with_name_and_value("name", "child name");
    let field = app.call("getName", &[]).unwrap().unwrap();
    assert_eq!(field.as_child().and_then(ConfigNode::value), Some("child name"));
}

#[rstest]
#[case("fetchName")]
#[case("name")]
#[case("get")]
#[case("set")]
fn test_unsupported_calls(mut app: ConfigNode, #[case] method: &str) {
    let result = app.call(method, &[]);
    assert!(matches!(result, Err(Error::UnsupportedOperation { .. })));
}

#[test]
fn test_identical_trees_are_not_equal() {
    let a = Config::builder().with_xml(APP_XML).build().unwrap();
    let b = Config::builder().with_xml(APP_XML).build().unwrap();

    assert_ne!(a, b);
    assert!(a.structural_eq(&b));
    assert_eq!(a.children_at("/app").unwrap().first().unwrap(), &a);
    assert!(a.child_at("/app").is_none());
}

#[rstest]
fn test_setter_on_nested_node(mut app: ConfigNode) {
    app.child_at_mut("/app/cache")
        .unwrap()
        .set("setTtl", &["120"])
        .unwrap();

    let cache = app.child_at("/app/cache").unwrap();
    assert_eq!(cache.get("getTtl").unwrap(), Some(Field::Attribute("120")));
}

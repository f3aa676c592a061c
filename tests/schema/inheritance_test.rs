//! Schemas that take over the fields of a composed type

use projectable::{
    AttributeSource, FieldKey, Projectable, ProjectionError, ProjectionSchema, field_specs,
    projectable,
};
use serde_json::json;

#[derive(Debug, Clone, AttributeSource)]
struct Person {
    id: u64,
    name: String,
    ssn: String,
}

projectable! {
    Person {
        id,
        name,
        initials => |person| person.name.chars().next().map(String::from),
    }
}

#[derive(Debug, Clone, AttributeSource)]
struct Employee {
    #[attribute(skip)]
    person: Person,
    team: String,
    salary: u32,
}

projectable! {
    Employee {
        inherit Person => |employee| &employee.person;
        team,
        name => |employee| format!("{} ({})", employee.person.name, employee.team),
    }
}

fn employee() -> Employee {
    Employee {
        person: Person {
            id: 5,
            name: "Rory".to_string(),
            ssn: "123-45-6789".to_string(),
        },
        team: "platform".to_string(),
        salary: 100_000,
    }
}

#[test]
fn inherited_fields_come_first_and_keep_their_order() {
    let keys = Employee::declared_keys().unwrap();
    assert_eq!(
        keys,
        [
            FieldKey::symbol("id"),
            FieldKey::symbol("name"),
            FieldKey::symbol("initials"),
            FieldKey::symbol("team"),
        ]
    );
}

#[test]
fn inherited_fields_read_the_composed_value() {
    let map = employee().to_map().unwrap();
    assert_eq!(map.symbol("id"), Some(&json!(5)));
    assert_eq!(map.symbol("initials"), Some(&json!("R")));
    assert_eq!(map.symbol("team"), Some(&json!("platform")));
}

#[test]
fn redeclared_fields_override_inherited_ones() {
    let map = employee().to_map().unwrap();
    assert_eq!(map.symbol("name"), Some(&json!("Rory (platform)")));
}

#[test]
fn private_state_stays_hidden_at_every_level() {
    let employee = employee();
    let map = employee.to_map().unwrap();
    assert!(map.symbol("ssn").is_none());
    assert!(map.symbol("salary").is_none());
    assert!(map.symbol("person").is_none());
    assert_eq!(employee.salary, 100_000);
    assert_eq!(employee.person.ssn.len(), 11);
}

#[test]
fn parent_changes_show_through() {
    let mut employee = employee();
    employee.person.id = 6;
    assert_eq!(employee.to_map().unwrap().symbol("id"), Some(&json!(6)));
}

#[test]
fn inherited_attribute_errors_name_the_parent_type() {
    let parent = ProjectionSchema::<Person>::builder()
        .named("Person")
        .declare(field_specs!(Person; id, birthday))
        .unwrap()
        .build();
    let schema = ProjectionSchema::<Employee>::builder()
        .named("Employee")
        .inherit(&parent, |employee| &employee.person)
        .build();

    match schema.project(&employee()) {
        Err(ProjectionError::Resolution { type_name, accessor }) => {
            assert_eq!(type_name, "Person");
            assert_eq!(accessor, "birthday");
        }
        other => panic!("expected a resolution error, got {other:?}"),
    }
}

#[test]
fn fields_declared_before_inherit_are_kept() {
    let parent = Person::projection_schema().unwrap();
    let schema = ProjectionSchema::<Employee>::builder()
        .declare(field_specs!(Employee; id => |_| 0))
        .unwrap()
        .inherit(parent, |employee| &employee.person)
        .build();

    let projection = schema.project(&employee()).unwrap();
    assert_eq!(projection.symbol("id"), Some(&json!(0)));
    assert_eq!(projection.symbol("name"), Some(&json!("Rory")));
}

//! Building schemas: ordering, redeclaration and malformed declarations

use projectable::{
    AttributeSource, DeclarationError, DuplicateKeyPolicy, FieldKey, FieldSpec, Projectable,
    ProjectionConfig, ProjectionError, ProjectionSchema, RedeclarationPolicy, field_specs,
    projectable,
};
use serde_json::json;

#[derive(Debug, AttributeSource)]
struct Account {
    id: u32,
    owner: String,
    balance: i64,
}

fn account() -> Account {
    Account {
        id: 9,
        owner: "ana".to_string(),
        balance: -20,
    }
}

fn names(schema: &ProjectionSchema<Account>) -> Vec<String> {
    schema.keys().map(ToString::to_string).collect()
}

#[derive(Debug, AttributeSource)]
struct Broken {
    id: u32,
}

projectable! {
    Broken {
        id,
        id,
    }
}

#[test]
fn macro_entries_become_specs_in_order() {
    let specs = field_specs!(Account;
        id,
        "owner",
        overdrawn => |account| account.balance < 0,
        "flag" => |_| "x",
    );

    let keys: Vec<_> = specs.iter().map(|spec| spec.key.clone()).collect();
    assert_eq!(
        keys,
        [
            FieldKey::symbol("id"),
            FieldKey::string("owner"),
            FieldKey::symbol("overdrawn"),
            FieldKey::string("flag"),
        ]
    );
    let computed: Vec<_> = specs.iter().map(FieldSpec::is_computed).collect();
    assert_eq!(computed, [false, false, true, true]);
}

#[test]
fn empty_declaration_projects_to_an_empty_map() {
    let schema = ProjectionSchema::declare(field_specs!(Account;)).unwrap();
    assert!(schema.is_empty());
    assert!(schema.project(&account()).unwrap().is_empty());
}

#[test]
fn repeated_declarations_accumulate() {
    let schema = ProjectionSchema::builder()
        .declare(field_specs!(Account; id, owner))
        .unwrap()
        .declare(field_specs!(Account; balance))
        .unwrap()
        .build();

    assert_eq!(names(&schema), [":id", ":owner", ":balance"]);
}

#[test]
fn later_declarations_override_in_place() {
    let schema = ProjectionSchema::builder()
        .declare(field_specs!(Account; id, owner, balance))
        .unwrap()
        .declare(field_specs!(Account; owner => |account| account.owner.to_uppercase()))
        .unwrap()
        .build();

    assert_eq!(names(&schema), [":id", ":owner", ":balance"]);
    let projection = schema.project(&account()).unwrap();
    assert_eq!(projection.symbol("owner"), Some(&json!("ANA")));
}

#[test]
fn replace_policy_discards_earlier_declarations() {
    let config = ProjectionConfig::default().with_redeclaration(RedeclarationPolicy::Replace);
    let schema = ProjectionSchema::builder_with_config(config)
        .declare(field_specs!(Account; id, owner))
        .unwrap()
        .declare(field_specs!(Account; balance))
        .unwrap()
        .build();

    assert_eq!(names(&schema), [":balance"]);
}

#[test]
fn duplicate_keys_in_one_declaration_are_rejected() {
    let err = ProjectionSchema::builder()
        .named("Account")
        .declare(field_specs!(Account; id, owner, id))
        .unwrap_err();

    assert_eq!(
        err,
        DeclarationError::DuplicateKey {
            type_name: "Account",
            key: FieldKey::symbol("id"),
        }
    );
}

#[test]
fn same_name_with_different_kinds_is_not_a_duplicate() {
    let schema = ProjectionSchema::declare(field_specs!(Account; owner, "owner")).unwrap();
    let projection = schema.project(&account()).unwrap();

    assert_eq!(projection.len(), 2);
    assert_eq!(projection.symbol("owner"), projection.string("owner"));
}

#[test]
fn last_wins_policy_keeps_the_later_duplicate() {
    let config = ProjectionConfig::default().with_duplicate_keys(DuplicateKeyPolicy::LastWins);
    let schema = ProjectionSchema::builder_with_config(config)
        .declare(field_specs!(Account;
            balance,
            id,
            balance => |account| account.balance.abs(),
        ))
        .unwrap()
        .build();

    assert_eq!(names(&schema), [":balance", ":id"]);
    let projection = schema.project(&account()).unwrap();
    assert_eq!(projection.symbol("balance"), Some(&json!(20)));
}

#[test]
fn malformed_keys_are_rejected_at_declaration() {
    let empty = ProjectionSchema::<Account>::declare(field_specs!(Account; "")).unwrap_err();
    assert!(matches!(
        empty,
        DeclarationError::MalformedKey { reason: "key is empty", .. }
    ));

    let spaced = ProjectionSchema::<Account>::declare(vec![FieldSpec::attribute(
        FieldKey::symbol("first name"),
    )])
    .unwrap_err();
    assert!(matches!(spaced, DeclarationError::MalformedKey { .. }));

    let numeric = ProjectionSchema::<Account>::declare(vec![FieldSpec::attribute(
        FieldKey::symbol("1st"),
    )])
    .unwrap_err();
    assert!(matches!(numeric, DeclarationError::MalformedKey { .. }));
}

#[test]
fn string_keys_may_contain_spaces() {
    let schema = ProjectionSchema::<Account>::declare(field_specs!(Account;
        "account holder" => |account| account.owner.clone(),
    ))
    .unwrap();

    let projection = schema.project(&account()).unwrap();
    assert_eq!(projection.string("account holder"), Some(&json!("ana")));
}

#[test]
fn bare_keys_are_not_resolved_at_declaration() {
    let schema = ProjectionSchema::declare(field_specs!(Account; nickname)).unwrap();
    assert_eq!(schema.len(), 1);
    assert_eq!(
        schema.project(&account()).unwrap_err().missing_accessor(),
        Some("nickname")
    );
}

#[test]
fn broken_type_declaration_fails_every_projection() {
    let broken = Broken { id: 1 };

    for _ in 0..2 {
        match broken.to_map() {
            Err(ProjectionError::Declaration(DeclarationError::DuplicateKey { type_name, key })) => {
                assert_eq!(type_name, "Broken");
                assert_eq!(key, FieldKey::symbol("id"));
            }
            other => panic!("expected a declaration error, got {other:?}"),
        }
    }
    assert!(Broken::declared_keys().is_err());
}

#[test]
fn schema_is_shared_by_all_projections() {
    let first = Broken::projection_schema();
    let second = Broken::projection_schema();
    assert_eq!(first.unwrap_err(), second.unwrap_err());
}

use cypherx::{Kind, Record, Scanner, TypeCache};
use pretty_assertions::assert_eq;
use tests::*;

#[test]
fn derived_property_names() {
    init_logging();

    let cache = TypeCache::new();
    let shape = Scanner::new(&cache).analyze::<Person>().unwrap();

    let names: Vec<_> = shape.property_names().collect();
    assert_eq!(
        names,
        vec!["name", "age", "salary", "del", "social_id", "relative"]
    );
}

#[test]
fn private_fields_are_skipped() {
    let cache = TypeCache::new();
    let shape = Scanner::new(&cache).analyze::<Account>().unwrap();

    let names: Vec<_> = shape.property_names().collect();
    assert_eq!(names, vec!["login", "created"]);
    assert_eq!(Account::fields().len(), 3);
}

#[test]
fn private_fields_are_not_written() {
    let account = Account::from_properties(&props! {
        "login" => "peter",
        "password_hash" => "secret",
        "created" => 1_700_000_000_i64,
    })
    .unwrap();

    assert_eq!(account.login, "peter");
    assert_eq!(account.created_at, 1_700_000_000);
    assert_eq!(account.password_hash(), "");
}

#[test]
fn shape_is_stable_across_analyses() {
    let cache = TypeCache::new();
    let scanner = Scanner::new(&cache);

    let first: Vec<String> = scanner
        .analyze::<Person>()
        .unwrap()
        .property_names()
        .map(str::to_string)
        .collect();
    let second: Vec<String> = scanner
        .analyze::<Person>()
        .unwrap()
        .property_names()
        .map(str::to_string)
        .collect();

    assert_eq!(first, second);
    // Person and its nested Relative
    assert_eq!(cache.len(), 2);
}

#[test]
fn unit_record_is_empty() {
    let err = assert_err!(Scanner::global().analyze::<Marker>(), is_empty_shape);
    assert!(err.to_string().contains("Marker"));
}

#[test]
fn record_with_only_private_fields_is_empty() {
    let mut sealed = Sealed::default();
    assert_err!(
        cypherx::scan_properties(&mut sealed, &props! { "inner" => 5_i64 }),
        is_empty_shape
    );
    assert_eq!(sealed.inner(), 0);
}

#[test]
fn narrow_integer_field_is_unsupported() {
    let err = assert_err!(Scanner::global().analyze::<Counter>(), is_unsupported_field_type);
    assert!(err.to_string().ends_with("no assignment strategy for type `i32`"));
}

#[test]
fn nested_empty_record_is_unsupported() {
    let err = assert_err!(Scanner::global().analyze::<Holder>(), is_unsupported_field_type);
    assert!(err.is_empty_shape());
    assert!(err.to_string().contains("Holder.marker"));
}

#[test]
fn failed_analysis_is_not_cached() {
    let cache = TypeCache::new();
    let scanner = Scanner::new(&cache);

    assert_err!(scanner.analyze::<Counter>(), is_unsupported_field_type);
    assert_err!(scanner.analyze::<Counter>(), is_unsupported_field_type);
    assert!(cache.is_empty());
}

#[test]
fn strategy_kinds() {
    let cache = TypeCache::new();
    let shape = Scanner::new(&cache).analyze::<Person>().unwrap();

    let kinds: Vec<_> = shape
        .fields()
        .iter()
        .map(|field| field.strategy().expected_kind())
        .collect();
    assert_eq!(
        kinds,
        vec![
            Some(Kind::String),
            Some(Kind::I64),
            Some(Kind::F64),
            Some(Kind::Bool),
            None,
            Some(Kind::Node),
        ]
    );
}

use cypherx::{Record, Scanner, Value, ValueRecord, ValueStream};
use pretty_assertions::assert_eq;
use tests::*;

fn row(age: i64, name: &str) -> ValueRecord {
    ValueRecord::from_vec(vec![Value::I64(age), Value::from(name)])
}

#[test]
fn columns_follow_field_order() {
    init_logging();

    let record = AgeAndName::from_values(&row(30, "GetValues")).unwrap();
    assert_eq!(
        record,
        AgeAndName {
            age: 30,
            name: "GetValues".to_string(),
        }
    );
}

#[test]
fn column_count_must_match() {
    let mut dest = AgeAndName::default();

    let err = assert_err!(
        cypherx::scan_values(&mut dest, &ValueRecord::from_vec(vec![Value::I64(30)])),
        is_length_mismatch
    );
    assert!(err
        .to_string()
        .contains("record type declares 2 fields, found 1 values"));
    assert_eq!(dest, AgeAndName::default());
}

#[test]
fn columns_are_kind_checked() {
    let mut dest = AgeAndName::default();

    assert_err!(
        cypherx::scan_values(&mut dest, &ValueRecord::from_vec(vec![Value::from("x"), Value::from("y")])),
        is_kind_mismatch
    );
    assert_eq!(dest.name, "");
}

#[test]
fn private_fields_do_not_count_as_columns() {
    let record = ValueRecord::from_vec(vec![Value::from("peter"), Value::I64(3)]);
    let account = Account::from_values(&record).unwrap();

    assert_eq!(account.login, "peter");
    assert_eq!(account.created_at, 3);
}

#[test]
fn every_row() {
    let stream = ValueStream::from_vec(vec![row(30, "a"), row(25, "b")]);

    let mut records: Vec<AgeAndName> = vec![];
    Scanner::global().scan_records(&mut records, stream).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[1].name, "b");
}

#[test]
fn raw_rows() {
    let rows = ValueStream::from_vec(vec![row(30, "a")]).into_rows().unwrap();
    assert_eq!(rows, vec![vec![Value::I64(30), Value::from("a")]]);
}

use cypherx::{Node, Scanner, ValueRecord, ValueStream};
use pretty_assertions::assert_eq;
use std::any::Any;
use tests::*;

#[test]
fn registered_record_through_any() {
    let scanner = Scanner::global();
    scanner.register::<Relative>().unwrap();

    let mut dest: Box<dyn Any> = Box::new(Relative::default());
    scanner
        .scan_any_properties(Some(dest.as_mut()), &props! { "name" => "x", "age" => 3_i64 })
        .unwrap();

    let relative = dest.downcast::<Relative>().unwrap();
    assert_eq!(*relative, Relative { name: "x".to_string(), age: 3 });
}

#[test]
fn sequence_through_any() {
    let scanner = Scanner::global();
    scanner.register::<Relative>().unwrap();

    let mut dest: Vec<Relative> = vec![];
    let stream = ValueStream::from(vec![
        Node::new(1).with_property("name", "a"),
        Node::new(2).with_property("name", "b"),
    ]);
    scanner.scan_any_nodes(Some(&mut dest), stream).unwrap();

    assert_eq!(dest.len(), 2);
    assert_eq!(scanner.describe_any(Some(&dest)).unwrap(), vec!["name", "age"]);
}

#[test]
fn invalid_destinations_are_rejected_untouched() {
    let scanner = Scanner::global();
    scanner.register::<Relative>().unwrap();

    assert_err!(
        scanner.scan_any_properties(None, &props! { "name" => "x" }),
        is_invalid_destination
    );

    let mut text = String::from("unchanged");
    assert_err!(
        scanner.scan_any_values(Some(&mut text), &ValueRecord::default()),
        is_invalid_destination
    );
    assert_eq!(text, "unchanged");

    let mut relative = Relative::default();
    assert_err!(
        scanner.scan_any_nodes(Some(&mut relative), ValueStream::default()),
        is_invalid_destination
    );
    assert_eq!(relative, Relative::default());
}

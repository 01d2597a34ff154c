use cypherx::{err, Node, Scanner, Value, ValueRecord, ValueStream};
use pretty_assertions::assert_eq;
use tests::*;

fn person(id: i64, name: &str, age: i64, salary: f64) -> Node {
    Node::new(id)
        .with_label("Person")
        .with_property("name", name)
        .with_property("age", age)
        .with_property("salary", salary)
}

fn two_people() -> ValueStream {
    ValueStream::from(vec![
        person(1, "a", 30, 1000.1),
        person(2, "b", 25, 1200.1),
    ])
}

#[test]
fn nodes_in_stream_order() {
    init_logging();

    let mut people: Vec<Person> = vec![];
    cypherx::scan_nodes(&mut people, two_people()).unwrap();

    let got: Vec<_> = people.iter().map(|p| (p.name.as_str(), p.age)).collect();
    assert_eq!(got, vec![("a", 30), ("b", 25)]);
    assert_eq!(people[1].salary, 1200.1);
}

#[test]
fn lazily_produced_nodes() {
    let stream = ValueStream::from_iter(
        (0..3_i64).map(|i| Ok(ValueRecord::from(person(i, &format!("p{i}"), i, 0.0)))),
    );

    let mut people: Vec<Person> = vec![];
    cypherx::scan_nodes(&mut people, stream).unwrap();

    let ages: Vec<_> = people.iter().map(|p| p.age).collect();
    assert_eq!(ages, vec![0, 1, 2]);
}

#[test]
fn non_node_column_fails() {
    let stream = ValueStream::from_vec(vec![
        ValueRecord::from(person(1, "a", 30, 0.0)),
        ValueRecord::from_vec(vec![Value::from("b"), Value::I64(25)]),
    ]);

    let mut people: Vec<Person> = vec![];
    let err = assert_err!(cypherx::scan_nodes(&mut people, stream), is_not_node_type);

    assert_eq!(err.to_string(), "record #1: expected a node value, found String");
    assert_eq!(people.len(), 1);
}

#[test]
fn failing_element_is_not_appended() {
    let stream = ValueStream::from(vec![
        person(1, "a", 30, 0.0),
        Node::new(2).with_property("age", 2.5),
    ]);

    let mut people: Vec<Person> = vec![];
    assert_err!(cypherx::scan_nodes(&mut people, stream), is_kind_mismatch);
    assert_eq!(people.len(), 1);
    assert_eq!(people[0].name, "a");
}

#[test]
fn stream_error_is_returned() {
    let stream = ValueStream::from_iter(
        vec![
            Ok(ValueRecord::from(person(1, "a", 30, 0.0))),
            Err(err!("connection reset by peer")),
        ]
        .into_iter(),
    );

    let mut people: Vec<Person> = vec![];
    let err = cypherx::scan_nodes(&mut people, stream).unwrap_err();
    assert_eq!(err.to_string(), "connection reset by peer");
    assert_eq!(people.len(), 1);
}

#[test]
fn empty_shape_fails_before_the_stream() {
    let mut markers: Vec<Marker> = vec![];
    assert_err!(cypherx::scan_nodes(&mut markers, two_people()), is_empty_shape);
    assert!(markers.is_empty());
}

#[test]
fn single_node() {
    let mut person = Person::default();
    Scanner::global()
        .scan_single_node(&mut person, ValueStream::from_record(person_record()))
        .unwrap();

    assert_eq!(person.name, "peter");
}

#[test]
fn single_node_rejects_other_counts() {
    let mut dest = Person::default();

    let err = assert_err!(
        Scanner::global().scan_single_node(&mut dest, ValueStream::default()),
        is_invalid_record_count
    );
    assert!(err.to_string().ends_with("found 0"));

    let err = assert_err!(
        Scanner::global().scan_single_node(&mut dest, two_people()),
        is_invalid_record_count
    );
    assert!(err.to_string().ends_with("found 2"));
    assert_eq!(dest, Person::default());
}

#[test]
fn single_node_surfaces_stream_errors() {
    let mut dest = Person::default();

    let stream = ValueStream::from_iter(
        vec![Ok(person_record()), Err(err!("connection reset"))].into_iter(),
    );
    let err = Scanner::global()
        .scan_single_node(&mut dest, stream)
        .unwrap_err();
    assert_eq!(err.to_string(), "connection reset");
    assert_eq!(dest, Person::default());

    let stream = ValueStream::from_iter(
        vec![
            Ok(person_record()),
            Ok(person_record()),
            Err(err!("connection reset")),
        ]
        .into_iter(),
    );
    let err = Scanner::global()
        .scan_single_node(&mut dest, stream)
        .unwrap_err();
    assert!(!err.is_invalid_record_count());
}

fn person_record() -> ValueRecord {
    ValueRecord::from(Node::new(7).with_property("name", "peter"))
}

use cypherx::{Node, Record, Scanner, TypeCache, Value, ValueStream};
use std::thread;
use tests::*;

fn assert_sync_send<T: Sync + Send>(val: T) -> T {
    val
}

#[test]
fn shared_types_are_sync_send() {
    let cache = assert_sync_send(TypeCache::new());
    let scanner = assert_sync_send(Scanner::new(&cache));
    let shape = assert_sync_send(scanner.analyze::<Person>().unwrap());
    assert_eq!(shape.len(), 6);

    let err = assert_sync_send(Person::from_node(&Value::Null).unwrap_err());
    assert!(err.is_not_node_type());
}

#[test]
fn parallel_batch_scans() {
    init_logging();

    thread::scope(|s| {
        let handles: Vec<_> = (0..8_i64)
            .map(|t| {
                s.spawn(move || {
                    let nodes: Vec<Node> = (0..16_i64)
                        .map(|i| {
                            Node::new(i)
                                .with_property("name", format!("t{t}-{i}"))
                                .with_property("age", i)
                        })
                        .collect();

                    let mut people: Vec<Person> = vec![];
                    cypherx::scan_nodes(&mut people, ValueStream::from(nodes)).unwrap();
                    people
                })
            })
            .collect();

        for (t, handle) in handles.into_iter().enumerate() {
            let people = handle.join().unwrap();
            assert_eq!(people.len(), 16);
            assert_eq!(people[3].name, format!("t{t}-3"));
            assert_eq!(people[3].age, 3);
        }
    });

    assert!(TypeCache::global().contains::<Person>());
}

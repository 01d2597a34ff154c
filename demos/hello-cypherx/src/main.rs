use cypherx::{Node, Record, Scanner, Value, ValueRecord, ValueStream};

#[derive(Debug, Default, cypherx::Record)]
pub struct Person {
    pub name: String,
    pub age: i64,
    pub salary: f64,
    #[cypher("del")]
    pub deleted: bool,
    pub social_id: Option<String>,
    pub relative: Relative,
}

#[derive(Debug, Default, cypherx::Record)]
pub struct Relative {
    pub name: String,
    pub age: i64,
}

#[derive(Debug, Default, cypherx::Record)]
pub struct AgeAndName {
    pub age: i64,
    pub name: String,
}

/// What `MATCH (p:Person) RETURN p` might hand back.
fn people() -> ValueStream {
    let relative = Node::new(3)
        .with_label("Person")
        .with_property("name", "relative")
        .with_property("age", 12_i64);

    ValueStream::from(vec![
        Node::new(1)
            .with_label("Person")
            .with_property("name", "peter")
            .with_property("age", 30_i64)
            .with_property("salary", 1000.1)
            .with_property("del", false)
            .with_property("social_id", "123abc")
            .with_property("relative", relative),
        Node::new(2)
            .with_label("Person")
            .with_property("name", "mary")
            .with_property("age", 25_i64)
            .with_property("salary", 1200.1)
            .with_property("social_id", Value::Null),
    ])
}

/// What `MATCH (p:Person) RETURN p.age, p.name` might hand back.
fn columns() -> ValueStream {
    ValueStream::from_vec(vec![
        ValueRecord::from_vec(vec![Value::I64(30), Value::from("peter")]),
        ValueRecord::from_vec(vec![Value::I64(25), Value::from("mary")]),
    ])
}

fn main() -> cypherx::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut persons: Vec<Person> = vec![];
    cypherx::scan_nodes(&mut persons, people())?;

    for person in &persons {
        println!("{person:#?}");
    }

    let mut rows: Vec<AgeAndName> = vec![];
    Scanner::global().scan_records(&mut rows, columns())?;
    println!("{rows:?}");

    // A mistyped property is reported with the field it was meant for
    let bad: Value = Node::new(9).with_property("age", "thirty").into();
    if let Err(err) = Person::from_node(&bad) {
        log::warn!("skipping node: {err}");
    }

    println!("{} record types cached", cypherx::TypeCache::global().len());

    Ok(())
}

use cypherx::{bail, Receive, Result, Value};

#[derive(Debug, Default, Clone, PartialEq, cypherx::Record)]
pub struct Person {
    pub name: String,
    pub age: i64,
    pub salary: f64,
    #[cypher("del")]
    pub deleted: bool,
    pub social_id: Option<String>,
    pub relative: Relative,
}

#[derive(Debug, Default, Clone, PartialEq, cypherx::Record)]
pub struct Relative {
    pub name: String,
    pub age: i64,
}

/// Columns of `RETURN p.age, p.name`
#[derive(Debug, Default, Clone, PartialEq, cypherx::Record)]
pub struct AgeAndName {
    pub age: i64,
    pub name: String,
}

#[derive(Debug, Default, cypherx::Record)]
pub struct Account {
    pub login: String,
    password_hash: String,
    #[cypher("created,readonly")]
    pub created_at: i64,
}

impl Account {
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }
}

#[derive(Debug, Default, cypherx::Record)]
pub struct Post {
    pub title: String,
    pub tags: Tags,
    pub score: Option<f64>,
}

/// Reads a comma-separated string or a list of strings.
#[derive(Debug, Default, Clone, PartialEq, cypherx::Receiver)]
pub struct Tags(pub Vec<String>);

impl Receive for Tags {
    fn receive(&mut self, value: &Value) -> Result<()> {
        self.0 = match value {
            Value::Null => vec![],
            Value::String(raw) => raw.split(',').map(|tag| tag.trim().to_string()).collect(),
            Value::List(items) => items
                .iter()
                .map(|item| match item.as_str() {
                    Some(tag) => Ok(tag.to_string()),
                    None => Err(cypherx::err!("tag must be a string, found {}", item.kind())),
                })
                .collect::<Result<_>>()?,
            _ => bail!("cannot read tags from {}", value.kind()),
        };
        Ok(())
    }
}

#[derive(Debug, Default, cypherx::Record)]
pub struct Marker;

#[derive(Debug, Default, cypherx::Record)]
pub struct Sealed {
    inner: i64,
}

impl Sealed {
    pub fn inner(&self) -> i64 {
        self.inner
    }
}

#[derive(Debug, Default, cypherx::Record)]
pub struct Counter {
    pub count: i32,
}

#[derive(Debug, Default, cypherx::Record)]
pub struct Holder {
    pub marker: Marker,
}

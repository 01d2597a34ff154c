use super::*;

/// A graph entity returned by a query, carrying its own property bag.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Node {
    /// Database-assigned identifier
    pub id: i64,

    /// Node labels, in the order the database returned them
    pub labels: Vec<String>,

    /// Node properties
    pub properties: Properties,
}

impl Node {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            labels: vec![],
            properties: Properties::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name, value);
        self
    }

    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }
}

impl From<Properties> for Node {
    fn from(properties: Properties) -> Self {
        Self {
            id: 0,
            labels: vec![],
            properties,
        }
    }
}

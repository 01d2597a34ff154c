mod kind;
pub use kind::Kind;

mod node;
pub use node::Node;

mod properties;
pub use properties::Properties;

mod value;
pub use value::Value;

mod value_record;
pub use value_record::ValueRecord;

mod value_stream;
pub use value_stream::ValueStream;

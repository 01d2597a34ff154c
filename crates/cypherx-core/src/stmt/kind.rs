/// Runtime kind of a [`Value`](super::Value).
///
/// Strategies compare kinds exactly: an `I32` never satisfies an `I64`
/// field and an `F32` never satisfies an `F64` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    I32,
    I64,
    F32,
    F64,
    String,
    List,
    Node,
}

impl Kind {
    pub const fn is_null(self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn is_node(self) -> bool {
        matches!(self, Self::Node)
    }
}

impl core::fmt::Display for Kind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let name = match self {
            Self::Null => "Null",
            Self::Bool => "Bool",
            Self::I32 => "I32",
            Self::I64 => "I64",
            Self::F32 => "F32",
            Self::F64 => "F64",
            Self::String => "String",
            Self::List => "List",
            Self::Node => "Node",
        };
        f.write_str(name)
    }
}

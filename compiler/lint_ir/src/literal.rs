//! Source literals as stored in the syntax tree.

/// A literal token's value.
///
/// Only the widths a source literal can spell are represented; `byte` and
/// `short` values only arise from casts during evaluation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Literal {
    Null,
    Bool(bool),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    /// UTF-16 code unit.
    Char(u16),
    String(Box<str>),
}

impl Literal {
    pub fn string(value: impl Into<Box<str>>) -> Self {
        Literal::String(value.into())
    }

    pub const fn type_name(&self) -> &'static str {
        match self {
            Literal::Null => "null",
            Literal::Bool(_) => "boolean",
            Literal::Int(_) => "int",
            Literal::Long(_) => "long",
            Literal::Float(_) => "float",
            Literal::Double(_) => "double",
            Literal::Char(_) => "char",
            Literal::String(_) => "String",
        }
    }
}

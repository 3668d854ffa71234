//! Declared and cast-target types.

/// Primitive types of the host language.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
}

impl PrimitiveType {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Char => "char",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
        }
    }

    pub const fn is_numeric(self) -> bool {
        !matches!(self, Self::Boolean)
    }
}

/// The resolved type of a declaration, cast target, or array element.
///
/// Reference types are only distinguished as far as evaluation needs:
/// `String` (concatenation, zero value `null`) versus everything else.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeRef {
    Primitive(PrimitiveType),
    String,
    Object,
    /// Unresolved (missing classpath, inference failure).
    #[default]
    Unknown,
}

impl TypeRef {
    pub const BOOLEAN: TypeRef = TypeRef::Primitive(PrimitiveType::Boolean);
    pub const BYTE: TypeRef = TypeRef::Primitive(PrimitiveType::Byte);
    pub const SHORT: TypeRef = TypeRef::Primitive(PrimitiveType::Short);
    pub const CHAR: TypeRef = TypeRef::Primitive(PrimitiveType::Char);
    pub const INT: TypeRef = TypeRef::Primitive(PrimitiveType::Int);
    pub const LONG: TypeRef = TypeRef::Primitive(PrimitiveType::Long);
    pub const FLOAT: TypeRef = TypeRef::Primitive(PrimitiveType::Float);
    pub const DOUBLE: TypeRef = TypeRef::Primitive(PrimitiveType::Double);

    #[inline]
    pub const fn primitive(self) -> Option<PrimitiveType> {
        match self {
            TypeRef::Primitive(p) => Some(p),
            TypeRef::String | TypeRef::Object | TypeRef::Unknown => None,
        }
    }
}

//! Binary and unary operators.
//!
//! The operator set is the one shared by the host language front-ends
//! (Java and Kotlin lower onto the same tags).

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Rem,

    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Logical (short-circuit)
    And,
    Or,

    // Bitwise (also non-short-circuit logical on booleans)
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
    UShr,
}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::And => "&&",
            Self::Or => "||",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::UShr => ">>>",
        }
    }

    /// Returns `true` for operators whose right operand is only evaluated
    /// depending on the left one.
    pub const fn is_short_circuit(self) -> bool {
        matches!(self, Self::And | Self::Or)
    }

    pub const fn is_comparison(self) -> bool {
        matches!(
            self,
            Self::Eq | Self::NotEq | Self::Lt | Self::LtEq | Self::Gt | Self::GtEq
        )
    }

    pub const fn is_shift(self) -> bool {
        matches!(self, Self::Shl | Self::Shr | Self::UShr)
    }
}

/// Unary operators, including the increment/decrement forms that
/// write back to their operand.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnaryOp {
    Neg,
    Plus,
    Not,
    BitNot,
    PreInc,
    PreDec,
    PostInc,
    PostDec,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Plus => "+",
            Self::Not => "!",
            Self::BitNot => "~",
            Self::PreInc | Self::PostInc => "++",
            Self::PreDec | Self::PostDec => "--",
        }
    }

    /// The binary operator an increment or decrement applies with `1`.
    pub const fn step_op(self) -> Option<BinaryOp> {
        match self {
            Self::PreInc | Self::PostInc => Some(BinaryOp::Add),
            Self::PreDec | Self::PostDec => Some(BinaryOp::Sub),
            Self::Neg | Self::Plus | Self::Not | Self::BitNot => None,
        }
    }
}

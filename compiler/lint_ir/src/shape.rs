//! Backend-neutral view of a syntax node.
//!
//! [`Shape`] is what every tree backend reports for a node. The evaluator
//! and the dataflow walk are written once against it, so a backend only
//! has to translate its own node representation into this enum.

use crate::{BinaryOp, Literal, TypeRef, UnaryOp};

/// Loop flavours. The header nodes of a loop are listed in
/// [`Shape::Loop::header`] in source order (`init; cond; update` for `for`).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoopKind {
    For,
    ForEach,
    While,
    /// Body runs before the header.
    DoWhile,
}

/// Non-local control transfer statements.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum JumpKind {
    Return,
    Throw,
    Break,
    Continue,
}

/// Function-like bodies.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FunctionKind {
    /// A method, constructor, or initializer block.
    Method,
    /// A lambda or anonymous function; may run at any later time.
    Lambda,
}

/// Structural kind of a node plus its direct operands.
///
/// `N` is the backend's node handle, `D` its declaration handle.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape<'a, N, D> {
    Literal(&'a Literal),
    Parenthesized(N),
    Unary {
        op: UnaryOp,
        operand: N,
    },
    Binary {
        op: BinaryOp,
        left: N,
        right: N,
    },
    /// `a op b op c ...` with a single operator, evaluated left to right.
    Polyadic {
        op: BinaryOp,
        operands: &'a [N],
    },
    /// `cond ? then_expr : else_expr` (or an `if` used as an expression).
    Conditional {
        cond: N,
        then_expr: N,
        else_expr: N,
    },
    Cast {
        ty: TypeRef,
        operand: N,
    },
    /// Simple name reference.
    Reference {
        name: &'a str,
        decl: Option<D>,
    },
    /// Qualified access `receiver.name`.
    Select {
        receiver: N,
        name: &'a str,
        decl: Option<D>,
    },
    Call {
        receiver: Option<N>,
        method: &'a str,
        args: &'a [N],
        /// The resolved method declaration.
        decl: Option<D>,
    },
    /// `receiver[index]`
    Index {
        receiver: N,
        index: N,
    },
    /// `{a, b, c}` or `new T[] {a, b, c}`.
    ArrayLiteral {
        element: TypeRef,
        elements: &'a [N],
    },
    /// `new T[length]` without an initializer.
    NewArray {
        element: TypeRef,
        length: N,
    },
    /// `target = value`, or `target op= value` when `op` is set.
    Assign {
        op: Option<BinaryOp>,
        target: N,
        value: N,
    },
    /// A local variable declaration; the initializer lives on the declaration.
    VarDecl {
        decl: D,
    },
    /// Sequential statements.
    Block(&'a [N]),
    /// `int a = 1, b = 2;`
    DeclGroup(&'a [N]),
    If {
        cond: N,
        then_branch: N,
        else_branch: Option<N>,
    },
    Loop {
        kind: LoopKind,
        header: &'a [N],
        body: N,
    },
    Switch {
        subject: N,
        cases: &'a [N],
    },
    Try {
        body: N,
        handlers: &'a [N],
        finally: Option<N>,
    },
    Jump {
        kind: JumpKind,
        value: Option<N>,
    },
    Function {
        kind: FunctionKind,
        params: &'a [D],
        body: N,
    },
    /// Anything the evaluator has no rule for (`this`, `instanceof`, class
    /// literals). Children are still exposed for walks.
    Opaque(&'a [N]),
}

impl<N: Copy, D: Copy> Shape<'_, N, D> {
    /// The declaration a name or qualified reference resolves to.
    pub fn resolved_decl(&self) -> Option<D> {
        match self {
            Shape::Reference { decl, .. } | Shape::Select { decl, .. } => *decl,
            _ => None,
        }
    }

    /// Statement-level control constructs whose nested slots execute
    /// conditionally or repeatedly.
    pub fn is_control_flow(&self) -> bool {
        matches!(
            self,
            Shape::If { .. }
                | Shape::Loop { .. }
                | Shape::Switch { .. }
                | Shape::Try { .. }
                | Shape::Function { .. }
        )
    }
}

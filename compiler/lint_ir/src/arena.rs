//! Flat arena backend for [`SyntaxTree`].
//!
//! [`SyntaxArena`] uses struct-of-arrays layout: parallel `kinds` and
//! `parents` arrays indexed by [`ExprId`], a flattened `expr_lists` array
//! indexed by [`ExprRange`], and a declaration table indexed by [`DeclId`].
//! Optional children are stored as [`ExprId::INVALID`].

use crate::tree::children;
use crate::{
    BinaryOp, DeclId, DeclRange, Declaration, ExprId, ExprRange, FunctionKind, JumpKind, Literal,
    LoopKind, Shape, SyntaxTree, TypeRef, UnaryOp,
};

/// Storage form of a node. Mirrors [`Shape`] with ranges instead of slices.
#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    Literal(Literal),
    Parenthesized(ExprId),
    Unary {
        op: UnaryOp,
        operand: ExprId,
    },
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
    Polyadic {
        op: BinaryOp,
        operands: ExprRange,
    },
    Conditional {
        cond: ExprId,
        then_expr: ExprId,
        else_expr: ExprId,
    },
    Cast {
        ty: TypeRef,
        operand: ExprId,
    },
    Reference {
        name: Box<str>,
        decl: Option<DeclId>,
    },
    Select {
        receiver: ExprId,
        name: Box<str>,
        decl: Option<DeclId>,
    },
    Call {
        receiver: ExprId,
        method: Box<str>,
        args: ExprRange,
        decl: Option<DeclId>,
    },
    Index {
        receiver: ExprId,
        index: ExprId,
    },
    ArrayLiteral {
        element: TypeRef,
        elements: ExprRange,
    },
    NewArray {
        element: TypeRef,
        length: ExprId,
    },
    Assign {
        op: Option<BinaryOp>,
        target: ExprId,
        value: ExprId,
    },
    VarDecl {
        decl: DeclId,
    },
    Block(ExprRange),
    DeclGroup(ExprRange),
    If {
        cond: ExprId,
        then_branch: ExprId,
        else_branch: ExprId,
    },
    Loop {
        kind: LoopKind,
        header: ExprRange,
        body: ExprId,
    },
    Switch {
        subject: ExprId,
        cases: ExprRange,
    },
    Try {
        body: ExprId,
        handlers: ExprRange,
        finally: ExprId,
    },
    Jump {
        kind: JumpKind,
        value: ExprId,
    },
    Function {
        kind: FunctionKind,
        params: DeclRange,
        body: ExprId,
    },
    Opaque(ExprRange),
}

/// Arena holding one analyzed compilation unit.
#[derive(Clone, Debug, Default)]
pub struct SyntaxArena {
    /// Node kinds (parallel with `parents`).
    kinds: Vec<ExprKind>,
    /// Parent links; `INVALID` for roots and until [`link_parents`](Self::link_parents).
    parents: Vec<ExprId>,
    /// Flattened node lists (block statements, operands, arguments).
    expr_lists: Vec<ExprId>,
    decls: Vec<Declaration<ExprId>>,
    /// Flattened declaration lists (parameters).
    decl_lists: Vec<DeclId>,
}

#[inline]
fn to_u32(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("too many {what} for a syntax arena"))
}

#[inline]
fn to_u16(len: usize, what: &str) -> u16 {
    u16::try_from(len).unwrap_or_else(|_| panic!("{what} exceeds {} entries", u16::MAX))
}

#[inline]
fn optional(id: ExprId) -> Option<ExprId> {
    id.is_valid().then_some(id)
}

impl SyntaxArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a node, returning its ID.
    pub fn push(&mut self, kind: ExprKind) -> ExprId {
        let id = ExprId::new(to_u32(self.kinds.len(), "nodes"));
        self.kinds.push(kind);
        self.parents.push(ExprId::INVALID);
        id
    }

    #[inline]
    pub fn kind(&self, id: ExprId) -> &ExprKind {
        &self.kinds[id.index()]
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Allocate a contiguous range of node IDs.
    pub fn push_expr_list(&mut self, ids: &[ExprId]) -> ExprRange {
        if ids.is_empty() {
            return ExprRange::EMPTY;
        }
        let start = to_u32(self.expr_lists.len(), "list entries");
        self.expr_lists.extend_from_slice(ids);
        ExprRange::new(start, to_u16(ids.len(), "node list"))
    }

    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        if range.is_empty() {
            return &[];
        }
        let start = range.start as usize;
        &self.expr_lists[start..start + range.len()]
    }

    pub fn push_decl(&mut self, decl: Declaration<ExprId>) -> DeclId {
        let id = DeclId::new(to_u32(self.decls.len(), "declarations"));
        self.decls.push(decl);
        id
    }

    /// Mutable access for the builder (attaching initializers after the
    /// initializer node has been allocated).
    pub fn decl_mut(&mut self, id: DeclId) -> &mut Declaration<ExprId> {
        &mut self.decls[id.index()]
    }

    pub fn push_decl_list(&mut self, ids: &[DeclId]) -> DeclRange {
        if ids.is_empty() {
            return DeclRange::EMPTY;
        }
        let start = to_u32(self.decl_lists.len(), "declaration list entries");
        self.decl_lists.extend_from_slice(ids);
        DeclRange::new(start, to_u16(ids.len(), "declaration list"))
    }

    pub fn get_decl_list(&self, range: DeclRange) -> &[DeclId] {
        if range.is_empty() {
            return &[];
        }
        let start = range.start as usize;
        &self.decl_lists[start..start + range.len()]
    }

    /// Recompute every parent link from the child structure.
    ///
    /// A node shared by two parents keeps the last one linked; the builder
    /// never shares nodes.
    pub fn link_parents(&mut self) {
        self.parents.fill(ExprId::INVALID);
        for index in 0..self.kinds.len() {
            let id = ExprId::new(to_u32(index, "nodes"));
            for child in children(&*self, id) {
                self.parents[child.index()] = id;
            }
        }
    }
}

impl SyntaxTree for SyntaxArena {
    type Node = ExprId;
    type Decl = DeclId;

    fn shape(&self, node: ExprId) -> Shape<'_, ExprId, DeclId> {
        match self.kind(node) {
            ExprKind::Literal(lit) => Shape::Literal(lit),
            ExprKind::Parenthesized(inner) => Shape::Parenthesized(*inner),
            ExprKind::Unary { op, operand } => Shape::Unary {
                op: *op,
                operand: *operand,
            },
            ExprKind::Binary { op, left, right } => Shape::Binary {
                op: *op,
                left: *left,
                right: *right,
            },
            ExprKind::Polyadic { op, operands } => Shape::Polyadic {
                op: *op,
                operands: self.get_expr_list(*operands),
            },
            ExprKind::Conditional {
                cond,
                then_expr,
                else_expr,
            } => Shape::Conditional {
                cond: *cond,
                then_expr: *then_expr,
                else_expr: *else_expr,
            },
            ExprKind::Cast { ty, operand } => Shape::Cast {
                ty: *ty,
                operand: *operand,
            },
            ExprKind::Reference { name, decl } => Shape::Reference {
                name: &**name,
                decl: *decl,
            },
            ExprKind::Select {
                receiver,
                name,
                decl,
            } => Shape::Select {
                receiver: *receiver,
                name: &**name,
                decl: *decl,
            },
            ExprKind::Call {
                receiver,
                method,
                args,
                decl,
            } => Shape::Call {
                receiver: optional(*receiver),
                method: &**method,
                args: self.get_expr_list(*args),
                decl: *decl,
            },
            ExprKind::Index { receiver, index } => Shape::Index {
                receiver: *receiver,
                index: *index,
            },
            ExprKind::ArrayLiteral { element, elements } => Shape::ArrayLiteral {
                element: *element,
                elements: self.get_expr_list(*elements),
            },
            ExprKind::NewArray { element, length } => Shape::NewArray {
                element: *element,
                length: *length,
            },
            ExprKind::Assign { op, target, value } => Shape::Assign {
                op: *op,
                target: *target,
                value: *value,
            },
            ExprKind::VarDecl { decl } => Shape::VarDecl { decl: *decl },
            ExprKind::Block(items) => Shape::Block(self.get_expr_list(*items)),
            ExprKind::DeclGroup(items) => Shape::DeclGroup(self.get_expr_list(*items)),
            ExprKind::If {
                cond,
                then_branch,
                else_branch,
            } => Shape::If {
                cond: *cond,
                then_branch: *then_branch,
                else_branch: optional(*else_branch),
            },
            ExprKind::Loop { kind, header, body } => Shape::Loop {
                kind: *kind,
                header: self.get_expr_list(*header),
                body: *body,
            },
            ExprKind::Switch { subject, cases } => Shape::Switch {
                subject: *subject,
                cases: self.get_expr_list(*cases),
            },
            ExprKind::Try {
                body,
                handlers,
                finally,
            } => Shape::Try {
                body: *body,
                handlers: self.get_expr_list(*handlers),
                finally: optional(*finally),
            },
            ExprKind::Jump { kind, value } => Shape::Jump {
                kind: *kind,
                value: optional(*value),
            },
            ExprKind::Function { kind, params, body } => Shape::Function {
                kind: *kind,
                params: self.get_decl_list(*params),
                body: *body,
            },
            ExprKind::Opaque(items) => Shape::Opaque(self.get_expr_list(*items)),
        }
    }

    #[inline]
    fn parent(&self, node: ExprId) -> Option<ExprId> {
        optional(self.parents[node.index()])
    }

    #[inline]
    fn declaration(&self, decl: DeclId) -> &Declaration<ExprId> {
        &self.decls[decl.index()]
    }
}

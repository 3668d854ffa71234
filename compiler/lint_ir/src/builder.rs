//! Convenience builder for [`SyntaxArena`].
//!
//! Front-ends lowering a host AST and tests constructing trees by hand both
//! go through this API. Children must be built before their parent;
//! [`ArenaBuilder::finish`] links parents once the tree is complete.

use crate::arena::ExprKind;
use crate::{
    BinaryOp, DeclId, DeclKind, Declaration, ExprId, FunctionKind, JumpKind, Literal, LoopKind,
    SyntaxArena, SyntaxTree, TypeRef, UnaryOp,
};

#[derive(Debug, Default)]
pub struct ArenaBuilder {
    arena: SyntaxArena,
}

impl ArenaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Link parents and hand out the finished arena.
    #[must_use]
    pub fn finish(mut self) -> SyntaxArena {
        self.arena.link_parents();
        self.arena
    }

    pub fn node(&mut self, kind: ExprKind) -> ExprId {
        self.arena.push(kind)
    }

    // Declarations

    pub fn declare(&mut self, decl: Declaration<ExprId>) -> DeclId {
        self.arena.push_decl(decl)
    }

    pub fn local(&mut self, name: &str, ty: TypeRef) -> DeclId {
        self.declare(Declaration::new(name, DeclKind::Local, ty))
    }

    pub fn param(&mut self, name: &str, ty: TypeRef) -> DeclId {
        self.declare(Declaration::new(name, DeclKind::Parameter, ty))
    }

    /// A field with an optional initializer node.
    pub fn field(&mut self, decl: Declaration<ExprId>, initializer: Option<ExprId>) -> DeclId {
        let id = self.declare(decl);
        self.arena.decl_mut(id).initializer = initializer;
        id
    }

    /// Attach an initializer to an existing declaration (fields whose
    /// initializers refer to each other).
    pub fn initialize(&mut self, decl: DeclId, initializer: ExprId) {
        self.arena.decl_mut(decl).initializer = Some(initializer);
    }

    // Literals

    pub fn literal(&mut self, lit: Literal) -> ExprId {
        self.node(ExprKind::Literal(lit))
    }

    pub fn null(&mut self) -> ExprId {
        self.literal(Literal::Null)
    }

    pub fn bool(&mut self, value: bool) -> ExprId {
        self.literal(Literal::Bool(value))
    }

    pub fn int(&mut self, value: i32) -> ExprId {
        self.literal(Literal::Int(value))
    }

    pub fn long(&mut self, value: i64) -> ExprId {
        self.literal(Literal::Long(value))
    }

    pub fn float(&mut self, value: f32) -> ExprId {
        self.literal(Literal::Float(value))
    }

    pub fn double(&mut self, value: f64) -> ExprId {
        self.literal(Literal::Double(value))
    }

    /// A `char` literal; characters outside the BMP are not valid here.
    pub fn char(&mut self, value: char) -> ExprId {
        let mut units = [0u16; 2];
        let unit = value.encode_utf16(&mut units)[0];
        self.literal(Literal::Char(unit))
    }

    pub fn string(&mut self, value: &str) -> ExprId {
        self.literal(Literal::string(value))
    }

    // Operators

    pub fn parens(&mut self, inner: ExprId) -> ExprId {
        self.node(ExprKind::Parenthesized(inner))
    }

    pub fn unary(&mut self, op: UnaryOp, operand: ExprId) -> ExprId {
        self.node(ExprKind::Unary { op, operand })
    }

    pub fn binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        self.node(ExprKind::Binary { op, left, right })
    }

    pub fn polyadic(&mut self, op: BinaryOp, operands: &[ExprId]) -> ExprId {
        let operands = self.arena.push_expr_list(operands);
        self.node(ExprKind::Polyadic { op, operands })
    }

    pub fn conditional(&mut self, cond: ExprId, then_expr: ExprId, else_expr: ExprId) -> ExprId {
        self.node(ExprKind::Conditional {
            cond,
            then_expr,
            else_expr,
        })
    }

    pub fn cast(&mut self, ty: TypeRef, operand: ExprId) -> ExprId {
        self.node(ExprKind::Cast { ty, operand })
    }

    // References and calls

    /// A simple name resolved to `decl`.
    pub fn reference(&mut self, decl: DeclId) -> ExprId {
        let name = self.arena.declaration(decl).name.clone();
        self.node(ExprKind::Reference {
            name,
            decl: Some(decl),
        })
    }

    /// A simple name that did not resolve.
    pub fn unresolved(&mut self, name: &str) -> ExprId {
        self.node(ExprKind::Reference {
            name: name.into(),
            decl: None,
        })
    }

    pub fn select(&mut self, receiver: ExprId, name: &str, decl: Option<DeclId>) -> ExprId {
        self.node(ExprKind::Select {
            receiver,
            name: name.into(),
            decl,
        })
    }

    /// An unresolved qualified name `a.b.c`, built left to right.
    ///
    /// An empty path yields an unresolved empty name.
    pub fn path(&mut self, segments: &[&str]) -> ExprId {
        let Some((first, rest)) = segments.split_first() else {
            return self.unresolved("");
        };
        let mut node = self.unresolved(first);
        for segment in rest {
            node = self.select(node, segment, None);
        }
        node
    }

    pub fn call(
        &mut self,
        receiver: Option<ExprId>,
        method: &str,
        args: &[ExprId],
        decl: Option<DeclId>,
    ) -> ExprId {
        let args = self.arena.push_expr_list(args);
        self.node(ExprKind::Call {
            receiver: receiver.unwrap_or(ExprId::INVALID),
            method: method.into(),
            args,
            decl,
        })
    }

    pub fn index(&mut self, receiver: ExprId, index: ExprId) -> ExprId {
        self.node(ExprKind::Index { receiver, index })
    }

    pub fn array(&mut self, element: TypeRef, elements: &[ExprId]) -> ExprId {
        let elements = self.arena.push_expr_list(elements);
        self.node(ExprKind::ArrayLiteral { element, elements })
    }

    pub fn new_array(&mut self, element: TypeRef, length: ExprId) -> ExprId {
        self.node(ExprKind::NewArray { element, length })
    }

    // Statements

    pub fn assign(&mut self, target: ExprId, value: ExprId) -> ExprId {
        self.node(ExprKind::Assign {
            op: None,
            target,
            value,
        })
    }

    pub fn compound_assign(&mut self, op: BinaryOp, target: ExprId, value: ExprId) -> ExprId {
        self.node(ExprKind::Assign {
            op: Some(op),
            target,
            value,
        })
    }

    /// Declaration statement for a local; attaches `initializer` to `decl`.
    pub fn var_decl(&mut self, decl: DeclId, initializer: Option<ExprId>) -> ExprId {
        self.arena.decl_mut(decl).initializer = initializer;
        self.node(ExprKind::VarDecl { decl })
    }

    pub fn block(&mut self, statements: &[ExprId]) -> ExprId {
        let items = self.arena.push_expr_list(statements);
        self.node(ExprKind::Block(items))
    }

    pub fn decl_group(&mut self, declarations: &[ExprId]) -> ExprId {
        let items = self.arena.push_expr_list(declarations);
        self.node(ExprKind::DeclGroup(items))
    }

    pub fn if_(&mut self, cond: ExprId, then_branch: ExprId, else_branch: Option<ExprId>) -> ExprId {
        self.node(ExprKind::If {
            cond,
            then_branch,
            else_branch: else_branch.unwrap_or(ExprId::INVALID),
        })
    }

    pub fn loop_(&mut self, kind: LoopKind, header: &[ExprId], body: ExprId) -> ExprId {
        let header = self.arena.push_expr_list(header);
        self.node(ExprKind::Loop { kind, header, body })
    }

    pub fn while_(&mut self, cond: ExprId, body: ExprId) -> ExprId {
        self.loop_(LoopKind::While, &[cond], body)
    }

    pub fn switch(&mut self, subject: ExprId, cases: &[ExprId]) -> ExprId {
        let cases = self.arena.push_expr_list(cases);
        self.node(ExprKind::Switch { subject, cases })
    }

    pub fn try_(&mut self, body: ExprId, handlers: &[ExprId], finally: Option<ExprId>) -> ExprId {
        let handlers = self.arena.push_expr_list(handlers);
        self.node(ExprKind::Try {
            body,
            handlers,
            finally: finally.unwrap_or(ExprId::INVALID),
        })
    }

    pub fn jump(&mut self, kind: JumpKind, value: Option<ExprId>) -> ExprId {
        self.node(ExprKind::Jump {
            kind,
            value: value.unwrap_or(ExprId::INVALID),
        })
    }

    pub fn function(&mut self, kind: FunctionKind, params: &[DeclId], body: ExprId) -> ExprId {
        let params = self.arena.push_decl_list(params);
        self.node(ExprKind::Function { kind, params, body })
    }

    pub fn method(&mut self, params: &[DeclId], body: ExprId) -> ExprId {
        self.function(FunctionKind::Method, params, body)
    }

    pub fn opaque(&mut self, children: &[ExprId]) -> ExprId {
        let items = self.arena.push_expr_list(children);
        self.node(ExprKind::Opaque(items))
    }
}

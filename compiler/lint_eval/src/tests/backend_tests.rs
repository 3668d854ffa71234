//! The evaluator is written once against `SyntaxTree`; these tests run it
//! over a second, pointer-based backend and check it agrees with the arena.

use lint_ir::{
    ArenaBuilder, BinaryOp, Declaration, ExprId, Literal, Shape, SyntaxTree, TypeRef, UnaryOp,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::{evaluate, EvalConfig, Value};

/// An owned expression tree, as a front-end might hold it before lowering.
#[derive(Clone, Debug)]
enum Expr {
    Lit(Literal),
    Paren(Box<Expr>),
    Unary(UnaryOp, Box<Expr>),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
    Chain(BinaryOp, Vec<Expr>),
    Cond(Box<Expr>, Box<Expr>, Box<Expr>),
    Cast(TypeRef, Box<Expr>),
    Array(TypeRef, Vec<Expr>),
}

impl Expr {
    fn children(&self) -> Vec<&Expr> {
        match self {
            Expr::Lit(_) => vec![],
            Expr::Paren(e) | Expr::Unary(_, e) | Expr::Cast(_, e) => vec![e],
            Expr::Binary(_, l, r) => vec![l, r],
            Expr::Chain(_, items) | Expr::Array(_, items) => items.iter().collect(),
            Expr::Cond(c, t, e) => vec![c, t, e],
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
struct NodeRef(usize);

struct Entry<'e> {
    expr: &'e Expr,
    kids: Vec<NodeRef>,
    parent: Option<NodeRef>,
}

/// Backend that borrows an [`Expr`] and indexes it in preorder.
struct PointerTree<'e> {
    entries: Vec<Entry<'e>>,
    decls: Vec<Declaration<NodeRef>>,
}

impl<'e> PointerTree<'e> {
    fn new(root: &'e Expr) -> (Self, NodeRef) {
        let mut tree = PointerTree {
            entries: Vec::new(),
            decls: Vec::new(),
        };
        let root = tree.add(root, None);
        (tree, root)
    }

    fn add(&mut self, expr: &'e Expr, parent: Option<NodeRef>) -> NodeRef {
        let id = NodeRef(self.entries.len());
        self.entries.push(Entry {
            expr,
            kids: Vec::new(),
            parent,
        });
        let kids = expr
            .children()
            .into_iter()
            .map(|child| self.add(child, Some(id)))
            .collect();
        self.entries[id.0].kids = kids;
        id
    }
}

impl SyntaxTree for PointerTree<'_> {
    type Node = NodeRef;
    type Decl = usize;

    fn shape(&self, node: NodeRef) -> Shape<'_, NodeRef, usize> {
        let entry = &self.entries[node.0];
        let kids = entry.kids.as_slice();
        match entry.expr {
            Expr::Lit(lit) => Shape::Literal(lit),
            Expr::Paren(_) => Shape::Parenthesized(kids[0]),
            Expr::Unary(op, _) => Shape::Unary {
                op: *op,
                operand: kids[0],
            },
            Expr::Binary(op, ..) => Shape::Binary {
                op: *op,
                left: kids[0],
                right: kids[1],
            },
            Expr::Chain(op, _) => Shape::Polyadic {
                op: *op,
                operands: kids,
            },
            Expr::Cond(..) => Shape::Conditional {
                cond: kids[0],
                then_expr: kids[1],
                else_expr: kids[2],
            },
            Expr::Cast(ty, _) => Shape::Cast {
                ty: *ty,
                operand: kids[0],
            },
            Expr::Array(ty, _) => Shape::ArrayLiteral {
                element: *ty,
                elements: kids,
            },
        }
    }

    fn parent(&self, node: NodeRef) -> Option<NodeRef> {
        self.entries[node.0].parent
    }

    fn declaration(&self, decl: usize) -> &Declaration<NodeRef> {
        &self.decls[decl]
    }
}

fn lower(b: &mut ArenaBuilder, expr: &Expr) -> ExprId {
    match expr {
        Expr::Lit(lit) => b.literal(lit.clone()),
        Expr::Paren(inner) => {
            let inner = lower(b, inner);
            b.parens(inner)
        }
        Expr::Unary(op, operand) => {
            let operand = lower(b, operand);
            b.unary(*op, operand)
        }
        Expr::Binary(op, left, right) => {
            let left = lower(b, left);
            let right = lower(b, right);
            b.binary(*op, left, right)
        }
        Expr::Chain(op, items) => {
            let items: Vec<_> = items.iter().map(|item| lower(b, item)).collect();
            b.polyadic(*op, &items)
        }
        Expr::Cond(cond, then_expr, else_expr) => {
            let cond = lower(b, cond);
            let then_expr = lower(b, then_expr);
            let else_expr = lower(b, else_expr);
            b.conditional(cond, then_expr, else_expr)
        }
        Expr::Cast(ty, operand) => {
            let operand = lower(b, operand);
            b.cast(*ty, operand)
        }
        Expr::Array(ty, items) => {
            let items: Vec<_> = items.iter().map(|item| lower(b, item)).collect();
            b.array(*ty, &items)
        }
    }
}

/// Evaluate `expr` on both backends; panics if they disagree.
fn both(expr: &Expr, config: EvalConfig) -> Value {
    let (pointer_tree, root) = PointerTree::new(expr);
    let from_pointers = evaluate(&pointer_tree, root, config);

    let mut b = ArenaBuilder::new();
    let arena_root = lower(&mut b, expr);
    let arena = b.finish();
    let from_arena = evaluate(&arena, arena_root, config);

    assert_eq!(from_pointers, from_arena, "backends disagree on {expr:?}");
    from_arena
}

fn lit(lit: Literal) -> Box<Expr> {
    Box::new(Expr::Lit(lit))
}

#[test]
fn pointer_backend_matches_the_arena() {
    crate::tests::init_tracing();
    let config = EvalConfig::STRICT;

    let sum = Expr::Binary(BinaryOp::Add, lit(Literal::Int(2)), lit(Literal::Long(3)));
    assert_eq!(both(&sum, config), Value::Long(5));

    let text = Expr::Binary(BinaryOp::Add, lit(Literal::string("a")), lit(Literal::Int(1)));
    assert_eq!(both(&text, config), Value::string("a1"));

    let pick = Expr::Cond(
        lit(Literal::Bool(true)),
        lit(Literal::Int(1)),
        lit(Literal::Int(2)),
    );
    assert_eq!(both(&pick, config), Value::Int(1));

    let array = Expr::Array(
        TypeRef::INT,
        vec![
            Expr::Lit(Literal::Int(1)),
            Expr::Lit(Literal::Int(2)),
            Expr::Lit(Literal::Int(3)),
        ],
    );
    assert_eq!(
        both(&array, config),
        Value::Array(vec![Value::Int(1), Value::Int(2), Value::Int(3)])
    );

    let cast = Expr::Cast(
        TypeRef::CHAR,
        Box::new(Expr::Unary(UnaryOp::Neg, lit(Literal::Int(1)))),
    );
    assert_eq!(both(&cast, config), Value::Char(u16::MAX));
}

const OPS: &[BinaryOp] = &[
    BinaryOp::Add,
    BinaryOp::Sub,
    BinaryOp::Mul,
    BinaryOp::Div,
    BinaryOp::Rem,
    BinaryOp::Lt,
    BinaryOp::Eq,
    BinaryOp::And,
    BinaryOp::Or,
    BinaryOp::BitXor,
    BinaryOp::Shl,
    BinaryOp::UShr,
];

const CAST_TYPES: &[TypeRef] = &[
    TypeRef::BYTE,
    TypeRef::CHAR,
    TypeRef::INT,
    TypeRef::LONG,
    TypeRef::FLOAT,
    TypeRef::String,
];

fn leaf() -> impl Strategy<Value = Expr> {
    prop_oneof![
        any::<i32>().prop_map(|n| Expr::Lit(Literal::Int(n))),
        (-1000i64..1000).prop_map(|n| Expr::Lit(Literal::Long(n))),
        (-1.0e6f64..1.0e6).prop_map(|d| Expr::Lit(Literal::Double(d))),
        any::<bool>().prop_map(|b| Expr::Lit(Literal::Bool(b))),
        "[a-z]{0,3}".prop_map(|s| Expr::Lit(Literal::string(s))),
    ]
}

fn expr() -> impl Strategy<Value = Expr> {
    leaf().prop_recursive(4, 48, 4, |inner| {
        prop_oneof![
            inner.clone().prop_map(|e| Expr::Paren(Box::new(e))),
            inner
                .clone()
                .prop_map(|e| Expr::Unary(UnaryOp::Neg, Box::new(e))),
            (proptest::sample::select(OPS), inner.clone(), inner.clone())
                .prop_map(|(op, l, r)| Expr::Binary(op, Box::new(l), Box::new(r))),
            (
                proptest::sample::select(OPS),
                proptest::collection::vec(inner.clone(), 1..4)
            )
                .prop_map(|(op, items)| Expr::Chain(op, items)),
            (inner.clone(), inner.clone(), inner.clone()).prop_map(|(c, t, e)| Expr::Cond(
                Box::new(c),
                Box::new(t),
                Box::new(e)
            )),
            (proptest::sample::select(CAST_TYPES), inner.clone())
                .prop_map(|(ty, e)| Expr::Cast(ty, Box::new(e))),
            proptest::collection::vec(inner, 0..4).prop_map(|items| Expr::Array(TypeRef::Unknown, items)),
        ]
    })
}

proptest! {
    #[test]
    fn backends_agree_on_random_expressions(e in expr(), partial in any::<bool>()) {
        let config = EvalConfig::STRICT.with_partial(partial);
        // `both` asserts agreement itself.
        let _ = both(&e, config);
    }
}

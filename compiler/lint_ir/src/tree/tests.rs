use pretty_assertions::assert_eq;

use super::*;
use crate::{ArenaBuilder, BinaryOp, LoopKind, TypeRef};

#[test]
fn children_follow_program_order() {
    // x = (a > 0) ? a : -a
    let mut b = ArenaBuilder::new();
    let a = b.local("a", TypeRef::INT);
    let x = b.local("x", TypeRef::INT);
    let a1 = b.reference(a);
    let zero = b.int(0);
    let cond = b.binary(BinaryOp::Gt, a1, zero);
    let a2 = b.reference(a);
    let a3 = b.reference(a);
    let neg = b.unary(crate::UnaryOp::Neg, a3);
    let pick = b.conditional(cond, a2, neg);
    let target = b.reference(x);
    let assign = b.assign(target, pick);
    let arena = b.finish();

    assert_eq!(children(&arena, assign).as_slice(), &[target, pick]);
    assert_eq!(children(&arena, pick).as_slice(), &[cond, a2, neg]);
    assert!(children(&arena, a1).is_empty());
}

#[test]
fn do_while_visits_body_first() {
    let mut b = ArenaBuilder::new();
    let cond = b.bool(false);
    let body = b.block(&[]);
    let stmt = b.loop_(LoopKind::DoWhile, &[cond], body);
    let while_stmt = b.while_(cond, body);
    let arena = b.finish();

    assert_eq!(children(&arena, stmt).as_slice(), &[body, cond]);
    assert_eq!(children(&arena, while_stmt).as_slice(), &[cond, body]);
}

#[test]
fn var_decl_child_is_its_initializer() {
    let mut b = ArenaBuilder::new();
    let x = b.local("x", TypeRef::INT);
    let init = b.int(3);
    let decl = b.var_decl(x, Some(init));
    let y = b.local("y", TypeRef::INT);
    let bare = b.var_decl(y, None);
    let arena = b.finish();

    assert_eq!(children(&arena, decl).as_slice(), &[init]);
    assert!(children(&arena, bare).is_empty());
}

#[test]
fn ancestors_walk_to_the_root() {
    // { if (c) { use(1); } }
    let mut b = ArenaBuilder::new();
    let c = b.bool(true);
    let one = b.int(1);
    let call = b.call(None, "use", &[one], None);
    let inner = b.block(&[call]);
    let stmt = b.if_(c, inner, None);
    let outer = b.block(&[stmt]);
    let arena = b.finish();

    let chain: Vec<_> = ancestors(&arena, one).collect();
    assert_eq!(chain, vec![call, inner, stmt, outer]);
    assert!(is_within(&arena, one, stmt));
    assert!(is_within(&arena, stmt, stmt));
    assert!(!is_within(&arena, c, inner));
}

#[test]
fn references_decl_searches_whole_subtree() {
    // (FIELD + 1) > limit
    let mut b = ArenaBuilder::new();
    let field = b.local("FIELD", TypeRef::INT);
    let limit = b.local("limit", TypeRef::INT);
    let other = b.local("other", TypeRef::INT);
    let f = b.reference(field);
    let one = b.int(1);
    let sum = b.binary(BinaryOp::Add, f, one);
    let paren = b.parens(sum);
    let l = b.reference(limit);
    let cmp = b.binary(BinaryOp::Gt, paren, l);
    let arena = b.finish();

    assert!(references_decl(&arena, cmp, field));
    assert!(references_decl(&arena, cmp, limit));
    assert!(!references_decl(&arena, cmp, other));
    assert_eq!(skip_parens(&arena, paren), sum);
}

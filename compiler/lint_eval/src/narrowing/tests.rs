use lint_ir::{ArenaBuilder, BinaryOp, DeclKind, Declaration, Modifiers, TypeRef};
use pretty_assertions::assert_eq;

use super::is_narrowed;
use crate::{evaluate, EvalConfig, Value};

const STRICT: EvalConfig = EvalConfig::STRICT;

#[test]
fn guard_on_the_field_vetoes_its_initializer() {
    // static final int FIELD = -1;
    // if (FIELD > 0) { use(FIELD); } else { use(FIELD); }
    let mut b = ArenaBuilder::new();
    let minus_one = b.int(-1);
    let field = b.field(
        Declaration::new("FIELD", DeclKind::Field, TypeRef::INT)
            .with_modifiers(Modifiers::FINAL | Modifiers::STATIC),
        Some(minus_one),
    );
    let in_cond = b.reference(field);
    let zero = b.int(0);
    let cond = b.binary(BinaryOp::Gt, in_cond, zero);
    let in_then = b.reference(field);
    let then_call = b.call(None, "use", &[in_then], None);
    let then_branch = b.block(&[then_call]);
    let in_else = b.reference(field);
    let else_call = b.call(None, "use", &[in_else], None);
    let guard = b.if_(cond, then_branch, Some(else_call));
    let body = b.block(&[guard]);
    b.method(&[], body);
    let arena = b.finish();

    assert!(is_narrowed(&arena, in_then, field));
    assert!(is_narrowed(&arena, in_else, field));
    assert!(!is_narrowed(&arena, in_cond, field));
    assert_eq!(evaluate(&arena, in_then, STRICT), Value::Unknown);
    assert_eq!(evaluate(&arena, in_else, STRICT), Value::Unknown);
    assert_eq!(evaluate(&arena, in_cond, STRICT), Value::Int(-1));
}

#[test]
fn unrelated_guard_does_not_veto() {
    // if (other > 0) { use(FIELD); }
    let mut b = ArenaBuilder::new();
    let seven = b.int(7);
    let field = b.field(
        Declaration::new("FIELD", DeclKind::Field, TypeRef::INT).with_modifiers(Modifiers::FINAL),
        Some(seven),
    );
    let other = b.unresolved("other");
    let zero = b.int(0);
    let cond = b.binary(BinaryOp::Gt, other, zero);
    let read = b.reference(field);
    let call = b.call(None, "use", &[read], None);
    b.if_(cond, call, None);
    let arena = b.finish();

    assert!(!is_narrowed(&arena, read, field));
    assert_eq!(evaluate(&arena, read, STRICT), Value::Int(7));
}

#[test]
fn guard_applies_to_a_local_initializer_only() {
    // int x = -1; if (x > 0) { use(x); }
    // int y = -1; y = 5; if (y > 0) { use(y); }
    let mut b = ArenaBuilder::new();
    let x = b.local("x", TypeRef::INT);
    let minus_one = b.int(-1);
    let x_decl = b.var_decl(x, Some(minus_one));
    let x_cond_read = b.reference(x);
    let zero = b.int(0);
    let x_cond = b.binary(BinaryOp::Gt, x_cond_read, zero);
    let x_read = b.reference(x);
    let x_call = b.call(None, "use", &[x_read], None);
    let x_guard = b.if_(x_cond, x_call, None);

    let y = b.local("y", TypeRef::INT);
    let minus_one = b.int(-1);
    let y_decl = b.var_decl(y, Some(minus_one));
    let y_target = b.reference(y);
    let five = b.int(5);
    let y_assign = b.assign(y_target, five);
    let y_cond_read = b.reference(y);
    let zero = b.int(0);
    let y_cond = b.binary(BinaryOp::Gt, y_cond_read, zero);
    let y_read = b.reference(y);
    let y_call = b.call(None, "use", &[y_read], None);
    let y_guard = b.if_(y_cond, y_call, None);

    let body = b.block(&[x_decl, x_guard, y_decl, y_assign, y_guard]);
    b.method(&[], body);
    let arena = b.finish();

    assert_eq!(evaluate(&arena, x_read, STRICT), Value::Unknown);
    assert_eq!(evaluate(&arena, x_cond_read, STRICT), Value::Int(-1));
    assert_eq!(evaluate(&arena, y_read, STRICT), Value::Int(5));
}

#[test]
fn conditional_expression_is_not_a_guard() {
    // LIMIT > 0 ? LIMIT : 0
    let mut b = ArenaBuilder::new();
    let three = b.int(3);
    let limit = b.field(
        Declaration::new("LIMIT", DeclKind::Field, TypeRef::INT).with_modifiers(Modifiers::FINAL),
        Some(three),
    );
    let in_cond = b.reference(limit);
    let zero = b.int(0);
    let cond = b.binary(BinaryOp::Gt, in_cond, zero);
    let in_branch = b.reference(limit);
    let fallback = b.int(0);
    let pick = b.conditional(cond, in_branch, fallback);
    let arena = b.finish();

    assert!(!is_narrowed(&arena, in_branch, limit));
    assert_eq!(evaluate(&arena, pick, STRICT), Value::Int(3));
}

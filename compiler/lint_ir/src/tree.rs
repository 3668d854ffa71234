//! The expression adapter: the one seam a tree backend implements.
//!
//! The evaluator never looks at a concrete node type. It asks the backend
//! for a node's [`Shape`], its parent, and the declarations references
//! resolve to. Generic walks over any backend live here as free functions.

use std::fmt;
use std::hash::Hash;

use smallvec::SmallVec;

use crate::{Declaration, LoopKind, Shape};

/// Read-only access to an analyzed syntax tree.
///
/// Implementations must be pure: the same node always reports the same
/// shape, parent, and declaration for the lifetime of the borrow.
pub trait SyntaxTree {
    /// Node handle. Cheap to copy; identity is structural position.
    type Node: Copy + Eq + Hash + fmt::Debug;
    /// Declaration handle.
    type Decl: Copy + Eq + Hash + fmt::Debug;

    fn shape(&self, node: Self::Node) -> Shape<'_, Self::Node, Self::Decl>;

    /// The syntactic parent, or `None` at the root.
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    fn declaration(&self, decl: Self::Decl) -> &Declaration<Self::Node>;
}

/// Child list with inline storage for the common small arities.
pub type Children<N> = SmallVec<[N; 4]>;

/// Direct children of `node` in program (evaluation) order.
///
/// A variable declaration's only child is its initializer. A `do`/`while`
/// loop yields its body before its header.
pub fn children<T: SyntaxTree + ?Sized>(tree: &T, node: T::Node) -> Children<T::Node> {
    let mut out = Children::new();
    match tree.shape(node) {
        Shape::Literal(_) | Shape::Reference { .. } => {}
        Shape::Parenthesized(inner) => out.push(inner),
        Shape::Unary { operand, .. } | Shape::Cast { operand, .. } => out.push(operand),
        Shape::Binary { left, right, .. } => {
            out.push(left);
            out.push(right);
        }
        Shape::Polyadic { operands, .. } => out.extend_from_slice(operands),
        Shape::Conditional {
            cond,
            then_expr,
            else_expr,
        } => {
            out.push(cond);
            out.push(then_expr);
            out.push(else_expr);
        }
        Shape::Select { receiver, .. } => out.push(receiver),
        Shape::Call { receiver, args, .. } => {
            out.extend(receiver);
            out.extend_from_slice(args);
        }
        Shape::Index { receiver, index } => {
            out.push(receiver);
            out.push(index);
        }
        Shape::ArrayLiteral { elements, .. } => out.extend_from_slice(elements),
        Shape::NewArray { length, .. } => out.push(length),
        Shape::Assign { target, value, .. } => {
            out.push(target);
            out.push(value);
        }
        Shape::VarDecl { decl } => out.extend(tree.declaration(decl).initializer),
        Shape::Block(items) | Shape::DeclGroup(items) | Shape::Opaque(items) => {
            out.extend_from_slice(items);
        }
        Shape::If {
            cond,
            then_branch,
            else_branch,
        } => {
            out.push(cond);
            out.push(then_branch);
            out.extend(else_branch);
        }
        Shape::Loop { kind, header, body } => {
            if kind == LoopKind::DoWhile {
                out.push(body);
                out.extend_from_slice(header);
            } else {
                out.extend_from_slice(header);
                out.push(body);
            }
        }
        Shape::Switch { subject, cases } => {
            out.push(subject);
            out.extend_from_slice(cases);
        }
        Shape::Try {
            body,
            handlers,
            finally,
        } => {
            out.push(body);
            out.extend_from_slice(handlers);
            out.extend(finally);
        }
        Shape::Jump { value, .. } => out.extend(value),
        Shape::Function { body, .. } => out.push(body),
    }
    out
}

/// Iterator over the strict ancestors of a node, innermost first.
pub struct Ancestors<'t, T: SyntaxTree + ?Sized> {
    tree: &'t T,
    next: Option<T::Node>,
}

impl<T: SyntaxTree + ?Sized> Iterator for Ancestors<'_, T> {
    type Item = T::Node;

    fn next(&mut self) -> Option<T::Node> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}

pub fn ancestors<T: SyntaxTree + ?Sized>(tree: &T, node: T::Node) -> Ancestors<'_, T> {
    Ancestors {
        tree,
        next: tree.parent(node),
    }
}

/// Returns `true` if `node` is `root` or lies inside it.
pub fn is_within<T: SyntaxTree + ?Sized>(tree: &T, node: T::Node, root: T::Node) -> bool {
    node == root || ancestors(tree, node).any(|a| a == root)
}

/// Returns `true` if any reference in the subtree rooted at `root`
/// resolves to `decl`.
pub fn references_decl<T: SyntaxTree + ?Sized>(tree: &T, root: T::Node, decl: T::Decl) -> bool {
    let mut stack: Vec<T::Node> = vec![root];
    while let Some(node) = stack.pop() {
        if tree.shape(node).resolved_decl() == Some(decl) {
            return true;
        }
        stack.extend(children(tree, node));
    }
    false
}

/// Strip any number of parentheses.
pub fn skip_parens<T: SyntaxTree + ?Sized>(tree: &T, mut node: T::Node) -> T::Node {
    while let Shape::Parenthesized(inner) = tree.shape(node) {
        node = inner;
    }
    node
}

#[cfg(test)]
mod tests;

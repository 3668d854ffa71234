//! The narrowing guard.
//!
//! `if (LIMIT > 0) { use(LIMIT); }` suggests the program does not rely on
//! `LIMIT`'s declared initializer inside the branch, so the evaluator
//! refuses to substitute it there.

use lint_ir::tree::{ancestors, references_decl};
use lint_ir::{Shape, SyntaxTree};
use tracing::debug;

/// Returns `true` if `use_site` sits in a branch of an `if` statement whose
/// condition mentions `decl`.
///
/// A use inside the condition itself is not guarded. Conditional
/// expressions (`c ? a : b`) are not guards.
pub fn is_narrowed<T: SyntaxTree + ?Sized>(tree: &T, use_site: T::Node, decl: T::Decl) -> bool {
    let mut child = use_site;
    for ancestor in ancestors(tree, use_site) {
        if let Shape::If { cond, .. } = tree.shape(ancestor) {
            if child != cond && references_decl(tree, cond, decl) {
                debug!(?decl, guard = ?ancestor, "initializer narrowed by enclosing `if`");
                return true;
            }
        }
        child = ancestor;
    }
    false
}

#[cfg(test)]
mod tests;

//! Reaching-value ("last assignment") analysis.
//!
//! Walks the enclosing method in program order up to the use site, keeping
//! the latest definition of the target variable. Every control construct
//! entered raises a nesting level: its condition or header by one, its
//! bodies and branches by two. Plain blocks and declaration groups do not.
//! An assignment more than one level deeper than the declaration might not
//! execute, so it leaves the variable indeterminate until the next
//! assignment at a trusted level. This is deliberately conservative: a
//! variable assigned the same value in both branches of an `if` is still
//! indeterminate afterwards.
//!
//! A use inside a loop that also reassigns the variable (declared outside
//! the loop body) is indeterminate as well, since a later iteration sees
//! the value written by an earlier one.

use lint_ir::tree::{ancestors, children, is_within, skip_parens};
use lint_ir::{BinaryOp, FunctionKind, LoopKind, Shape, SyntaxTree, UnaryOp};
use tracing::{debug, trace};

use crate::cast::cast_value;
use crate::errors::FoldResult;
use crate::evaluator::Folder;
use crate::operators::evaluate_binary;
use crate::stack::with_nesting_stack;
use crate::unary_operators::evaluate_step;
use crate::Value;

/// Extra nesting for a condition or loop header that runs whenever the
/// construct is reached.
const HEADER: u32 = 1;
/// Extra nesting for code that may or may not run.
const BRANCH: u32 = 2;

/// How the definition reaching a use site was established.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Origin {
    /// The declaration's initializer; no reassignment seen.
    Initializer,
    /// A simple assignment `x = rhs`.
    Assignment,
    /// A compound assignment or increment.
    Update,
    /// A parameter not reassigned before the use.
    Parameter,
    /// Declared without an initializer and not yet assigned.
    Unassigned,
    /// Reassigned under a condition or inside a loop.
    Indeterminate,
}

/// The definition of a variable that reaches a use site.
#[derive(Clone, Debug)]
pub(crate) struct Definition<N> {
    /// The defining expression, when there is a single one.
    pub(crate) node: Option<N>,
    /// The folded value; [`Value::Unknown`] when folding was not requested.
    pub(crate) value: Value,
    pub(crate) origin: Origin,
}

impl<N> Definition<N> {
    fn opaque(origin: Origin) -> Self {
        Definition {
            node: None,
            value: Value::Unknown,
            origin,
        }
    }
}

/// The expression whose value `decl` holds at `use_site`.
///
/// For a local or parameter this is the right-hand side of the last
/// assignment executed unconditionally before `use_site`, or the
/// declaration's initializer when there is none. `None` when the value is
/// indeterminate, comes from a compound assignment or increment, or the
/// variable is a parameter never reassigned. Fields and final locals
/// report their initializer.
pub fn find_last_assignment<T: SyntaxTree + ?Sized>(
    tree: &T,
    decl: T::Decl,
    use_site: T::Node,
) -> Option<T::Node> {
    let declaration = tree.declaration(decl);
    if !declaration.is_local() || (declaration.is_final() && declaration.initializer.is_some()) {
        return declaration.initializer;
    }
    reaching_definition(tree, None, decl, use_site)?.node
}

/// Run the walk for `decl` up to `use_site`.
///
/// With a `folder`, each definition is folded as soon as it is found, so a
/// later definition like `x = x + 1` builds on an already folded value.
pub(crate) fn reaching_definition<'t, T: SyntaxTree + ?Sized>(
    tree: &'t T,
    folder: Option<&mut Folder<'t, T>>,
    decl: T::Decl,
    use_site: T::Node,
) -> Option<Definition<T::Node>> {
    let scope = enclosing_scope(tree, use_site)?;
    let mut walk = ReachingWalk {
        tree,
        folder,
        target: decl,
        use_site,
        level: 0,
        decl_level: None,
        decl_node: None,
        reached: false,
        current: None,
    };
    walk.visit(scope);

    let decl_node = walk.decl_node;
    let definition = walk.current?;
    if reassigned_by_loop(tree, scope, decl, decl_node, use_site) {
        debug!(?decl, "reassigned by an enclosing loop");
        return Some(Definition::opaque(Origin::Indeterminate));
    }
    Some(definition)
}

/// The nearest enclosing method, else the outermost enclosing lambda.
fn enclosing_scope<T: SyntaxTree + ?Sized>(tree: &T, use_site: T::Node) -> Option<T::Node> {
    let mut outermost = None;
    for node in ancestors(tree, use_site) {
        match tree.shape(node) {
            Shape::Function {
                kind: FunctionKind::Method,
                ..
            } => return Some(node),
            Shape::Function { .. } => outermost = Some(node),
            _ => {}
        }
    }
    outermost
}

/// The declaration an assignment target or increment operand writes to.
fn written_decl<T: SyntaxTree + ?Sized>(tree: &T, target: T::Node) -> Option<T::Decl> {
    match tree.shape(skip_parens(tree, target)) {
        Shape::Reference { decl, .. } | Shape::Select { decl, .. } => decl,
        _ => None,
    }
}

/// Returns `true` if the subtree at `root` writes to `decl`.
fn writes_within<T: SyntaxTree + ?Sized>(tree: &T, root: T::Node, decl: T::Decl) -> bool {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        let target = match tree.shape(node) {
            Shape::Assign { target, .. } => Some(target),
            Shape::Unary { op, operand } if op.step_op().is_some() => Some(operand),
            _ => None,
        };
        if target.is_some_and(|target| written_decl(tree, target) == Some(decl)) {
            return true;
        }
        stack.extend(children(tree, node));
    }
    false
}

/// Returns `true` if a loop around `use_site` (inside `scope`) writes to
/// `decl` and the variable outlives one iteration of that loop.
fn reassigned_by_loop<T: SyntaxTree + ?Sized>(
    tree: &T,
    scope: T::Node,
    decl: T::Decl,
    decl_node: Option<T::Node>,
    use_site: T::Node,
) -> bool {
    ancestors(tree, use_site)
        .take_while(|&node| node != scope)
        .any(|node| match tree.shape(node) {
            Shape::Loop { body, .. } => {
                let per_iteration = decl_node.is_some_and(|d| is_within(tree, d, body));
                !per_iteration && writes_within(tree, node, decl)
            }
            _ => false,
        })
}

struct ReachingWalk<'f, 't, T: SyntaxTree + ?Sized> {
    tree: &'t T,
    folder: Option<&'f mut Folder<'t, T>>,
    target: T::Decl,
    use_site: T::Node,
    level: u32,
    decl_level: Option<u32>,
    decl_node: Option<T::Node>,
    reached: bool,
    current: Option<Definition<T::Node>>,
}

impl<T: SyntaxTree + ?Sized> ReachingWalk<'_, '_, T> {
    fn visit(&mut self, node: T::Node) {
        if self.reached {
            return;
        }
        if node == self.use_site {
            self.reached = true;
            return;
        }
        with_nesting_stack(|| self.visit_shape(node));
    }

    fn visit_shape(&mut self, node: T::Node) {
        let tree = self.tree;
        match tree.shape(node) {
            Shape::VarDecl { decl } if decl == self.target => self.declare(node),
            Shape::Function { params, body, .. } => {
                if self.decl_level.is_none() && params.contains(&self.target) {
                    // Parameters are in scope at the body's level.
                    self.decl_level = Some(self.level + BRANCH);
                    self.current = Some(Definition::opaque(Origin::Parameter));
                }
                self.nested(BRANCH, body);
            }
            Shape::Assign { op, target, value } => {
                self.visit(target);
                self.visit(value);
                if !self.reached && written_decl(tree, target) == Some(self.target) {
                    self.assign(op, value);
                }
            }
            Shape::Unary { op, operand } if op.step_op().is_some() => {
                self.visit(operand);
                if !self.reached && written_decl(tree, operand) == Some(self.target) {
                    self.step(op);
                }
            }
            Shape::If {
                cond,
                then_branch,
                else_branch,
            } => {
                self.nested(HEADER, cond);
                self.nested(BRANCH, then_branch);
                if let Some(else_branch) = else_branch {
                    self.nested(BRANCH, else_branch);
                }
            }
            Shape::Conditional {
                cond,
                then_expr,
                else_expr,
            } => {
                self.nested(HEADER, cond);
                self.nested(BRANCH, then_expr);
                self.nested(BRANCH, else_expr);
            }
            Shape::Binary { op, left, right } if op.is_short_circuit() => {
                self.visit(left);
                self.nested(BRANCH, right);
            }
            Shape::Polyadic { op, operands } if op.is_short_circuit() => {
                if let Some((&first, rest)) = operands.split_first() {
                    self.visit(first);
                    for &operand in rest {
                        self.nested(BRANCH, operand);
                    }
                }
            }
            Shape::Loop { kind, header, body } => {
                // `for` headers include the update clause, which runs only
                // after the body.
                let header_level = match kind {
                    LoopKind::While | LoopKind::DoWhile => HEADER,
                    LoopKind::For | LoopKind::ForEach => BRANCH,
                };
                if kind == LoopKind::DoWhile {
                    self.nested(BRANCH, body);
                }
                for &item in header {
                    self.nested(header_level, item);
                }
                if kind != LoopKind::DoWhile {
                    self.nested(BRANCH, body);
                }
            }
            Shape::Switch { subject, cases } => {
                self.nested(HEADER, subject);
                for &case in cases {
                    self.nested(BRANCH, case);
                }
            }
            Shape::Try {
                body,
                handlers,
                finally,
            } => {
                self.nested(BRANCH, body);
                for &handler in handlers {
                    self.nested(BRANCH, handler);
                }
                if let Some(finally) = finally {
                    self.nested(HEADER, finally);
                }
            }
            _ => {
                for child in children(tree, node) {
                    self.visit(child);
                }
            }
        }
    }

    fn nested(&mut self, depth: u32, node: T::Node) {
        self.level += depth;
        self.visit(node);
        self.level -= depth;
    }

    fn declare(&mut self, decl_node: T::Node) {
        let initializer = self.tree.declaration(self.target).initializer;
        if let Some(init) = initializer {
            self.visit(init);
            if self.reached {
                return;
            }
        }
        self.decl_level = Some(self.level);
        self.decl_node = Some(decl_node);
        self.current = Some(match initializer {
            Some(init) => self.define(init, Origin::Initializer),
            None => Definition::opaque(Origin::Unassigned),
        });
    }

    /// Whether a write at the current level is certain to have executed.
    fn trusted(&self) -> bool {
        // A write seen before the declaration is not to a variable of
        // this scope.
        let Some(decl_level) = self.decl_level else {
            return false;
        };
        let trusted = self.level <= decl_level + 1;
        if !trusted {
            debug!(
                decl = ?self.target,
                level = self.level,
                decl_level,
                "conditional reassignment; value is indeterminate"
            );
        }
        trusted
    }

    fn assign(&mut self, op: Option<BinaryOp>, value: T::Node) {
        if self.decl_level.is_none() {
            return;
        }
        if !self.trusted() {
            self.current = Some(Definition::opaque(Origin::Indeterminate));
            return;
        }
        let definition = match op {
            None => self.define(value, Origin::Assignment),
            Some(op) => {
                let rhs = self.fold(value);
                let declared = self.tree.declaration(self.target).ty;
                self.update(|current| {
                    evaluate_binary(current, &rhs, op).map(|v| cast_value(declared, v))
                })
            }
        };
        self.current = Some(definition);
    }

    fn step(&mut self, op: UnaryOp) {
        if self.decl_level.is_none() {
            return;
        }
        if !self.trusted() {
            self.current = Some(Definition::opaque(Origin::Indeterminate));
            return;
        }
        let definition = self.update(|current| evaluate_step(current, op));
        self.current = Some(definition);
    }

    /// A definition by `node`, its value converted to the declared type
    /// (`long n = 1` holds a `long`).
    fn define(&mut self, node: T::Node, origin: Origin) -> Definition<T::Node> {
        let declared = self.tree.declaration(self.target).ty;
        Definition {
            node: Some(node),
            value: cast_value(declared, self.fold(node)),
            origin,
        }
    }

    /// Combine the current value with an update. Without a folder, or when
    /// the current value is unknown, the result is unknown.
    fn update(&mut self, apply: impl FnOnce(&Value) -> FoldResult) -> Definition<T::Node> {
        let current = self
            .current
            .take()
            .map_or(Value::Unknown, |definition| definition.value);
        let value = if current.is_unknown() {
            Value::Unknown
        } else {
            apply(&current).unwrap_or_else(|error| {
                trace!(%error, "update did not fold");
                Value::Unknown
            })
        };
        Definition {
            node: None,
            value,
            origin: Origin::Update,
        }
    }

    fn fold(&mut self, node: T::Node) -> Value {
        match self.folder.as_deref_mut() {
            Some(folder) => folder.fold(node),
            None => Value::Unknown,
        }
    }
}

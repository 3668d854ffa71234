//! Resource reference and resource type classification.
//!
//! For a node the classifier tries, in order:
//! 1. structural decoding of an `R.<kind>.<name>` access;
//! 2. resource type annotations on the resolved declaration (kinds only);
//! 3. unwrapping a recognized accessor call such as `getString(id)`;
//! 4. the definition of the variable that reaches the use.
//!
//! A conditional with a constant condition classifies its live branch.
//! Otherwise the kinds of both branches are merged, and a single reference
//! is only reported when both branches name the same resource.

use lint_eval::{evaluate, find_last_assignment, is_narrowed, EvalConfig};
use lint_ir::tree::skip_parens;
use lint_ir::{Shape, SyntaxTree};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::{
    kinds_from_annotations, AnnotationLookup, DeclaredAnnotations, ResourceKinds,
    ResourceReference,
};

/// Classes whose `get*` methods take a resource id as first argument.
pub const ACCESSOR_OWNERS: [&str; 6] = [
    "android.content.res.Resources",
    "android.content.Context",
    "android.app.Fragment",
    "android.support.v4.app.Fragment",
    "androidx.fragment.app.Fragment",
    "android.content.res.TypedArray",
];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResourceConfig {
    /// Unwrap accessor calls made on an explicit receiver
    /// (`resources.getString(id)`), not only implicit `this` calls.
    pub allow_dereference: bool,
    /// Settings for folding conditions; its depth limit also bounds how
    /// many definitions the classifier follows.
    pub eval: EvalConfig,
}

impl ResourceConfig {
    pub const DEFAULT: ResourceConfig = ResourceConfig {
        allow_dereference: true,
        eval: EvalConfig::STRICT,
    };

    #[must_use]
    pub const fn with_dereference(self, allow_dereference: bool) -> Self {
        ResourceConfig {
            allow_dereference,
            ..self
        }
    }
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Classifier over one tree.
pub struct ResourceEvaluator<'t, T: SyntaxTree + ?Sized, A = DeclaredAnnotations> {
    tree: &'t T,
    annotations: A,
    config: ResourceConfig,
}

impl<'t, T: SyntaxTree + ?Sized> ResourceEvaluator<'t, T> {
    pub fn new(tree: &'t T, config: ResourceConfig) -> Self {
        Self::with_annotations(tree, DeclaredAnnotations, config)
    }
}

impl<'t, T: SyntaxTree + ?Sized, A: AnnotationLookup<T>> ResourceEvaluator<'t, T, A> {
    pub fn with_annotations(tree: &'t T, annotations: A, config: ResourceConfig) -> Self {
        ResourceEvaluator {
            tree,
            annotations,
            config,
        }
    }

    pub fn config(&self) -> ResourceConfig {
        self.config
    }

    /// The single resource `node` refers to.
    #[tracing::instrument(level = "trace", skip_all, fields(node = ?node))]
    pub fn get_resource(&self, node: T::Node) -> Option<ResourceReference> {
        let found = self.resource(node, 0);
        trace!(?found);
        found
    }

    /// Every resource type `node` may hold.
    #[tracing::instrument(level = "trace", skip_all, fields(node = ?node))]
    pub fn get_resource_kinds(&self, node: T::Node) -> Option<ResourceKinds> {
        let found = self.kinds(node, 0);
        trace!(?found);
        found
    }

    fn resource(&self, node: T::Node, depth: u32) -> Option<ResourceReference> {
        if self.too_deep(depth) {
            return None;
        }
        let node = skip_parens(self.tree, node);
        match self.tree.shape(node) {
            Shape::Reference { decl, .. } | Shape::Select { decl, .. } => {
                if let Some(found) = self.decode(node, decl) {
                    return Some(found);
                }
                self.resource(self.definition(decl?, node)?, depth + 1)
            }
            Shape::Call { .. } => self.resource(self.accessor_argument(node)?, depth + 1),
            Shape::Conditional {
                cond,
                then_expr,
                else_expr,
            } => match self.decides(cond) {
                Some(true) => self.resource(then_expr, depth + 1),
                Some(false) => self.resource(else_expr, depth + 1),
                None => {
                    let then_ref = self.resource(then_expr, depth + 1)?;
                    let else_ref = self.resource(else_expr, depth + 1)?;
                    (then_ref == else_ref).then_some(then_ref)
                }
            },
            _ => None,
        }
    }

    fn kinds(&self, node: T::Node, depth: u32) -> Option<ResourceKinds> {
        if self.too_deep(depth) {
            return None;
        }
        let node = skip_parens(self.tree, node);
        match self.tree.shape(node) {
            Shape::Reference { decl, .. } | Shape::Select { decl, .. } => {
                if let Some(found) = self.decode(node, decl) {
                    return Some(found.kind.flag());
                }
                let decl = decl?;
                if let Some(kinds) = self.annotated(decl) {
                    return Some(kinds);
                }
                self.kinds(self.definition(decl, node)?, depth + 1)
            }
            Shape::Call { decl, .. } => {
                if let Some(kinds) = decl.and_then(|decl| self.annotated(decl)) {
                    return Some(kinds);
                }
                self.kinds(self.accessor_argument(node)?, depth + 1)
            }
            Shape::Conditional {
                cond,
                then_expr,
                else_expr,
            } => match self.decides(cond) {
                Some(true) => self.kinds(then_expr, depth + 1),
                Some(false) => self.kinds(else_expr, depth + 1),
                None => match (
                    self.kinds(then_expr, depth + 1),
                    self.kinds(else_expr, depth + 1),
                ) {
                    (Some(then_kinds), Some(else_kinds)) => Some(then_kinds | else_kinds),
                    (then_kinds, else_kinds) => then_kinds.or(else_kinds),
                },
            },
            _ => None,
        }
    }

    fn too_deep(&self, depth: u32) -> bool {
        let limit = self.config.eval.limits.max_depth;
        if depth > limit {
            debug!(limit, "resource lookup depth exceeded");
            return true;
        }
        false
    }

    /// Decode an `R` class access, either from the owner of the resolved
    /// field or, when unresolved, from the qualified name itself.
    fn decode(&self, node: T::Node, decl: Option<T::Decl>) -> Option<ResourceReference> {
        if let Some(decl) = decl {
            let declaration = self.tree.declaration(decl);
            let owner = declaration.owner.as_deref()?;
            return ResourceReference::from_field(owner, &declaration.name);
        }
        ResourceReference::from_path(self.qualified_name(node)?.as_slice())
    }

    /// Segments of a qualified name `a.b.c`; `None` if `node` is anything
    /// other than a chain of selects on a simple name.
    fn qualified_name(&self, node: T::Node) -> Option<SmallVec<[&'t str; 6]>> {
        let mut segments = SmallVec::new();
        let mut current = node;
        loop {
            match self.tree.shape(current) {
                Shape::Select { receiver, name, .. } => {
                    segments.push(name);
                    current = receiver;
                }
                Shape::Reference { name, .. } => {
                    segments.push(name);
                    break;
                }
                _ => return None,
            }
        }
        segments.reverse();
        Some(segments)
    }

    fn annotated(&self, decl: T::Decl) -> Option<ResourceKinds> {
        let names = self.annotations.annotations(self.tree, decl);
        kinds_from_annotations(names.iter().map(|name| &**name))
    }

    /// The first argument of a recognized accessor call.
    fn accessor_argument(&self, call: T::Node) -> Option<T::Node> {
        let Shape::Call {
            receiver,
            method,
            args,
            decl,
        } = self.tree.shape(call)
        else {
            return None;
        };
        if !method.starts_with("get") || (receiver.is_some() && !self.config.allow_dereference) {
            return None;
        }
        let owner = self.tree.declaration(decl?).owner.as_deref()?;
        if !ACCESSOR_OWNERS.iter().any(|&known| known == owner) {
            return None;
        }
        args.first().copied()
    }

    /// The node whose value reaches `use_site`. A field's initializer only
    /// counts when the field is final or field initializers are trusted,
    /// and no initializer counts inside a guard that tests the variable.
    fn definition(&self, decl: T::Decl, use_site: T::Node) -> Option<T::Node> {
        let declaration = self.tree.declaration(decl);
        if !declaration.is_local()
            && !declaration.is_final()
            && !self.config.eval.allow_field_initializers
        {
            trace!(name = &*declaration.name, "mutable field initializer is not trusted");
            return None;
        }
        let found = find_last_assignment(self.tree, decl, use_site)?;
        if Some(found) == declaration.initializer && is_narrowed(self.tree, use_site, decl) {
            debug!(name = &*declaration.name, "initializer vetoed by a guard");
            return None;
        }
        Some(found)
    }

    fn decides(&self, cond: T::Node) -> Option<bool> {
        evaluate(self.tree, cond, self.config.eval).as_bool()
    }
}

//! Lint Resource - resource reference and resource type classification.
//!
//! Built on the constant evaluator in `lint_eval`:
//! - [`ResourceEvaluator::get_resource`]: the single resource an expression names
//! - [`ResourceEvaluator::get_resource_kinds`]: the set of resource types an
//!   expression may hold, from structure, annotations, or its reaching definition
//!
//! Annotation data comes through the [`AnnotationLookup`] collaborator; the
//! default reads the annotations recorded on each [`lint_ir::Declaration`].

mod annotations;
mod classifier;
mod kind;
mod reference;

pub use annotations::{kinds_from_annotations, AnnotationLookup, DeclaredAnnotations};
pub use classifier::{ResourceConfig, ResourceEvaluator, ACCESSOR_OWNERS};
pub use kind::{ResourceKind, ResourceKinds};
pub use reference::ResourceReference;

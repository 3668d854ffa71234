//! Resource type annotations.
//!
//! The classifier asks an [`AnnotationLookup`] for the qualified names of
//! the annotations that apply to a declaration. Hosts with inheritance
//! aware lookup (a parameter inheriting `@StringRes` from the method it
//! overrides) plug that in here; [`DeclaredAnnotations`] just reads what
//! was written on the declaration itself.

use lint_ir::SyntaxTree;

use crate::{ResourceKind, ResourceKinds};

/// Packages that publish the resource type annotations.
const ANNOTATION_PACKAGES: [&str; 2] = ["androidx.annotation.", "android.support.annotation."];

pub trait AnnotationLookup<T: SyntaxTree + ?Sized> {
    /// Qualified annotation names applicable to `decl`, with inheritance
    /// already resolved.
    fn annotations<'a>(&'a self, tree: &'a T, decl: T::Decl) -> &'a [Box<str>];
}

/// Reads [`lint_ir::Declaration::annotations`] as written.
#[derive(Copy, Clone, Debug, Default)]
pub struct DeclaredAnnotations;

impl<T: SyntaxTree + ?Sized> AnnotationLookup<T> for DeclaredAnnotations {
    fn annotations<'a>(&'a self, tree: &'a T, decl: T::Decl) -> &'a [Box<str>] {
        &tree.declaration(decl).annotations
    }
}

/// The kinds implied by one annotation, or `None` if it is not a resource
/// type annotation.
fn kinds_of(qualified_name: &str) -> Option<ResourceKinds> {
    let simple = ANNOTATION_PACKAGES
        .iter()
        .find_map(|package| qualified_name.strip_prefix(package))?;
    match simple {
        "AnyRes" => Some(ResourceKinds::IDENTIFIERS),
        "ColorInt" => Some(ResourceKinds::COLOR_INT),
        "Dimension" | "Px" => Some(ResourceKinds::DIMENSION),
        _ => ResourceKind::ALL
            .into_iter()
            .find(|kind| kind.annotation() == Some(simple))
            .map(ResourceKind::flag),
    }
}

/// Union of the kinds implied by `annotations`; `None` when none of them is
/// a resource type annotation.
pub fn kinds_from_annotations<'a>(
    annotations: impl IntoIterator<Item = &'a str>,
) -> Option<ResourceKinds> {
    let kinds = annotations
        .into_iter()
        .filter_map(kinds_of)
        .fold(ResourceKinds::empty(), |set, kinds| set | kinds);
    (!kinds.is_empty()).then_some(kinds)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn both_packages_are_recognized() {
        assert_eq!(
            kinds_from_annotations(["androidx.annotation.StringRes"]),
            Some(ResourceKinds::STRING)
        );
        assert_eq!(
            kinds_from_annotations(["android.support.annotation.DrawableRes"]),
            Some(ResourceKinds::DRAWABLE)
        );
        assert_eq!(kinds_from_annotations(["com.example.StringRes"]), None);
    }

    #[test]
    fn markers_and_any() {
        assert_eq!(
            kinds_from_annotations(["androidx.annotation.ColorInt"]),
            Some(ResourceKinds::COLOR_INT)
        );
        assert_eq!(
            kinds_from_annotations(["androidx.annotation.Px"]),
            Some(ResourceKinds::DIMENSION)
        );
        assert_eq!(
            kinds_from_annotations(["androidx.annotation.AnyRes"]),
            Some(ResourceKinds::IDENTIFIERS)
        );
    }

    #[test]
    fn unrelated_annotations_are_ignored() {
        assert_eq!(
            kinds_from_annotations([
                "androidx.annotation.NonNull",
                "androidx.annotation.ColorRes",
                "java.lang.Deprecated",
            ]),
            Some(ResourceKinds::COLOR)
        );
        assert_eq!(kinds_from_annotations(["androidx.annotation.NonNull"]), None);
        assert_eq!(kinds_from_annotations([]), None);
    }
}

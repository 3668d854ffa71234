//! Resource references and decoding of generated `R` class accesses.

use std::fmt;

use crate::ResourceKind;

/// Package of the framework's own `R` class.
const PLATFORM_PACKAGE: &str = "android";

/// One named resource: `R.string.app_name`, `android.R.string.ok`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceReference {
    pub kind: ResourceKind,
    pub name: String,
    /// Declared by the framework (`android.R`) rather than the app.
    pub is_platform_namespace: bool,
}

impl ResourceReference {
    pub fn new(kind: ResourceKind, name: impl Into<String>, is_platform_namespace: bool) -> Self {
        ResourceReference {
            kind,
            name: name.into(),
            is_platform_namespace,
        }
    }

    /// Decode a qualified access ending in `R.<kind>.<name>`.
    ///
    /// Whatever precedes `R` is the package; `android` marks the platform
    /// namespace. Returns `None` for any other path.
    pub fn from_path<S: AsRef<str>>(segments: &[S]) -> Option<ResourceReference> {
        let [package @ .., r, kind, name] = segments else {
            return None;
        };
        if r.as_ref() != "R" {
            return None;
        }
        let kind = ResourceKind::from_name(kind.as_ref())?;
        let is_platform = matches!(package, [only] if only.as_ref() == PLATFORM_PACKAGE);
        Some(ResourceReference::new(kind, name.as_ref(), is_platform))
    }

    /// Decode a field `name` declared by the class `owner`
    /// (`com.example.R.string`).
    pub fn from_field(owner: &str, name: &str) -> Option<ResourceReference> {
        let segments: Vec<&str> = owner.split('.').chain(std::iter::once(name)).collect();
        ResourceReference::from_path(&segments)
    }
}

/// Renders as a resource URL: `@string/app_name`, `@android:string/ok`.
impl fmt::Display for ResourceReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let namespace = if self.is_platform_namespace {
            "android:"
        } else {
            ""
        };
        write!(f, "@{namespace}{}/{}", self.kind, self.name)
    }
}

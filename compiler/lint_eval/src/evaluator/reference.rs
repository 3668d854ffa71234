//! Folding references to locals, parameters, and fields.

use lint_ir::{DeclKind, SyntaxTree};
use tracing::{debug, trace};

use super::Folder;
use crate::cast::cast_value;
use crate::last_assignment::{reaching_definition, Origin};
use crate::narrowing::is_narrowed;
use crate::Value;

impl<T: SyntaxTree + ?Sized> Folder<'_, T> {
    pub(super) fn fold_reference(&mut self, use_site: T::Node, decl: T::Decl) -> Value {
        match self.tree.declaration(decl).kind {
            DeclKind::Local | DeclKind::Parameter => self.fold_local(use_site, decl),
            DeclKind::Field => self.fold_field(use_site, decl),
            DeclKind::Method => Value::Unknown,
        }
    }

    /// A final local with an initializer is its initializer, converted to
    /// the declared type. Anything else takes the definition reaching
    /// `use_site`. Only an initializer is subject to the narrowing guard;
    /// a later reassignment is not.
    fn fold_local(&mut self, use_site: T::Node, decl: T::Decl) -> Value {
        let tree = self.tree;
        let declaration = tree.declaration(decl);
        if let (true, Some(init)) = (declaration.is_final(), declaration.initializer) {
            if self.vetoed(use_site, decl) {
                return Value::Unknown;
            }
            return cast_value(declaration.ty, self.fold(init));
        }

        if let Some(value) = self.local_values.get(&(decl, use_site)) {
            return value.clone();
        }
        let value = match reaching_definition(tree, Some(&mut *self), decl, use_site) {
            Some(definition)
                if definition.origin == Origin::Initializer && self.vetoed(use_site, decl) =>
            {
                Value::Unknown
            }
            Some(definition) => definition.value,
            None => {
                trace!(name = &*declaration.name, "no definition reaches the use site");
                Value::Unknown
            }
        };
        self.local_values.insert((decl, use_site), value.clone());
        value
    }

    /// A field's pre-computed constant, else its initializer when the field
    /// is final or field initializers are trusted.
    fn fold_field(&mut self, use_site: T::Node, decl: T::Decl) -> Value {
        let tree = self.tree;
        let declaration = tree.declaration(decl);
        if let Some(constant) = &declaration.constant {
            if self.vetoed(use_site, decl) {
                return Value::Unknown;
            }
            return Value::from(constant);
        }
        let Some(init) = declaration.initializer else {
            return Value::Unknown;
        };
        if !declaration.is_final() && !self.config.allow_field_initializers {
            trace!(name = &*declaration.name, "mutable field");
            return Value::Unknown;
        }
        if self.vetoed(use_site, decl) {
            return Value::Unknown;
        }

        if let Some(value) = self.field_values.get(&decl) {
            return value.clone();
        }
        if !self.in_progress.insert(decl) {
            debug!(name = &*declaration.name, "field initializer refers to itself");
            return Value::Unknown;
        }
        let value = cast_value(declaration.ty, self.fold(init));
        self.in_progress.remove(&decl);
        self.field_values.insert(decl, value.clone());
        value
    }

    fn vetoed(&self, use_site: T::Node, decl: T::Decl) -> bool {
        is_narrowed(self.tree, use_site, decl)
    }
}

//! Resolved declarations: the binding targets a reference can point at.
//!
//! Declarations are owned by the host program model. The evaluator only
//! reads modifiers, the initializer, and a constant the host may already
//! have computed (compile-time constant fields).

use bitflags::bitflags;

use crate::{Literal, TypeRef};

bitflags! {
    /// Declaration modifiers the evaluator cares about.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct Modifiers: u8 {
        /// `final` in Java, `val` in Kotlin.
        const FINAL = 1 << 0;
        const STATIC = 1 << 1;
    }
}

/// What kind of binding a declaration introduces.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeclKind {
    Local,
    Parameter,
    Field,
    Method,
}

/// A resolved declaration.
///
/// Generic over the node handle `N` of the tree backend that owns the
/// initializer expression.
#[derive(Clone, Debug, PartialEq)]
pub struct Declaration<N> {
    pub name: Box<str>,
    pub kind: DeclKind,
    pub modifiers: Modifiers,
    /// Declared type (return type for methods).
    pub ty: TypeRef,
    pub initializer: Option<N>,
    /// Compile-time constant already computed by the host, if any.
    pub constant: Option<Literal>,
    /// Qualified name of the class declaring this member
    /// (`com.example.R.string`). `None` for locals and parameters.
    pub owner: Option<Box<str>>,
    /// Qualified names of the annotations written on the declaration.
    pub annotations: Vec<Box<str>>,
}

impl<N> Declaration<N> {
    pub fn new(name: impl Into<Box<str>>, kind: DeclKind, ty: TypeRef) -> Self {
        Declaration {
            name: name.into(),
            kind,
            modifiers: Modifiers::empty(),
            ty,
            initializer: None,
            constant: None,
            owner: None,
            annotations: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub fn with_owner(mut self, owner: impl Into<Box<str>>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    #[must_use]
    pub fn with_constant(mut self, constant: Literal) -> Self {
        self.constant = Some(constant);
        self
    }

    #[must_use]
    pub fn with_annotation(mut self, qualified_name: impl Into<Box<str>>) -> Self {
        self.annotations.push(qualified_name.into());
        self
    }

    #[inline]
    pub fn is_final(&self) -> bool {
        self.modifiers.contains(Modifiers::FINAL)
    }

    #[inline]
    pub fn is_static(&self) -> bool {
        self.modifiers.contains(Modifiers::STATIC)
    }

    /// Locals and parameters; their value is found by walking the
    /// enclosing function rather than trusting a declaration-site initializer.
    #[inline]
    pub fn is_local(&self) -> bool {
        matches!(self.kind, DeclKind::Local | DeclKind::Parameter)
    }
}

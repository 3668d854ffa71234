//! Lint IR - the expression adapter for the lint constant evaluator.
//!
//! This crate contains the backend-neutral view of an analyzed program that
//! the evaluator and the dataflow walk are written against:
//! - [`SyntaxTree`]: the adapter trait a tree backend implements
//! - [`Shape`]: the structural view of one node
//! - [`Declaration`]: resolved binding targets (locals, parameters, fields, methods)
//! - Literals, operators, and primitive types
//!
//! It also ships the flat arena backend ([`SyntaxArena`], built with
//! [`ArenaBuilder`]) used by front-ends and tests.
//!
//! # Design Philosophy
//!
//! - **Flatten Everything**: no `Box<Node>`, use `ExprId(u32)` indices
//! - **One seam**: everything above this crate sees only [`SyntaxTree`]

mod arena;
mod builder;
mod decl;
mod ids;
mod literal;
mod operators;
mod shape;
pub mod tree;
mod types;

pub use arena::{ExprKind, SyntaxArena};
pub use builder::ArenaBuilder;
pub use decl::{DeclKind, Declaration, Modifiers};
pub use ids::{DeclId, DeclRange, ExprId, ExprRange};
pub use literal::Literal;
pub use operators::{BinaryOp, UnaryOp};
pub use shape::{FunctionKind, JumpKind, LoopKind, Shape};
pub use tree::SyntaxTree;
pub use types::{PrimitiveType, TypeRef};

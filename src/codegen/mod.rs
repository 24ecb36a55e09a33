//! Test support code generation.
//!
//! Builds structured, language-neutral descriptors of the helper routines a
//! generated test file needs. Descriptors are plain data trees; an external
//! emission backend renders them to source text.

pub mod model;
pub mod support;

#[cfg(test)]
mod tests;

pub use model::{GeneratedMethod, MethodSignature, Parameter, Stmt, TypeRef, Visibility};
pub use support::TestSupportGenerator;

//! Data model shared by the translation and code-generation layers.
//!
//! `Path` and its steps are produced by the external discovery process and
//! are read-only here; `QueryOutcome` is the shape of what the generated
//! `runSql` routine hands back at test-execution time.

pub mod path;
pub mod result;
pub mod value;

pub use path::{CompareOp, Path, PathStep, Predicate, StatementKind};
pub use result::{QueryOutcome, QueryResultRow};
pub use value::SqlValue;

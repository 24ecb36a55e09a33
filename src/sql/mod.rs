//! Query translation layer.
//!
//! Converts the steps of a discovered [`Path`] into ordered,
//! vendor-correct SQL strings, one builder per statement kind. Step order
//! is never altered: downstream assertions rely on execution-order
//! correspondence between path steps and emitted statements.

pub mod deletion;
pub mod insertion;
pub mod selection;
pub mod update;

#[cfg(test)]
mod tests;

pub use deletion::DeletionBuilder;
pub use insertion::InsertionBuilder;
pub use selection::SelectionBuilder;
pub use update::UpdateBuilder;

use crate::data::{Path, Predicate, StatementKind};
use crate::error::GenerateResult;
use crate::vendor::VendorOptions;

/// A translator for one SQL statement kind.
///
/// Builders hold a shared [`VendorOptions`] reference, are constructed per
/// generation run, and are discarded after use.
pub trait QueryBuilder {
    /// The statement kind this builder translates.
    fn kind(&self) -> StatementKind;

    /// One SQL string per path step of this builder's kind, in original
    /// step order. Empty when the path has no such steps.
    fn build_queries(&self, path: &Path) -> GenerateResult<Vec<String>>;
}

/// Render ` WHERE p1 AND p2 ...`, or nothing when there are no predicates.
fn where_clause(vendor: &VendorOptions, predicates: &[Predicate]) -> GenerateResult<String> {
    if predicates.is_empty() {
        return Ok(String::new());
    }
    let mut parts = Vec::with_capacity(predicates.len());
    for predicate in predicates {
        parts.push(format!(
            "{} {} {}",
            vendor.quote_identifier(&predicate.column),
            predicate.op.as_sql(),
            vendor.literal(&predicate.value)?
        ));
    }
    Ok(format!(" WHERE {}", parts.join(" AND ")))
}

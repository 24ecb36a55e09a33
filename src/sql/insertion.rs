//! INSERT translation.

use tracing::debug;

use crate::data::{Path, PathStep, StatementKind};
use crate::error::{GenerateError, GenerateResult};
use crate::sql::QueryBuilder;
use crate::vendor::VendorOptions;

/// Synthesizes `INSERT INTO t (cols) VALUES (lits)` from structured step
/// data. Column and value arity must match and be non-empty.
#[derive(Debug)]
pub struct InsertionBuilder<'a> {
    vendor: &'a VendorOptions,
}

impl<'a> InsertionBuilder<'a> {
    pub fn new(vendor: &'a VendorOptions) -> Self {
        Self { vendor }
    }

    fn build_insert(&self, step: &PathStep) -> GenerateResult<String> {
        if step.columns.is_empty() {
            return Err(GenerateError::malformed(format!(
                "insertion into '{}' has no columns",
                step.table
            )));
        }
        if step.columns.len() != step.values.len() {
            return Err(GenerateError::malformed(format!(
                "insertion into '{}' has {} columns but {} values",
                step.table,
                step.columns.len(),
                step.values.len()
            )));
        }

        let mut sql = String::from("INSERT INTO ");
        sql.push_str(&self.vendor.quote_identifier(&step.table));

        let cols: Vec<String> = step
            .columns
            .iter()
            .map(|c| self.vendor.quote_identifier(c))
            .collect();
        sql.push_str(" (");
        sql.push_str(&cols.join(", "));
        sql.push(')');

        let values = step
            .values
            .iter()
            .map(|v| self.vendor.literal(v))
            .collect::<GenerateResult<Vec<String>>>()?;
        sql.push_str(" VALUES (");
        sql.push_str(&values.join(", "));
        sql.push(')');

        Ok(sql)
    }
}

impl QueryBuilder for InsertionBuilder<'_> {
    fn kind(&self) -> StatementKind {
        StatementKind::Insertion
    }

    fn build_queries(&self, path: &Path) -> GenerateResult<Vec<String>> {
        debug!(vendor = self.vendor.vendor_name(), steps = path.len(), "building insertion queries");
        path.steps_of(StatementKind::Insertion)
            .map(|step| self.build_insert(step))
            .collect()
    }
}

//! DELETE translation.

use tracing::debug;

use crate::data::{Path, PathStep, StatementKind};
use crate::error::GenerateResult;
use crate::sql::{QueryBuilder, where_clause};
use crate::vendor::VendorOptions;

/// Synthesizes `DELETE FROM t [WHERE preds]` from structured step data.
#[derive(Debug)]
pub struct DeletionBuilder<'a> {
    vendor: &'a VendorOptions,
}

impl<'a> DeletionBuilder<'a> {
    pub fn new(vendor: &'a VendorOptions) -> Self {
        Self { vendor }
    }

    fn build_delete(&self, step: &PathStep) -> GenerateResult<String> {
        let mut sql = String::from("DELETE FROM ");
        sql.push_str(&self.vendor.quote_identifier(&step.table));
        sql.push_str(&where_clause(self.vendor, &step.predicates)?);
        Ok(sql)
    }
}

impl QueryBuilder for DeletionBuilder<'_> {
    fn kind(&self) -> StatementKind {
        StatementKind::Deletion
    }

    fn build_queries(&self, path: &Path) -> GenerateResult<Vec<String>> {
        debug!(vendor = self.vendor.vendor_name(), steps = path.len(), "building deletion queries");
        path.steps_of(StatementKind::Deletion)
            .map(|step| self.build_delete(step))
            .collect()
    }
}

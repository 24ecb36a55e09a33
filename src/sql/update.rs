//! UPDATE translation.

use tracing::debug;

use crate::data::{Path, PathStep, StatementKind};
use crate::error::{GenerateError, GenerateResult};
use crate::sql::{QueryBuilder, where_clause};
use crate::vendor::VendorOptions;

/// Synthesizes `UPDATE t SET c = v, ... [WHERE preds]` from structured
/// step data, pairing columns with values positionally.
#[derive(Debug)]
pub struct UpdateBuilder<'a> {
    vendor: &'a VendorOptions,
}

impl<'a> UpdateBuilder<'a> {
    pub fn new(vendor: &'a VendorOptions) -> Self {
        Self { vendor }
    }

    fn build_update(&self, step: &PathStep) -> GenerateResult<String> {
        if step.columns.is_empty() {
            return Err(GenerateError::malformed(format!(
                "update of '{}' has no SET columns",
                step.table
            )));
        }
        if step.columns.len() != step.values.len() {
            return Err(GenerateError::malformed(format!(
                "update of '{}' has {} columns but {} values",
                step.table,
                step.columns.len(),
                step.values.len()
            )));
        }

        let mut sql = String::from("UPDATE ");
        sql.push_str(&self.vendor.quote_identifier(&step.table));
        sql.push_str(" SET ");

        let mut assignments = Vec::with_capacity(step.columns.len());
        for (column, value) in step.columns.iter().zip(&step.values) {
            assignments.push(format!(
                "{} = {}",
                self.vendor.quote_identifier(column),
                self.vendor.literal(value)?
            ));
        }
        sql.push_str(&assignments.join(", "));
        sql.push_str(&where_clause(self.vendor, &step.predicates)?);

        Ok(sql)
    }
}

impl QueryBuilder for UpdateBuilder<'_> {
    fn kind(&self) -> StatementKind {
        StatementKind::Update
    }

    fn build_queries(&self, path: &Path) -> GenerateResult<Vec<String>> {
        debug!(vendor = self.vendor.vendor_name(), steps = path.len(), "building update queries");
        path.steps_of(StatementKind::Update)
            .map(|step| self.build_update(step))
            .collect()
    }
}

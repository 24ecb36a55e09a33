//! SELECT translation: pass-through of path-rendered SQL.

use tracing::debug;

use crate::data::{Path, StatementKind};
use crate::error::{GenerateError, GenerateResult};
use crate::sql::QueryBuilder;
use crate::vendor::VendorOptions;

/// Projects each selection step's pre-rendered SQL in step order.
///
/// The discovery process renders selection SQL itself, so this builder is
/// an identity projection; a selection step arriving without rendered SQL
/// is a malformed path.
#[derive(Debug)]
pub struct SelectionBuilder<'a> {
    vendor: &'a VendorOptions,
}

impl<'a> SelectionBuilder<'a> {
    pub fn new(vendor: &'a VendorOptions) -> Self {
        Self { vendor }
    }
}

impl QueryBuilder for SelectionBuilder<'_> {
    fn kind(&self) -> StatementKind {
        StatementKind::Selection
    }

    fn build_queries(&self, path: &Path) -> GenerateResult<Vec<String>> {
        debug!(vendor = self.vendor.vendor_name(), steps = path.len(), "building selection queries");
        path.steps_of(StatementKind::Selection)
            .enumerate()
            .map(|(index, step)| {
                step.rendered_sql.clone().ok_or_else(|| {
                    GenerateError::malformed(format!(
                        "selection step {} on table '{}' has no rendered SQL",
                        index, step.table
                    ))
                })
            })
            .collect()
    }
}

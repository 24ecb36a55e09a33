use serde::{Deserialize, Serialize};

/// One captured result row: an ordered column-name to stringified-value map.
///
/// Column order is insertion order and matches the result metadata order the
/// generated `runSql` reads columns in. Inserting an existing column
/// overwrites its value in place, keeping the original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResultRow {
    entries: Vec<(String, String)>,
}

impl QueryResultRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row from an ordered (column, value) pair list.
    /// Later pairs for the same column overwrite earlier ones.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut row = Self::new();
        for (column, value) in pairs {
            row.insert(column, value);
        }
        row
    }

    /// Insert a column value; last write wins, position of the first
    /// insertion is kept.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        let column = column.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(name, _)| *name == column) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((column, value)),
        }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Column names in order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// What one executed statement hands back.
///
/// Data-modification statements produce [`QueryOutcome::NoResult`]; queries
/// always produce [`QueryOutcome::Table`], possibly with zero rows. The two
/// are distinct end-to-end so assertion code can never mistake "update ran"
/// for "query returned nothing".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryOutcome {
    /// No table: the statement was a data modification.
    NoResult,
    /// A captured table, possibly empty.
    Table(Vec<QueryResultRow>),
}

impl QueryOutcome {
    pub fn is_no_result(&self) -> bool {
        matches!(self, QueryOutcome::NoResult)
    }

    /// The captured rows, if a table was produced.
    pub fn rows(&self) -> Option<&[QueryResultRow]> {
        match self {
            QueryOutcome::NoResult => None,
            QueryOutcome::Table(rows) => Some(rows),
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::data::value::SqlValue;

/// The SQL statement category a path step belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatementKind {
    /// SELECT query
    Selection,
    /// INSERT statement
    Insertion,
    /// UPDATE statement
    Update,
    /// DELETE statement
    Deletion,
}

impl StatementKind {
    /// Whether statements of this kind modify data instead of returning rows.
    pub fn is_update(&self) -> bool {
        !matches!(self, StatementKind::Selection)
    }
}

/// Comparison operator used in a step predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Like,
}

impl CompareOp {
    /// SQL spelling of the operator.
    pub fn as_sql(&self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Ne => "<>",
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
            CompareOp::Like => "LIKE",
        }
    }
}

/// A single `column op value` filter on a step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Predicate {
    pub column: String,
    pub op: CompareOp,
    pub value: SqlValue,
}

impl Predicate {
    pub fn new(column: impl Into<String>, op: CompareOp, value: impl Into<SqlValue>) -> Self {
        Self {
            column: column.into(),
            op,
            value: value.into(),
        }
    }
}

/// One abstract database operation along a discovered execution path.
///
/// Selection steps arrive with their SQL already rendered by the discovery
/// process; data-modification steps carry structured table/column/value data
/// for the translation layer to synthesize from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathStep {
    pub kind: StatementKind,
    /// Vendor-rendered SQL carried by the discovery process, when present.
    #[serde(default)]
    pub rendered_sql: Option<String>,
    pub table: String,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub values: Vec<SqlValue>,
    #[serde(default)]
    pub predicates: Vec<Predicate>,
}

impl PathStep {
    /// A selection step carrying pre-rendered SQL.
    pub fn selection(table: impl Into<String>, sql: impl Into<String>) -> Self {
        Self {
            kind: StatementKind::Selection,
            rendered_sql: Some(sql.into()),
            table: table.into(),
            columns: Vec::new(),
            values: Vec::new(),
            predicates: Vec::new(),
        }
    }

    /// A structured data-modification step with no pre-rendered SQL.
    pub fn structured(kind: StatementKind, table: impl Into<String>) -> Self {
        Self {
            kind,
            rendered_sql: None,
            table: table.into(),
            columns: Vec::new(),
            values: Vec::new(),
            predicates: Vec::new(),
        }
    }

    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_values<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<SqlValue>,
    {
        self.values = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_predicate(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }
}

/// An ordered sequence of steps representing one discovered execution path.
///
/// Owned by the external discovery process and read-only here. Step order is
/// execution order; every accessor preserves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    steps: Vec<PathStep>,
}

impl Path {
    pub fn new(steps: Vec<PathStep>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Steps of one statement kind, in original step order.
    pub fn steps_of(&self, kind: StatementKind) -> impl Iterator<Item = &PathStep> {
        self.steps.iter().filter(move |step| step.kind == kind)
    }

    /// The path's pre-rendered SQL for one statement kind, in step order.
    /// Steps of that kind without rendered SQL are skipped.
    pub fn rendered_sql(&self, kind: StatementKind) -> Vec<&str> {
        self.steps_of(kind)
            .filter_map(|step| step.rendered_sql.as_deref())
            .collect()
    }
}

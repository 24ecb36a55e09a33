//! Builders for the database-access helpers of a generated test file.
//!
//! Every generated test file carries a `runSql` routine (implementation or
//! stub form), a `makeMap` row builder, and a `getResultColumns` metadata
//! walker. This module builds their descriptors; it never renders text and
//! never touches a database.

use tracing::debug;

use crate::codegen::model::{GeneratedMethod, Stmt, TypeRef};

/// Name of the SQL runner method.
pub const RUN_SQL_NAME: &str = "runSql";

/// Name of the map maker method.
pub const MAP_MAKER_NAME: &str = "makeMap";

/// Name of the result column getter method.
pub const GET_RESULT_COLUMNS_NAME: &str = "getResultColumns";

/// Name of the connection URL constant supplied by external configuration.
pub const DB_JDBC_URL_NAME: &str = "DB_JDBC_URL";

/// Name of the database user constant supplied by external configuration.
pub const DB_USER_NAME: &str = "DB_USER";

/// Name of the database password constant supplied by external configuration.
pub const DB_PASSWORD_NAME: &str = "DB_PASSWORD";

/// Declared failure type of SQL execution in generated code.
pub const SQL_ERROR_TYPE: &str = "SqlExecutionError";

/// Builds helper method descriptors for generated test files.
///
/// Generation is deterministic: equal inputs produce structurally equal
/// descriptors, so regenerating a file never churns its helpers.
#[derive(Debug, Default)]
pub struct TestSupportGenerator;

impl TestSupportGenerator {
    pub fn new() -> Self {
        Self
    }

    /// The shared `runSql` signature. Implementation and stub forms both
    /// start here, so callers compile unmodified against either.
    fn run_sql_skeleton(&self) -> GeneratedMethod {
        GeneratedMethod::new(RUN_SQL_NAME, TypeRef::QueryOutcome)
            .param("query", TypeRef::Text)
            .param("isUpdate", TypeRef::Boolean)
            .fails_with(SQL_ERROR_TYPE)
    }

    /// Builds the working `runSql` form.
    ///
    /// The body acquires connection, statement, and result cursor as scoped
    /// resources, so each is released on every exit path. Updates return
    /// the no-result outcome; queries capture rows in cursor order with
    /// columns in metadata order, returning a table that may be empty but
    /// is never the no-result outcome.
    pub fn build_run_sql_implementation(&self) -> GeneratedMethod {
        debug!(method = RUN_SQL_NAME, form = "implementation", "building helper descriptor");

        let read_row = vec![
            Stmt::line("row = emptyRow()"),
            Stmt::ForEach {
                binding: "column".to_string(),
                iterable: "columns".to_string(),
                body: vec![Stmt::line("row.put(column, text(result.valueOf(column)))")],
            },
            Stmt::line("table.add(row)"),
        ];

        let query_branch = vec![Stmt::WithResource {
            binding: "result".to_string(),
            acquire: "statement.executeQuery(query)".to_string(),
            body: vec![
                Stmt::line(format!("columns = {}(result)", GET_RESULT_COLUMNS_NAME)),
                Stmt::line("table = emptyRowList()"),
                Stmt::While {
                    condition: "result.next()".to_string(),
                    body: read_row,
                },
                Stmt::ret("QueryOutcome.table(table)"),
            ],
        }];

        let update_branch = vec![
            Stmt::line("statement.executeUpdate(query)"),
            Stmt::ret("QueryOutcome.noResult()"),
        ];

        self.run_sql_skeleton()
            .doc(
                "Executes an SQL statement on the database.\n\
                 \n\
                 @param query    The statement to execute.\n\
                 @param isUpdate Whether the statement is a data modification.\n\
                 \n\
                 @returns The captured table, or the no-result outcome for an update.",
            )
            .stmt(Stmt::WithResource {
                binding: "connection".to_string(),
                acquire: format!(
                    "openConnection({}, {}, {})",
                    DB_JDBC_URL_NAME, DB_USER_NAME, DB_PASSWORD_NAME
                ),
                body: vec![Stmt::WithResource {
                    binding: "statement".to_string(),
                    acquire: "connection.createStatement()".to_string(),
                    body: vec![Stmt::If {
                        condition: "isUpdate".to_string(),
                        then_block: update_branch,
                        else_block: query_branch,
                    }],
                }],
            })
    }

    /// Builds the stub `runSql` form: identical signature, body
    /// unconditionally returns the no-result outcome.
    pub fn build_run_sql_empty(&self) -> GeneratedMethod {
        debug!(method = RUN_SQL_NAME, form = "stub", "building helper descriptor");

        self.run_sql_skeleton()
            .doc(
                "This method should connect to your database and execute the given statement.\n\
                 For the generated assertions to work it must return a table outcome when a\n\
                 query succeeds, and the no-result outcome for a data modification.\n\
                 \n\
                 @param query    The statement to execute.\n\
                 @param isUpdate Whether the statement is a data modification.\n\
                 \n\
                 @returns The captured table, or the no-result outcome for an update.",
            )
            .stmt(Stmt::comment("TODO: implement method stub."))
            .stmt(Stmt::ret("QueryOutcome.noResult()"))
    }

    /// Builds `makeMap`: an ordered (key, value) pair list folded into an
    /// ordered text map. Later keys overwrite earlier ones.
    pub fn build_map_maker(&self) -> GeneratedMethod {
        debug!(method = MAP_MAKER_NAME, "building helper descriptor");

        GeneratedMethod::new(MAP_MAKER_NAME, TypeRef::TextMap)
            .param("pairs", TypeRef::PairList)
            .doc("Builds an ordered string map from a list of key/value pairs.")
            .stmt(Stmt::line("map = emptyTextMap()"))
            .stmt(Stmt::ForEach {
                binding: "pair".to_string(),
                iterable: "pairs".to_string(),
                body: vec![
                    Stmt::comment("Later keys overwrite earlier ones."),
                    Stmt::line("map.put(pair.key, pair.value)"),
                ],
            })
            .stmt(Stmt::ret("map"))
    }

    /// Builds `getResultColumns`: walks result metadata from the first
    /// column through the last, inclusive, preserving metadata order.
    pub fn build_get_result_columns(&self) -> GeneratedMethod {
        debug!(method = GET_RESULT_COLUMNS_NAME, "building helper descriptor");

        GeneratedMethod::new(GET_RESULT_COLUMNS_NAME, TypeRef::TextList)
            .param("result", TypeRef::ResultHandle)
            .fails_with(SQL_ERROR_TYPE)
            .doc("Gets the column names of a statement result, in metadata order.")
            .stmt(Stmt::line("meta = result.metadata()"))
            .stmt(Stmt::line("columns = emptyTextList()"))
            .stmt(Stmt::comment("Column metadata is 1-indexed."))
            .stmt(Stmt::ForRange {
                binding: "i".to_string(),
                from: "1".to_string(),
                to: "meta.columnCount()".to_string(),
                body: vec![Stmt::line("columns.add(meta.columnName(i))")],
            })
            .stmt(Stmt::ret("columns"))
    }
}

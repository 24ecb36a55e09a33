//! Test support generator tests.

use crate::codegen::model::{Stmt, TypeRef, Visibility};
use crate::codegen::support::{
    GET_RESULT_COLUMNS_NAME, RUN_SQL_NAME, SQL_ERROR_TYPE, TestSupportGenerator,
};

/// Depth-first walk over a statement tree.
fn walk<'a>(stmts: &'a [Stmt], out: &mut Vec<&'a Stmt>) {
    for stmt in stmts {
        out.push(stmt);
        match stmt {
            Stmt::If {
                then_block,
                else_block,
                ..
            } => {
                walk(then_block, out);
                walk(else_block, out);
            }
            Stmt::While { body, .. }
            | Stmt::ForEach { body, .. }
            | Stmt::ForRange { body, .. }
            | Stmt::WithResource { body, .. } => walk(body, out),
            Stmt::Line(_) | Stmt::Comment(_) | Stmt::Return(_) => {}
        }
    }
}

fn flattened(stmts: &[Stmt]) -> Vec<&Stmt> {
    let mut out = Vec::new();
    walk(stmts, &mut out);
    out
}

#[test]
fn test_run_sql_forms_are_signature_substitutable() {
    let generator = TestSupportGenerator::new();
    let implementation = generator.build_run_sql_implementation();
    let stub = generator.build_run_sql_empty();

    assert_eq!(implementation.signature(), stub.signature());
    assert_eq!(implementation.name, RUN_SQL_NAME);
    assert_eq!(implementation.visibility, Visibility::Private);
    assert!(implementation.is_static);
    assert_eq!(implementation.return_type, TypeRef::QueryOutcome);
    assert_eq!(implementation.throws, vec![SQL_ERROR_TYPE.to_string()]);
    assert_eq!(implementation.parameters.len(), 2);
    assert_eq!(implementation.parameters[0].name, "query");
    assert_eq!(implementation.parameters[0].ty, TypeRef::Text);
    assert_eq!(implementation.parameters[1].name, "isUpdate");
    assert_eq!(implementation.parameters[1].ty, TypeRef::Boolean);
}

#[test]
fn test_run_sql_update_branch_returns_no_result() {
    let method = TestSupportGenerator::new().build_run_sql_implementation();
    let stmts = flattened(&method.body);

    let branch = stmts
        .iter()
        .find_map(|stmt| match stmt {
            Stmt::If {
                condition,
                then_block,
                ..
            } if condition == "isUpdate" => Some(then_block),
            _ => None,
        })
        .expect("isUpdate branch");

    assert_eq!(
        branch.last(),
        Some(&Stmt::Return("QueryOutcome.noResult()".to_string()))
    );
    // The update branch never consults the column getter.
    let branch_text = format!("{:?}", branch);
    assert!(!branch_text.contains(GET_RESULT_COLUMNS_NAME));
}

#[test]
fn test_run_sql_query_branch_builds_table_in_order() {
    let method = TestSupportGenerator::new().build_run_sql_implementation();
    let stmts = flattened(&method.body);

    let else_block = stmts
        .iter()
        .find_map(|stmt| match stmt {
            Stmt::If { else_block, .. } => Some(else_block),
            _ => None,
        })
        .expect("query branch");
    let query_stmts = flattened(else_block);

    // Columns come from getResultColumns before any row is read.
    let columns_at = query_stmts
        .iter()
        .position(|s| matches!(s, Stmt::Line(l) if l.contains(GET_RESULT_COLUMNS_NAME)))
        .expect("column extraction");
    let cursor_at = query_stmts
        .iter()
        .position(|s| matches!(s, Stmt::While { condition, .. } if condition == "result.next()"))
        .expect("cursor loop");
    assert!(columns_at < cursor_at);

    // Row values are read per column, in column order.
    assert!(query_stmts.iter().any(|s| matches!(
        s,
        Stmt::ForEach { binding, iterable, .. } if binding == "column" && iterable == "columns"
    )));

    // The query branch returns a table, never the no-result outcome.
    assert_eq!(
        query_stmts.last(),
        Some(&&Stmt::Return("QueryOutcome.table(table)".to_string()))
    );
}

#[test]
fn test_run_sql_resources_are_scoped() {
    let method = TestSupportGenerator::new().build_run_sql_implementation();
    let stmts = flattened(&method.body);

    let bindings: Vec<&str> = stmts
        .iter()
        .filter_map(|stmt| match stmt {
            Stmt::WithResource { binding, .. } => Some(binding.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(bindings, vec!["connection", "statement", "result"]);
}

#[test]
fn test_run_sql_stub_returns_no_result_unconditionally() {
    let stub = TestSupportGenerator::new().build_run_sql_empty();

    assert_eq!(
        stub.body,
        vec![
            Stmt::Comment("TODO: implement method stub.".to_string()),
            Stmt::Return("QueryOutcome.noResult()".to_string()),
        ]
    );
    assert!(!stub.doc.is_empty());
}

#[test]
fn test_map_maker_overwrites_later_keys() {
    let method = TestSupportGenerator::new().build_map_maker();

    assert_eq!(method.parameters.len(), 1);
    assert_eq!(method.parameters[0].ty, TypeRef::PairList);
    assert_eq!(method.return_type, TypeRef::TextMap);
    assert!(method.throws.is_empty());

    let stmts = flattened(&method.body);
    assert!(stmts.iter().any(|s| matches!(
        s,
        Stmt::ForEach { binding, iterable, .. } if binding == "pair" && iterable == "pairs"
    )));
    assert!(
        stmts
            .iter()
            .any(|s| matches!(s, Stmt::Line(l) if l == "map.put(pair.key, pair.value)"))
    );
}

#[test]
fn test_get_result_columns_walks_metadata_inclusively() {
    let method = TestSupportGenerator::new().build_get_result_columns();

    assert_eq!(method.return_type, TypeRef::TextList);
    assert_eq!(method.parameters[0].ty, TypeRef::ResultHandle);
    assert_eq!(method.throws, vec![SQL_ERROR_TYPE.to_string()]);

    let range = method
        .body
        .iter()
        .find_map(|stmt| match stmt {
            Stmt::ForRange {
                binding, from, to, ..
            } => Some((binding, from, to)),
            _ => None,
        })
        .expect("metadata walk");
    assert_eq!(range, (&"i".to_string(), &"1".to_string(), &"meta.columnCount()".to_string()));
    assert_eq!(method.body.last(), Some(&Stmt::Return("columns".to_string())));
}

#[test]
fn test_generation_is_idempotent() {
    let generator = TestSupportGenerator::new();
    assert_eq!(
        generator.build_run_sql_implementation(),
        generator.build_run_sql_implementation()
    );
    assert_eq!(generator.build_run_sql_empty(), generator.build_run_sql_empty());
    assert_eq!(generator.build_map_maker(), generator.build_map_maker());
    assert_eq!(
        generator.build_get_result_columns(),
        generator.build_get_result_columns()
    );
}

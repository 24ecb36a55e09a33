//! Test-support generation for database-interacting code paths.
//!
//! Given an abstractly discovered execution path, this crate translates it
//! into ordered, vendor-correct SQL statement strings and builds structured
//! descriptors for the helper routines (`runSql`, `makeMap`,
//! `getResultColumns`) every generated test file needs. Descriptors are
//! plain data; rendering them to source text is the emission backend's job,
//! and no SQL is ever executed here.
//!
//! ```ignore
//! use sqltestgen::prelude::*;
//!
//! let vendor = VendorOptions::postgres();
//! let builder = SelectionBuilder::new(&vendor);
//! let queries = builder.build_queries(&path)?;
//! ```

pub mod codegen;
pub mod data;
pub mod error;
pub mod sql;
pub mod vendor;

pub mod prelude {
    pub use crate::codegen::model::*;
    pub use crate::codegen::support::TestSupportGenerator;
    pub use crate::data::*;
    pub use crate::error::*;
    pub use crate::sql::{
        DeletionBuilder, InsertionBuilder, QueryBuilder, SelectionBuilder, UpdateBuilder,
    };
    pub use crate::vendor::VendorOptions;
}

//! Warehouse schema: typed table definitions and the fixed catalog.
//!
//! The catalog is plain data. Statement text is produced from it by
//! [`crate::ddl`], so the column lists used by DDL and by the transformation
//! inserts never drift apart.

pub mod catalog;
pub mod table;
pub mod types;

pub use catalog::*;
pub use table::{Column, ForeignKey, Table, TableKind};
pub use types::ColumnType;

//! Column types used by the warehouse tables.

use std::fmt;

/// Column type enum; the only place types become SQL text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// TEXT (Redshift stores it as VARCHAR(256))
    Text,
    /// CHAR (single character)
    Char,
    /// INTEGER (32-bit)
    Integer,
    /// FLOAT (double precision)
    Float,
    /// TIMESTAMP without timezone
    Timestamp,
}

impl ColumnType {
    /// Convert to a type name both Redshift and Postgres accept.
    pub const fn to_sql_type(&self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::Char => "CHAR",
            Self::Integer => "INTEGER",
            Self::Float => "FLOAT",
            Self::Timestamp => "TIMESTAMP",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_sql_type())
    }
}

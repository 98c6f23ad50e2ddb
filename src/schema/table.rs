//! Table and column definitions.

use super::types::ColumnType;
use std::fmt;

/// Role a table plays in the star schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// Raw records written by COPY, read once by the transformation.
    Staging,
    /// Lookup table keyed by a natural identifier.
    Dimension,
    /// Event table referencing the dimensions.
    Fact,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableKind::Staging => write!(f, "staging"),
            TableKind::Dimension => write!(f, "dimension"),
            TableKind::Fact => write!(f, "fact"),
        }
    }
}

/// A table definition.
#[derive(Debug, Clone)]
pub struct Table {
    pub name: &'static str,
    pub kind: TableKind,
    pub columns: Vec<Column>,
    pub primary_key: Option<&'static str>,
    pub foreign_keys: Vec<ForeignKey>,
}

/// A column definition.
#[derive(Debug, Clone)]
pub struct Column {
    pub name: &'static str,
    pub data_type: ColumnType,
    pub nullable: bool,
    /// `(seed, step)` of an auto-numbered column.
    pub identity: Option<(i64, i64)>,
}

/// `FOREIGN KEY(column) REFERENCES table(references)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKey {
    pub column: &'static str,
    pub table: &'static str,
    pub references: &'static str,
}

impl Table {
    pub fn new(name: &'static str, kind: TableKind) -> Self {
        Self {
            name,
            kind,
            columns: Vec::new(),
            primary_key: None,
            foreign_keys: Vec::new(),
        }
    }

    pub fn column(mut self, col: Column) -> Self {
        self.columns.push(col);
        self
    }

    /// Declare `name` as the primary key; the column becomes NOT NULL.
    ///
    /// Panics if the column was not added first (caught in tests).
    pub fn primary_key(mut self, name: &'static str) -> Self {
        match self.columns.iter_mut().find(|c| c.name == name) {
            Some(col) => col.nullable = false,
            None => panic!("Primary key '{}' is not a column of '{}'", name, self.name),
        }
        self.primary_key = Some(name);
        self
    }

    pub fn references(
        mut self,
        column: &'static str,
        table: &'static str,
        references: &'static str,
    ) -> Self {
        self.foreign_keys.push(ForeignKey {
            column,
            table,
            references,
        });
        self
    }

    pub fn get_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.name).collect()
    }

    /// Columns a caller supplies on insert (everything but identity columns).
    pub fn insertable_columns(&self) -> Vec<&'static str> {
        self.columns
            .iter()
            .filter(|c| c.identity.is_none())
            .map(|c| c.name)
            .collect()
    }
}

impl Column {
    pub fn new(name: &'static str, data_type: ColumnType) -> Self {
        Self {
            name,
            data_type,
            nullable: true,
            identity: None,
        }
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub fn identity(mut self, seed: i64, step: i64) -> Self {
        self.identity = Some((seed, step));
        self.nullable = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_builder() {
        let t = Table::new("plays", TableKind::Fact)
            .column(Column::new("id", ColumnType::Integer).identity(0, 1))
            .column(Column::new("user_id", ColumnType::Integer))
            .primary_key("id")
            .references("user_id", "users", "user_id");

        assert_eq!(t.column_names(), vec!["id", "user_id"]);
        assert_eq!(t.insertable_columns(), vec!["user_id"]);
        assert_eq!(t.primary_key, Some("id"));
        assert_eq!(t.foreign_keys[0].table, "users");
        assert!(!t.get_column("id").unwrap().nullable);
    }

    #[test]
    fn test_primary_key_forces_not_null() {
        let t = Table::new("users", TableKind::Dimension)
            .column(Column::new("user_id", ColumnType::Integer))
            .primary_key("user_id");
        assert!(!t.get_column("user_id").unwrap().nullable);
    }

    #[test]
    #[should_panic(expected = "is not a column")]
    fn test_unknown_primary_key() {
        Table::new("users", TableKind::Dimension).primary_key("user_id");
    }
}

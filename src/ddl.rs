//! DDL generation for catalog tables.

use crate::dialect::Dialect;
use crate::schema::Table;

/// Generate `CREATE TABLE IF NOT EXISTS`.
pub fn build_create_table(table: &Table, dialect: Dialect) -> String {
    let generator = dialect.generator();
    let mut sql = String::from("CREATE TABLE IF NOT EXISTS ");
    sql.push_str(&generator.quote_identifier(table.name));
    sql.push_str(" (\n");

    let mut defs = Vec::new();
    for col in &table.columns {
        let mut line = format!(
            "    {} {}",
            generator.quote_identifier(col.name),
            col.data_type
        );
        if let Some((seed, step)) = col.identity {
            line.push(' ');
            line.push_str(&generator.identity(seed, step));
        }
        if !col.nullable {
            line.push_str(" NOT NULL");
        }
        defs.push(line);
    }

    if let Some(pk) = table.primary_key {
        defs.push(format!("    PRIMARY KEY ({})", generator.quote_identifier(pk)));
    }

    for fk in &table.foreign_keys {
        defs.push(format!(
            "    FOREIGN KEY ({}) REFERENCES {} ({})",
            generator.quote_identifier(fk.column),
            generator.quote_identifier(fk.table),
            generator.quote_identifier(fk.references)
        ));
    }

    sql.push_str(&defs.join(",\n"));
    sql.push_str("\n)");
    sql
}

/// Generate `DROP TABLE IF EXISTS`.
pub fn build_drop_table(table: &Table, dialect: Dialect) -> String {
    format!(
        "DROP TABLE IF EXISTS {}",
        dialect.generator().quote_identifier(table.name)
    )
}

/// Generate `TRUNCATE`.
pub fn build_truncate(table: &Table, dialect: Dialect) -> String {
    format!("TRUNCATE {}", dialect.generator().quote_identifier(table.name))
}

/// Generate `CREATE SCHEMA IF NOT EXISTS`.
pub fn build_create_schema(schema: &str, dialect: Dialect) -> String {
    format!(
        "CREATE SCHEMA IF NOT EXISTS {}",
        dialect.generator().quote_identifier(schema)
    )
}

//! `INSERT ... SELECT` statements that populate the warehouse tables from staging.
//!
//! Dimension inserts select distinct rows with a non-null key. Duplicate keys
//! whose other columns differ survive `DISTINCT`; what happens to them is up
//! to the engine's primary-key handling (Redshift does not enforce it).
//!
//! The fact insert is an inner join of events to songs on title, artist name
//! and duration. Events without an exact match produce no `songplays` row.

use crate::dialect::{DatePart, Dialect, SqlGenerator};
use crate::schema::{self, ARTISTS, SONGPLAYS, SONGS, STAGING_EVENTS, STAGING_SONGS, TIME, USERS};

/// A table in a FROM or JOIN clause.
#[derive(Debug, Clone)]
pub struct TableRef {
    pub name: &'static str,
    pub alias: Option<&'static str>,
}

/// One output expression of the SELECT list.
#[derive(Debug, Clone)]
pub enum SelectExpr {
    /// Optionally qualified column.
    Column {
        qualifier: Option<&'static str>,
        name: &'static str,
    },
    /// `EXTRACT(<part> FROM <column>)`.
    Extract { part: DatePart, column: &'static str },
}

#[derive(Debug, Clone)]
pub struct SelectItem {
    pub expr: SelectExpr,
    pub alias: Option<&'static str>,
}

/// Inner join with a conjunction of column equalities.
#[derive(Debug, Clone)]
pub struct Join {
    pub table: TableRef,
    /// `(left, right)` pairs, each rendered as `left = right`.
    pub on: Vec<(SelectExpr, SelectExpr)>,
}

/// `INSERT INTO <table> (<columns>) SELECT [DISTINCT] ... FROM ... [JOIN ...] [WHERE <key> IS NOT NULL]`.
#[derive(Debug, Clone)]
pub struct InsertSelect {
    pub table: &'static str,
    pub columns: Vec<&'static str>,
    pub distinct: bool,
    pub select: Vec<SelectItem>,
    pub from: TableRef,
    pub join: Option<Join>,
    pub not_null: Option<&'static str>,
}

/// Unqualified column.
pub fn col(name: &'static str) -> SelectExpr {
    SelectExpr::Column {
        qualifier: None,
        name,
    }
}

/// Column qualified by a table alias.
pub fn qcol(qualifier: &'static str, name: &'static str) -> SelectExpr {
    SelectExpr::Column {
        qualifier: Some(qualifier),
        name,
    }
}

impl From<SelectExpr> for SelectItem {
    fn from(expr: SelectExpr) -> Self {
        SelectItem { expr, alias: None }
    }
}

impl SelectExpr {
    pub fn alias(self, alias: &'static str) -> SelectItem {
        SelectItem {
            expr: self,
            alias: Some(alias),
        }
    }

    fn to_sql(&self, generator: &dyn SqlGenerator) -> String {
        match self {
            SelectExpr::Column {
                qualifier: Some(q),
                name,
            } => format!("{}.{}", q, generator.quote_identifier(name)),
            SelectExpr::Column {
                qualifier: None,
                name,
            } => generator.quote_identifier(name),
            SelectExpr::Extract { part, column } => format!(
                "EXTRACT({} FROM {})",
                generator.date_part(*part),
                generator.quote_identifier(column)
            ),
        }
    }
}

impl TableRef {
    fn to_sql(&self, generator: &dyn SqlGenerator) -> String {
        match self.alias {
            Some(alias) => format!("{} AS {}", generator.quote_identifier(self.name), alias),
            None => generator.quote_identifier(self.name),
        }
    }
}

impl InsertSelect {
    pub fn new(table: &'static str, from: &'static str) -> Self {
        Self {
            table,
            columns: Vec::new(),
            distinct: false,
            select: Vec::new(),
            from: TableRef {
                name: from,
                alias: None,
            },
            join: None,
            not_null: None,
        }
    }

    pub fn columns(mut self, columns: Vec<&'static str>) -> Self {
        self.columns = columns;
        self
    }

    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    pub fn select<I: Into<SelectItem>>(mut self, items: impl IntoIterator<Item = I>) -> Self {
        self.select.extend(items.into_iter().map(Into::into));
        self
    }

    pub fn from_alias(mut self, alias: &'static str) -> Self {
        self.from.alias = Some(alias);
        self
    }

    pub fn join(
        mut self,
        table: &'static str,
        alias: &'static str,
        on: Vec<(SelectExpr, SelectExpr)>,
    ) -> Self {
        self.join = Some(Join {
            table: TableRef {
                name: table,
                alias: Some(alias),
            },
            on,
        });
        self
    }

    /// Skip source rows whose `column` is null.
    pub fn where_not_null(mut self, column: &'static str) -> Self {
        self.not_null = Some(column);
        self
    }

    pub fn to_sql(&self, dialect: Dialect) -> String {
        let generator = dialect.generator();
        let g = generator.as_ref();

        let mut sql = String::from("INSERT INTO ");
        sql.push_str(&g.quote_identifier(self.table));
        if !self.columns.is_empty() {
            let cols: Vec<String> = self.columns.iter().map(|c| g.quote_identifier(c)).collect();
            sql.push_str(" (");
            sql.push_str(&cols.join(", "));
            sql.push(')');
        }

        sql.push_str(if self.distinct {
            "\nSELECT DISTINCT "
        } else {
            "\nSELECT "
        });
        let items: Vec<String> = self
            .select
            .iter()
            .map(|item| match item.alias {
                Some(alias) => format!("{} AS {}", item.expr.to_sql(g), g.quote_identifier(alias)),
                None => item.expr.to_sql(g),
            })
            .collect();
        sql.push_str(&items.join(", "));

        sql.push_str("\nFROM ");
        sql.push_str(&self.from.to_sql(g));

        if let Some(join) = &self.join {
            let conds: Vec<String> = join
                .on
                .iter()
                .map(|(l, r)| format!("{} = {}", l.to_sql(g), r.to_sql(g)))
                .collect();
            sql.push_str("\nJOIN ");
            sql.push_str(&join.table.to_sql(g));
            sql.push_str(" ON ");
            sql.push_str(&conds.join(" AND "));
        }

        if let Some(column) = self.not_null {
            sql.push_str(&format!("\nWHERE {} IS NOT NULL", g.quote_identifier(column)));
        }

        sql
    }
}

/// Fact rows: events joined to songs on (title, artist name, duration).
pub fn songplay_insert() -> InsertSelect {
    InsertSelect::new(SONGPLAYS, STAGING_EVENTS)
        .columns(schema::songplays().insertable_columns())
        .select([
            qcol("se", "ts"),
            qcol("se", "user_id"),
            qcol("se", "level"),
            qcol("ss", "song_id"),
            qcol("ss", "artist_id"),
            qcol("se", "session_id"),
            qcol("se", "location"),
            qcol("se", "user_agent"),
        ])
        .from_alias("se")
        .join(
            STAGING_SONGS,
            "ss",
            vec![
                (qcol("se", "song"), qcol("ss", "title")),
                (qcol("se", "artist"), qcol("ss", "artist_name")),
                (qcol("se", "length"), qcol("ss", "duration")),
            ],
        )
}

pub fn user_insert() -> InsertSelect {
    let columns = schema::users().column_names();
    InsertSelect::new(USERS, STAGING_EVENTS)
        .select(columns.iter().copied().map(col))
        .columns(columns)
        .distinct()
        .where_not_null("user_id")
}

pub fn song_insert() -> InsertSelect {
    let columns = schema::songs().column_names();
    InsertSelect::new(SONGS, STAGING_SONGS)
        .select(columns.iter().copied().map(col))
        .columns(columns)
        .distinct()
        .where_not_null("song_id")
}

pub fn artist_insert() -> InsertSelect {
    InsertSelect::new(ARTISTS, STAGING_SONGS)
        .columns(schema::artists().column_names())
        .distinct()
        .select([
            col("artist_id").into(),
            col("artist_name").alias("name"),
            col("artist_location").alias("location"),
            col("artist_latitude").alias("latitude"),
            col("artist_longitude").alias("longitude"),
        ])
        .where_not_null("artist_id")
}

/// Calendar fields derived from the event timestamp by the engine's `EXTRACT`.
pub fn time_insert() -> InsertSelect {
    let extract = |part: DatePart, alias: &'static str| {
        SelectExpr::Extract { part, column: "ts" }.alias(alias)
    };
    InsertSelect::new(TIME, STAGING_EVENTS)
        .columns(schema::time().column_names())
        .distinct()
        .select([
            col("ts").into(),
            extract(DatePart::Hour, "hour"),
            extract(DatePart::Day, "day"),
            extract(DatePart::Week, "week"),
            extract(DatePart::Month, "month"),
            extract(DatePart::Year, "year"),
            extract(DatePart::Weekday, "weekday"),
        ])
        .where_not_null("ts")
}

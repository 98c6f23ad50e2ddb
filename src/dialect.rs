//! SQL dialects the statements can be rendered for.
//!
//! Redshift is the production target. Postgres renders the same schema and
//! transformations with the few constructs Redshift spells differently, so the
//! pipeline can be exercised against a local Postgres.

use std::fmt;

/// Dialect-specific pieces of statement text.
pub trait SqlGenerator {
    /// Quote an identifier.
    fn quote_identifier(&self, id: &str) -> String {
        format!("\"{}\"", id.replace('"', "\"\""))
    }

    /// Column type suffix for an auto-numbered integer column.
    fn identity(&self, seed: i64, step: i64) -> String;

    /// Name of a date part accepted by `EXTRACT(<part> FROM ...)`.
    fn date_part(&self, part: DatePart) -> &'static str;
}

pub struct RedshiftGenerator;

impl SqlGenerator for RedshiftGenerator {
    fn identity(&self, seed: i64, step: i64) -> String {
        format!("IDENTITY({},{})", seed, step)
    }

    fn date_part(&self, part: DatePart) -> &'static str {
        match part {
            DatePart::Hour => "hour",
            DatePart::Day => "day",
            DatePart::Week => "week",
            DatePart::Month => "month",
            DatePart::Year => "year",
            DatePart::Weekday => "weekday",
        }
    }
}

pub struct PostgresGenerator;

impl SqlGenerator for PostgresGenerator {
    fn identity(&self, seed: i64, step: i64) -> String {
        format!(
            "GENERATED BY DEFAULT AS IDENTITY (START WITH {} INCREMENT BY {} MINVALUE {})",
            seed,
            step,
            seed.min(1)
        )
    }

    fn date_part(&self, part: DatePart) -> &'static str {
        match part {
            DatePart::Weekday => "dow",
            other => RedshiftGenerator.date_part(other),
        }
    }
}

/// Calendar fields extracted into the `time` dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePart {
    Hour,
    Day,
    Week,
    Month,
    Year,
    Weekday,
}

/// Supported SQL dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    #[default]
    Redshift,
    Postgres,
}

impl Dialect {
    pub fn generator(&self) -> Box<dyn SqlGenerator> {
        match self {
            Dialect::Redshift => Box::new(RedshiftGenerator),
            Dialect::Postgres => Box::new(PostgresGenerator),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Redshift => write!(f, "redshift"),
            Dialect::Postgres => write!(f, "postgres"),
        }
    }
}

//! Bulk-load (COPY) statements for the staging tables.
//!
//! COPY is a Redshift command; the text is the same whatever [`Dialect`] the
//! rest of the statements are rendered for. Configuration values are placed
//! between single quotes as-is: they are trusted input and are not escaped.
//!
//! [`Dialect`]: crate::dialect::Dialect

use crate::config::Settings;
use crate::schema::{STAGING_EVENTS, STAGING_SONGS};

/// How COPY maps JSON fields onto columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonFormat {
    /// Match top-level keys to column names.
    Auto,
    /// Use a JSONPaths document at the given object-storage path.
    Paths(String),
}

/// A `COPY <table> FROM ...` statement.
#[derive(Debug, Clone)]
pub struct CopyCommand {
    pub table: String,
    pub source: String,
    pub iam_role: String,
    pub json: JsonFormat,
    /// `TIMEFORMAT` value, e.g. `epochmillisecs`.
    pub time_format: Option<String>,
    pub region: Option<String>,
}

impl CopyCommand {
    pub fn new(table: impl Into<String>, source: impl Into<String>, iam_role: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            source: source.into(),
            iam_role: iam_role.into(),
            json: JsonFormat::Auto,
            time_format: None,
            region: None,
        }
    }

    pub fn json_paths(mut self, path: impl Into<String>) -> Self {
        self.json = JsonFormat::Paths(path.into());
        self
    }

    pub fn time_format(mut self, format: impl Into<String>) -> Self {
        self.time_format = Some(format.into());
        self
    }

    pub fn region(mut self, region: Option<String>) -> Self {
        self.region = region;
        self
    }

    pub fn to_sql(&self) -> String {
        let mut sql = format!("COPY {}\nFROM '{}'", self.table, self.source);
        if let Some(fmt) = &self.time_format {
            sql.push_str(&format!("\nTIMEFORMAT '{}'", fmt));
        }
        sql.push_str(&format!("\nIAM_ROLE '{}'", self.iam_role));
        match &self.json {
            JsonFormat::Auto => sql.push_str("\nJSON 'auto'"),
            JsonFormat::Paths(path) => sql.push_str(&format!("\nJSON '{}'", path)),
        }
        if let Some(region) = &self.region {
            sql.push_str(&format!("\nREGION '{}'", region));
        }
        sql
    }
}

/// Event logs: JSONPaths mapping and millisecond epoch timestamps.
pub fn staging_events_copy(settings: &Settings) -> CopyCommand {
    CopyCommand::new(STAGING_EVENTS, &settings.s3.log_data, &settings.iam_role.arn)
        .time_format("epochmillisecs")
        .json_paths(&settings.s3.log_jsonpath)
        .region(settings.s3.region.clone())
}

/// Song metadata: keys already match the column names.
pub fn staging_songs_copy(settings: &Settings) -> CopyCommand {
    CopyCommand::new(STAGING_SONGS, &settings.s3.song_data, &settings.iam_role.arn)
        .region(settings.s3.region.clone())
}

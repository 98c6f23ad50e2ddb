//! The ordered statement lists consumed by the pipeline.
//!
//! | list | order |
//! |------|-------|
//! | drop | staging_events, staging_songs, songplays, users, songs, artists, time |
//! | create | staging_events, staging_songs, users, songs, artists, time, songplays |
//! | copy | staging_events, staging_songs |
//! | insert | users, songs, artists, time, songplays |
//!
//! Drop removes the fact table before the dimensions it references; create
//! and insert fill the dimensions before the fact table.

use crate::config::Settings;
use crate::copy::{staging_events_copy, staging_songs_copy};
use crate::ddl::{build_create_table, build_drop_table, build_truncate};
use crate::dialect::Dialect;
use crate::schema::{self, TableKind};
use crate::transform::{artist_insert, song_insert, songplay_insert, time_insert, user_insert};
use serde::Serialize;
use std::fmt;

/// A named group of statements executed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Drop,
    Create,
    Truncate,
    Copy,
    Insert,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Drop => write!(f, "drop"),
            Stage::Create => write!(f, "create"),
            Stage::Truncate => write!(f, "truncate"),
            Stage::Copy => write!(f, "copy"),
            Stage::Insert => write!(f, "insert"),
        }
    }
}

pub fn drop_table_queries(dialect: Dialect) -> Vec<String> {
    [
        schema::staging_events(),
        schema::staging_songs(),
        schema::songplays(),
        schema::users(),
        schema::songs(),
        schema::artists(),
        schema::time(),
    ]
    .iter()
    .map(|t| build_drop_table(t, dialect))
    .collect()
}

pub fn create_table_queries(dialect: Dialect) -> Vec<String> {
    schema::catalog()
        .iter()
        .map(|t| build_create_table(t, dialect))
        .collect()
}

/// Empty the staging tables before a reload.
pub fn truncate_staging_queries(dialect: Dialect) -> Vec<String> {
    schema::catalog()
        .iter()
        .filter(|t| t.kind == TableKind::Staging)
        .map(|t| build_truncate(t, dialect))
        .collect()
}

pub fn copy_table_queries(settings: &Settings) -> Vec<String> {
    vec![
        staging_events_copy(settings).to_sql(),
        staging_songs_copy(settings).to_sql(),
    ]
}

pub fn insert_table_queries(dialect: Dialect) -> Vec<String> {
    [
        user_insert(),
        song_insert(),
        artist_insert(),
        time_insert(),
        songplay_insert(),
    ]
    .iter()
    .map(|q| q.to_sql(dialect))
    .collect()
}

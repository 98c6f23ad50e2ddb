//! The seven tables of the song play warehouse.

use super::table::{Column, Table, TableKind};
use super::types::ColumnType::*;

pub const STAGING_EVENTS: &str = "staging_events";
pub const STAGING_SONGS: &str = "staging_songs";
pub const SONGPLAYS: &str = "songplays";
pub const USERS: &str = "users";
pub const SONGS: &str = "songs";
pub const ARTISTS: &str = "artists";
pub const TIME: &str = "time";

/// One row per event log record, columns in JSONPaths order.
pub fn staging_events() -> Table {
    Table::new(STAGING_EVENTS, TableKind::Staging)
        .column(Column::new("artist", Text))
        .column(Column::new("auth", Text))
        .column(Column::new("first_name", Text))
        .column(Column::new("gender", Char))
        .column(Column::new("item_in_session", Integer))
        .column(Column::new("last_name", Text))
        .column(Column::new("length", Float))
        .column(Column::new("level", Text))
        .column(Column::new("location", Text))
        .column(Column::new("method", Text))
        .column(Column::new("page", Text))
        .column(Column::new("registration", Text))
        .column(Column::new("session_id", Integer))
        .column(Column::new("song", Text))
        .column(Column::new("status", Integer))
        .column(Column::new("ts", Timestamp))
        .column(Column::new("user_agent", Text))
        .column(Column::new("user_id", Integer))
}

/// One row per song metadata record; columns match the JSON keys for `JSON 'auto'`.
pub fn staging_songs() -> Table {
    Table::new(STAGING_SONGS, TableKind::Staging)
        .column(Column::new("num_songs", Integer))
        .column(Column::new("artist_id", Text).not_null())
        .column(Column::new("artist_latitude", Float))
        .column(Column::new("artist_longitude", Float))
        .column(Column::new("artist_location", Text))
        .column(Column::new("artist_name", Text))
        .column(Column::new("song_id", Text).not_null())
        .column(Column::new("title", Text))
        .column(Column::new("duration", Float))
        .column(Column::new("year", Integer))
}

pub fn songplays() -> Table {
    Table::new(SONGPLAYS, TableKind::Fact)
        .column(Column::new("songplay_id", Integer).identity(0, 1))
        .column(Column::new("start_time", Timestamp))
        .column(Column::new("user_id", Integer))
        .column(Column::new("level", Text))
        .column(Column::new("song_id", Text))
        .column(Column::new("artist_id", Text))
        .column(Column::new("session_id", Integer))
        .column(Column::new("location", Text))
        .column(Column::new("user_agent", Text))
        .primary_key("songplay_id")
        .references("start_time", TIME, "start_time")
        .references("user_id", USERS, "user_id")
        .references("song_id", SONGS, "song_id")
        .references("artist_id", ARTISTS, "artist_id")
}

pub fn users() -> Table {
    Table::new(USERS, TableKind::Dimension)
        .column(Column::new("user_id", Integer))
        .column(Column::new("first_name", Text))
        .column(Column::new("last_name", Text))
        .column(Column::new("gender", Char))
        .column(Column::new("level", Text))
        .primary_key("user_id")
}

pub fn songs() -> Table {
    Table::new(SONGS, TableKind::Dimension)
        .column(Column::new("song_id", Text))
        .column(Column::new("title", Text))
        .column(Column::new("artist_id", Text))
        .column(Column::new("year", Integer))
        .column(Column::new("duration", Float))
        .primary_key("song_id")
}

pub fn artists() -> Table {
    Table::new(ARTISTS, TableKind::Dimension)
        .column(Column::new("artist_id", Text))
        .column(Column::new("name", Text))
        .column(Column::new("location", Text))
        .column(Column::new("latitude", Float))
        .column(Column::new("longitude", Float))
        .primary_key("artist_id")
}

pub fn time() -> Table {
    Table::new(TIME, TableKind::Dimension)
        .column(Column::new("start_time", Timestamp))
        .column(Column::new("hour", Integer))
        .column(Column::new("day", Integer))
        .column(Column::new("week", Integer))
        .column(Column::new("month", Integer))
        .column(Column::new("year", Integer))
        .column(Column::new("weekday", Integer))
        .primary_key("start_time")
}

/// All tables in creation order: staging, dimensions, then the fact table
/// whose foreign keys need the dimensions to exist.
pub fn catalog() -> Vec<Table> {
    vec![
        staging_events(),
        staging_songs(),
        users(),
        songs(),
        artists(),
        time(),
        songplays(),
    ]
}

/// Look up a table by name.
pub fn table(name: &str) -> Option<Table> {
    catalog().into_iter().find(|t| t.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::TableKind;

    #[test]
    fn test_catalog_shape() {
        let tables = catalog();
        assert_eq!(tables.len(), 7);
        let staging = tables.iter().filter(|t| t.kind == TableKind::Staging).count();
        let dims = tables.iter().filter(|t| t.kind == TableKind::Dimension).count();
        assert_eq!((staging, dims), (2, 4));
        assert_eq!(tables.last().unwrap().name, SONGPLAYS);
    }

    #[test]
    fn test_staging_tables_have_no_key() {
        assert!(staging_events().primary_key.is_none());
        assert!(staging_songs().primary_key.is_none());
    }

    #[test]
    fn test_foreign_keys_point_at_primary_keys() {
        for fk in songplays().foreign_keys {
            let target = table(fk.table).unwrap();
            assert_eq!(target.primary_key, Some(fk.references));
        }
    }

    #[test]
    fn test_dimension_keys() {
        assert_eq!(users().primary_key, Some("user_id"));
        assert_eq!(songs().primary_key, Some("song_id"));
        assert_eq!(artists().primary_key, Some("artist_id"));
        assert_eq!(time().primary_key, Some("start_time"));
    }

    #[test]
    fn test_lookup_unknown() {
        assert!(table("plays").is_none());
    }
}

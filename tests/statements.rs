//! Statement lists built from a settings file, without a database.

use dwh::prelude::*;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;

const SETTINGS: &str = r#"
[cluster]
host = "dwhcluster.example.us-west-2.redshift.amazonaws.com"
db_name = "dev"
db_user = "awsuser"
db_password = "Passw0rd"
db_port = 5439

[iam_role]
arn = "arn:aws:iam::123456789012:role/dwhRole"

[s3]
log_data = "s3://udacity-dend/log_data"
log_jsonpath = "s3://udacity-dend/log_json_path.json"
song_data = "s3://udacity-dend/song_data"
"#;

fn settings_file(name: &str, content: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("dwh-test-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_copy_queries_from_file() {
    let path = settings_file("copy.toml", SETTINGS);
    let settings = Settings::discover(Some(path.as_path())).unwrap();

    let copies = copy_table_queries(&settings);
    assert_eq!(copies.len(), 2);
    assert_eq!(
        copies[0],
        "COPY staging_events\n\
         FROM 's3://udacity-dend/log_data'\n\
         TIMEFORMAT 'epochmillisecs'\n\
         IAM_ROLE 'arn:aws:iam::123456789012:role/dwhRole'\n\
         JSON 's3://udacity-dend/log_json_path.json'"
    );
    assert!(copies[1].starts_with("COPY staging_songs\nFROM 's3://udacity-dend/song_data'"));
    assert!(copies[1].ends_with("JSON 'auto'"));
}

#[test]
fn test_invalid_file_names_path() {
    let path = settings_file("broken.toml", "[s3\nlog_data = 1");
    let err = Settings::load(&path).unwrap_err();
    assert!(err.to_string().contains("broken.toml"), "{}", err);
}

#[test]
fn test_every_table_is_created_and_dropped() {
    let creates = create_table_queries(Dialect::Redshift);
    let drops = drop_table_queries(Dialect::Redshift);
    for table in dwh::schema::catalog() {
        let quoted = format!("\"{}\"", table.name);
        assert!(
            creates
                .iter()
                .any(|q| q.starts_with(&format!("CREATE TABLE IF NOT EXISTS {} (", quoted))),
            "no create for {}",
            table.name
        );
        assert!(
            drops.contains(&format!("DROP TABLE IF EXISTS {}", quoted)),
            "no drop for {}",
            table.name
        );
    }
}

#[test]
fn test_dimension_inserts_guard_null_keys() {
    let inserts = insert_table_queries(Dialect::Redshift);
    let guards = [
        ("users", "user_id"),
        ("songs", "song_id"),
        ("artists", "artist_id"),
        ("time", "ts"),
    ];
    for (table, key) in guards {
        let sql = inserts
            .iter()
            .find(|q| q.starts_with(&format!("INSERT INTO \"{}\"", table)))
            .unwrap();
        assert!(sql.contains("SELECT DISTINCT"), "{}", sql);
        assert!(sql.ends_with(&format!("WHERE \"{}\" IS NOT NULL", key)), "{}", sql);
    }
}

#[test]
fn test_fact_insert_is_inner_join() {
    let inserts = insert_table_queries(Dialect::Redshift);
    let fact = inserts.last().unwrap();
    assert!(fact.starts_with("INSERT INTO \"songplays\""));
    assert!(fact.contains("\nJOIN \"staging_songs\" AS ss ON "));
    assert!(!fact.contains("LEFT JOIN"));
    assert!(!fact.contains("WHERE"));
}

#[test]
fn test_dialects_differ_only_where_expected() {
    let redshift = create_table_queries(Dialect::Redshift);
    let postgres = create_table_queries(Dialect::Postgres);
    let differing: Vec<usize> = (0..redshift.len())
        .filter(|&i| redshift[i] != postgres[i])
        .collect();
    // Only songplays carries an identity column.
    assert_eq!(differing, vec![6]);
}

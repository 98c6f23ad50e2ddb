//! Loader settings read from `dwh.toml`.
//!
//! ```toml
//! [cluster]
//! host = "dwhcluster.example.us-west-2.redshift.amazonaws.com"
//! db_name = "dev"
//! db_user = "awsuser"
//! db_password = "secret"
//! db_port = 5439
//!
//! [iam_role]
//! arn = "arn:aws:iam::123456789012:role/dwhRole"
//!
//! [s3]
//! log_data = "s3://udacity-dend/log_data"
//! log_jsonpath = "s3://udacity-dend/log_json_path.json"
//! song_data = "s3://udacity-dend/song_data"
//! ```

use crate::error::{DwhError, DwhResult};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory and the user config directory.
pub const CONFIG_FILE: &str = "dwh.toml";

/// Default Redshift port.
pub const DEFAULT_PORT: u16 = 5439;

/// All settings, one struct per section of the file.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Connection parameters; optional when a database URL is given instead.
    #[serde(default)]
    pub cluster: Option<ClusterSettings>,
    pub iam_role: IamRoleSettings,
    pub s3: S3Settings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClusterSettings {
    pub host: String,
    pub db_name: String,
    pub db_user: String,
    pub db_password: String,
    #[serde(default = "default_port")]
    pub db_port: u16,
    /// Schema placed first on the `search_path` of every connection.
    #[serde(default)]
    pub schema: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IamRoleSettings {
    /// Role the warehouse assumes to read from object storage.
    pub arn: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3Settings {
    /// Prefix holding the event log files.
    pub log_data: String,
    /// JSONPaths document mapping event fields to `staging_events` columns.
    pub log_jsonpath: String,
    /// Prefix holding the song metadata files.
    pub song_data: String,
    /// Bucket region, when it differs from the cluster's.
    #[serde(default)]
    pub region: Option<String>,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Settings {
    /// Parse settings from TOML text. `origin` is only used in error messages.
    pub fn from_toml_str(content: &str, origin: &Path) -> DwhResult<Self> {
        toml::from_str(content).map_err(|e| DwhError::Config {
            path: origin.to_path_buf(),
            message: e.message().to_string(),
        })
    }

    /// Read settings from a file.
    pub fn load(path: &Path) -> DwhResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| DwhError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Read settings from `explicit` if given, otherwise from the first file
    /// found in [`search_paths`].
    pub fn discover(explicit: Option<&Path>) -> DwhResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let searched = search_paths();
        match searched.iter().find(|p| p.is_file()) {
            Some(path) => Self::load(path),
            None => Err(DwhError::ConfigNotFound { searched }),
        }
    }

    /// Cluster section, required for connecting without a URL.
    pub fn cluster(&self) -> DwhResult<&ClusterSettings> {
        self.cluster
            .as_ref()
            .ok_or(DwhError::MissingSection("cluster"))
    }
}

/// Candidate settings files, in lookup order.
pub fn search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("dwh").join(CONFIG_FILE));
    }
    paths
}

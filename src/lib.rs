//! # dwh — song play warehouse loader
//!
//! Builds the statements that load event logs and song metadata from object
//! storage into a Redshift star schema, and runs them in order.
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use dwh::prelude::*;
//!
//! let settings = Settings::discover(None)?;
//! let warehouse = Warehouse::connect(settings.cluster()?).await?;
//! let options = PipelineOptions::default();
//!
//! pipeline::create_tables(&warehouse, &options).await?;
//! pipeline::run_etl(&warehouse, &settings, &options).await?;
//! ```
//!
//! ## Tables
//!
//! | Table            | Kind      | Key           |
//! |------------------|-----------|---------------|
//! | `staging_events` | staging   | none          |
//! | `staging_songs`  | staging   | none          |
//! | `songplays`      | fact      | `songplay_id` |
//! | `users`          | dimension | `user_id`     |
//! | `songs`          | dimension | `song_id`     |
//! | `artists`        | dimension | `artist_id`   |
//! | `time`           | dimension | `start_time`  |

pub mod config;
pub mod copy;
pub mod ddl;
pub mod dialect;
pub mod engine;
pub mod error;
pub mod pipeline;
pub mod queries;
pub mod schema;
pub mod transform;

pub use queries::{
    copy_table_queries, create_table_queries, drop_table_queries, insert_table_queries,
};

pub mod prelude {
    pub use crate::config::{ClusterSettings, Settings};
    pub use crate::dialect::Dialect;
    pub use crate::engine::{StageReport, Warehouse};
    pub use crate::error::*;
    pub use crate::pipeline::{self, PipelineOptions};
    pub use crate::queries::*;
}

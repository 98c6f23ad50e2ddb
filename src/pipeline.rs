//! Pipeline entry points: reset the schema, load staging, transform.

use crate::config::Settings;
use crate::dialect::Dialect;
use crate::engine::{StageReport, Warehouse};
use crate::error::DwhResult;
use crate::queries::{
    Stage, copy_table_queries, create_table_queries, drop_table_queries, insert_table_queries,
    truncate_staging_queries,
};
use tracing::info;

/// Options shared by all pipeline runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineOptions {
    pub dialect: Dialect,
    /// Run each stage inside a transaction.
    pub transactional: bool,
    /// Empty the staging tables before COPY.
    pub truncate_staging: bool,
}

/// Statements a pipeline run would execute, grouped by stage.
pub fn plan_create_tables(options: &PipelineOptions) -> Vec<(Stage, Vec<String>)> {
    vec![
        (Stage::Drop, drop_table_queries(options.dialect)),
        (Stage::Create, create_table_queries(options.dialect)),
    ]
}

pub fn plan_etl(settings: &Settings, options: &PipelineOptions) -> Vec<(Stage, Vec<String>)> {
    let mut plan = Vec::new();
    if options.truncate_staging {
        plan.push((Stage::Truncate, truncate_staging_queries(options.dialect)));
    }
    plan.push((Stage::Copy, copy_table_queries(settings)));
    plan.push((Stage::Insert, insert_table_queries(options.dialect)));
    plan
}

pub fn plan_transform(options: &PipelineOptions) -> Vec<(Stage, Vec<String>)> {
    vec![(Stage::Insert, insert_table_queries(options.dialect))]
}

/// Drop every table, then create them all.
pub async fn create_tables(
    warehouse: &Warehouse,
    options: &PipelineOptions,
) -> DwhResult<Vec<StageReport>> {
    warehouse.ensure_schema(options.dialect).await?;
    run_plan(warehouse, plan_create_tables(options), options).await
}

/// Bulk-load the staging tables, then populate the warehouse tables.
pub async fn run_etl(
    warehouse: &Warehouse,
    settings: &Settings,
    options: &PipelineOptions,
) -> DwhResult<Vec<StageReport>> {
    run_plan(warehouse, plan_etl(settings, options), options).await
}

/// Populate the warehouse tables from already loaded staging tables.
pub async fn run_transform(
    warehouse: &Warehouse,
    options: &PipelineOptions,
) -> DwhResult<Vec<StageReport>> {
    run_plan(warehouse, plan_transform(options), options).await
}

async fn run_plan(
    warehouse: &Warehouse,
    plan: Vec<(Stage, Vec<String>)>,
    options: &PipelineOptions,
) -> DwhResult<Vec<StageReport>> {
    let mut reports = Vec::with_capacity(plan.len());
    for (stage, statements) in plan {
        reports.push(
            warehouse
                .execute_all(stage, &statements, options.transactional)
                .await?,
        );
    }
    info!(stages = reports.len(), dialect = %options.dialect, "pipeline finished");
    Ok(reports)
}

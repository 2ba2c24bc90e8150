//! Shared test utilities for the company schema.
//!
//! This module provides helpers for setting up in-memory test databases
//! and building small graphs with predictable, collision-free identifiers.

use crate::{
    core::{
        department,
        graph::{DepartmentGraph, EmployeeRecord, ManagerGraph},
        manager,
    },
    entities,
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Builds an employee whose SSN and email are derived from `tag`.
///
/// # Defaults
/// * `ssn`: `"SSN-{tag}"`
/// * `email`: `"employee{tag}@example.com"`
pub fn test_employee(tag: &str) -> EmployeeRecord {
    EmployeeRecord::new(
        format!("Last{tag}"),
        format!("First{tag}"),
        format!("SSN-{tag}"),
        format!("employee{tag}@example.com"),
    )
}

/// Builds a department headed by `manager_id` with two employees (`{tag}1`, `{tag}2`)
/// and two budget lines (Hiring 1000, Investments 2000).
pub fn test_department_graph(department_id: i32, manager_id: i32, tag: &str) -> DepartmentGraph {
    DepartmentGraph::new(department_id, format!("Dept {tag}"))
        .with_employee(test_employee(&format!("{tag}1")))
        .with_employee(test_employee(&format!("{tag}2")))
        .with_manager(
            ManagerGraph::new(manager_id, format!("Manager{tag}"), "Test")
                .with_budget("Hiring", 1_000)
                .with_budget("Investments", 2_000),
        )
}

/// Inserts a bare manager without budget lines.
pub async fn create_test_manager(
    db: &DatabaseConnection,
    manager_id: i32,
) -> Result<entities::manager::Model> {
    manager::insert_manager(db, &ManagerGraph::new(manager_id, "Test", "Manager")).await
}

/// Inserts a department without a manager.
pub async fn create_test_department(
    db: &DatabaseConnection,
    department_id: i32,
    name: &str,
) -> Result<entities::department::Model> {
    department::insert_department(db, department_id, name, None).await
}

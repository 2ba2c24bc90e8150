//! Graph persistence - Writes a batch of department graphs in one transaction.
//!
//! Rows are inserted in two passes so every foreign key points at a row that already
//! exists inside the transaction:
//!
//! 1. parents: every manager, then every department (carrying its manager's id)
//! 2. children: every employee (carrying its department's id) and every budget line
//!    (carrying its manager's id)
//!
//! Any failure drops the open transaction, which rolls back everything written so far.

use crate::{
    core::{budget, department, employee, graph::DepartmentGraph, manager},
    errors::Result,
};
use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{debug, info, instrument};

/// Row counts written by [`persist_graph`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PersistSummary {
    /// Rows written to `Table_Department`
    pub departments: usize,
    /// Rows written to `Table_Manager`
    pub managers: usize,
    /// Rows written to `Table_Employee`
    pub employees: usize,
    /// Rows written to `Table_Budgets`
    pub budget_lines: usize,
}

/// Inserts all departments with their employees, managers and budget lines atomically.
///
/// # Errors
/// Constraint violations surface as [`crate::errors::Error::UniqueViolation`] or
/// [`crate::errors::Error::ForeignKeyViolation`]; nothing from the batch is committed.
#[instrument(skip(db, departments), fields(batch_size = departments.len()))]
pub async fn persist_graph(
    db: &DatabaseConnection,
    departments: &[DepartmentGraph],
) -> Result<PersistSummary> {
    let txn = db.begin().await?;
    let mut summary = PersistSummary::default();

    // Pass 1: parents
    for graph in departments.iter().filter_map(|d| d.manager.as_ref()) {
        manager::insert_manager(&txn, graph).await?;
        debug!(manager_id = graph.id, "Inserted manager");
        summary.managers += 1;
    }

    for graph in departments {
        let manager_id = graph.manager.as_ref().map(|m| m.id);
        department::insert_department(&txn, graph.id, &graph.name, manager_id).await?;
        debug!(department_id = graph.id, ?manager_id, "Inserted department");
        summary.departments += 1;
    }

    // Pass 2: children
    for graph in departments {
        for record in &graph.employees {
            employee::insert_employee(&txn, graph.id, record).await?;
            summary.employees += 1;
        }

        if let Some(manager_graph) = &graph.manager {
            for line in &manager_graph.budget {
                budget::insert_budget_line(&txn, manager_graph.id, line).await?;
                summary.budget_lines += 1;
            }
        }
    }

    txn.commit().await?;

    info!(?summary, "Department graph committed.");
    Ok(summary)
}

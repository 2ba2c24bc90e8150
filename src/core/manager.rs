//! Manager data access - Insertion, lookup and cascading removal of managers.
//!
//! A manager owns their budget lines, so removing a manager removes the budget too.
//! The department link is not owned: the heading department survives and merely loses
//! its `Manager_ID`.

use crate::{
    core::graph::ManagerGraph,
    entities::{Budgets, Department, Manager, budget, department, manager},
    errors::{Error, Result},
};
use sea_orm::{Set, TransactionTrait, prelude::*, sea_query::Expr};
use tracing::{info, instrument};

/// Inserts the manager row only; budget lines are inserted separately once the manager
/// exists.
pub async fn insert_manager<C>(db: &C, graph: &ManagerGraph) -> Result<manager::Model>
where
    C: ConnectionTrait,
{
    let manager = manager::ActiveModel {
        manager_id: Set(graph.id),
        last_name: Set(graph.last_name.clone()),
        first_name: Set(graph.first_name.clone()),
    };

    manager.insert(db).await.map_err(Into::into)
}

/// Finds a manager by primary key.
pub async fn get_manager_by_id<C>(db: &C, manager_id: i32) -> Result<Option<manager::Model>>
where
    C: ConnectionTrait,
{
    Manager::find_by_id(manager_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Outcome of [`delete_manager`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerRemoval {
    /// Budget lines deleted with the manager
    pub budget_lines_removed: u64,
    /// Department that lost its manager, if one was headed
    pub detached_department: Option<i32>,
}

/// Deletes a manager together with all of their budget lines.
///
/// Runs in one transaction: the heading department (if any) has its `Manager_ID`
/// cleared, the budget lines are deleted, then the manager row. Either all three
/// steps are committed or none.
///
/// # Errors
/// Returns [`Error::ManagerNotFound`] if no manager has `manager_id`.
#[instrument(skip(db))]
pub async fn delete_manager(db: &DatabaseConnection, manager_id: i32) -> Result<ManagerRemoval> {
    let txn = db.begin().await?;

    Manager::find_by_id(manager_id)
        .one(&txn)
        .await?
        .ok_or(Error::ManagerNotFound { id: manager_id })?;

    let detached_department = Department::find()
        .filter(department::Column::ManagerId.eq(manager_id))
        .one(&txn)
        .await?
        .map(|d| d.department_id);

    if detached_department.is_some() {
        Department::update_many()
            .col_expr(
                department::Column::ManagerId,
                Expr::value(Option::<i32>::None),
            )
            .filter(department::Column::ManagerId.eq(manager_id))
            .exec(&txn)
            .await?;
    }

    let budget_lines_removed = Budgets::delete_many()
        .filter(budget::Column::ManagerId.eq(manager_id))
        .exec(&txn)
        .await?
        .rows_affected;

    Manager::delete_by_id(manager_id).exec(&txn).await?;

    txn.commit().await?;

    info!(
        budget_lines_removed,
        ?detached_department,
        "Manager removed with their budget."
    );
    Ok(ManagerRemoval {
        budget_lines_removed,
        detached_department,
    })
}

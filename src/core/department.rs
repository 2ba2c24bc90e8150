//! Department data access - Insertion, lookup and cascading removal of departments.
//!
//! A department owns its employees: deleting it deletes them in the same transaction.
//! The manager is only referenced, so it is left in place.

use crate::{
    entities::{Department, Employee, department, employee},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::{info, instrument};

/// Inserts a department row. `manager_id` must name a manager that already exists and
/// does not head another department.
pub async fn insert_department<C>(
    db: &C,
    department_id: i32,
    name: &str,
    manager_id: Option<i32>,
) -> Result<department::Model>
where
    C: ConnectionTrait,
{
    let department = department::ActiveModel {
        department_id: Set(department_id),
        department_name: Set(name.to_string()),
        manager_id: Set(manager_id),
    };

    department.insert(db).await.map_err(Into::into)
}

/// Finds a department by primary key.
pub async fn get_department_by_id<C>(
    db: &C,
    department_id: i32,
) -> Result<Option<department::Model>>
where
    C: ConnectionTrait,
{
    Department::find_by_id(department_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Lists all departments ordered by id.
pub async fn get_all_departments<C>(db: &C) -> Result<Vec<department::Model>>
where
    C: ConnectionTrait,
{
    Department::find()
        .order_by_asc(department::Column::DepartmentId)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Deletes a department and all of its employees in one transaction.
///
/// Returns the number of employees removed.
///
/// # Errors
/// Returns [`Error::DepartmentNotFound`] if no department has `department_id`.
#[instrument(skip(db))]
pub async fn delete_department(db: &DatabaseConnection, department_id: i32) -> Result<u64> {
    let txn = db.begin().await?;

    Department::find_by_id(department_id)
        .one(&txn)
        .await?
        .ok_or(Error::DepartmentNotFound { id: department_id })?;

    let employees_removed = Employee::delete_many()
        .filter(employee::Column::DepartmentId.eq(department_id))
        .exec(&txn)
        .await?
        .rows_affected;

    Department::delete_by_id(department_id).exec(&txn).await?;

    txn.commit().await?;

    info!(employees_removed, "Department removed with its employees.");
    Ok(employees_removed)
}

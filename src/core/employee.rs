//! Employee data access.
//!
//! Employees are only created as children of a department; these helpers insert them
//! with the parent key already resolved and look them up afterwards.

use crate::{
    core::graph::EmployeeRecord,
    entities::{Employee, employee},
    errors::Result,
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Inserts one employee under `department_id` and returns the stored row with its
/// generated id.
pub async fn insert_employee<C>(
    db: &C,
    department_id: i32,
    record: &EmployeeRecord,
) -> Result<employee::Model>
where
    C: ConnectionTrait,
{
    let employee = employee::ActiveModel {
        last_name: Set(record.last_name.clone()),
        first_name: Set(record.first_name.clone()),
        ssn: Set(record.ssn.clone()),
        email: Set(record.email.clone()),
        department_id: Set(department_id),
        ..Default::default()
    };

    employee.insert(db).await.map_err(Into::into)
}

/// Lists a department's employees in insertion order.
pub async fn get_employees_for_department<C>(
    db: &C,
    department_id: i32,
) -> Result<Vec<employee::Model>>
where
    C: ConnectionTrait,
{
    Employee::find()
        .filter(employee::Column::DepartmentId.eq(department_id))
        .order_by_asc(employee::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds an employee by social security number.
pub async fn get_employee_by_ssn<C>(db: &C, ssn: &str) -> Result<Option<employee::Model>>
where
    C: ConnectionTrait,
{
    Employee::find()
        .filter(employee::Column::Ssn.eq(ssn))
        .one(db)
        .await
        .map_err(Into::into)
}

//! Department summary lookup.
//!
//! Gathers a department with its manager, the manager's budget and the employees into one
//! structure, mainly to verify what a seed run wrote.

use crate::{
    core::{budget, department, employee, manager},
    entities::{BudgetModel, DepartmentModel, EmployeeModel, ManagerModel},
    errors::{Error, Result},
};
use sea_orm::ConnectionTrait;

/// Everything stored for one department.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentSummary {
    /// The department row
    pub department: DepartmentModel,
    /// Heading manager, if the department has one
    pub manager: Option<ManagerModel>,
    /// The manager's budget lines ordered by resource category
    pub budget: Vec<BudgetModel>,
    /// Employees in insertion order
    pub employees: Vec<EmployeeModel>,
    /// Sum of all allocated budget amounts
    pub total_budget: i64,
}

/// Builds the summary for `department_id`.
///
/// # Errors
/// Returns [`Error::DepartmentNotFound`] if the department does not exist.
pub async fn department_summary<C>(db: &C, department_id: i32) -> Result<DepartmentSummary>
where
    C: ConnectionTrait,
{
    let department = department::get_department_by_id(db, department_id)
        .await?
        .ok_or(Error::DepartmentNotFound { id: department_id })?;

    let (manager, budget_lines) = match department.manager_id {
        Some(manager_id) => (
            manager::get_manager_by_id(db, manager_id).await?,
            budget::get_budget_for_manager(db, manager_id).await?,
        ),
        None => (None, Vec::new()),
    };

    let employees = employee::get_employees_for_department(db, department_id).await?;
    let total_budget = budget::total_money(&budget_lines);

    Ok(DepartmentSummary {
        department,
        manager,
        budget: budget_lines,
        employees,
        total_budget,
    })
}

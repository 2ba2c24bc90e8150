//! In-memory object graph handed to the persistence layer.
//!
//! The graph mirrors the ownership in the schema: a department carries its employees and
//! its manager, and the manager carries the budget lines. Foreign keys are implied by the
//! nesting, so callers never set `Department_ID` or `Manager_ID` on children.

use serde::Deserialize;

/// A department together with everything it owns.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DepartmentGraph {
    /// `Department_ID`
    pub id: i32,
    /// `Department_Name`
    pub name: String,
    /// Employees owned by the department
    #[serde(default)]
    pub employees: Vec<EmployeeRecord>,
    /// Heading manager, if any
    #[serde(default)]
    pub manager: Option<ManagerGraph>,
}

/// An employee before insertion; the surrogate id is assigned by the database.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmployeeRecord {
    /// Family name
    pub last_name: String,
    /// Given name
    pub first_name: String,
    /// Unique across all employees
    pub ssn: String,
    /// Unique across all employees
    pub email: String,
}

/// A manager and the budget lines they own.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ManagerGraph {
    /// `Manager_ID`
    pub id: i32,
    /// Family name
    pub last_name: String,
    /// Given name
    pub first_name: String,
    /// Budget lines, at most one per resource category
    #[serde(default)]
    pub budget: Vec<BudgetLine>,
}

/// One resource category of a manager's budget.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BudgetLine {
    /// Resource category, e.g. "Hiring"
    pub resources: String,
    /// Allocated amount
    pub money: Option<i32>,
}

impl DepartmentGraph {
    /// Starts a department with no employees and no manager.
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            employees: Vec::new(),
            manager: None,
        }
    }

    /// Adds an employee.
    #[must_use]
    pub fn with_employee(mut self, employee: EmployeeRecord) -> Self {
        self.employees.push(employee);
        self
    }

    /// Sets the heading manager.
    #[must_use]
    pub fn with_manager(mut self, manager: ManagerGraph) -> Self {
        self.manager = Some(manager);
        self
    }
}

impl EmployeeRecord {
    /// Builds an employee record from its four required fields.
    pub fn new(
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        ssn: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            last_name: last_name.into(),
            first_name: first_name.into(),
            ssn: ssn.into(),
            email: email.into(),
        }
    }
}

impl ManagerGraph {
    /// Starts a manager with an empty budget.
    pub fn new(id: i32, last_name: impl Into<String>, first_name: impl Into<String>) -> Self {
        Self {
            id,
            last_name: last_name.into(),
            first_name: first_name.into(),
            budget: Vec::new(),
        }
    }

    /// Adds a budget line for `resources`.
    #[must_use]
    pub fn with_budget(mut self, resources: impl Into<String>, money: i32) -> Self {
        self.budget.push(BudgetLine {
            resources: resources.into(),
            money: Some(money),
        });
        self
    }
}

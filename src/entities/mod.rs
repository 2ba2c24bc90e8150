//! Entity module - Contains the SeaORM entity definitions for the company schema.
//! Table and column names follow the persisted layout (`Table_Employee`, `Department_ID`, ...).
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod budget;
pub mod department;
pub mod employee;
pub mod manager;

// Re-export specific types to avoid conflicts
pub use budget::{Column as BudgetColumn, Entity as Budgets, Model as BudgetModel};
pub use department::{Column as DepartmentColumn, Entity as Department, Model as DepartmentModel};
pub use employee::{Column as EmployeeColumn, Entity as Employee, Model as EmployeeModel};
pub use manager::{Column as ManagerColumn, Entity as Manager, Model as ManagerModel};

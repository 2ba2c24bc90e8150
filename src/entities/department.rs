//! Department entity - Maps to `Table_Department`.
//!
//! A department owns its employees and is headed by at most one manager. The
//! `Manager_ID` column is unique, so one manager can never head two departments.

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::StringLen;
use serde::{Deserialize, Serialize};

/// Department database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Table_Department")]
pub struct Model {
    /// Caller-supplied identifier (e.g. 101 for HR)
    #[sea_orm(primary_key, auto_increment = false, column_name = "Department_ID")]
    pub department_id: i32,
    /// Display name (e.g. "HR")
    #[sea_orm(column_name = "Department_Name", column_type = "String(StringLen::N(20))")]
    pub department_name: String,
    /// Heading manager, if any
    #[sea_orm(column_name = "Manager_ID", unique)]
    pub manager_id: Option<i32>,
}

/// Defines relationships between Department and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One department has many employees
    #[sea_orm(has_many = "super::employee::Entity")]
    Employees,
    /// Each department is headed by at most one manager
    #[sea_orm(
        belongs_to = "super::manager::Entity",
        from = "Column::ManagerId",
        to = "super::manager::Column::ManagerId"
    )]
    Manager,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employees.def()
    }
}

impl Related<super::manager::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Manager.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

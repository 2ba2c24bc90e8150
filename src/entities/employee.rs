//! Employee entity - Maps to `Table_Employee`.
//!
//! Employees carry a surrogate auto-increment key and belong to exactly one department.
//! `SSN` and `Email` are unique across the whole table.

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::StringLen;
use serde::{Deserialize, Serialize};

/// Employee database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Table_Employee")]
pub struct Model {
    /// Surrogate identifier, generated by the database
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Family name
    #[sea_orm(column_name = "LastName", column_type = "String(StringLen::N(20))")]
    pub last_name: String,
    /// Given name
    #[sea_orm(column_name = "FirstName", column_type = "String(StringLen::N(20))")]
    pub first_name: String,
    /// Social security number, unique per employee
    #[sea_orm(column_name = "SSN", column_type = "String(StringLen::N(13))", unique)]
    pub ssn: String,
    /// Contact address, unique per employee
    #[sea_orm(column_name = "Email", column_type = "String(StringLen::N(30))", unique)]
    pub email: String,
    /// Owning department
    #[sea_orm(column_name = "Department_ID")]
    pub department_id: i32,
}

/// Defines relationships between Employee and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each employee belongs to one department
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::DepartmentId",
        to = "super::department::Column::DepartmentId"
    )]
    Department,
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

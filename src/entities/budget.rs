//! Budget entity - Maps to `Table_Budgets`.
//!
//! Each row is one resource category of one manager's budget. The primary key is the
//! composite (`Manager_ID`, `Resources`), so a manager has at most one line per category.

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::StringLen;
use serde::{Deserialize, Serialize};

/// Budget line database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Table_Budgets")]
pub struct Model {
    /// Owning manager
    #[sea_orm(primary_key, auto_increment = false, column_name = "Manager_ID")]
    pub manager_id: i32,
    /// Resource category (e.g. "Hiring", "Investments")
    #[sea_orm(
        primary_key,
        auto_increment = false,
        column_name = "Resources",
        column_type = "String(StringLen::N(20))"
    )]
    pub resources: String,
    /// Amount allocated to the category
    #[sea_orm(column_name = "Money")]
    pub money: Option<i32>,
}

/// Defines relationships between Budget and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each budget line belongs to one manager
    #[sea_orm(
        belongs_to = "super::manager::Entity",
        from = "Column::ManagerId",
        to = "super::manager::Column::ManagerId"
    )]
    Manager,
}

impl Related<super::manager::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Manager.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

//! Manager entity - Maps to `Table_Manager`.

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::StringLen;
use serde::{Deserialize, Serialize};

/// Manager database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Table_Manager")]
pub struct Model {
    /// Caller-supplied identifier (e.g. 100)
    #[sea_orm(primary_key, auto_increment = false, column_name = "Manager_ID")]
    pub manager_id: i32,
    /// Family name
    #[sea_orm(column_name = "LastName", column_type = "String(StringLen::N(20))")]
    pub last_name: String,
    /// Given name
    #[sea_orm(column_name = "FirstName", column_type = "String(StringLen::N(20))")]
    pub first_name: String,
}

/// Defines relationships between Manager and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// A manager heads at most one department
    #[sea_orm(has_one = "super::department::Entity")]
    Department,
    /// One manager owns many budget lines
    #[sea_orm(has_many = "super::budget::Entity")]
    Budgets,
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::budget::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Budgets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

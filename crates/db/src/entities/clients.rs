//! `SeaORM` Entity for clients table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "clients")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "String(StringLen::N(9))")]
    pub dni: String,
    #[sea_orm(column_type = "String(StringLen::N(60))")]
    pub name: String,
    #[sea_orm(column_type = "String(StringLen::N(60))", unique)]
    pub email: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub requested_capital: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::mortgages::Entity")]
    Mortgages,
}

impl Related<super::mortgages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mortgages.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "widget")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// UTF-8 string, limited to 64 characters.
    pub name: String,
    pub number_of_parts: i32,

    pub created_date: DateTimeUtc,
    pub updated_date: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A stored painting. Identity is assigned by the service layer on insert;
/// every other column is nullable. The tag list lives in `techniques` as a
/// JSON-encoded array so insertion order and duplicates survive storage.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "paintings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: Option<String>,
    pub url: Option<String>,
    pub techniques: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

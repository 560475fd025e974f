use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::phone;

/// Group label applied when a contact is saved without one.
pub const DEFAULT_GROUP: &str = "default";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contact")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub birth_date: Option<String>,
    pub group: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Phone,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Phone => Entity::has_many(phone::Entity).into() }
    }
}

impl Related<phone::Entity> for Entity {
    fn to() -> RelationDef { Relation::Phone.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.is_empty() { return Err(errors::ModelError::Validation("name required".into())); }
    Ok(())
}

/// Empty or missing groups collapse to [`DEFAULT_GROUP`].
pub fn normalize_group(group: Option<&str>) -> String {
    match group {
        Some(g) if !g.is_empty() => g.to_string(),
        _ => DEFAULT_GROUP.to_string(),
    }
}

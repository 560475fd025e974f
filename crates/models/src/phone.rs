use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::contact;
use crate::errors;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "phone")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub number: String,
    pub contact_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Contact,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Contact => Entity::belongs_to(contact::Entity)
                .from(Column::ContactId)
                .to(contact::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl Related<contact::Entity> for Entity {
    fn to() -> RelationDef { Relation::Contact.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_number(number: &str) -> Result<(), errors::ModelError> {
    if number.is_empty() { return Err(errors::ModelError::Validation("phone number required".into())); }
    Ok(())
}

/// Insert one row per number, in order, owned by `contact_id`.
pub async fn insert_all<C: ConnectionTrait>(conn: &C, contact_id: i32, numbers: &[String]) -> Result<(), errors::ModelError> {
    if numbers.is_empty() { return Ok(()); }
    let rows = numbers.iter().map(|n| ActiveModel {
        number: Set(n.clone()),
        contact_id: Set(contact_id),
        ..Default::default()
    });
    Entity::insert_many(rows).exec(conn).await?;
    Ok(())
}

/// Remove every phone owned by `contact_id`; returns the number of rows deleted.
pub async fn delete_for_contact<C: ConnectionTrait>(conn: &C, contact_id: i32) -> Result<u64, errors::ModelError> {
    let res = Entity::delete_many()
        .filter(Column::ContactId.eq(contact_id))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}

/// Replace the full phone set of a contact.
pub async fn replace_for_contact<C: ConnectionTrait>(conn: &C, contact_id: i32, numbers: &[String]) -> Result<(), errors::ModelError> {
    delete_for_contact(conn, contact_id).await?;
    insert_all(conn, contact_id, numbers).await
}

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, ModelTrait, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};
use tracing::{debug, warn};

use models::{contact, phone};

use crate::contacts::domain::{Contact, ContactFields};
use crate::contacts::repository::ContactRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository; each mutation runs in its own transaction.
pub struct SeaOrmContactRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmContactRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    /// Commit on success, roll back on failure, and hand back the body's result.
    async fn finish<T>(txn: DatabaseTransaction, op: &'static str, res: Result<T, ServiceError>) -> Result<T, ServiceError> {
        match res {
            Ok(v) => {
                txn.commit().await?;
                Ok(v)
            }
            Err(e) => {
                if let Err(rb) = txn.rollback().await {
                    warn!(op, error = %rb, "rollback failed");
                }
                debug!(op, error = %e, "transaction rolled back");
                Err(e)
            }
        }
    }
}

fn to_domain(c: contact::Model, phones: Vec<String>) -> Contact {
    Contact {
        id: c.id,
        name: c.name,
        email: c.email,
        address: c.address,
        birth_date: c.birth_date,
        group: c.group,
        phones,
    }
}

fn apply_fields(am: &mut contact::ActiveModel, fields: &ContactFields) {
    am.name = Set(fields.name.clone());
    am.email = Set(fields.email.clone());
    am.address = Set(fields.address.clone());
    am.birth_date = Set(fields.birth_date.clone());
    am.group = Set(fields.group.clone());
}

async fn create_rows(txn: &DatabaseTransaction, fields: &ContactFields) -> Result<i32, ServiceError> {
    let mut am = <contact::ActiveModel as Default>::default();
    apply_fields(&mut am, fields);
    let created = am.insert(txn).await?;
    phone::insert_all(txn, created.id, &fields.phones).await?;
    Ok(created.id)
}

async fn update_rows(txn: &DatabaseTransaction, id: i32, fields: &ContactFields) -> Result<bool, ServiceError> {
    let Some(found) = contact::Entity::find_by_id(id).one(txn).await? else { return Ok(false) };
    let mut am: contact::ActiveModel = found.into();
    apply_fields(&mut am, fields);
    am.update(txn).await?;
    phone::replace_for_contact(txn, id, &fields.phones).await?;
    Ok(true)
}

async fn delete_rows(txn: &DatabaseTransaction, id: i32) -> Result<bool, ServiceError> {
    if contact::Entity::find_by_id(id).one(txn).await?.is_none() {
        return Ok(false);
    }
    // Explicit so no orphan survives even with the foreign_keys pragma off.
    phone::delete_for_contact(txn, id).await?;
    contact::Entity::delete_by_id(id).exec(txn).await?;
    Ok(true)
}

#[async_trait::async_trait]
impl ContactRepository for SeaOrmContactRepository {
    async fn list(&self) -> Result<Vec<Contact>, ServiceError> {
        let contacts = contact::Entity::find()
            .order_by_asc(contact::Column::Id)
            .all(&self.db)
            .await?;
        let mut phones_by_contact: HashMap<i32, Vec<String>> = HashMap::new();
        for p in phone::Entity::find().order_by_asc(phone::Column::Id).all(&self.db).await? {
            phones_by_contact.entry(p.contact_id).or_default().push(p.number);
        }
        Ok(contacts
            .into_iter()
            .map(|c| {
                let phones = phones_by_contact.remove(&c.id).unwrap_or_default();
                to_domain(c, phones)
            })
            .collect())
    }

    async fn get(&self, id: i32) -> Result<Option<Contact>, ServiceError> {
        let Some(found) = contact::Entity::find_by_id(id).one(&self.db).await? else { return Ok(None) };
        let phones = found
            .find_related(phone::Entity)
            .order_by_asc(phone::Column::Id)
            .all(&self.db)
            .await?
            .into_iter()
            .map(|p| p.number)
            .collect();
        Ok(Some(to_domain(found, phones)))
    }

    async fn create(&self, fields: &ContactFields) -> Result<i32, ServiceError> {
        let txn = self.db.begin().await?;
        let res = create_rows(&txn, fields).await;
        Self::finish(txn, "create_contact", res).await
    }

    async fn update(&self, id: i32, fields: &ContactFields) -> Result<bool, ServiceError> {
        let txn = self.db.begin().await?;
        let res = update_rows(&txn, id, fields).await;
        Self::finish(txn, "update_contact", res).await
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let txn = self.db.begin().await?;
        let res = delete_rows(&txn, id).await;
        Self::finish(txn, "delete_contact", res).await
    }

    async fn distinct_groups(&self) -> Result<Vec<String>, ServiceError> {
        let groups: Vec<Option<String>> = contact::Entity::find()
            .select_only()
            .column(contact::Column::Group)
            .distinct()
            .order_by_asc(contact::Column::Group)
            .into_tuple()
            .all(&self.db)
            .await?;
        Ok(groups.into_iter().flatten().filter(|g| !g.is_empty()).collect())
    }
}

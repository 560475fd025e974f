use async_trait::async_trait;

use super::domain::{Contact, ContactFields};
use crate::errors::ServiceError;

/// Persistence abstraction for contacts and their owned phone numbers.
///
/// Mutations are atomic: either the contact row and its complete phone set
/// are written, or nothing is.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Contact>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<Contact>, ServiceError>;
    async fn create(&self, fields: &ContactFields) -> Result<i32, ServiceError>;
    /// Replace every scalar field and the whole phone set. `Ok(false)` when `id` is unknown.
    async fn update(&self, id: i32, fields: &ContactFields) -> Result<bool, ServiceError>;
    /// `Ok(false)` when `id` is unknown.
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
    /// Every unique non-empty group label. Order is not guaranteed.
    async fn distinct_groups(&self) -> Result<Vec<String>, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct InMemoryContactRepository {
        inner: Mutex<State>,
    }

    #[derive(Default)]
    struct State {
        next_id: i32,
        contacts: BTreeMap<i32, Contact>,
    }

    fn to_contact(id: i32, fields: &ContactFields) -> Contact {
        Contact {
            id,
            name: fields.name.clone(),
            email: fields.email.clone(),
            address: fields.address.clone(),
            birth_date: fields.birth_date.clone(),
            group: fields.group.clone(),
            phones: fields.phones.clone(),
        }
    }

    impl InMemoryContactRepository {
        fn state(&self) -> Result<std::sync::MutexGuard<'_, State>, ServiceError> {
            self.inner.lock().map_err(|_| ServiceError::Db("in-memory store poisoned".into()))
        }
    }

    #[async_trait]
    impl ContactRepository for InMemoryContactRepository {
        async fn list(&self) -> Result<Vec<Contact>, ServiceError> {
            Ok(self.state()?.contacts.values().cloned().collect())
        }

        async fn get(&self, id: i32) -> Result<Option<Contact>, ServiceError> {
            Ok(self.state()?.contacts.get(&id).cloned())
        }

        async fn create(&self, fields: &ContactFields) -> Result<i32, ServiceError> {
            let mut st = self.state()?;
            st.next_id += 1;
            let id = st.next_id;
            st.contacts.insert(id, to_contact(id, fields));
            Ok(id)
        }

        async fn update(&self, id: i32, fields: &ContactFields) -> Result<bool, ServiceError> {
            let mut st = self.state()?;
            match st.contacts.get_mut(&id) {
                Some(c) => { *c = to_contact(id, fields); Ok(true) }
                None => Ok(false),
            }
        }

        async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
            Ok(self.state()?.contacts.remove(&id).is_some())
        }

        async fn distinct_groups(&self) -> Result<Vec<String>, ServiceError> {
            let st = self.state()?;
            let mut groups: Vec<String> = st
                .contacts
                .values()
                .map(|c| c.group.clone())
                .filter(|g| !g.is_empty())
                .collect();
            groups.sort();
            groups.dedup();
            Ok(groups)
        }
    }
}

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tracing::{info, instrument};

use super::birthdays;
use super::domain::{Contact, ContactInput, UpcomingBirthday};
use super::repository::ContactRepository;
use crate::errors::ServiceError;

/// Contact directory business service independent of web framework.
///
/// Validation happens here, before any store mutation; the repository only
/// ever sees complete [`ContactFields`](super::domain::ContactFields).
pub struct ContactService<R: ContactRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: ContactRepository + ?Sized> ContactService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<Contact>, ServiceError> { self.repo.list().await }

    pub async fn get(&self, id: i32) -> Result<Contact, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found("contact"))
    }

    /// Create a contact together with its phone numbers.
    ///
    /// # Examples
    /// ```
    /// use service::contacts::{ContactService, domain::ContactInput, repository::mock::InMemoryContactRepository};
    /// use std::sync::Arc;
    /// let svc = ContactService::new(Arc::new(InMemoryContactRepository::default()));
    /// let input = ContactInput { name: Some("Ada".into()), phones: Some(vec!["555-0100".into()]), ..Default::default() };
    /// let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
    /// let id = rt.block_on(svc.create(input)).unwrap();
    /// let contact = rt.block_on(svc.get(id)).unwrap();
    /// assert_eq!(contact.group, "default");
    /// ```
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: ContactInput) -> Result<i32, ServiceError> {
        let fields = input.validate()?;
        let id = self.repo.create(&fields).await?;
        info!(contact_id = id, phones = fields.phones.len(), "contact_created");
        Ok(id)
    }

    /// Replace all fields and the full phone set of an existing contact.
    /// Unknown ids are reported before payload problems.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: ContactInput) -> Result<(), ServiceError> {
        if self.repo.get(id).await?.is_none() {
            return Err(ServiceError::not_found("contact"));
        }
        let fields = input.validate()?;
        if !self.repo.update(id, &fields).await? {
            return Err(ServiceError::not_found("contact"));
        }
        info!(contact_id = id, phones = fields.phones.len(), "contact_updated");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("contact"));
        }
        info!(contact_id = id, "contact_deleted");
        Ok(())
    }

    pub async fn groups(&self) -> Result<Vec<String>, ServiceError> {
        let mut groups = self.repo.distinct_groups().await?;
        groups.retain(|g| !g.is_empty());
        groups.sort();
        groups.dedup();
        Ok(groups)
    }

    /// Upcoming birthdays relative to the local calendar date.
    pub async fn upcoming_birthdays(&self) -> Result<Vec<UpcomingBirthday>, ServiceError> {
        self.upcoming_birthdays_on(Local::now().date_naive()).await
    }

    pub async fn upcoming_birthdays_on(&self, today: NaiveDate) -> Result<Vec<UpcomingBirthday>, ServiceError> {
        let contacts = self.repo.list().await?;
        Ok(birthdays::upcoming_birthdays(&contacts, today))
    }
}

use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

pub const REQUIRED_FIELDS_MESSAGE: &str = "name and phones are required";

/// Contact with its phone numbers (business view).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub birth_date: Option<String>,
    pub group: String,
    pub phones: Vec<String>,
}

/// Create/update payload as received; every field may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub birth_date: Option<String>,
    pub group: Option<String>,
    pub phones: Option<Vec<String>>,
}

/// Validated scalar fields plus the full phone set to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub birth_date: Option<String>,
    pub group: String,
    pub phones: Vec<String>,
}

impl ContactInput {
    /// Check required fields and apply the group default.
    pub fn validate(self) -> Result<ContactFields, ServiceError> {
        let name = match self.name {
            Some(n) if models::contact::validate_name(&n).is_ok() => n,
            _ => return Err(ServiceError::Validation(REQUIRED_FIELDS_MESSAGE.into())),
        };
        let phones = match self.phones {
            Some(p) if !p.is_empty() => p,
            _ => return Err(ServiceError::Validation(REQUIRED_FIELDS_MESSAGE.into())),
        };
        if phones.iter().any(|n| models::phone::validate_number(n).is_err()) {
            return Err(ServiceError::Validation("phone numbers must not be empty".into()));
        }
        Ok(ContactFields {
            name,
            email: self.email,
            address: self.address,
            birth_date: self.birth_date,
            group: models::contact::normalize_group(self.group.as_deref()),
            phones,
        })
    }
}

/// Entry of the upcoming-birthdays view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingBirthday {
    pub id: i32,
    pub name: String,
    pub birth_date: String,
    pub phones: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: Option<&str>, phones: Option<Vec<&str>>) -> ContactInput {
        ContactInput {
            name: name.map(Into::into),
            phones: phones.map(|p| p.into_iter().map(Into::into).collect()),
            ..Default::default()
        }
    }

    #[test]
    fn requires_name_and_phones() {
        for bad in [
            input(None, Some(vec!["1"])),
            input(Some(""), Some(vec!["1"])),
            input(Some("Ann"), None),
            input(Some("Ann"), Some(vec![])),
        ] {
            match bad.validate() {
                Err(ServiceError::Validation(msg)) => assert_eq!(msg, REQUIRED_FIELDS_MESSAGE),
                other => panic!("expected validation error, got {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_empty_phone_entries() {
        let err = input(Some("Ann"), Some(vec!["1", ""])).validate().unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn whitespace_values_are_kept_as_given() {
        let mut i = input(Some(" "), Some(vec![" "]));
        i.group = Some(" ".into());
        let f = i.validate().unwrap();
        assert_eq!(f.name, " ");
        assert_eq!(f.phones, vec![" "]);
        assert_eq!(f.group, " ");

        let mut i = input(Some("Ann"), Some(vec!["1"]));
        i.group = Some(String::new());
        assert_eq!(i.validate().unwrap().group, models::contact::DEFAULT_GROUP);
    }

    #[test]
    fn applies_default_group_and_keeps_optional_fields() {
        let mut i = input(Some("Ann"), Some(vec!["1", "2"]));
        i.email = Some("ann@example.com".into());
        i.birth_date = Some("not-a-date".into());
        let f = i.validate().unwrap();
        assert_eq!(f.group, models::contact::DEFAULT_GROUP);
        assert_eq!(f.email.as_deref(), Some("ann@example.com"));
        assert_eq!(f.birth_date.as_deref(), Some("not-a-date"));
        assert_eq!(f.address, None);
        assert_eq!(f.phones, vec!["1", "2"]);
    }

    #[test]
    fn deserializes_partial_payload() {
        let i: ContactInput = serde_json::from_str(r#"{"name":"Ann","group":null}"#).unwrap();
        assert_eq!(i.name.as_deref(), Some("Ann"));
        assert!(i.phones.is_none());
        assert!(i.group.is_none());
    }
}

//! Service layer providing the contact directory operations on top of models.
//! - Separates business logic (validation, birthday window) from data access.
//! - Reuses entity definitions and validators in the `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod contacts;
#[cfg(test)]
pub mod test_support;

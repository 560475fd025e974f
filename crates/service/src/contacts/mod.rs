//! Contacts module: three-layer architecture (domain, repository, service),
//! plus the pure upcoming-birthday computation.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;
pub mod birthdays;

pub use service::ContactService;

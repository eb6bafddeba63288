pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::*;
pub use domain::errors::{DomainError, DomainResult, ErrorKind, Outcome};

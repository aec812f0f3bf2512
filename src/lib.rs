//! Contact Book - an interactive console contact manager.
//!
//! Keeps an in-memory, insertion-ordered list of contacts (name, phone,
//! email) with field validation, phone/email uniqueness and a fixed
//! capacity. Nothing is persisted.
//!
//! # Architecture
//!
//! - **domain**: Field validators and validated value objects
//! - **models**: The `Contact` record
//! - **repositories**: The contact store and its trait
//! - **shell**: The interactive menu loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **metrics**: Per-session counters

pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod repositories;
pub mod shell;

pub use config::Config;
pub use domain::{is_valid_email, is_valid_name, is_valid_phone_number, ValidationError};
pub use error::{ConfigError, ContactError, MenuError};
pub use metrics::{MetricsSummary, SessionMetrics};
pub use models::Contact;
pub use repositories::{ContactRepository, ContactStore};
pub use shell::{MenuChoice, Shell};

//! Core types for bankdash
//!
//! Session flag, route guard decision, the bank details record and the
//! dashboard datasets derived from it. Shared by the HTTP server and the CLI.

pub mod auth;
pub mod bank_details;
pub mod charts;
pub mod constants;
mod env_config;
mod error;
pub mod guard;
pub mod local_store;
pub mod record_store;
pub mod session;

pub use auth::{AuthConfig, LoginRequest};
pub use bank_details::{BankDetails, StoredBankDetails};
pub use charts::DashboardView;
pub use env_config::*;
pub use error::*;
pub use guard::{GuardDecision, PathClass};
pub use local_store::{JsonFileStore, LocalStore, MemoryStore};
pub use record_store::RecordStore;
pub use session::SessionCookie;

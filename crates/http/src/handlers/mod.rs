#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]

pub mod auth;
pub mod bank_details;
pub mod dashboard;

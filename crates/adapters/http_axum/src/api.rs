//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod metrics;
#[allow(clippy::missing_errors_doc)]
pub mod readings;
#[allow(clippy::missing_errors_doc)]
pub mod valve;

//! # flowgate-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **storage port** that adapters must implement:
//!   - `ReadingRepository` — append & query the readings log
//! - Define **driving/inbound ports** as use-case structs:
//!   - `ReadingService` — ingest device samples
//!   - `UsageService` — windowed usage metrics and recent history
//! - Provide **in-process infrastructure** that doesn't need IO:
//!   - `ValveRelay` — the shared operator valve command
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `flowgate-domain` only (plus `tokio::sync` for locking).
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod ports;
pub mod services;
pub mod valve_relay;

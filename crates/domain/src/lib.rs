//! # flowgate-domain
//!
//! Pure domain model for the flowgate water metering system.
//!
//! ## Responsibilities
//! - Foundational types: identifiers, error conventions, timestamps
//! - Define **Readings** (immutable flow samples reported by the device)
//! - Define **Valve commands** (operator-issued desired valve position)
//! - Define **Usage summaries** (volume deltas over reporting windows)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod reading;
pub mod time;
pub mod usage;
pub mod valve;

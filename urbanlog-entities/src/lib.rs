#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # urbanlog-entities
//!
//! Reusable, agnostic domain entities for UrbanLog.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod category;
pub mod email;
pub mod geo;
pub mod id;
pub mod nonce;
pub mod request;
pub mod session;
pub mod time;
pub mod urgency;
pub mod user;
pub mod vote;

#[cfg(any(test, feature = "builders"))]
pub mod builders;

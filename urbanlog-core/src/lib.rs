//! # urbanlog-core
//!
//! Business logic of UrbanLog: repository and gateway traits together with
//! the use cases that operate on them. Storage backends and application
//! flows live in separate crates.

pub mod bbox;
pub mod db;
pub mod gateways;
pub mod repositories;
pub mod tally;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use urbanlog_entities::{
        category::*, email::*, geo::*, id::*, nonce::*, request::*, session::*, time::*,
        urgency::*, user::*, vote::*,
    };
}

//! # urbanlog-app
//!
//! Application flows of UrbanLog together with the client-side state
//! holders: session context, viewport controller, and request composer.
//! Each flow file wires one user interaction to the use cases and the
//! SQLite store.

#[macro_use]
extern crate log;

mod cast_vote;
mod create_request;
mod delete_request;
mod login;
mod query_visible;
mod update_request;

pub mod composer;
pub mod error;
pub mod session;
pub mod viewport;

pub mod prelude {
    pub use super::{
        cast_vote::*, create_request::*, delete_request::*, login::*, query_visible::*,
        update_request::*,
    };
}

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use urbanlog_core::{entities::*, usecases};

pub(crate) use crate::error::AppError;

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use urbanlog_db_sqlite::Connections;
}

mod cast_vote;
mod create_request;
mod delete_request;
mod error;
mod login;
mod query_requests;
mod update_request;

#[cfg(test)]
pub mod tests;

pub use self::{
    cast_vote::*, create_request::*, delete_request::*, error::Error, login::*, query_requests::*,
    update_request::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        db::*,
        entities::*,
        repositories::{Error as RepoError, *},
    };
}

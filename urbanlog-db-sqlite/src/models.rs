// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use urbanlog_core::entities::{EmailAddress, Request, Timestamp, User, Vote};

use super::schema::*;

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = requests)]
pub struct NewRequest<'a> {
    pub id: &'a str,
    pub created_by: &'a str,
    pub lat: f64,
    pub lng: f64,
    pub category: String,
    pub subcategory: &'a str,
    pub urgency: String,
    pub notes: &'a str,
    pub created_at: i64,
}

impl<'a> From<&'a Request> for NewRequest<'a> {
    fn from(from: &'a Request) -> Self {
        let (lat, lng) = from.pos.to_lat_lng_deg();
        Self {
            id: from.id.as_str(),
            created_by: from.created_by.as_str(),
            lat,
            lng,
            category: from.category.to_string(),
            subcategory: &from.subcategory,
            urgency: from.urgency.to_string(),
            notes: &from.notes,
            created_at: from.created_at.as_millis(),
        }
    }
}

#[derive(Queryable)]
pub struct RequestEntity {
    pub id: String,
    pub created_by: String,
    pub lat: f64,
    pub lng: f64,
    pub category: String,
    pub subcategory: String,
    pub urgency: String,
    pub notes: String,
    pub created_at: i64,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = votes)]
pub struct NewVote<'a> {
    pub id: &'a str,
    pub request_id: &'a str,
    pub user_id: &'a str,
    pub vote_type: String,
}

impl<'a> From<&'a Vote> for NewVote<'a> {
    fn from(from: &'a Vote) -> Self {
        Self {
            id: from.id.as_str(),
            request_id: from.request_id.as_str(),
            user_id: from.user_id.as_str(),
            vote_type: from.vote_type.to_string(),
        }
    }
}

#[derive(Queryable)]
pub struct VoteEntity {
    pub id: String,
    pub request_id: String,
    pub user_id: String,
    pub vote_type: String,
}

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub id: &'a str,
    pub email: String,
    pub created_at: i64,
}

impl<'a> From<&'a User> for NewUser<'a> {
    fn from(from: &'a User) -> Self {
        Self {
            id: from.id.as_str(),
            email: from.email.as_str().to_owned(),
            created_at: from.created_at.as_millis(),
        }
    }
}

#[derive(Queryable)]
pub struct UserEntity {
    pub id: String,
    pub email: String,
    pub created_at: i64,
}

impl From<UserEntity> for User {
    fn from(from: UserEntity) -> Self {
        let UserEntity {
            id,
            email,
            created_at,
        } = from;
        Self {
            id: id.into(),
            // Validated when the row was written.
            email: EmailAddress::new_unchecked(email),
            created_at: Timestamp::from_millis(created_at),
        }
    }
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = user_tokens)]
pub struct NewUserToken<'a> {
    pub email: &'a str,
    pub nonce: String,
    pub expires_at: i64,
}

#[derive(Queryable)]
pub struct UserTokenEntity {
    pub email: String,
    pub nonce: String,
    pub expires_at: i64,
}

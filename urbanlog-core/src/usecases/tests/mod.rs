use std::cell::RefCell;

use super::prelude::*;
use crate::bbox::InBbox;

type RepoResult<T> = std::result::Result<T, RepoError>;

/// In-memory stand-in for the persistent store, shared by the use case
/// tests. Mirrors the store's constraints where the use cases rely on
/// them, most notably one vote per (request, user) pair and the vote
/// cascade on request deletion.
#[derive(Debug, Default)]
pub struct MockDb {
    pub requests: RefCell<Vec<Request>>,
    pub votes: RefCell<Vec<Vote>>,
    pub users: RefCell<Vec<User>>,
    pub login_tokens: RefCell<Vec<LoginToken>>,
}

impl RequestRepo for MockDb {
    fn create_request(&self, request: Request) -> RepoResult<()> {
        let mut requests = self.requests.borrow_mut();
        if requests.iter().any(|r| r.id == request.id) {
            return Err(RepoError::AlreadyExists);
        }
        requests.push(request);
        Ok(())
    }

    fn get_request(&self, id: &str) -> RepoResult<Request> {
        self.requests
            .borrow()
            .iter()
            .find(|r| r.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn requests_in_bbox(&self, bbox: &MapBbox) -> RepoResult<Vec<Request>> {
        Ok(self
            .requests
            .borrow()
            .iter()
            .filter(|r| r.in_bbox(bbox))
            .cloned()
            .collect())
    }

    fn update_request(&self, request: &Request) -> RepoResult<()> {
        let mut requests = self.requests.borrow_mut();
        let existing = requests
            .iter_mut()
            .find(|r| r.id == request.id)
            .ok_or(RepoError::NotFound)?;
        *existing = request.clone();
        Ok(())
    }

    fn delete_request(&self, id: &str) -> RepoResult<()> {
        let mut requests = self.requests.borrow_mut();
        let index = requests
            .iter()
            .position(|r| r.id.as_str() == id)
            .ok_or(RepoError::NotFound)?;
        requests.remove(index);
        self.votes
            .borrow_mut()
            .retain(|v| v.request_id.as_str() != id);
        Ok(())
    }

    fn count_requests(&self) -> RepoResult<usize> {
        Ok(self.requests.borrow().len())
    }
}

impl VoteRepo for MockDb {
    fn create_vote(&self, vote: Vote) -> RepoResult<()> {
        let mut votes = self.votes.borrow_mut();
        if votes
            .iter()
            .any(|v| v.request_id == vote.request_id && v.user_id == vote.user_id)
        {
            return Err(RepoError::AlreadyExists);
        }
        votes.push(vote);
        Ok(())
    }

    fn update_vote(&self, vote: &Vote) -> RepoResult<()> {
        let mut votes = self.votes.borrow_mut();
        let existing = votes
            .iter_mut()
            .find(|v| v.id == vote.id)
            .ok_or(RepoError::NotFound)?;
        *existing = vote.clone();
        Ok(())
    }

    fn delete_vote(&self, id: &str) -> RepoResult<()> {
        let mut votes = self.votes.borrow_mut();
        let index = votes
            .iter()
            .position(|v| v.id.as_str() == id)
            .ok_or(RepoError::NotFound)?;
        votes.remove(index);
        Ok(())
    }

    fn get_vote(&self, request_id: &str, user_id: &str) -> RepoResult<Option<Vote>> {
        Ok(self
            .votes
            .borrow()
            .iter()
            .find(|v| v.request_id.as_str() == request_id && v.user_id.as_str() == user_id)
            .cloned())
    }

    fn load_votes_of_requests(&self, request_ids: &[&str]) -> RepoResult<Vec<Vote>> {
        Ok(self
            .votes
            .borrow()
            .iter()
            .filter(|v| request_ids.contains(&v.request_id.as_str()))
            .cloned()
            .collect())
    }

    fn load_votes_of_user(&self, user_id: &str, request_ids: &[&str]) -> RepoResult<Vec<Vote>> {
        Ok(self
            .votes
            .borrow()
            .iter()
            .filter(|v| {
                v.user_id.as_str() == user_id && request_ids.contains(&v.request_id.as_str())
            })
            .cloned()
            .collect())
    }
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &User) -> RepoResult<()> {
        let mut users = self.users.borrow_mut();
        if users.iter().any(|u| u.email == user.email) {
            return Err(RepoError::AlreadyExists);
        }
        users.push(user.clone());
        Ok(())
    }

    fn get_user_by_email(&self, email: &EmailAddress) -> RepoResult<User> {
        self.try_get_user_by_email(email)?.ok_or(RepoError::NotFound)
    }

    fn try_get_user_by_email(&self, email: &EmailAddress) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| u.email == *email)
            .cloned())
    }

    fn count_users(&self) -> RepoResult<usize> {
        Ok(self.users.borrow().len())
    }
}

impl UserTokenRepo for MockDb {
    fn replace_login_token(&self, token: LoginToken) -> RepoResult<EmailNonce> {
        let mut tokens = self.login_tokens.borrow_mut();
        tokens.retain(|t| t.email_nonce.email != token.email_nonce.email);
        let email_nonce = token.email_nonce.clone();
        tokens.push(token);
        Ok(email_nonce)
    }

    fn consume_login_token(&self, email_nonce: &EmailNonce) -> RepoResult<LoginToken> {
        let mut tokens = self.login_tokens.borrow_mut();
        let index = tokens
            .iter()
            .position(|t| t.email_nonce == *email_nonce)
            .ok_or(RepoError::NotFound)?;
        Ok(tokens.remove(index))
    }

    fn delete_expired_login_tokens(&self, expired_before: Timestamp) -> RepoResult<usize> {
        let mut tokens = self.login_tokens.borrow_mut();
        let count_before = tokens.len();
        tokens.retain(|t| t.expires_at >= expired_before);
        Ok(count_before - tokens.len())
    }
}

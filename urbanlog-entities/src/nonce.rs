use std::{fmt, str::FromStr};

use thiserror::Error;
use uuid::Uuid;

use crate::time::Timestamp;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Nonce(Uuid);

impl Nonce {
    pub const STR_LEN: usize = 32;

    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for Nonce {
    fn from(from: Uuid) -> Self {
        Self(from)
    }
}

#[derive(Debug, Error)]
#[error("Invalid nonce")]
pub struct NonceParseError;

impl FromStr for Nonce {
    type Err = NonceParseError;

    fn from_str(nonce_str: &str) -> Result<Self, Self::Err> {
        nonce_str
            .parse::<Uuid>()
            .map(Into::into)
            .map_err(|_| NonceParseError)
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0.as_simple())
    }
}

/// The payload of a sign-in link: the requesting e-mail address together
/// with a one-time nonce.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct EmailNonce {
    pub email: String,
    pub nonce: Nonce,
}

#[derive(Debug, Error)]
pub enum EmailNonceDecodingError {
    #[error(transparent)]
    Bs58(#[from] bs58::decode::Error),
    #[error(transparent)]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("Encoded token too short: {0}")]
    TooShort(usize),
    #[error("Invalid nonce: {0}")]
    Parse(String),
}

impl EmailNonce {
    pub fn encode_to_string(&self) -> String {
        let nonce = self.nonce.to_string();
        debug_assert_eq!(Nonce::STR_LEN, nonce.len());
        let mut concat = String::with_capacity(self.email.len() + nonce.len());
        concat += &self.email;
        concat += &nonce;
        bs58::encode(concat).into_string()
    }

    pub fn decode_from_str(encoded: &str) -> Result<EmailNonce, EmailNonceDecodingError> {
        let decoded = bs58::decode(encoded).into_vec()?;
        let mut concat = String::from_utf8(decoded)?;
        if concat.len() < Nonce::STR_LEN {
            return Err(EmailNonceDecodingError::TooShort(concat.len()));
        }
        let email_len = concat.len() - Nonce::STR_LEN;
        // The split offset is a byte count and must not land inside a
        // multibyte character of an untrusted token.
        let nonce_slice: &str = concat
            .get(email_len..)
            .ok_or_else(|| EmailNonceDecodingError::Parse(encoded.into()))?;
        let nonce = nonce_slice
            .parse::<Nonce>()
            .map_err(|_| EmailNonceDecodingError::Parse(nonce_slice.into()))?;
        concat.truncate(email_len);
        let email = concat;
        Ok(Self { email, nonce })
    }
}

/// A pending sign-in token, one per e-mail address.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LoginToken {
    pub email_nonce: EmailNonce,
    pub expires_at: Timestamp,
}

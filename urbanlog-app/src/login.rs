use urbanlog_core::gateways::email::EmailGateway;

use super::*;

/// Issues a sign-in token for the given address and mails the link.
///
/// Returns the nonce so that callers (and tests) do not have to parse
/// the outgoing message.
pub fn request_login_link(
    connections: &sqlite::Connections,
    email_gateway: &dyn EmailGateway,
    email: &str,
) -> Result<EmailNonce> {
    let email: EmailAddress = email
        .parse()
        .map_err(|_| AppError::Auth(usecases::Error::Email))?;
    let email_nonce = connections
        .exclusive()?
        .transaction(|conn| usecases::request_login_link(conn, email.clone()))
        .map_err(|err| {
            warn!("Failed to issue sign-in link: {err}");
            AppError::Auth(err)
        })?;
    email_gateway.compose_and_send(
        &[email],
        &login_email_content(&email_nonce.encode_to_string()),
    );
    Ok(email_nonce)
}

/// Redeems the token from a sign-in link and opens a session.
pub fn login_with_token(connections: &sqlite::Connections, encoded_token: &str) -> Result<Session> {
    let session = connections
        .exclusive()?
        .transaction(|conn| usecases::consume_login_token(conn, encoded_token))
        .map_err(|err| {
            warn!("Sign-in with token failed: {err}");
            AppError::Auth(err)
        })?;
    info!("User {} signed in", session.user_id);
    Ok(session)
}

/// Periodic maintenance: drops sign-in tokens past their expiry.
pub fn sweep_expired_login_tokens(connections: &sqlite::Connections) -> Result<usize> {
    let count = connections
        .exclusive()?
        .transaction(|conn| usecases::delete_expired_login_tokens(conn))
        .map_err(AppError::Auth)?;
    if count > 0 {
        info!("Deleted {count} expired sign-in tokens");
    }
    Ok(count)
}

fn login_email_content(encoded_token: &str) -> EmailContent {
    let subject = "Your UrbanLog sign-in link".into();
    let body = format!(
        "Hello,\n\n\
         follow this link to sign in to UrbanLog:\n\n\
         https://urbanlog.app/login?token={encoded_token}\n\n\
         The link is valid for 24 hours and can be used once.\n\n\
         If you did not request it you can safely ignore this message."
    );
    EmailContent { subject, body }
}

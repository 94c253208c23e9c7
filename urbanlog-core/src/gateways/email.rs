use crate::entities::{EmailAddress, EmailContent};

pub trait EmailGateway {
    // TODO: Make this async
    fn compose_and_send(&self, recipients: &[EmailAddress], email: &EmailContent);
}

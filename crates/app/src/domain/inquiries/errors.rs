//! Inquiries service errors.

use thiserror::Error;

use crate::mailer::MailerError;

#[derive(Debug, Error)]
pub enum InquiriesServiceError {
    #[error("missing required data")]
    MissingRequiredData,

    #[error("mail delivery failed")]
    Mailer(#[from] MailerError),
}

//! Inquiry Data

use std::fmt::Write as _;

use crate::{domain::inquiries::InquiriesServiceError, mailer::OutgoingMail};

pub const INQUIRY_SUBJECT: &str = "New Inquiry Received";

/// Customer question forwarded to the shop's admin inbox.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewInquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub product_name: Option<String>,
    pub description: String,
}

impl NewInquiry {
    pub(crate) fn validate(&self) -> Result<(), InquiriesServiceError> {
        if [
            &self.name,
            &self.email,
            &self.phone,
            &self.address,
            &self.description,
        ]
        .iter()
        .any(|value| value.trim().is_empty())
        {
            return Err(InquiriesServiceError::MissingRequiredData);
        }

        Ok(())
    }

    pub(crate) fn to_mail(&self, admin_email: &str) -> OutgoingMail {
        let mut text = format!(
            "You have received a new inquiry from {} ({}).\n\nPhone:\n{}\n\nAddress:\n{}\n",
            self.name, self.email, self.phone, self.address
        );

        if let Some(product_name) = self.product_name.as_deref().filter(|name| !name.is_empty()) {
            let _ = write!(text, "\nProduct Name:\n{product_name}\n");
        }

        let _ = write!(text, "\nDescription:\n{}", self.description);

        OutgoingMail {
            to: admin_email.to_string(),
            subject: INQUIRY_SUBJECT.to_string(),
            text,
        }
    }
}

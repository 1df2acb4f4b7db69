//! Inquiries service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::{error, info};

use crate::{
    domain::inquiries::{data::NewInquiry, errors::InquiriesServiceError},
    mailer::Mailer,
};

#[derive(Clone)]
pub struct InquiriesManager {
    mailer: Arc<dyn Mailer>,
    admin_email: String,
}

impl InquiriesManager {
    #[must_use]
    pub fn new(mailer: Arc<dyn Mailer>, admin_email: impl Into<String>) -> Self {
        Self {
            mailer,
            admin_email: admin_email.into(),
        }
    }
}

#[async_trait]
impl InquiriesService for InquiriesManager {
    async fn submit_inquiry(&self, inquiry: NewInquiry) -> Result<(), InquiriesServiceError> {
        inquiry.validate()?;

        let mail = inquiry.to_mail(&self.admin_email);

        if let Err(err) = self.mailer.send(&mail).await {
            error!(error = %err, "failed to forward inquiry");

            return Err(err.into());
        }

        info!(from = %inquiry.email, "forwarded inquiry");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait InquiriesService: Send + Sync {
    /// Forward a customer inquiry to the admin inbox. No account required.
    async fn submit_inquiry(&self, inquiry: NewInquiry) -> Result<(), InquiriesServiceError>;
}

#[cfg(test)]
mod tests {
    use mockall::predicate::always;
    use testresult::TestResult;

    use crate::{
        domain::inquiries::data::INQUIRY_SUBJECT,
        mailer::{MailerError, MockMailer},
    };

    use super::*;

    fn inquiry() -> NewInquiry {
        NewInquiry {
            name: "Casey".to_string(),
            email: "casey@example.com".to_string(),
            phone: "555-0100".to_string(),
            address: "12 Elm Street".to_string(),
            product_name: None,
            description: "Is the bounce house available in May?".to_string(),
        }
    }

    #[tokio::test]
    async fn submit_sends_mail_to_admin() -> TestResult {
        let mut mailer = MockMailer::new();

        mailer
            .expect_send()
            .withf(|mail| mail.to == "admin@example.com" && mail.subject == INQUIRY_SUBJECT)
            .times(1)
            .returning(|_| Ok(()));

        let service = InquiriesManager::new(Arc::new(mailer), "admin@example.com");

        service.submit_inquiry(inquiry()).await?;

        Ok(())
    }

    #[tokio::test]
    async fn submit_rejects_blank_fields_without_sending() {
        let mut mailer = MockMailer::new();

        mailer.expect_send().never();

        let service = InquiriesManager::new(Arc::new(mailer), "admin@example.com");

        let result = service
            .submit_inquiry(NewInquiry {
                description: "  ".to_string(),
                ..inquiry()
            })
            .await;

        assert!(
            matches!(result, Err(InquiriesServiceError::MissingRequiredData)),
            "expected MissingRequiredData, got {result:?}"
        );
    }

    #[tokio::test]
    async fn relay_failure_is_reported() {
        let mut mailer = MockMailer::new();

        mailer
            .expect_send()
            .with(always())
            .returning(|_| Err(MailerError::UnexpectedResponse("503".to_string())));

        let service = InquiriesManager::new(Arc::new(mailer), "admin@example.com");

        let result = service.submit_inquiry(inquiry()).await;

        assert!(
            matches!(result, Err(InquiriesServiceError::Mailer(_))),
            "expected Mailer error, got {result:?}"
        );
    }
}

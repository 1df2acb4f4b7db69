//! Mail Config

use clap::Args;

use rentals_app::{context::MailSettings, mailer::MailerConfig};

/// Outbound mail settings.
#[derive(Debug, Clone, Args)]
pub struct MailConfig {
    /// HTTP mail relay endpoint
    #[arg(long, env = "MAIL_RELAY_URL")]
    pub mail_relay_url: String,

    /// Bearer token for the mail relay
    #[arg(long, env = "MAIL_API_TOKEN", hide_env_values = true)]
    pub mail_api_token: Option<String>,

    /// Sender address for outgoing mail
    #[arg(long, env = "MAIL_FROM", default_value = "no-reply@localhost")]
    pub mail_from: String,

    /// Inbox that receives customer inquiries
    #[arg(long, env = "ADMIN_EMAIL")]
    pub admin_email: String,
}

impl From<MailConfig> for MailSettings {
    fn from(config: MailConfig) -> Self {
        MailSettings {
            mailer: MailerConfig {
                relay_url: config.mail_relay_url,
                api_token: config.mail_api_token,
                from: config.mail_from,
            },
            admin_email: config.admin_email,
        }
    }
}

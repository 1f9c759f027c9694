//! SMTP delivery via lettre

use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use shared::models::Order;

use super::{Delivery, Notifier, NotifyError, render_confirmation};
use crate::core::config::MailConfig;

pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    business_name: String,
}

impl SmtpNotifier {
    /// Build the STARTTLS transport; no connection is made until the first send
    pub fn new(mail: &MailConfig, business_name: &str) -> Result<Self, NotifyError> {
        let address = mail
            .from
            .parse()
            .map_err(|e| NotifyError::Address(format!("{}: {}", mail.from, e)))?;
        let from = Mailbox::new(Some(business_name.to_string()), address);

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&mail.smtp_server)
            .map_err(|e| NotifyError::Transport(e.to_string()))?
            .port(mail.smtp_port)
            .credentials(Credentials::new(
                mail.username.clone(),
                mail.password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            from,
            business_name: business_name.to_string(),
        })
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send(&self, order: &Order) -> Result<Delivery, NotifyError> {
        let to: Mailbox = order
            .customer_email
            .parse()
            .map_err(|e| NotifyError::Address(format!("{}: {}", order.customer_email, e)))?;

        let confirmation = render_confirmation(order, &self.business_name);
        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(confirmation.subject)
            .multipart(MultiPart::alternative_plain_html(
                confirmation.text,
                confirmation.html,
            ))
            .map_err(|e| NotifyError::Message(e.to_string()))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| NotifyError::Transport(e.to_string()))?;

        Ok(Delivery::Sent)
    }
}

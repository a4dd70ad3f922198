pub mod errors;

use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use log::info;
use crate::config::MailParameters;
use crate::manager_mail::errors::MailError;

pub struct Mail {
    smtp_server: String,
    smtp_port: u16,
    credentials: Credentials,
    from: Mailbox,
    to: Mailbox,
}

impl Mail {
    /// Returns a new instance of the Mail struct
    ///
    /// # Arguments
    ///
    /// * 'config' - smtp server, port, sender credentials and recipient
    pub fn new(config: &MailParameters) -> Result<Self, MailError> {
        Ok(
            Self {
                smtp_server: config.smtp_server.clone(),
                smtp_port: config.smtp_port,
                credentials: Credentials::new(config.sender.clone(), config.password.clone()),
                from: config.sender.parse::<Mailbox>()?,
                to: config.recipient.parse::<Mailbox>()?,
            }
        )
    }

    /// Sends a plain text mail with the given subject and body.
    ///
    /// A STARTTLS session is opened for this one message and closed again
    /// when the transport goes out of scope, whether or not sending succeeded.
    ///
    /// # Arguments
    ///
    /// * 'subject' - the subject of the mail
    /// * 'body' - the body of the mail
    pub fn send_mail(&self, subject: String, body: String) -> Result<(), MailError> {
        let email = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)?;

        let mailer = SmtpTransport::starttls_relay(&self.smtp_server)?
            .port(self.smtp_port)
            .credentials(self.credentials.clone())
            .build();

        mailer.send(&email)?;

        info!("mail sent to {} via {}:{}", self.to, self.smtp_server, self.smtp_port);

        Ok(())
    }
}

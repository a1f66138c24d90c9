//! Mail sender

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use lettre::{
    message::{Mailbox, MultiPart, SinglePart},
    Message,
};
use tracing::{debug, info};

use crate::infrastructure::smtp::LettreConnector;

use super::{
    Credentials, HtmlTemplate, MailSenderError, ServerType, SmtpConnector, SmtpEndpoint,
    SmtpSession,
};

/// Mail sender configuration
#[derive(Clone, Debug, Parser)]
pub struct MailSenderConfig {
    /// The mail provider, `GMAIL` or `OUTLOOK`
    #[clap(long, env = "MAIL_SERVER_TYPE", default_value = "GMAIL")]
    pub server_type: String,

    /// The SMTP username
    #[clap(long, env = "MAIL_USER")]
    pub user: Option<String>,

    /// The SMTP password
    #[clap(long, env = "MAIL_PASSWORD")]
    pub password: Option<String>,

    /// The sender email address
    #[clap(long, env = "MAIL_FROM")]
    pub from: String,

    /// The recipient email address
    #[clap(long, env = "MAIL_TO")]
    pub to: String,

    /// The subject of the email
    #[clap(long, env = "MAIL_SUBJECT")]
    pub subject: String,

    /// Path to the HTML template
    #[clap(long = "template", env = "MAIL_TEMPLATE")]
    pub template_path: Option<PathBuf>,
}

/// Sends one HTML email per call to [`MailSender::send`]
#[derive(Debug)]
pub struct MailSender<C = LettreConnector>
where
    C: SmtpConnector,
{
    server_type: ServerType,
    endpoint: SmtpEndpoint,
    credentials: Credentials,
    from: String,
    to: String,
    subject: String,
    template: HtmlTemplate,
    connector: C,
}

impl MailSender {
    /// Create a sender that talks to the provider's SMTP server.
    ///
    /// # Returns
    /// - [`Ok`] with the sender if the configuration is valid and the template was read.
    /// - [`Err`] with [`MailSenderError::UnsupportedServerType`],
    ///   [`MailSenderError::MissingCredentials`] or [`MailSenderError::TemplateNotFound`].
    pub fn new(config: MailSenderConfig) -> Result<Self, MailSenderError> {
        Self::with_connector(config, LettreConnector::default())
    }

    /// The library version
    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}

impl<C> MailSender<C>
where
    C: SmtpConnector,
{
    /// Create a sender that opens sessions through `connector`
    pub fn with_connector(config: MailSenderConfig, connector: C) -> Result<Self, MailSenderError> {
        let server_type: ServerType = config.server_type.parse()?;
        let credentials = Credentials::new(config.user, config.password)?;

        let template_path = config
            .template_path
            .ok_or_else(|| MailSenderError::TemplateNotFound {
                path: PathBuf::new(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "no template path was provided",
                ),
            })?;
        let template = HtmlTemplate::from_path(&template_path)?;

        Ok(Self {
            server_type,
            endpoint: server_type.endpoint(),
            credentials,
            from: config.from,
            to: config.to,
            subject: config.subject,
            template,
            connector,
        })
    }

    /// The selected mail provider
    pub fn server_type(&self) -> ServerType {
        self.server_type
    }

    /// The SMTP server messages are sent through
    pub fn endpoint(&self) -> SmtpEndpoint {
        self.endpoint
    }

    /// Render the HTML body from the template
    pub fn render_body(&self) -> String {
        self.template.render()
    }

    /// Build the multipart/alternative message without sending it
    pub fn compose(&self) -> Result<Message, MailSenderError> {
        let message = Message::builder()
            .from(self.from.parse::<Mailbox>()?)
            .to(self.to.parse::<Mailbox>()?)
            .subject(self.subject.clone())
            .multipart(MultiPart::alternative().singlepart(SinglePart::html(self.render_body())))?;

        Ok(message)
    }

    /// Compose the message and send it over a fresh SMTP session.
    ///
    /// The session is closed before this returns, whether or not the send succeeded.
    ///
    /// # Returns
    /// - [`Ok`] once the server has accepted the message.
    /// - [`Err`] with [`MailSenderError::SendFailure`] wrapping the first error.
    pub fn send(&self) -> Result<(), MailSenderError> {
        let message = self.compose()?;

        debug!("connecting to {}", self.endpoint);

        let session = self
            .connector
            .connect(&self.endpoint)
            .with_context(|| format!("could not connect to {}", self.endpoint))
            .map_err(MailSenderError::SendFailure)?;

        let mut session = SessionGuard(session);

        self.deliver(session.0.as_mut(), &message)
            .map_err(MailSenderError::SendFailure)?;

        info!("email sent successfully to {}", self.to);

        Ok(())
    }

    fn deliver(&self, session: &mut dyn SmtpSession, message: &Message) -> anyhow::Result<()> {
        session.starttls().context("STARTTLS failed")?;
        debug!("connection to {} secured", self.endpoint);

        session
            .login(&self.credentials)
            .context("authentication failed")?;
        debug!("authenticated as {}", self.credentials.user());

        session
            .send_message(message.envelope(), &message.formatted())
            .context("message was not accepted")?;

        Ok(())
    }
}

/// Quits the session when dropped
struct SessionGuard(Box<dyn SmtpSession>);

impl Drop for SessionGuard {
    fn drop(&mut self) {
        self.0.quit();
    }
}

//! SMTP transport

use lettre::address::Envelope;

#[cfg(test)]
use mockall::mock;

use super::{Credentials, SmtpEndpoint};

/// Opens SMTP sessions
pub trait SmtpConnector {
    /// Open a plaintext connection to `endpoint` and greet the server.
    ///
    /// # Returns
    /// - [`Ok`] with the open session.
    /// - [`Err`] if the server could not be reached.
    fn connect(&self, endpoint: &SmtpEndpoint) -> anyhow::Result<Box<dyn SmtpSession>>;
}

/// An open SMTP session
pub trait SmtpSession {
    /// Upgrade the connection to TLS with STARTTLS
    fn starttls(&mut self) -> anyhow::Result<()>;

    /// Authenticate with the server
    fn login(&mut self, credentials: &Credentials) -> anyhow::Result<()>;

    /// Transmit a formatted message to the recipients in `envelope`
    fn send_message(&mut self, envelope: &Envelope, raw: &[u8]) -> anyhow::Result<()>;

    /// End the session. Never fails; a connection that does not close
    /// cleanly is dropped.
    fn quit(&mut self);
}

#[cfg(test)]
mock! {
    pub SmtpConnector {}

    impl SmtpConnector for SmtpConnector {
        fn connect(&self, endpoint: &SmtpEndpoint) -> anyhow::Result<Box<dyn SmtpSession>>;
    }
}

#[cfg(test)]
mock! {
    pub SmtpSession {}

    impl SmtpSession for SmtpSession {
        fn starttls(&mut self) -> anyhow::Result<()>;
        fn login(&mut self, credentials: &Credentials) -> anyhow::Result<()>;
        fn send_message(&mut self, envelope: &Envelope, raw: &[u8]) -> anyhow::Result<()>;
        fn quit(&mut self);
    }
}

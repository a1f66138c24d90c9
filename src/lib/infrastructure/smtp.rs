//! SMTP client implementation backed by lettre

use std::time::Duration;

use anyhow::{Context, Result};
use lettre::{
    address::Envelope,
    transport::smtp::{
        authentication::{Credentials as LettreCredentials, Mechanism},
        client::{SmtpConnection, TlsParameters},
        extension::ClientId,
    },
};
use tracing::{debug, warn};

use crate::domain::mail::{Credentials, SmtpConnector, SmtpEndpoint, SmtpSession};

/// Connect timeout used when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Opens SMTP connections with lettre
#[derive(Debug, Clone)]
pub struct LettreConnector {
    timeout: Option<Duration>,
    hello_name: ClientId,
}

impl LettreConnector {
    /// Create a connector with the given connect timeout
    pub fn new(timeout: Option<Duration>) -> Self {
        Self {
            timeout,
            hello_name: ClientId::default(),
        }
    }
}

impl Default for LettreConnector {
    fn default() -> Self {
        Self::new(Some(DEFAULT_TIMEOUT))
    }
}

impl SmtpConnector for LettreConnector {
    #[mutants::skip]
    fn connect(&self, endpoint: &SmtpEndpoint) -> Result<Box<dyn SmtpSession>> {
        let connection = SmtpConnection::connect(
            (endpoint.host, endpoint.port),
            self.timeout,
            &self.hello_name,
            None,
            None,
        )?;

        debug!("connected to {endpoint}");

        Ok(Box::new(LettreSession {
            connection,
            host: endpoint.host,
            hello_name: self.hello_name.clone(),
        }))
    }
}

/// An SMTP session over a lettre connection
struct LettreSession {
    connection: SmtpConnection,
    host: &'static str,
    hello_name: ClientId,
}

impl SmtpSession for LettreSession {
    #[mutants::skip]
    fn starttls(&mut self) -> Result<()> {
        let parameters = TlsParameters::new(self.host.to_string())
            .context("invalid TLS parameters")?;

        self.connection.starttls(&parameters, &self.hello_name)?;

        Ok(())
    }

    #[mutants::skip]
    fn login(&mut self, credentials: &Credentials) -> Result<()> {
        let credentials = LettreCredentials::new(
            credentials.user().to_string(),
            credentials.password().to_string(),
        );

        let response = self
            .connection
            .auth(&[Mechanism::Plain, Mechanism::Login], &credentials)?;

        debug!("AUTH response: {:?}", response.code());

        Ok(())
    }

    #[mutants::skip]
    fn send_message(&mut self, envelope: &Envelope, raw: &[u8]) -> Result<()> {
        let response = self.connection.send(envelope, raw)?;

        debug!("DATA response: {:?}", response.code());

        Ok(())
    }

    #[mutants::skip]
    fn quit(&mut self) {
        if let Err(e) = self.connection.quit() {
            warn!("QUIT to {} failed: {e}", self.host);

            self.connection.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeout() {
        let connector = LettreConnector::default();

        assert_eq!(connector.timeout, Some(DEFAULT_TIMEOUT));
    }

    #[test]
    fn test_without_timeout() {
        let connector = LettreConnector::new(None);

        assert_eq!(connector.timeout, None);
    }
}

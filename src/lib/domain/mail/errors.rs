//! Mail sender errors

use std::{io, path::PathBuf};

use lettre::{address::AddressError, error::Error as MessageError};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when constructing a [`super::MailSender`] or sending with it
#[derive(Debug, Error)]
pub enum MailSenderError {
    /// The requested server type has no known SMTP endpoint
    #[error("currently {0} server type is not supported, please select a valid option")]
    UnsupportedServerType(String),

    /// The username or password was not provided
    #[error("please provide a valid username and password")]
    MissingCredentials,

    /// The template file could not be opened or read
    #[error("template {} could not be read", path.display())]
    TemplateNotFound {
        /// The path that was requested
        path: PathBuf,

        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Composing, connecting, authenticating or transmitting failed
    #[error("failed to send email: {0:#}")]
    SendFailure(anyhow::Error),
}

impl From<AddressError> for MailSenderError {
    fn from(err: AddressError) -> Self {
        debug!("AddressError -> MailSenderError");

        MailSenderError::SendFailure(anyhow::Error::new(err).context("invalid email address"))
    }
}

impl From<MessageError> for MailSenderError {
    fn from(err: MessageError) -> Self {
        debug!("lettre::error::Error -> MailSenderError");

        MailSenderError::SendFailure(anyhow::Error::new(err).context("could not build message"))
    }
}

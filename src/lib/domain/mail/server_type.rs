//! SMTP server types

use std::{fmt, str::FromStr};

use super::MailSenderError;

/// Port used for submission with STARTTLS
const SUBMISSION_PORT: u16 = 587;

/// Host and port of an SMTP server
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SmtpEndpoint {
    /// The SMTP host
    pub host: &'static str,

    /// The SMTP port
    pub port: u16,
}

impl fmt::Display for SmtpEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// A supported mail provider
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServerType {
    /// Google Mail
    Gmail,

    /// Microsoft Outlook
    Outlook,
}

// Ordered by discriminant.
static ENDPOINTS: [(ServerType, &str, SmtpEndpoint); 2] = [
    (
        ServerType::Gmail,
        "GMAIL",
        SmtpEndpoint {
            host: "smtp.gmail.com",
            port: SUBMISSION_PORT,
        },
    ),
    (
        ServerType::Outlook,
        "OUTLOOK",
        SmtpEndpoint {
            host: "smtp.outlook.com",
            port: SUBMISSION_PORT,
        },
    ),
];

impl ServerType {
    /// The name this server type is selected by
    pub fn name(&self) -> &'static str {
        self.entry().1
    }

    /// The SMTP endpoint for this server type
    pub fn endpoint(&self) -> SmtpEndpoint {
        self.entry().2
    }

    fn entry(&self) -> &'static (ServerType, &'static str, SmtpEndpoint) {
        &ENDPOINTS[*self as usize]
    }
}

impl fmt::Display for ServerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ServerType {
    type Err = MailSenderError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        ENDPOINTS
            .iter()
            .find(|(_, name, _)| *name == raw)
            .map(|(server_type, _, _)| *server_type)
            .ok_or_else(|| MailSenderError::UnsupportedServerType(raw.to_string()))
    }
}

//! Mail module.

mod credentials;
mod errors;
mod sender;
mod server_type;
mod template;
mod transport;

pub use credentials::Credentials;
pub use errors::MailSenderError;
pub use sender::{MailSender, MailSenderConfig};
pub use server_type::{ServerType, SmtpEndpoint};
pub use template::HtmlTemplate;
pub use transport::{SmtpConnector, SmtpSession};

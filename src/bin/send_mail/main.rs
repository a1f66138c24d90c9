#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Send one templated HTML email

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use html_mailer::{
    domain::mail::{MailSender, MailSenderConfig},
    infrastructure::smtp::LettreConnector,
};
use tracing::info;

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
#[clap(version)]
pub struct Args {
    /// The mail sender configuration
    #[clap(flatten)]
    pub mail: MailSenderConfig,

    /// Connect timeout in seconds
    #[clap(long, env = "MAIL_TIMEOUT_SECS", default_value = "60")]
    pub timeout_secs: u64,
}

#[mutants::skip]
fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let connector = LettreConnector::new(Some(Duration::from_secs(args.timeout_secs)));
    let sender = MailSender::with_connector(args.mail, connector)?;

    info!(
        "html-mailer {} sending through {}",
        MailSender::version(),
        sender.endpoint()
    );

    sender.send()?;

    Ok(())
}

#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Send a templated HTML email through Gmail or Outlook over STARTTLS

pub mod domain;
pub mod infrastructure;

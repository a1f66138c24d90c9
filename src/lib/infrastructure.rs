//! Infrastructure

pub mod smtp;

//! Typed Rust client for the MSG91 SMS HTTP API.
//!
//! The crate is split into a domain layer of strong types, a transport layer for wire-format
//! quirks (query strings, bulk JSON bodies, content-type driven response decoding), and a
//! small client layer that performs the HTTP calls.
//!
//! ```rust,no_run
//! use msg91::{MessageText, MobileNumber, Msg91Client, Recipient, Response};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), msg91::Msg91Error> {
//!     let client = Msg91Client::new("...")?;
//!     let recipient = Recipient::new(
//!         MobileNumber::new("919999999999")?,
//!         MessageText::new("hello")?,
//!     );
//!     match client.send_to_one(&recipient).await? {
//!         Response::Structured(json) => println!("{json}"),
//!         Response::Raw(text) => println!("{text}"),
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{Api, ConfigError, Msg91Client, Msg91ClientBuilder, Msg91Error};
pub use domain::{
    AuthKey, BulkEntry, CountryCode, EmptyFieldPolicy, MessageText, MobileNumber, PhoneNumber,
    ProviderReply, Recipient, ReplyKind, RequestConfig, Response, ResponseFormat, Route,
    ScheduleTime, SenderId, ValidationError, bulk_entries_from_json,
};

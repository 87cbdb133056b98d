//! # cv-client
//!
//! Remote credential-reputation client for the CredVerify
//! authentication node.
//!
//! This crate owns the seam between the decision logic and the
//! reputation service: the [`VerifyClient`] trait, the
//! [`UserIdType`] vocabulary shared with the wire protocol, and the
//! reqwest-backed [`HttpVerifyClient`].
//!
//! ## Security
//!
//! - The app secret and the password are never logged.
//! - The client holds only immutable configuration after construction
//!   and performs a stateless outbound call per invocation, so it is
//!   safe for concurrent use across login attempts.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod client;
pub mod error;
pub mod types;

pub use client::{HttpVerifyClient, VerifyClient};
pub use error::{VerifyError, VerifyResult};
pub use types::UserIdType;

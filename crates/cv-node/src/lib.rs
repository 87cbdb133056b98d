//! # cv-node
//!
//! Leaked-credential verification node for authentication chains.
//!
//! The node is constructed once per chain deployment (configuration
//! validation plus client construction) and then decides once per
//! login attempt whether the presented credential pair is known-leaked,
//! routing the attempt to one of two terminal outcomes.
//!
//! ## Failure posture
//!
//! Construction-time errors are fatal and surface to the orchestrator.
//! Request-time errors never propagate: every remote failure, and a
//! missing client, resolve to [`Outcome::Trusted`] so that a
//! misconfigured or unreachable reputation service cannot lock anyone
//! out (fail-open).
//!
//! ## Example
//!
//! ```ignore
//! use cv_node::{CredVerifyNode, NodeConfig, TreeContext};
//!
//! let node = CredVerifyNode::new(NodeConfig::default())?;
//!
//! let context = TreeContext::new()
//!     .with_username("jdoe")
//!     .with_password("hunter2");
//! let outcome = node.process(&context).await;
//! ```

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod config;
pub mod context;
pub mod error;
pub mod node;
pub mod outcome;

pub use config::{CheckPolicy, NodeConfig, DEFAULT_API_URL};
pub use context::{MessageBundle, TreeContext, PASSWORD, USERNAME};
pub use error::{NodeError, NodeResult};
pub use node::{CredVerifyNode, LEAKED_PASSWORD_MESSAGE};
pub use outcome::Outcome;

pub use cv_client::UserIdType;

//! Node configuration.
//!
//! The configuration is supplied once by the orchestrator at node
//! construction and is immutable thereafter. Validation is defensive:
//! an explicitly unset policy or identifier type is a fatal
//! misconfiguration even though the defaults make both present.

use cv_client::UserIdType;
use serde::{Deserialize, Serialize};

use crate::error::{NodeError, NodeResult};

/// Endpoint used when `api_url` is blank or absent.
pub const DEFAULT_API_URL: &str = "https://api.vericlouds.com/index.php";

/// The check mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckPolicy {
    /// Check only the password value, identifier-agnostic.
    #[default]
    Enterprise,

    /// Check the password together with a typed user identifier.
    Consumer,
}

impl CheckPolicy {
    /// Returns the configuration token for this policy.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Enterprise => "enterprise",
            Self::Consumer => "consumer",
        }
    }
}

/// Configuration for the verification node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Reputation service endpoint. Blank falls back to
    /// [`DEFAULT_API_URL`].
    #[serde(default)]
    pub api_url: String,

    /// Application key for the reputation service.
    #[serde(default)]
    pub app_key: String,

    /// Application secret for the reputation service.
    #[serde(default, skip_serializing)]
    pub app_secret: String,

    /// Check mode. `None` is a fatal misconfiguration.
    #[serde(default = "default_check_policy")]
    pub check_policy: Option<CheckPolicy>,

    /// Username interpretation for the consumer policy. `None` is a
    /// fatal misconfiguration.
    #[serde(default = "default_user_id_type")]
    pub user_id_type: Option<UserIdType>,
}

fn default_check_policy() -> Option<CheckPolicy> {
    Some(CheckPolicy::Enterprise)
}

fn default_user_id_type() -> Option<UserIdType> {
    Some(UserIdType::NotUsed)
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            app_key: String::new(),
            app_secret: String::new(),
            check_policy: default_check_policy(),
            user_id_type: default_user_id_type(),
        }
    }
}

impl NodeConfig {
    /// Returns the endpoint to use, substituting the default when
    /// `api_url` is blank after trimming.
    #[must_use]
    pub fn resolved_api_url(&self) -> &str {
        let trimmed = self.api_url.trim();
        if trimmed.is_empty() {
            DEFAULT_API_URL
        } else {
            trimmed
        }
    }

    /// Validates the configuration and returns the resolved policy and
    /// identifier type.
    ///
    /// ## Errors
    ///
    /// Returns [`NodeError::Configuration`] if `check_policy` or
    /// `user_id_type` is unset.
    pub fn validate(&self) -> NodeResult<(CheckPolicy, UserIdType)> {
        let check_policy = self
            .check_policy
            .ok_or_else(|| NodeError::config("check_policy is not defined"))?;
        let user_id_type = self
            .user_id_type
            .ok_or_else(|| NodeError::config("user_id_type is not defined"))?;
        Ok((check_policy, user_id_type))
    }
}

//! Per-request tree context.
//!
//! The orchestrator owns the context; this node only reads the
//! username from shared state, the password from transient state, and
//! operator-facing messages from the locale-resolved bundle.

use std::collections::HashMap;

use serde_json::Value;

/// Shared-state key under which the orchestrator stores the username.
pub const USERNAME: &str = "username";

/// Transient-state key under which the orchestrator stores the password.
pub const PASSWORD: &str = "password";

/// Locale-resolved message bundle supplied by the orchestrator.
///
/// Lookup is by resource key; a missing key yields `None` and the
/// caller decides on a fallback.
#[derive(Debug, Clone, Default)]
pub struct MessageBundle {
    messages: HashMap<String, String>,
}

impl MessageBundle {
    /// Creates an empty bundle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a message under the given key.
    #[must_use]
    pub fn with_message(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.messages.insert(key.into(), text.into());
        self
    }

    /// Looks up the message for a key.
    #[must_use]
    pub fn message(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }
}

/// Authentication-tree context for one login attempt.
///
/// Shared state survives across nodes in the chain; transient state
/// holds secrets that must not be persisted. Both are read-only here.
#[derive(Debug, Clone, Default)]
pub struct TreeContext {
    /// State shared across the authentication chain.
    pub shared_state: HashMap<String, Value>,
    /// Transient state, never persisted.
    pub transient_state: HashMap<String, Value>,
    /// Locale-resolved messages for this node.
    pub bundle: MessageBundle,
}

impl TreeContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the username in shared state.
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.shared_state
            .insert(USERNAME.to_string(), Value::String(username.into()));
        self
    }

    /// Sets the password in transient state.
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.transient_state
            .insert(PASSWORD.to_string(), Value::String(password.into()));
        self
    }

    /// Sets the message bundle.
    #[must_use]
    pub fn with_bundle(mut self, bundle: MessageBundle) -> Self {
        self.bundle = bundle;
        self
    }

    /// Returns the username from shared state, if present and a string.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.shared_state.get(USERNAME).and_then(Value::as_str)
    }

    /// Returns the password from transient state, if present and a string.
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.transient_state.get(PASSWORD).and_then(Value::as_str)
    }
}

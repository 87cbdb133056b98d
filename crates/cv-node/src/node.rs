//! The verification node: construction-time validation and the
//! per-request decision engine.

use std::fmt;
use std::sync::Arc;

use cv_client::{HttpVerifyClient, UserIdType, VerifyClient};

use crate::config::{CheckPolicy, NodeConfig};
use crate::context::TreeContext;
use crate::error::NodeResult;
use crate::outcome::Outcome;

/// Bundle key for the operator-facing leaked-credential message.
pub const LEAKED_PASSWORD_MESSAGE: &str = "credverify-leaked-password";

/// Leaked-credential verification node.
///
/// Constructed once per chain deployment; [`process`](Self::process)
/// is then invoked once per login attempt, possibly concurrently
/// across attempts. The node holds only immutable state.
pub struct CredVerifyNode {
    check_policy: CheckPolicy,
    user_id_type: UserIdType,
    client: Option<Arc<dyn VerifyClient>>,
}

impl CredVerifyNode {
    /// Creates the node from its configuration.
    ///
    /// Validates the policy selections, resolves the endpoint, and
    /// builds the reusable verification client. No I/O is performed.
    ///
    /// ## Errors
    ///
    /// Returns [`NodeError::Configuration`](crate::NodeError::Configuration)
    /// if `check_policy` or `user_id_type` is unset, and
    /// [`NodeError::Initialization`](crate::NodeError::Initialization)
    /// if the client cannot be constructed (e.g. malformed URL). Both
    /// are fatal for the node instance.
    pub fn new(config: NodeConfig) -> NodeResult<Self> {
        let (check_policy, user_id_type) = config.validate()?;

        let api_url = config.resolved_api_url().to_string();
        tracing::info!(
            api_url = %api_url,
            app_key = %config.app_key,
            check_policy = check_policy.as_str(),
            user_id_type = user_id_type.as_str(),
            "verification node configured"
        );

        let client = HttpVerifyClient::new(&api_url, config.app_key, config.app_secret)?;

        Ok(Self::with_client(
            check_policy,
            user_id_type,
            Some(Arc::new(client)),
        ))
    }

    /// Creates the node around an existing client, or none at all.
    ///
    /// A node without a client still decides, always trusted: an
    /// optional security check must never block legitimate access.
    #[must_use]
    pub fn with_client(
        check_policy: CheckPolicy,
        user_id_type: UserIdType,
        client: Option<Arc<dyn VerifyClient>>,
    ) -> Self {
        Self {
            check_policy,
            user_id_type,
            client,
        }
    }

    /// Returns the configured check policy.
    #[must_use]
    pub const fn check_policy(&self) -> CheckPolicy {
        self.check_policy
    }

    /// Returns the configured identifier type.
    #[must_use]
    pub const fn user_id_type(&self) -> UserIdType {
        self.user_id_type
    }

    /// Decides one login attempt.
    ///
    /// Never fails: a missing client and every remote error resolve to
    /// [`Outcome::Trusted`].
    pub async fn process(&self, context: &TreeContext) -> Outcome {
        let username = context.username().unwrap_or_default();
        let password = context.password().unwrap_or_default();

        let Some(client) = &self.client else {
            tracing::error!("verification client is not configured, continuing trusted");
            return Outcome::Trusted;
        };

        tracing::debug!(
            check_policy = self.check_policy.as_str(),
            "checking credential against reputation service"
        );

        let result = match self.check_policy {
            CheckPolicy::Enterprise => client.verify_password(password).await,
            CheckPolicy::Consumer => {
                client
                    .verify_credentials(username, password, self.user_id_type)
                    .await
            }
        };

        match result {
            Ok(true) => {
                match context.bundle.message(LEAKED_PASSWORD_MESSAGE) {
                    Some(text) => tracing::error!(message = %text, "credential is known-leaked"),
                    None => {
                        tracing::error!(message_key = LEAKED_PASSWORD_MESSAGE, "credential is known-leaked");
                    }
                }
                Outcome::Flagged
            }
            Ok(false) => {
                tracing::debug!("credential is not known-leaked");
                Outcome::Trusted
            }
            Err(error) => {
                tracing::error!(%error, "verification call failed, continuing trusted");
                Outcome::Trusted
            }
        }
    }
}

impl fmt::Debug for CredVerifyNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredVerifyNode")
            .field("check_policy", &self.check_policy)
            .field("user_id_type", &self.user_id_type)
            .field("client_configured", &self.client.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use cv_client::{VerifyError, VerifyResult};

    use super::*;
    use crate::context::MessageBundle;

    /// Call shapes observed by the mock.
    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Password(String),
        Credentials(String, String, UserIdType),
    }

    /// Programmed answer for the mock.
    #[derive(Debug, Clone, Copy)]
    enum Answer {
        Leaked,
        Clean,
        Fail,
    }

    struct MockClient {
        answer: Answer,
        calls: Mutex<Vec<Call>>,
    }

    impl MockClient {
        fn new(answer: Answer) -> Arc<Self> {
            Arc::new(Self {
                answer,
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn answer(&self) -> VerifyResult<bool> {
            match self.answer {
                Answer::Leaked => Ok(true),
                Answer::Clean => Ok(false),
                Answer::Fail => Err(VerifyError::protocol("connection reset by peer")),
            }
        }
    }

    #[async_trait]
    impl VerifyClient for MockClient {
        async fn verify_password(&self, password: &str) -> VerifyResult<bool> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::Password(password.to_string()));
            self.answer()
        }

        async fn verify_credentials(
            &self,
            username: &str,
            password: &str,
            user_id_type: UserIdType,
        ) -> VerifyResult<bool> {
            self.calls.lock().unwrap().push(Call::Credentials(
                username.to_string(),
                password.to_string(),
                user_id_type,
            ));
            self.answer()
        }
    }

    fn node_with(
        policy: CheckPolicy,
        id_type: UserIdType,
        client: &Arc<MockClient>,
    ) -> CredVerifyNode {
        CredVerifyNode::with_client(policy, id_type, Some(client.clone()))
    }

    #[tokio::test]
    async fn enterprise_leaked_password_is_flagged() {
        let client = MockClient::new(Answer::Leaked);
        let node = node_with(CheckPolicy::Enterprise, UserIdType::NotUsed, &client);

        let context = TreeContext::new()
            .with_username("admin")
            .with_password("Passw0rd!")
            .with_bundle(
                MessageBundle::new()
                    .with_message(LEAKED_PASSWORD_MESSAGE, "Your password has been leaked"),
            );

        let outcome = node.process(&context).await;
        assert_eq!(outcome, Outcome::Flagged);
        assert_eq!(client.calls(), vec![Call::Password("Passw0rd!".to_string())]);
    }

    #[tokio::test]
    async fn consumer_clean_credential_is_trusted() {
        let client = MockClient::new(Answer::Clean);
        let node = node_with(CheckPolicy::Consumer, UserIdType::Email, &client);

        let context = TreeContext::new().with_username("a@b.com").with_password("x");

        let outcome = node.process(&context).await;
        assert_eq!(outcome, Outcome::Trusted);
        assert_eq!(
            client.calls(),
            vec![Call::Credentials(
                "a@b.com".to_string(),
                "x".to_string(),
                UserIdType::Email,
            )]
        );
    }

    #[tokio::test]
    async fn remote_error_fails_open() {
        let client = MockClient::new(Answer::Fail);
        let node = node_with(CheckPolicy::Enterprise, UserIdType::NotUsed, &client);

        let context = TreeContext::new().with_username("jdoe").with_password("x");

        let outcome = node.process(&context).await;
        assert_eq!(outcome, Outcome::Trusted);
        assert_eq!(client.calls().len(), 1);
    }

    #[tokio::test]
    async fn absent_client_is_trusted_without_a_call() {
        let node =
            CredVerifyNode::with_client(CheckPolicy::Enterprise, UserIdType::NotUsed, None);

        let context = TreeContext::new().with_username("jdoe").with_password("x");

        let outcome = node.process(&context).await;
        assert_eq!(outcome, Outcome::Trusted);
    }

    #[tokio::test]
    async fn enterprise_ignores_username_entirely() {
        let client = MockClient::new(Answer::Clean);
        let node = node_with(CheckPolicy::Enterprise, UserIdType::Email, &client);

        let context = TreeContext::new()
            .with_username("completely-irrelevant")
            .with_password("secret");

        node.process(&context).await;
        assert_eq!(client.calls(), vec![Call::Password("secret".to_string())]);
    }

    #[tokio::test]
    async fn absent_credentials_pass_through_as_empty() {
        let client = MockClient::new(Answer::Clean);
        let node = node_with(CheckPolicy::Consumer, UserIdType::AutoDetect, &client);

        let outcome = node.process(&TreeContext::new()).await;
        assert_eq!(outcome, Outcome::Trusted);
        assert_eq!(
            client.calls(),
            vec![Call::Credentials(
                String::new(),
                String::new(),
                UserIdType::AutoDetect,
            )]
        );
    }

    #[test]
    fn construction_succeeds_with_blank_api_url() {
        let config = NodeConfig {
            api_url: String::new(),
            app_key: "k".to_string(),
            app_secret: "s".to_string(),
            check_policy: Some(CheckPolicy::Enterprise),
            user_id_type: Some(UserIdType::NotUsed),
        };
        assert_eq!(config.resolved_api_url(), crate::config::DEFAULT_API_URL);

        let node = CredVerifyNode::new(config).unwrap();
        assert_eq!(node.check_policy(), CheckPolicy::Enterprise);
        assert_eq!(node.user_id_type(), UserIdType::NotUsed);
    }

    #[test]
    fn debug_rendering_elides_the_client() {
        let node =
            CredVerifyNode::with_client(CheckPolicy::Consumer, UserIdType::Email, None);
        let rendered = format!("{node:?}");
        assert!(rendered.contains("Consumer"));
        assert!(rendered.contains("client_configured: false"));

        let client = MockClient::new(Answer::Clean);
        let node = node_with(CheckPolicy::Enterprise, UserIdType::NotUsed, &client);
        assert!(format!("{node:?}").contains("client_configured: true"));
    }

    #[test]
    fn construction_fails_on_unset_policy() {
        let config = NodeConfig {
            check_policy: None,
            ..NodeConfig::default()
        };
        let err = CredVerifyNode::new(config).unwrap_err();
        assert!(matches!(err, crate::NodeError::Configuration(_)));
    }

    #[test]
    fn construction_fails_on_malformed_api_url() {
        let config = NodeConfig {
            api_url: "not a url".to_string(),
            ..NodeConfig::default()
        };
        let err = CredVerifyNode::new(config).unwrap_err();
        assert!(matches!(err, crate::NodeError::Initialization(_)));
    }
}

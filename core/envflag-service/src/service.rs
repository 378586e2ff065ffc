//! Logging facade over `FlagClient`.

use envflag_types::{FeatureProvider, FlagType};
use std::sync::Arc;
use tracing::{info, warn};

use crate::client::FlagClient;
use crate::details::EvaluationDetails;
use crate::error::ServiceResult;
use crate::registry::ProviderRegistry;

/// Flag lookups for application code.
///
/// Never fails after construction: evaluation errors are logged and the
/// caller's default is returned.
pub struct FeatureFlagService {
    client: FlagClient,
}

impl FeatureFlagService {
    /// Registers `provider` as the default of a fresh registry and binds a
    /// client named `client_name` to it.
    pub fn new(client_name: &str, provider: Arc<dyn FeatureProvider>) -> ServiceResult<Self> {
        let registry = Arc::new(ProviderRegistry::new());
        registry.set_provider(provider)?;
        Self::with_registry(&registry, client_name)
    }

    /// Binds a client named `client_name` to an existing registry.
    pub fn with_registry(
        registry: &Arc<ProviderRegistry>,
        client_name: &str,
    ) -> ServiceResult<Self> {
        let client = registry.client(client_name)?;
        info!(client = %client_name, "Feature flag service initialized successfully");
        Ok(Self { client })
    }

    #[must_use]
    pub fn client(&self) -> &FlagClient {
        &self.client
    }

    /// Mutable access to the client, e.g. to add hooks.
    pub fn client_mut(&mut self) -> &mut FlagClient {
        &mut self.client
    }

    /// Evaluates `flag_key`, returning full details.
    ///
    /// On failure the details carry the default, `Reason::Error` and the
    /// error message.
    pub fn get_flag_details<T: FlagType>(
        &self,
        flag_key: &str,
        default: T,
    ) -> EvaluationDetails<T> {
        match self.client.evaluate(flag_key, default.clone()) {
            Ok(details) => {
                info!(
                    flag_key = %flag_key,
                    value = ?details.value,
                    variant = ?details.variant,
                    reason = %details.reason,
                    "Feature flag evaluated"
                );
                details
            }
            Err(e) => {
                warn!(
                    flag_key = %flag_key,
                    default = ?default,
                    error = %e,
                    "Failed to evaluate {} flag, using default",
                    T::KIND
                );
                EvaluationDetails::from_error(flag_key, default, &e)
            }
        }
    }

    /// Evaluates `flag_key`, returning the value or `default`.
    pub fn get_flag<T: FlagType>(&self, flag_key: &str, default: T) -> T {
        self.get_flag_details(flag_key, default).value
    }

    pub fn get_boolean_flag(&self, flag_key: &str, default: bool) -> bool {
        self.get_flag(flag_key, default)
    }

    pub fn get_string_flag(&self, flag_key: &str, default: &str) -> String {
        self.get_flag(flag_key, default.to_string())
    }

    pub fn get_float_flag(&self, flag_key: &str, default: f64) -> f64 {
        self.get_flag(flag_key, default)
    }

    pub fn get_int_flag(&self, flag_key: &str, default: i64) -> i64 {
        self.get_flag(flag_key, default)
    }

    pub fn get_object_flag(&self, flag_key: &str, default: serde_json::Value) -> serde_json::Value {
        self.get_flag(flag_key, default)
    }
}

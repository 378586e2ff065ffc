//! Provider registration.

use envflag_types::FeatureProvider;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::info;

use crate::client::FlagClient;
use crate::error::{ServiceError, ServiceResult};

/// Routes clients to providers.
///
/// A client bound to a name uses the provider registered under that name, or
/// the default provider when there is none. Clients look the provider up on
/// every evaluation, so replacing a provider takes effect immediately.
#[derive(Default)]
pub struct ProviderRegistry {
    default_provider: RwLock<Option<Arc<dyn FeatureProvider>>>,
    named: RwLock<HashMap<String, Arc<dyn FeatureProvider>>>,
}

impl ProviderRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Initializes `provider` and makes it the default.
    pub fn set_provider(&self, provider: Arc<dyn FeatureProvider>) -> ServiceResult<()> {
        initialize(provider.as_ref())?;
        info!(provider = %provider.metadata().name, "Default flag provider registered");
        *self
            .default_provider
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(provider);
        Ok(())
    }

    /// Initializes `provider` and binds it to clients named `client_name`.
    pub fn set_named_provider(
        &self,
        client_name: &str,
        provider: Arc<dyn FeatureProvider>,
    ) -> ServiceResult<()> {
        if client_name.is_empty() {
            return Err(ServiceError::InvalidClientName);
        }
        initialize(provider.as_ref())?;
        info!(
            client = %client_name,
            provider = %provider.metadata().name,
            "Named flag provider registered"
        );
        self.named
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(client_name.to_string(), provider);
        Ok(())
    }

    /// The provider a client named `client_name` evaluates against.
    #[must_use]
    pub fn provider_for(&self, client_name: &str) -> Option<Arc<dyn FeatureProvider>> {
        if let Some(provider) = self
            .named
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(client_name)
        {
            return Some(Arc::clone(provider));
        }
        self.default_provider
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Creates a client bound to this registry.
    pub fn client(self: &Arc<Self>, name: &str) -> ServiceResult<FlagClient> {
        if name.is_empty() {
            return Err(ServiceError::InvalidClientName);
        }
        Ok(FlagClient::new(name, Arc::clone(self)))
    }
}

fn initialize(provider: &dyn FeatureProvider) -> ServiceResult<()> {
    provider
        .initialize()
        .map_err(|message| ServiceError::ProviderInit {
            provider: provider.metadata().name,
            message,
        })
}

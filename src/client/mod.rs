//! Cost Explorer client construction
//!
//! Credential, region, and endpoint resolution happen here and nowhere
//! else; the rest of the crate receives a ready client and stays unaware
//! of how it was configured. Resolution follows the standard AWS chain
//! (environment, shared config/credentials files, IMDS), narrowed by the
//! optional overrides below.

use crate::error::Result;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_costexplorer::Client;
use tracing::debug;
use url::Url;

/// Overrides applied on top of the default AWS resolution chain
#[derive(Debug, Clone, Default)]
pub struct ClientSettings {
    /// Named profile from the shared config file
    pub profile: Option<String>,
    /// Signing/query region; Cost Explorer is a global service but still
    /// wants a region on the request
    pub region: Option<String>,
    /// Endpoint override, mainly for tests and private VPC endpoints
    pub endpoint_url: Option<Url>,
}

impl ClientSettings {
    /// Create settings that use the default resolution chain untouched
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the named profile
    #[must_use]
    pub fn profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Set the region
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the endpoint override
    #[must_use]
    pub fn endpoint_url(mut self, endpoint_url: Url) -> Self {
        self.endpoint_url = Some(endpoint_url);
        self
    }
}

/// Resolve AWS configuration and build the Cost Explorer client
pub async fn build_client(settings: &ClientSettings) -> Result<Client> {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());

    if let Some(profile) = &settings.profile {
        loader = loader.profile_name(profile);
    }
    if let Some(region) = &settings.region {
        loader = loader.region(Region::new(region.clone()));
    }
    if let Some(endpoint) = &settings.endpoint_url {
        loader = loader.endpoint_url(endpoint.as_str());
    }

    let shared = loader.load().await;
    debug!(
        profile = settings.profile.as_deref().unwrap_or("default"),
        region = ?shared.region(),
        "resolved AWS configuration"
    );

    Ok(Client::new(&shared))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_builder() {
        let settings = ClientSettings::new()
            .profile("billing")
            .region("us-east-1")
            .endpoint_url(Url::parse("https://ce.example.test").unwrap());

        assert_eq!(settings.profile.as_deref(), Some("billing"));
        assert_eq!(settings.region.as_deref(), Some("us-east-1"));
        assert_eq!(
            settings.endpoint_url.as_ref().map(Url::as_str),
            Some("https://ce.example.test/")
        );
    }

    #[test]
    fn test_settings_default_is_empty() {
        let settings = ClientSettings::new();
        assert!(settings.profile.is_none());
        assert!(settings.region.is_none());
        assert!(settings.endpoint_url.is_none());
    }
}

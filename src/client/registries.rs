use crate::client::{path_param, ApiClient};
use crate::error::ApiError;

/// Read-only client for remote image-manifest lookups through a registry
/// (`GET /registries/:id/v2/:repository/manifests/:tag`).
#[derive(Debug, Clone)]
pub struct RegistryManifestClient {
    api: ApiClient,
}

impl RegistryManifestClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    fn manifest_url(&self, registry_id: u32, repository: &str, tag: &str) -> Result<String, ApiError> {
        let repository = path_param("repository", repository)?;
        let tag = path_param("tag", tag)?;
        Ok(self.api.url(&[
            "registries",
            &registry_id.to_string(),
            "v2",
            &repository,
            "manifests",
            &tag,
        ]))
    }

    /// The manifest schema varies per registry version, so the payload is
    /// returned as raw JSON.
    pub async fn manifest(
        &self,
        registry_id: u32,
        repository: &str,
        tag: &str,
    ) -> Result<serde_json::Value, ApiError> {
        let url = self.manifest_url(registry_id, repository, tag)?;
        self.api.get_json(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> RegistryManifestClient {
        RegistryManifestClient::new(ApiClient::new("http://localhost:9000/api").unwrap())
    }

    #[test]
    fn builds_the_nested_manifest_path() {
        let url = client().manifest_url(2, "library/nginx", "1.25").unwrap();
        assert_eq!(
            url,
            "http://localhost:9000/api/registries/2/v2/library%2Fnginx/manifests/1.25"
        );
    }

    #[test]
    fn rejects_empty_parameters_before_any_request() {
        let err = client().manifest_url(2, "library/nginx", "").unwrap_err();
        assert!(matches!(err, ApiError::InvalidPathParam { name: "tag", .. }));
    }
}

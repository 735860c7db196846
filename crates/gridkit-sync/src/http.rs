//! HTTP template store client.
//!
//! Endpoints, relative to the configured base URL:
//! - `GET  /dashboard-templates?dashboard={layout_type}`
//! - `PATCH /dashboard-templates/{id}` with `{"templateConfig": partial}`
//!
//! Both responses wrap their payload as `{"data": ...}`.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use gridkit_core::StoreError;
use gridkit_layout::PartialTemplateConfig;
use gridkit_settings::StoreSettings;

use crate::store::{DashboardTemplate, TemplateStore};

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PatchBody<'a> {
    template_config: &'a PartialTemplateConfig,
}

/// reqwest-backed [`TemplateStore`]
#[derive(Debug, Clone)]
pub struct HttpTemplateStore {
    client: Client,
    base_url: String,
    timeout_ms: u64,
}

impl HttpTemplateStore {
    pub fn new(settings: &StoreSettings) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(settings.timeout())
            .build()
            .map_err(|e| StoreError::Request {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            timeout_ms: settings.timeout_ms,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn templates_url(&self) -> String {
        format!("{}/dashboard-templates", self.base_url)
    }

    fn template_url(&self, template_id: i64) -> String {
        format!("{}/dashboard-templates/{}", self.base_url, template_id)
    }

    fn transport_error(&self, err: reqwest::Error) -> StoreError {
        if err.is_timeout() {
            StoreError::Timeout {
                timeout_ms: self.timeout_ms,
            }
        } else {
            StoreError::Request {
                message: err.to_string(),
            }
        }
    }

    async fn read_data<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, StoreError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await.map_err(|e| self.transport_error(e))?;
        decode_envelope(&text)
    }
}

fn decode_envelope<T: DeserializeOwned>(text: &str) -> Result<T, StoreError> {
    serde_json::from_str::<Envelope<T>>(text)
        .map(|envelope| envelope.data)
        .map_err(|e| StoreError::Decode {
            reason: e.to_string(),
        })
}

#[async_trait]
impl TemplateStore for HttpTemplateStore {
    async fn fetch_templates(
        &self,
        layout_type: &str,
    ) -> Result<Vec<DashboardTemplate>, StoreError> {
        let url = self.templates_url();
        tracing::debug!("Fetching {} templates from {}", layout_type, url);

        let response = self
            .client
            .get(&url)
            .query(&[("dashboard", layout_type)])
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        self.read_data(response).await
    }

    async fn patch_template(
        &self,
        template_id: i64,
        partial: &PartialTemplateConfig,
    ) -> Result<DashboardTemplate, StoreError> {
        let url = self.template_url(template_id);
        tracing::debug!(
            "Patching template {} ({:?})",
            template_id,
            partial.breakpoints()
        );

        let response = self
            .client
            .patch(&url)
            .json(&PatchBody {
                template_config: partial,
            })
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        self.read_data(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridkit_layout::{Breakpoint, WireItem};
    use serde_json::json;

    fn store(base_url: &str) -> HttpTemplateStore {
        HttpTemplateStore::new(&StoreSettings {
            base_url: base_url.to_string(),
            timeout_ms: 500,
        })
        .unwrap()
    }

    #[test]
    fn test_urls() {
        let store = store("https://console.example.com/api/chrome-service/v1/");
        assert_eq!(
            store.templates_url(),
            "https://console.example.com/api/chrome-service/v1/dashboard-templates"
        );
        assert_eq!(
            store.template_url(12),
            "https://console.example.com/api/chrome-service/v1/dashboard-templates/12"
        );
    }

    #[test]
    fn test_patch_body_shape() {
        let mut partial = PartialTemplateConfig::default();
        partial.set(Breakpoint::Lg, vec![WireItem::new("chart#1", 0, 0, 1, 1)]);
        let body = serde_json::to_value(PatchBody {
            template_config: &partial,
        })
        .unwrap();
        assert_eq!(
            body,
            json!({"templateConfig": {"lg": [{"i": "chart#1", "x": 0, "y": 0, "w": 1, "h": 1, "title": ""}]}})
        );
    }

    #[test]
    fn test_decode_envelope() {
        let templates: Vec<DashboardTemplate> = decode_envelope(
            r#"{"data": [{"id": 3, "default": true, "templateConfig": {"sm": []}}]}"#,
        )
        .unwrap();
        assert_eq!(templates[0].id, 3);

        let err = decode_envelope::<Vec<DashboardTemplate>>(r#"[{"id": 3}]"#).unwrap_err();
        assert!(matches!(err, StoreError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_store_is_request_error() {
        let store = store("http://127.0.0.1:1");
        let err = store.fetch_templates("landingPage").await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::Request { .. } | StoreError::Timeout { .. }
        ));
    }
}

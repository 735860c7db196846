//! Template store records and the store trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gridkit_core::StoreError;
use gridkit_layout::{PartialTemplateConfig, TemplateConfig};

/// Descriptor of the template family a record belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateBase {
    pub name: String,
    pub display_name: String,
}

/// A stored dashboard template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardTemplate {
    pub id: i64,
    /// Whether this is the user's default template for its layout type
    #[serde(default)]
    pub default: bool,
    pub template_config: TemplateConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_base: Option<TemplateBase>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Remote template storage
#[async_trait]
pub trait TemplateStore: Send + Sync {
    /// All templates of a layout type visible to the current user
    async fn fetch_templates(&self, layout_type: &str) -> Result<Vec<DashboardTemplate>, StoreError>;

    /// Patch the breakpoints present in `partial`; returns the canonical
    /// template after the update
    async fn patch_template(
        &self,
        template_id: i64,
        partial: &PartialTemplateConfig,
    ) -> Result<DashboardTemplate, StoreError>;
}

/// First template flagged as default
pub fn default_template(templates: &[DashboardTemplate]) -> Option<&DashboardTemplate> {
    templates.iter().find(|t| t.default)
}

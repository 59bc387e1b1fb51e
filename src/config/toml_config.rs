use crate::domain::model::{Decoration, Locale, ReportKind};
use crate::utils::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk configuration. Every field is optional; missing values keep
/// whatever the lower layer provided.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub locale: Option<Locale>,
    pub report: Option<ReportSection>,
    pub delivery: Option<DeliverySection>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportSection {
    pub kind: Option<ReportKind>,
    pub decorations: Option<Vec<Decoration>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeliverySection {
    pub order_id: Option<String>,
    pub carrier: Option<String>,
}

impl FileConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| AppError::ConfigReadError {
            path: path.display().to_string(),
            source,
        })?;
        tracing::debug!("Loaded config file {}", path.display());
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

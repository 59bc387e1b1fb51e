use crate::utils::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Wording used for every fixed line the program prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl FromStr for Locale {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "ru" | "russian" => Ok(Self::Ru),
            _ => Err(AppError::InvalidConfigValue {
                field: "locale".to_string(),
                value: value.to_string(),
                reason: "Supported locales: en, ru".to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Locale {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Base report a decoration chain starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ReportKind {
    #[default]
    Sales,
    User,
}

impl FromStr for ReportKind {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "sales" => Ok(Self::Sales),
            "user" | "users" => Ok(Self::User),
            _ => Err(AppError::InvalidConfigValue {
                field: "report.kind".to_string(),
                value: value.to_string(),
                reason: "Supported reports: sales, user".to_string(),
            }),
        }
    }
}

impl TryFrom<String> for ReportKind {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One annotation a decorator appends to the report it wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Decoration {
    DateFilter,
    Sorting,
    WordExport,
    PdfExport,
}

impl Decoration {
    pub const ALL: [Decoration; 4] = [
        Decoration::DateFilter,
        Decoration::Sorting,
        Decoration::WordExport,
        Decoration::PdfExport,
    ];

    /// The chain the demo applies when nothing else is configured.
    pub fn default_chain() -> Vec<Decoration> {
        vec![Decoration::DateFilter, Decoration::Sorting, Decoration::WordExport]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Decoration::DateFilter => "date_filter",
            Decoration::Sorting => "sorting",
            Decoration::WordExport => "word_export",
            Decoration::PdfExport => "pdf_export",
        }
    }
}

impl fmt::Display for Decoration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Decoration {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_lowercase().replace('-', "_");
        Decoration::ALL
            .into_iter()
            .find(|d| d.name() == normalized)
            .ok_or_else(|| AppError::InvalidConfigValue {
                field: "report.decorations".to_string(),
                value: value.to_string(),
                reason: "Supported decorations: date_filter, sorting, word_export, pdf_export"
                    .to_string(),
            })
    }
}

impl TryFrom<String> for Decoration {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Delivery backend selected by key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CarrierKind {
    #[default]
    Internal,
    YandexGo,
    Kazpost,
}

impl CarrierKind {
    /// Maps a user-supplied key to a carrier. Comparison ignores case and
    /// surrounding whitespace; unknown keys fall back to `Internal`.
    pub fn from_key(key: &str) -> Self {
        match Self::normalize_key(key).as_str() {
            "internal" => CarrierKind::Internal,
            "yandex" => CarrierKind::YandexGo,
            "kazpost" => CarrierKind::Kazpost,
            _ => CarrierKind::Internal,
        }
    }

    pub fn normalize_key(key: &str) -> String {
        key.trim().to_lowercase()
    }

    /// True when `key` names one of the known carriers.
    pub fn is_known_key(key: &str) -> bool {
        let normalized = Self::normalize_key(key);
        [CarrierKind::Internal, CarrierKind::YandexGo, CarrierKind::Kazpost]
            .iter()
            .any(|kind| kind.key() == normalized)
    }

    pub fn key(&self) -> &'static str {
        match self {
            CarrierKind::Internal => "internal",
            CarrierKind::YandexGo => "yandex",
            CarrierKind::Kazpost => "kazpost",
        }
    }
}

impl From<&str> for CarrierKind {
    fn from(key: &str) -> Self {
        CarrierKind::from_key(key)
    }
}

impl fmt::Display for CarrierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// What a single run of the showcase produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub report: String,
    pub carrier: CarrierKind,
    pub confirmation: String,
    pub status: String,
}

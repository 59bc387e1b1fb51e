#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::FileConfig;

use crate::core::ConfigProvider;
use crate::domain::model::{Decoration, Locale, ReportKind};
use crate::utils::error::Result;
use crate::utils::validation::{validate_no_control_chars, validate_non_empty_string, Validate};

pub const DEFAULT_ORDER_ID: &str = "12345";

/// Fully resolved settings: built-in defaults, then the config file, then
/// command-line flags, each layer overriding the one before.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub locale: Locale,
    pub report_kind: ReportKind,
    pub decorations: Vec<Decoration>,
    pub order_id: String,
    pub carrier: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            report_kind: ReportKind::default(),
            decorations: Decoration::default_chain(),
            order_id: DEFAULT_ORDER_ID.to_string(),
            carrier: None,
        }
    }
}

impl Settings {
    pub fn with_file(mut self, file: FileConfig) -> Self {
        if let Some(locale) = file.locale {
            self.locale = locale;
        }
        if let Some(report) = file.report {
            if let Some(kind) = report.kind {
                self.report_kind = kind;
            }
            if let Some(decorations) = report.decorations {
                self.decorations = decorations;
            }
        }
        if let Some(delivery) = file.delivery {
            if let Some(order_id) = delivery.order_id {
                self.order_id = order_id;
            }
            if delivery.carrier.is_some() {
                self.carrier = delivery.carrier;
            }
        }
        self
    }

    #[cfg(feature = "cli")]
    pub fn with_cli(mut self, cli: &CliConfig) -> Self {
        if let Some(locale) = cli.locale {
            self.locale = locale;
        }
        if let Some(kind) = cli.report {
            self.report_kind = kind;
        }
        if cli.no_decorations {
            self.decorations.clear();
        } else if let Some(decorations) = &cli.decorate {
            self.decorations = decorations.clone();
        }
        if let Some(order_id) = &cli.order_id {
            self.order_id = order_id.clone();
        }
        if cli.carrier.is_some() {
            self.carrier = cli.carrier.clone();
        }
        self
    }

    /// Builds validated settings from the command line, loading the config
    /// file it points at if any.
    #[cfg(feature = "cli")]
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let mut settings = Settings::default();
        if let Some(path) = &cli.config {
            settings = settings.with_file(FileConfig::from_file(path)?);
        }
        let settings = settings.with_cli(cli);
        settings.validate()?;
        tracing::debug!("Resolved settings: {:?}", settings);
        Ok(settings)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("delivery.order_id", &self.order_id)?;
        validate_no_control_chars("delivery.order_id", &self.order_id)?;
        Ok(())
    }
}

impl ConfigProvider for Settings {
    fn locale(&self) -> Locale {
        self.locale
    }

    fn report_kind(&self) -> ReportKind {
        self.report_kind
    }

    fn decorations(&self) -> &[Decoration] {
        &self.decorations
    }

    fn order_id(&self) -> &str {
        &self.order_id
    }

    fn carrier(&self) -> Option<&str> {
        self.carrier.as_deref()
    }
}

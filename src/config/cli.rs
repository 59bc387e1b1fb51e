use crate::domain::model::{Decoration, Locale, ReportKind};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "report-delivery")]
#[command(about = "Composes a decorated report and hands an order to a delivery backend")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Base report: sales or user
    #[arg(long)]
    pub report: Option<ReportKind>,

    /// Decorations in wrap order, e.g. date_filter,sorting,pdf_export
    #[arg(long, value_delimiter = ',', conflicts_with = "no_decorations")]
    pub decorate: Option<Vec<Decoration>>,

    /// Print the bare report with no decorations
    #[arg(long)]
    pub no_decorations: bool,

    /// Delivery backend key; when set, stdin is not read
    #[arg(long)]
    pub carrier: Option<String>,

    #[arg(long)]
    pub order_id: Option<String>,

    /// Output language: en or ru
    #[arg(long)]
    pub locale: Option<Locale>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

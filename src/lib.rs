pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{FileConfig, Settings};

pub use crate::core::{
    delivery::{DeliveryServiceFactory, InternalDeliveryService},
    report::{compose, Decorated, ReportExt, SalesReport, UserReport},
    showcase::Showcase,
};
pub use domain::model::{CarrierKind, Decoration, Locale, ReportKind, RunSummary};
pub use domain::ports::{ConfigProvider, DeliveryService, Report};
pub use utils::error::{AppError, Result};

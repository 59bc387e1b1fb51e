pub mod delivery;
pub mod report;
pub mod showcase;

pub use crate::domain::model::{CarrierKind, Decoration, Locale, ReportKind, RunSummary};
pub use crate::domain::ports::{ConfigProvider, DeliveryService, Report};
pub use crate::utils::error::Result;

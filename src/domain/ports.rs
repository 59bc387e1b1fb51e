use crate::domain::model::{CarrierKind, Decoration, Locale, ReportKind};

/// Produces report text. Implementations are pure: calling `generate`
/// repeatedly returns the same string.
pub trait Report {
    fn generate(&self) -> String;
}

impl<R: Report + ?Sized> Report for Box<R> {
    fn generate(&self) -> String {
        (**self).generate()
    }
}

/// Uniform interface over every delivery backend.
pub trait DeliveryService {
    /// Places the order and returns the backend's confirmation line.
    fn deliver_order(&self, order_id: &str) -> String;

    fn delivery_status(&self, order_id: &str) -> String;

    fn carrier(&self) -> CarrierKind;
}

pub trait ConfigProvider {
    fn locale(&self) -> Locale;
    fn report_kind(&self) -> ReportKind;
    fn decorations(&self) -> &[Decoration];
    fn order_id(&self) -> &str;
    /// A preset carrier key. `None` means the key is read from stdin.
    fn carrier(&self) -> Option<&str>;
}

use crate::adapters::{KazpostAdapter, KazpostClient, YandexGoAdapter, YandexGoClient};
use crate::domain::model::{CarrierKind, Locale};
use crate::domain::ports::DeliveryService;

/// In-house delivery. Implements the interface directly, no translation.
#[derive(Debug, Clone, Default)]
pub struct InternalDeliveryService {
    locale: Locale,
}

impl InternalDeliveryService {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }
}

impl DeliveryService for InternalDeliveryService {
    fn deliver_order(&self, order_id: &str) -> String {
        tracing::debug!("internal: deliver_order({})", order_id);
        match self.locale {
            Locale::En => format!("Internal delivery of order {} registered.", order_id),
            Locale::Ru => format!("Внутренняя доставка заказа {} оформлена.", order_id),
        }
    }

    fn delivery_status(&self, order_id: &str) -> String {
        match self.locale {
            Locale::En => format!("Order {} status: delivered.", order_id),
            Locale::Ru => format!("Статус заказа {}: доставлено.", order_id),
        }
    }

    fn carrier(&self) -> CarrierKind {
        CarrierKind::Internal
    }
}

/// Builds the delivery backend for a carrier key.
pub struct DeliveryServiceFactory;

impl DeliveryServiceFactory {
    /// Never fails: unrecognised keys yield the internal service.
    pub fn create(key: &str, locale: Locale) -> Box<dyn DeliveryService> {
        let kind = CarrierKind::from_key(key);
        if !CarrierKind::is_known_key(key) {
            tracing::debug!("Unknown carrier key {:?}, using internal delivery", key);
        }
        Self::create_for(kind, locale)
    }

    pub fn create_for(kind: CarrierKind, locale: Locale) -> Box<dyn DeliveryService> {
        tracing::info!("Selected delivery backend: {}", kind);
        match kind {
            CarrierKind::Internal => Box::new(InternalDeliveryService::new(locale)),
            CarrierKind::YandexGo => Box::new(YandexGoAdapter::new(YandexGoClient::new(locale))),
            CarrierKind::Kazpost => Box::new(KazpostAdapter::new(KazpostClient::new(locale))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_lines_embed_order_id() {
        let service = InternalDeliveryService::new(Locale::En);
        assert_eq!(
            service.deliver_order("12345"),
            "Internal delivery of order 12345 registered."
        );
        assert_eq!(service.delivery_status("12345"), "Order 12345 status: delivered.");
    }

    #[test]
    fn test_factory_selects_each_carrier() {
        let cases = [
            ("internal", CarrierKind::Internal),
            ("yandex", CarrierKind::YandexGo),
            ("kazpost", CarrierKind::Kazpost),
            ("Yandex", CarrierKind::YandexGo),
            ("pony-express", CarrierKind::Internal),
        ];
        for (key, expected) in cases {
            assert_eq!(
                DeliveryServiceFactory::create(key, Locale::En).carrier(),
                expected,
                "key {:?}",
                key
            );
        }
    }

    #[test]
    fn test_unknown_key_behaves_like_internal() {
        let fallback = DeliveryServiceFactory::create("fedex", Locale::Ru);
        let internal = DeliveryServiceFactory::create("internal", Locale::Ru);
        assert_eq!(fallback.deliver_order("9"), internal.deliver_order("9"));
        assert_eq!(fallback.delivery_status("9"), internal.delivery_status("9"));
    }
}

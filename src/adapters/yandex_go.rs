use crate::domain::model::{CarrierKind, Locale};
use crate::domain::ports::DeliveryService;

/// Stand-in for the Yandex Go courier API. Its operations are named the
/// way that service names them, not the way the rest of the crate does.
#[derive(Debug, Clone, Default)]
pub struct YandexGoClient {
    locale: Locale,
}

impl YandexGoClient {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn send_order(&self, id: &str) -> String {
        tracing::debug!("yandex_go: send_order({})", id);
        match self.locale {
            Locale::En => format!("Yandex Go: order {} accepted, courier dispatched.", id),
            Locale::Ru => format!("Яндекс Go: заказ {} принят и выехал курьер.", id),
        }
    }

    pub fn track(&self, id: &str) -> String {
        tracing::debug!("yandex_go: track({})", id);
        match self.locale {
            Locale::En => format!("Yandex Go: order {} is on the way.", id),
            Locale::Ru => format!("Яндекс Go: заказ {} в пути.", id),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct YandexGoAdapter {
    client: YandexGoClient,
}

impl YandexGoAdapter {
    pub fn new(client: YandexGoClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &YandexGoClient {
        &self.client
    }
}

impl DeliveryService for YandexGoAdapter {
    fn deliver_order(&self, order_id: &str) -> String {
        self.client.send_order(order_id)
    }

    fn delivery_status(&self, order_id: &str) -> String {
        self.client.track(order_id)
    }

    fn carrier(&self) -> CarrierKind {
        CarrierKind::YandexGo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapter_forwards_to_native_calls() {
        let client = YandexGoClient::new(Locale::En);
        let adapter = YandexGoAdapter::new(client.clone());

        assert_eq!(adapter.deliver_order("42"), client.send_order("42"));
        assert_eq!(adapter.delivery_status("42"), client.track("42"));
        assert_eq!(adapter.carrier(), CarrierKind::YandexGo);
    }

    #[test]
    fn test_russian_wording() {
        let adapter = YandexGoAdapter::new(YandexGoClient::new(Locale::Ru));
        assert_eq!(
            adapter.deliver_order("12345"),
            "Яндекс Go: заказ 12345 принят и выехал курьер."
        );
    }
}

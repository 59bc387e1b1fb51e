use crate::domain::model::{CarrierKind, Locale};
use crate::domain::ports::DeliveryService;

/// Stand-in for the Kazpost parcel API.
#[derive(Debug, Clone, Default)]
pub struct KazpostClient {
    locale: Locale,
}

impl KazpostClient {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn ship_package(&self, id: &str) -> String {
        tracing::debug!("kazpost: ship_package({})", id);
        match self.locale {
            Locale::En => format!("Kazpost: parcel {} accepted for sorting.", id),
            Locale::Ru => format!("Казпочта: посылка {} принята на сортировку.", id),
        }
    }

    pub fn check_status(&self, id: &str) -> String {
        tracing::debug!("kazpost: check_status({})", id);
        match self.locale {
            Locale::En => format!("Kazpost: parcel {} is awaiting pickup.", id),
            Locale::Ru => format!("Казпочта: посылка {} ожидает вручения.", id),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct KazpostAdapter {
    client: KazpostClient,
}

impl KazpostAdapter {
    pub fn new(client: KazpostClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &KazpostClient {
        &self.client
    }
}

impl DeliveryService for KazpostAdapter {
    fn deliver_order(&self, order_id: &str) -> String {
        self.client.ship_package(order_id)
    }

    fn delivery_status(&self, order_id: &str) -> String {
        self.client.check_status(order_id)
    }

    fn carrier(&self) -> CarrierKind {
        CarrierKind::Kazpost
    }
}

// Adapters layer: third-party courier clients and the translation structs
// that expose them through `DeliveryService`.

pub mod kazpost;
pub mod yandex_go;

pub use kazpost::{KazpostAdapter, KazpostClient};
pub use yandex_go::{YandexGoAdapter, YandexGoClient};

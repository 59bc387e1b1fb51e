use report_delivery::adapters::{KazpostClient, YandexGoClient};
use report_delivery::{CarrierKind, DeliveryService, DeliveryServiceFactory, Locale};

#[test]
fn test_uppercase_yandex_routes_through_courier_client() {
    let service = DeliveryServiceFactory::create("YANDEX", Locale::En);
    let client = YandexGoClient::new(Locale::En);

    let confirmation = service.deliver_order("12345");
    assert_eq!(confirmation, client.send_order("12345"));
    assert_eq!(
        confirmation,
        "Yandex Go: order 12345 accepted, courier dispatched."
    );
    assert_eq!(service.delivery_status("12345"), client.track("12345"));
}

#[test]
fn test_kazpost_routes_through_courier_client() {
    let service = DeliveryServiceFactory::create("kazpost", Locale::Ru);
    let client = KazpostClient::new(Locale::Ru);

    assert_eq!(service.deliver_order("777"), client.ship_package("777"));
    assert_eq!(service.delivery_status("777"), client.check_status("777"));
    assert_eq!(
        service.deliver_order("777"),
        "Казпочта: посылка 777 принята на сортировку."
    );
}

#[test]
fn test_every_variant_embeds_order_id() {
    for key in ["internal", "yandex", "kazpost", "whatever"] {
        for locale in [Locale::En, Locale::Ru] {
            let service = DeliveryServiceFactory::create(key, locale);
            assert!(service.deliver_order("ORD-9").contains("ORD-9"), "{} {:?}", key, locale);
            assert!(service.delivery_status("ORD-9").contains("ORD-9"), "{} {:?}", key, locale);
        }
    }
}

#[test]
fn test_variants_word_their_lines_differently() {
    let lines: Vec<String> = ["internal", "yandex", "kazpost"]
        .iter()
        .map(|key| DeliveryServiceFactory::create(key, Locale::En).delivery_status("1"))
        .collect();

    assert_ne!(lines[0], lines[1]);
    assert_ne!(lines[1], lines[2]);
    assert_ne!(lines[0], lines[2]);
}

#[test]
fn test_unrecognised_keys_fall_back_to_internal() {
    let internal = DeliveryServiceFactory::create("internal", Locale::En);
    for key in ["", "dhl", "  ", "yandex-go", "КАЗПОЧТА"] {
        let service = DeliveryServiceFactory::create(key, Locale::En);
        assert_eq!(service.carrier(), CarrierKind::Internal, "key {:?}", key);
        assert_eq!(service.deliver_order("5"), internal.deliver_order("5"));
    }
}

#[test]
fn test_mixed_case_keys() {
    assert_eq!(
        DeliveryServiceFactory::create("KazPost", Locale::En).carrier(),
        CarrierKind::Kazpost
    );
    assert_eq!(
        DeliveryServiceFactory::create("INTERNAL", Locale::En).carrier(),
        CarrierKind::Internal
    );
    assert_eq!(
        DeliveryServiceFactory::create_for(CarrierKind::YandexGo, Locale::En).carrier(),
        CarrierKind::YandexGo
    );
}

//! Statistical tests for the simulated order backend.

#![allow(clippy::unwrap_used)]

use std::collections::HashSet;

use order_intake::config::SimulationConfig;
use order_intake::{
    CustomText, CustomerInfo, OrderBackend, OrderBackendError, OrderRequest, PostalCode,
    SimulatedOrderBackend, TextSanitizer,
};

const CALLS: usize = 10_000;

fn request() -> OrderRequest {
    OrderRequest {
        custom_text: TextSanitizer::default_limits().sanitize("RAHUL", &CustomText::empty()),
        quantity: 1,
        unit_price: order_intake::Money::rupees(2000),
        customer_info: CustomerInfo {
            name: "Rahul Sharma".to_string(),
            email: "rahul@example.com".to_string(),
            phone: "9876543210".to_string(),
            address: "12 MG Road".to_string(),
            postal_code: PostalCode::from("110001"),
        },
    }
}

#[tokio::test]
async fn failure_rate_converges_and_ids_are_unique() {
    let backend = SimulatedOrderBackend::new(&SimulationConfig {
        order_latency_ms: 0,
        seed: Some(2026),
        ..SimulationConfig::default()
    });
    let request = request();

    let mut failures = 0usize;
    let mut ids = HashSet::new();
    for _ in 0..CALLS {
        match backend.create_order(&request).await {
            Ok(confirmation) => {
                assert!(ids.insert(confirmation.order_id), "duplicate order id");
            }
            Err(OrderBackendError::Rejected { message }) => {
                assert_eq!(
                    message.as_deref(),
                    Some("Server temporarily unavailable. Please try again.")
                );
                failures += 1;
            }
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    let rate = failures as f64 / CALLS as f64;
    assert!((0.04..=0.06).contains(&rate), "failure rate {rate}");
    assert_eq!(ids.len(), CALLS - failures);
}

#[tokio::test]
async fn failures_do_not_depend_on_input() {
    let config = SimulationConfig {
        order_latency_ms: 0,
        failure_rate: 0.5,
        seed: Some(9),
        ..SimulationConfig::default()
    };
    let plain = SimulatedOrderBackend::new(&config);
    let other = SimulatedOrderBackend::new(&config);

    let mut different = request();
    different.customer_info.postal_code = PostalCode::from("400001");
    different.custom_text = TextSanitizer::default_limits().sanitize("ASHA", &CustomText::empty());

    for _ in 0..200 {
        let a = plain.create_order(&request()).await.is_ok();
        let b = other.create_order(&different).await.is_ok();
        assert_eq!(a, b);
    }
}

//! Accessor behaviour when no server is listening.
//!
//! The pool is lazy, so every call has to acquire its own connection and
//! must report the failure as a connection error, never as "not found".

use northwind_core::DatabaseConfig;
use northwind_db::{
    connect_lazy, Customer, CustomerRepo, ErrorKind, Operation, Product, ProductRepo, Shipper,
    ShipperRepo,
};
use sqlx::MySqlPool;

fn unreachable_pool() -> MySqlPool {
    let config = DatabaseConfig {
        // Port 1 (tcpmux) is closed on any sane test host
        address: "127.0.0.1:1".into(),
        acquire_timeout_secs: 1,
        ..Default::default()
    };
    connect_lazy(&config).expect("valid config")
}

#[tokio::test]
async fn every_operation_reports_connection_failure() {
    let pool = unreachable_pool();
    let products = ProductRepo::new(&pool);

    let err = products.get_all().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Connection, "{err}");
    assert_eq!(err.target().operation, Operation::GetAll);

    let err = products.find(&1).await.unwrap_err();
    assert!(err.is_connection(), "{err}");
    assert!(!err.is_not_found());
    assert_eq!(err.target().key.as_deref(), Some("1"));

    let err = products.add(Product::new("Marzipan Chocolate Bar")).await.unwrap_err();
    assert!(err.is_connection(), "{err}");

    let mut product = Product::new("Marzipan Chocolate Bar");
    product.product_id = Some(1);
    let err = products.update(&product).await.unwrap_err();
    assert!(err.is_connection(), "{err}");

    let err = products.delete(&1).await.unwrap_err();
    assert!(err.is_connection(), "{err}");
}

#[tokio::test]
async fn error_message_names_the_call() {
    let pool = unreachable_pool();
    let err = CustomerRepo::new(&pool)
        .delete(&"ALFKI".to_string())
        .await
        .unwrap_err();
    assert!(
        err.to_string().starts_with("delete customer 'ALFKI': connection failed"),
        "{err}"
    );
}

#[tokio::test]
async fn keyless_update_is_rejected_before_connecting() {
    let pool = unreachable_pool();

    let err = ShipperRepo::new(&pool)
        .update(&Shipper::new("Speedy Express", None))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingKey);

    let err = CustomerRepo::new(&pool)
        .add(Customer::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingKey);
    assert_eq!(err.target().operation, Operation::Add);
}

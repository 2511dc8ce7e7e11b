use super::*;

/// Tests creating a new order row.
///
/// Verifies that every value is stored, the pilotes number is stored by name and the
/// order starts unnotified.
///
/// Expected: Ok with the stored order
#[tokio::test]
async fn creates_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::customer::create_customer(db).await?;
    let address = factory::address::create_address(db).await?;
    let now = Utc::now();

    let repo = OrderRepository::new(db);
    let order = repo
        .create(NewOrder {
            order_number: "0000000100".to_string(),
            creation_date: now,
            address_id: address.id,
            pilotes_number: PilotesNumber::Fifteen,
            total: 15.0,
            customer_id: customer.id,
        })
        .await?;

    assert_eq!(order.order_number, "0000000100");
    assert_eq!(order.pilotes_number, "FIFTEEN");
    assert_eq!(order.total, 15.0);
    assert!(!order.notified);
    assert_eq!(order.customer_id, customer.id);
    assert_eq!(order.address_id, address.id);

    Ok(())
}

/// Tests that order numbers are unique.
///
/// Expected: Err on the second insert with the same number
#[tokio::test]
async fn fails_for_duplicate_order_number() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, address, existing) = factory::helpers::create_order_with_dependencies(db).await?;

    let repo = OrderRepository::new(db);
    let result = repo
        .create(NewOrder {
            order_number: existing.order_number.clone(),
            creation_date: Utc::now(),
            address_id: address.id,
            pilotes_number: PilotesNumber::Five,
            total: 5.0,
            customer_id: customer.id,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

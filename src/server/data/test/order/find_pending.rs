use super::*;

/// Tests that only unnotified orders created before the cutoff are pending.
///
/// Expected: Ok with only the old, unnotified order
#[tokio::test]
async fn returns_old_unnotified_orders() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::customer::create_customer(db).await?;
    let address = factory::address::create_address(db).await?;
    let now = Utc::now();

    let pending = factory::order::OrderFactory::new(db, customer.id, address.id)
        .creation_date(now - Duration::minutes(10))
        .build()
        .await?;
    let _already_notified = factory::order::OrderFactory::new(db, customer.id, address.id)
        .creation_date(now - Duration::minutes(10))
        .notified(true)
        .build()
        .await?;
    let _recent = factory::order::OrderFactory::new(db, customer.id, address.id)
        .creation_date(now)
        .build()
        .await?;

    let repo = OrderRepository::new(db);
    let result = repo.find_pending(now - Duration::minutes(5)).await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].order.id, pending.id);
    assert_eq!(result[0].customer.id, customer.id);
    assert_eq!(result[0].address.id, address.id);

    Ok(())
}

/// Tests the pending lookup on an empty table.
///
/// Expected: Ok with no orders
#[tokio::test]
async fn returns_empty_without_orders() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderRepository::new(db);
    let result = repo.find_pending(Utc::now()).await?;

    assert!(result.is_empty());

    Ok(())
}

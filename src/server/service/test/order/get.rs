use super::*;

/// Tests that a blank order number is rejected.
///
/// Expected: Err(OrderNumberEmpty) for None, "" and whitespace
#[tokio::test]
async fn fails_for_blank_number() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = order_config();

    let service = OrderService::new(db, &config);

    for number in [None, Some(""), Some("  ")] {
        assert_pilotes_err(service.get(number).await, PilotesError::OrderNumberEmpty);
    }

    Ok(())
}

/// Tests getting an order with its customer and address.
///
/// Expected: Ok(Some) with the domain order
#[tokio::test]
async fn gets_order_by_number() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = order_config();

    let (customer, address, order) = factory::helpers::create_order_with_dependencies(db).await?;

    let result = OrderService::new(db, &config)
        .get(Some(&order.order_number))
        .await
        .unwrap();

    assert!(result.is_some());
    let found = result.unwrap();
    assert_eq!(found.order_number, order.order_number);
    assert_eq!(found.pilotes_number, PilotesNumber::Five);
    assert_eq!(found.customer.email, customer.email);
    assert_eq!(found.delivery_address.id, address.id);

    Ok(())
}

/// Tests getting an unknown order.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_number() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = order_config();

    let result = OrderService::new(db, &config)
        .get(Some("0000000001"))
        .await
        .unwrap();

    assert!(result.is_none());

    Ok(())
}

/// Tests that a stored pilotes number outside the known variants is reported.
///
/// Expected: Err(InternalErr)
#[tokio::test]
async fn fails_for_unknown_stored_pilotes_number() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = order_config();

    let customer = factory::customer::create_customer(db).await?;
    let address = factory::address::create_address(db).await?;
    let order = factory::order::OrderFactory::new(db, customer.id, address.id)
        .pilotes_number("TWENTY")
        .build()
        .await?;

    let result = OrderService::new(db, &config)
        .get(Some(&order.order_number))
        .await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}

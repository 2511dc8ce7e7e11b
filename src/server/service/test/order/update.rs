use super::*;

/// Tests updating the pilotes number and delivery address of a recent order.
///
/// Verifies the total is recomputed while creation date and customer are unchanged.
///
/// Expected: Ok with the existing order number
#[tokio::test]
async fn updates_recent_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = order_config();

    let (customer, _address, order) = factory::helpers::create_order_with_dependencies(db).await?;

    let service = OrderService::new(db, &config);
    let number = service
        .update(Some(OrderParams {
            order_number: Some(order.order_number.clone()),
            ..order_params(&customer.email, PilotesNumber::Fifteen)
        }))
        .await
        .unwrap();

    assert_eq!(number, order.order_number);

    let updated = service.get(Some(&number)).await.unwrap().unwrap();
    assert_eq!(updated.pilotes_number, PilotesNumber::Fifteen);
    assert_eq!(updated.total, 15.0);
    assert_eq!(updated.delivery_address.street, "785 Cabell Avenue");
    assert_eq!(updated.creation_date, order.creation_date);
    assert_eq!(updated.customer.id, customer.id);

    Ok(())
}

/// Tests that an order past its mutability window cannot be updated.
///
/// Expected: Err(OrderExpired) with the stored order unchanged
#[tokio::test]
async fn fails_for_expired_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = order_config();

    let customer = factory::customer::create_customer(db).await?;
    let address = factory::address::create_address(db).await?;
    let order = factory::order::OrderFactory::new(db, customer.id, address.id)
        .creation_date(Utc::now() - Duration::minutes(6))
        .build()
        .await?;

    let result = OrderService::new(db, &config)
        .update(Some(OrderParams {
            order_number: Some(order.order_number.clone()),
            ..order_params(&customer.email, PilotesNumber::Fifteen)
        }))
        .await;

    assert_pilotes_err(result, PilotesError::OrderExpired);

    let stored = entity::prelude::PilotesOrder::find_by_id(order.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.pilotes_number, "FIVE");

    Ok(())
}

/// Tests that the customer of an order cannot be changed.
///
/// Checked independently of the expiry: a recent order is used.
///
/// Expected: Err(OrderCustomerCannotBeChanged)
#[tokio::test]
async fn fails_for_different_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = order_config();

    let (_customer, _address, order) = factory::helpers::create_order_with_dependencies(db).await?;
    let other = factory::customer::create_customer(db).await?;

    let result = OrderService::new(db, &config)
        .update(Some(OrderParams {
            order_number: Some(order.order_number.clone()),
            ..order_params(&other.email, PilotesNumber::Five)
        }))
        .await;

    assert_pilotes_err(result, PilotesError::OrderCustomerCannotBeChanged);

    Ok(())
}

/// Tests that a changed customer is reported before the expiry.
///
/// Expected: Err(OrderCustomerCannotBeChanged) for an expired order
#[tokio::test]
async fn customer_check_precedes_expiry_check() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = order_config();

    let customer = factory::customer::create_customer(db).await?;
    let address = factory::address::create_address(db).await?;
    let order = factory::order::OrderFactory::new(db, customer.id, address.id)
        .creation_date(Utc::now() - Duration::hours(1))
        .build()
        .await?;

    let result = OrderService::new(db, &config)
        .update(Some(OrderParams {
            order_number: Some(order.order_number.clone()),
            ..order_params("someone.else@example.com", PilotesNumber::Five)
        }))
        .await;

    assert_pilotes_err(result, PilotesError::OrderCustomerCannotBeChanged);

    Ok(())
}

/// Tests the lookup failures of an update.
///
/// Expected: Err(OrderNull), Err(OrderNumberEmpty) and Err(OrderNotFound)
#[tokio::test]
async fn fails_when_order_cannot_be_located() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = order_config();

    let service = OrderService::new(db, &config);

    assert_pilotes_err(service.update(None).await, PilotesError::OrderNull);
    assert_pilotes_err(
        service
            .update(Some(order_params("a@example.com", PilotesNumber::Five)))
            .await,
        PilotesError::OrderNumberEmpty,
    );
    assert_pilotes_err(
        service
            .update(Some(OrderParams {
                order_number: Some("0000009999".to_string()),
                ..order_params("a@example.com", PilotesNumber::Five)
            }))
            .await,
        PilotesError::OrderNotFound,
    );

    Ok(())
}

/// Tests that an update without customer is rejected.
///
/// Expected: Err(CustomerNull) and Err(CustomerEmailEmpty)
#[tokio::test]
async fn fails_without_customer_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let config = order_config();

    let (_customer, _address, order) = factory::helpers::create_order_with_dependencies(db).await?;
    let service = OrderService::new(db, &config);

    assert_pilotes_err(
        service
            .update(Some(OrderParams {
                order_number: Some(order.order_number.clone()),
                customer: None,
                ..order_params("unused@example.com", PilotesNumber::Five)
            }))
            .await,
        PilotesError::CustomerNull,
    );
    assert_pilotes_err(
        service
            .update(Some(OrderParams {
                order_number: Some(order.order_number.clone()),
                customer: Some(CustomerFilter::default()),
                ..order_params("unused@example.com", PilotesNumber::Five)
            }))
            .await,
        PilotesError::CustomerEmailEmpty,
    );

    Ok(())
}

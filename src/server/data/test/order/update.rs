use super::*;

/// Tests updating the mutable fields of an order.
///
/// Verifies that address, pilotes number and total change while the order number,
/// creation date, customer and notified flag are left untouched.
///
/// Expected: Ok with the updated order
#[tokio::test]
async fn updates_mutable_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, _address, order) = factory::helpers::create_order_with_dependencies(db).await?;
    let new_address = factory::address::create_address(db).await?;

    let repo = OrderRepository::new(db);
    let updated = repo
        .update(
            order.id,
            OrderChanges {
                address_id: new_address.id,
                pilotes_number: PilotesNumber::Ten,
                total: 10.0,
            },
        )
        .await?;

    assert_eq!(updated.address_id, new_address.id);
    assert_eq!(updated.pilotes_number, "TEN");
    assert_eq!(updated.total, 10.0);
    assert_eq!(updated.order_number, order.order_number);
    assert_eq!(updated.creation_date, order.creation_date);
    assert_eq!(updated.customer_id, customer.id);
    assert_eq!(updated.notified, order.notified);

    Ok(())
}

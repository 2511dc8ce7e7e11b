use super::*;

/// Tests that an identical stored address is reused.
///
/// Expected: Ok with the existing id and no new row
#[tokio::test]
async fn reuses_identical_address() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AddressService::new(db);
    let first = service.find_or_save(Some(params())).await.unwrap();
    let second = service.find_or_save(Some(params())).await.unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(entity::prelude::Address::find().count(db).await?, 1);

    Ok(())
}

/// Tests that an address differing in one field is stored separately.
///
/// Expected: Ok with a new id
#[tokio::test]
async fn saves_different_address() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AddressService::new(db);
    let first = service.find_or_save(Some(params())).await.unwrap();
    let second = service
        .find_or_save(Some(CreateAddressParams {
            postcode: "23220".to_string(),
            ..params()
        }))
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(entity::prelude::Address::find().count(db).await?, 2);

    Ok(())
}

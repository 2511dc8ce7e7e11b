use super::*;

/// Tests creating a new address.
///
/// Verifies that the repository stores every field and assigns an identifier.
///
/// Expected: Ok with the stored address
#[tokio::test]
async fn creates_address() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AddressRepository::new(db);
    let address = repo
        .create(CreateAddressParams {
            street: "785 Cabell Avenue".to_string(),
            postcode: "23219".to_string(),
            city: "Raccoon".to_string(),
            country: "USA".to_string(),
        })
        .await?;

    assert!(address.id > 0);
    assert_eq!(address.street, "785 Cabell Avenue");
    assert_eq!(address.country, "USA");

    let count = entity::prelude::Address::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that creating an identical address twice yields two rows.
///
/// Deduplication is the service's job; the repository always inserts.
///
/// Expected: Ok with two distinct ids
#[tokio::test]
async fn creates_duplicate_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let params = CreateAddressParams {
        street: "s".to_string(),
        postcode: "p".to_string(),
        city: "c".to_string(),
        country: "x".to_string(),
    };

    let repo = AddressRepository::new(db);
    let first = repo.create(params.clone()).await?;
    let second = repo.create(params).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}

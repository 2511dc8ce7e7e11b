use super::*;

/// Tests that a missing or blank email is rejected.
///
/// Expected: Err(CustomerEmailEmpty) for None, "" and whitespace
#[tokio::test]
async fn fails_for_blank_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CustomerService::new(db);

    for email in [None, Some(""), Some("   ")] {
        let result = service.get_by_email(email).await;
        assert!(matches!(
            result,
            Err(AppError::PilotesErr(PilotesError::CustomerEmailEmpty))
        ));
    }

    Ok(())
}

/// Tests finding a customer by email.
///
/// Expected: Ok(Some) for a stored email, Ok(None) otherwise
#[tokio::test]
async fn finds_customer_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::customer::create_customer_with_email(db, "jill.valentine@stars.com").await?;

    let service = CustomerService::new(db);
    let found = service
        .get_by_email(Some("jill.valentine@stars.com"))
        .await
        .unwrap();
    let missing = service.get_by_email(Some("nobody@stars.com")).await.unwrap();

    assert_eq!(found.map(|c| c.id), Some(stored.id));
    assert!(missing.is_none());

    Ok(())
}

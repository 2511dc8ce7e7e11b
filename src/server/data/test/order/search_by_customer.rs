use super::*;

/// Tests searching by a substring of the customer email.
///
/// Only orders whose customer email contains ".com" are returned.
///
/// Expected: Ok with the orders of the matching customer
#[tokio::test]
async fn matches_email_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let leon = factory::customer::create_customer_with_email(db, "leon.kennedy@rpd.com").await?;
    let jill = factory::customer::create_customer_with_email(db, "jill@stars.org").await?;
    let (_, first) = factory::helpers::create_order_for_customer(db, &leon).await?;
    let (_, second) = factory::helpers::create_order_for_customer(db, &leon).await?;
    let _ = factory::helpers::create_order_for_customer(db, &jill).await?;

    let repo = OrderRepository::new(db);
    let result = repo
        .search_by_customer(&CustomerFilter {
            email: Some(".com".to_string()),
            ..Default::default()
        })
        .await?;

    let ids: Vec<i32> = result.iter().map(|o| o.order.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert!(result.iter().all(|o| o.customer.id == leon.id));

    Ok(())
}

/// Tests that substring matching is case-sensitive.
///
/// Expected: Ok with no orders for a differently cased filter
#[tokio::test]
async fn is_case_sensitive() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let leon = factory::customer::CustomerFactory::new(db)
        .first_name("Leon")
        .build()
        .await?;
    factory::helpers::create_order_for_customer(db, &leon).await?;

    let repo = OrderRepository::new(db);
    let lower = repo
        .search_by_customer(&CustomerFilter {
            first_name: Some("leon".to_string()),
            ..Default::default()
        })
        .await?;
    let exact = repo
        .search_by_customer(&CustomerFilter {
            first_name: Some("Leo".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(lower.is_empty());
    assert_eq!(exact.len(), 1);

    Ok(())
}

/// Tests that every set field must match.
///
/// Expected: Ok with only the order whose customer matches both fields
#[tokio::test]
async fn combines_fields_with_and() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let claire = factory::customer::CustomerFactory::new(db)
        .first_name("Clair")
        .last_name("Redfield")
        .build()
        .await?;
    let chris = factory::customer::CustomerFactory::new(db)
        .first_name("Chris")
        .last_name("Redfield")
        .build()
        .await?;
    let (_, claire_order) = factory::helpers::create_order_for_customer(db, &claire).await?;
    factory::helpers::create_order_for_customer(db, &chris).await?;

    let repo = OrderRepository::new(db);
    let result = repo
        .search_by_customer(&CustomerFilter {
            first_name: Some("Cl".to_string()),
            last_name: Some("Redfield".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].order.id, claire_order.id);

    Ok(())
}

/// Tests that an empty filter matches every order.
///
/// Expected: Ok with all orders
#[tokio::test]
async fn empty_filter_matches_all() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_order_with_dependencies(db).await?;
    factory::helpers::create_order_with_dependencies(db).await?;

    let repo = OrderRepository::new(db);
    let result = repo.search_by_customer(&CustomerFilter::default()).await?;

    assert_eq!(result.len(), 2);

    Ok(())
}

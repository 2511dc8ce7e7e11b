use super::*;

/// Tests flagging a batch of orders as notified.
///
/// Expected: Ok(2) with the other order left unnotified
#[tokio::test]
async fn marks_only_given_orders() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, first) = factory::helpers::create_order_with_dependencies(db).await?;
    let (_, _, second) = factory::helpers::create_order_with_dependencies(db).await?;
    let (_, _, untouched) = factory::helpers::create_order_with_dependencies(db).await?;

    let repo = OrderRepository::new(db);
    let updated = repo.mark_notified(vec![first.id, second.id]).await?;

    assert_eq!(updated, 2);

    for (id, expected) in [(first.id, true), (second.id, true), (untouched.id, false)] {
        let order = entity::prelude::PilotesOrder::find_by_id(id).one(db).await?;
        assert_eq!(order.map(|o| o.notified), Some(expected));
    }

    Ok(())
}

/// Tests flagging an empty batch.
///
/// Expected: Ok(0)
#[tokio::test]
async fn empty_batch_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderRepository::new(db);

    assert_eq!(repo.mark_notified(Vec::new()).await?, 0);

    Ok(())
}

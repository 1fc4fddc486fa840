use super::*;

/// Tests entries come back newest first with their users attached.
///
/// Expected: Ok with the later login first and the user joined
#[tokio::test]
async fn returns_newest_first_with_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = LoginHistoryRepository::new(db);
    let first = repo.create(user.id, day(0)).await?;
    let second = repo.create(user.id, day(1)).await?;

    let entries = repo.get_all(None).await?;

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].0.id, second.id);
    assert_eq!(entries[1].0.id, first.id);
    assert_eq!(
        entries[0].1.as_ref().map(|u| u.username.as_str()),
        Some(user.username.as_str())
    );

    Ok(())
}

/// Expected: Ok with only the requested user's logins
#[tokio::test]
async fn filters_by_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_login(db, user.id, day(0)).await?;
    factory::create_login(db, other.id, day(1)).await?;

    let entries = LoginHistoryRepository::new(db).get_all(Some(user.id)).await?;

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].0.user_id, user.id);

    Ok(())
}

use super::*;

/// Tests that only provided fields change.
///
/// Expected: Ok with email and active flag updated, username and hash untouched
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("bob")
        .build()
        .await?;

    let params = UpdateUserParams {
        id: user.id,
        email: Some("bob@new.example.com".to_string()),
        is_active: Some(false),
        ..Default::default()
    };

    let updated = UserRepository::new(db)
        .update(&params, None)
        .await?
        .unwrap();

    assert_eq!(updated.username, "bob");
    assert_eq!(updated.email, "bob@new.example.com");
    assert!(!updated.is_active);
    assert_eq!(updated.password_hash, user.password_hash);

    Ok(())
}

/// Tests that a new password hash replaces the stored one.
///
/// Expected: Ok with the new hash stored
#[tokio::test]
async fn replaces_password_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let params = UpdateUserParams {
        id: user.id,
        ..Default::default()
    };
    let updated = UserRepository::new(db)
        .update(&params, Some("new-hash".to_string()))
        .await?
        .unwrap();

    assert_eq!(updated.password_hash, "new-hash");

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let params = UpdateUserParams {
        id: 4242,
        username: Some("ghost".to_string()),
        ..Default::default()
    };

    let result = UserRepository::new(db).update(&params, None).await?;

    assert!(result.is_none());

    Ok(())
}

use super::*;

/// Tests creating a user stores the given hash rather than the plaintext password.
///
/// Expected: Ok with user persisted using the provided hash and role
#[tokio::test]
async fn creates_user_with_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let params = CreateUserParams {
        username: "alice".to_string(),
        email: "alice@example.com".to_string(),
        password: "secret".to_string(),
        role: Role::Admin,
    };

    let repo = UserRepository::new(db);
    let user = repo.create(&params, "hashed".to_string()).await?;

    assert_eq!(user.username, "alice");
    assert_eq!(user.password_hash, "hashed");
    assert_eq!(user.role, "admin");
    assert!(user.is_active);

    Ok(())
}

/// Tests creating a user with a username that is already taken.
///
/// Expected: Err from the unique constraint
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("taken")
        .build()
        .await?;

    let params = CreateUserParams {
        username: "taken".to_string(),
        email: "other@example.com".to_string(),
        password: "secret".to_string(),
        role: Role::User,
    };

    let result = UserRepository::new(db)
        .create(&params, "hashed".to_string())
        .await;

    assert!(result.is_err());

    Ok(())
}

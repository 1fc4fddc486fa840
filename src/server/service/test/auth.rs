use test_utils::{builder::TestBuilder, factory::user::UserFactory};

use crate::server::{
    data::login_history::LoginHistoryRepository,
    error::{auth::AuthError, AppError},
    service::auth::AuthService,
};

/// Expected: Err(MissingCredentials) when either field is absent or blank
#[tokio::test]
async fn rejects_missing_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);

    for (username, password) in [
        (None, Some("secret".to_string())),
        (Some("alice".to_string()), None),
        (Some("  ".to_string()), Some("secret".to_string())),
    ] {
        let result = service.login(username, password).await;
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::MissingCredentials))
        ));
    }

    Ok(())
}

/// Tests unknown users and wrong passwords are indistinguishable.
///
/// Expected: Err(InvalidCredentials) for both and no login recorded
#[tokio::test]
async fn rejects_invalid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .username("alice")
        .password("secret")
        .build()
        .await?;

    let service = AuthService::new(db);
    let wrong_password = service
        .login(Some("alice".to_string()), Some("wrong".to_string()))
        .await;
    let unknown_user = service
        .login(Some("nobody".to_string()), Some("secret".to_string()))
        .await;

    assert!(matches!(
        wrong_password,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        unknown_user,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(LoginHistoryRepository::new(db).get_all(None).await?.is_empty());

    Ok(())
}

/// Tests a deactivated account cannot log in even with the right password.
///
/// Expected: Err(InvalidCredentials)
#[tokio::test]
async fn rejects_inactive_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .username("alice")
        .password("secret")
        .active(false)
        .build()
        .await?;

    let result = AuthService::new(db)
        .login(Some("alice".to_string()), Some("secret".to_string()))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests a successful login returns the user and records a history entry.
///
/// Expected: Ok with one login history row for the user
#[tokio::test]
async fn records_successful_login() -> Result<(), AppError> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = UserFactory::new(db)
        .username("alice")
        .password("secret")
        .build()
        .await?;

    let user = AuthService::new(db)
        .login(Some(" alice ".to_string()), Some("secret".to_string()))
        .await?;

    assert_eq!(user.id, alice.id);
    let history = LoginHistoryRepository::new(db).get_all(Some(alice.id)).await?;
    assert_eq!(history.len(), 1);

    Ok(())
}

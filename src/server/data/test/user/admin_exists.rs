use super::*;

/// Expected: Ok(false) with only regular users
#[tokio::test]
async fn returns_false_without_admins() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;

    assert!(!UserRepository::new(db).admin_exists().await?);

    Ok(())
}

/// Expected: Ok(true) once an admin exists
#[tokio::test]
async fn returns_true_with_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;
    factory::user::create_admin(db).await?;

    assert!(UserRepository::new(db).admin_exists().await?);

    Ok(())
}

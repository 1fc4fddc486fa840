use super::*;

/// Tests pagination orders users by username and reports the total.
///
/// Expected: Ok with the second page holding the last user and total of 3
#[tokio::test]
async fn pages_users_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["carol", "alice", "bob"] {
        factory::user::UserFactory::new(db).username(name).build().await?;
    }

    let repo = UserRepository::new(db);
    let (first, total) = repo.get_all_paginated(0, 2).await?;
    let (second, _) = repo.get_all_paginated(1, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(
        first.iter().map(|u| u.username.as_str()).collect::<Vec<_>>(),
        vec!["alice", "bob"]
    );
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].username, "carol");

    Ok(())
}

/// Expected: Ok with an empty page past the end
#[tokio::test]
async fn returns_empty_page_past_end() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;

    let (users, total) = UserRepository::new(db).get_all_paginated(5, 10).await?;

    assert!(users.is_empty());
    assert_eq!(total, 1);

    Ok(())
}

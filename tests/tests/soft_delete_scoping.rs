use pretty_assertions::assert_eq;
use tests::{fixed_now, models::User, setup, LoggingDriver};
use tombstone::{stmt::Expr, Db, DeletedAt};
use tombstone_driver_sqlite::Sqlite;

#[tokio::test]
async fn unscoped_delete_needs_a_condition() {
    let (db, log) = setup(&mut tests::models!(User)).await;
    db.create(&mut User::new("a")).await.unwrap();
    log.clear();

    let err = db.delete_where::<User>().exec().await.unwrap_err();
    assert!(err.is_missing_filter());

    let err = db.delete_where::<User>().unscoped().exec().await.unwrap_err();
    assert!(err.is_missing_filter());

    assert!(log.is_empty());
    assert_eq!(db.query::<User>().count().await.unwrap(), 1);
}

#[tokio::test]
async fn update_needs_a_condition() {
    let (db, log) = setup(&mut tests::models!(User)).await;

    let err = db
        .update::<User>()
        .set("name", "everyone")
        .exec()
        .await
        .unwrap_err();
    assert!(err.is_missing_filter());
    assert!(log.is_empty());
}

#[tokio::test]
async fn global_update_allowed_when_configured() {
    let driver = LoggingDriver::new(Sqlite::in_memory().unwrap());
    let db = tests::models!(User)
        .now(fixed_now)
        .allow_global_update(true)
        .build(driver)
        .await
        .unwrap();
    db.push_schema().await.unwrap();

    for name in ["a", "b"] {
        db.create(&mut User::new(name)).await.unwrap();
    }

    assert_eq!(db.delete_where::<User>().exec().await.unwrap(), 2);
    assert_eq!(db.query::<User>().count().await.unwrap(), 0);
    assert_eq!(db.query::<User>().unscoped().count().await.unwrap(), 2);
}

#[tokio::test]
async fn explicit_condition_scopes_soft_delete() {
    let (db, log) = setup(&mut tests::models!(User)).await;

    for name in ["a", "b"] {
        db.create(&mut User::new(name)).await.unwrap();
    }

    log.clear();
    let count = db
        .delete_where::<User>()
        .filter(Expr::eq(Expr::column("name"), "a"))
        .exec()
        .await
        .unwrap();
    assert_eq!(count, 1);
    assert_eq!(
        log.statements(),
        vec![
            r#"UPDATE "users" SET "is_del" = ?1, "deleted_at" = ?2 WHERE "name" = ?3 AND "users"."is_del" = ?4"#
        ]
    );

    let remaining = db.query::<User>().all().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].name, "b");
}

#[tokio::test]
async fn delete_many_scopes_by_every_key() {
    let (db, log) = setup(&mut tests::models!(User)).await;

    let mut users = vec![User::new("a"), User::new("b"), User::new("c")];
    for user in &mut users {
        db.create(user).await.unwrap();
    }

    log.clear();
    let mut doomed = users[..2].to_vec();
    assert_eq!(db.delete_many(&mut doomed).await.unwrap(), 2);
    assert_eq!(
        log.statements(),
        vec![
            r#"UPDATE "users" SET "is_del" = ?1, "deleted_at" = ?2 WHERE "users"."id" IN (?3, ?4) AND "users"."is_del" = ?5"#
        ]
    );

    assert!(doomed.iter().all(|user| user.is_del == DeletedAt(1)));

    let remaining = db.query::<User>().all().await.unwrap();
    assert_eq!(remaining, vec![users[2].clone()]);
}

#[tokio::test]
async fn distinct_model_narrows_the_delete() {
    let (db, _log) = setup(&mut tests::models!(User)).await;

    let mut a = User::new("a");
    db.create(&mut a).await.unwrap();
    let mut b = User::new("b");
    db.create(&mut b).await.unwrap();

    let count = db
        .delete_where::<User>()
        .record(&a)
        .model(&b)
        .exec()
        .await
        .unwrap();
    assert_eq!(count, 0);
    assert_eq!(db.query::<User>().count().await.unwrap(), 2);
}

#[tokio::test]
async fn unsaved_record_does_not_scope() {
    let (db, _log) = setup(&mut tests::models!(User)).await;
    db.create(&mut User::new("a")).await.unwrap();

    let err = db.delete(&mut User::new("never saved")).await.unwrap_err();
    assert!(err.is_missing_filter());
    assert_eq!(db.query::<User>().count().await.unwrap(), 1);
}

#[tokio::test]
async fn connect_by_url() {
    let db: Db = tests::models!(User)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    db.push_schema().await.unwrap();

    let mut user = User::new("a");
    db.create(&mut user).await.unwrap();
    db.delete(&mut user).await.unwrap();
    assert!(user.is_del.is_deleted());
    assert_eq!(db.query::<User>().count().await.unwrap(), 0);

    let err = tests::models!(User)
        .connect("postgresql://localhost/db")
        .await
        .unwrap_err();
    assert!(err.is_invalid_connection_url());
}

async fn abc(db: &Db) -> Vec<User> {
    let mut users = vec![User::new("a"), User::new("b"), User::new("c")];
    for user in &mut users {
        db.create(user).await.unwrap();
    }
    users
}

#[tokio::test]
async fn record_scopes_soft_delete_past_or_conditions() {
    let (db, log) = setup(&mut tests::models!(User)).await;
    let users = abc(&db).await;

    log.clear();
    let count = db
        .delete_where::<User>()
        .filter(Expr::eq(Expr::column("name"), "a"))
        .or_filter(Expr::eq(Expr::column("name"), "b"))
        .record(&users[2])
        .exec()
        .await
        .unwrap();
    assert_eq!(count, 0);
    assert_eq!(
        log.statements(),
        vec![
            r#"UPDATE "users" SET "is_del" = ?1, "deleted_at" = ?2 WHERE ("name" = ?3 OR "name" = ?4) AND "users"."id" = ?5 AND "users"."is_del" = ?6"#
        ]
    );
    assert_eq!(db.query::<User>().count().await.unwrap(), 3);

    let count = db
        .delete_where::<User>()
        .filter(Expr::eq(Expr::column("name"), "a"))
        .or_filter(Expr::eq(Expr::column("name"), "b"))
        .record(&users[1])
        .exec()
        .await
        .unwrap();
    assert_eq!(count, 1);

    let remaining = db.query::<User>().all().await.unwrap();
    assert_eq!(
        remaining.iter().map(|user| user.name.as_str()).collect::<Vec<_>>(),
        vec!["a", "c"]
    );
}

#[tokio::test]
async fn record_scopes_physical_delete_past_or_conditions() {
    let (db, log) = setup(&mut tests::models!(User)).await;
    let users = abc(&db).await;

    log.clear();
    let count = db
        .delete_where::<User>()
        .filter(Expr::eq(Expr::column("name"), "a"))
        .or_filter(Expr::eq(Expr::column("name"), "b"))
        .record(&users[2])
        .unscoped()
        .exec()
        .await
        .unwrap();
    assert_eq!(count, 0);
    assert_eq!(
        log.statements(),
        vec![r#"DELETE FROM "users" WHERE ("name" = ?1 OR "name" = ?2) AND "users"."id" = ?3"#]
    );
    assert_eq!(db.query::<User>().unscoped().count().await.unwrap(), 3);
}

#[tokio::test]
async fn update_with_or_conditions_skips_deleted_rows() {
    let (db, log) = setup(&mut tests::models!(User)).await;
    let mut users = abc(&db).await;
    db.delete(&mut users[1]).await.unwrap();

    log.clear();
    let count = db
        .update::<User>()
        .filter(Expr::eq(Expr::column("name"), "a"))
        .or_filter(Expr::eq(Expr::column("name"), "b"))
        .set("name", "renamed")
        .exec()
        .await
        .unwrap();
    assert_eq!(count, 1);
    assert_eq!(
        log.statements(),
        vec![
            r#"UPDATE "users" SET "name" = ?1 WHERE ("name" = ?2 OR "name" = ?3) AND "users"."is_del" = ?4"#
        ]
    );

    let deleted = db
        .query::<User>()
        .unscoped()
        .filter(Expr::eq(Expr::column("id"), users[1].id))
        .first()
        .await
        .unwrap();
    assert_eq!(deleted.name, "b");
}

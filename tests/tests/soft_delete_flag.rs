use pretty_assertions::assert_eq;
use tests::{fixed_now, models::User, setup};
use tombstone::{stmt::Expr, DeletedAt};

#[tokio::test]
async fn flag_with_companion_round_trip() {
    let (db, log) = setup(&mut tests::models!(User)).await;

    let mut user = User::new("jinzhu");
    db.create(&mut user).await.unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(db.query::<User>().count().await.unwrap(), 1);

    log.clear();
    assert_eq!(db.delete(&mut user).await.unwrap(), 1);
    assert_eq!(
        log.statements(),
        vec![
            r#"UPDATE "users" SET "is_del" = ?1, "deleted_at" = ?2 WHERE "users"."id" = ?3 AND "users"."is_del" = ?4"#
        ]
    );

    // Marking values are written back
    assert_eq!(user.is_del, DeletedAt(1));
    assert_eq!(user.deleted_at, Some(fixed_now().naive_utc()));

    assert_eq!(db.query::<User>().count().await.unwrap(), 0);
    assert_eq!(db.query::<User>().unscoped().count().await.unwrap(), 1);

    let stored = db.query::<User>().unscoped().first().await.unwrap();
    assert!(stored.is_del.is_deleted());
    assert_eq!(stored.deleted_at, Some(fixed_now().naive_utc()));
}

#[tokio::test]
async fn deleting_twice_changes_nothing() {
    let (db, _log) = setup(&mut tests::models!(User)).await;

    let mut user = User::new("jinzhu");
    db.create(&mut user).await.unwrap();
    let mut again = user.clone();

    assert_eq!(db.delete(&mut user).await.unwrap(), 1);
    assert_eq!(db.delete(&mut again).await.unwrap(), 0);
}

#[tokio::test]
async fn unscoped_delete_removes_the_row() {
    let (db, log) = setup(&mut tests::models!(User)).await;

    let mut user = User::new("jinzhu");
    db.create(&mut user).await.unwrap();
    db.delete(&mut user).await.unwrap();

    log.clear();
    let count = db
        .delete_where::<User>()
        .record(&user)
        .unscoped()
        .exec()
        .await
        .unwrap();
    assert_eq!(count, 1);
    assert_eq!(
        log.statements(),
        vec![r#"DELETE FROM "users" WHERE "users"."id" = ?1"#]
    );

    let err = db.query::<User>().unscoped().first().await.unwrap_err();
    assert!(err.is_record_not_found());
}

#[tokio::test]
async fn update_skips_deleted_rows() {
    let (db, _log) = setup(&mut tests::models!(User)).await;

    let mut gone = User::new("gone");
    db.create(&mut gone).await.unwrap();
    let mut kept = User::new("kept");
    db.create(&mut kept).await.unwrap();
    db.delete(&mut gone).await.unwrap();

    let count = db
        .update::<User>()
        .filter(Expr::ne(Expr::column("name"), ""))
        .set("name", "renamed")
        .exec()
        .await
        .unwrap();
    assert_eq!(count, 1);

    let stored = db
        .query::<User>()
        .unscoped()
        .filter(Expr::eq(Expr::column("id"), gone.id))
        .first()
        .await
        .unwrap();
    assert_eq!(stored.name, "gone");

    let count = db
        .update::<User>()
        .filter(Expr::eq(Expr::column("id"), gone.id))
        .set("name", "restored")
        .unscoped()
        .exec()
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn or_conditions_stay_grouped() {
    let (db, log) = setup(&mut tests::models!(User)).await;

    for name in ["a", "b", "c"] {
        db.create(&mut User::new(name)).await.unwrap();
    }

    let mut b = db
        .query::<User>()
        .filter(Expr::eq(Expr::column("name"), "b"))
        .first()
        .await
        .unwrap();
    db.delete(&mut b).await.unwrap();

    log.clear();
    let users = db
        .query::<User>()
        .filter(Expr::eq(Expr::column("name"), "a"))
        .or_filter(Expr::eq(Expr::column("name"), "b"))
        .all()
        .await
        .unwrap();

    assert_eq!(
        users.iter().map(|user| user.name.as_str()).collect::<Vec<_>>(),
        vec!["a"]
    );
    assert_eq!(
        log.statements(),
        vec![
            r#"SELECT "id", "name", "is_del", "deleted_at" FROM "users" WHERE ("name" = ?1 OR "name" = ?2) AND "users"."is_del" = ?3"#
        ]
    );
}

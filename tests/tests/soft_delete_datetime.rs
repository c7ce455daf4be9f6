use pretty_assertions::assert_eq;
use tests::{
    fixed_now,
    models::{Book, Note},
    setup,
};
use tombstone::{stmt::Value, Sentinels};

#[tokio::test]
async fn sentinel_default_marks_active_rows() {
    let (db, _log) = setup(&mut tests::models!(Book)).await;
    let sentinels = Sentinels::default();

    let mut book = Book::new("dune");
    db.create(&mut book).await.unwrap();
    assert_eq!(book.deleted_at.0, Some(sentinels.datetime_zero));
    assert!(!book.deleted_at.is_deleted(&sentinels));

    let stmt = db.delete_statement(&book).unwrap();
    assert_eq!(
        stmt.sql,
        r#"UPDATE "books" SET "deleted_at" = ?1 WHERE "books"."id" = ?2 AND "books"."deleted_at" = ?3"#
    );
    assert_eq!(
        stmt.params,
        vec![
            Value::DateTime(fixed_now().naive_utc()),
            Value::U64(1),
            Value::DateTime(sentinels.datetime_zero),
        ]
    );

    assert_eq!(db.delete(&mut book).await.unwrap(), 1);
    assert!(book.deleted_at.is_deleted(&sentinels));

    let err = db.query::<Book>().first().await.unwrap_err();
    assert!(err.is_record_not_found());

    let stored = db.query::<Book>().unscoped().first().await.unwrap();
    assert_eq!(stored.deleted_at.0, Some(fixed_now().naive_utc()));
}

#[tokio::test]
async fn delete_statement_executes_nothing() {
    let (db, log) = setup(&mut tests::models!(Book)).await;

    let mut book = Book::new("dune");
    db.create(&mut book).await.unwrap();
    log.clear();

    db.delete_statement(&book).unwrap();
    assert!(log.is_empty());
    assert_eq!(db.query::<Book>().count().await.unwrap(), 1);
}

#[tokio::test]
async fn null_default_filters_with_is_null() {
    let (db, log) = setup(&mut tests::models!(Note)).await;

    let mut keep = Note::new("keep");
    db.create(&mut keep).await.unwrap();
    let mut drop = Note::new("drop");
    db.create(&mut drop).await.unwrap();
    assert_eq!(drop.deleted_at.0, None);

    db.delete(&mut drop).await.unwrap();
    assert_eq!(drop.deleted_at.0, Some(fixed_now().naive_utc()));

    log.clear();
    let notes = db.query::<Note>().all().await.unwrap();
    assert_eq!(notes, vec![keep]);
    assert_eq!(
        log.statements(),
        vec![r#"SELECT "id", "body", "deleted_at" FROM "notes" WHERE "notes"."deleted_at" IS NULL"#]
    );
}

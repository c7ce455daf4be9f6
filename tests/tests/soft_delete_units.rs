use pretty_assertions::assert_eq;
use tests::{
    models::{MilliEvent, NanoEvent, SecondEvent},
    setup,
};
use tombstone::DeletedAt;

#[tokio::test]
async fn numeric_timestamps_follow_their_unit() {
    let (db, _log) = setup(&mut tests::models!(SecondEvent, MilliEvent, NanoEvent)).await;

    let mut second = SecondEvent::new();
    db.create(&mut second).await.unwrap();
    db.delete(&mut second).await.unwrap();

    let mut milli = MilliEvent::new();
    db.create(&mut milli).await.unwrap();
    db.delete(&mut milli).await.unwrap();

    let mut nano = NanoEvent::new();
    db.create(&mut nano).await.unwrap();
    db.delete(&mut nano).await.unwrap();

    let second = db.query::<SecondEvent>().unscoped().first().await.unwrap();
    let milli = db.query::<MilliEvent>().unscoped().first().await.unwrap();
    let nano = db.query::<NanoEvent>().unscoped().first().await.unwrap();

    assert_eq!(second.deleted_at, DeletedAt(1_700_000_000));
    assert_eq!(milli.deleted_at, DeletedAt(1_700_000_000_123));
    assert_eq!(nano.deleted_at, DeletedAt(1_700_000_000_123_456_789));

    // Same instant, truncated per unit
    assert_eq!(milli.deleted_at.0, nano.deleted_at.0 / 1_000_000);
    assert_eq!(second.deleted_at.0, nano.deleted_at.0 / 1_000_000_000);

    assert_eq!(db.query::<SecondEvent>().count().await.unwrap(), 0);
    assert_eq!(db.query::<MilliEvent>().count().await.unwrap(), 0);
    assert_eq!(db.query::<NanoEvent>().count().await.unwrap(), 0);
}

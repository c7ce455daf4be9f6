use tombstone_core::schema::{Field, FieldDefault, Model, ModelId, Schema, TimeUnit};
use tombstone_core::stmt::{Type, Value};

const USER: ModelId = ModelId(0);

fn user() -> tombstone_core::schema::ModelBuilder {
    Model::builder("User")
        .field(Field::builder("id", Type::U64).auto_increment())
        .field(Field::builder("name", Type::String))
}

#[test]
fn default_table_name_is_plural_snake_case() {
    let model = Model::builder("BlogPost")
        .field(Field::builder("id", Type::U64))
        .build(USER)
        .unwrap();

    assert_eq!(model.table, "blog_posts");
}

#[test]
fn field_named_id_becomes_primary_key() {
    let model = user().build(USER).unwrap();

    assert_eq!(model.primary_key.fields, vec![USER.field(0)]);
    assert_eq!(model.auto_increment_field().unwrap().name, "id");
}

#[test]
fn column_defaults_to_snake_case_name() {
    let model = Model::builder("User")
        .field(Field::builder("id", Type::U64))
        .field(Field::builder("deletedAt", Type::I64).soft_delete())
        .build(USER)
        .unwrap();

    assert_eq!(model.field(USER.field(1)).column, "deleted_at");
}

#[test]
fn flag_field_with_companion() {
    let model = user()
        .field(
            Field::builder("is_del", Type::I64)
                .tag("softDelete:flag,DeletedAtField:deleted_at;default:0"),
        )
        .field(Field::builder("deleted_at", Type::I64))
        .build(USER)
        .unwrap();

    let is_del = model.field(USER.field(2));
    let soft_delete = is_del.soft_delete.unwrap();

    assert!(soft_delete.flag);
    assert_eq!(soft_delete.companion, Some(USER.field(3)));
    assert_eq!(is_del.default, Some(FieldDefault::Value(Value::I64(0))));
    assert!(model.field(USER.field(3)).soft_delete.is_none());
}

#[test]
fn unknown_companion_is_dropped() {
    let model = user()
        .field(Field::builder("is_del", Type::I64).tag("softDelete:flag,DeletedAtField:missing"))
        .build(USER)
        .unwrap();

    let soft_delete = model.field(USER.field(2)).soft_delete.unwrap();
    assert!(soft_delete.flag);
    assert_eq!(soft_delete.companion, None);
}

#[test]
fn datetime_companion_key() {
    let model = user()
        .field(Field::builder("is_del", Type::I64).tag("softDelete:flag,DeleteDateTimeField:removed_on"))
        .field(Field::builder("removed_on", Type::DateTime).nullable())
        .build(USER)
        .unwrap();

    let soft_delete = model.field(USER.field(2)).soft_delete.unwrap();
    assert_eq!(soft_delete.companion, Some(USER.field(3)));
}

#[test]
fn unit_resolved_from_tag() {
    let model = user()
        .field(Field::builder("deleted_at", Type::I64).tag("softDelete:milli"))
        .build(USER)
        .unwrap();

    let soft_delete = model.field(USER.field(2)).soft_delete.unwrap();
    assert!(!soft_delete.flag);
    assert_eq!(soft_delete.unit, TimeUnit::Millisecond);
}

#[test]
fn null_and_datetime_defaults() {
    let model = Model::builder("Book")
        .field(Field::builder("id", Type::U64))
        .field(Field::builder("deleted_at", Type::DateTime).soft_delete().tag("default:'1970-01-01 00:00:01'"))
        .field(Field::builder("archived_at", Type::I64).tag("default:null"))
        .build(USER)
        .unwrap();

    let deleted_at = model.field(USER.field(1));
    let Some(FieldDefault::Value(Value::DateTime(sentinel))) = &deleted_at.default else {
        panic!("expected datetime default, got {:?}", deleted_at.default);
    };
    assert_eq!(sentinel.to_string(), "1970-01-01 00:00:01");

    let archived_at = model.field(USER.field(2));
    assert!(archived_at.default_is_null());
    assert!(archived_at.nullable);
}

#[test]
fn string_marking_field_is_rejected() {
    let err = user()
        .field(Field::builder("deleted", Type::String).soft_delete())
        .build(USER)
        .unwrap_err();

    assert!(err.is_invalid_schema());
}

#[test]
fn duplicate_columns_are_rejected() {
    let err = user()
        .field(Field::builder("full_name", Type::String).column("name"))
        .build(USER)
        .unwrap_err();

    assert!(err.is_invalid_schema());
}

#[test]
fn invalid_default_is_rejected() {
    let err = user()
        .field(Field::builder("age", Type::I64).tag("default:abc"))
        .build(USER)
        .unwrap_err();

    assert!(err.is_invalid_schema());
    assert_eq!(
        err.to_string(),
        "invalid schema: field `age` has an invalid default: cannot convert String to i64"
    );
}

#[test]
fn schema_builder_assigns_ids_and_prefix() {
    let mut builder = Schema::builder();
    builder.table_name_prefix("app_");
    let user_id = builder.model(user());
    let book_id = builder.model(
        Model::builder("Book").field(Field::builder("id", Type::U64)),
    );

    let schema = builder.build().unwrap();

    assert_eq!(schema.model(user_id).table, "app_users");
    assert_eq!(schema.model(book_id).table, "app_books");
    assert_eq!(schema.model(book_id).id, ModelId(1));
}

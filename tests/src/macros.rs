#[macro_export]
macro_rules! models {
    (
        $( $model:ident ),*
    ) => {{
        let mut builder = tombstone::Db::builder();
        $( builder.register::<$model>(); )*
        builder
    }};
}

use pretty_assertions::assert_eq;
use tabula::{Db, DbConfig, Flavor, Model, Pool, Sqlite, TableOptions, Type};
use tests::{
    models::{self, Event, User, UserAccount},
    Harness, OpKind,
};

#[tokio::test]
async fn derived_table_name() {
    let h = Harness::new();
    h.ddl(&[models::USER_ACCOUNT]).await;

    let mut builder = Db::builder();
    builder
        .register_with::<UserAccount>(&h.config, TableOptions::new().primary_key("account_id"))
        .await
        .unwrap();
    let db = builder.build();

    let resolved = db.catalog().resolve::<UserAccount>().unwrap();
    assert_eq!(resolved.table.table_flag(), "user_account");
    assert_eq!(resolved.table.primary_key(), "account_id");
    assert!(resolved.config.same(&h.config));
}

#[tokio::test]
async fn explicit_table_name_and_columns() {
    let h = Harness::new();
    h.ddl(&[models::USERS]).await;

    let mut builder = Db::builder();
    builder
        .register_with::<User>(&h.config, TableOptions::new().table("users"))
        .await
        .unwrap();
    let db = builder.build();

    let table = db.catalog().resolve::<User>().unwrap().table;
    assert_eq!(table.table_flag(), "users");
    assert_eq!(table.primary_key(), "id");
    assert_eq!(table.primary_key_ty().unwrap(), Type::I64);
    assert_eq!(
        table.columns().collect::<Vec<_>>(),
        [
            ("id", Type::I64),
            ("name", Type::String),
            ("email", Type::String),
            ("active", Type::Bool),
            ("score", Type::F64),
        ]
    );

    // Introspection is the only statement registration issues.
    let ops = h.ops();
    assert_eq!(ops.len(), 1);
    assert_eq!(ops[0].kind, OpKind::Describe);
    assert_eq!(ops[0].sql, "select * from users where 1 = 0");
}

#[tokio::test]
async fn sequence_model_introspects_newest_shard() {
    let h = Harness::new();
    h.ddl(&[&models::event_shard("_2024"), &models::event_shard("_2025")])
        .await;

    let mut builder = Db::builder();
    builder.register_seq::<Event>(&h.config).await.unwrap();
    let db = builder.build();

    let table = db.catalog().resolve::<Event>().unwrap().table;
    assert_eq!(table.table_flag(), "event");
    assert_eq!(table.introspection_table(), "event_2025");
    assert_eq!(table.column_ty("kind").unwrap(), Type::String);
    assert_eq!(h.ops()[0].sql, "select * from event_2025 where 1 = 0");
}

#[tokio::test]
async fn missing_table_fails_registration() {
    let h = Harness::new();

    let err = Db::builder()
        .register::<User>(&h.config)
        .await
        .map(|_| ())
        .unwrap_err();
    assert!(err.is_invalid_configuration());
    assert_eq!(err.sql(), Some("select * from user where 1 = 0"));
}

#[tokio::test]
async fn missing_newest_shard_fails_registration() {
    let h = Harness::new();
    h.ddl(&[&models::event_shard("_2024")]).await;

    let err = Db::builder()
        .register_seq::<Event>(&h.config)
        .await
        .map(|_| ())
        .unwrap_err();
    assert!(err.is_invalid_configuration());
}

#[tokio::test]
async fn double_registration_is_rejected() {
    let h = Harness::new();
    h.ddl(&[models::USERS]).await;

    let mut builder = Db::builder();
    let options = TableOptions::new().table("users");
    builder
        .register_with::<User>(&h.config, options.clone())
        .await
        .unwrap();
    h.clear_ops();

    let err = builder
        .register_with::<User>(&h.config, options)
        .await
        .map(|_| ())
        .unwrap_err();
    assert!(err.is_invalid_configuration());

    // Rejected before touching the database.
    assert!(h.ops().is_empty());
}

#[tokio::test]
async fn blank_names_are_rejected() {
    let h = Harness::new();
    h.ddl(&[models::USERS]).await;

    let mut builder = Db::builder();
    for options in [
        TableOptions::new().table(" "),
        TableOptions::new().table("users").primary_key(""),
    ] {
        let err = builder
            .register_with::<User>(&h.config, options)
            .await
            .map(|_| ())
            .unwrap_err();
        assert!(err.is_invalid_configuration());
    }

    let err = DbConfig::new("  ", h.pool.clone(), Flavor::Sqlite).unwrap_err();
    assert!(err.is_invalid_configuration());
}

#[tokio::test]
async fn unregistered_model_touches_no_connection() {
    let h = Harness::new();
    h.ddl(&[models::USERS]).await;
    h.clear_ops();

    let db = Db::builder().build();

    let err = db.find_by_primary_key::<User>(1_i64).await.unwrap_err();
    assert!(err.is_unregistered_model());
    assert_eq!(err.to_string(), "model must be registered first: User");

    let mut user = User::default();
    user.set("name", "alice");
    assert!(db.save(&mut user).await.unwrap_err().is_unregistered_model());
    assert!(db.update(&user).await.unwrap_err().is_unregistered_model());
    assert!(db.delete(&user).await.unwrap_err().is_unregistered_model());
    assert!(db
        .find::<User>("select * from users", &[])
        .await
        .unwrap_err()
        .is_unregistered_model());
    assert!(db
        .find_in_seq::<Event>("select *", "1 = 1", &[])
        .await
        .unwrap_err()
        .is_unregistered_model());
    assert!(db
        .in_clause::<User>("id", &[])
        .unwrap_err()
        .is_unregistered_model());

    assert!(h.ops().is_empty());
    assert_eq!(h.pool.status().size, 1);
}

#[tokio::test]
async fn pool_from_url() {
    let pool = Pool::connect("sqlite::memory:").unwrap();
    assert_eq!(pool.status().max_size, 1);

    let mut conn = pool.get().await.unwrap();
    conn.execute(models::USERS, &[]).await.unwrap();
    drop(conn);

    let config = DbConfig::new("url", pool, Flavor::Sqlite).unwrap();
    let mut builder = Db::builder();
    builder
        .register_with::<User>(&config, TableOptions::new().table("users"))
        .await
        .unwrap();
    assert!(builder.build().catalog().is_registered::<User>());

    let err = Pool::connect("postgresql://localhost/app").unwrap_err();
    assert!(err.is_invalid_configuration());
}

#[tokio::test]
async fn file_database() {
    let path = std::env::temp_dir().join(format!("tabula-registry-{}.db", std::process::id()));
    let _ = std::fs::remove_file(&path);

    let pool = Pool::new(Sqlite::open(&path)).unwrap();
    pool.get()
        .await
        .unwrap()
        .execute(models::USERS, &[])
        .await
        .unwrap();

    let config = DbConfig::new("file", pool, Flavor::Sqlite).unwrap();
    let mut builder = Db::builder();
    builder
        .register_with::<User>(&config, TableOptions::new().table("users"))
        .await
        .unwrap();
    let db = builder.build();

    let mut user = User::default();
    user.set("name", "carol");
    assert!(db.save(&mut user).await.unwrap());
    assert_eq!(User::NAME, "User");

    let _ = std::fs::remove_file(&path);
}

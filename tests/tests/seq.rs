use pretty_assertions::assert_eq;
use tabula::{Db, Model, SeqModel, TableOptions, Value};
use tests::{
    models::{self, Draft, Event},
    Harness,
};

async fn setup(suffixes: &[&str]) -> (Harness, Db) {
    let h = Harness::new();

    let ddl = suffixes
        .iter()
        .map(|suffix| models::event_shard(suffix))
        .collect::<Vec<_>>();
    h.ddl(&ddl.iter().map(String::as_str).collect::<Vec<_>>())
        .await;

    let mut builder = Db::builder();
    builder.register_seq::<Event>(&h.config).await.unwrap();
    let db = builder.build();

    h.clear_ops();
    (h, db)
}

async fn insert(h: &Harness, table: &str, kind: &str) {
    let mut conn = h.pool.get().await.unwrap();
    conn.execute(
        &format!("insert into {table} (kind) values (?)"),
        &[kind.into()],
    )
    .await
    .unwrap();
}

fn kinds(events: &[Event]) -> Vec<String> {
    events
        .iter()
        .map(|event| event.record().get_string("kind").unwrap().unwrap())
        .collect()
}

#[tokio::test]
async fn candidate_tables_newest_first() {
    let (h, db) = setup(&["_2023", "_2025", "_2024"]).await;
    h.ddl(&[
        "create table event_archive (id integer)",
        "create table event_2024_old (id integer)",
        "create table events_2024 (id integer)",
    ])
    .await;

    let tables = db.resolve_candidate_tables::<Event>().await.unwrap();
    assert_eq!(tables, ["event_2025", "event_2024", "event_2023"]);
}

#[tokio::test]
async fn find_first_in_seq_visits_newest_first() {
    let (h, db) = setup(&["_2023", "_2024", "_2025"]).await;
    insert(&h, "event_2023", "login").await;
    insert(&h, "event_2024", "login").await;
    insert(&h, "event_2024", "logout").await;
    h.clear_ops();

    let event = db
        .find_first_in_seq::<Event>("select *", "kind = ?", &["login".into()])
        .await
        .unwrap()
        .unwrap();
    assert_eq!(event.record().table(), Some("event_2024"));

    // Listing, then the 2025 shard (empty), then 2024 which has a match.
    // 2023 is never queried.
    let queries = h.queries();
    assert_eq!(
        queries[1..],
        [
            "select * from event_2025 where kind = ?",
            "select * from event_2024 where kind = ?",
        ]
    );
}

#[tokio::test]
async fn find_in_seq_concatenates_in_table_order() {
    let (h, db) = setup(&["_2023", "_2024", "_2025"]).await;
    insert(&h, "event_2023", "a").await;
    insert(&h, "event_2023", "b").await;
    insert(&h, "event_2025", "c").await;
    h.clear_ops();

    let events = db
        .find_in_seq::<Event>("select *", "1 = 1 order by id", &[])
        .await
        .unwrap();
    assert_eq!(kinds(&events), ["c", "a", "b"]);

    let tables = events
        .iter()
        .map(|event| event.record().table().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(tables, ["event_2025", "event_2023", "event_2023"]);

    // Every shard is queried, even the empty one.
    assert_eq!(h.queries().len(), 4);
}

#[tokio::test]
async fn zero_matching_tables() {
    let (h, db) = setup(&["_2025"]).await;
    h.ddl(&["drop table event_2025"]).await;

    assert!(db.resolve_candidate_tables::<Event>().await.unwrap().is_empty());

    let events = db
        .find_in_seq::<Event>("select *", "1 = 1", &[])
        .await
        .unwrap();
    assert!(events.is_empty());

    let event = db
        .find_first_in_seq::<Event>("select *", "1 = 1", &[])
        .await
        .unwrap();
    assert!(event.is_none());
}

#[tokio::test]
async fn loaded_shard_record_writes_back_to_its_shard() {
    let (h, db) = setup(&["_2024", "_2025"]).await;
    insert(&h, "event_2024", "login").await;

    let mut event = db
        .find_first_in_seq::<Event>("select *", "kind = ?", &["login".into()])
        .await
        .unwrap()
        .unwrap();
    event.set("payload", "{}");
    h.clear_ops();

    assert!(db.update(&event).await.unwrap());
    assert_eq!(
        h.ops()[0].sql,
        "update event_2024 set id=?, kind=?, payload=? where id=?"
    );

    assert!(db.delete(&event).await.unwrap());
    assert!(db
        .find_in_seq::<Event>("select *", "1 = 1", &[])
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn new_records_go_to_latest_shard() {
    let (_h, db) = setup(&["_2024", "_2025"]).await;

    let mut event = Event::default();
    event.set("kind", "signup");
    assert!(db.save(&mut event).await.unwrap());
    assert_eq!(event.get("id"), Some(&Value::I64(1)));
    assert_eq!(Event::latest_suffix(), "_2025");

    let found = db
        .find_in_seq::<Event>("select *", "kind = ?", &["signup".into()])
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].record().table(), Some("event_2025"));

    let by_key = db.find_by_primary_key::<Event>(1_i64).await.unwrap().unwrap();
    assert_eq!(by_key.get("kind"), Some(&Value::from("signup")));
}

#[tokio::test]
async fn explicit_prefix() {
    let h = Harness::new();
    h.ddl(&[
        "create table audit_2024 (id integer primary key, kind text)",
        "create table audit_2025 (id integer primary key, kind text)",
    ])
    .await;

    let mut builder = Db::builder();
    builder
        .register_seq_with::<Event>(&h.config, TableOptions::new().table("audit"))
        .await
        .unwrap();
    let db = builder.build();

    let tables = db.resolve_candidate_tables::<Event>().await.unwrap();
    assert_eq!(tables, ["audit_2025", "audit_2024"]);
}

#[tokio::test]
async fn empty_suffix_pattern_is_a_configuration_error() {
    let h = Harness::new();
    h.ddl(&["create table draft_v1 (id integer primary key, body text)"])
        .await;

    let mut builder = Db::builder();
    builder.register_seq::<Draft>(&h.config).await.unwrap();
    let db = builder.build();
    h.clear_ops();

    let err = db
        .find_in_seq::<Draft>("select *", "1 = 1", &[])
        .await
        .unwrap_err();
    assert!(err.is_invalid_configuration());

    let err = db.resolve_candidate_tables::<Draft>().await.unwrap_err();
    assert!(err.is_invalid_configuration());
    assert!(h.ops().is_empty());
}

#[tokio::test]
async fn fixed_model_is_not_a_sequence() {
    let h = Harness::new();
    h.ddl(&[&models::event_shard("")]).await;

    // Registered as a plain model: one fixed `event` table.
    let mut builder = Db::builder();
    builder.register::<Event>(&h.config).await.unwrap();
    let db = builder.build();

    let err = db.resolve_candidate_tables::<Event>().await.unwrap_err();
    assert!(err.is_invalid_configuration());
}

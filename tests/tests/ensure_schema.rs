use keel::{verifier, Model, Outcome};
use pretty_assertions::assert_eq;
use tests::{models, tests, DbTest};

#[derive(keel::Model)]
#[table = "test_table"]
#[allow(dead_code, non_snake_case)]
struct Player {
    #[key]
    #[auto]
    Id: i32,

    #[unique]
    SteamId: u64,
}

async fn created_then_already_valid(test: DbTest) {
    let manager = keel::Manager::new();
    let mut conn = test.connect().await;

    let first = manager.ensure_schema::<Player>(&mut *conn).await;
    assert!(first.is_created(), "{first:?}");

    let second = manager.ensure_schema::<Player>(&mut *conn).await;
    assert!(second.is_already_valid(), "{second:?}");
}

async fn table_exists_before_and_after(test: DbTest) {
    let manager = keel::Manager::new();
    let mut conn = test.connect().await;

    assert!(!verifier::table_exists(&mut *conn, "test_table").await.unwrap());
    assert!(!verifier::table_exists(&mut *conn, "never_created").await.unwrap());

    assert!(manager.ensure_schema::<Player>(&mut *conn).await.is_created());

    assert!(verifier::table_exists(&mut *conn, "test_table").await.unwrap());
    assert!(!verifier::table_exists(&mut *conn, "never_created").await.unwrap());
}

async fn created_table_survives_reconnect(test: DbTest) {
    let manager = keel::Manager::new();

    let mut conn = test.connect().await;
    assert!(manager.ensure_schema::<Player>(&mut *conn).await.is_created());
    conn.close().await.unwrap();

    let mut conn = test.connect().await;
    assert!(manager
        .ensure_schema::<Player>(&mut *conn)
        .await
        .is_already_valid());
}

async fn round_trip_diff_is_empty(test: DbTest) {
    #[derive(keel::Model)]
    #[table = "everything"]
    #[allow(dead_code)]
    struct Everything {
        #[key]
        #[auto]
        #[column("Id")]
        id: i64,

        tiny: i8,
        small: u16,
        count: u32,
        flag: bool,
        ratio: f32,
        score: f64,
        name: String,
        bio: Option<String>,
        seen_at: std::time::SystemTime,
        avatar: Vec<u8>,

        #[column(type = text)]
        notes: String,

        #[column(type = varchar(64))]
        #[unique]
        handle: String,

        #[nullable]
        #[column(type = date)]
        birthday: String,

        #[skip]
        cache: std::collections::HashMap<String, String>,
    }

    let table = Everything::table().unwrap();
    let mut conn = test.connect().await;

    conn.create_table(&table).await.unwrap();

    let diff = verifier::diff(&mut *conn, &table).await.unwrap();
    assert!(diff.is_empty(), "{diff}");
    assert_eq!(table.columns.len(), 14);
}

async fn ensure_all_follows_registration_order(test: DbTest) {
    #[derive(keel::Model)]
    #[table = "guilds"]
    #[allow(dead_code, non_snake_case)]
    struct Guild {
        #[key]
        Id: i64,

        #[unique]
        Name: String,
    }

    #[derive(keel::Model)]
    #[table = "members"]
    #[allow(dead_code, non_snake_case)]
    struct Member {
        #[key]
        #[auto]
        Id: i64,

        #[references(table = "guilds", column = "Id")]
        GuildId: i64,
    }

    let manager = models!(Guild, Member).build().unwrap();
    let driver = test.driver();

    let outcomes = manager.ensure_all_with(&*driver).await.unwrap();
    let names: Vec<_> = outcomes.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["guilds", "members"]);
    assert!(outcomes.iter().all(|(_, outcome)| outcome.is_created()));

    let outcomes = manager.ensure_all_with(&*driver).await.unwrap();
    assert!(outcomes
        .iter()
        .all(|(_, outcome)| matches!(outcome, Outcome::AlreadyValid)));
}

async fn keyword_column_names(test: DbTest) {
    #[derive(keel::Model)]
    #[table = "items"]
    #[allow(dead_code, non_snake_case)]
    struct Item {
        #[key]
        Id: i32,

        Desc: String,
        Limit: i32,
        Offset: i32,
        Rank: i64,
    }

    let manager = keel::Manager::new();
    let mut conn = test.connect().await;

    let first = manager.ensure_schema::<Item>(&mut *conn).await;
    assert!(first.is_created(), "{first:?}");

    let second = manager.ensure_schema::<Item>(&mut *conn).await;
    assert!(second.is_already_valid(), "{second:?}");
}

tests!(
    created_then_already_valid,
    table_exists_before_and_after,
    created_table_survives_reconnect,
    round_trip_diff_is_empty,
    ensure_all_follows_registration_order,
    keyword_column_names,
);

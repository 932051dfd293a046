use keel::{verifier, Manager};
use tests::{tests, DbTest};

#[derive(keel::Model)]
#[table = "broken"]
#[allow(dead_code, non_snake_case)]
struct Broken {
    #[key]
    Id: i32,

    #[column(type = "INT(")]
    Value: i32,
}

async fn rejected_ddl_is_reported(test: DbTest) {
    let mut conn = test.connect().await;

    let outcome = Manager::new().ensure_schema::<Broken>(&mut *conn).await;
    let err = outcome.error().expect("DDL should fail");

    assert!(err.is_ddl_execution(), "{err}");
    assert_eq!(
        err.ddl_statement(),
        Some(conn.create_table_sql(&<Broken as keel::Model>::table().unwrap()).as_str())
    );
    assert!(err.to_string().starts_with("ensuring table `broken`: DDL execution failed: "));

    assert!(!verifier::table_exists(&mut *conn, "broken").await.unwrap());
}

async fn connection_is_usable_after_failure(test: DbTest) {
    #[derive(keel::Model)]
    #[table = "fine"]
    #[allow(dead_code, non_snake_case)]
    struct Fine {
        #[key]
        Id: i32,
    }

    let manager = Manager::new();
    let mut conn = test.connect().await;

    assert!(manager.ensure_schema::<Broken>(&mut *conn).await.is_failed());
    assert!(manager.ensure_schema::<Fine>(&mut *conn).await.is_created());
}

tests!(rejected_ddl_is_reported, connection_is_usable_after_failure);

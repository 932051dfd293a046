use keel::{
    schema::db::{ColumnMismatch, TypeClass},
    DriftPolicy, Manager, Outcome,
};
use pretty_assertions::assert_eq;
use tests::{tests, DbTest};

#[derive(keel::Model)]
#[table = "players"]
#[allow(dead_code, non_snake_case)]
struct PlayerV1 {
    #[key]
    #[auto]
    Id: i32,

    Name: String,

    LastSeen: Option<std::time::SystemTime>,
}

// Same table, one release later: `Name` became an integer rating, `LastSeen`
// was dropped and `Nickname` was added.
#[derive(keel::Model)]
#[table = "players"]
#[allow(dead_code, non_snake_case)]
struct PlayerV2 {
    #[key]
    #[auto]
    Id: i32,

    #[column("Name")]
    Rating: i64,

    Nickname: Option<String>,
}

async fn setup(test: &DbTest, policy: DriftPolicy) -> (Manager, Box<dyn keel::driver::Connection>) {
    let manager = Manager::builder().policy(policy).build().unwrap();
    let mut conn = test.connect().await;

    assert!(manager.ensure_schema::<PlayerV1>(&mut *conn).await.is_created());
    (manager, conn)
}

async fn report_returns_diff(test: DbTest) {
    let (manager, mut conn) = setup(&test, DriftPolicy::Report).await;

    let outcome = manager.ensure_schema::<PlayerV2>(&mut *conn).await;
    let diff = match outcome {
        Outcome::DiffFound(diff) => diff,
        outcome => panic!("expected a diff, got {outcome:?}"),
    };

    assert_eq!(diff.missing_columns, vec!["Nickname"]);
    assert_eq!(diff.extra_columns, vec!["LastSeen"]);
    assert_eq!(
        diff.mismatched_columns,
        vec![ColumnMismatch {
            name: "Name".to_string(),
            expected_type: TypeClass::Integer,
            actual_type: TypeClass::Text,
            expected_nullable: false,
            actual_nullable: false,
        }]
    );

    // Reporting never changes the table.
    let outcome = manager.ensure_schema::<PlayerV1>(&mut *conn).await;
    assert!(outcome.is_already_valid(), "{outcome:?}");
}

async fn add_missing_adds_only_missing_columns(test: DbTest) {
    let (manager, mut conn) = setup(&test, DriftPolicy::AddMissing).await;

    let outcome = manager.ensure_schema::<PlayerV2>(&mut *conn).await;
    let diff = match outcome {
        Outcome::Reconciled(diff) => diff,
        outcome => panic!("expected reconciliation, got {outcome:?}"),
    };
    assert_eq!(diff.missing_columns, vec!["Nickname"]);

    // The extra column and the mismatch are still there.
    let outcome = manager.ensure_schema::<PlayerV2>(&mut *conn).await;
    let diff = outcome.diff().unwrap();
    assert!(diff.missing_columns.is_empty());
    assert_eq!(diff.extra_columns, vec!["LastSeen"]);
    assert_eq!(diff.mismatched_columns.len(), 1);
}

async fn fail_policy_returns_schema_drift(test: DbTest) {
    let (manager, mut conn) = setup(&test, DriftPolicy::Fail).await;

    let err = manager
        .ensure_schema::<PlayerV2>(&mut *conn)
        .await
        .into_result()
        .unwrap_err();

    assert!(err.is_schema_drift());
    assert_eq!(
        err.to_string(),
        "ensuring table `players`: schema drift in table `players`: 1 missing, 1 extra, 1 mismatched column(s)"
    );
}

tests!(
    report_returns_diff,
    add_missing_adds_only_missing_columns,
    fail_policy_returns_schema_drift,
);

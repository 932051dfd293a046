use keel::{
    schema::{
        app,
        db::{self, ForeignKey},
    },
    sql::Serializer,
    Model,
};
use pretty_assertions::assert_eq;

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

#[test]
fn synthesizes_test_table() {
    let table = Player::table().unwrap();

    assert_eq!(
        Serializer::mysql().create_table(&table),
        "CREATE TABLE test_table (Id INT NOT NULL AUTO_INCREMENT, SteamId BIGINT UNSIGNED NOT NULL, PRIMARY KEY (Id), UNIQUE (SteamId))"
    );
}

#[test]
fn structural_description() {
    assert_eq!(
        Player::schema(),
        app::Model::new("Player")
            .table_name("test_table")
            .field(
                app::Field::new("Id", app::Type::I32)
                    .primary_key()
                    .auto_increment()
            )
            .field(app::Field::new("SteamId", app::Type::U64).unique())
    );
}

#[test]
fn defaults_and_overrides() {
    #[derive(keel::Model)]
    #[allow(dead_code)]
    struct Account {
        #[key]
        #[column("Id", type = bigint)]
        id: u32,

        #[column("DisplayName")]
        display_name: Option<String>,

        #[column(type = "DECIMAL(10, 2)")]
        balance: f64,

        #[references(table = "guilds", column = "Id")]
        guild_id: i64,

        #[unsigned]
        #[column(type = double)]
        weight: f64,

        #[skip]
        session: std::sync::Mutex<Vec<String>>,
    }

    let table = Account::table().unwrap();
    assert_eq!(table.name, "Account");

    let names: Vec<_> = table.columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Id", "DisplayName", "balance", "guild_id", "weight"]
    );

    assert!(table.columns[1].nullable);
    assert_eq!(
        table.columns[3].foreign_key,
        Some(ForeignKey {
            table: "guilds".to_string(),
            column: "Id".to_string(),
        })
    );
    assert_eq!(table.columns[4].ty, db::Type::Double);

    assert_eq!(
        Serializer::mysql().create_table(&table),
        "CREATE TABLE Account (Id BIGINT UNSIGNED NOT NULL, DisplayName VARCHAR(255) NULL, \
         balance DECIMAL(10, 2) NOT NULL, guild_id BIGINT NOT NULL, weight DOUBLE NOT NULL, \
         PRIMARY KEY (Id), FOREIGN KEY (guild_id) REFERENCES guilds(Id))"
    );
}

#[test]
fn multiple_primary_keys_are_rejected() {
    #[derive(keel::Model)]
    #[allow(dead_code)]
    struct TwoKeys {
        #[key]
        a: i32,

        #[key]
        b: i32,
    }

    let err = TwoKeys::table().unwrap_err();
    assert!(err.is_invalid_schema());
    assert_eq!(
        err.to_string(),
        "extracting model `TwoKeys`: invalid schema: table `TwoKeys` declares more than one primary key: a, b"
    );
}

#[test]
fn auto_increment_without_key_is_rejected() {
    #[derive(keel::Model)]
    #[allow(dead_code)]
    struct Counter {
        #[key]
        id: i32,

        #[auto]
        hits: i32,
    }

    assert!(Counter::table().unwrap_err().is_invalid_schema());
}

#[test]
fn unmapped_type_needs_column_type() {
    struct Money(#[allow(dead_code)] i64);

    impl keel::Primitive for Money {
        const TYPE: app::Type = app::Type::Unmapped;
    }

    #[derive(keel::Model)]
    #[allow(dead_code)]
    struct Wallet {
        #[key]
        id: i32,

        amount: Money,
    }

    #[derive(keel::Model)]
    #[allow(dead_code)]
    struct TypedWallet {
        #[key]
        id: i32,

        #[column(type = bigint)]
        amount: Money,
    }

    let err = Wallet::table().unwrap_err();
    assert!(err.is_invalid_schema());
    assert!(err
        .to_string()
        .contains("cannot infer a column type for field `Wallet::amount`"));

    let table = TypedWallet::table().unwrap();
    assert_eq!(table.columns[1].ty, db::Type::Integer(8));
}

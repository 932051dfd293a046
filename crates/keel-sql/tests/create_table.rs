use keel_core::schema::{
    app::{Field, Model, Type},
    db::{self, Column, Table},
    extract,
};
use keel_sql::{Serializer, Statement};
use pretty_assertions::assert_eq;

fn test_table() -> Table {
    extract(
        &Model::new("Player")
            .table_name("test_table")
            .field(Field::new("Id", Type::I32).primary_key().auto_increment())
            .field(Field::new("SteamId", Type::U64).unique()),
    )
    .unwrap()
}

#[test]
fn mysql_primary_key_and_unique() {
    assert_eq!(
        Serializer::mysql().create_table(&test_table()),
        "CREATE TABLE test_table (Id INT NOT NULL AUTO_INCREMENT, SteamId BIGINT UNSIGNED NOT NULL, PRIMARY KEY (Id), UNIQUE (SteamId))"
    );
}

#[test]
fn sqlite_inlines_auto_increment_key() {
    assert_eq!(
        Serializer::sqlite().create_table(&test_table()),
        "CREATE TABLE test_table (Id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT, SteamId BIGINT UNSIGNED NOT NULL, UNIQUE (SteamId))"
    );
}

#[test]
fn rendering_is_deterministic() {
    let serializer = Serializer::mysql();
    let first = serializer.create_table(&test_table());

    for _ in 0..10 {
        assert_eq!(serializer.create_table(&test_table()), first);
    }
}

#[test]
fn no_trailing_semicolon() {
    let sql = Serializer::mysql().create_table(&test_table());
    assert!(!sql.ends_with(';'));
}

#[test]
fn nullable_columns_and_no_primary_key() {
    let table = Table {
        name: "events".into(),
        columns: vec![
            Column::new("Kind", db::Type::Text),
            Column {
                nullable: true,
                ..Column::new("Payload", db::Type::Blob)
            },
        ],
    };

    assert_eq!(
        Serializer::mysql().create_table(&table),
        "CREATE TABLE events (Kind TEXT NOT NULL, Payload BLOB NULL)"
    );
}

#[test]
fn unique_clauses_follow_declaration_order() {
    let table = extract(
        &Model::new("Account")
            .field(Field::new("Id", Type::I64).primary_key())
            .field(Field::new("Email", Type::String).unique())
            .field(Field::new("Handle", Type::String).unique()),
    )
    .unwrap();

    assert_eq!(
        Serializer::mysql().create_table(&table),
        "CREATE TABLE Account (Id BIGINT NOT NULL, Email VARCHAR(255) NOT NULL, Handle VARCHAR(255) NOT NULL, \
         PRIMARY KEY (Id), UNIQUE (Email), UNIQUE (Handle))"
    );
}

#[test]
fn unique_primary_key_is_not_repeated() {
    let table = extract(
        &Model::new("Account").field(Field::new("Id", Type::I64).primary_key().unique()),
    )
    .unwrap();

    assert_eq!(
        Serializer::mysql().create_table(&table),
        "CREATE TABLE Account (Id BIGINT NOT NULL, PRIMARY KEY (Id))"
    );
}

#[test]
fn foreign_keys() {
    let table = extract(
        &Model::new("Post")
            .table_name("posts")
            .field(Field::new("Id", Type::I64).primary_key().auto_increment())
            .field(Field::new("AuthorId", Type::I64).references("users", "Id")),
    )
    .unwrap();

    assert_eq!(
        Serializer::mysql().create_table(&table),
        "CREATE TABLE posts (Id BIGINT NOT NULL AUTO_INCREMENT, AuthorId BIGINT NOT NULL, \
         PRIMARY KEY (Id), FOREIGN KEY (AuthorId) REFERENCES users(Id))"
    );
}

#[test]
fn custom_types_are_emitted_verbatim() {
    let table = extract(
        &Model::new("Price")
            .field(Field::new("Id", Type::I32).primary_key())
            .field(Field::new("Amount", Type::F64).storage_ty(db::Type::Custom("DECIMAL(10, 2)".into()))),
    )
    .unwrap();

    assert_eq!(
        Serializer::mysql().create_table(&table),
        "CREATE TABLE Price (Id INT NOT NULL, Amount DECIMAL(10, 2) NOT NULL, PRIMARY KEY (Id))"
    );
}

#[test]
fn unsigned_is_ignored_on_non_integers() {
    let table = extract(
        &Model::new("Reading")
            .field(Field::new("Id", Type::U32).primary_key())
            .field(Field::new("Value", Type::F64).unsigned()),
    )
    .unwrap();

    assert_eq!(
        Serializer::mysql().create_table(&table),
        "CREATE TABLE Reading (Id INT UNSIGNED NOT NULL, Value DOUBLE NOT NULL, PRIMARY KEY (Id))"
    );
}

#[test]
fn quotes_identifiers_when_needed() {
    let table = Table {
        name: "order".into(),
        columns: vec![Column::new("first name", db::Type::Text)],
    };

    assert_eq!(
        Serializer::mysql().create_table(&table),
        "CREATE TABLE `order` (`first name` TEXT NOT NULL)"
    );
    assert_eq!(
        Serializer::sqlite().create_table(&table),
        r#"CREATE TABLE "order" ("first name" TEXT NOT NULL)"#
    );

    let table = Table {
        name: "we`ird".into(),
        columns: vec![Column::new("Id", db::Type::Integer(4))],
    };
    assert_eq!(
        Serializer::mysql().create_table(&table),
        "CREATE TABLE `we``ird` (Id INT NOT NULL)"
    );
}

#[test]
fn quotes_keyword_column_names() {
    let table = extract(
        &Model::new("Item")
            .table_name("items")
            .field(Field::new("Id", Type::I32).primary_key())
            .field(Field::new("Desc", Type::String))
            .field(Field::new("Limit", Type::I32))
            .field(Field::new("Offset", Type::I32))
            .field(Field::new("Interval", Type::I32)),
    )
    .unwrap();

    assert_eq!(
        Serializer::mysql().create_table(&table),
        "CREATE TABLE items (Id INT NOT NULL, `Desc` VARCHAR(255) NOT NULL, `Limit` INT NOT NULL, \
         Offset INT NOT NULL, `Interval` INT NOT NULL, PRIMARY KEY (Id))"
    );
    assert_eq!(
        Serializer::sqlite().create_table(&table),
        r#"CREATE TABLE items (Id INT NOT NULL, "Desc" VARCHAR(255) NOT NULL, "Limit" INT NOT NULL, "Offset" INT NOT NULL, Interval INT NOT NULL, PRIMARY KEY (Id))"#
    );
}

#[test]
fn quotes_keyword_table_names() {
    let table = Table {
        name: "range".into(),
        columns: vec![Column::new("rank", db::Type::Integer(4))],
    };

    assert_eq!(
        Serializer::mysql().create_table(&table),
        "CREATE TABLE `range` (`rank` INT NOT NULL)"
    );
    assert_eq!(
        Serializer::sqlite().create_table(&table),
        r#"CREATE TABLE "range" (rank INT NOT NULL)"#
    );
    assert_eq!(
        Serializer::mysql().serialize(&Statement::drop_table("range")),
        "DROP TABLE `range`"
    );
}

#[test]
fn add_column() {
    let column = Column {
        nullable: true,
        ..Column::new("LastSeen", db::Type::DateTime)
    };

    assert_eq!(
        Serializer::mysql().add_column("players", &column),
        "ALTER TABLE players ADD COLUMN LastSeen DATETIME NULL"
    );
}

#[test]
fn add_column_drops_key_attributes() {
    let column = Column {
        primary_key: true,
        auto_increment: true,
        ..Column::new("Id", db::Type::Integer(8))
    };

    assert_eq!(
        Serializer::sqlite().add_column("players", &column),
        "ALTER TABLE players ADD COLUMN Id BIGINT NOT NULL"
    );
}

#[test]
fn drop_table() {
    let serializer = Serializer::mysql();
    assert_eq!(
        serializer.serialize(&Statement::drop_table("players")),
        "DROP TABLE players"
    );
    assert_eq!(
        serializer.serialize(&Statement::drop_table_if_exists("players")),
        "DROP TABLE IF EXISTS players"
    );
}

#[test]
fn column_clause() {
    let column = Column {
        unsigned: true,
        ..Column::new("SteamId", db::Type::Integer(8))
    };

    assert_eq!(
        Serializer::mysql().column_clause(&column),
        "SteamId BIGINT UNSIGNED NOT NULL"
    );
}

// Integration tests for the snapshot schema migrations

use metacheck_store::migrations::{apply_migrations, list_snapshot_tables, SCHEMA_VERSION_TABLE};
use rusqlite::Connection;

fn setup_test_db() -> Connection {
    Connection::open_in_memory().expect("Failed to create in-memory database")
}

#[test]
fn test_apply_migrations_on_empty_db() {
    let mut conn = setup_test_db();

    let result = apply_migrations(&mut conn);
    assert!(
        result.is_ok(),
        "Migrations should succeed: {:?}",
        result.err()
    );

    let tables = list_snapshot_tables(&conn).unwrap();
    let expected_tables = vec![
        "deck_cards",
        "meta_deck_types",
        "meta_type_cards",
        "meta_type_deck_ids",
        "player",
        "player_decks",
        "player_type_cards",
    ];
    assert_eq!(tables, expected_tables);
}

#[test]
fn test_schema_version_records_each_migration_once() {
    let mut conn = setup_test_db();
    apply_migrations(&mut conn).unwrap();
    apply_migrations(&mut conn).unwrap();

    let version_count: i64 = conn
        .query_row(
            &format!("SELECT COUNT(*) FROM {}", SCHEMA_VERSION_TABLE),
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(version_count, 1);
}

#[test]
fn test_migration_preserves_existing_rows() {
    let mut conn = setup_test_db();
    apply_migrations(&mut conn).unwrap();
    conn.execute(
        "INSERT INTO meta_deck_types (deck_type, uses, wins) VALUES ('Hog Cycle', 10, 5)",
        [],
    )
    .unwrap();

    apply_migrations(&mut conn).unwrap();

    let uses: i64 = conn
        .query_row("SELECT SUM(uses) FROM meta_deck_types", [], |row| row.get(0))
        .unwrap();
    assert_eq!(uses, 10);
}

#[test]
fn test_counter_columns_default_to_zero() {
    let mut conn = setup_test_db();
    apply_migrations(&mut conn).unwrap();
    conn.execute(
        "INSERT INTO player_decks (player_tag, deck_hash) VALUES ('#P1', 'D1')",
        [],
    )
    .unwrap();

    let (uses, wins): (i64, i64) = conn
        .query_row("SELECT uses, wins FROM player_decks", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .unwrap();
    assert_eq!((uses, wins), (0, 0));
}

#[test]
fn test_deck_slot_is_unique_per_deck() {
    let mut conn = setup_test_db();
    apply_migrations(&mut conn).unwrap();
    conn.execute(
        "INSERT INTO deck_cards (deck_hash, slot, card_id) VALUES ('D1', 0, 26000000)",
        [],
    )
    .unwrap();

    let dup = conn.execute(
        "INSERT INTO deck_cards (deck_hash, slot, card_id) VALUES ('D1', 0, 26000001)",
        [],
    );
    assert!(dup.is_err(), "Duplicate slot should violate the primary key");
}

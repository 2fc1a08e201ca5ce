//! Tests for the store schema and insert statements

use rusqlite::params_from_iter;

use super::{LOC_LINE, PIF_LINE, REF_LINES, extract, load_str};
use crate::loader::store::{BplanStore, insert_sql};
use crate::models::FieldValue;
use crate::parser::transform::transform_row;
use crate::schema::{DATA_TYPES, RecordType};

#[test]
fn test_schema_creates_all_tables() {
    let store = BplanStore::open_in_memory().unwrap();
    let conn = store.connection();

    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
        .unwrap();
    let tables: Vec<String> = stmt
        .query_map([], |r| r.get(0))
        .unwrap()
        .collect::<rusqlite::Result<_>>()
        .unwrap();

    for record_type in DATA_TYPES {
        assert!(
            tables.contains(&record_type.table_name().to_string()),
            "missing table {}",
            record_type
        );
    }
}

#[test]
fn test_insert_sql_uses_declared_field_order() {
    assert_eq!(
        insert_sql(RecordType::Ref),
        "INSERT INTO REF (type, code, description) VALUES (?, ?, ?)"
    );

    let loc = insert_sql(RecordType::Loc);
    assert!(loc.starts_with("INSERT INTO LOC (tiploc, name, start_date,"));
    assert_eq!(loc.matches('?').count(), 11);
}

#[test]
fn test_integer_affinity_coerces_text_parameters() {
    let mut store = BplanStore::open_in_memory().unwrap();
    let tx = store.transaction().unwrap();

    let payload: Vec<String> = [
        "HORSHAM",
        "Horsham",
        "19-05-2024 00:00:00",
        "",
        "530000",
        "160000",
        "M",
        "Q",
        "87149",
        "N",
        "",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    let values = transform_row(RecordType::Loc, &payload).unwrap();
    tx.execute(&insert_sql(RecordType::Loc), params_from_iter(values.iter()))
        .unwrap();
    tx.commit().unwrap();

    let (easting, start_date, end_date): (i64, String, Option<String>) = store
        .connection()
        .query_row(
            "SELECT easting, start_date, end_date FROM LOC WHERE tiploc = 'HORSHAM'",
            [],
            |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
        )
        .unwrap();

    // Easting arrived as text but the INTEGER column coerced it
    assert_eq!(easting, 530000);
    assert_eq!(start_date, "2024-05-19 00:00:00");
    assert_eq!(end_date, None);
}

#[test]
fn test_discriminator_columns_default() {
    let content = extract(&[PIF_LINE, REF_LINES[0], LOC_LINE]);
    let (result, store) = load_str(&content);
    result.unwrap();

    let discriminator: String = store
        .connection()
        .query_row("SELECT type_code_type FROM REF LIMIT 1", [], |r| r.get(0))
        .unwrap();
    assert_eq!(discriminator, "REF");

    let zone_ref: String = store
        .connection()
        .query_row("SELECT zone_ref_type FROM LOC LIMIT 1", [], |r| r.get(0))
        .unwrap();
    assert_eq!(zone_ref, "ZNE");
}

#[test]
fn test_null_date_round_trip() {
    let values = vec![
        FieldValue::Text("ZNE".to_string()),
        FieldValue::Text("Q".to_string()),
        FieldValue::Null,
    ];

    let mut store = BplanStore::open_in_memory().unwrap();
    let tx = store.transaction().unwrap();
    tx.execute(&insert_sql(RecordType::Ref), params_from_iter(values.iter()))
        .unwrap();
    tx.commit().unwrap();

    let description: Option<String> = store
        .connection()
        .query_row("SELECT description FROM REF", [], |r| r.get(0))
        .unwrap();
    assert_eq!(description, None);
}

#[test]
fn test_create_writes_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("geography.sqlite");

    BplanStore::create(&path).unwrap();
    assert!(path.exists());
}

use namelist_core::{Record, RecordId};

#[test]
fn record_serializes_id_as_bare_integer() {
    let record = Record::with_id(RecordId::from_raw(1_739_000_000_123), "Ana");

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["id"], 1_739_000_000_123_i64);
    assert_eq!(json["name"], "Ana");

    let decoded: Record = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn rename_keeps_identity() {
    let mut record = Record::with_id(RecordId::from_raw(7), "before");
    record.rename("after");

    assert_eq!(record.id, RecordId::from_raw(7));
    assert_eq!(record.name, "after");
    assert_eq!(record.id.to_string(), "7");
}

use namelist_core::{
    FixedClock, InMemoryRecordStore, KeyedRowList, ListRenderer, Record, RecordId,
    RecordListController, RecordStore, ReconcileStats, RowAction, RowBuffer,
};

fn labels(rows: &RowBuffer) -> Vec<String> {
    rows.labels().into_iter().map(str::to_string).collect()
}

fn assert_rows_match_store<S: RecordStore>(controller: &RecordListController<S, RowBuffer>) {
    let rows = controller.renderer().rows();
    let records = controller.records();
    assert_eq!(rows.len(), records.len());
    for (row, record) in rows.iter().zip(records) {
        assert_eq!(row.label, record.name);
        assert_eq!(row.action, RowAction::Delete(record.id));
    }
}

#[test]
fn submit_form_creates_and_repaints() {
    let mut controller = RecordListController::new(InMemoryRecordStore::new(), RowBuffer::new());

    let ana = controller.submit_form("Ana");
    controller.submit_form("Luis");

    assert_eq!(labels(controller.renderer()), vec!["Ana", "Luis"]);
    assert_eq!(controller.renderer().render_count(), 2);
    assert_eq!(
        controller.renderer().action_at(0),
        Some(RowAction::Delete(ana.id))
    );
    assert_rows_match_store(&controller);
}

#[test]
fn pressing_row_delete_action_removes_record_and_repaints() {
    let mut controller = RecordListController::new(
        InMemoryRecordStore::with_clock(FixedClock(100)),
        RowBuffer::new(),
    );
    controller.submit_form("Ana");
    controller.submit_form("Luis");
    controller.submit_form("Marta");

    let action = controller.renderer().action_at(1).unwrap();
    assert_eq!(controller.trigger(action), 1);

    assert_eq!(labels(controller.renderer()), vec!["Ana", "Marta"]);
    assert_rows_match_store(&controller);
}

#[test]
fn delete_miss_still_repaints() {
    let mut controller = RecordListController::new(InMemoryRecordStore::new(), RowBuffer::new());
    controller.submit_form("Ana");
    let renders_before = controller.renderer().render_count();

    assert_eq!(controller.delete(RecordId::from_raw(999_999)), 0);

    assert_eq!(controller.renderer().render_count(), renders_before + 1);
    assert_eq!(labels(controller.renderer()), vec!["Ana"]);
}

#[test]
fn rename_repaints_only_on_hit() {
    let mut controller = RecordListController::new(InMemoryRecordStore::new(), RowBuffer::new());
    let ana = controller.submit_form("Ana");
    let renders_before = controller.renderer().render_count();

    assert!(!controller.rename(RecordId::from_raw(-5), "ghost"));
    assert_eq!(controller.renderer().render_count(), renders_before);

    assert!(controller.rename(ana.id, "Ana María"));
    assert_eq!(controller.renderer().render_count(), renders_before + 1);
    assert_eq!(labels(controller.renderer()), vec!["Ana María"]);
}

#[test]
fn new_controller_renders_nothing_until_refresh() {
    let mut store = InMemoryRecordStore::new();
    store.create("preloaded".to_string());
    let mut controller = RecordListController::new(store, RowBuffer::new());
    assert_eq!(controller.renderer().render_count(), 0);

    controller.refresh();

    assert_eq!(labels(controller.renderer()), vec!["preloaded"]);
    let (store, rows) = controller.into_parts();
    assert_eq!(store.len(), 1);
    assert_eq!(rows.render_count(), 1);
}

#[test]
fn keyed_rows_report_reconcile_counters() {
    let mut controller = RecordListController::new(
        InMemoryRecordStore::with_clock(FixedClock(1)),
        KeyedRowList::new(),
    );
    let ana = controller.submit_form("Ana");
    let luis = controller.submit_form("Luis");
    assert_eq!(
        controller.renderer().last_stats(),
        ReconcileStats {
            kept: 1,
            inserted: 1,
            ..ReconcileStats::default()
        }
    );

    controller.rename(ana.id, "Ana María");
    assert_eq!(
        controller.renderer().last_stats(),
        ReconcileStats {
            kept: 1,
            relabeled: 1,
            ..ReconcileStats::default()
        }
    );

    controller.delete(luis.id);
    assert_eq!(
        controller.renderer().last_stats(),
        ReconcileStats {
            kept: 1,
            removed: 1,
            ..ReconcileStats::default()
        }
    );
    assert_eq!(
        controller.renderer().action_at(0),
        Some(RowAction::Delete(ana.id))
    );
}

#[test]
fn keyed_rows_match_clear_and_rebuild() {
    let snapshots: Vec<Vec<Record>> = vec![
        vec![
            Record::with_id(RecordId::from_raw(1), "a"),
            Record::with_id(RecordId::from_raw(2), "b"),
        ],
        vec![
            Record::with_id(RecordId::from_raw(2), "b2"),
            Record::with_id(RecordId::from_raw(3), "c"),
            Record::with_id(RecordId::from_raw(1), "a"),
        ],
        vec![Record::with_id(RecordId::from_raw(3), "c")],
        vec![],
        vec![Record::with_id(RecordId::from_raw(4), "")],
    ];

    let mut keyed = KeyedRowList::new();
    let mut rebuilt = RowBuffer::new();
    for snapshot in &snapshots {
        keyed.render(snapshot);
        rebuilt.render(snapshot);
        assert_eq!(keyed.rows(), rebuilt.rows());
    }
}

#[test]
fn controller_accepts_boxed_renderer() {
    let renderer: Box<dyn ListRenderer> = Box::new(RowBuffer::new());
    let mut controller = RecordListController::new(InMemoryRecordStore::new(), renderer);

    controller.submit_form("boxed");

    assert_eq!(controller.records().len(), 1);
}

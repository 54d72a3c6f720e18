use taskboard_core::{
    reduce, Action, AppState, MemorySlotStore, Project, SlotStore, SqliteSlotStore,
    StateStorage, Task, STORAGE_KEY, UNREADABLE_BACKUP_KEY,
};

fn reachable_state() -> AppState {
    let mut state = AppState::default_seed();
    let actions = vec![
        Action::AddTask {
            project_id: "p3".to_string(),
            task: Task::new("t100-abcdefghi", "Write tests", ""),
        },
        Action::MoveTask {
            task_id: "t1".to_string(),
            from_project_id: "p1".to_string(),
            to_project_id: "p3".to_string(),
        },
        Action::DeleteTask {
            project_id: "p2".to_string(),
            task_id: "t3".to_string(),
        },
        Action::AddTask {
            project_id: "p2".to_string(),
            task: Task::new("t101-zzzzzzzzz", "Unicode ✓ \"quoted\"", "multi\nline"),
        },
    ];
    for action in actions {
        state = reduce(&state, action);
    }
    state
}

#[test]
fn empty_slot_loads_default_seed() {
    let storage = StateStorage::new(MemorySlotStore::new());
    assert_eq!(storage.load(), AppState::default_seed());
}

#[test]
fn save_then_load_roundtrips_in_memory() {
    let storage = StateStorage::new(MemorySlotStore::new());
    let state = reachable_state();

    storage.save(&state);
    assert_eq!(storage.load(), state);
}

#[test]
fn save_then_load_roundtrips_through_sqlite_file() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("board.sqlite3");
    let state = reachable_state();

    StateStorage::new(SqliteSlotStore::new(&db_path)).save(&state);
    let loaded = StateStorage::new(SqliteSlotStore::new(&db_path)).load();

    assert_eq!(loaded, state);
}

#[test]
fn saved_payload_has_documented_shape() {
    let slots = MemorySlotStore::new();
    StateStorage::new(&slots).save(&AppState::default_seed());

    let raw = slots.read_slot(STORAGE_KEY).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["projects"]);
    assert_eq!(json["projects"][2]["tasks"], serde_json::json!([]));
}

#[test]
fn payloads_without_projects_fall_back_to_seed() {
    for raw in ["{}", "null", "42", "\"text\"", r#"{"project":[]}"#, r#"{"projects":null}"#] {
        let storage = StateStorage::new(MemorySlotStore::with_slot(STORAGE_KEY, raw));
        assert_eq!(storage.load(), AppState::default_seed(), "payload: {raw}");
    }
}

#[test]
fn malformed_payloads_fall_back_to_seed() {
    for raw in ["", "{", r#"{"projects":"nope"}"#, r#"{"projects":[{"name":"No id"}]}"#] {
        let storage = StateStorage::new(MemorySlotStore::with_slot(STORAGE_KEY, raw));
        assert_eq!(storage.load(), AppState::default_seed(), "payload: {raw}");
    }
}

#[test]
fn stored_empty_board_is_kept_verbatim() {
    let storage =
        StateStorage::new(MemorySlotStore::with_slot(STORAGE_KEY, r#"{"projects":[]}"#));
    assert_eq!(storage.load(), AppState::new(Vec::new()));
}

#[test]
fn custom_projects_load_without_validation() {
    let raw = r#"{"projects":[{"id":"x","name":"Inbox","tasks":[{"id":"a","title":"","description":"d"}]}]}"#;
    let storage = StateStorage::new(MemorySlotStore::with_slot(STORAGE_KEY, raw));

    let expected = AppState::new(vec![Project::new(
        "x",
        "Inbox",
        vec![Task::new("a", "", "d")],
    )]);
    assert_eq!(storage.load(), expected);
}

#[test]
fn unreadable_database_falls_back_to_seed_and_save_does_not_panic() {
    let dir = tempfile::tempdir().unwrap();
    // A directory cannot be opened as a database file.
    let storage = StateStorage::new(SqliteSlotStore::new(dir.path()));

    assert_eq!(storage.load(), AppState::default_seed());
    storage.save(&reachable_state());
}

#[test]
fn null_fields_in_stored_board_load_as_empty_instead_of_seed() {
    let raw = r#"{"projects":[{"id":"p1","name":"Mine","tasks":[{"id":"u1","title":"Keep me","description":null}]},{"id":"p2","name":null,"tasks":null}]}"#;
    let slots = MemorySlotStore::with_slot(STORAGE_KEY, raw);

    let loaded = StateStorage::new(&slots).load();

    let expected = AppState::new(vec![
        Project::new("p1", "Mine", vec![Task::new("u1", "Keep me", "")]),
        Project::new("p2", "", Vec::new()),
    ]);
    assert_eq!(loaded, expected);
    assert_eq!(slots.read_slot(UNREADABLE_BACKUP_KEY).unwrap(), None);
}

#[test]
fn unparseable_payload_is_backed_up_before_falling_back() {
    let raw = r#"{"projects":[{"name":"No id"}]}"#;
    let slots = MemorySlotStore::with_slot(STORAGE_KEY, raw);

    assert_eq!(StateStorage::new(&slots).load(), AppState::default_seed());
    assert_eq!(
        slots.read_slot(UNREADABLE_BACKUP_KEY).unwrap().as_deref(),
        Some(raw)
    );
}

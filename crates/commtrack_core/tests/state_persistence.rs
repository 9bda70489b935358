use chrono::{TimeZone, Utc};
use commtrack_core::db::open_db_in_memory;
use commtrack_core::repo::state_repo::{DEFAULT_METHODS_KEY, DEFAULT_STATE_KEY};
use commtrack_core::{
    Communication, CommunicationMethod, CommunicationType, Company, ContactDetails,
    MemoryStateRepository, MethodsSnapshot, RepoError, SqliteStateRepository, StateRepository,
    StorageKeys, TrackerSnapshot,
};

fn snapshot() -> TrackerSnapshot {
    let mut company = Company::with_id("c1", "Acme", 7);
    company.preferred_methods = vec!["Email".to_string()];
    let mut comm = Communication::new(
        "c1",
        CommunicationType::LinkedInMessage,
        Utc.with_ymd_and_hms(2024, 1, 2, 8, 30, 0).unwrap(),
    );
    comm.contact_details = Some(ContactDetails {
        email: Some("ops@acme.test".to_string()),
        ..ContactDetails::default()
    });
    TrackerSnapshot {
        companies: vec![company],
        communications: vec![comm],
    }
}

#[test]
fn empty_database_loads_empty_collections() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStateRepository::new(&conn);

    assert_eq!(repo.load_tracker_state().unwrap(), TrackerSnapshot::default());
    assert_eq!(repo.load_methods().unwrap(), MethodsSnapshot::default());
}

#[test]
fn sqlite_saves_overwrite_previous_value() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStateRepository::new(&conn);

    repo.save_tracker_state(&TrackerSnapshot::default()).unwrap();
    repo.save_tracker_state(&snapshot()).unwrap();

    assert_eq!(repo.load_tracker_state().unwrap(), snapshot());
    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM kv_store;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn methods_live_under_an_independent_key() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStateRepository::new(&conn);
    let methods = MethodsSnapshot {
        methods: vec![CommunicationMethod::new("Email", 1)],
    };

    repo.save_methods(&methods).unwrap();

    assert_eq!(repo.load_methods().unwrap(), methods);
    assert_eq!(repo.load_tracker_state().unwrap(), TrackerSnapshot::default());
}

#[test]
fn custom_keys_do_not_see_default_keys() {
    let conn = open_db_in_memory().unwrap();
    SqliteStateRepository::new(&conn)
        .save_tracker_state(&snapshot())
        .unwrap();

    let custom = SqliteStateRepository::with_keys(
        &conn,
        StorageKeys {
            state_key: "tenant-b-state".to_string(),
            methods_key: "tenant-b-methods".to_string(),
        },
    );
    assert!(custom.load_tracker_state().unwrap().companies.is_empty());
}

#[test]
fn stored_envelope_uses_camel_case_wire_names() {
    let repo = MemoryStateRepository::new();
    repo.save_tracker_state(&snapshot()).unwrap();

    let raw = repo.raw_value(DEFAULT_STATE_KEY).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(json["version"], 0);
    let company = &json["state"]["companies"][0];
    assert_eq!(company["communicationPeriodicity"], 7);
    assert_eq!(company["preferredMethods"][0], "Email");
    let comm = &json["state"]["communications"][0];
    assert_eq!(comm["companyId"], "c1");
    assert_eq!(comm["type"], "LinkedIn Message");
    assert_eq!(comm["date"], "2024-01-02T08:30:00Z");
    assert_eq!(comm["contactDetails"]["email"], "ops@acme.test");
}

#[test]
fn legacy_records_without_optional_fields_load() {
    let repo = MemoryStateRepository::new();
    repo.insert_raw(
        DEFAULT_STATE_KEY,
        r#"{"state":{"companies":[{"id":"1","name":"TechCorp Solutions","location":"San Francisco, CA","linkedinProfile":"https://linkedin.com/company/techcorp","emails":["contact@techcorp.com"],"phoneNumbers":["+1-555-0123"],"communicationPeriodicity":7,"comments":"Key enterprise client"}],"communications":[{"id":"9","companyId":"1","type":"Email","date":"2024-01-02T08:30:00.000Z"}]},"version":0}"#,
    );
    repo.insert_raw(
        DEFAULT_METHODS_KEY,
        r#"{"state":{"methods":[{"id":"m1","name":"Email","description":"Direct mail"}]}}"#,
    );

    let state = repo.load_tracker_state().unwrap();
    assert!(state.companies[0].preferred_methods.is_empty());
    assert_eq!(state.companies[0].comments.as_deref(), Some("Key enterprise client"));
    assert_eq!(state.communications[0].notes, None);

    let methods = repo.load_methods().unwrap();
    assert!(methods.methods[0].is_active);
    assert_eq!(methods.methods[0].sequence, 0);
}

#[test]
fn corrupt_value_is_reported_as_invalid_data() {
    let repo = MemoryStateRepository::new();
    repo.insert_raw(DEFAULT_STATE_KEY, "{not json");

    let err = repo.load_tracker_state().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(ref message) if message.contains(DEFAULT_STATE_KEY)));
}

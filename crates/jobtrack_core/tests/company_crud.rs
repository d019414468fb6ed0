use jobtrack_core::db::migrations::latest_version;
use jobtrack_core::db::open_db_in_memory;
use jobtrack_core::{
    ApplicationStatus, Company, CompanyStore, RepoError, SqliteCompanyStore,
};
use rusqlite::Connection;
use uuid::Uuid;

#[test]
fn insert_and_load_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCompanyStore::try_new(&conn).unwrap();

    let mut company = Company::new("Acme", "SWE", ApplicationStatus::Applied, 1_700_000_000_000);
    company.is_favorite = true;
    let id = store.insert(&company).unwrap();
    store.commit().unwrap();
    assert_eq!(id, company.id);

    let loaded = store.load_all().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0], company);
}

#[test]
fn load_all_orders_by_date_added_descending() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCompanyStore::try_new(&conn).unwrap();

    let oldest = Company::new("Oldest", "", ApplicationStatus::Applied, 100);
    let newest = Company::new("Newest", "", ApplicationStatus::Offer, 300);
    let middle = Company::new("Middle", "", ApplicationStatus::OnSite, 200);
    store.insert(&oldest).unwrap();
    store.insert(&newest).unwrap();
    store.insert(&middle).unwrap();
    store.commit().unwrap();

    let names: Vec<_> = store
        .load_all()
        .unwrap()
        .into_iter()
        .map(|company| company.company_name)
        .collect();
    assert_eq!(names, vec!["Newest", "Middle", "Oldest"]);
}

#[test]
fn update_existing_company() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCompanyStore::try_new(&conn).unwrap();

    let mut company = Company::new("Acme", "SWE", ApplicationStatus::Applied, 100);
    store.insert(&company).unwrap();

    company.job_position = "Staff SWE".to_string();
    company.application_status = ApplicationStatus::Offer;
    company.is_favorite = true;
    store.update(&company).unwrap();
    store.commit().unwrap();

    let loaded = store.load_all().unwrap();
    assert_eq!(loaded[0].job_position, "Staff SWE");
    assert_eq!(loaded[0].application_status, ApplicationStatus::Offer);
    assert!(loaded[0].is_favorite);
}

#[test]
fn update_not_found_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCompanyStore::try_new(&conn).unwrap();

    let company = Company::new("Missing", "", ApplicationStatus::Applied, 100);
    let err = store.update(&company).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == company.id));
}

#[test]
fn remove_deletes_exactly_one_record() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCompanyStore::try_new(&conn).unwrap();

    let keep = Company::new("Keep", "", ApplicationStatus::Applied, 100);
    let doomed = Company::new("Drop", "", ApplicationStatus::Applied, 200);
    store.insert(&keep).unwrap();
    store.insert(&doomed).unwrap();

    store.remove(doomed.id).unwrap();
    store.commit().unwrap();

    let loaded = store.load_all().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, keep.id);

    let err = store.remove(doomed.id).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == doomed.id));
}

#[test]
fn validation_failure_blocks_insert_and_update() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCompanyStore::try_new(&conn).unwrap();

    let blank = Company::new("   ", "SWE", ApplicationStatus::Applied, 100);
    let insert_err = store.insert(&blank).unwrap_err();
    assert!(matches!(insert_err, RepoError::Validation(_)));

    let mut valid = Company::new("Acme", "SWE", ApplicationStatus::Applied, 100);
    store.insert(&valid).unwrap();
    valid.company_name = String::new();
    let update_err = store.update(&valid).unwrap_err();
    assert!(matches!(update_err, RepoError::Validation(_)));
}

#[test]
fn corrupt_persisted_id_is_rejected_on_load() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO companies (id, company_name, job_position, application_status, is_favorite, date_added)
         VALUES ('not-a-uuid', 'Acme', '', 'applied', 0, 100);",
        [],
    )
    .unwrap();

    let store = SqliteCompanyStore::try_new(&conn).unwrap();
    let err = store.load_all().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn writes_survive_reopening_the_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jobtrack.db");

    let company = Company::new("Durable", "SWE", ApplicationStatus::PhoneScreen, 100);
    {
        let conn = jobtrack_core::db::open_db(&path).unwrap();
        let store = SqliteCompanyStore::try_new(&conn).unwrap();
        store.insert(&company).unwrap();
        store.commit().unwrap();
    }

    let conn = jobtrack_core::db::open_db(&path).unwrap();
    let store = SqliteCompanyStore::try_new(&conn).unwrap();
    let loaded = store.load_all().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, company.id);
}

#[test]
fn store_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteCompanyStore::try_new(&conn);
    match result {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn store_rejects_connection_without_companies_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteCompanyStore::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("companies"))
    ));
}

#[test]
fn store_rejects_connection_missing_required_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE companies (
            id TEXT PRIMARY KEY NOT NULL,
            company_name TEXT NOT NULL,
            job_position TEXT NOT NULL,
            application_status TEXT NOT NULL,
            date_added INTEGER NOT NULL
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteCompanyStore::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "companies",
            column: "is_favorite"
        })
    ));
}

#[test]
fn persisted_schema_uses_snake_case_status_names() {
    let company = Company::with_id(
        Uuid::nil(),
        "Acme",
        "SWE",
        ApplicationStatus::PhoneScreen,
        100,
    );
    let json = serde_json::to_value(&company).unwrap();
    assert_eq!(json["application_status"], "phone_screen");
    assert_eq!(json["company_name"], "Acme");
    assert_eq!(json["is_favorite"], false);
    assert_eq!(json["date_added"], 100);
}

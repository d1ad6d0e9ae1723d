use chrono::NaiveDate;
use medbook::error::MedbookError;
use medbook::id::KindCounters;
use medbook::model::{Appointment, Doctor, Patient, Records, Specialization};
use medbook::store::fs::{FileStore, APPOINTMENTS_FILE, DOCTORS_FILE, PATIENTS_FILE};
use medbook::store::SnapshotStore;
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FileStore) {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().to_path_buf());
    (dir, store)
}

fn sample_records() -> Records {
    let mut counters = KindCounters::new();
    let doctor = Doctor::new(
        &mut counters,
        "Dr. Grey".to_string(),
        41,
        Specialization::Cardiologist,
        "pw".to_string(),
    )
    .unwrap();
    let patient = Patient::new(
        &mut counters,
        "Rita Ngata".to_string(),
        29,
        "asthma".to_string(),
    )
    .unwrap();
    let appointment = Appointment::new(
        &mut counters,
        doctor.id,
        patient.patient_id,
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
    );

    Records {
        doctors: vec![doctor],
        patients: vec![patient],
        appointments: vec![appointment],
    }
}

#[test]
fn test_save_writes_one_file_per_collection() {
    let (dir, mut store) = setup();

    store.save(&sample_records()).unwrap();

    assert!(dir.path().join(DOCTORS_FILE).exists());
    assert!(dir.path().join(PATIENTS_FILE).exists());
    assert!(dir.path().join(APPOINTMENTS_FILE).exists());
}

#[test]
fn test_persisted_files_carry_the_exact_key_names() {
    let (dir, mut store) = setup();

    store.save(&sample_records()).unwrap();

    let doctors: Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join(DOCTORS_FILE)).unwrap()).unwrap();
    assert_eq!(
        doctors,
        json!([{
            "id": "D1",
            "name": "Dr. Grey",
            "age": 41,
            "specialization": "Cardiologist",
            "password": "pw",
        }])
    );

    let patients: Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join(PATIENTS_FILE)).unwrap()).unwrap();
    assert_eq!(
        patients,
        json!([{
            "patient_id": "P1",
            "name": "Rita Ngata",
            "age": 29,
            "medical_history": "asthma",
        }])
    );

    let appointments: Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join(APPOINTMENTS_FILE)).unwrap())
            .unwrap();
    assert_eq!(
        appointments,
        json!([{
            "appointment_id": "A1",
            "doctor_id": "D1",
            "patient_id": "P1",
            "date": "2024-06-01",
        }])
    );
}

#[test]
fn test_persisted_files_are_pretty_printed() {
    let (dir, mut store) = setup();

    store.save(&sample_records()).unwrap();

    let on_disk = fs::read_to_string(dir.path().join(DOCTORS_FILE)).unwrap();
    assert!(on_disk.lines().count() > 1, "expected indented JSON");
}

#[test]
fn test_save_leaves_no_tmp_residue() {
    let (dir, mut store) = setup();

    store.save(&sample_records()).unwrap();
    store.save(&sample_records()).unwrap();

    let entries = fs::read_dir(dir.path()).unwrap();
    for entry in entries {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_save_creates_the_root_directory() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("deeply").join("nested");
    let mut store = FileStore::new(nested.clone());

    store.save(&sample_records()).unwrap();

    assert!(nested.join(DOCTORS_FILE).exists());
}

#[test]
fn test_load_from_absent_root_is_empty() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("never-created"));

    let records = store.load().unwrap();
    assert_eq!(records, Records::default());
}

#[test]
fn test_missing_files_load_as_empty_collections() {
    let (dir, store) = setup();

    // Only the doctor file exists; the other two collections start empty.
    fs::write(
        dir.path().join(DOCTORS_FILE),
        r#"[{"id": "D1", "name": "Dr. Solo", "age": 50, "specialization": "General", "password": "pw"}]"#,
    )
    .unwrap();

    let records = store.load().unwrap();
    assert_eq!(records.doctors.len(), 1);
    assert_eq!(records.doctors[0].name, "Dr. Solo");
    assert!(records.patients.is_empty());
    assert!(records.appointments.is_empty());
}

#[test]
fn test_malformed_file_is_a_load_error() {
    let (dir, store) = setup();

    fs::write(dir.path().join(PATIENTS_FILE), "not json at all").unwrap();

    let err = store.load().unwrap_err();
    assert!(matches!(err, MedbookError::Serialization(_)));
}

#[test]
fn test_unknown_id_tag_is_a_load_error() {
    let (dir, store) = setup();

    fs::write(
        dir.path().join(DOCTORS_FILE),
        r#"[{"id": "X1", "name": "Dr. Odd", "age": 50, "specialization": "General", "password": "pw"}]"#,
    )
    .unwrap();

    assert!(store.load().is_err());
}

#[test]
fn test_round_trip_preserves_the_trio() {
    let (_dir, mut store) = setup();
    let records = sample_records();

    store.save(&records).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded, records);
}

#[test]
fn test_save_replaces_the_previous_snapshot() {
    let (_dir, mut store) = setup();

    store.save(&sample_records()).unwrap();

    // A later, smaller snapshot fully replaces the earlier one.
    let mut shrunk = sample_records();
    shrunk.appointments.clear();
    store.save(&shrunk).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.doctors.len(), 1);
    assert!(loaded.appointments.is_empty());
}

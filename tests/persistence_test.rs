use chrono::NaiveDate;
use medbook::clinic::Clinic;
use medbook::id::RecordId;
use medbook::model::Specialization;
use medbook::store::fs::{FileStore, APPOINTMENTS_FILE, DOCTORS_FILE};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn open(root: &Path) -> Clinic<FileStore> {
    Clinic::open(FileStore::new(root.to_path_buf())).unwrap()
}

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

#[test]
fn test_state_survives_reopen() {
    let dir = TempDir::new().unwrap();

    {
        let mut clinic = open(dir.path());
        let doctor = clinic
            .add_doctor(
                "Dr. Grey".to_string(),
                41,
                Specialization::Cardiologist,
                "pw".to_string(),
            )
            .unwrap();
        let patient = clinic
            .add_patient("Rita Ngata".to_string(), 29, "asthma".to_string())
            .unwrap();
        clinic
            .book_appointment(doctor.id, patient.patient_id, date("2024-06-01"))
            .unwrap()
            .unwrap();
    }

    let clinic = open(dir.path());
    assert_eq!(clinic.list_doctors().len(), 1);
    assert_eq!(clinic.list_doctors()[0].name, "Dr. Grey");
    assert_eq!(clinic.list_patients()[0].patient_id, RecordId::Patient(1));
    assert_eq!(
        clinic.list_appointments()[0].appointment_id,
        RecordId::Appointment(1)
    );
    assert_eq!(clinic.list_appointments()[0].date, date("2024-06-01"));
}

#[test]
fn test_ids_continue_across_sessions() {
    let dir = TempDir::new().unwrap();

    {
        let mut clinic = open(dir.path());
        let first = clinic
            .add_doctor(
                "Dr. One".to_string(),
                40,
                Specialization::General,
                "pw".to_string(),
            )
            .unwrap();
        assert_eq!(first.id, RecordId::Doctor(1));
    }

    let mut clinic = open(dir.path());
    let second = clinic
        .add_doctor(
            "Dr. Two".to_string(),
            40,
            Specialization::General,
            "pw".to_string(),
        )
        .unwrap();
    assert_eq!(second.id, RecordId::Doctor(2));
}

#[test]
fn test_counters_resume_past_the_highest_persisted_suffix() {
    let dir = TempDir::new().unwrap();

    // Hand-written store with a gap: D1, D2, D5.
    fs::write(
        dir.path().join(DOCTORS_FILE),
        r#"[
  {"id": "D1", "name": "Dr. One", "age": 40, "specialization": "General", "password": "pw"},
  {"id": "D2", "name": "Dr. Two", "age": 41, "specialization": "Surgeon", "password": "pw"},
  {"id": "D5", "name": "Dr. Five", "age": 42, "specialization": "Neurologist", "password": "pw"}
]"#,
    )
    .unwrap();

    let mut clinic = open(dir.path());
    assert_eq!(clinic.list_doctors().len(), 3);

    let next = clinic
        .add_doctor(
            "Dr. Six".to_string(),
            43,
            Specialization::General,
            "pw".to_string(),
        )
        .unwrap();
    assert_eq!(next.id, RecordId::Doctor(6));
}

#[test]
fn test_dangling_references_survive_reload() {
    let dir = TempDir::new().unwrap();

    // An appointment whose doctor and patient were never persisted.
    fs::write(
        dir.path().join(APPOINTMENTS_FILE),
        r#"[{"appointment_id": "A3", "doctor_id": "D9", "patient_id": "P9", "date": "2024-01-01"}]"#,
    )
    .unwrap();

    let clinic = open(dir.path());
    assert_eq!(clinic.list_appointments().len(), 1);
    assert_eq!(
        clinic.list_appointments()[0].appointment_id,
        RecordId::Appointment(3)
    );
    assert!(clinic.find_doctor(RecordId::Doctor(9)).is_none());
}

#[test]
fn test_open_fails_on_a_corrupt_store() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(DOCTORS_FILE), "{ truncated").unwrap();

    assert!(Clinic::open(FileStore::new(dir.path().to_path_buf())).is_err());
}

#[test]
fn test_every_mutation_rewrites_the_files() {
    let dir = TempDir::new().unwrap();
    let mut clinic = open(dir.path());

    let doctor = clinic
        .add_doctor(
            "Dr. Grey".to_string(),
            41,
            Specialization::General,
            "pw".to_string(),
        )
        .unwrap();

    // Already on disk, with no explicit save call.
    let on_disk = fs::read_to_string(dir.path().join(DOCTORS_FILE)).unwrap();
    assert!(on_disk.contains("Dr. Grey"));

    let patient = clinic
        .add_patient("Rita Ngata".to_string(), 29, "none".to_string())
        .unwrap();
    let appointment = clinic
        .book_appointment(doctor.id, patient.patient_id, date("2024-06-01"))
        .unwrap()
        .unwrap();
    clinic
        .delete_appointment(appointment.appointment_id)
        .unwrap();

    let on_disk = fs::read_to_string(dir.path().join(APPOINTMENTS_FILE)).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&on_disk).unwrap();
    assert_eq!(parsed, serde_json::json!([]));
}

#[test]
fn test_refused_booking_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let mut clinic = open(dir.path());

    let refused = clinic
        .book_appointment(
            RecordId::Doctor(1),
            RecordId::Patient(1),
            date("2024-06-01"),
        )
        .unwrap();
    assert!(refused.is_none());
    assert!(!dir.path().join(APPOINTMENTS_FILE).exists());
}

//! # Record Store
//!
//! [`Clinic`] is the single entry point for all record operations, regardless
//! of the UI driving it. It owns the three collections, the ID counters, and
//! the snapshot backend; every mutation flows through it and ends with a full
//! snapshot save.
//!
//! ## What the clinic does NOT do
//!
//! - **Presentation**: no stdout, stderr, or string formatting. Expected
//!   business misses (a lookup with no match, a delete of an absent ID, a
//!   booking whose references do not resolve) come back as values, never as
//!   errors. Rendering them is the caller's job.
//! - **Referential cleanup**: removing records never cascades, and loading
//!   accepts appointments whose references no longer resolve. Dangling
//!   references degrade at display time, not here.
//!
//! ## Generic over SnapshotStore
//!
//! `Clinic<S: SnapshotStore>` is generic over the storage backend:
//! - Production: `Clinic<FileStore>`
//! - Testing: `Clinic<InMemoryStore>`
//!
//! Counters are per-instance state, so two clinics never share an ID
//! sequence unless they share persisted state.

use chrono::NaiveDate;

use crate::error::Result;
use crate::id::{KindCounters, RecordId};
use crate::model::{Appointment, Doctor, Patient, Records, Specialization};
use crate::store::SnapshotStore;

pub struct Clinic<S: SnapshotStore> {
    records: Records,
    counters: KindCounters,
    store: S,
}

impl<S: SnapshotStore> Clinic<S> {
    /// Restore persisted state and reconcile the ID counters, so records
    /// created from here on never collide with persisted ones. Absent state
    /// starts empty; unparseable state is a fatal open error.
    pub fn open(store: S) -> Result<Self> {
        let records = store.load()?;

        let mut counters = KindCounters::new();
        for doctor in &records.doctors {
            counters.observe(doctor.id);
        }
        for patient in &records.patients {
            counters.observe(patient.patient_id);
        }
        for appointment in &records.appointments {
            counters.observe(appointment.appointment_id);
        }

        Ok(Self {
            records,
            counters,
            store,
        })
    }

    pub fn add_doctor(
        &mut self,
        name: String,
        age: u32,
        specialization: Specialization,
        password: String,
    ) -> Result<Doctor> {
        let doctor = Doctor::new(&mut self.counters, name, age, specialization, password)?;
        self.records.doctors.push(doctor.clone());
        self.store.save(&self.records)?;
        Ok(doctor)
    }

    pub fn add_patient(
        &mut self,
        name: String,
        age: u32,
        medical_history: String,
    ) -> Result<Patient> {
        let patient = Patient::new(&mut self.counters, name, age, medical_history)?;
        self.records.patients.push(patient.clone());
        self.store.save(&self.records)?;
        Ok(patient)
    }

    /// `Ok(None)` when either reference does not currently resolve; nothing
    /// is appended and nothing is saved in that case.
    pub fn book_appointment(
        &mut self,
        doctor_id: RecordId,
        patient_id: RecordId,
        date: NaiveDate,
    ) -> Result<Option<Appointment>> {
        if self.find_doctor(doctor_id).is_none() || self.find_patient(patient_id).is_none() {
            return Ok(None);
        }

        let appointment = Appointment::new(&mut self.counters, doctor_id, patient_id, date);
        self.records.appointments.push(appointment.clone());
        self.store.save(&self.records)?;
        Ok(Some(appointment))
    }

    pub fn list_doctors(&self) -> &[Doctor] {
        &self.records.doctors
    }

    pub fn list_patients(&self) -> &[Patient] {
        &self.records.patients
    }

    pub fn list_appointments(&self) -> &[Appointment] {
        &self.records.appointments
    }

    pub fn find_doctor(&self, id: RecordId) -> Option<&Doctor> {
        self.records.doctors.iter().find(|d| d.id == id)
    }

    pub fn find_patient(&self, id: RecordId) -> Option<&Patient> {
        self.records.patients.iter().find(|p| p.patient_id == id)
    }

    pub fn find_appointment(&self, id: RecordId) -> Option<&Appointment> {
        self.records.appointments.iter().find(|a| a.appointment_id == id)
    }

    /// In-place edit access for appointment fields. Callers that mutate
    /// through this must follow up with [`save`](Self::save).
    pub fn find_appointment_mut(&mut self, id: RecordId) -> Option<&mut Appointment> {
        self.records
            .appointments
            .iter_mut()
            .find(|a| a.appointment_id == id)
    }

    /// Remove the appointment with this ID. Absent IDs are a `false` no-op
    /// with no save. Defined only for appointments; doctors and patients are
    /// never removed.
    pub fn delete_appointment(&mut self, id: RecordId) -> Result<bool> {
        match self
            .records
            .appointments
            .iter()
            .position(|a| a.appointment_id == id)
        {
            Some(pos) => {
                self.records.appointments.remove(pos);
                self.store.save(&self.records)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Persist a full snapshot of the current state. Mutating operations do
    /// this themselves; this is for callers that edited an appointment in
    /// place.
    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.records)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

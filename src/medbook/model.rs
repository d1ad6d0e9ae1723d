use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{MedbookError, Result};
use crate::id::{KindCounters, RecordId, RecordKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Specialization {
    General,
    Cardiologist,
    Neurologist,
    Pediatrician,
    Surgeon,
}

impl std::fmt::Display for Specialization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Specialization::General => "General",
            Specialization::Cardiologist => "Cardiologist",
            Specialization::Neurologist => "Neurologist",
            Specialization::Pediatrician => "Pediatrician",
            Specialization::Surgeon => "Surgeon",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Specialization {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "general" => Ok(Specialization::General),
            "cardiologist" => Ok(Specialization::Cardiologist),
            "neurologist" => Ok(Specialization::Neurologist),
            "pediatrician" => Ok(Specialization::Pediatrician),
            "surgeon" => Ok(Specialization::Surgeon),
            _ => Err(format!("Unknown specialization: {}", s)),
        }
    }
}

// Doctors and patients share the same person constraints. Checked before
// any ID is drawn, so a rejected create leaves the counters untouched.
fn check_person(name: &str, age: u32) -> Result<()> {
    if name.trim().is_empty() {
        return Err(MedbookError::Validation("Name cannot be empty.".to_string()));
    }
    if age == 0 {
        return Err(MedbookError::Validation("Age must be positive.".to_string()));
    }
    Ok(())
}

// Field names below are the on-disk key names; consumers read the record
// files directly, so renaming a field is a format break.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: RecordId,
    pub name: String,
    pub age: u32,
    pub specialization: Specialization,
    pub password: String,
}

impl Doctor {
    pub fn new(
        counters: &mut KindCounters,
        name: String,
        age: u32,
        specialization: Specialization,
        password: String,
    ) -> Result<Self> {
        check_person(&name, age)?;
        Ok(Self {
            id: counters.next(RecordKind::Doctor),
            name,
            age,
            specialization,
            password,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub patient_id: RecordId,
    pub name: String,
    pub age: u32,
    pub medical_history: String,
}

impl Patient {
    pub fn new(
        counters: &mut KindCounters,
        name: String,
        age: u32,
        medical_history: String,
    ) -> Result<Self> {
        check_person(&name, age)?;
        Ok(Self {
            patient_id: counters.next(RecordKind::Patient),
            name,
            age,
            medical_history,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub appointment_id: RecordId,
    pub doctor_id: RecordId,
    pub patient_id: RecordId,
    pub date: NaiveDate,
}

impl Appointment {
    /// Referential checks live in the clinic; by the time an appointment is
    /// constructed both IDs have been resolved.
    pub fn new(
        counters: &mut KindCounters,
        doctor_id: RecordId,
        patient_id: RecordId,
        date: NaiveDate,
    ) -> Self {
        Self {
            appointment_id: counters.next(RecordKind::Appointment),
            doctor_id,
            patient_id,
            date,
        }
    }
}

/// One-line human-readable account of a record.
pub trait Summary {
    fn summary(&self) -> String;
}

impl Summary for Doctor {
    fn summary(&self) -> String {
        format!(
            "Doctor ID: {}, Name: {}, Age: {}, Specialization: {}",
            self.id, self.name, self.age, self.specialization
        )
    }
}

impl Summary for Patient {
    fn summary(&self) -> String {
        format!(
            "Patient ID: {}, Name: {}, Age: {}, Medical History: {}",
            self.patient_id, self.name, self.age, self.medical_history
        )
    }
}

impl Summary for Appointment {
    fn summary(&self) -> String {
        format!(
            "Appointment ID: {}, Doctor ID: {}, Patient ID: {}, Date: {}",
            self.appointment_id, self.doctor_id, self.patient_id, self.date
        )
    }
}

/// All three collections, each in insertion order. This is both the live
/// state owned by the clinic and the shape the snapshot backends persist.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Records {
    pub doctors: Vec<Doctor>,
    pub patients: Vec<Patient>,
    pub appointments: Vec<Appointment>,
}

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use medbook::id::RecordId;
use medbook::model::Specialization;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "medbook",
    bin_name = "medbook",
    version,
    arg_required_else_help = true
)]
#[command(
    about = "Flat-file doctor, patient, and appointment records for small clinics",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the record files
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Doctor(DoctorCommands),

    #[command(flatten)]
    Patient(PatientCommands),

    #[command(flatten)]
    Appointment(AppointmentCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum DoctorCommands {
    /// Register a new doctor
    #[command(alias = "ad", display_order = 1)]
    AddDoctor {
        name: String,

        age: u32,

        /// One of: General, Cardiologist, Neurologist, Pediatrician, Surgeon
        specialization: Specialization,

        /// Sign-in password for the doctor
        #[arg(long)]
        password: String,
    },

    /// List all doctors
    #[command(display_order = 2)]
    Doctors,

    /// Look up one doctor by ID (e.g. D1)
    #[command(display_order = 3)]
    Doctor { id: RecordId },
}

#[derive(Subcommand, Debug)]
pub enum PatientCommands {
    /// Register a new patient
    #[command(alias = "ap", display_order = 10)]
    AddPatient {
        name: String,

        age: u32,

        /// Free-text medical history
        #[arg(default_value = "")]
        medical_history: String,
    },

    /// List all patients
    #[command(display_order = 11)]
    Patients,

    /// Look up one patient by ID (e.g. P1)
    #[command(display_order = 12)]
    Patient { id: RecordId },
}

#[derive(Subcommand, Debug)]
pub enum AppointmentCommands {
    /// Book an appointment with a doctor for a patient
    #[command(alias = "b", display_order = 20)]
    Book {
        /// Doctor ID (e.g. D1)
        doctor_id: RecordId,

        /// Patient ID (e.g. P1)
        patient_id: RecordId,

        /// Appointment date (YYYY-MM-DD)
        date: NaiveDate,
    },

    /// List all appointments
    #[command(alias = "appts", display_order = 21)]
    Appointments,

    /// Change an appointment's doctor, patient, or date
    #[command(display_order = 22)]
    Edit {
        /// Appointment ID (e.g. A1)
        id: RecordId,

        /// Reassign to this doctor
        #[arg(long, value_name = "ID")]
        doctor: Option<RecordId>,

        /// Reassign to this patient
        #[arg(long, value_name = "ID")]
        patient: Option<RecordId>,

        /// Move to this date (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        date: Option<NaiveDate>,
    },

    /// Cancel an appointment by ID
    #[command(alias = "rm", display_order = 23)]
    Cancel {
        /// Appointment ID (e.g. A1)
        id: RecordId,
    },
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Get or set configuration
    #[command(display_order = 30)]
    Config {
        /// Configuration key (e.g., data-dir)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

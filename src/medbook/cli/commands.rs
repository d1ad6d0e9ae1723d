//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Resolve the data directory and open the clinic
//! 3. **Dispatch**: Call the appropriate clinic operation
//! 4. **Output Formatting**: Render results as tables and leveled messages
//! 5. **Error Handling**: Turn refusals into `Api` errors for a nonzero exit
//!
//! A lookup miss (`doctor D9`) is reported and exits zero; a mutation aimed
//! at an ID that does not resolve (`cancel A9`, `book D9 …`) is an error.
//! The clinic itself never distinguishes the two — that mapping lives here.

use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;

use chrono::NaiveDate;
use medbook::clinic::Clinic;
use medbook::config::MedbookConfig;
use medbook::error::{MedbookError, Result};
use medbook::id::RecordId;
use medbook::model::{Specialization, Summary};
use medbook::store::fs::FileStore;

use super::print;
use super::setup::{
    AppointmentCommands, Cli, Commands, DoctorCommands, MiscCommands, PatientCommands,
};

const DATA_ENV_VAR: &str = "MEDBOOK_DATA";

struct AppContext {
    clinic: Clinic<FileStore>,
    data_dir: PathBuf,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(cli.data_dir)?;

    match cli.command {
        Commands::Doctor(cmd) => match cmd {
            DoctorCommands::AddDoctor {
                name,
                age,
                specialization,
                password,
            } => handle_add_doctor(&mut ctx, name, age, specialization, password),
            DoctorCommands::Doctors => handle_list_doctors(&ctx),
            DoctorCommands::Doctor { id } => handle_find_doctor(&ctx, id),
        },
        Commands::Patient(cmd) => match cmd {
            PatientCommands::AddPatient {
                name,
                age,
                medical_history,
            } => handle_add_patient(&mut ctx, name, age, medical_history),
            PatientCommands::Patients => handle_list_patients(&ctx),
            PatientCommands::Patient { id } => handle_find_patient(&ctx, id),
        },
        Commands::Appointment(cmd) => match cmd {
            AppointmentCommands::Book {
                doctor_id,
                patient_id,
                date,
            } => handle_book(&mut ctx, doctor_id, patient_id, date),
            AppointmentCommands::Appointments => handle_list_appointments(&ctx),
            AppointmentCommands::Edit {
                id,
                doctor,
                patient,
                date,
            } => handle_edit(&mut ctx, id, doctor, patient, date),
            AppointmentCommands::Cancel { id } => handle_cancel(&mut ctx, id),
        },
        Commands::Misc(cmd) => match cmd {
            MiscCommands::Config { key, value } => handle_config(&ctx, key, value),
        },
    }
}

fn init_context(data_dir_flag: Option<PathBuf>) -> Result<AppContext> {
    let data_dir = resolve_data_dir(data_dir_flag)?;
    let clinic = Clinic::open(FileStore::new(data_dir.clone()))?;
    Ok(AppContext { clinic, data_dir })
}

fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }

    // 1. Check MEDBOOK_DATA environment variable (primarily for testing)
    if let Some(dir) = std::env::var_os(DATA_ENV_VAR) {
        return Ok(PathBuf::from(dir));
    }

    // 2. Configured override, then the OS-appropriate data directory
    let dirs = project_dirs()?;
    let config = MedbookConfig::load(dirs.config_dir()).unwrap_or_default();
    Ok(config
        .data_dir
        .unwrap_or_else(|| dirs.data_dir().to_path_buf()))
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "medbook", "medbook")
        .ok_or_else(|| MedbookError::Store("Could not determine a data directory".to_string()))
}

fn handle_add_doctor(
    ctx: &mut AppContext,
    name: String,
    age: u32,
    specialization: Specialization,
    password: String,
) -> Result<()> {
    let doctor = ctx.clinic.add_doctor(name, age, specialization, password)?;
    print::success(&format!("Doctor added with ID: {}", doctor.id));
    Ok(())
}

fn handle_list_doctors(ctx: &AppContext) -> Result<()> {
    print::print_doctors(ctx.clinic.list_doctors());
    Ok(())
}

fn handle_find_doctor(ctx: &AppContext, id: RecordId) -> Result<()> {
    match ctx.clinic.find_doctor(id) {
        Some(doctor) => println!("{}", doctor.summary()),
        None => print::info(&format!("No doctor found with ID: {}", id)),
    }
    Ok(())
}

fn handle_add_patient(
    ctx: &mut AppContext,
    name: String,
    age: u32,
    medical_history: String,
) -> Result<()> {
    let patient = ctx.clinic.add_patient(name, age, medical_history)?;
    print::success(&format!("Patient added with ID: {}", patient.patient_id));
    Ok(())
}

fn handle_list_patients(ctx: &AppContext) -> Result<()> {
    print::print_patients(ctx.clinic.list_patients());
    Ok(())
}

fn handle_find_patient(ctx: &AppContext, id: RecordId) -> Result<()> {
    match ctx.clinic.find_patient(id) {
        Some(patient) => println!("{}", patient.summary()),
        None => print::info(&format!("No patient found with ID: {}", id)),
    }
    Ok(())
}

fn handle_book(
    ctx: &mut AppContext,
    doctor_id: RecordId,
    patient_id: RecordId,
    date: NaiveDate,
) -> Result<()> {
    match ctx.clinic.book_appointment(doctor_id, patient_id, date)? {
        Some(appointment) => {
            print::success(&format!(
                "Appointment booked with ID: {}",
                appointment.appointment_id
            ));
            Ok(())
        }
        None => {
            // Name the reference that failed to resolve.
            let message = if ctx.clinic.find_doctor(doctor_id).is_none() {
                format!("No doctor found with ID: {}", doctor_id)
            } else {
                format!("No patient found with ID: {}", patient_id)
            };
            Err(MedbookError::Api(message))
        }
    }
}

fn handle_list_appointments(ctx: &AppContext) -> Result<()> {
    let rows: Vec<[String; 4]> = ctx
        .clinic
        .list_appointments()
        .iter()
        .map(|appointment| {
            let doctor = ctx
                .clinic
                .find_doctor(appointment.doctor_id)
                .map(|d| format!("{} ({})", d.name, d.id))
                .unwrap_or_else(|| "Unknown".to_string());
            let patient = ctx
                .clinic
                .find_patient(appointment.patient_id)
                .map(|p| format!("{} ({})", p.name, p.patient_id))
                .unwrap_or_else(|| "Unknown".to_string());
            [
                appointment.appointment_id.to_string(),
                doctor,
                patient,
                appointment.date.to_string(),
            ]
        })
        .collect();

    print::print_appointments(&rows);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    id: RecordId,
    doctor: Option<RecordId>,
    patient: Option<RecordId>,
    date: Option<NaiveDate>,
) -> Result<()> {
    // Replacement references must resolve before anything is touched.
    if let Some(doctor_id) = doctor {
        if ctx.clinic.find_doctor(doctor_id).is_none() {
            return Err(MedbookError::Api(format!(
                "No doctor found with ID: {}",
                doctor_id
            )));
        }
    }
    if let Some(patient_id) = patient {
        if ctx.clinic.find_patient(patient_id).is_none() {
            return Err(MedbookError::Api(format!(
                "No patient found with ID: {}",
                patient_id
            )));
        }
    }

    let appointment = ctx
        .clinic
        .find_appointment_mut(id)
        .ok_or_else(|| MedbookError::Api(format!("No appointment found with ID: {}", id)))?;

    if let Some(doctor_id) = doctor {
        appointment.doctor_id = doctor_id;
    }
    if let Some(patient_id) = patient {
        appointment.patient_id = patient_id;
    }
    if let Some(date) = date {
        appointment.date = date;
    }

    ctx.clinic.save()?;
    print::success("Appointment updated successfully.");
    Ok(())
}

fn handle_cancel(ctx: &mut AppContext, id: RecordId) -> Result<()> {
    if ctx.clinic.delete_appointment(id)? {
        print::success("Appointment deleted successfully.");
        Ok(())
    } else {
        Err(MedbookError::Api(format!(
            "No appointment found with ID: {}",
            id
        )))
    }
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key.as_deref(), value) {
        (None, _) | (Some("data-dir"), None) => {
            println!("data-dir = {}", ctx.data_dir.display());
            Ok(())
        }
        (Some("data-dir"), Some(v)) => {
            let dirs = project_dirs()?;
            let mut config = MedbookConfig::load(dirs.config_dir()).unwrap_or_default();
            config.data_dir = Some(PathBuf::from(v));
            config.save(dirs.config_dir())?;
            print::success("Configuration saved.");
            Ok(())
        }
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
            Ok(())
        }
    }
}

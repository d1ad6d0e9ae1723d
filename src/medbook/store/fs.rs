use super::SnapshotStore;
use crate::error::{MedbookError, Result};
use crate::model::Records;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DOCTORS_FILE: &str = "doctors.json";
pub const PATIENTS_FILE: &str = "patients.json";
pub const APPOINTMENTS_FILE: &str = "appointments.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(MedbookError::Io)?;
        }
        Ok(())
    }

    fn load_collection<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>> {
        let path = self.root.join(file);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(path).map_err(MedbookError::Io)?;
        let records: Vec<T> =
            serde_json::from_str(&content).map_err(MedbookError::Serialization)?;
        Ok(records)
    }

    fn render<T: Serialize>(collection: &[T]) -> Result<String> {
        serde_json::to_string_pretty(collection).map_err(MedbookError::Serialization)
    }
}

impl SnapshotStore for FileStore {
    fn save(&mut self, records: &Records) -> Result<()> {
        self.ensure_dir()?;

        let payloads = [
            (DOCTORS_FILE, Self::render(&records.doctors)?),
            (PATIENTS_FILE, Self::render(&records.patients)?),
            (APPOINTMENTS_FILE, Self::render(&records.appointments)?),
        ];

        // Stage the whole trio before touching any live file, so a failed
        // write leaves the previous snapshot intact on disk.
        let mut staged: Vec<(PathBuf, PathBuf)> = Vec::with_capacity(payloads.len());
        for (file, content) in &payloads {
            let tmp = self
                .root
                .join(format!(".{}-{}.tmp", file, std::process::id()));
            if let Err(e) = fs::write(&tmp, content) {
                let _ = fs::remove_file(&tmp);
                for (tmp, _) in &staged {
                    let _ = fs::remove_file(tmp);
                }
                return Err(MedbookError::Io(e));
            }
            staged.push((tmp, self.root.join(file)));
        }

        for (tmp, live) in &staged {
            fs::rename(tmp, live).map_err(MedbookError::Io)?;
        }

        Ok(())
    }

    fn load(&self) -> Result<Records> {
        Ok(Records {
            doctors: self.load_collection(DOCTORS_FILE)?,
            patients: self.load_collection(PATIENTS_FILE)?,
            appointments: self.load_collection(APPOINTMENTS_FILE)?,
        })
    }
}

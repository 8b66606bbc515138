use tokio::sync::RwLock;

use crate::db::models::{NewPatient, Patient, Role, User, Worker};

/// Process-lifetime store for users, workers and patients.
///
/// Users and workers are fixed at construction. Patients sit behind a single
/// lock together with the id counter, so allocation and append are one step.
#[derive(Debug)]
pub struct Store {
    users: Vec<User>,
    workers: Vec<Worker>,
    patients: RwLock<PatientTable>,
}

#[derive(Debug)]
struct PatientTable {
    rows: Vec<Patient>,
    next_id: u32,
}

impl PatientTable {
    fn allocate_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Store {
    pub fn new(users: Vec<User>, workers: Vec<Worker>, patients: Vec<Patient>) -> Self {
        let next_id = patients.iter().map(|p| p.id + 1).max().unwrap_or(1);
        Self {
            users,
            workers,
            patients: RwLock::new(PatientTable {
                rows: patients,
                next_id,
            }),
        }
    }

    /// Demo accounts, three workers and two patients
    pub fn with_demo_data() -> Self {
        let users = vec![
            User::new("demo", "demo123", Role::AshaWorker, "Priya Sharma"),
            User::new("phc_1", "phc123", Role::PhcSupervisor, "Dr. Rohan Mehra"),
        ];
        let workers = vec![
            Worker::new("asha_1", "Sunita Devi", "Ward 1"),
            Worker::new("asha_2", "Meena Kumari", "Ward 3"),
            Worker::new("asha_3", "Lata Patil", "Ward 5"),
        ];
        let patients = vec![
            NewPatient {
                name: "Savita Devi".to_string(),
                age: "35".to_string(),
                gender: "F".to_string(),
                contact: "9876543210".to_string(),
                status: "ANC Due".to_string(),
            }
            .into_patient(101),
            NewPatient {
                name: "Ramesh Kumar".to_string(),
                age: "52".to_string(),
                gender: "M".to_string(),
                contact: "8765432109".to_string(),
                status: "Diabetic".to_string(),
            }
            .into_patient(102),
        ];

        Self::new(users, workers, patients)
    }

    /// Match an id and password against the user table
    pub fn authenticate(&self, user_id: &str, password: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|user| user.id == user_id && user.password == password)
    }

    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    /// All patients in registration order
    pub async fn patients(&self) -> Vec<Patient> {
        self.patients.read().await.rows.clone()
    }

    pub async fn patient_count(&self) -> usize {
        self.patients.read().await.rows.len()
    }

    pub async fn unresolved_cases(&self) -> Vec<Patient> {
        self.patients
            .read()
            .await
            .rows
            .iter()
            .filter(|p| p.is_unresolved())
            .cloned()
            .collect()
    }

    pub async fn register_patient(&self, new_patient: NewPatient) -> Patient {
        let mut table = self.patients.write().await;
        let patient = new_patient.into_patient(table.allocate_id());
        table.rows.push(patient.clone());
        tracing::info!(patient_id = patient.id, "Registered patient");
        patient
    }
}

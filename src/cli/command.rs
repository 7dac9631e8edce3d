//! Command-line interface definitions.
//!
//! Defines the CLI structure for the wardbook tool using `clap`. The CLI
//! wraps the record-store query operations and the seeder; every
//! subcommand is a thin shell over one store call.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Hospital-administration record store CLI
#[derive(Parser, Debug)]
#[command(name = "wardbook")]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, global = true, default_value = "wardbook.toml")]
    pub config: PathBuf,

    /// Database file, overriding the configured path
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the wardbook CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Clear the store and repopulate it with synthetic records
    Seed(SeedArgs),

    /// Inspect doctors and their staff
    #[command(subcommand)]
    Doctor(DoctorCommand),

    /// Inspect nurses and manage patient assignments
    #[command(subcommand)]
    Nurse(NurseCommand),

    /// Inspect patients
    #[command(subcommand)]
    Patient(PatientCommand),

    /// Inspect wards
    #[command(subcommand)]
    Ward(WardCommand),
}

/// Overrides for the seeding volumes configured in `[seed]`.
#[derive(Args, Debug)]
pub struct SeedArgs {
    /// Number of doctors to insert
    #[arg(long)]
    pub doctors: Option<usize>,

    /// Number of nurses to insert
    #[arg(long)]
    pub nurses: Option<usize>,

    /// Number of patients to insert
    #[arg(long)]
    pub patients: Option<usize>,

    /// Number of wards to insert
    #[arg(long)]
    pub wards: Option<usize>,

    /// Patients linked to each nurse
    #[arg(long)]
    pub assignments: Option<usize>,
}

/// Subcommands for `wardbook doctor`.
#[derive(Subcommand, Debug)]
pub enum DoctorCommand {
    /// Show a doctor by id
    Show { id: i32 },
    /// List the names of the doctor's patients
    Patients { id: i32 },
    /// List the nurses supervised by the doctor
    Nurses { id: i32 },
}

/// Subcommands for `wardbook nurse`.
#[derive(Subcommand, Debug)]
pub enum NurseCommand {
    /// Show a nurse by id
    Show { id: i32 },
    /// Show the nurse's supervising doctor
    Doctor { id: i32 },
    /// List all patients linked to the nurse
    Patients { id: i32 },
    /// Link the nurse to one or more patients (idempotent per pair)
    Assign {
        id: i32,
        /// Patient ids to link
        #[arg(long, required = true, num_args = 1.., value_delimiter = ',')]
        patients: Vec<i32>,
    },
}

/// Subcommands for `wardbook patient`.
#[derive(Subcommand, Debug)]
pub enum PatientCommand {
    /// Show a patient by id
    Show { id: i32 },
    /// Show the patient's attending doctor
    Doctor { id: i32 },
    /// Show the patient's assigned ward
    Ward { id: i32 },
    /// List the nurses assigned to the patient
    Nurses { id: i32 },
}

/// Subcommands for `wardbook ward`.
#[derive(Subcommand, Debug)]
pub enum WardCommand {
    /// Show a ward by id
    Show { id: i32 },
    /// Count the patients assigned to the ward
    Occupancy { id: i32 },
}

//! CLI entry point and command handlers.
//!
//! Each handler is a thin wrapper: resolve the configuration, open the
//! store, invoke one repository operation, format the result.

pub mod command;
pub mod output;

pub use command::Cli;

use tracing::info;

use crate::adapter::sqlite::{self, SqliteRegistry};
use crate::config::Config;
use crate::domain::{DoctorId, NurseId, PatientId, WardId};
use crate::error::Result;
use crate::port::store::{DoctorStore, NurseStore, PatientStore, WardStore};
use crate::seed::{self, SeedVolumes};
use command::{Commands, DoctorCommand, NurseCommand, PatientCommand, SeedArgs, WardCommand};

/// Run a parsed CLI invocation to completion.
pub fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(&cli.config)?;
    if let Some(db) = &cli.db {
        config.database.path = db.display().to_string();
    }
    config.init_logging();

    let pool = sqlite::create_pool(&config.database.path)?;
    sqlite::run_migrations(&pool)?;
    let store = SqliteRegistry::new(pool);
    info!(path = %config.database.path, "record store ready");

    match cli.command {
        Commands::Seed(args) => seed_command(&store, &config, &args, cli.json),
        Commands::Doctor(command) => doctor_command(&store, &command, cli.json),
        Commands::Nurse(command) => nurse_command(&store, &command, cli.json),
        Commands::Patient(command) => patient_command(&store, &command, cli.json),
        Commands::Ward(command) => ward_command(&store, &command, cli.json),
    }
}

fn seed_command(
    store: &SqliteRegistry,
    config: &Config,
    args: &SeedArgs,
    json: bool,
) -> Result<()> {
    let volumes = SeedVolumes {
        doctors: args.doctors.unwrap_or(config.seed.doctors),
        nurses: args.nurses.unwrap_or(config.seed.nurses),
        patients: args.patients.unwrap_or(config.seed.patients),
        wards: args.wards.unwrap_or(config.seed.wards),
        assignments: args.assignments.unwrap_or(config.seed.assignments),
    };

    let report = seed::seed(store, &volumes, &mut rand::thread_rng())?;
    if json {
        println!(
            "{}",
            serde_json::json!({ "type": "seeded", "payload": report })
        );
    } else {
        output::success(&report);
    }
    Ok(())
}

fn doctor_command(store: &SqliteRegistry, command: &DoctorCommand, json: bool) -> Result<()> {
    match *command {
        DoctorCommand::Show { id } => match store.doctor(DoctorId::new(id))? {
            Some(doctor) => output::entity("doctor", &doctor, json)?,
            None => output::not_found("doctor", id, json),
        },
        DoctorCommand::Patients { id } => {
            let names = store.doctor_patient_names(DoctorId::new(id))?;
            output::names("patients", &names, json)?;
        }
        DoctorCommand::Nurses { id } => {
            let nurses = store.doctor_nurses(DoctorId::new(id))?;
            output::nurse_table(&nurses, json)?;
        }
    }
    Ok(())
}

fn nurse_command(store: &SqliteRegistry, command: &NurseCommand, json: bool) -> Result<()> {
    match command {
        NurseCommand::Show { id } => match store.nurse(NurseId::new(*id))? {
            Some(nurse) => output::entity("nurse", &nurse, json)?,
            None => output::not_found("nurse", *id, json),
        },
        NurseCommand::Doctor { id } => match store.nurse_doctor(NurseId::new(*id))? {
            Some(doctor) => output::entity("doctor", &doctor, json)?,
            None => output::not_found("supervising doctor for nurse", *id, json),
        },
        NurseCommand::Patients { id } => {
            let patients = store.nurse_patients(NurseId::new(*id))?;
            output::patient_table(&patients, json)?;
        }
        NurseCommand::Assign { id, patients } => {
            let nurse = NurseId::new(*id);
            let patient_ids: Vec<PatientId> =
                patients.iter().map(|id| PatientId::new(*id)).collect();
            store.assign_patients(nurse, &patient_ids)?;
            if json {
                println!(
                    "{}",
                    serde_json::json!({
                        "type": "assigned",
                        "payload": { "nurse_id": nurse, "patients": patient_ids },
                    })
                );
            } else {
                output::success(format!(
                    "linked nurse {nurse} to {} patient(s)",
                    patient_ids.len()
                ));
            }
        }
    }
    Ok(())
}

fn patient_command(store: &SqliteRegistry, command: &PatientCommand, json: bool) -> Result<()> {
    match *command {
        PatientCommand::Show { id } => match store.patient(PatientId::new(id))? {
            Some(patient) => output::entity("patient", &patient, json)?,
            None => output::not_found("patient", id, json),
        },
        PatientCommand::Doctor { id } => match store.patient_doctor(PatientId::new(id))? {
            Some(doctor) => output::entity("doctor", &doctor, json)?,
            None => output::not_found("attending doctor for patient", id, json),
        },
        PatientCommand::Ward { id } => match store.patient_ward(PatientId::new(id))? {
            Some(ward) => output::entity("ward", &ward, json)?,
            None => output::not_found("ward for patient", id, json),
        },
        PatientCommand::Nurses { id } => {
            let nurses = store.patient_nurses(PatientId::new(id))?;
            output::nurse_table(&nurses, json)?;
        }
    }
    Ok(())
}

fn ward_command(store: &SqliteRegistry, command: &WardCommand, json: bool) -> Result<()> {
    match *command {
        WardCommand::Show { id } => match store.ward(WardId::new(id))? {
            Some(ward) => output::entity("ward", &ward, json)?,
            None => output::not_found("ward", id, json),
        },
        WardCommand::Occupancy { id } => {
            let ward_id = WardId::new(id);
            let count = store.ward_patient_count(ward_id)?;
            let ward = store.ward(ward_id)?;
            output::occupancy(ward.as_ref(), id, count, json);
        }
    }
    Ok(())
}

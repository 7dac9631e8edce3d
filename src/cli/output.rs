//! Terminal output formatting for query results.
//!
//! Human output uses colored symbols and `tabled` tables; `--json` mode
//! emits one machine-readable line per command with a `type`/`payload`
//! structure.

use std::fmt::Display;

use owo_colors::OwoColorize;
use serde::Serialize;
use serde_json::json;
use tabled::{settings::Style, Table, Tabled};

use crate::domain::{Nurse, Patient, Ward};
use crate::error::Result;

/// Emit a JSON line with type and payload structure.
fn emit_json_line(kind: &str, payload: serde_json::Value) {
    println!(
        "{}",
        json!({
            "type": kind,
            "payload": payload,
        })
    );
}

/// Print a success line with a green check mark.
pub fn success(message: impl Display) {
    println!("{} {message}", "✓".green());
}

/// Report a lookup that matched no row. Not an error; the process still
/// exits zero.
pub fn not_found(kind: &str, id: i32, json: bool) {
    if json {
        emit_json_line("not_found", json!({ "kind": kind, "id": id }));
    } else {
        println!("{}", format!("no {kind} with id {id}").dimmed());
    }
}

/// Print a single entity, as its display form or as JSON.
pub fn entity<T: Serialize + Display>(kind: &str, value: &T, json: bool) -> Result<()> {
    if json {
        emit_json_line(kind, serde_json::to_value(value)?);
    } else {
        println!("{value}");
    }
    Ok(())
}

/// Print a plain list of names, one per line.
pub fn names(kind: &str, names: &[String], json: bool) -> Result<()> {
    if json {
        emit_json_line(kind, serde_json::to_value(names)?);
        return Ok(());
    }
    if names.is_empty() {
        println!("{}", "(none)".dimmed());
        return Ok(());
    }
    for name in names {
        println!("{name}");
    }
    Ok(())
}

#[derive(Tabled)]
struct NurseLine {
    id: i32,
    name: String,
    doctor: String,
}

/// Print nurses as a table.
pub fn nurse_table(nurses: &[Nurse], json: bool) -> Result<()> {
    if json {
        emit_json_line("nurses", serde_json::to_value(nurses)?);
        return Ok(());
    }
    if nurses.is_empty() {
        println!("{}", "(none)".dimmed());
        return Ok(());
    }
    let lines: Vec<NurseLine> = nurses
        .iter()
        .map(|nurse| NurseLine {
            id: nurse.id.value(),
            name: nurse.name.clone(),
            doctor: nurse
                .doctor_id
                .map_or_else(|| "-".to_string(), |id| id.to_string()),
        })
        .collect();
    println!("{}", Table::new(lines).with(Style::sharp()));
    Ok(())
}

#[derive(Tabled)]
struct PatientLine {
    id: i32,
    name: String,
    doctor: String,
    ward: String,
}

/// Print patients as a table.
pub fn patient_table(patients: &[Patient], json: bool) -> Result<()> {
    if json {
        emit_json_line("patients", serde_json::to_value(patients)?);
        return Ok(());
    }
    if patients.is_empty() {
        println!("{}", "(none)".dimmed());
        return Ok(());
    }
    let lines: Vec<PatientLine> = patients
        .iter()
        .map(|patient| PatientLine {
            id: patient.id.value(),
            name: patient.name.clone(),
            doctor: patient
                .doctor_id
                .map_or_else(|| "-".to_string(), |id| id.to_string()),
            ward: patient
                .ward_id
                .map_or_else(|| "-".to_string(), |id| id.to_string()),
        })
        .collect();
    println!("{}", Table::new(lines).with(Style::sharp()));
    Ok(())
}

/// Print a ward's occupancy count.
pub fn occupancy(ward: Option<&Ward>, id: i32, count: i64, json: bool) {
    if json {
        emit_json_line("occupancy", json!({ "ward_id": id, "patients": count }));
        return;
    }
    match ward {
        Some(ward) => println!("{ward} houses {count} patient(s)"),
        None => println!("{}", format!("no ward with id {id}; occupancy {count}").dimmed()),
    }
}

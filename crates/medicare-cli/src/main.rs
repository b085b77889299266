//! MediCare command-line interface
//!
//! Every invocation starts from a fresh store (seeded unless `MEDICARE_SEED`
//! is off) and prints the requested view as JSON on stdout. Logs go to stderr.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use medicare_core::config::{self, Config};
use medicare_core::db::today;
use medicare_core::validation::parse_date;
use medicare_core::{AppointmentFilter, AppointmentStatus, Backup, Database, RecordId, Reports};

/// MediCare records tool
#[derive(Parser)]
#[command(name = "medicare")]
#[command(author, version, about = "Clinic records: patients, doctors, appointments, history", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List patients
    Patients {
        /// Case-insensitive name search
        #[arg(short, long)]
        search: Option<String>,
    },
    /// List the doctor roster
    Doctors {
        /// Case-insensitive specialty search
        #[arg(short, long)]
        specialty: Option<String>,
    },
    /// List appointments
    Appointments {
        /// Only this date (YYYY-MM-DD)
        #[arg(short, long, value_parser = date_arg, conflicts_with = "today")]
        date: Option<NaiveDate>,
        /// Only this doctor
        #[arg(long)]
        doctor: Option<RecordId>,
        /// Only this patient
        #[arg(long)]
        patient: Option<RecordId>,
        /// Only this status (scheduled, completed)
        #[arg(long)]
        status: Option<AppointmentStatus>,
        /// Only today's appointments
        #[arg(long)]
        today: bool,
    },
    /// List medical history
    History {
        /// One patient's history, most recent first
        #[arg(long, conflicts_with = "search")]
        patient: Option<RecordId>,
        /// Entries recorded by one doctor
        #[arg(long, conflicts_with = "search")]
        doctor: Option<RecordId>,
        /// Search patient names and diagnoses
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Print summary statistics
    Stats,
    /// Generate a report
    Report {
        #[command(subcommand)]
        kind: ReportKind,
    },
    /// Export every table plus statistics as one JSON document
    Export {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Write to medicare-backup-<today>.json in this directory
        #[arg(long, conflicts_with = "output")]
        dir: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ReportKind {
    /// Patients seen by each doctor
    ByDoctor,
    /// Appointments on a date with names resolved, earliest first
    OnDate {
        /// Date (YYYY-MM-DD)
        #[arg(value_parser = date_arg)]
        date: NaiveDate,
    },
    /// Diagnosis/treatment frequencies and monthly volume
    History,
}

fn date_arg(value: &str) -> Result<NaiveDate, String> {
    parse_date(value).ok_or_else(|| format!("invalid date {value:?}, expected YYYY-MM-DD"))
}

fn init_tracing(config: &Config) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env().context("reading configuration")?;
    init_tracing(&config);
    tracing::debug!("{} v{}", config::APP_NAME, config::APP_VERSION);

    let db = Database::open(&config).context("opening database")?;
    run(cli.command, &db)
}

fn run(command: Commands, db: &Database) -> Result<()> {
    match command {
        Commands::Patients { search } => match search {
            Some(term) => print_json(&db.search_patients_by_name(&term)),
            None => print_json(&db.list_patients()),
        },
        Commands::Doctors { specialty } => match specialty {
            Some(term) => print_json(&db.search_doctors_by_specialty(&term)),
            None => print_json(&db.list_doctors()),
        },
        Commands::Appointments {
            date,
            doctor,
            patient,
            status,
            today: only_today,
        } => {
            let filter = AppointmentFilter {
                date: if only_today { Some(today()) } else { date },
                doctor_id: doctor,
            };
            let mut appointments = db.filter_appointments(&filter);
            if let Some(patient_id) = patient {
                appointments.retain(|a| a.patient_id == patient_id);
            }
            if let Some(status) = status {
                appointments.retain(|a| a.status == status);
            }
            print_json(&appointments)
        }
        Commands::History {
            patient,
            doctor,
            search,
        } => {
            let entries = match (patient, doctor, search) {
                (_, _, Some(term)) => db.search_history(&term),
                (Some(patient_id), _, None) => db.history_for_patient(patient_id),
                (None, Some(doctor_id), None) => db.history_for_doctor(doctor_id),
                (None, None, None) => db.list_history(),
            };
            print_json(&entries)
        }
        Commands::Stats => print_json(&Reports::new(db).summary_statistics()),
        Commands::Report { kind } => {
            let reports = Reports::new(db);
            match kind {
                ReportKind::ByDoctor => print_json(&reports.patients_by_doctor()),
                ReportKind::OnDate { date } => print_json(&reports.appointments_on_date(date)),
                ReportKind::History => print_json(&reports.history_analysis()),
            }
        }
        Commands::Export { output, dir } => {
            let backup = Backup::from_database(db);
            let target = output.or_else(|| dir.map(|d| d.join(Backup::file_name(today()))));
            match target {
                Some(path) => backup
                    .write_to(&path)
                    .with_context(|| format!("writing backup to {}", path.display())),
                None => {
                    println!("{}", backup.to_json()?);
                    Ok(())
                }
            }
        }
    }
}

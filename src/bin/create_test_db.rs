use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;
use time::macros::datetime;

use debt_tracker::{
    DebtForm, DebtStatus, ScheduleForm, StudentForm, create_debt, create_schedule,
    create_student, initialize_db, pay_debt,
};

/// A utility for creating a test database for the debt tracker server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating test students...");

    let ivanov = create_student(
        &StudentForm {
            name: "Ivan Ivanov".to_owned(),
            faculty: "Computer Science".to_owned(),
            group: "101".to_owned(),
            student_id: "S100".to_owned(),
        },
        &conn,
    )?;
    let petrova = create_student(
        &StudentForm {
            name: "Anna Petrova".to_owned(),
            faculty: "Mathematics".to_owned(),
            group: "204".to_owned(),
            student_id: "S200".to_owned(),
        },
        &conn,
    )?;

    println!("Creating test debts...");

    let mut debts = Vec::new();
    for (subject, student) in [
        ("Algorithms", &ivanov),
        ("Physics", &ivanov),
        ("Linear Algebra", &petrova),
    ] {
        let debt = create_debt(
            &DebtForm {
                subject: subject.to_owned(),
                student_id: student.id,
                status: DebtStatus::Active,
            },
            &conn,
        )?
        .ok_or("test student is missing")?;

        debts.push(debt);
    }

    println!("Scheduling a makeup session...");

    create_schedule(
        &ScheduleForm {
            debt_id: debts[0].id,
            group: "101".to_owned(),
            teacher: "Petrov".to_owned(),
            date: datetime!(2025-06-01 10:00),
        },
        &conn,
    )?
    .ok_or("test debt is not active")?;

    pay_debt(debts[1].id, &conn)?;

    println!("Success!");

    Ok(())
}

use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;
use time::{Duration, OffsetDateTime};

use centime::{PasswordHash, ValidatedPassword, create_user, initialize_db};

/// A utility for creating a test database for the centime server.
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

    println!("Creating test user...");

    let password_hash = PasswordHash::new(
        ValidatedPassword::new_unchecked("test"),
        PasswordHash::DEFAULT_COST,
    )?;

    let user = create_user("test", password_hash, &conn)?;

    println!("Seeding cards and transactions...");

    let today = OffsetDateTime::now_utc().date();

    let cards = [
        // name, limit, days until due, apr, current balance
        ("Visa Platinum", 5000.00, 10, 18.99, 1234.56),
        ("Mastercard Gold", 10000.00, 20, 22.49, 789.01),
        ("Amex Green", 3000.00, 5, 15.99, 345.67),
    ];

    for (name, limit_amount, days_until_due, apr, current_balance) in cards {
        let due_date = today + Duration::days(days_until_due);

        conn.execute(
            "INSERT INTO cards (user_id, name, limit_amount, due_date, apr, current_balance) \
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            (
                user.id.as_i64(),
                name,
                limit_amount,
                due_date,
                apr,
                current_balance,
            ),
        )?;
    }

    let transactions = [
        ("income", 5000.00),
        ("expense", 1200.50),
        ("expense", 345.75),
        ("expense", 678.90),
        ("income", 2500.00),
    ];

    for (kind, amount) in transactions {
        conn.execute(
            "INSERT INTO transactions (user_id, kind, amount, date) VALUES (?1, ?2, ?3, ?4)",
            (user.id.as_i64(), kind, amount, today),
        )?;
    }

    println!("Success!");

    Ok(())
}

use super::{or_dash, page_footer, short_time};
use crate::api::Pagination;
use crate::cli::globals::GlobalArgs;
use crate::features::attendance::{client, Attendance, AttendanceCreate, AttendanceFilter};
use anyhow::Result;
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

#[derive(Debug)]
pub enum Operation {
    List {
        window: Pagination,
        filter: AttendanceFilter,
    },
    CheckIn {
        location: Option<String>,
        notes: Option<String>,
        break_minutes: i64,
    },
    CheckOut(Uuid),
    /// `None` means today.
    Summary(Option<NaiveDate>),
}

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub operation: Operation,
}

/// # Errors
/// Returns an error if not logged in or the backend rejects the request.
pub async fn execute(args: Args) -> Result<()> {
    let api = args.globals.authenticated_client()?;

    match args.operation {
        Operation::List { window, filter } => {
            let page = client::list_attendance(&api, window, &filter).await?;
            for record in &page.data {
                print_row(record);
            }
            println!("{}", page_footer(window, &page));
        }
        Operation::CheckIn {
            location,
            notes,
            break_minutes,
        } => {
            let record = AttendanceCreate {
                location,
                notes,
                break_duration: break_minutes,
                ..AttendanceCreate::check_in_at(Utc::now())
            };
            let created = client::check_in(&api, &record).await?;
            println!("Checked in at {} ({})", short_time(&created.check_in), created.id);
        }
        Operation::CheckOut(id) => {
            let updated = client::check_out(&api, id).await?;
            let hours = updated
                .hours_worked()
                .map_or_else(|| "-".to_string(), |hours| format!("{hours:.2} h"));
            println!(
                "Checked out at {}, worked {hours}",
                updated.check_out.as_ref().map_or_else(|| "-".to_string(), short_time)
            );
        }
        Operation::Summary(date) => {
            let date = date.unwrap_or_else(|| Utc::now().date_naive());
            let summary = client::daily_summary(&api, date).await?;
            println!("Date             {}", summary.date);
            println!("Employees        {}", summary.total_employees);
            println!("Checked out      {}", summary.checked_out);
            println!("Still working    {}", summary.still_working);
            println!("Hours worked     {:.2}", summary.total_hours_worked);
            println!("Average hours    {:.2}", summary.average_hours_per_employee);
            for record in &summary.attendance_records {
                print_row(record);
            }
        }
    }
    Ok(())
}

fn print_row(record: &Attendance) {
    let check_out = record
        .check_out
        .as_ref()
        .map_or_else(|| "working".to_string(), short_time);
    println!(
        "{}  {}  {}  {:<16}  {}",
        record.id,
        record.employee_id,
        short_time(&record.check_in),
        check_out,
        or_dash(record.location.as_deref())
    );
}

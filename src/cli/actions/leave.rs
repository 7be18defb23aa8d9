use super::{or_dash, page_footer};
use crate::api::Pagination;
use crate::cli::globals::GlobalArgs;
use crate::features::leave_requests::{client, LeaveDecision, LeaveRequest, LeaveRequestCreate};
use anyhow::Result;
use uuid::Uuid;

#[derive(Debug)]
pub enum Operation {
    List(Pagination),
    Get(Uuid),
    Request(LeaveRequestCreate),
    Decide { id: Uuid, decision: LeaveDecision },
    Delete(Uuid),
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
        Operation::List(window) => {
            let page = client::list_leave_requests(&api, window).await?;
            for request in &page.data {
                println!(
                    "{}  {:<9}  {:<10}  {} .. {} ({} d)",
                    request.id,
                    request.status,
                    request.leave_type,
                    request.start_date.date_naive(),
                    request.end_date.date_naive(),
                    request.days()
                );
            }
            println!("{}", page_footer(window, &page));
        }
        Operation::Get(id) => print_request(&client::get_leave_request(&api, id).await?),
        Operation::Request(request) => {
            let created = client::create_leave_request(&api, &request).await?;
            println!("Leave request {} filed, status {}", created.id, created.status);
        }
        Operation::Decide { id, decision } => {
            let decided = client::decide_leave_request(&api, id, &decision).await?;
            println!("Leave request {} is now {}", decided.id, decided.status);
        }
        Operation::Delete(id) => {
            let message = client::delete_leave_request(&api, id).await?;
            println!("{}", message.message);
        }
    }
    Ok(())
}

fn print_request(request: &LeaveRequest) {
    println!("{:<12}{}", "Id", request.id);
    println!("{:<12}{}", "Employee", request.employee_id);
    println!("{:<12}{}", "Type", request.leave_type);
    println!(
        "{:<12}{} .. {} ({} d)",
        "Dates",
        request.start_date.date_naive(),
        request.end_date.date_naive(),
        request.days()
    );
    println!("{:<12}{}", "Status", request.status);
    println!("{:<12}{}", "Reason", request.reason);
    println!(
        "{:<12}{}",
        "Comments",
        or_dash(request.supervisor_comments.as_deref())
    );
}

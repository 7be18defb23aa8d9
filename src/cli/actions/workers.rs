use super::{or_dash, page_footer};
use crate::api::Pagination;
use crate::cli::globals::GlobalArgs;
use crate::features::workers::{client, Worker, WorkerCreate, WorkerUpdate};
use anyhow::Result;
use uuid::Uuid;

#[derive(Debug)]
pub enum Operation {
    List(Pagination),
    Get(Uuid),
    Create(WorkerCreate),
    Update { id: Uuid, changes: WorkerUpdate },
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
            let page = client::list_workers(&api, window).await?;
            for worker in &page.data {
                println!(
                    "{}  {:<24}  {}",
                    worker.id,
                    worker.name,
                    or_dash(worker.department.as_deref())
                );
            }
            println!("{}", page_footer(window, &page));
        }
        Operation::Get(id) => print_worker(&client::get_worker(&api, id).await?),
        Operation::Create(worker) => {
            let created = client::create_worker(&api, &worker).await?;
            println!("Created worker {}", created.id);
            print_worker(&created);
        }
        Operation::Update { id, changes } => {
            let updated = client::update_worker(&api, id, &changes).await?;
            print_worker(&updated);
        }
        Operation::Delete(id) => {
            let deleted = client::delete_worker(&api, id).await?;
            println!("Deleted worker {} ({})", deleted.id, deleted.name);
        }
    }
    Ok(())
}

fn print_worker(worker: &Worker) {
    let rows = [
        ("Name", Some(worker.name.as_str())),
        ("Gender", worker.gender.as_deref()),
        ("Department", worker.department.as_deref()),
        ("Address", worker.address.as_deref()),
        ("Aadhaar", worker.aadhar.as_deref()),
        ("Bank", worker.bankname.as_deref()),
        ("IFSC", worker.ifscode.as_deref()),
        ("Account", worker.accountno.as_deref()),
        ("PF", worker.pfno.as_deref()),
        ("ESIC", worker.esicno.as_deref()),
    ];
    println!("{:<12}{}", "Id", worker.id);
    for (label, value) in rows {
        println!("{label:<12}{}", or_dash(value));
    }
}

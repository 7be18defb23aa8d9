use super::{or_dash, short_time};
use crate::api::Pagination;
use crate::cli::globals::GlobalArgs;
use crate::features::teams::{client, TeamAssignmentCreate};
use anyhow::Result;
use uuid::Uuid;

#[derive(Debug)]
pub enum Operation {
    List(Pagination),
    MyTeam,
    Assign {
        laborer_id: Uuid,
        assignment: TeamAssignmentCreate,
    },
    Deactivate(Uuid),
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
            let assignments = client::list_assignments(&api, window).await?;
            for assignment in &assignments {
                println!(
                    "{}  {:<16}  {:<16}  laborer {}  {}",
                    assignment.id,
                    assignment.team_name,
                    or_dash(assignment.site_location.as_deref()),
                    assignment.laborer_id,
                    if assignment.is_active { "active" } else { "inactive" }
                );
            }
            println!("{} assignment(s)", assignments.len());
        }
        Operation::MyTeam => {
            let members = client::my_team(&api).await?;
            for member in &members {
                println!(
                    "{:<24}  {:<10}  {:<16}  since {}",
                    member.laborer.display_name(),
                    or_dash(member.laborer.employee_id.as_deref()),
                    member.team_name,
                    short_time(&member.assigned_date)
                );
            }
            println!("{} member(s)", members.len());
        }
        Operation::Assign {
            laborer_id,
            assignment,
        } => {
            let created = client::create_assignment(&api, laborer_id, &assignment).await?;
            println!(
                "Assigned laborer {} to {} ({})",
                created.laborer_id, created.team_name, created.id
            );
        }
        Operation::Deactivate(id) => {
            let message = client::deactivate_assignment(&api, id).await?;
            println!("{}", message.message);
        }
    }
    Ok(())
}

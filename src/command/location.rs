//! Location lifecycle commands.

use std::io::IsTerminal;

use clap::{Args, Subcommand};
use dialoguer::Select;
use sea_orm::DatabaseConnection;

use crate::{
    data::location::LocationRepository, error::AppError,
    service::location::LocationDeletionService,
};

#[derive(Subcommand)]
pub enum LocationCommands {
    /// Delete a location from the panel
    Delete(DeleteArgs),
}

#[derive(Args)]
pub struct DeleteArgs {
    /// The short code of the location to delete
    #[arg(long)]
    pub short: Option<String>,
}

pub async fn run(db: &DatabaseConnection, command: LocationCommands) -> Result<(), AppError> {
    match command {
        LocationCommands::Delete(args) => {
            delete(db, args, std::io::stdin().is_terminal()).await
        }
    }
}

/// Deletes the location matching `--short`, falling back to an interactive
/// selection over all short codes.
///
/// A short code that matches nothing re-prompts while interactive; a
/// non-interactive invocation aborts immediately instead of looping. The
/// interactive prompt's cancel (Esc) is the operator's escape hatch out of
/// the re-prompt cycle.
async fn delete(
    db: &DatabaseConnection,
    args: DeleteArgs,
    interactive: bool,
) -> Result<(), AppError> {
    let repository = LocationRepository::new(db);
    let locations = repository.all().await?;

    if locations.is_empty() {
        return Err(AppError::NotFound(
            "There are no locations to delete.".to_string(),
        ));
    }

    let mut short = args.short;
    loop {
        let wanted = match short.take() {
            Some(wanted) => wanted,
            None => {
                if !interactive {
                    return Err(AppError::InvalidArgument(
                        "--short is required when running non-interactively.".to_string(),
                    ));
                }
                match prompt_for_short(&locations)? {
                    Some(wanted) => wanted,
                    None => {
                        println!("No location selected.");
                        return Ok(());
                    }
                }
            }
        };

        match repository.find_by_short(&wanted).await? {
            Some(location) => {
                LocationDeletionService::new(db).handle(location.id).await?;
                println!("Location {} has been deleted.", location.short);
                return Ok(());
            }
            None => {
                eprintln!("No location with that short code was found.");
                if !interactive {
                    return Err(AppError::NotFound(format!(
                        "No location with the short code {} was found.",
                        wanted
                    )));
                }
                // Falls through to the interactive prompt on the next pass.
            }
        }
    }
}

fn prompt_for_short(locations: &[entity::location::Model]) -> Result<Option<String>, AppError> {
    let shorts: Vec<&str> = locations
        .iter()
        .map(|location| location.short.as_str())
        .collect();

    let selection = Select::new()
        .with_prompt("Select the location to delete")
        .items(&shorts)
        .interact_opt()?;

    Ok(selection.map(|index| locations[index].short.clone()))
}

use crate::cli::globals::GlobalArgs;
use anyhow::Result;
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
}

/// Removes the stored token.
///
/// # Errors
/// Returns an error if the token file exists but cannot be removed.
pub fn execute(args: &Args) -> Result<()> {
    let store = args.globals.token_store();
    if store.clear()? {
        info!(path = %store.path().display(), "token removed");
        println!("Logged out.");
    } else {
        println!("No stored login at {}.", store.path().display());
    }
    Ok(())
}

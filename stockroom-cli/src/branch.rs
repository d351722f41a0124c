use clap::Subcommand;
use colored::Colorize;
use stockroom_lib::{InventoryApi, Result, access::scope_branches};

use crate::Context;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List the branches the current session may use
    List,
}

pub async fn handle(ctx: &Context, cmd: &Command) -> Result<()> {
    match cmd {
        Command::List => {
            let session = ctx.store.get();
            let branches = scope_branches(ctx.api.list_branches().await?, &session);

            if branches.is_empty() {
                eprintln!("No branches available to this session");
            }

            for branch in branches {
                let line = format!("{:>5}  {}", branch.branch_id, branch.branch_name);
                if session.branch_id() == Some(branch.branch_id) {
                    println!("{}", line.bold());
                } else {
                    println!("{line}");
                }
            }
        }
    }

    Ok(())
}

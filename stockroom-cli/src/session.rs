use clap::Subcommand;
use colored::Colorize;
use stockroom_lib::{Result, access::Scope};

use crate::Context;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show the stored session
    Show,
    /// Store the branch and/or user type
    Set {
        #[arg(long)]
        branch_id: Option<String>,
        #[arg(long)]
        user_type: Option<String>,
    },
    /// Forget the stored session
    Clear,
}

pub fn handle(ctx: &Context, cmd: &Command) -> Result<()> {
    match cmd {
        Command::Show => {
            let session = ctx.store.get();
            let unset = || "<unset>".dimmed().to_string();

            println!(
                "{} {}",
                "branch_id:".bold(),
                session.branch_id.clone().unwrap_or_else(unset)
            );
            println!(
                "{} {}",
                "user_type:".bold(),
                session.user_type.clone().unwrap_or_else(unset)
            );

            match Scope::of(&session) {
                Scope::All => println!("Sees all branches"),
                Scope::Branch(id) => println!("Sees branch {id} only"),
                Scope::Nothing => println!("Sees no branches"),
            }
        }
        Command::Set {
            branch_id,
            user_type,
        } => {
            if let Some(branch_id) = branch_id {
                ctx.store.set_branch_id(Some(branch_id.as_str()))?;
            }
            if let Some(user_type) = user_type {
                ctx.store.set_user_type(Some(user_type.as_str()))?;
            }
        }
        Command::Clear => ctx.store.clear()?,
    }

    Ok(())
}

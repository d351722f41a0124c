use clap::Subcommand;
use stockroom_lib::{InventoryApi, Result, model::BranchId};

use crate::Context;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List groups
    List {
        /// Only show groups of this branch
        #[arg(long)]
        branch: Option<i64>,
    },
}

pub async fn handle(ctx: &Context, cmd: &Command) -> Result<()> {
    match cmd {
        Command::List { branch } => {
            let groups = ctx.api.list_groups().await?;
            for group in groups
                .iter()
                .filter(|g| branch.is_none_or(|b| g.branch_id == BranchId(b)))
            {
                println!(
                    "{:>5}  {:<24} branch {}",
                    group.group_id, group.group_name, group.branch_id
                );
            }
        }
    }

    Ok(())
}

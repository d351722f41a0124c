use clap::{Args, Subcommand};
use colored::Colorize;
use stockroom_lib::{
    EquipmentForm, Error, Result,
    draft::{Field, ValidationError},
    model::{Asset, AssetId, BranchId, GroupId},
};

use crate::Context;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List assets
    List,
    /// Add a new asset
    Add(AssetArgs),
    /// Edit an existing asset
    Edit {
        id: i64,
        #[command(flatten)]
        changes: AssetArgs,
    },
    /// Delete an asset
    Delete { id: i64 },
}

/// Form inputs. Branch and group are chosen by id; the branch name and the
/// default sub-branch follow from the branch.
#[derive(Args, Debug, Clone, Default)]
pub struct AssetArgs {
    #[arg(long)]
    branch: Option<i64>,
    #[arg(long)]
    group: Option<i64>,
    #[arg(long)]
    sub_branch: Option<String>,
    #[arg(long)]
    desktop_name: Option<String>,
    #[arg(long)]
    configuration: Option<String>,
    #[arg(long)]
    tag_name: Option<String>,
    #[arg(long)]
    warranty: Option<String>,
    #[arg(long)]
    price: Option<String>,
    #[arg(long)]
    purchase_date: Option<String>,
    #[arg(long)]
    status: Option<String>,
    #[arg(long)]
    asset_get_by: Option<String>,
    #[arg(long)]
    serial_number: Option<String>,
}

impl AssetArgs {
    /// Feed the inputs into `form` the way a user would fill in the screen:
    /// branch first, then group and sub-branch, then the free text fields.
    fn apply(&self, form: &mut EquipmentForm) -> Result<()> {
        if let Some(id) = self.branch {
            if !form.select_branch(BranchId(id)) {
                return Err(Error::UnknownBranch(BranchId(id)));
            }
        }

        if let Some(id) = self.group {
            if !form.select_group(GroupId(id)) {
                return Err(Error::UnknownGroup(GroupId(id)));
            }
        }

        if let Some(value) = &self.sub_branch {
            if !form.select_sub_branch(value) {
                return Err(ValidationError::NotAllowed {
                    field: Field::SubBranch,
                    value: value.clone(),
                }
                .into());
            }
        }

        for (field, value) in [
            (Field::DesktopName, &self.desktop_name),
            (Field::Configuration, &self.configuration),
            (Field::TagName, &self.tag_name),
            (Field::Warranty, &self.warranty),
            (Field::Price, &self.price),
            (Field::PurchaseDate, &self.purchase_date),
            (Field::Status, &self.status),
            (Field::AssetGetBy, &self.asset_get_by),
            (Field::SerialNumber, &self.serial_number),
        ] {
            if let Some(value) = value {
                form.set_field(field, value.as_str());
            }
        }

        Ok(())
    }
}

pub async fn handle(ctx: &Context, cmd: &Command) -> Result<()> {
    let mut form = EquipmentForm::new(ctx.store.get());
    form.load(&ctx.api).await?;

    match cmd {
        Command::List => {
            print_assets(form.assets());
            Ok(())
        }
        Command::Add(args) => {
            args.apply(&mut form)?;
            submit(&mut form, ctx).await
        }
        Command::Edit { id, changes } => {
            form.edit_by_id(AssetId(*id))?;
            changes.apply(&mut form)?;
            submit(&mut form, ctx).await
        }
        Command::Delete { id } => {
            form.delete(&ctx.api, AssetId(*id)).await?;
            println!("Deleted asset {id}");
            Ok(())
        }
    }
}

async fn submit(form: &mut EquipmentForm, ctx: &Context) -> Result<()> {
    match form.submit(&ctx.api).await? {
        Some(notice) => {
            println!("{}", notice.to_string().green());
            Ok(())
        }
        // Nothing was sent; say why
        None => match form.draft().validate() {
            Err(e) => Err(e.into()),
            Ok(_) => Ok(()),
        },
    }
}

fn print_assets(assets: &[Asset]) {
    if assets.is_empty() {
        println!("No assets");
        return;
    }

    println!(
        "{}",
        format!(
            "{:>5}  {:<20} {:<16} {:<30} {:<12} {:<14} {:<10} {:>12}",
            "ID", "DESKTOP", "BRANCH", "SUB-BRANCH", "GROUP", "SERIAL", "STATUS", "PRICE"
        )
        .bold()
    );

    for asset in assets {
        println!(
            "{:>5}  {:<20} {:<16} {:<30} {:<12} {:<14} {:<10} {:>12.2}",
            asset.id,
            asset.desktop_name,
            asset.branch_name,
            asset.sub_branch,
            asset.group_name,
            asset.serial_number,
            asset.status,
            asset.price
        );
    }
}

//! `shops` command handlers.
//!
//! `create` resolves the shop's location before anything is sent: an
//! unresolved selection blocks the submission and no request is made.

use boipara_core::{LocationPicker, LocationRecord, NewShop, Resolution, Selections, Shop};
use clap::Subcommand;

use crate::locations::{LocationSource, SelectionArgs};

/// Sub-commands available under `shops`.
#[derive(Debug, Subcommand)]
pub enum ShopsCommands {
    /// List shops
    List {
        /// Only show shops with this status (pending, approved, rejected)
        #[arg(long)]
        status: Option<String>,
    },
    /// Create a shop at a resolved location
    Create {
        /// Shop display name
        #[arg(long)]
        name: String,

        /// Email of the seller who owns the shop
        #[arg(long)]
        seller_email: String,

        #[arg(long)]
        phone: Option<String>,

        /// Street address within the chosen area
        #[arg(long)]
        address: Option<String>,

        #[command(flatten)]
        selection: SelectionArgs,

        /// Print the request body without sending it
        #[arg(long)]
        dry_run: bool,
    },
}

pub(crate) async fn run(command: ShopsCommands, source: &LocationSource) -> anyhow::Result<()> {
    match command {
        ShopsCommands::List { status } => run_list(source, status.as_deref()).await,
        ShopsCommands::Create {
            name,
            seller_email,
            phone,
            address,
            selection,
            dry_run,
        } => {
            let locations = source.load().await?;
            let mut picker = resolve_shop_location(&locations, &selection.to_resolvable())?;

            let new_shop = NewShop::from_picker(
                &name,
                &seller_email,
                phone.as_deref(),
                address.as_deref(),
                &picker,
            )?;

            if dry_run {
                println!("{}", serde_json::to_string_pretty(&new_shop)?);
                return Ok(());
            }

            let client = source.client()?;
            let created = client.create_shop(&new_shop).await?;
            picker.reset();
            println!("created shop {} ({})", created.id, created.name);
            Ok(())
        }
    }
}

/// Replays `selection` into a picker and requires it to resolve.
///
/// A value that is not among the options at its level is the same failure as
/// a complete selection with no matching record: both block the submission
/// with the inline no-match warning.
pub(crate) fn resolve_shop_location(
    locations: &[LocationRecord],
    selection: &Selections,
) -> anyhow::Result<LocationPicker> {
    let picker = match LocationPicker::prefilled(locations, selection) {
        Ok(picker) => picker,
        Err(e) => {
            tracing::warn!(%selection, error = %e, "shop location did not resolve");
            let warning = Resolution::NoMatch.warning().unwrap_or_default();
            anyhow::bail!("submission blocked: {warning}");
        }
    };

    if !picker.can_submit() {
        tracing::warn!(
            selection = %picker.selections(),
            resolution = ?picker.resolution(),
            "shop location did not resolve"
        );
        let warning = picker.warning().unwrap_or_default();
        anyhow::bail!("submission blocked: {warning}");
    }
    Ok(picker)
}

async fn run_list(source: &LocationSource, status: Option<&str>) -> anyhow::Result<()> {
    let client = source.client()?;
    let shops = client.fetch_shops().await?;

    let shops: Vec<&Shop> = shops
        .iter()
        .filter(|s| status.is_none_or(|wanted| s.status.to_string().eq_ignore_ascii_case(wanted)))
        .collect();

    if shops.is_empty() {
        println!("no shops found");
        return Ok(());
    }

    for shop in shops {
        println!("{}", format_shop(shop));
    }
    Ok(())
}

/// One-line rendering: `id  status  name  location  created`.
pub(crate) fn format_shop(shop: &Shop) -> String {
    let created = shop
        .created_at
        .map_or_else(|| "-".to_string(), |d| d.format("%Y-%m-%d").to_string());
    format!(
        "{}\t{:<8}\t{}\t{}\t{}",
        shop.id,
        shop.status,
        shop.name,
        shop.shop_location_id.as_deref().unwrap_or("-"),
        created
    )
}

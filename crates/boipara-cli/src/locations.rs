//! `locations` command handlers and the location source shared with `shops`.
//!
//! Locations come either from a local snapshot (`--locations-file`) or from
//! the backend. A failed backend load is reported once with the generic
//! fetch-error message and is not retried.

use std::path::PathBuf;

use anyhow::Context;
use boipara_client::BackendClient;
use boipara_core::catalog::FETCH_ERROR_MESSAGE;
use boipara_core::{
    options_for, resolve, AppConfig, ConfigError, Level, LocationCatalog, LocationRecord,
    Resolution, Selections,
};
use clap::{Args, Subcommand};

/// Sub-commands available under `locations`.
#[derive(Debug, Subcommand)]
pub enum LocationsCommands {
    /// Print every location record
    List {
        /// Print JSON instead of one line per record
        #[arg(long)]
        json: bool,
    },
    /// Print the values available at one level, given the levels above it
    Options {
        /// Level to list: division, district, thana, union or area
        #[arg(long)]
        level: Level,

        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Map a full selection to its location id
    Resolve {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Print the resolution as JSON
        #[arg(long)]
        json: bool,
    },
    /// Choose a location interactively, level by level
    Pick,
}

/// The five selection flags shared by `options`, `resolve` and `shops create`.
#[derive(Debug, Clone, Default, Args)]
pub struct SelectionArgs {
    #[arg(long)]
    pub division: Option<String>,
    #[arg(long)]
    pub district: Option<String>,
    #[arg(long)]
    pub thana: Option<String>,
    /// Union; omitted means "N/A" when resolving
    #[arg(long)]
    pub union: Option<String>,
    /// Area; omitted means "N/A" when resolving
    #[arg(long)]
    pub area: Option<String>,
}

impl SelectionArgs {
    /// The selection exactly as given; omitted levels stay unset.
    pub fn to_selections(&self) -> Selections {
        fn value(v: Option<&str>) -> &str {
            v.map_or("", str::trim)
        }
        Selections::from_path([
            value(self.division.as_deref()),
            value(self.district.as_deref()),
            value(self.thana.as_deref()),
            value(self.union.as_deref()),
            value(self.area.as_deref()),
        ])
    }

    /// The selection with an omitted union or area read as `"N/A"`, matching
    /// how records without those fields are normalized.
    pub fn to_resolvable(&self) -> Selections {
        self.to_selections().with_optional_filled()
    }
}

/// Where location records are loaded from for this invocation.
pub struct LocationSource {
    file: Option<PathBuf>,
    config: Result<AppConfig, ConfigError>,
}

impl LocationSource {
    pub fn new(file: Option<PathBuf>, config: Result<AppConfig, ConfigError>) -> Self {
        Self { file, config }
    }

    /// Backend configuration; only required by commands that talk to it.
    pub fn config(&self) -> anyhow::Result<&AppConfig> {
        self.config
            .as_ref()
            .map_err(|e| anyhow::anyhow!("configuration error: {e}"))
    }

    pub fn client(&self) -> anyhow::Result<BackendClient> {
        let config = self.config()?;
        BackendClient::from_config(config)
            .map_err(|e| anyhow::anyhow!("failed to build backend client: {e}"))
    }

    /// Loads the location list from the snapshot file or the backend.
    pub async fn load(&self) -> anyhow::Result<Vec<LocationRecord>> {
        if let Some(path) = &self.file {
            let locations = boipara_core::load_locations(path)
                .with_context(|| format!("loading locations from {}", path.display()))?;
            tracing::debug!(count = locations.len(), path = %path.display(), "loaded location snapshot");
            return Ok(locations);
        }

        let catalog = self.client()?.load_catalog().await;
        if let LocationCatalog::Loaded(locations) = catalog {
            return Ok(locations);
        }
        let message = catalog.error().unwrap_or(FETCH_ERROR_MESSAGE);
        match catalog.failure_detail() {
            Some(detail) => anyhow::bail!("{message} ({detail})"),
            None => anyhow::bail!(message),
        }
    }
}

pub(crate) async fn run(command: LocationsCommands, source: &LocationSource) -> anyhow::Result<()> {
    let locations = source.load().await?;

    match command {
        LocationsCommands::List { json } => run_list(&locations, json)?,
        LocationsCommands::Options { level, selection } => {
            run_options(&locations, level, &selection.to_selections());
        }
        LocationsCommands::Resolve { selection, json } => {
            run_resolve(&locations, &selection.to_resolvable(), json)?;
        }
        LocationsCommands::Pick => {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            if let Some(id) = crate::pick::run_pick(&locations, stdin.lock(), &mut stdout)? {
                tracing::info!(shop_location_id = %id, "location picked");
            }
        }
    }

    Ok(())
}

fn run_list(locations: &[LocationRecord], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(locations)?);
        return Ok(());
    }

    if locations.is_empty() {
        println!("no locations");
    }
    for record in locations {
        println!("{}", format_record(record));
    }
    Ok(())
}

fn run_options(locations: &[LocationRecord], level: Level, selections: &Selections) {
    if let Some(&missing) = level
        .prior()
        .iter()
        .find(|&&prior| !selections.is_chosen(prior))
    {
        eprintln!("warning: choose a {missing} before listing {level} options");
        return;
    }

    let options = options_for(locations, level, selections);
    if options.is_empty() {
        eprintln!("warning: no {level} options for {selections}");
    }
    for option in options {
        println!("{option}");
    }
}

/// Prints the resolved id. An unresolved selection is a warning, not an error.
fn run_resolve(
    locations: &[LocationRecord],
    selections: &Selections,
    json: bool,
) -> anyhow::Result<()> {
    let resolution = resolve(locations, selections);

    if json {
        println!("{}", serde_json::to_string(&resolution)?);
    } else if let Resolution::Resolved(id) = &resolution {
        println!("{id}");
    }

    if let Some(warning) = resolution.warning() {
        tracing::warn!(selection = %selections, ?resolution, "selection did not resolve");
        eprintln!("warning: {warning}");
    }
    Ok(())
}

/// One-line rendering: `id<TAB>division / district / thana / union / area`.
pub(crate) fn format_record(record: &LocationRecord) -> String {
    format!("{}\t{}", record.id, record.path().join(" / "))
}

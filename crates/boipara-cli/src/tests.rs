use boipara_core::catalog::FETCH_ERROR_MESSAGE;
use boipara_core::{AppConfig, Level, LocationRecord, Selections};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::locations::{format_record, LocationSource, SelectionArgs};
use crate::shops::{format_shop, resolve_shop_location};

fn locations() -> Vec<LocationRecord> {
    serde_json::from_value(serde_json::json!([
        {"_id": "L1", "division": "Dhaka", "district": "Dhaka", "thana": "Mirpur", "area": "Section 10"},
        {"_id": "L3", "division": "Khulna", "district": "Jessore", "thana": "Kotwali", "union": "Arabpur", "area": "Palbari"}
    ]))
    .unwrap()
}

fn config_for(base_url: &str) -> AppConfig {
    AppConfig {
        api_base_url: base_url.to_string(),
        api_token: None,
        log_level: "info".to_string(),
        request_timeout_secs: 5,
        user_agent: "boipara-test/0.1".to_string(),
    }
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["boipara"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
    assert!(cli.locations_file.is_none());
}

#[test]
fn parses_locations_list() {
    let cli = Cli::try_parse_from(["boipara", "locations", "list"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Locations {
            command: LocationsCommands::List { json: false }
        })
    ));
}

#[test]
fn parses_global_locations_file_after_subcommand() {
    let cli = Cli::try_parse_from([
        "boipara",
        "locations",
        "list",
        "--locations-file",
        "fixtures/locations.json",
    ])
    .unwrap();
    assert_eq!(
        cli.locations_file.as_deref(),
        Some(std::path::Path::new("fixtures/locations.json"))
    );
}

#[test]
fn parses_locations_options_with_level_and_parents() {
    let cli = Cli::try_parse_from([
        "boipara",
        "locations",
        "options",
        "--level",
        "thana",
        "--division",
        "Dhaka",
        "--district",
        "Gazipur",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Locations {
            command: LocationsCommands::Options {
                level: Level::Thana,
                selection: SelectionArgs {
                    division: Some(ref d),
                    district: Some(ref g),
                    thana: None,
                    ..
                }
            }
        }) if d == "Dhaka" && g == "Gazipur"
    ));
}

#[test]
fn rejects_unknown_level() {
    let result = Cli::try_parse_from(["boipara", "locations", "options", "--level", "ward"]);
    assert!(result.is_err());
}

#[test]
fn parses_locations_resolve_json() {
    let cli = Cli::try_parse_from([
        "boipara",
        "locations",
        "resolve",
        "--division",
        "Dhaka",
        "--district",
        "Dhaka",
        "--thana",
        "Mirpur",
        "--area",
        "Section 10",
        "--json",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Locations {
            command: LocationsCommands::Resolve {
                json: true,
                selection: SelectionArgs { union: None, .. }
            }
        })
    ));
}

#[test]
fn parses_locations_pick() {
    let cli = Cli::try_parse_from(["boipara", "locations", "pick"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Locations {
            command: LocationsCommands::Pick
        })
    ));
}

#[test]
fn parses_shops_list_with_status() {
    let cli = Cli::try_parse_from(["boipara", "shops", "list", "--status", "pending"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Shops {
            command: ShopsCommands::List { status: Some(ref s) }
        }) if s == "pending"
    ));
}

#[test]
fn parses_shops_create_dry_run() {
    let cli = Cli::try_parse_from([
        "boipara",
        "shops",
        "create",
        "--name",
        "Nilkhet Books",
        "--seller-email",
        "seller@example.com",
        "--division",
        "Dhaka",
        "--district",
        "Dhaka",
        "--thana",
        "Mirpur",
        "--area",
        "Section 10",
        "--dry-run",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Shops {
            command: ShopsCommands::Create {
                ref name,
                dry_run: true,
                phone: None,
                ..
            }
        }) if name == "Nilkhet Books"
    ));
}

#[test]
fn shops_create_requires_name() {
    let result = Cli::try_parse_from([
        "boipara",
        "shops",
        "create",
        "--seller-email",
        "seller@example.com",
    ]);
    assert!(result.is_err());
}

#[test]
fn selection_args_keep_omitted_levels_unset() {
    let args = SelectionArgs {
        division: Some(" Dhaka ".to_string()),
        district: Some("Dhaka".to_string()),
        ..SelectionArgs::default()
    };
    assert_eq!(
        args.to_selections(),
        Selections::from_path(["Dhaka", "Dhaka", "", "", ""])
    );
}

#[test]
fn selection_args_resolvable_fills_union_and_area() {
    let args = SelectionArgs {
        division: Some("Dhaka".to_string()),
        district: Some("Dhaka".to_string()),
        thana: Some("Mirpur".to_string()),
        union: None,
        area: Some("Section 10".to_string()),
    };
    assert_eq!(
        args.to_resolvable(),
        Selections::from_path(["Dhaka", "Dhaka", "Mirpur", "N/A", "Section 10"])
    );
}

#[test]
fn format_record_shows_normalized_path() {
    let record = LocationRecord {
        id: "L1".to_string(),
        division: "Dhaka".to_string(),
        district: "Dhaka".to_string(),
        thana: "Mirpur".to_string(),
        union: None,
        area: Some("Section 10".to_string()),
    };
    assert_eq!(
        format_record(&record),
        "L1\tDhaka / Dhaka / Mirpur / N/A / Section 10"
    );
}

#[test]
fn format_shop_uses_dash_for_missing_fields() {
    let shop: boipara_core::Shop = serde_json::from_value(serde_json::json!({
        "_id": "S1",
        "name": "Boi Ghor",
        "status": "approved",
        "createdAt": "2024-03-01T10:00:00Z"
    }))
    .unwrap();
    assert_eq!(
        format_shop(&shop),
        "S1\tapproved\tBoi Ghor\t-\t2024-03-01"
    );
}

#[test]
fn format_shop_pads_status_and_dashes_missing_date() {
    let shop: boipara_core::Shop = serde_json::from_value(serde_json::json!({
        "_id": "S2",
        "name": "Pathak Shamabesh",
        "shopLocationId": "L1"
    }))
    .unwrap();
    assert_eq!(format_shop(&shop), "S2\tpending \tPathak Shamabesh\tL1\t-");
}

#[test]
fn shop_location_resolves_full_selection() {
    let selection = SelectionArgs {
        division: Some("Dhaka".to_string()),
        district: Some("Dhaka".to_string()),
        thana: Some("Mirpur".to_string()),
        union: None,
        area: Some("Section 10".to_string()),
    };
    let picker = resolve_shop_location(&locations(), &selection.to_resolvable()).unwrap();
    assert_eq!(picker.shop_location_id(), Some("L1"));
}

#[test]
fn shop_location_with_unknown_option_is_blocked_like_no_match() {
    // L3 has a union, so an omitted --union reads as "N/A" and is not an option.
    let selection = SelectionArgs {
        division: Some("Khulna".to_string()),
        district: Some("Jessore".to_string()),
        thana: Some("Kotwali".to_string()),
        union: None,
        area: Some("Palbari".to_string()),
    };
    let err = resolve_shop_location(&locations(), &selection.to_resolvable()).unwrap_err();
    assert_eq!(
        err.to_string(),
        format!(
            "submission blocked: {}",
            boipara_core::Resolution::NoMatch.warning().unwrap()
        )
    );
}

#[test]
fn shop_location_with_missing_thana_is_blocked_as_incomplete() {
    let selection = SelectionArgs {
        division: Some("Dhaka".to_string()),
        district: Some("Dhaka".to_string()),
        ..SelectionArgs::default()
    };
    let err = resolve_shop_location(&locations(), &selection.to_resolvable()).unwrap_err();
    assert_eq!(
        err.to_string(),
        format!(
            "submission blocked: {}",
            boipara_core::Resolution::Incomplete.warning().unwrap()
        )
    );
}

#[tokio::test]
async fn failed_backend_load_reports_fetch_error_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/locations"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let source = LocationSource::new(None, Ok(config_for(&server.uri())));
    let err = source.load().await.unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with(FETCH_ERROR_MESSAGE), "got: {message}");
    assert!(message.contains("503"), "got: {message}");
}

#[tokio::test]
async fn backend_load_returns_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/locations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                {"_id": "L1", "division": "Dhaka", "district": "Dhaka", "thana": "Mirpur", "area": "Section 10"}
            ]
        })))
        .mount(&server)
        .await;

    let source = LocationSource::new(None, Ok(config_for(&server.uri())));
    let locations = source.load().await.unwrap();
    assert_eq!(locations.len(), 1);
    assert_eq!(locations[0].id, "L1");
}

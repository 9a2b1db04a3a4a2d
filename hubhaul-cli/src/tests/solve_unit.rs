//! Focused unit tests covering solve CLI configuration and order parsing.

use super::helpers::{Workspace, write_utf8};
use super::*;
use camino::Utf8PathBuf;
use hubhaul_core::{OrderError, OrderPolicy, ProductId, SolveError};
use rstest::{fixture, rstest};

#[fixture]
fn workspace() -> Workspace {
    Workspace::new()
}

fn args_for(order_path: Utf8PathBuf) -> SolveArgs {
    SolveArgs {
        order_path: Some(order_path),
        ..SolveArgs::default()
    }
}

fn run_to_string(args: SolveArgs) -> Result<String, CliError> {
    let mut buffer = Vec::new();
    run_solve_with(args, &DefaultSolveSolverBuilder, &mut buffer)?;
    Ok(String::from_utf8(buffer).expect("stdout utf-8"))
}

#[rstest]
fn converting_solve_without_order_errors() {
    let err = SolveConfig::try_from(SolveArgs::default()).expect_err("missing order should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_SOLVE_ORDER);
            assert_eq!(env, ENV_SOLVE_ORDER);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
#[case::defaulted(None, OrderPolicy::Lenient)]
#[case::strict(Some("strict"), OrderPolicy::Strict)]
#[case::mixed_case(Some("Lenient"), OrderPolicy::Lenient)]
fn solve_config_resolves_policy(#[case] policy: Option<&str>, #[case] expected: OrderPolicy) {
    let args = SolveArgs {
        policy: policy.map(str::to_owned),
        ..args_for(Utf8PathBuf::from("order.json"))
    };
    let config = SolveConfig::try_from(args).expect("config should build");
    assert_eq!(config.policy, expected);
    assert_eq!(config.network, None);
}

#[rstest]
fn solve_config_rejects_unknown_policies() {
    let args = SolveArgs {
        policy: Some("loose".to_owned()),
        ..args_for(Utf8PathBuf::from("order.json"))
    };
    let err = SolveConfig::try_from(args).expect_err("unknown policy");
    match err {
        CliError::InvalidPolicy(source) => assert_eq!(source.value, "loose"),
        other => panic!("expected InvalidPolicy, found {other:?}"),
    }
}

#[rstest]
#[case::missing_order(ARG_SOLVE_ORDER, false, true)]
#[case::missing_network(ARG_SOLVE_NETWORK, true, false)]
fn validate_sources_reports_missing_files(
    workspace: Workspace,
    #[case] expected_field: &'static str,
    #[case] write_order: bool,
    #[case] write_network: bool,
) {
    let order_path = workspace.path("order.json");
    let network_path = workspace.path("network.json");
    if write_order {
        write_utf8(&order_path, b"{}");
    }
    if write_network {
        write_utf8(&network_path, b"{}");
    }
    let config = SolveConfig {
        order_path,
        network: Some(network_path),
        policy: OrderPolicy::Lenient,
        max_expansions: None,
    };

    let err = config.validate_sources().expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, expected_field),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_not_file(workspace: Workspace) {
    let order_path = workspace.path("order.json");
    std::fs::create_dir(&order_path).expect("order directory");
    let config = SolveConfig {
        order_path: order_path.clone(),
        network: None,
        policy: OrderPolicy::Lenient,
        max_expansions: None,
    };

    let err = config
        .validate_sources()
        .expect_err("expected directory path to fail validation");
    match err {
        CliError::SourcePathNotFile { field, path } => {
            assert_eq!(field, ARG_SOLVE_ORDER);
            assert_eq!(path, order_path);
        }
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn load_order_decodes_json(workspace: Workspace) {
    let path = workspace.order(r#"{"A": 2, "G": 1}"#);
    let order = load_order(&path).expect("order should decode");
    assert_eq!(order.quantity(&ProductId::from("A")), Some(2));
    assert_eq!(order.quantity(&ProductId::from("G")), Some(1));
}

#[rstest]
fn load_order_rejects_invalid_json(workspace: Workspace) {
    let path = workspace.order("{ not valid json");
    let err = load_order(&path).expect_err("invalid json should error");
    match err {
        CliError::ParseOrder { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn load_order_io_error_returns_open_error(workspace: Workspace) {
    let path = workspace.path("absent.json");
    let err = load_order(&path).expect_err("missing order should error");
    match err {
        CliError::OpenOrder { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected OpenOrder, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "order_path": 42 }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence(workspace: Workspace) {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let env_order = workspace.path("from-env-order.json");
    let file_network = workspace.path("from-file-network.json");
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "network": file_network.as_str(),
            "policy": "strict",
            "max_expansions": 100,
        }),
        None,
    );
    composer.push_environment(json!({
        "order_path": env_order.as_str(),
        "policy": "lenient",
    }));
    composer.push_cli(json!({ "max_expansions": 7 }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.order_path, env_order);
    assert_eq!(config.network, Some(file_network));
    assert_eq!(config.policy, OrderPolicy::Lenient);
    assert_eq!(config.max_expansions, Some(7));
}

#[rstest]
fn solve_prints_the_delivery_report(workspace: Workspace) {
    let order_path = workspace.order(r#"{"A": 1, "G": 1}"#);
    let stdout = run_to_string(args_for(order_path)).expect("solve should succeed");
    assert!(stdout.ends_with('\n'));
    let report: serde_json::Value = serde_json::from_str(&stdout).expect("report JSON");
    assert_eq!(report["minimum_cost"], 70);
    assert_eq!(report["path"], serde_json::json!(["C1", "L1", "C3", "L1"]));
    assert_eq!(report["breakdown"][0]["segment_cost"], 30);
}

#[rstest]
fn solve_uses_the_requested_network(workspace: Workspace) {
    let order_path = workspace.order(r#"{"A": 1}"#);
    let args = SolveArgs {
        network: Some(workspace.small_network()),
        ..args_for(order_path)
    };
    let stdout = run_to_string(args).expect("solve should succeed");
    let report: serde_json::Value = serde_json::from_str(&stdout).expect("report JSON");
    assert_eq!(report["minimum_cost"], 40);
}

#[rstest]
fn strict_policy_surfaces_order_errors(workspace: Workspace) {
    let order_path = workspace.order(r#"{"Z": 1}"#);
    let args = SolveArgs {
        policy: Some("strict".to_owned()),
        ..args_for(order_path)
    };
    let err = run_to_string(args).expect_err("unknown product");
    match err {
        CliError::Solve {
            source: SolveError::InvalidOrder(OrderError::UnknownProduct { product }),
        } => assert_eq!(product, ProductId::from("Z")),
        other => panic!("expected InvalidOrder, found {other:?}"),
    }
}

#[rstest]
fn lenient_unknown_only_order_has_no_route(workspace: Workspace) {
    let order_path = workspace.order(r#"{"Z": 1}"#);
    let err = run_to_string(args_for(order_path)).expect_err("nothing deliverable");
    match err {
        CliError::Solve {
            source: SolveError::NoRouteFound,
        } => {}
        other => panic!("expected NoRouteFound, found {other:?}"),
    }
}

#[rstest]
fn expansion_budget_is_forwarded(workspace: Workspace) {
    let order_path = workspace.order(r#"{"A": 1, "D": 1, "G": 1}"#);
    let args = SolveArgs {
        max_expansions: Some(1),
        ..args_for(order_path)
    };
    let err = run_to_string(args).expect_err("budget too small");
    match err {
        CliError::Solve {
            source: SolveError::SearchBudgetExhausted { limit },
        } => assert_eq!(limit, 1),
        other => panic!("expected SearchBudgetExhausted, found {other:?}"),
    }
}

#[rstest]
fn invalid_network_files_are_reported(workspace: Workspace) {
    let order_path = workspace.order(r#"{"A": 1}"#);
    let network_path = workspace.path("network.json");
    write_utf8(&network_path, br#"{"hub": "L1"}"#);
    let args = SolveArgs {
        network: Some(network_path),
        ..args_for(order_path)
    };
    let err = run_to_string(args).expect_err("malformed network");
    assert!(matches!(err, CliError::LoadNetwork(_)));
}

#[rstest]
fn oversized_quantities_fail_under_the_default_policy(workspace: Workspace) {
    let order_path = workspace.order(r#"{"A": 9223372036854775807}"#);
    let err = run_to_string(args_for(order_path)).expect_err("oversized line");
    match err {
        CliError::Solve {
            source: SolveError::InvalidOrder(OrderError::QuantityTooLarge { product, .. }),
        } => assert_eq!(product, ProductId::from("A")),
        other => panic!("expected QuantityTooLarge, found {other:?}"),
    }
}

//! Behavioural tests for network file loading using rstest-bdd.

use std::cell::RefCell;

use camino::Utf8PathBuf;
use hubhaul_core::{GraphError, Network, NetworkError};
use hubhaul_data::{NetworkLoadError, load_network};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tempfile::TempDir;

struct LoadWorld {
    dir: TempDir,
    path: RefCell<Option<Utf8PathBuf>>,
    outcome: RefCell<Option<Result<Network, NetworkLoadError>>>,
}

impl LoadWorld {
    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("temp dir"),
            path: RefCell::new(None),
            outcome: RefCell::new(None),
        }
    }

    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn file_path(&self) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(self.dir.path().join("network.json")).expect("utf-8 path")
    }

    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn write(&self, json: &str) {
        let path = self.file_path();
        std::fs::write(&path, json).expect("write network file");
        self.path.replace(Some(path));
    }
}

#[fixture]
fn world() -> LoadWorld {
    LoadWorld::new()
}

#[given("a network file with a symmetric graph")]
fn given_symmetric_file(world: &LoadWorld) {
    world.write(
        r#"{
            "hub": "L1",
            "distances": { "C1": { "L1": 3.0 }, "L1": { "C1": 3.0 } },
            "products": { "A": { "center": "C1", "weight": 3.0 } }
        }"#,
    );
}

#[given("a network file whose edge distances disagree")]
fn given_asymmetric_file(world: &LoadWorld) {
    world.write(
        r#"{
            "hub": "L1",
            "distances": { "C1": { "L1": 3.0 }, "L1": { "C1": 2.0 } },
            "products": {}
        }"#,
    );
}

#[given("a network path that does not exist")]
fn given_missing_file(world: &LoadWorld) {
    world.path.replace(Some(world.file_path()));
}

#[when("the network file is loaded")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn when_loaded(world: &LoadWorld) {
    let path = world.path.borrow().clone().expect("path should be configured");
    world.outcome.replace(Some(load_network(&path)));
}

#[then("the network has 2 locations and 1 product")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn then_network_loaded(world: &LoadWorld) {
    let outcome = world.outcome.borrow();
    let network = outcome
        .as_ref()
        .expect("outcome recorded")
        .as_ref()
        .expect("network should load");
    assert_eq!(network.graph().len(), 2);
    assert_eq!(network.catalog().len(), 1);
}

#[then("loading fails because the graph is asymmetric")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn then_asymmetric(world: &LoadWorld) {
    let outcome = world.outcome.borrow();
    let err = outcome
        .as_ref()
        .expect("outcome recorded")
        .as_ref()
        .expect_err("loading should fail");
    assert!(matches!(
        err,
        NetworkLoadError::Invalid(NetworkError::Graph(GraphError::AsymmetricDistance { .. }))
    ));
}

#[then("loading fails because the file cannot be read")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn then_unreadable(world: &LoadWorld) {
    let outcome = world.outcome.borrow();
    let err = outcome
        .as_ref()
        .expect("outcome recorded")
        .as_ref()
        .expect_err("loading should fail");
    assert!(matches!(err, NetworkLoadError::Open { .. }));
}

#[scenario(path = "tests/features/network_loading.feature", index = 0)]
fn symmetric_file(world: LoadWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/network_loading.feature", index = 1)]
fn asymmetric_file(world: LoadWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/network_loading.feature", index = 2)]
fn missing_file(world: LoadWorld) {
    let _ = world;
}

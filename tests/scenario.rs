//! Tests for running deployment phrases through the step registry.

use std::sync::Arc;

use deploy_steps::{
    RegistrarError,
    StepError,
    StepRegistry,
    steps::deploy_files::{self, DEPLOY_FILE_STEP, register_deploy_files_steps},
};
use deploy_steps_testing::{RecordingDeployer, StubHolderProvider, scenario_data};
use rstest::{fixture, rstest};

#[fixture]
fn registry() -> StepRegistry<deploy_steps::Data> { deploy_files::registry().expect("register deploy steps") }

#[rstest]
#[case(
    r#"Deploy file "config.yml" from example service "my-service""#,
    "/examples/my-service/src/main/resources/config.yml"
)]
#[case(
    r#"Deploy folder from example service "my-service""#,
    "/examples/my-service/src/main/resources"
)]
#[case(
    r#"Deploy file "nested/flow.bpmn" from example service "process-svc""#,
    "/examples/process-svc/src/main/resources/nested/flow.bpmn"
)]
fn phrases_resolve_expected_paths(
    registry: StepRegistry<deploy_steps::Data>,
    #[case] step: &str,
    #[case] expected: &str,
) {
    let holders = Arc::new(StubHolderProvider::new());
    let deployer = Arc::new(RecordingDeployer::new());
    let mut data = scenario_data("ns", "/examples", &holders, &deployer);

    registry.dispatch(&mut data, step).expect("dispatch");

    assert_eq!(deployer.last().expect("deploy call").app.source_uri(), expected);
}

#[rstest]
fn unknown_phrase_is_undefined(registry: StepRegistry<deploy_steps::Data>) {
    let holders = Arc::new(StubHolderProvider::new());
    let deployer = Arc::new(RecordingDeployer::new());
    let mut data = scenario_data("ns", "/examples", &holders, &deployer);

    let err = registry
        .dispatch(&mut data, "Deploy everything")
        .expect_err("undefined");

    assert_eq!(err.to_string(), "undefined step: Deploy everything");
    assert!(holders.requests().is_empty());
}

#[rstest]
fn registering_twice_is_rejected(registry: StepRegistry<deploy_steps::Data>) {
    let err = register_deploy_files_steps(registry).expect_err("duplicate");
    assert!(matches!(err, RegistrarError::DuplicatePattern(pattern) if pattern == DEPLOY_FILE_STEP));
}

#[rstest]
fn overlapping_pattern_makes_phrase_ambiguous(registry: StepRegistry<deploy_steps::Data>) {
    let registry = registry
        .step("^Deploy folder from .*$", |_, _| Ok(()))
        .expect("register overlapping step");
    let holders = Arc::new(StubHolderProvider::new());
    let deployer = Arc::new(RecordingDeployer::new());
    let mut data = scenario_data("ns", "/examples", &holders, &deployer);

    let err = registry
        .dispatch(&mut data, r#"Deploy folder from example service "svc""#)
        .expect_err("ambiguous");

    assert!(matches!(err, StepError::Ambiguous { ref patterns, .. } if patterns.len() == 2));
    assert!(deployer.calls().is_empty());
}

#[rstest]
fn scenario_stops_at_first_failing_step(registry: StepRegistry<deploy_steps::Data>) {
    let holders = Arc::new(StubHolderProvider::new());
    let deployer = Arc::new(RecordingDeployer::new());
    let mut data = scenario_data("ns", "/examples", &holders, &deployer);
    let steps = [
        r#"Deploy folder from example service "first""#,
        r#"Deploy folder from example service "Bad_Name""#,
        r#"Deploy folder from example service "third""#,
    ];

    let failure = registry
        .run_scenario(&mut data, steps)
        .expect_err("second step fails");

    assert_eq!(failure.index, 1);
    assert_eq!(failure.step, steps[1]);
    assert!(matches!(failure.source, StepError::Holder(_)));
    assert!(failure.to_string().starts_with("step 2 "), "{failure}");
    let deployed: Vec<_> = deployer
        .calls()
        .into_iter()
        .map(|call| call.app.name().to_owned())
        .collect();
    assert_eq!(deployed, ["first"]);
}

#[rstest]
fn namespace_change_applies_to_later_steps(registry: StepRegistry<deploy_steps::Data>) {
    let holders = Arc::new(StubHolderProvider::new());
    let deployer = Arc::new(RecordingDeployer::new());
    let mut data = scenario_data("before", "/examples", &holders, &deployer);

    registry
        .dispatch(&mut data, r#"Deploy folder from example service "svc""#)
        .expect("first");
    data.namespace = "after".into();
    registry
        .dispatch(&mut data, r#"Deploy folder from example service "svc""#)
        .expect("second");

    let namespaces: Vec<_> = deployer.calls().into_iter().map(|call| call.namespace).collect();
    assert_eq!(namespaces, ["before", "after"]);
}

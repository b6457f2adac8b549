//! Behaviour-driven step definitions driving the compare CLI scenarios.

use super::*;
use crate::compare::{
    Backend, DefaultRouteProviderBuilder, RouteProviderBuilder, run_compare_with,
};
use clap::Parser;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use std::sync::{Arc, Mutex, PoisonError};
use travelcompare_core::test_support::StubRouteProvider;
use travelcompare_core::{
    Notice, NoticeBus, NoticeKind, QueryError, RawTravelData, RouteProvider, TravelDataReport,
    TravelMode,
};

type Recorded = Arc<Mutex<Vec<Notice>>>;

#[derive(Debug, Default)]
struct CompareWorld {
    cli_args: RefCell<Vec<String>>,
    stub: RefCell<Option<StubRouteProvider>>,
    stdout: RefCell<Vec<u8>>,
    notices: Recorded,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl CompareWorld {
    fn push_args<const N: usize>(&self, args: [&str; N]) {
        self.cli_args
            .borrow_mut()
            .extend(args.into_iter().map(str::to_owned));
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["travelcompare".to_owned(), "compare".to_owned()];
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn notice_bus(&self) -> NoticeBus {
        let mut bus = NoticeBus::default();
        for kind in [
            NoticeKind::FormError,
            NoticeKind::FormSubmitted,
            NoticeKind::TravelDataReceived,
        ] {
            let seen = Arc::clone(&self.notices);
            bus.subscribe(kind, move |notice: &Notice| {
                seen.lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push(notice.clone());
            });
        }
        bus
    }

    fn recorded_notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn stdout_text(&self) -> String {
        String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8")
    }

    fn error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }
}

#[fixture]
fn world() -> CompareWorld {
    CompareWorld::default()
}

/// Serves a prepared stub regardless of the configured backend.
struct StubRouteProviderBuilder {
    stub: Mutex<Option<StubRouteProvider>>,
}

impl RouteProviderBuilder for StubRouteProviderBuilder {
    fn build(&self, _backend: &Backend) -> Result<Box<dyn RouteProvider>, CliError> {
        let stub = self
            .stub
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .expect("stub provider is built once");
        Ok(Box::new(stub))
    }
}

#[given("I pass --from Bern and --to Zürich")]
fn pass_from_and_to(#[from(world)] world: &CompareWorld) {
    world.push_args(["--from", "Bern", "--to", "Zürich"]);
}

#[given("I pass only --from Bern")]
fn pass_only_from(#[from(world)] world: &CompareWorld) {
    world.push_args(["--from", "Bern"]);
}

#[given("I pass a blank --from and --to Zürich")]
fn pass_blank_from(#[from(world)] world: &CompareWorld) {
    world.push_args(["--from", "  ", "--to", "Zürich"]);
}

#[given("I select the sample backend")]
fn select_sample(#[from(world)] world: &CompareWorld) {
    world.push_args(["--sample"]);
}

#[given("I request JSON output")]
fn request_json(#[from(world)] world: &CompareWorld) {
    world.push_args(["--json"]);
}

#[given("a routing backend without a transit route")]
fn backend_without_transit(#[from(world)] world: &CompareWorld) {
    let stub = StubRouteProvider::with_route(RawTravelData::new(121_556, 5_535))
        .with_no_route(TravelMode::Transit);
    *world.stub.borrow_mut() = Some(stub);
}

#[when("I run the compare command")]
fn run_compare_command(#[from(world)] world: &CompareWorld) {
    let invocation = world.build_command_line();
    let mut notices = world.notice_bus();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime should build");
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Compare(args) => {
            let mut buffer = world.stdout.borrow_mut();
            match world.stub.borrow_mut().take() {
                Some(stub) => {
                    let builder = StubRouteProviderBuilder {
                        stub: Mutex::new(Some(stub)),
                    };
                    runtime.block_on(run_compare_with(args, &builder, &mut *buffer, &mut notices))
                }
                None => runtime.block_on(run_compare_with(
                    args,
                    &DefaultRouteProviderBuilder,
                    &mut *buffer,
                    &mut notices,
                )),
            }
        }
    });

    world.result.replace(Some(outcome));
}

#[then("the command succeeds and prints a row for every travel mode")]
fn command_prints_table(#[from(world)] world: &CompareWorld) {
    {
        let borrowed = world.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        result.as_ref().expect("expected success");
    }

    let stdout = world.stdout_text();
    let rows: Vec<&str> = stdout.lines().skip(1).collect();
    assert_eq!(rows.len(), TravelMode::ALL.len());
    for (row, mode) in rows.iter().zip(TravelMode::ALL) {
        assert!(row.starts_with(mode.label()), "row {row:?} for {mode}");
        assert!(row.contains("1h 32min"), "row {row:?} should show the time");
    }
}

#[then("the command succeeds and prints a JSON report")]
fn command_prints_json(#[from(world)] world: &CompareWorld) {
    {
        let borrowed = world.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        result.as_ref().expect("expected success");
    }

    let report: TravelDataReport =
        serde_json::from_str(&world.stdout_text()).expect("output should be a JSON report");
    assert_eq!(report.routes_found(), TravelMode::ALL.len());
}

#[then("the public transport row reads no route")]
fn transit_row_reads_no_route(#[from(world)] world: &CompareWorld) {
    let stdout = world.stdout_text();
    let transit = stdout
        .lines()
        .find(|line| line.starts_with(TravelMode::Transit.label()))
        .expect("transit row present");
    assert!(transit.ends_with("no route"), "transit row was {transit:?}");
}

#[then("the notices report routes for 5 travel modes")]
fn notices_report_five(#[from(world)] world: &CompareWorld) {
    assert_received(world, 5);
}

#[then("the notices report routes for 4 travel modes")]
fn notices_report_four(#[from(world)] world: &CompareWorld) {
    assert_received(world, 4);
}

fn assert_received(world: &CompareWorld, expected: usize) {
    let notices = world.recorded_notices();
    assert!(
        matches!(notices.first(), Some(Notice::FormSubmitted { .. })),
        "expected a submission notice first, got {notices:?}"
    );
    assert_eq!(
        notices.last(),
        Some(&Notice::TravelDataReceived {
            routes_found: expected
        })
    );
}

#[then("the command fails because the to option is missing")]
fn command_fails_missing_to(#[from(world)] world: &CompareWorld) {
    match &*world.error() {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_TO),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[then("the command fails because the origin is blank")]
fn command_fails_blank_origin(#[from(world)] world: &CompareWorld) {
    match &*world.error() {
        CliError::InvalidQuery(QueryError::BlankAddress { field }) => {
            assert_eq!(*field, "origin");
        }
        other => panic!("expected InvalidQuery, found {other:?}"),
    }
}

#[then("a form error notice names to")]
fn form_error_names_to(#[from(world)] world: &CompareWorld) {
    assert_form_error(world, ARG_TO);
}

#[then("a form error notice names origin")]
fn form_error_names_origin(#[from(world)] world: &CompareWorld) {
    assert_form_error(world, "origin");
}

fn assert_form_error(world: &CompareWorld, expected_field: &str) {
    let notices = world.recorded_notices();
    match notices.as_slice() {
        [Notice::FormError { field, .. }] => assert_eq!(field, expected_field),
        other => panic!("expected a single form error notice, found {other:?}"),
    }
}

macro_rules! register_compare_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/compare_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: CompareWorld) {
            let _ = world;
        }
    };
}

register_compare_scenario!(compare_with_sample, "comparing with the sample backend");
register_compare_scenario!(compare_as_json, "printing JSON");
register_compare_scenario!(compare_with_missing_mode, "a mode without a route");
register_compare_scenario!(compare_missing_destination, "rejecting a missing destination");
register_compare_scenario!(compare_blank_origin, "rejecting a blank origin");

use std::sync::{Arc, Mutex};

use bikeshare_explorer::ingestion::{
    load_trips, LoadContext, LoadObserver, LoadOptions, LoadSeverity, LoadStats,
};
use bikeshare_explorer::vocab::{City, FilterSelection, Month, TimeFilter};
use bikeshare_explorer::ExploreError;

#[derive(Default)]
struct RecordingObserver {
    successes: Mutex<Vec<LoadStats>>,
    failures: Mutex<Vec<LoadSeverity>>,
    alerts: Mutex<Vec<LoadSeverity>>,
}

impl LoadObserver for RecordingObserver {
    fn on_success(&self, _ctx: &LoadContext, stats: LoadStats) {
        self.successes.lock().unwrap().push(stats);
    }

    fn on_failure(&self, _ctx: &LoadContext, severity: LoadSeverity, _error: &ExploreError) {
        self.failures.lock().unwrap().push(severity);
    }

    fn on_alert(&self, _ctx: &LoadContext, severity: LoadSeverity, _error: &ExploreError) {
        self.alerts.lock().unwrap().push(severity);
    }
}

fn options(data_dir: &str, obs: Arc<RecordingObserver>) -> LoadOptions {
    LoadOptions {
        data_dir: data_dir.into(),
        observer: Some(obs),
        alert_at_or_above: LoadSeverity::Critical,
    }
}

#[test]
fn observer_receives_row_counts_on_success() {
    let obs = Arc::new(RecordingObserver::default());
    let selection = FilterSelection {
        month: Some(Month::March),
        mode: TimeFilter::Month,
        ..FilterSelection::unfiltered(City::Chicago)
    };

    let ds = load_trips(&selection, &options("tests/fixtures", obs.clone())).unwrap();

    assert_eq!(ds.row_count(), 2);
    assert_eq!(
        obs.successes.lock().unwrap().clone(),
        vec![LoadStats {
            rows_read: 5,
            rows_kept: 2
        }]
    );
    assert!(obs.failures.lock().unwrap().is_empty());
}

#[test]
fn observer_receives_failure_and_alert_on_missing_file() {
    let obs = Arc::new(RecordingObserver::default());

    // Missing file -> Io error -> Critical
    let err = load_trips(
        &FilterSelection::unfiltered(City::Washington),
        &options("tests/fixtures/does_not_exist", obs.clone()),
    )
    .unwrap_err();
    assert_eq!(LoadSeverity::of(&err), LoadSeverity::Critical);

    let failures = obs.failures.lock().unwrap().clone();
    let alerts = obs.alerts.lock().unwrap().clone();
    assert_eq!(failures, vec![LoadSeverity::Critical]);
    assert_eq!(alerts, vec![LoadSeverity::Critical]);
}

#[test]
fn non_critical_failures_do_not_alert() {
    let obs = Arc::new(RecordingObserver::default());
    let err = ExploreError::SchemaMismatch {
        message: "missing required column 'User Type'".to_string(),
    };
    assert_eq!(LoadSeverity::of(&err), LoadSeverity::Error);

    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(City::Chicago.file_name()),
        "Start Time,Trip Duration\n2017-01-02 08:10:00,100\n",
    )
    .unwrap();

    let result = load_trips(
        &FilterSelection::unfiltered(City::Chicago),
        &LoadOptions {
            data_dir: dir.path().to_path_buf(),
            observer: Some(obs.clone()),
            alert_at_or_above: LoadSeverity::Critical,
        },
    );

    assert!(matches!(result, Err(ExploreError::SchemaMismatch { .. })));
    assert_eq!(obs.failures.lock().unwrap().clone(), vec![LoadSeverity::Error]);
    assert!(obs.alerts.lock().unwrap().is_empty());
}

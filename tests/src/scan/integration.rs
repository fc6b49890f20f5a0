use std::fs;
use std::io::Write;
use std::time::Duration;

use sweepr_common::config::Config;
use sweepr_common::error::SweepError;
use sweepr_common::utils::{input, output};
use sweepr_core::scanner::Scanner;

use crate::util::{StubProbe, shared, sorted};

fn config(concurrency: usize) -> Config {
    Config {
        concurrency,
        ..Config::default()
    }
}

/// Five hosts, every other one alive, written out the way the CLI does it.
#[tokio::test]
async fn alternating_hosts_end_up_in_output_file() {
    let (stub, probe) = shared(StubProbe::new(&["10.9.8.1", "10.9.8.3", "10.9.8.5"]));
    let scanner = Scanner::new(&config(3), probe).unwrap();

    let report = scanner.scan(&["10.9.8.1-5"]).await;

    assert_eq!(report.total, 5);
    assert_eq!(stub.calls(), 5);
    assert_eq!(sorted(&report.reachable), vec!["10.9.8.1", "10.9.8.3", "10.9.8.5"]);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("alive.txt");
    output::write_reachable(&path, &report.reachable).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    let mut lines: Vec<&str> = written.lines().collect();
    lines.sort();
    assert_eq!(lines, vec!["10.9.8.1", "10.9.8.3", "10.9.8.5"]);
    assert!(written.ends_with('\n'));
}

#[tokio::test]
async fn zero_concurrency_never_probes() {
    let (stub, probe) = shared(StubProbe::new(&["1.1.1.1"]));

    let result = Scanner::new(&config(0), probe);

    assert!(matches!(result, Err(SweepError::InvalidConfig(_))));
    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn file_with_malformed_line_still_scans_the_rest() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "1.1.1.1,1.1.1.2;1.1.1.3").unwrap();
    writeln!(file, "1.1.1-5").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "  2.2.2.1-3  ").unwrap();

    let lines = input::read_specs(file.path()).unwrap();
    let expansion = input::expand_lines(&lines);

    let (stub, probe) = shared(StubProbe::new(&["1.1.1.2", "2.2.2.3"]));
    let scanner = Scanner::new(&config(4), probe).unwrap();
    let report = scanner.scan_expansion(expansion).await;

    assert_eq!(report.malformed.len(), 1);
    assert_eq!(report.malformed[0].line, Some(2));
    assert_eq!(report.total, 6);
    assert_eq!(stub.calls(), 6);
    assert_eq!(sorted(&report.reachable), vec!["1.1.1.2", "2.2.2.3"]);
}

#[tokio::test]
async fn missing_input_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let result = input::read_specs(&dir.path().join("absent.txt"));

    assert!(matches!(result, Err(SweepError::FileIo { .. })));
}

#[tokio::test]
async fn broken_probes_do_not_hide_other_results() {
    let stub = StubProbe::new(&["172.16.0.1", "172.16.0.4"])
        .with_broken(&["172.16.0.2", "172.16.0.3"]);
    let (_, probe) = shared(stub);
    let scanner = Scanner::new(&config(2), probe).unwrap();

    let report = scanner.scan(&["172.16.0.1-4"]).await;

    assert_eq!(sorted(&report.reachable), vec!["172.16.0.1", "172.16.0.4"]);
    assert_eq!(report.failures.len(), 2);
    assert_eq!(report.unreachable(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn every_address_is_probed_exactly_once() {
    let (stub, probe) = shared(StubProbe::new(&[]).with_delay(Duration::from_millis(2)));
    let scanner = Scanner::new(&config(7), probe).unwrap();

    let report = scanner.scan(&["10.0.0.0-255", "10.0.1.0-99"]).await;

    assert_eq!(report.total, 356);
    assert_eq!(stub.calls(), 356);

    let probed = stub.probed.lock().unwrap();
    let mut probed = sorted(&probed);
    let before = probed.len();
    probed.dedup();
    assert_eq!(probed.len(), before);
}

#[tokio::test]
async fn scans_do_not_share_state() {
    let (_, probe) = shared(StubProbe::new(&["10.0.0.1"]));
    let scanner = Scanner::new(&config(2), probe).unwrap();

    let first = scanner.scan(&["10.0.0.1"]).await;
    let second = scanner.scan(&["10.0.0.2"]).await;

    assert_eq!(first.reachable.len(), 1);
    assert!(second.reachable.is_empty());
    assert_eq!(second.total, 1);
}

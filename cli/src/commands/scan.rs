use std::path::Path;
use std::sync::Arc;

use colored::*;
use tracing::Instrument;
use tracing_indicatif::span_ext::IndicatifSpanExt;

use sweepr_common::config::Config;
use sweepr_common::network::address::Address;
use sweepr_common::utils::{input, output};
use sweepr_common::{error, success, warn};
use sweepr_core::probe::{PingProbe, Probe};
use sweepr_core::scanner::{ScanReport, Scanner};

use crate::terminal::{colors, format, print, progress};

pub async fn scan(file: &Path, cfg: &Config) -> anyhow::Result<()> {
    let probe: Arc<dyn Probe> = Arc::new(PingProbe::new(cfg.timeout));
    let scanner = Scanner::new(cfg, probe)?;

    let lines = input::read_specs(file)?;
    let expansion = input::expand_lines(&lines);
    let total = expansion.addresses.len();
    success!("Loaded {} to check", format::count(total, "address", "addresses"));

    let span = progress::scan_span(total);
    let bar = span.clone();
    let scanner = scanner.with_observer(move |_| bar.pb_inc(1));

    let report = scanner.scan_expansion(expansion).instrument(span).await;

    scan_ends(&report, cfg);

    if let Some(path) = &cfg.output {
        save_results(path, &report.reachable, |address| print::print(address.as_str()));
    }

    Ok(())
}

fn scan_ends(report: &ScanReport, cfg: &Config) {
    if !report.malformed.is_empty() {
        warn!(
            "{} skipped as malformed",
            format::count(report.malformed.len(), "spec was", "specs were")
        );
    }

    if report.reachable.is_empty() {
        print::header("zero hosts responded", cfg.quiet);
    } else {
        print::header("reachable hosts", cfg.quiet);
        if cfg.quiet < 2 {
            print_hosts(&report.reachable);
        }
    }
    print_summary(report, cfg);
}

fn print_hosts(hosts: &[Address]) {
    for (idx, host) in hosts.iter().enumerate() {
        print::tree_head(idx, host.as_str());
    }
}

fn print_summary(report: &ScanReport, cfg: &Config) {
    let output: String = summary_line(report);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
        }
        _ => success!("{}", output),
    }

    if let Some(notice) = failure_notice(report) {
        warn!("{notice}");
    }
}

fn summary_line(report: &ScanReport) -> String {
    let reachable: String =
        format::count(report.reachable.len(), "reachable host", "reachable hosts");
    let active: ColoredString = reachable.bold().green();
    let total_time: ColoredString = format::elapsed(report.elapsed);

    format!(
        "Sweep Complete: {active} out of {} in {total_time}",
        report.total
    )
    .color(colors::TEXT_DEFAULT)
    .to_string()
}

fn failure_notice(report: &ScanReport) -> Option<String> {
    if report.failures.is_empty() {
        return None;
    }
    let count = format::count(report.failures.len(), "address", "addresses");
    Some(format!("{count} could not be probed"))
}

/// Writes the reachable list. If that fails, every address is handed to
/// `fallback` instead. Returns whether the file was written.
fn save_results<F>(path: &Path, reachable: &[Address], mut fallback: F) -> bool
where
    F: FnMut(&Address),
{
    match output::write_reachable(path, reachable) {
        Ok(()) => {
            success!("Reachable addresses saved to {}", path.display());
            true
        }
        Err(e) => {
            error!("{e}");
            warn!("Printing reachable addresses instead");
            for address in reachable {
                fallback(address);
            }
            false
        }
    }
}

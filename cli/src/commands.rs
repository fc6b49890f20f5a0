pub mod scan;

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser};
use sweepr_common::config::{Config, DEFAULT_CONCURRENCY, DEFAULT_TIMEOUT};

#[derive(Parser)]
#[command(name = "sweepr")]
#[command(version, about = "Ping every host of an address list and keep the ones that answer.")]
pub struct CommandLine {
    /// File with one address spec per line (1.1.1.1, 1.1.1.1-30, 1.1.1.1,1.1.1.2;1.1.1.3)
    #[arg(short = 'r', long = "file")]
    pub file: PathBuf,

    /// Number of probes running at the same time
    #[arg(short = 't', long = "threads", default_value_t = DEFAULT_CONCURRENCY)]
    pub threads: usize,

    /// Save reachable addresses to this file, one per line
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Per-probe timeout in milliseconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_millis() as u64)]
    pub timeout: u64,

    /// Less output: -q hides decoration, -qq also hides per-host lines
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            concurrency: self.threads,
            timeout: Duration::from_millis(self.timeout),
            output: self.output.clone(),
            quiet: self.quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_config_defaults() {
        let cli = CommandLine::try_parse_from(["sweepr", "-r", "targets.txt"]).unwrap();
        let cfg = cli.to_config();

        assert_eq!(cli.file, PathBuf::from("targets.txt"));
        assert_eq!(cfg.concurrency, 10);
        assert_eq!(cfg.timeout, Duration::from_secs(1));
        assert!(cfg.output.is_none());
        assert_eq!(cfg.quiet, 0);
    }

    #[test]
    fn all_flags_are_parsed() {
        let cli = CommandLine::try_parse_from([
            "sweepr", "--file", "in.txt", "-t", "64", "-o", "alive.txt", "--timeout", "250", "-qq",
        ])
        .unwrap();
        let cfg = cli.to_config();

        assert_eq!(cfg.concurrency, 64);
        assert_eq!(cfg.output, Some(PathBuf::from("alive.txt")));
        assert_eq!(cfg.timeout, Duration::from_millis(250));
        assert_eq!(cfg.quiet, 2);
    }

    #[test]
    fn input_file_is_required() {
        assert!(CommandLine::try_parse_from(["sweepr"]).is_err());
    }

    #[test]
    fn negative_threads_are_rejected() {
        assert!(CommandLine::try_parse_from(["sweepr", "-r", "in.txt", "-t", "-1"]).is_err());
    }
}

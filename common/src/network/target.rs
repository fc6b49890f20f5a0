//! # Address Spec Model
//!
//! Turns the address specs a user writes into concrete hosts.
//!
//! A spec is one of:
//! * A single host (e.g., `192.168.1.5`).
//! * A list separated by commas or semicolons (e.g., `10.0.0.1, 10.0.0.2;10.0.0.3`).
//! * A last-octet range (e.g., `192.168.1.1-100`).
//!
//! Forms are tried in that precedence: any delimiter makes the spec a list,
//! and list entries are taken literally, so a range inside a list is not
//! expanded. A descending range such as `1.1.1.5-3` is valid and empty.

use std::str::FromStr;

use rayon::prelude::*;

use crate::error::{SpecError, SweepError};
use crate::network::address::Address;
use crate::network::range::LastOctetRange;

const LIST_DELIMITER: char = ',';
const ALT_LIST_DELIMITER: char = ';';
const RANGE_MARKER: char = '-';

/// A parsed address spec.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// One host, taken literally.
    Host { address: Address },
    /// Hosts sharing their first three components.
    Range { range: LastOctetRange },
    /// Holds a list of different targets
    Multi { targets: Vec<Target> },
}

impl FromStr for Target {
    type Err = SweepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains(LIST_DELIMITER) || s.contains(ALT_LIST_DELIMITER) {
            return Ok(parse_list(s));
        }

        if let Some(target) = parse_range(s)? {
            return Ok(target);
        }

        Ok(parse_host(s))
    }
}

impl Target {
    /// Flattens the target into hosts, keeping their order.
    pub fn into_addresses(self) -> Vec<Address> {
        let mut addresses = Vec::new();
        self.collect_into(&mut addresses);
        addresses
    }

    fn collect_into(self, out: &mut Vec<Address>) {
        match self {
            Target::Host { address } => out.push(address),
            Target::Range { range } => out.extend(range.to_iter()),
            Target::Multi { targets } => {
                for target in targets {
                    target.collect_into(out);
                }
            }
        }
    }
}

/// Expands one spec into the hosts it describes.
pub fn expand(spec: &str) -> Result<Vec<Address>, SweepError> {
    Ok(spec.parse::<Target>()?.into_addresses())
}

/// Result of expanding a batch of specs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Expansion {
    /// Every host from every well-formed spec, in input order, duplicates kept.
    pub addresses: Vec<Address>,
    /// Specs that were skipped.
    pub malformed: Vec<SpecError>,
}

/// Expands every spec on its own. A malformed spec is recorded and skipped.
pub fn expand_all<S>(specs: &[S]) -> Expansion
where
    S: AsRef<str> + Sync,
{
    let specs: Vec<(Option<usize>, &str)> = specs.iter().map(|s| (None, s.as_ref())).collect();
    expand_batch(&specs)
}

/// Batch expansion with an optional line number attached to each spec.
pub(crate) fn expand_batch(specs: &[(Option<usize>, &str)]) -> Expansion {
    // Indexed parallel collect keeps input order.
    let expanded: Vec<Result<Vec<Address>, SpecError>> = specs
        .par_iter()
        .map(|&(line, spec)| expand(spec).map_err(|e| SpecError::from_sweep(line, spec, e)))
        .collect();

    let mut expansion = Expansion::default();
    for result in expanded {
        match result {
            Ok(addresses) => expansion.addresses.extend(addresses),
            Err(err) => expansion.malformed.push(err),
        }
    }
    expansion
}

/// Parses a delimited list. Entries are trimmed hosts, blanks are dropped.
fn parse_list(s: &str) -> Target {
    let normalized = s.replace(ALT_LIST_DELIMITER, &LIST_DELIMITER.to_string());

    let targets = normalized
        .split(LIST_DELIMITER)
        .filter_map(Address::new)
        .map(|address| Target::Host { address })
        .collect();

    Target::Multi { targets }
}

/// Parses a single host. A blank spec becomes an empty list.
fn parse_host(s: &str) -> Target {
    match Address::new(s) {
        Some(address) => Target::Host { address },
        None => Target::Multi { targets: Vec::new() },
    }
}

/// Parses a range string like "1.1.1.1-30".
fn parse_range(s: &str) -> Result<Option<Target>, SweepError> {
    if !s.contains(RANGE_MARKER) {
        return Ok(None);
    }

    let parts: Vec<&str> = s.split(RANGE_MARKER).collect();
    let [base, end] = parts.as_slice() else {
        return Err(SweepError::malformed(
            s,
            format!("expected 'A.B.C.start-end', found {} '-' markers", parts.len() - 1),
        ));
    };

    let components: Vec<&str> = base.trim().split('.').collect();
    let [a, b, c, start] = components.as_slice() else {
        return Err(SweepError::malformed(
            s,
            format!(
                "range base '{}' must have 4 components, found {}",
                base.trim(),
                components.len()
            ),
        ));
    };

    let start = parse_octet(start, s, "start")?;
    let end = parse_octet(end, s, "end")?;

    let range = LastOctetRange::new(format!("{a}.{b}.{c}"), start, end);
    Ok(Some(Target::Range { range }))
}

fn parse_octet(raw: &str, spec: &str, which: &str) -> Result<u8, SweepError> {
    let raw = raw.trim();
    raw.parse::<u8>()
        .map_err(|e| SweepError::malformed(spec, format!("invalid range {which} '{raw}': {e}")))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

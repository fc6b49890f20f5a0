//! Writing the reachable hosts to a file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::SweepError;
use crate::network::address::Address;

/// Writes one address per line, truncating whatever the file held before.
pub fn write_reachable(path: &Path, addresses: &[Address]) -> Result<(), SweepError> {
    let to_err = |source| SweepError::FileIo {
        action: "write",
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_err)?;
    let mut writer = BufWriter::new(file);
    for address in addresses {
        writeln!(writer, "{address}").map_err(to_err)?;
    }
    writer.flush().map_err(to_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn addrs(raw: &[&str]) -> Vec<Address> {
        raw.iter().filter_map(|s| Address::new(s)).collect()
    }

    #[test]
    fn writes_one_address_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alive.txt");

        write_reachable(&path, &addrs(&["10.0.0.1", "10.0.0.3"])).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "10.0.0.1\n10.0.0.3\n");
    }

    #[test]
    fn overwrites_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alive.txt");
        fs::write(&path, "stale\nstale\nstale\n").unwrap();

        write_reachable(&path, &addrs(&["10.0.0.9"])).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "10.0.0.9\n");
    }

    #[test]
    fn unwritable_path_is_a_file_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("alive.txt");

        assert!(matches!(
            write_reachable(&path, &addrs(&["10.0.0.1"])),
            Err(SweepError::FileIo { action: "write", .. })
        ));
    }
}

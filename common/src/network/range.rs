use crate::network::address::Address;

/// A run of hosts sharing their first three components, e.g. `10.0.0.1-20`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LastOctetRange {
    /// The fixed `A.B.C` part, without the trailing dot.
    pub prefix: String,
    pub start: u8,
    pub end: u8,
}

impl LastOctetRange {
    pub fn new(prefix: impl Into<String>, start: u8, end: u8) -> Self {
        Self {
            prefix: prefix.into(),
            start,
            end,
        }
    }

    /// Number of hosts in the range. A descending range is empty.
    pub fn len(&self) -> usize {
        if self.start > self.end {
            0
        } else {
            usize::from(self.end - self.start) + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Yields `prefix.start` through `prefix.end` in ascending order.
    pub fn to_iter(&self) -> impl Iterator<Item = Address> + '_ {
        (self.start..=self.end)
            .filter_map(move |octet| Address::new(&format!("{}.{}", self.prefix, octet)))
    }
}

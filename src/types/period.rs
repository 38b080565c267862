use std::fmt;
use std::fmt::{Display, Formatter};

/// One of the two comparison windows, tagged by year.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Period {
    Jan2025,
    Jan2026
}

impl Period {
    pub const ALL: [Period; 2] = [Period::Jan2025, Period::Jan2026];

    pub fn year(self) -> u16 {
        match self {
            Period::Jan2025 => 2025,
            Period::Jan2026 => 2026
        }
    }
}

impl Display for Period {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.year())
    }
}

use std::fmt;

/// Whole seconds spent on a test.
///
/// Displays as `m:ss`: minutes unpadded, seconds zero-padded to two digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Elapsed(u32);

impl Elapsed {
    #[must_use]
    pub const fn from_secs(secs: u32) -> Self {
        Self(secs)
    }

    #[must_use]
    pub const fn as_secs(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn minutes(self) -> u32 {
        self.0 / 60
    }

    #[must_use]
    pub const fn seconds(self) -> u32 {
        self.0 % 60
    }

    /// Advance by one second.
    pub fn tick(&mut self) {
        self.0 = self.0.saturating_add(1);
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.minutes(), self.seconds())
    }
}

//! Four-component framework version.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::FrameworkError;

/// A `major.minor.build.revision` version, ordered lexicographically.
///
/// The all-zero version is the wildcard lower bound: an available framework
/// with an empty version is satisfied by any version of its family.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct FrameworkVersion {
    pub major: u32,
    pub minor: u32,
    pub build: u32,
    pub revision: u32,
}

impl FrameworkVersion {
    /// 0.0.0.0
    pub const EMPTY: FrameworkVersion = FrameworkVersion::new(0, 0, 0, 0);

    /// Upper bound used by open-ended compatibility ranges.
    pub const MAX: FrameworkVersion = FrameworkVersion::new(
        i32::MAX as u32,
        i32::MAX as u32,
        i32::MAX as u32,
        i32::MAX as u32,
    );

    pub const fn new(major: u32, minor: u32, build: u32, revision: u32) -> Self {
        Self {
            major,
            minor,
            build,
            revision,
        }
    }

    pub const fn from_major_minor(major: u32, minor: u32) -> Self {
        Self::new(major, minor, 0, 0)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    pub fn components(&self) -> [u32; 4] {
        [self.major, self.minor, self.build, self.revision]
    }

    /// Parse a dotted version with one to four numeric components.
    pub fn parse(input: &str) -> Result<Self, FrameworkError> {
        let invalid = || FrameworkError::InvalidVersion {
            input: input.to_string(),
        };

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(invalid());
        }

        let mut parts = [0u32; 4];
        let mut count = 0;
        for piece in trimmed.split('.') {
            if count == 4 || piece.is_empty() || !piece.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            parts[count] = piece.parse::<u32>().map_err(|_| invalid())?;
            count += 1;
        }

        Ok(Self::new(parts[0], parts[1], parts[2], parts[3]))
    }

    /// Parse the version part of a short folder name.
    ///
    /// Dotted input is parsed as-is. Dotless input treats every digit as one
    /// component (`451` is 4.5.1); a lone digit gains a trailing zero (`5` is
    /// 5.0) and more than four digits is an error. Empty input is
    /// [`FrameworkVersion::EMPTY`].
    pub fn from_folder_digits(input: &str) -> Result<Self, FrameworkError> {
        if input.is_empty() {
            return Ok(Self::EMPTY);
        }
        if input.contains('.') {
            return Self::parse(input);
        }
        if input.len() > 4 || !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FrameworkError::InvalidVersion {
                input: input.to_string(),
            });
        }

        let mut parts = [0u32; 4];
        for (slot, digit) in parts.iter_mut().zip(input.bytes()) {
            *slot = u32::from(digit - b'0');
        }
        Ok(Self::new(parts[0], parts[1], parts[2], parts[3]))
    }
}

impl fmt::Display for FrameworkVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if self.build > 0 || self.revision > 0 {
            write!(f, ".{}", self.build)?;
        }
        if self.revision > 0 {
            write!(f, ".{}", self.revision)?;
        }
        Ok(())
    }
}

//! The framework descriptor value type.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use super::version::FrameworkVersion;
use crate::constants::{identifiers, special, PORTABLE_MEMBER_SEPARATOR};

static ANY: LazyLock<Framework> =
    LazyLock::new(|| Framework::new(special::ANY, FrameworkVersion::EMPTY));
static AGNOSTIC: LazyLock<Framework> =
    LazyLock::new(|| Framework::new(special::AGNOSTIC, FrameworkVersion::EMPTY));
static UNSUPPORTED: LazyLock<Framework> =
    LazyLock::new(|| Framework::new(special::UNSUPPORTED, FrameworkVersion::EMPTY));

/// An immutable target framework: identifier, version, optional profile and
/// optional platform with its own version.
///
/// Equality and hashing ignore ASCII case on the string fields and compare
/// versions exactly. Use [`Framework::name_eq`] for the weaker
/// identifier-only comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Framework {
    identifier: String,
    version: FrameworkVersion,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    profile: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    platform: String,
    #[serde(default, skip_serializing_if = "FrameworkVersion::is_empty")]
    platform_version: FrameworkVersion,
}

impl Framework {
    pub fn new(identifier: impl Into<String>, version: FrameworkVersion) -> Self {
        Self::with_profile(identifier, version, String::new())
    }

    pub fn with_profile(
        identifier: impl Into<String>,
        version: FrameworkVersion,
        profile: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            version,
            profile: profile.into(),
            platform: String::new(),
            platform_version: FrameworkVersion::EMPTY,
        }
    }

    pub fn with_platform(
        identifier: impl Into<String>,
        version: FrameworkVersion,
        platform: impl Into<String>,
        platform_version: FrameworkVersion,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            version,
            profile: String::new(),
            platform: platform.into(),
            platform_version,
        }
    }

    /// Wildcard matching all frameworks.
    pub fn any() -> &'static Framework {
        &ANY
    }

    /// A framework with no specific target, e.g. content-only packages.
    pub fn agnostic() -> &'static Framework {
        &AGNOSTIC
    }

    /// An unknown or invalid framework. Never compatible with anything but
    /// [`Framework::any`].
    pub fn unsupported() -> &'static Framework {
        &UNSUPPORTED
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn version(&self) -> FrameworkVersion {
        self.version
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn platform_version(&self) -> FrameworkVersion {
        self.platform_version
    }

    pub fn is_any(&self) -> bool {
        self.identifier.eq_ignore_ascii_case(special::ANY)
    }

    pub fn is_agnostic(&self) -> bool {
        self.identifier.eq_ignore_ascii_case(special::AGNOSTIC)
    }

    pub fn is_unsupported(&self) -> bool {
        self.identifier.eq_ignore_ascii_case(special::UNSUPPORTED)
    }

    /// True for every framework except the three sentinels.
    pub fn is_specific(&self) -> bool {
        !self.is_any() && !self.is_agnostic() && !self.is_unsupported()
    }

    /// A portable framework carries a `+`-joined member list as its profile.
    pub fn is_portable(&self) -> bool {
        self.identifier.eq_ignore_ascii_case(identifiers::PORTABLE) && self.has_profile()
    }

    pub fn is_platform_specific(&self) -> bool {
        !self.platform.is_empty()
    }

    pub fn has_profile(&self) -> bool {
        !self.profile.is_empty()
    }

    /// True when the profile lists more than one member.
    pub fn has_member_separator(&self) -> bool {
        self.profile.contains(PORTABLE_MEMBER_SEPARATOR)
    }

    /// Identifier-only equality, ignoring case and everything else.
    pub fn name_eq(&self, other: &Framework) -> bool {
        self.identifier.eq_ignore_ascii_case(&other.identifier)
    }

    /// Identifier, profile and platform all match; versions may differ.
    pub fn same_except_for_version(&self, other: &Framework) -> bool {
        self.name_eq(other)
            && self.profile.eq_ignore_ascii_case(&other.profile)
            && self.platform.eq_ignore_ascii_case(&other.platform)
    }

    /// Clone with a different identifier.
    pub fn with_identifier(&self, identifier: impl Into<String>) -> Framework {
        Framework {
            identifier: identifier.into(),
            ..self.clone()
        }
    }

    /// Clone with a different version.
    pub fn with_version(&self, version: FrameworkVersion) -> Framework {
        Framework {
            version,
            ..self.clone()
        }
    }

    /// Clone with a different profile.
    pub fn replace_profile(&self, profile: impl Into<String>) -> Framework {
        Framework {
            profile: profile.into(),
            ..self.clone()
        }
    }

    /// Total order over descriptors, consistent with equality: lowercase
    /// identifier, version, lowercase profile, lowercase platform, platform
    /// version.
    pub fn canonical_cmp(&self, other: &Framework) -> Ordering {
        cmp_ignore_case(&self.identifier, &other.identifier)
            .then_with(|| self.version.cmp(&other.version))
            .then_with(|| cmp_ignore_case(&self.profile, &other.profile))
            .then_with(|| cmp_ignore_case(&self.platform, &other.platform))
            .then_with(|| self.platform_version.cmp(&other.platform_version))
    }
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
}

fn hash_ignore_case<H: Hasher>(value: &str, state: &mut H) {
    for byte in value.bytes() {
        state.write_u8(byte.to_ascii_lowercase());
    }
    state.write_u8(0xff);
}

impl PartialEq for Framework {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version
            && self.platform_version == other.platform_version
            && self.same_except_for_version(other)
    }
}

impl Eq for Framework {}

impl Hash for Framework {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_ignore_case(&self.identifier, state);
        self.version.hash(state);
        hash_ignore_case(&self.profile, state);
        hash_ignore_case(&self.platform, state);
        self.platform_version.hash(state);
    }
}

impl fmt::Display for Framework {
    /// Long form, e.g. `.NETFramework,Version=v4.5,Profile=Client`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_specific() {
            return f.write_str(&self.identifier);
        }
        write!(f, "{},Version=v{}", self.identifier, self.version)?;
        if self.has_profile() {
            write!(f, ",Profile={}", self.profile)?;
        }
        if self.is_platform_specific() {
            write!(f, "-{}", self.platform)?;
            if !self.platform_version.is_empty() {
                write!(f, "{}", self.platform_version)?;
            }
        }
        Ok(())
    }
}

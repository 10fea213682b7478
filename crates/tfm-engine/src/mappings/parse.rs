//! Short folder name parsing (`net45`, `portable-net45+win8`, `net6.0-ios14.0`).

use std::borrow::Cow;

use tfm_core::constants::{identifiers, PORTABLE_MEMBER_SEPARATOR};
use tfm_core::{Framework, FrameworkError, FrameworkVersion};

use super::provider::{DefaultMappingProvider, PortableMember};

/// Parse a short folder name or a long `Identifier,Version=v4.5` name.
/// Anything that does not parse is [`Framework::unsupported`].
pub fn parse_folder(folder: &str, mappings: &DefaultMappingProvider) -> Framework {
    try_parse_folder(folder, mappings).unwrap_or_else(|e| {
        tracing::trace!(folder, error = %e, "unparsable framework folder");
        Framework::unsupported().clone()
    })
}

pub fn try_parse_folder(
    folder: &str,
    mappings: &DefaultMappingProvider,
) -> Result<Framework, FrameworkError> {
    let unescaped = unescape(folder);
    let name = unescaped.trim();
    let invalid = || FrameworkError::InvalidFolderName {
        input: folder.to_string(),
    };

    if name.contains(',') {
        return parse_framework_name(name, mappings);
    }
    if let Some(special) = special_framework(name) {
        return Ok(special.clone());
    }
    // bare `dotnet` is the first dotnet generation
    if name.eq_ignore_ascii_case("dotnet") {
        return Ok(Framework::new(
            identifiers::NET_PLATFORM,
            FrameworkVersion::from_major_minor(5, 0),
        ));
    }

    let Some(raw) = RawFolder::split(name) else {
        return deprecated_framework(name).ok_or_else(invalid);
    };

    let identifier = mappings.identifier_for(raw.identifier).ok_or_else(invalid)?;
    let version = FrameworkVersion::from_folder_digits(raw.version)?;

    if identifier.eq_ignore_ascii_case(identifiers::PORTABLE) {
        if raw.profile.is_empty() {
            return Err(FrameworkError::InvalidPortableProfile {
                profile: String::new(),
                reason: "a portable framework needs at least one member".to_string(),
            });
        }
        mappings.portable_member_list(raw.profile)?;
        return Ok(Framework::with_profile(
            identifiers::PORTABLE,
            version,
            raw.profile,
        ));
    }

    let identifier = if identifier.eq_ignore_ascii_case(identifiers::NET) && version.major >= 5 {
        identifiers::NET_CORE_APP
    } else {
        identifier
    };

    if identifier.eq_ignore_ascii_case(identifiers::NET_CORE_APP)
        && version.major >= 5
        && !raw.profile.is_empty()
    {
        let (platform, platform_version) = split_platform(raw.profile).ok_or_else(invalid)?;
        return Ok(Framework::with_platform(
            identifier,
            version,
            platform,
            platform_version,
        ));
    }

    let profile = mappings.profile_for(raw.profile).unwrap_or(raw.profile);
    Ok(Framework::with_profile(identifier, version, profile))
}

/// Members of a `+`-delimited portable profile. Every member must be a
/// specific, profile-less, non-portable framework.
pub(crate) fn parse_portable_members(
    profile: &str,
    mappings: &DefaultMappingProvider,
) -> Result<Vec<PortableMember>, FrameworkError> {
    let reject = |reason: String| FrameworkError::InvalidPortableProfile {
        profile: profile.to_string(),
        reason,
    };

    profile
        .split(PORTABLE_MEMBER_SEPARATOR)
        .map(str::trim)
        .map(|name| {
            if name.is_empty() {
                return Err(reject("empty member".to_string()));
            }
            let framework = try_parse_folder(name, mappings)
                .map_err(|e| reject(format!("member '{name}': {e}")))?;
            if !framework.is_specific() || framework.is_portable() {
                return Err(reject(format!("member '{name}' is not a concrete framework")));
            }
            if framework.has_profile() || framework.is_platform_specific() {
                return Err(reject(format!("member '{name}' carries its own profile")));
            }
            let optional = mappings.is_optional_portable(framework.identifier());
            Ok(PortableMember {
                framework,
                optional,
            })
        })
        .collect()
}

/// `Identifier[,Version=vX.Y][,Profile=P]`
fn parse_framework_name(
    name: &str,
    mappings: &DefaultMappingProvider,
) -> Result<Framework, FrameworkError> {
    let mut parts = name.split(',').map(str::trim);
    let raw_identifier = parts.next().unwrap_or_default();
    if let Some(special) = special_framework(raw_identifier) {
        return Ok(special.clone());
    }
    if raw_identifier.is_empty() {
        return Err(FrameworkError::InvalidFolderName {
            input: name.to_string(),
        });
    }

    let identifier = mappings
        .identifier_for(raw_identifier)
        .unwrap_or(raw_identifier);
    let mut version = FrameworkVersion::EMPTY;
    let mut profile = "";

    for part in parts {
        let Some((key, value)) = part.split_once('=') else {
            return Err(FrameworkError::InvalidFolderName {
                input: name.to_string(),
            });
        };
        let value = value.trim();
        match key.trim().to_ascii_lowercase().as_str() {
            "version" => {
                let digits = value.strip_prefix(['v', 'V']).unwrap_or(value);
                version = FrameworkVersion::parse(digits)?;
            }
            "profile" => profile = value,
            _ => {}
        }
    }

    if identifier.eq_ignore_ascii_case(identifiers::PORTABLE) && profile.contains('-') {
        return Err(FrameworkError::InvalidPortableProfile {
            profile: profile.to_string(),
            reason: "portable profiles cannot contain '-'".to_string(),
        });
    }

    Ok(Framework::with_profile(identifier, version, profile))
}

/// A short folder name split into its three textual parts.
struct RawFolder<'a> {
    identifier: &'a str,
    version: &'a str,
    profile: &'a str,
}

impl<'a> RawFolder<'a> {
    /// `letters-and-dots` `digits-and-dots` [`-profile`]
    fn split(name: &'a str) -> Option<Self> {
        let id_end = name
            .bytes()
            .position(|b| !(b.is_ascii_alphabetic() || b == b'.'))
            .unwrap_or(name.len());
        if id_end == 0 {
            return None;
        }

        let rest = &name[id_end..];
        let version_end = rest
            .bytes()
            .position(|b| !(b.is_ascii_digit() || b == b'.'))
            .unwrap_or(rest.len());
        let tail = &rest[version_end..];

        let profile = if tail.is_empty() {
            ""
        } else {
            let profile = tail.strip_prefix('-')?;
            if profile.is_empty() || !profile.bytes().all(is_profile_byte) {
                return None;
            }
            profile
        };

        Some(Self {
            identifier: &name[..id_end],
            version: &rest[..version_end],
            profile,
        })
    }
}

fn is_profile_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'.' | b'+' | b'-')
}

fn special_framework(name: &str) -> Option<&'static Framework> {
    [
        Framework::any(),
        Framework::agnostic(),
        Framework::unsupported(),
    ]
    .into_iter()
    .find(|special| special.identifier().eq_ignore_ascii_case(name))
}

/// Bare version numbers that historically meant .NET Framework.
fn deprecated_framework(name: &str) -> Option<Framework> {
    let version = match name {
        "45" | "4.5" => FrameworkVersion::from_major_minor(4, 5),
        "40" | "4.0" | "4" => FrameworkVersion::from_major_minor(4, 0),
        "35" | "3.5" => FrameworkVersion::from_major_minor(3, 5),
        "20" | "2" | "2.0" => FrameworkVersion::from_major_minor(2, 0),
        _ => return None,
    };
    Some(Framework::new(identifiers::NET, version))
}

/// `ios14.0` -> (`ios`, 14.0)
fn split_platform(suffix: &str) -> Option<(&str, FrameworkVersion)> {
    let letters = suffix
        .bytes()
        .position(|b| !b.is_ascii_alphabetic())
        .unwrap_or(suffix.len());
    if letters == 0 {
        return None;
    }
    let (platform, version) = suffix.split_at(letters);
    let version = if version.is_empty() {
        FrameworkVersion::EMPTY
    } else {
        FrameworkVersion::parse(version).ok()?
    };
    Some((platform, version))
}

/// Decode `%XX` escapes, e.g. `%2B` in package paths.
fn unescape(input: &str) -> Cow<'_, str> {
    if !input.contains('%') {
        return Cow::Borrowed(input);
    }

    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                out.push((hi << 4) | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }

    String::from_utf8(out).map_or(Cow::Borrowed(input), Cow::Owned)
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

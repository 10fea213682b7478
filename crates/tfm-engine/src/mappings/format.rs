//! Short folder name formatting, the inverse of [`super::parse_folder`].

use tfm_core::constants::{identifiers, PORTABLE_MEMBER_SEPARATOR};
use tfm_core::{Framework, FrameworkVersion};

use super::defaults::{DOTTED_VERSION_IDENTIFIERS, SINGLE_DIGIT_VERSION_IDENTIFIERS};
use super::provider::DefaultMappingProvider;

/// Lowercase short folder name, e.g. `net45`, `win81`, `netstandard1.3`,
/// `portable-net45+win8`, `net6.0-ios14.0`.
pub fn short_folder_name(framework: &Framework, mappings: &DefaultMappingProvider) -> String {
    if !framework.is_specific() {
        return framework.identifier().to_ascii_lowercase();
    }

    let identifier = framework.identifier();
    if framework.is_portable() {
        return format!("portable-{}", portable_profile(framework.profile(), mappings));
    }
    if identifier.eq_ignore_ascii_case(identifiers::NET_PLATFORM)
        && framework.version() == FrameworkVersion::from_major_minor(5, 0)
    {
        return "dotnet".to_string();
    }

    let mut name = if is_net5_era(framework) {
        format!("net{}", version_string(identifier, framework.version()))
    } else {
        let short = mappings
            .short_identifier(identifier)
            .map(str::to_string)
            .unwrap_or_else(|| letters_and_digits(identifier));
        format!("{short}{}", version_string(identifier, framework.version()))
    };

    if framework.is_platform_specific() {
        name.push('-');
        name.push_str(framework.platform());
        if !framework.platform_version().is_empty() {
            name.push_str(&framework.platform_version().to_string());
        }
    } else if framework.has_profile() {
        name.push('-');
        name.push_str(
            mappings
                .short_profile(framework.profile())
                .unwrap_or(framework.profile()),
        );
    }

    name.to_ascii_lowercase()
}

fn is_net5_era(framework: &Framework) -> bool {
    framework
        .identifier()
        .eq_ignore_ascii_case(identifiers::NET_CORE_APP)
        && framework.version().major >= 5
}

/// Version part of a short name: dotless (`451`) unless a component exceeds
/// nine or the family always uses dots. Trailing zero components are dropped
/// down to one component for single-digit families and two otherwise.
fn version_string(identifier: &str, version: FrameworkVersion) -> String {
    if version.is_empty() {
        return String::new();
    }

    let min_parts = if contains_ignore_case(SINGLE_DIGIT_VERSION_IDENTIFIERS, identifier) {
        1
    } else {
        2
    };
    let mut parts = version.components().to_vec();
    while parts.len() > min_parts && parts.last() == Some(&0) {
        parts.pop();
    }

    let dotted = contains_ignore_case(DOTTED_VERSION_IDENTIFIERS, identifier)
        || parts.iter().any(|&p| p > 9);
    if dotted {
        if parts.len() < 2 {
            parts.push(0);
        }
        parts
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(".")
    } else {
        parts.iter().map(u32::to_string).collect()
    }
}

/// Required members as short names, sorted; all members when every one is
/// optional. Unparsable profiles are returned verbatim.
fn portable_profile(profile: &str, mappings: &DefaultMappingProvider) -> String {
    let Ok(members) = mappings.portable_member_list(profile) else {
        return profile.to_string();
    };

    let required: Vec<_> = members.iter().filter(|m| !m.optional).collect();
    let chosen: Vec<_> = if required.is_empty() {
        members.iter().collect()
    } else {
        required
    };

    let mut names: Vec<String> = chosen
        .iter()
        .map(|m| short_folder_name(&m.framework, mappings))
        .collect();
    names.sort();
    names.join(PORTABLE_MEMBER_SEPARATOR.to_string().as_str())
}

fn letters_and_digits(identifier: &str) -> String {
    identifier
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

fn contains_ignore_case(list: &[&str], identifier: &str) -> bool {
    list.iter().any(|known| known.eq_ignore_ascii_case(identifier))
}

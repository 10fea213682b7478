//! Built-in framework mapping tables.
//!
//! Frameworks are plain values here; ranges are validated when the
//! provider indexes them (see `provider.rs`).

use tfm_core::constants::identifiers as id;
use tfm_core::{Framework, FrameworkVersion};

const EMPTY: FrameworkVersion = FrameworkVersion::EMPTY;
const MAX: FrameworkVersion = FrameworkVersion::MAX;

const fn v(major: u32, minor: u32) -> FrameworkVersion {
    FrameworkVersion::from_major_minor(major, minor)
}

const fn v3(major: u32, minor: u32, build: u32) -> FrameworkVersion {
    FrameworkVersion::new(major, minor, build, 0)
}

fn fw(identifier: &str, version: FrameworkVersion) -> Framework {
    Framework::new(identifier, version)
}

fn fwp(identifier: &str, version: FrameworkVersion, profile: &str) -> Framework {
    Framework::with_profile(identifier, version, profile)
}

/// Alternate spellings resolved to a long identifier.
pub(crate) const IDENTIFIER_SYNONYMS: &[(&str, &str)] = &[
    ("NETFramework", id::NET),
    (".NET", id::NET),
    ("NETCore", id::NET_CORE),
    ("NETPortable", id::PORTABLE),
    ("asp.net", id::ASP_NET),
    ("asp.netcore", id::ASP_NET_CORE),
    ("Xamarin.PlayStationThree", id::XAMARIN_PLAYSTATION3),
    ("XamarinPlayStationThree", id::XAMARIN_PLAYSTATION3),
    ("Xamarin.PlayStationFour", id::XAMARIN_PLAYSTATION4),
    ("XamarinPlayStationFour", id::XAMARIN_PLAYSTATION4),
    ("XamarinPlayStationVita", id::XAMARIN_PLAYSTATION_VITA),
];

/// `(long identifier, short folder identifier)`.
pub(crate) const IDENTIFIER_SHORT_NAMES: &[(&str, &str)] = &[
    (id::NET_PLATFORM, "dotnet"),
    (id::NET, "net"),
    (id::NET_MICRO, "netmf"),
    (id::SILVERLIGHT, "sl"),
    (id::PORTABLE, "portable"),
    (id::WINDOWS_PHONE, "wp"),
    (id::WINDOWS_PHONE_APP, "wpa"),
    (id::WINDOWS, "win"),
    (id::ASP_NET, "aspnet"),
    (id::ASP_NET_CORE, "aspnetcore"),
    (id::NATIVE, "native"),
    (id::MONO_ANDROID, "monoandroid"),
    (id::MONO_TOUCH, "monotouch"),
    (id::MONO_MAC, "monomac"),
    (id::XAMARIN_IOS, "xamarinios"),
    (id::XAMARIN_MAC, "xamarinmac"),
    (id::XAMARIN_PLAYSTATION3, "xamarinpsthree"),
    (id::XAMARIN_PLAYSTATION4, "xamarinpsfour"),
    (id::XAMARIN_PLAYSTATION_VITA, "xamarinpsvita"),
    (id::XAMARIN_WATCH_OS, "xamarinwatchos"),
    (id::XAMARIN_TV_OS, "xamarintvos"),
    (id::XAMARIN_XBOX360, "xamarinxboxthreesixty"),
    (id::XAMARIN_XBOX_ONE, "xamarinxboxone"),
    (id::DNX, "dnx"),
    (id::DNX_CORE, "dnxcore"),
    (id::NET_CORE, "netcore"),
    (id::WINRT, "winrt"),
    (id::UAP, "uap"),
    (id::NET_STANDARD, "netstandard"),
    (id::NET_STANDARD_APP, "netstandardapp"),
    (id::NET_CORE_APP, "netcoreapp"),
    (id::TIZEN, "tizen"),
];

/// `(identifier, short profile, long profile)`.
pub(crate) const PROFILE_SHORT_NAMES: &[(&str, &str, &str)] = &[
    (id::NET, "Client", "Client"),
    (id::NET, "CF", "CompactFramework"),
    (id::NET, "Full", ""),
    (id::SILVERLIGHT, "WP", "WindowsPhone"),
    (id::SILVERLIGHT, "WP71", "WindowsPhone71"),
];

/// `(identifier, profile, equivalent profile)`, applied both ways.
pub(crate) const EQUIVALENT_PROFILES: &[(&str, &str, &str)] = &[
    (id::NET, "Client", ""),
    (id::NET, "Full", ""),
    (id::SILVERLIGHT, "WindowsPhone71", "WindowsPhone"),
    (id::WINDOWS_PHONE, "WindowsPhone71", "WindowsPhone"),
];

/// `(subset, superset)` identifiers.
pub(crate) const SUBSET_IDENTIFIERS: &[(&str, &str)] = &[
    (id::NET, id::DNX),
    (id::NET_PLATFORM, id::DNX_CORE),
    (id::NET_STANDARD, id::NET_STANDARD_APP),
];

/// Tie-break order for otherwise ambiguous nearest matches, highest first.
pub(crate) const FRAMEWORK_PRECEDENCE: &[&str] =
    &[id::NET, id::NET_CORE, id::WINDOWS, id::WINDOWS_PHONE_APP];

/// Which spelling of an equivalent framework survives set reduction,
/// highest first.
pub(crate) const EQUIVALENT_FRAMEWORK_PRECEDENCE: &[&str] = &[
    id::WINDOWS,
    id::NET_CORE,
    id::WINRT,
    id::WINDOWS_PHONE,
    id::SILVERLIGHT,
];

/// `(platform, legacy identifier)`: a `.NETCoreApp` 6.0+ framework with this
/// platform also consumes the legacy family at its platform version.
pub(crate) const PLATFORM_LEGACY_FAMILIES: &[(&str, &str)] =
    &[("android", id::MONO_ANDROID), ("tizen", id::TIZEN)];

/// First `.NETCoreApp` version whose platforms map onto legacy families.
pub(crate) const PLATFORM_LEGACY_MIN_VERSION: FrameworkVersion = v(6, 0);

/// Portable members that never restrict a portable profile.
pub(crate) const OPTIONAL_PORTABLE_IDENTIFIERS: &[&str] = &[
    id::MONO_ANDROID,
    id::MONO_TOUCH,
    id::MONO_MAC,
    id::XAMARIN_IOS,
    id::XAMARIN_MAC,
    id::XAMARIN_PLAYSTATION3,
    id::XAMARIN_PLAYSTATION4,
    id::XAMARIN_PLAYSTATION_VITA,
    id::XAMARIN_WATCH_OS,
    id::XAMARIN_TV_OS,
    id::XAMARIN_XBOX360,
    id::XAMARIN_XBOX_ONE,
];

/// Families whose short names drop a trailing `.0` minor version (`win8`).
pub(crate) const SINGLE_DIGIT_VERSION_IDENTIFIERS: &[&str] =
    &[id::WINDOWS, id::WINDOWS_PHONE, id::SILVERLIGHT];

/// Families whose short names always use dotted versions (`netstandard1.3`).
pub(crate) const DOTTED_VERSION_IDENTIFIERS: &[&str] = &[
    id::NET_PLATFORM,
    id::NET_STANDARD,
    id::NET_STANDARD_APP,
    id::NET_CORE_APP,
];

/// Bidirectional framework equivalences.
pub(crate) fn equivalent_frameworks() -> Vec<(Framework, Framework)> {
    vec![
        (fw(id::UAP, EMPTY), fw(id::UAP, v(10, 0))),
        (fw(id::WINDOWS, EMPTY), fw(id::WINDOWS, v(8, 0))),
        (fw(id::WINDOWS, v(8, 0)), fw(id::NET_CORE, v(4, 5))),
        (fw(id::NET_CORE, v(4, 5)), fw(id::WINRT, v(4, 5))),
        (fw(id::NET_CORE, EMPTY), fw(id::NET_CORE, v(4, 5))),
        (fw(id::WINRT, EMPTY), fw(id::WINRT, v(4, 5))),
        (fw(id::WINDOWS, v(8, 1)), fw(id::NET_CORE, v3(4, 5, 1))),
        (fw(id::WINDOWS_PHONE, EMPTY), fw(id::WINDOWS_PHONE, v(7, 0))),
        (
            fw(id::WINDOWS_PHONE, v(7, 0)),
            fwp(id::SILVERLIGHT, v(3, 0), "WindowsPhone"),
        ),
        (
            fw(id::WINDOWS_PHONE, v(7, 1)),
            fwp(id::SILVERLIGHT, v(4, 0), "WindowsPhone71"),
        ),
        (
            fw(id::WINDOWS_PHONE, v(8, 0)),
            fwp(id::SILVERLIGHT, v(8, 0), "WindowsPhone"),
        ),
        (
            fw(id::WINDOWS_PHONE, v(8, 1)),
            fwp(id::SILVERLIGHT, v(8, 1), "WindowsPhone"),
        ),
        (fw(id::WINDOWS_PHONE_APP, EMPTY), fw(id::WINDOWS_PHONE_APP, v(8, 1))),
        (fw(id::DNX, EMPTY), fw(id::DNX, v(4, 5))),
        (fw(id::DNX_CORE, EMPTY), fw(id::DNX_CORE, v(5, 0))),
        (fw(id::NET_PLATFORM, EMPTY), fw(id::NET_PLATFORM, v(5, 0))),
        (fw(id::ASP_NET, EMPTY), fw(id::ASP_NET, v(5, 0))),
        (fw(id::ASP_NET_CORE, EMPTY), fw(id::ASP_NET_CORE, v(5, 0))),
        (fw(id::DNX, v(4, 5)), fw(id::ASP_NET, v(5, 0))),
        (fw(id::DNX_CORE, v(5, 0)), fw(id::ASP_NET_CORE, v(5, 0))),
    ]
}

/// A one-way mapping before range validation:
/// `(target min, target max, supported min, supported max)`.
pub(crate) type RawMapping = (Framework, Framework, Framework, Framework);

/// Every version from `from` upwards supports `[family@0.0, up_to]`.
fn generation(from: Framework, up_to: Framework) -> RawMapping {
    let target_max = from.with_version(MAX);
    let supported_min = up_to.with_version(EMPTY);
    (from, target_max, supported_min, up_to)
}

fn dotnet(minor: u32) -> Framework {
    fw(id::NET_PLATFORM, v(5, minor))
}

fn netstandard(major: u32, minor: u32) -> Framework {
    fw(id::NET_STANDARD, v(major, minor))
}

/// One-way compatibility mappings.
pub(crate) fn compatibility_mappings() -> Vec<RawMapping> {
    let mut mappings = vec![
        // uap consumes win81, wpa81 and netcore50
        (
            fw(id::UAP, EMPTY),
            fw(id::UAP, MAX),
            fw(id::WINDOWS, EMPTY),
            fw(id::WINDOWS, v(8, 1)),
        ),
        (
            fw(id::UAP, EMPTY),
            fw(id::UAP, MAX),
            fw(id::WINDOWS_PHONE_APP, EMPTY),
            fw(id::WINDOWS_PHONE_APP, v(8, 1)),
        ),
        (
            fw(id::UAP, EMPTY),
            fw(id::UAP, MAX),
            fw(id::NET_CORE, v(5, 0)),
            fw(id::NET_CORE, v(5, 0)),
        ),
        // win consumes winrt45
        (
            fw(id::WINDOWS, EMPTY),
            fw(id::WINDOWS, MAX),
            fw(id::WINRT, EMPTY),
            fw(id::WINRT, v(4, 5)),
        ),
        // dotnet generations
        generation(fw(id::DNX_CORE, EMPTY), dotnet(6)),
        generation(fw(id::UAP, EMPTY), dotnet(4)),
        generation(fw(id::NET_CORE, v(5, 0)), dotnet(4)),
        generation(fw(id::WINDOWS_PHONE_APP, v(8, 1)), dotnet(3)),
        generation(fw(id::WINDOWS_PHONE, v(8, 0)), dotnet(1)),
        generation(fw(id::NET, v(4, 5)), dotnet(2)),
        generation(fw(id::NET, v3(4, 5, 1)), dotnet(3)),
        generation(fw(id::NET, v(4, 6)), dotnet(4)),
        generation(fw(id::NET, v3(4, 6, 1)), dotnet(5)),
        generation(fw(id::NET, v3(4, 6, 2)), dotnet(6)),
        generation(fw(id::NET_CORE, v(4, 5)), dotnet(2)),
        generation(fw(id::NET_CORE, v3(4, 5, 1)), dotnet(3)),
        // netstandard generations
        generation(fw(id::NET, v(4, 5)), netstandard(1, 1)),
        generation(fw(id::NET, v3(4, 5, 1)), netstandard(1, 2)),
        generation(fw(id::NET, v(4, 6)), netstandard(1, 3)),
        generation(fw(id::NET, v3(4, 6, 1)), netstandard(2, 0)),
        generation(fw(id::NET_CORE, v(4, 5)), netstandard(1, 1)),
        generation(fw(id::NET_CORE, v3(4, 5, 1)), netstandard(1, 2)),
        generation(fw(id::NET_CORE, v(5, 0)), netstandard(1, 4)),
        generation(fw(id::WINDOWS_PHONE, v(8, 0)), netstandard(1, 0)),
        generation(fw(id::WINDOWS_PHONE_APP, v(8, 1)), netstandard(1, 2)),
        generation(fw(id::UAP, EMPTY), netstandard(1, 4)),
        generation(fw(id::UAP, v3(10, 0, 15064)), netstandard(2, 0)),
        generation(fw(id::DNX_CORE, EMPTY), netstandard(1, 5)),
        generation(fw(id::NET_CORE_APP, v(1, 0)), netstandard(1, 6)),
        generation(fw(id::NET_CORE_APP, v(1, 1)), netstandard(1, 7)),
        generation(fw(id::NET_CORE_APP, v(2, 0)), netstandard(2, 0)),
        generation(fw(id::NET_CORE_APP, v(3, 0)), netstandard(2, 1)),
        generation(fw(id::TIZEN, v(3, 0)), netstandard(1, 6)),
        generation(fw(id::TIZEN, v(4, 0)), netstandard(2, 0)),
        generation(fw(id::TIZEN, v(6, 0)), netstandard(2, 1)),
    ];

    // Xamarin and Mono families consume every dotnet and netstandard generation
    // they shipped alongside.
    for family in OPTIONAL_PORTABLE_IDENTIFIERS {
        mappings.push(generation(fw(family, EMPTY), dotnet(5)));
        mappings.push(generation(fw(family, EMPTY), netstandard(2, 1)));
    }

    mappings
}

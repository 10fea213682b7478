//! Short folder names: parsing into descriptors and formatting back.

use tfm_core::constants::identifiers;
use tfm_core::errors::error_code::{self, TfmErrorCode};
use tfm_core::{Framework, FrameworkError, FrameworkVersion};
use tfm_engine::{parse_folder, short_folder_name, try_parse_folder, DefaultMappingProvider};

// ─── Helpers ───────────────────────────────────────────────────────────────

fn parse(name: &str) -> Framework {
    parse_folder(name, &DefaultMappingProvider::shared())
}

fn try_parse(name: &str) -> Result<Framework, FrameworkError> {
    try_parse_folder(name, &DefaultMappingProvider::shared())
}

fn format(framework: &Framework) -> String {
    short_folder_name(framework, &DefaultMappingProvider::shared())
}

fn v(major: u32, minor: u32) -> FrameworkVersion {
    FrameworkVersion::from_major_minor(major, minor)
}

// ═══════════════════════════════════════════════════════════════════════════
// PARSE
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn dotless_and_dotted_versions() {
    assert_eq!(parse("net45"), Framework::new(identifiers::NET, v(4, 5)));
    assert_eq!(parse("net4.5"), Framework::new(identifiers::NET, v(4, 5)));
    assert_eq!(
        parse("net451"),
        Framework::new(identifiers::NET, FrameworkVersion::new(4, 5, 1, 0))
    );
    assert_eq!(parse("netstandard1.3"), Framework::new(identifiers::NET_STANDARD, v(1, 3)));
    assert_eq!(parse("win8"), Framework::new(identifiers::WINDOWS, v(8, 0)));
    assert_eq!(parse("win"), Framework::new(identifiers::WINDOWS, FrameworkVersion::EMPTY));
}

#[test]
fn parsing_ignores_case() {
    assert_eq!(parse("NET45"), parse("net45"));
    assert_eq!(parse("Portable-Net45+Win8"), parse("portable-net45+win8"));
    assert_eq!(parse("ANY"), *Framework::any());
}

#[test]
fn long_names_with_version_and_profile() {
    assert_eq!(parse(".NETFramework,Version=v4.5"), parse("net45"));
    assert_eq!(
        parse(".NETFramework,Version=v4.0,Profile=Client"),
        Framework::with_profile(identifiers::NET, v(4, 0), "Client")
    );
    assert_eq!(parse("NETCore, Version=v4.5"), parse("netcore45"));
}

#[test]
fn short_profiles_expand() {
    assert_eq!(parse("net40-client").profile(), "Client");
    assert_eq!(parse("net40-cf").profile(), "CompactFramework");
    assert_eq!(parse("sl3-wp").profile(), "WindowsPhone");
    assert_eq!(parse("net45-full"), parse("net45"));
}

#[test]
fn synonyms_and_dotted_identifiers() {
    assert_eq!(parse("xamarin.ios10"), Framework::new(identifiers::XAMARIN_IOS, v(1, 0)));
    assert_eq!(parse("xamarinios"), Framework::new(identifiers::XAMARIN_IOS, FrameworkVersion::EMPTY));
    assert_eq!(parse("NETFramework4.5"), parse("net45"));
}

#[test]
fn special_names() {
    assert_eq!(parse("any"), *Framework::any());
    assert_eq!(parse("Agnostic"), *Framework::agnostic());
    assert_eq!(parse("unsupported"), *Framework::unsupported());
    assert_eq!(parse("dotnet"), Framework::new(identifiers::NET_PLATFORM, v(5, 0)));
    assert_eq!(parse("dotnet5.4"), Framework::new(identifiers::NET_PLATFORM, v(5, 4)));
}

#[test]
fn bare_version_numbers_mean_dotnet_framework() {
    assert_eq!(parse("45"), parse("net45"));
    assert_eq!(parse("35"), parse("net35"));
    assert_eq!(parse("20"), parse("net20"));
}

#[test]
fn net5_era_maps_to_core_app_with_platforms() {
    assert_eq!(parse("net5.0"), Framework::new(identifiers::NET_CORE_APP, v(5, 0)));
    assert_eq!(parse("net50"), parse("net5.0"));
    assert_eq!(
        parse("net6.0-ios14.0"),
        Framework::with_platform(identifiers::NET_CORE_APP, v(6, 0), "ios", v(14, 0))
    );
    let windows = parse("net6.0-windows10.0.19041");
    assert_eq!(windows.platform(), "windows");
    assert_eq!(windows.platform_version(), FrameworkVersion::new(10, 0, 19041, 0));
    assert!(parse("net6.0-android").platform_version().is_empty());
}

#[test]
fn portable_profiles_are_kept_verbatim() {
    let portable = parse("portable-net45+win8");
    assert!(portable.is_portable());
    assert_eq!(portable.profile(), "net45+win8");
    assert!(portable.version().is_empty());
}

#[test]
fn escaped_separators_are_decoded() {
    assert_eq!(parse("portable-net45%2Bwin8"), parse("portable-net45+win8"));
}

#[test]
fn malformed_names_are_unsupported() {
    for name in ["foo45", "", "net45-", "net4x5", "net6.0-14"] {
        assert_eq!(parse(name), *Framework::unsupported(), "{name:?}");
    }
}

#[test]
fn malformed_names_carry_error_codes() {
    let err = try_parse("foo45").unwrap_err();
    assert_eq!(err.error_code(), error_code::INVALID_FOLDER_NAME);

    let err = try_parse(".NETFramework,Version=vX").unwrap_err();
    assert_eq!(err.error_code(), error_code::INVALID_VERSION);

    let err = try_parse("net45123").unwrap_err();
    assert_eq!(err.error_code(), error_code::INVALID_VERSION);
    assert_eq!(parse("net45123"), *Framework::unsupported());
}

#[test]
fn invalid_portable_members_are_rejected() {
    for name in [
        "portable",
        "portable-net45+any",
        "portable-net45+net40-client",
        "portable-net45++win8",
        "portable-net45+bogus1",
    ] {
        let err = try_parse(name).unwrap_err();
        assert_eq!(err.error_code(), error_code::INVALID_PORTABLE_PROFILE, "{name}");
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// FORMAT
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn short_names_round_trip() {
    for name in [
        "net45",
        "net451",
        "net48",
        "net40-client",
        "net40-cf",
        "win8",
        "win81",
        "wp8",
        "wp71",
        "wpa81",
        "sl5",
        "sl3-wp",
        "netcore45",
        "netcore50",
        "uap10.0",
        "uap10.0.15064",
        "dnx452",
        "dnxcore50",
        "aspnet50",
        "dotnet",
        "dotnet5.4",
        "netstandard",
        "netstandard1.3",
        "netstandard2.0",
        "netcoreapp3.1",
        "net5.0",
        "net6.0-windows",
        "net6.0-ios14.0",
        "monoandroid",
        "xamarinios",
        "tizen40",
        "portable-net45+win8",
        "any",
        "agnostic",
        "unsupported",
    ] {
        assert_eq!(format(&parse(name)), name);
    }
}

#[test]
fn long_forms_format_short() {
    assert_eq!(format(&parse(".NETFramework,Version=v4.5")), "net45");
    assert_eq!(format(&parse("NET4.5")), "net45");
    assert_eq!(format(&parse("xamarin.ios10")), "xamarinios10");
    assert_eq!(format(&parse("net50")), "net5.0");
}

#[test]
fn portable_members_are_sorted_short_names() {
    assert_eq!(
        format(&parse("portable-net45+wp80+win8+wpa81+aspnetcore50")),
        "portable-aspnetcore50+net45+win8+wp8+wpa81"
    );
}

#[test]
fn optional_portable_members_are_dropped() {
    assert_eq!(
        format(&parse(
            "portable-windows8%2Bnet40%2Bwp8%2Bsl5%2BMonoAndroid%2BMonoTouch"
        )),
        "portable-net40+sl5+win8+wp8"
    );
    assert_eq!(
        format(&parse("portable-monoandroid+monotouch")),
        "portable-monoandroid+monotouch"
    );
}

//! Nearest-match selection and set reduction over the built-in mappings.

use tfm_core::config::{CompatibilityRule, MappingsConfig};
use tfm_core::errors::error_code::{self, TfmErrorCode};
use tfm_core::{ConfigError, Framework, TfmConfig};
use tfm_engine::{parse_folder, DefaultMappingProvider, FrameworkReducer};

// ─── Helpers ───────────────────────────────────────────────────────────────

fn fw(name: &str) -> Framework {
    parse_folder(name, &DefaultMappingProvider::shared())
}

fn fws(names: &[&str]) -> Vec<Framework> {
    names.iter().map(|name| fw(name)).collect()
}

fn nearest(reducer: &FrameworkReducer, target: &str, candidates: &[&str]) -> Option<Framework> {
    reducer.get_nearest(&fw(target), &fws(candidates))
}

fn assert_nearest(target: &str, candidates: &[&str], expected: &str) {
    let reducer = FrameworkReducer::with_defaults();
    assert_eq!(
        nearest(&reducer, target, candidates),
        Some(fw(expected)),
        "get_nearest({target}, {candidates:?})"
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// SCENARIOS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn dominated_candidates_lose() {
    assert_nearest("net46", &["netstandard1.0", "net45", "any"], "net45");
}

#[test]
fn exact_member_is_returned() {
    assert_nearest("net45", &["net40", "net403", "net45"], "net45");
}

#[test]
fn only_the_compatible_unrelated_candidate_wins() {
    assert_nearest("win81", &["win8", "wp8"], "win8");
    let reducer = FrameworkReducer::with_defaults();
    assert_eq!(nearest(&reducer, "net45", &["win8", "wp8"]), None);
}

#[test]
fn mixed_sets_discard_portables() {
    assert_nearest("net451", &["portable-net45+win8", "net45"], "net45");
}

#[test]
fn portable_holding_the_nearest_member_wins() {
    let reducer = FrameworkReducer::with_defaults();
    let winner = nearest(&reducer, "net451", &["portable-net45+win8", "portable-net45+wp8"]).unwrap();
    assert!(winner.is_portable());
    assert!(winner.profile().to_ascii_lowercase().contains("net45"));
}

// ═══════════════════════════════════════════════════════════════════════════
// NEAREST
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn higher_compatible_candidate_wins() {
    assert_nearest("net46", &["netstandard1.0", "net45", "any"], "net45");
    assert_nearest("net451", &["net40", "net45", "net20"], "net45");
    assert_nearest("netcoreapp2.0", &["netstandard1.6", "netstandard2.0"], "netstandard2.0");
}

#[test]
fn exact_match_short_circuits() {
    assert_nearest("net45", &["net40", "net45", "portable-net45+win8"], "net45");
    assert_nearest("win8", &["netcore45", "win8"], "win8");
}

#[test]
fn nothing_compatible_is_none() {
    let reducer = FrameworkReducer::with_defaults();
    assert_eq!(nearest(&reducer, "net40", &["net45", "win8"]), None);
    assert_eq!(nearest(&reducer, "net45", &[]), None);
}

#[test]
fn same_family_is_preferred() {
    assert_nearest("net46", &["dotnet5.4", "net45"], "net45");
    assert_nearest("dnxcore50", &["dotnet5.5", "dnxcore50"], "dnxcore50");
}

#[test]
fn any_is_kept_only_alone() {
    assert_nearest("net45", &["any"], "any");
    assert_nearest("net45", &["any", "net40"], "net40");
}

#[test]
fn agnostic_yields_to_a_real_match() {
    assert_nearest("net45", &["agnostic", "net40"], "net40");
    assert_nearest("net45", &["agnostic"], "agnostic");
}

#[test]
fn unsupported_candidates() {
    let reducer = FrameworkReducer::with_defaults();
    let unsupported = Framework::unsupported().clone();

    assert_eq!(
        reducer.get_nearest(&unsupported, &[unsupported.clone()]),
        Some(unsupported.clone())
    );
    assert_eq!(
        reducer.get_nearest(&unsupported, &[unsupported.clone(), fw("net45")]),
        None
    );
    assert_eq!(reducer.get_nearest(&fw("net45"), &[unsupported.clone()]), None);
    assert_eq!(
        reducer.get_nearest(&fw("net45"), &[unsupported, fw("net40")]),
        Some(fw("net40"))
    );
}

#[test]
fn profiles() {
    assert_nearest("net45", &["net40-client", "net40"], "net40");
    assert_nearest("net45-client", &["net40", "net40-client"], "net40-client");
    assert_nearest("net45", &["net40-client"], "net40-client");
}

#[test]
fn portable_candidates_lose_to_a_regular_one() {
    assert_nearest("net45", &["portable-net45+win8", "net40"], "net40");
    assert_nearest("win81", &["portable-net45+win8", "win8"], "win8");
}

#[test]
fn portable_target_votes_by_member() {
    assert_nearest(
        "portable-net45+win8",
        &["portable-net45+win8+wp8", "portable-net40+win8+wpa81"],
        "portable-net45+win8+wp8",
    );
}

#[test]
fn shorter_portable_profile_wins_a_tie() {
    assert_nearest(
        "net451",
        &["portable-net45+win8", "portable-net45+wp8"],
        "portable-net45+wp8",
    );
}

#[test]
fn portable_consuming_another_portable_wins() {
    assert_nearest(
        "net451",
        &["portable-net45+win8+wp8", "portable-net45+win8"],
        "portable-net45+win8",
    );
}

#[test]
fn ambiguous_candidates_fall_back_to_precedence() {
    let reducer = FrameworkReducer::with_defaults();
    assert_eq!(reducer.ambiguous_resolutions(), 0);
    assert_eq!(
        nearest(&reducer, "uap10.0", &["wpa81", "netcore50"]),
        Some(fw("netcore50"))
    );
    assert_eq!(reducer.ambiguous_resolutions(), 1);
}

#[test]
fn ambiguity_is_counted_even_when_not_logged() {
    let config = TfmConfig::from_toml("[reducer]\nlog_ambiguous = false\n").unwrap();
    let reducer = FrameworkReducer::from_config(&config).unwrap();
    assert_eq!(
        nearest(&reducer, "uap10.0", &["netcore50", "wpa81"]),
        Some(fw("netcore50"))
    );
    assert_eq!(reducer.ambiguous_resolutions(), 1);
}

#[test]
fn candidate_order_does_not_matter() {
    let reducer = FrameworkReducer::with_defaults();
    let cases: &[(&str, &[&str])] = &[
        ("uap10.0", &["wpa81", "netcore50", "win81", "netstandard1.4"]),
        ("net451", &["portable-net45+win8", "portable-net45+wp8", "net40-client"]),
        ("net46", &["netstandard1.0", "net45", "any", "dotnet5.4"]),
    ];
    for (target, candidates) in cases {
        let forward = fws(candidates);
        let mut backward = forward.clone();
        backward.reverse();
        assert_eq!(
            reducer.get_nearest(&fw(target), &forward),
            reducer.get_nearest(&fw(target), &backward),
            "{target}"
        );
    }
}

#[test]
fn result_is_a_fixed_point() {
    let reducer = FrameworkReducer::with_defaults();
    let target = fw("net46");
    let candidates = fws(&["netstandard1.3", "net45", "net40-client", "dotnet5.4"]);
    let first = reducer.get_nearest(&target, &candidates).unwrap();
    assert_eq!(reducer.get_nearest(&target, &[first.clone()]), Some(first));
}

#[test]
fn platform_specific_targets() {
    assert_nearest("net6.0-windows", &["net5.0", "netstandard2.1"], "net5.0");
    assert_nearest("net6.0-windows", &["net6.0", "net6.0-windows"], "net6.0-windows");
    assert_nearest("net6.0-ios14.0", &["net6.0-android", "netstandard2.0"], "netstandard2.0");
}

// ═══════════════════════════════════════════════════════════════════════════
// REDUCE
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn reduce_drops_equivalents_of_earlier_frameworks() {
    let reducer = FrameworkReducer::with_defaults();
    assert_eq!(
        reducer.reduce(&fws(&["netcore45", "win8", "net45"])),
        fws(&["win8", "net45"])
    );
}

#[test]
fn reduce_prefers_the_phone_spelling_over_silverlight() {
    let reducer = FrameworkReducer::with_defaults();
    assert_eq!(reducer.reduce(&fws(&["sl3-wp", "wp7"])), fws(&["wp7"]));
    assert_eq!(reducer.reduce(&fws(&["wp7", "sl3-wp"])), fws(&["wp7"]));
}

#[test]
fn reduce_keeps_one_framework_per_equivalence_group() {
    let reducer = FrameworkReducer::with_defaults();
    assert_eq!(
        reducer.reduce(&fws(&["sl3-wp", "wp7", "win81"])),
        fws(&["win81", "wp7"])
    );
}

#[test]
fn reduce_follows_equivalence_chains() {
    let reducer = FrameworkReducer::with_defaults();
    assert_eq!(
        reducer.reduce(&fws(&["win", "win8", "netcore45", "winrt45", "netcore", "net45"])),
        fws(&["win8", "net45"])
    );
    assert_eq!(
        reducer.reduce(&fws(&["netcore", "winrt45", "win"])),
        fws(&["win"])
    );
}

#[test]
fn reduce_collapses_equivalent_portables() {
    let reducer = FrameworkReducer::with_defaults();
    let first = fw("portable-net45+win8");
    let second = fw("portable-win+net45");
    assert_eq!(
        reducer.reduce(&[first.clone(), second.clone()]),
        vec![first.clone()]
    );
    assert_eq!(reducer.reduce(&[second, first.clone()]), vec![first]);
    assert_eq!(
        reducer.reduce(&fws(&["portable-net45+win8", "portable-net40+win8"])).len(),
        2
    );
}

#[test]
fn reduce_collapses_duplicates_and_orders_highest_first() {
    let reducer = FrameworkReducer::with_defaults();
    let net45 = fw("net45");
    let shouted = Framework::new(".NETFRAMEWORK", net45.version());
    assert_eq!(reducer.reduce(&[net45.clone(), shouted]), vec![net45]);
    assert_eq!(
        reducer.reduce(&fws(&["net40", "net45"])),
        fws(&["net45", "net40"])
    );
    assert!(reducer.reduce(&[]).is_empty());
}

#[test]
fn reduce_upwards_keeps_the_highest() {
    let reducer = FrameworkReducer::with_defaults();
    assert_eq!(reducer.reduce_upwards(&fws(&["net40", "net451", "net45"])), fws(&["net451"]));
    assert_eq!(reducer.reduce_upwards(&fws(&["net45", "net"])), fws(&["net45"]));
}

#[test]
fn reduce_downwards_keeps_the_lowest() {
    let reducer = FrameworkReducer::with_defaults();
    assert_eq!(reducer.reduce_downwards(&fws(&["net40", "net451", "net45"])), fws(&["net40"]));
}

#[test]
fn mutual_frameworks_survive_together() {
    let reducer = FrameworkReducer::with_defaults();
    assert_eq!(
        reducer.reduce_upwards(&fws(&["win8", "netcore45"])),
        fws(&["win8", "netcore45"])
    );
    assert_eq!(
        reducer.reduce_upwards(&fws(&["net45", "win8"])),
        fws(&["net45", "win8"])
    );
}

#[test]
fn unversioned_twin_yields_to_versioned() {
    let reducer = FrameworkReducer::with_defaults();
    assert_eq!(reducer.reduce_upwards(&fws(&["win", "win8"])), fws(&["win8"]));
}

#[test]
fn any_is_removed_from_larger_sets() {
    let reducer = FrameworkReducer::with_defaults();
    assert_eq!(reducer.reduce_upwards(&fws(&["any", "net45"])), fws(&["net45"]));
    assert_eq!(reducer.reduce_upwards(&fws(&["any"])), fws(&["any"]));
    assert_eq!(reducer.reduce_downwards(&fws(&["net45", "any"])), fws(&["net45"]));
}

// ═══════════════════════════════════════════════════════════════════════════
// CONFIG
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn extra_mappings_extend_compatibility() {
    let mut config = TfmConfig::default();
    config.mappings = MappingsConfig {
        compatibility: vec![CompatibilityRule {
            target: "native".to_string(),
            supported: "netstandard1.0".to_string(),
            supported_min: None,
        }],
        ..Default::default()
    };

    let extended = FrameworkReducer::from_config(&config).unwrap();
    assert_eq!(
        nearest(&extended, "native", &["netstandard1.0"]),
        Some(fw("netstandard1.0"))
    );
    assert_eq!(nearest(&extended, "native", &["netstandard1.1"]), None);

    let defaults = FrameworkReducer::with_defaults();
    assert_eq!(nearest(&defaults, "native", &["netstandard1.0"]), None);
}

#[test]
fn extra_precedence_breaks_new_ties() {
    let rules = r#"
[[mappings.compatibility]]
target = "native"
supported = "tizen3"

[[mappings.compatibility]]
target = "native"
supported = "xamarinios1.0"
"#;
    let candidates = ["tizen3", "xamarinios1.0"];

    let unranked = FrameworkReducer::from_config(&TfmConfig::from_toml(rules).unwrap()).unwrap();
    assert_eq!(nearest(&unranked, "native", &candidates), Some(fw("xamarinios1.0")));

    let ranked_toml = format!("[mappings]\nprecedence = [\"tizen\"]\n{rules}");
    let ranked = FrameworkReducer::from_config(&TfmConfig::from_toml(&ranked_toml).unwrap()).unwrap();
    assert_eq!(nearest(&ranked, "native", &candidates), Some(fw("tizen3")));
    assert_eq!(ranked.ambiguous_resolutions(), 1);
}

#[test]
fn invalid_extra_mappings_are_rejected() {
    let toml = r#"
[[mappings.equivalent]]
left = "net45"
right = "unsupported"
"#;
    let config = TfmConfig::from_toml(toml).unwrap();
    let err = FrameworkReducer::from_config(&config).err().unwrap();
    assert!(matches!(err, ConfigError::InvalidMapping { .. }));
    assert_eq!(err.error_code(), error_code::CONFIG_INVALID_MAPPING);
}

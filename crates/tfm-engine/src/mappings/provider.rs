//! DefaultMappingProvider: the built-in tables indexed for lookup.
//!
//! Every table is keyed case-insensitively. Extra tables from
//! [`MappingsConfig`] are merged on top of the built-ins.

use std::sync::{Arc, LazyLock};

use moka::sync::Cache;
use tfm_core::config::MappingsConfig;
use tfm_core::constants::identifiers;
use tfm_core::{
    CompatibilityMapping, ConfigError, Framework, FrameworkError, FrameworkMappingProvider,
    FrameworkRange, FrameworkVersion, FxHashMap, FxHashSet,
};

use super::defaults;
use super::parse;

/// Distinct portable profile strings kept parsed at once.
const PORTABLE_CACHE_CAPACITY: u64 = 4_096;

static SHARED: LazyLock<Arc<DefaultMappingProvider>> =
    LazyLock::new(|| Arc::new(DefaultMappingProvider::new()));

/// One member of a `+`-delimited portable profile.
#[derive(Debug, Clone)]
pub(crate) struct PortableMember {
    pub framework: Framework,
    pub optional: bool,
}

/// Mapping provider backed by the built-in framework tables.
pub struct DefaultMappingProvider {
    /// lowercase alias or short name -> long identifier
    identifier_lookup: FxHashMap<String, String>,
    /// lowercase long identifier -> short name
    identifier_short: FxHashMap<String, String>,
    /// lowercase short profile -> long profile
    profile_long: FxHashMap<String, String>,
    /// lowercase long profile -> short profile
    profile_short: FxHashMap<String, String>,
    equivalents: FxHashMap<Framework, Vec<Framework>>,
    /// Keys of `equivalents` in insertion order, for deterministic range scans.
    equivalent_keys: Vec<Framework>,
    /// lowercase identifier -> (profile, equivalent profile) pairs
    equivalent_profiles: FxHashMap<String, Vec<(String, String)>>,
    /// lowercase superset identifier -> subset identifiers
    subsets: FxHashMap<String, Vec<String>>,
    /// lowercase target identifier -> mappings
    compatibility: FxHashMap<String, Vec<CompatibilityMapping>>,
    precedence: Vec<String>,
    equivalent_precedence: Vec<String>,
    optional_portable: FxHashSet<String>,
    portable_cache: Cache<String, Arc<[PortableMember]>>,
}

impl Default for DefaultMappingProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultMappingProvider {
    /// Provider with the built-in tables only.
    pub fn new() -> Self {
        let mut provider = Self {
            identifier_lookup: FxHashMap::default(),
            identifier_short: FxHashMap::default(),
            profile_long: FxHashMap::default(),
            profile_short: FxHashMap::default(),
            equivalents: FxHashMap::default(),
            equivalent_keys: Vec::new(),
            equivalent_profiles: FxHashMap::default(),
            subsets: FxHashMap::default(),
            compatibility: FxHashMap::default(),
            precedence: Vec::new(),
            equivalent_precedence: Vec::new(),
            optional_portable: FxHashSet::default(),
            portable_cache: Cache::new(PORTABLE_CACHE_CAPACITY),
        };
        provider.load_builtins();
        provider
    }

    /// Process-wide provider with the built-in tables.
    pub fn shared() -> Arc<DefaultMappingProvider> {
        Arc::clone(&SHARED)
    }

    /// Built-in tables plus the entries of `extra`.
    pub fn with_extra(extra: &MappingsConfig) -> Result<Self, ConfigError> {
        let mut provider = Self::new();
        provider.merge(extra)?;
        Ok(provider)
    }

    fn load_builtins(&mut self) {
        for (long, short) in defaults::IDENTIFIER_SHORT_NAMES {
            self.identifier_lookup
                .insert(short.to_ascii_lowercase(), (*long).to_string());
            self.identifier_lookup
                .insert(long.to_ascii_lowercase(), (*long).to_string());
            self.identifier_short
                .insert(long.to_ascii_lowercase(), (*short).to_string());
        }
        for (alias, long) in defaults::IDENTIFIER_SYNONYMS {
            self.identifier_lookup
                .insert(alias.to_ascii_lowercase(), (*long).to_string());
        }
        for (_, short, long) in defaults::PROFILE_SHORT_NAMES {
            self.profile_long
                .insert(short.to_ascii_lowercase(), (*long).to_string());
            if !long.is_empty() {
                self.profile_short
                    .insert(long.to_ascii_lowercase(), (*short).to_string());
            }
        }
        for (identifier, profile, equivalent) in defaults::EQUIVALENT_PROFILES {
            self.equivalent_profiles
                .entry(identifier.to_ascii_lowercase())
                .or_default()
                .push(((*profile).to_string(), (*equivalent).to_string()));
        }
        for (left, right) in defaults::equivalent_frameworks() {
            self.add_equivalent(left, right);
        }
        for (subset, superset) in defaults::SUBSET_IDENTIFIERS {
            self.add_subset(subset, superset);
        }
        for (target_min, target_max, supported_min, supported_max) in
            defaults::compatibility_mappings()
        {
            let built = FrameworkRange::new(target_min, target_max).and_then(|target| {
                FrameworkRange::new(supported_min, supported_max)
                    .map(|supported| CompatibilityMapping::new(target, supported))
            });
            match built {
                Ok(mapping) => self.add_mapping(mapping),
                Err(e) => tracing::warn!(error = %e, "skipping invalid built-in compatibility mapping"),
            }
        }
        self.precedence = defaults::FRAMEWORK_PRECEDENCE
            .iter()
            .map(|id| (*id).to_string())
            .collect();
        self.equivalent_precedence = defaults::EQUIVALENT_FRAMEWORK_PRECEDENCE
            .iter()
            .map(|id| (*id).to_string())
            .collect();
        self.optional_portable = defaults::OPTIONAL_PORTABLE_IDENTIFIERS
            .iter()
            .map(|id| id.to_ascii_lowercase())
            .collect();
    }

    /// Merge additional tables. Frameworks are short folder names.
    pub fn merge(&mut self, extra: &MappingsConfig) -> Result<(), ConfigError> {
        for pair in &extra.equivalent {
            let left = self.parse_entry(&pair.left)?;
            let right = self.parse_entry(&pair.right)?;
            self.add_equivalent(left, right);
        }

        for pair in &extra.subsets {
            let subset = self.identifier_entry(&pair.subset)?;
            let superset = self.identifier_entry(&pair.superset)?;
            self.add_subset(&subset, &superset);
        }

        for rule in &extra.compatibility {
            let target = self.parse_entry(&rule.target)?;
            let supported_max = self.parse_entry(&rule.supported)?;
            let supported_min = match &rule.supported_min {
                Some(min) => self.parse_entry(min)?,
                None => supported_max.with_version(FrameworkVersion::EMPTY),
            };
            let target_range = FrameworkRange::new(target.clone(), target.with_version(FrameworkVersion::MAX))?;
            let supported_range = FrameworkRange::new(supported_min, supported_max)?;
            self.add_mapping(CompatibilityMapping::new(target_range, supported_range));
        }

        for name in &extra.precedence {
            let identifier = self.identifier_entry(name)?;
            if !self
                .precedence
                .iter()
                .any(|known| known.eq_ignore_ascii_case(&identifier))
            {
                self.precedence.push(identifier);
            }
        }

        tracing::debug!(
            equivalent = extra.equivalent.len(),
            subsets = extra.subsets.len(),
            compatibility = extra.compatibility.len(),
            precedence = extra.precedence.len(),
            "merged extra framework mappings"
        );
        Ok(())
    }

    fn parse_entry(&self, entry: &str) -> Result<Framework, ConfigError> {
        let framework =
            parse::try_parse_folder(entry, self).map_err(|e| ConfigError::InvalidMapping {
                entry: entry.to_string(),
                reason: e.to_string(),
            })?;
        if !framework.is_specific() {
            return Err(ConfigError::InvalidMapping {
                entry: entry.to_string(),
                reason: "mappings must name a specific framework".to_string(),
            });
        }
        Ok(framework)
    }

    fn identifier_entry(&self, entry: &str) -> Result<String, ConfigError> {
        self.identifier_for(entry)
            .map(str::to_string)
            .ok_or_else(|| ConfigError::InvalidMapping {
                entry: entry.to_string(),
                reason: "unknown framework identifier".to_string(),
            })
    }

    fn add_equivalent(&mut self, left: Framework, right: Framework) {
        self.add_equivalent_edge(left.clone(), right.clone());
        self.add_equivalent_edge(right, left);
    }

    fn add_equivalent_edge(&mut self, from: Framework, to: Framework) {
        if !self.equivalents.contains_key(&from) {
            self.equivalent_keys.push(from.clone());
        }
        let targets = self.equivalents.entry(from).or_default();
        if !targets.contains(&to) {
            targets.push(to);
        }
    }

    fn add_subset(&mut self, subset: &str, superset: &str) {
        let subsets = self.subsets.entry(superset.to_ascii_lowercase()).or_default();
        if !subsets.iter().any(|s| s.eq_ignore_ascii_case(subset)) {
            subsets.push(subset.to_string());
        }
    }

    fn add_mapping(&mut self, mapping: CompatibilityMapping) {
        self.compatibility
            .entry(mapping.target.identifier().to_ascii_lowercase())
            .or_default()
            .push(mapping);
    }

    /// Long identifier for a short name, synonym or long name.
    pub(crate) fn identifier_for(&self, name: &str) -> Option<&str> {
        self.identifier_lookup
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub(crate) fn short_identifier(&self, identifier: &str) -> Option<&str> {
        self.identifier_short
            .get(&identifier.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Long profile for a short profile name.
    pub(crate) fn profile_for(&self, short: &str) -> Option<&str> {
        self.profile_long
            .get(&short.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub(crate) fn short_profile(&self, profile: &str) -> Option<&str> {
        self.profile_short
            .get(&profile.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub(crate) fn is_optional_portable(&self, identifier: &str) -> bool {
        self.optional_portable
            .contains(&identifier.to_ascii_lowercase())
    }

    /// Parsed members of a portable profile, memoized per profile string.
    pub(crate) fn portable_member_list(
        &self,
        profile: &str,
    ) -> Result<Arc<[PortableMember]>, FrameworkError> {
        let key = profile.to_ascii_lowercase();
        if let Some(members) = self.portable_cache.get(&key) {
            return Ok(members);
        }
        let members: Arc<[PortableMember]> = parse::parse_portable_members(profile, self)?.into();
        self.portable_cache.insert(key, Arc::clone(&members));
        Ok(members)
    }

    fn profile_equivalents<'a>(
        &'a self,
        identifier: &str,
        profile: &'a str,
    ) -> impl Iterator<Item = &'a str> + 'a {
        self.equivalent_profiles
            .get(&identifier.to_ascii_lowercase())
            .into_iter()
            .flatten()
            .filter_map(move |(a, b)| {
                if a.eq_ignore_ascii_case(profile) {
                    Some(b.as_str())
                } else if b.eq_ignore_ascii_case(profile) {
                    Some(a.as_str())
                } else {
                    None
                }
            })
    }
}

/// `net6.0-android12.0` also consumes `monoandroid12.0`.
fn legacy_platform_family(framework: &Framework) -> Option<Framework> {
    if !framework.identifier().eq_ignore_ascii_case(identifiers::NET_CORE_APP)
        || framework.version() < defaults::PLATFORM_LEGACY_MIN_VERSION
    {
        return None;
    }
    defaults::PLATFORM_LEGACY_FAMILIES
        .iter()
        .find(|(platform, _)| platform.eq_ignore_ascii_case(framework.platform()))
        .map(|&(_, legacy)| Framework::new(legacy, framework.platform_version()))
}

fn push_unique(list: &mut Vec<Framework>, framework: Framework) {
    if !list.contains(&framework) {
        list.push(framework);
    }
}

impl FrameworkMappingProvider for DefaultMappingProvider {
    fn equivalent_frameworks(&self, framework: &Framework) -> Option<Vec<Framework>> {
        let mut found = Vec::new();
        if let Some(direct) = self.equivalents.get(framework) {
            for equivalent in direct {
                push_unique(&mut found, equivalent.clone());
            }
        }

        let bases: Vec<Framework> = std::iter::once(framework.clone())
            .chain(found.iter().cloned())
            .collect();
        for base in &bases {
            for profile in self.profile_equivalents(base.identifier(), base.profile()) {
                push_unique(&mut found, base.replace_profile(profile));
            }
        }

        found.retain(|f| f != framework);
        (!found.is_empty()).then_some(found)
    }

    fn equivalent_frameworks_in_range(&self, range: &FrameworkRange) -> Option<Vec<Framework>> {
        let mut found = Vec::new();
        for key in self.equivalent_keys.iter().filter(|k| range.satisfies(k)) {
            if let Some(equivalents) = self.equivalent_frameworks(key) {
                for equivalent in equivalents {
                    push_unique(&mut found, equivalent);
                }
            }
        }
        (!found.is_empty()).then_some(found)
    }

    fn subset_identifiers(&self, identifier: &str) -> Option<Vec<String>> {
        self.subsets.get(&identifier.to_ascii_lowercase()).cloned()
    }

    fn compatibility_ranges(&self, framework: &Framework) -> Option<Vec<FrameworkRange>> {
        let mut ranges: Vec<FrameworkRange> = self
            .compatibility
            .get(&framework.identifier().to_ascii_lowercase())
            .into_iter()
            .flatten()
            .filter(|mapping| mapping.target.satisfies(framework))
            .map(|mapping| mapping.supported.clone())
            .collect();

        // A platform-specific framework can use everything its
        // platform-neutral twin can.
        if framework.is_platform_specific() {
            let neutral =
                Framework::with_profile(framework.identifier(), framework.version(), framework.profile());
            if let Ok(range) = FrameworkRange::new(neutral.clone(), neutral) {
                ranges.push(range);
            }
            if let Some(legacy) = legacy_platform_family(framework) {
                if let Ok(range) = FrameworkRange::new(legacy.clone(), legacy) {
                    ranges.push(range);
                }
            }
        }

        (!ranges.is_empty()).then_some(ranges)
    }

    fn portable_members(&self, profile: &str, include_optional: bool) -> Option<Vec<Framework>> {
        let members = self.portable_member_list(profile).ok()?;
        Some(
            members
                .iter()
                .filter(|m| include_optional || !m.optional)
                .map(|m| m.framework.clone())
                .collect(),
        )
    }

    fn precedence(&self, identifier: &str) -> Option<usize> {
        self.precedence
            .iter()
            .position(|known| known.eq_ignore_ascii_case(identifier))
    }

    fn equivalent_precedence(&self, identifier: &str) -> Option<usize> {
        self.equivalent_precedence
            .iter()
            .position(|known| known.eq_ignore_ascii_case(identifier))
    }
}

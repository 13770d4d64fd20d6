use serde::Serialize;
use yomi_config::tiers::TierConfig;
use yomi_core::types::KanjiEntry;

/// A cumulative proficiency tier: a prefix of the ranked kanji sequence
#[derive(Debug, Clone)]
pub struct ProficiencyTier<'a> {
    pub name: String,
    /// Configured size; `entries` is shorter when the dictionary is
    pub threshold: usize,
    pub entries: &'a [&'a KanjiEntry],
}

impl<'a> ProficiencyTier<'a> {
    pub fn characters(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.literal.clone()).collect()
    }

    pub fn contains(&self, literal: &str) -> bool {
        self.entries.iter().any(|e| e.literal == literal)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_list(&self) -> TierList {
        TierList {
            name: self.name.clone(),
            count: self.entries.len(),
            kanji: self.characters(),
        }
    }
}

/// Serializable form of a tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierList {
    pub name: String,
    pub count: usize,
    pub kanji: Vec<String>,
}

/// Slice a ranked sequence into cumulative tiers, in configuration order.
///
/// Tier `i` holds the first `tiers[i].count` entries, or all of them if the
/// sequence is shorter. No classification happens here.
pub fn build_tiers<'a>(
    ranked: &'a [&'a KanjiEntry],
    tiers: &[TierConfig],
) -> Vec<ProficiencyTier<'a>> {
    tiers
        .iter()
        .map(|tier| {
            let end = tier.count.min(ranked.len());
            tracing::debug!("Tier {}: {} of {} kanji", tier.name, end, tier.count);
            ProficiencyTier {
                name: tier.name.clone(),
                threshold: tier.count,
                entries: &ranked[..end],
            }
        })
        .collect()
}

pub fn find_tier<'t, 'a>(
    tiers: &'t [ProficiencyTier<'a>],
    name: &str,
) -> Option<&'t ProficiencyTier<'a>> {
    tiers.iter().find(|t| t.name.eq_ignore_ascii_case(name))
}

/// Smallest tier holding `literal`
pub fn tier_of<'t, 'a>(
    tiers: &'t [ProficiencyTier<'a>],
    literal: &str,
) -> Option<&'t ProficiencyTier<'a>> {
    tiers
        .iter()
        .filter(|t| t.contains(literal))
        .min_by_key(|t| t.len())
}

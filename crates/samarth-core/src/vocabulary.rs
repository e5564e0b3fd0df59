//! Static region and commodity vocabularies.
//!
//! Built once on first use and shared read-only by every parser.

use std::sync::LazyLock;

/// States and union territories of India, in matching order.
pub const REGIONS: &[&str] = &[
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
    // Union territories
    "Andaman and Nicobar Islands",
    "Chandigarh",
    "Dadra and Nagar Haveli and Daman and Diu",
    "Lakshadweep",
    "Delhi",
    "Puducherry",
    "Ladakh",
    "Jammu and Kashmir",
];

/// Crops recognised in questions, in matching order.
pub const COMMODITIES: &[&str] = &[
    "Rice",
    "Wheat",
    "Maize",
    "Sugarcane",
    "Cotton",
    "Jowar",
    "Bajra",
    "Ragi",
    "Tur",
    "Urad",
    "Moong",
    "Gram",
    "Groundnut",
    "Sunflower",
    "Soybean",
    "Potatoes",
    "Jute",
    "Barley",
    "Mustard",
    "Peas",
];

/// Known misspellings and contractions, keyed by canonical region.
pub const MISSPELLINGS: &[(&str, &[&str])] = &[
    ("Maharashtra", &["maharashta", "maharashtr", "maharastra"]),
    ("Tamil Nadu", &["tamilnad"]),
    ("Uttar Pradesh", &["up"]),
    ("Odisha", &["orisaa", "orissa"]),
    ("Uttarakhand", &["uttrakhand", "uttaranchal"]),
    ("Delhi", &["nct of delhi", "new delhi"]),
    ("Puducherry", &["pondicherry"]),
    ("Jammu and Kashmir", &["j&k"]),
];

/// Aliases this short only match as whole words.
const SHORT_ALIAS_LEN: usize = 3;

static STANDARD: LazyLock<Vocabulary> =
    LazyLock::new(|| Vocabulary::new(REGIONS, COMMODITIES, MISSPELLINGS));

#[derive(Debug, Clone)]
struct RegionEntry {
    name: String,
    folded: String,
    /// Lowercase alternative spellings, space-stripped name first.
    aliases: Vec<String>,
}

impl RegionEntry {
    fn matches(&self, query: &Query<'_>) -> bool {
        query.lower.contains(&self.folded)
            || self.aliases.iter().any(|alias| {
                if alias.chars().count() <= SHORT_ALIAS_LEN {
                    query.words.iter().any(|w| w == alias)
                } else {
                    query.lower.contains(alias.as_str()) || query.compact.contains(alias.as_str())
                }
            })
    }
}

/// Case-folded views of a question used for matching.
struct Query<'a> {
    lower: &'a str,
    compact: String,
    words: Vec<&'a str>,
}

impl<'a> Query<'a> {
    fn new(lower: &'a str) -> Self {
        Self {
            lower,
            compact: lower.chars().filter(|c| !c.is_whitespace()).collect(),
            words: lower
                .split(|c: char| !(c.is_alphanumeric() || c == '&'))
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }
}

/// Closed region and commodity vocabularies plus the misspelling table.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    regions: Vec<RegionEntry>,
    commodities: Vec<(String, String)>,
}

impl Vocabulary {
    pub fn new(regions: &[&str], commodities: &[&str], misspellings: &[(&str, &[&str])]) -> Self {
        let regions = regions
            .iter()
            .map(|&name| {
                let folded = name.to_lowercase();
                let mut aliases = vec![folded.replace(' ', "")];
                if let Some((_, typos)) = misspellings.iter().find(|(r, _)| *r == name) {
                    aliases.extend(typos.iter().map(|t| t.to_lowercase()));
                }
                aliases.dedup();
                RegionEntry {
                    name: name.to_string(),
                    folded,
                    aliases,
                }
            })
            .collect();
        let commodities = commodities
            .iter()
            .map(|&c| (c.to_string(), c.to_lowercase()))
            .collect();
        Self {
            regions,
            commodities,
        }
    }

    /// The built-in Indian vocabulary.
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    pub fn region_names(&self) -> impl Iterator<Item = &str> {
        self.regions.iter().map(|r| r.name.as_str())
    }

    pub fn commodity_names(&self) -> impl Iterator<Item = &str> {
        self.commodities.iter().map(|(name, _)| name.as_str())
    }

    /// Canonical regions mentioned in `lower`, in vocabulary order.
    ///
    /// `lower` must already be lowercase.
    pub fn match_regions(&self, lower: &str) -> Vec<String> {
        let query = Query::new(lower);
        self.regions
            .iter()
            .filter(|r| r.matches(&query))
            .map(|r| r.name.clone())
            .collect()
    }

    /// Canonical commodities contained in `lower`, in vocabulary order.
    /// Plain substring match, no misspelling correction.
    pub fn match_commodities(&self, lower: &str) -> Vec<String> {
        self.commodities
            .iter()
            .filter(|(_, folded)| lower.contains(folded.as_str()))
            .map(|(name, _)| name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regions(text: &str) -> Vec<String> {
        Vocabulary::standard().match_regions(&text.to_lowercase())
    }

    #[test]
    fn every_region_matches_itself_in_any_case() {
        for &name in REGIONS {
            for variant in [name.to_string(), name.to_uppercase(), name.to_lowercase()] {
                let found = regions(&format!("rainfall in {variant} please"));
                assert!(
                    found.iter().filter(|r| *r == name).count() == 1,
                    "{variant} should yield {name} exactly once, got {found:?}"
                );
            }
        }
    }

    #[test]
    fn every_misspelling_maps_to_its_region() {
        for &(name, typos) in MISSPELLINGS {
            for typo in typos {
                let found = regions(&format!("what about {typo} rainfall"));
                assert!(
                    found.iter().any(|r| r == name),
                    "{typo} should map to {name}, got {found:?}"
                );
            }
        }
    }

    #[test]
    fn space_stripped_names_match() {
        assert_eq!(regions("rainfall in tamilnadu"), vec!["Tamil Nadu"]);
        assert_eq!(regions("crops of westbengal"), vec!["West Bengal"]);
    }

    #[test]
    fn split_names_match_against_compact_query() {
        // "Maha rashtra" only matches once spaces are stripped
        assert_eq!(regions("rain in maha rashtra"), vec!["Maharashtra"]);
    }

    #[test]
    fn matches_follow_vocabulary_order() {
        assert_eq!(
            regions("Compare Maharashtra and Tamil Nadu and Bihar"),
            vec!["Bihar", "Maharashtra", "Tamil Nadu"]
        );
    }

    #[test]
    fn short_alias_needs_whole_word() {
        assert_eq!(regions("wheat in UP"), vec!["Uttar Pradesh"]);
        assert!(regions("what is going up with supply").contains(&"Uttar Pradesh".to_string()));
        assert!(regions("supplying upland groups").is_empty());
    }

    #[test]
    fn goa_is_not_found_in_go_and() {
        assert!(regions("go and check the weather").is_empty());
    }

    #[test]
    fn commodities_are_plain_substrings() {
        let v = Vocabulary::standard();
        assert_eq!(
            v.match_commodities("wheat and rice in punjab"),
            vec!["Rice", "Wheat"]
        );
        assert!(v.match_commodities("rainfall in kerala").is_empty());
    }

    #[test]
    fn region_listing_is_complete() {
        assert_eq!(Vocabulary::standard().region_names().count(), 36);
        assert_eq!(Vocabulary::standard().commodity_names().count(), 20);
    }
}

/// Canonical country name plus the aliases that attribute a record to it:
/// names, adjectives, abbreviations. Aliases are matched word-boundary-aware
/// (see the classifier), so short forms like "us" stay safe.
#[derive(Debug, Clone, Copy)]
pub struct CountryRule {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
}

pub const COUNTRY_RULES: &[CountryRule] = &[
    CountryRule {
        name: "United States",
        aliases: &["united states", "us", "usa", "america", "american"],
    },
    CountryRule {
        name: "China",
        aliases: &["china", "chinese"],
    },
    CountryRule {
        name: "India",
        aliases: &["india", "indian"],
    },
    CountryRule {
        name: "European Union",
        aliases: &["eu", "european union", "europe"],
    },
    CountryRule {
        name: "United Kingdom",
        aliases: &["uk", "united kingdom", "britain", "british"],
    },
    CountryRule {
        name: "Japan",
        aliases: &["japan", "japanese"],
    },
    CountryRule {
        name: "South Korea",
        aliases: &["south korea", "korean", "korea"],
    },
    CountryRule {
        name: "Australia",
        aliases: &["australia", "australian"],
    },
    CountryRule {
        name: "Brazil",
        aliases: &["brazil", "brazilian"],
    },
    CountryRule {
        name: "Russia",
        aliases: &["russia", "russian"],
    },
    CountryRule {
        name: "Canada",
        aliases: &["canada", "canadian"],
    },
    CountryRule {
        name: "Germany",
        aliases: &["germany", "german"],
    },
    CountryRule {
        name: "France",
        aliases: &["france", "french"],
    },
    CountryRule {
        name: "Italy",
        aliases: &["italy", "italian"],
    },
    CountryRule {
        name: "Spain",
        aliases: &["spain", "spanish"],
    },
];

use serde::{Deserialize, Serialize};

/// Closed set of topical labels. Each variant carries a stable id and a
/// display name; payloads serialize the display name.
///
/// `ALL` is the canonical iteration order, and the classifier's
/// first-match-wins precedence follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Sustainability")]
    Sustainability,
    #[serde(rename = "Climate Change")]
    ClimateChange,
    #[serde(rename = "Biodiversity")]
    Biodiversity,
    #[serde(rename = "Renewable Energy")]
    RenewableEnergy,
    #[serde(rename = "Pollution")]
    Pollution,
    #[serde(rename = "Environmental Policy")]
    EnvironmentalPolicy,
    #[serde(rename = "Environmental Technology")]
    EnvironmentalTech,
    #[serde(rename = "Others")]
    Others,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Sustainability,
        Category::ClimateChange,
        Category::Biodiversity,
        Category::RenewableEnergy,
        Category::Pollution,
        Category::EnvironmentalPolicy,
        Category::EnvironmentalTech,
        Category::Others,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Category::Sustainability => "sustainability",
            Category::ClimateChange => "climate_change",
            Category::Biodiversity => "biodiversity",
            Category::RenewableEnergy => "renewable_energy",
            Category::Pollution => "pollution",
            Category::EnvironmentalPolicy => "environmental_policy",
            Category::EnvironmentalTech => "environmental_tech",
            Category::Others => "others",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Sustainability => "Sustainability",
            Category::ClimateChange => "Climate Change",
            Category::Biodiversity => "Biodiversity",
            Category::RenewableEnergy => "Renewable Energy",
            Category::Pollution => "Pollution",
            Category::EnvironmentalPolicy => "Environmental Policy",
            Category::EnvironmentalTech => "Environmental Technology",
            Category::Others => "Others",
        }
    }

    /// Resolve a stored display name back to its variant. Anything outside
    /// the declared set is rejected so loaded records get reclassified.
    pub fn from_name(name: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.name() == name)
    }
}

/// One category's keyword list. A phrase match in the combined title+summary
/// text assigns the category; `Others` carries no keywords and is the
/// fallback only.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub category: Category,
    pub keywords: &'static [&'static str],
}

pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: Category::Sustainability,
        keywords: &[
            "sustainability", "sustainable", "circular economy", "green economy", "esg", "csr",
            "corporate social responsibility", "sustainable development goals", "sdg",
            "eco-friendly", "resource efficiency", "reuse", "reduce", "recycle", "zero waste",
            "waste management", "green business", "green building", "low carbon",
            "carbon neutral", "green bond", "sustainable finance", "responsible sourcing",
            "life cycle assessment", "agriculture", "farming", "regenerative agriculture",
            "organic farming", "sustainable food", "supply chain", "fair trade", "eco-tourism",
            "green tourism", "sustainable packaging", "circular fashion",
        ],
    },
    CategoryRule {
        category: Category::ClimateChange,
        keywords: &[
            "climate change", "global warming", "greenhouse gas", "greenhouse gases",
            "carbon emission", "carbon emissions", "co2", "ch4", "methane", "temperature rise",
            "net zero", "paris agreement", "ipcc", "cop26", "cop27", "cop28", "climate crisis",
            "warming planet", "carbon footprint", "emission reduction", "carbon offset",
            "sea level rise", "extreme weather", "climate resilience", "fossil fuel",
            "fossil fuels", "oil and gas", "pipeline", "pipelines", "global heating",
            "decarbonization", "1.5c", "2c", "tipping point", "carbon budget", "permafrost",
            "el niño", "el nino", "la niña", "la nina", "heatwave",
        ],
    },
    CategoryRule {
        category: Category::Biodiversity,
        keywords: &[
            "biodiversity", "endangered", "endangered species", "wildlife", "ecosystem",
            "habitat loss", "deforestation", "reforestation", "conservation", "extinction",
            "protected areas", "species loss", "nature restoration", "marine life",
            "ocean biodiversity", "pollinator", "coral reef", "habitat fragmentation",
            "ecosystem services", "rewilding", "invasive species", "poaching",
            "wildlife trade", "species reintroduction", "biodiversity hotspot",
        ],
    },
    CategoryRule {
        category: Category::RenewableEnergy,
        keywords: &[
            "renewable", "renewables", "solar", "solar panel", "solar farm", "wind",
            "wind turbine", "wind farm", "windfarm", "hydro", "hydropower", "geothermal",
            "biofuel", "biomass", "energy transition", "sustainable energy", "green energy",
            "battery storage", "ev", "electric vehicle", "ev charging", "charging station",
            "hydrogen", "offshore wind", "pv", "microgrid", "photovoltaic",
            "photovoltaic cell", "clean power", "grid integration", "transmission line",
            "green hydrogen", "fuel cell",
        ],
    },
    CategoryRule {
        category: Category::Pollution,
        keywords: &[
            "pollution", "air quality", "air pollution", "water pollution", "plastic waste",
            "chemical pollution", "microplastic", "microplastics", "ocean pollution", "smog",
            "contaminants", "toxic waste", "wastewater", "industrial pollution",
            "noise pollution", "soil contamination", "particulate matter", "pm2.5", "pm10",
            "ozone", "sulfur dioxide", "pfas", "forever chemicals", "heavy metal", "lead",
            "mercury", "arsenic", "chemical spill", "pesticide", "herbicide", "black carbon",
            "soot", "nox", "nitrogen oxide", "sewage", "e-waste",
        ],
    },
    CategoryRule {
        category: Category::EnvironmentalPolicy,
        keywords: &[
            "environmental policy", "climate policy", "environmental regulation",
            "environmental regulations", "environmental law", "carbon pricing", "carbon tax",
            "emissions trading", "cap and trade", "green deal", "government policy",
            "legislation", "policy initiative", "environmental standard", "regulation",
            "regulations", "directive", "epa", "eia", "environmental impact assessment",
            "kyoto protocol", "farm bill", "subsidy", "subsidies", "tax credit",
            "appropriations", "supreme court", "climate finance", "trade agreement",
            "infrastructure bill",
        ],
    },
    CategoryRule {
        category: Category::EnvironmentalTech,
        keywords: &[
            "environmental technology", "green tech", "clean tech", "cleantech",
            "carbon capture", "carbon capture technology", "ccs", "direct air capture",
            "dacs", "environmental monitoring", "sensor", "satellite", "smart grid",
            "smart city", "waste treatment", "water treatment", "eco-innovation",
            "recycling technology", "waste-to-energy", "bioremediation", "ai", "iot",
            "drone", "smart irrigation", "energy storage", "grid modernization", "biotech",
            "battery", "solid-state battery", "perovskite solar", "biochar",
            "negative emissions", "synthetic biology", "digital twin", "blockchain energy",
            "quantum sensing", "drone mapping",
        ],
    },
    CategoryRule {
        category: Category::Others,
        keywords: &[],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_round_trips() {
        for category in Category::ALL {
            assert_eq!(Category::from_name(category.name()), Some(category));
        }
        assert_eq!(Category::from_name("Sports"), None);
    }

    #[test]
    fn rules_cover_every_category_in_canonical_order() {
        let rule_order: Vec<Category> = CATEGORY_RULES.iter().map(|r| r.category).collect();
        assert_eq!(rule_order, Category::ALL.to_vec());
    }

    #[test]
    fn only_others_is_keywordless() {
        for rule in CATEGORY_RULES {
            if rule.category == Category::Others {
                assert!(rule.keywords.is_empty());
            } else {
                assert!(!rule.keywords.is_empty());
            }
        }
    }

    #[test]
    fn serializes_as_display_name() {
        let json = serde_json::to_string(&Category::ClimateChange).unwrap();
        assert_eq!(json, "\"Climate Change\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::ClimateChange);
    }
}

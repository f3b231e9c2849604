use crate::domain::model::{Feature, PricingPlan, Testimonial};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Static page content: feature cards, testimonial records, pricing plans.
/// Read-only to the core; the carousel only ever consumes the testimonial
/// list's length and ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub pricing: Vec<PricingPlan>,
}

impl Catalog {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    /// The shipped NovaMind content.
    pub fn builtin() -> Self {
        Self {
            features: vec![
                Feature {
                    id: "prototype-fast".to_string(),
                    title: "Prototype in hours".to_string(),
                    desc: "Move from idea to working prototype quickly with model templates \
                           and a visual orchestration studio."
                        .to_string(),
                    icon: "⚡".to_string(),
                },
                Feature {
                    id: "explainable".to_string(),
                    title: "Explainable outputs".to_string(),
                    desc: "We log reasoning paths and provide tools to surface why the model \
                           produced results."
                        .to_string(),
                    icon: "🔍".to_string(),
                },
                Feature {
                    id: "safe-by-default".to_string(),
                    title: "Safety first".to_string(),
                    desc: "Built-in filters, rate limits, and human-in-the-loop review to \
                           reduce risk in production."
                        .to_string(),
                    icon: "🛡️".to_string(),
                },
            ],
            testimonials: vec![
                Testimonial {
                    name: "Priya K.".to_string(),
                    role: "Product Lead, Atlas".to_string(),
                    company: "Atlas".to_string(),
                    quote: "NovaMind reduced our experimentation cycle from weeks to days."
                        .to_string(),
                },
                Testimonial {
                    name: "Marco B.".to_string(),
                    role: "CTO, Lumen".to_string(),
                    company: "Lumen".to_string(),
                    quote: "Production-ready models with clear docs and great tooling."
                        .to_string(),
                },
                Testimonial {
                    name: "Jen T.".to_string(),
                    role: "PM, Freya".to_string(),
                    company: "Freya".to_string(),
                    quote: "The studio helped our team prototype a conversational assistant \
                            in one sprint."
                        .to_string(),
                },
            ],
            pricing: vec![
                PricingPlan {
                    id: "starter".to_string(),
                    title: "Starter".to_string(),
                    price: "Free".to_string(),
                },
                PricingPlan {
                    id: "team".to_string(),
                    title: "Team".to_string(),
                    price: "$49/mo".to_string(),
                },
                PricingPlan {
                    id: "enterprise".to_string(),
                    title: "Enterprise".to_string(),
                    price: "Custom".to_string(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_catalog_content() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.features.len(), 3);
        assert_eq!(catalog.testimonials.len(), 3);
        assert_eq!(catalog.pricing.len(), 3);
        assert_eq!(catalog.testimonials[0].name, "Priya K.");
        assert_eq!(catalog.pricing[1].price, "$49/mo");
    }

    #[test]
    fn test_parse_catalog_toml() {
        let toml_content = r#"
[[testimonials]]
name = "Ada L."
role = "Engineer"
company = "Babbage & Co"
quote = "It computes."

[[pricing]]
id = "solo"
title = "Solo"
price = "$9/mo"
"#;

        let catalog = Catalog::from_toml_str(toml_content).unwrap();
        assert!(catalog.features.is_empty());
        assert_eq!(catalog.testimonials.len(), 1);
        assert_eq!(catalog.testimonials[0].company, "Babbage & Co");
        assert_eq!(catalog.pricing[0].id, "solo");
    }

    #[test]
    fn test_parse_catalog_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[[features]]
id = "fast"
title = "Fast"
desc = "Very fast."
icon = "⚡"
"#
        )
        .unwrap();

        let catalog = Catalog::from_file(file.path()).unwrap();
        assert_eq!(catalog.features.len(), 1);
        assert!(catalog.testimonials.is_empty());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(Catalog::from_toml_str("not = [valid").is_err());
    }
}

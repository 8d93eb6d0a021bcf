use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::tier::Tier;
use crate::{ConfigError, CoreError};

/// A brand profile to score creators against.
///
/// The caller contract requires at least one of `name` or `category`;
/// [`BrandProfile::ensure_identified`] enforces it at the boundary.
/// `target_tier` is one of the five tier labels or `"any"`; absent or
/// `"any"` means no audience-size constraint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandProfile {
    pub name: Option<String>,
    pub category: Option<String>,
    #[serde(alias = "target_tier")]
    pub target_tier: Option<String>,
}

impl BrandProfile {
    /// Enforce the caller contract: a brand must carry a name or a category.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnidentifiedBrand`] when both are absent or blank.
    pub fn ensure_identified(&self) -> Result<(), CoreError> {
        let has_name = self.name.as_deref().is_some_and(|n| !n.trim().is_empty());
        let has_category = self.category.as_deref().is_some_and(|c| !c.trim().is_empty());
        if has_name || has_category {
            Ok(())
        } else {
            Err(CoreError::UnidentifiedBrand)
        }
    }

    /// Label used in reports and log lines.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.category.as_deref())
            .unwrap_or("unidentified brand")
    }
}

#[derive(Debug, Deserialize)]
pub struct BrandsFile {
    pub brands: Vec<BrandProfile>,
}

impl BrandsFile {
    /// Look up a roster entry by name, case-insensitively.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&BrandProfile> {
        let wanted = name.to_lowercase();
        self.brands
            .iter()
            .find(|b| b.name.as_deref().is_some_and(|n| n.to_lowercase() == wanted))
    }
}

/// Load and validate the brand roster from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_brands(path: &Path) -> Result<BrandsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::BrandsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let brands_file: BrandsFile =
        serde_yaml::from_str(&content).map_err(ConfigError::BrandsFileParse)?;

    validate_brands(&brands_file)?;

    Ok(brands_file)
}

fn validate_brands(brands_file: &BrandsFile) -> Result<(), ConfigError> {
    let mut seen_names = HashSet::new();

    for brand in &brands_file.brands {
        if brand.ensure_identified().is_err() {
            return Err(ConfigError::Validation(
                "every brand entry needs a name or a category".to_string(),
            ));
        }

        if let Some(tier) = brand.target_tier.as_deref() {
            let lowered = tier.to_lowercase();
            if lowered != "any" && Tier::parse(&lowered).is_none() {
                return Err(ConfigError::Validation(format!(
                    "brand '{}' has unknown target tier '{}'; expected nano, micro, mid-tier, macro, mega, or any",
                    brand.display_name(),
                    tier
                )));
            }
        }

        if let Some(name) = brand.name.as_deref() {
            if !seen_names.insert(name.to_lowercase()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate brand name: '{name}'"
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str, category: Option<&str>, tier: Option<&str>) -> BrandProfile {
        BrandProfile {
            name: Some(name.to_string()),
            category: category.map(str::to_string),
            target_tier: tier.map(str::to_string),
        }
    }

    #[test]
    fn ensure_identified_accepts_name_only() {
        let brand = BrandProfile {
            name: Some("Nova Audio".to_string()),
            ..BrandProfile::default()
        };
        assert!(brand.ensure_identified().is_ok());
    }

    #[test]
    fn ensure_identified_accepts_category_only() {
        let brand = BrandProfile {
            category: Some("technology".to_string()),
            ..BrandProfile::default()
        };
        assert!(brand.ensure_identified().is_ok());
    }

    #[test]
    fn ensure_identified_rejects_blank_brand() {
        let brand = BrandProfile {
            name: Some("   ".to_string()),
            ..BrandProfile::default()
        };
        assert!(matches!(
            brand.ensure_identified(),
            Err(CoreError::UnidentifiedBrand)
        ));
    }

    #[test]
    fn display_name_prefers_name_over_category() {
        let brand = named("Nova Audio", Some("technology"), None);
        assert_eq!(brand.display_name(), "Nova Audio");

        let brand = BrandProfile {
            category: Some("technology".to_string()),
            ..BrandProfile::default()
        };
        assert_eq!(brand.display_name(), "technology");
    }

    #[test]
    fn validate_rejects_unknown_target_tier() {
        let file = BrandsFile {
            brands: vec![named("Nova Audio", Some("technology"), Some("huge"))],
        };
        let err = validate_brands(&file).unwrap_err();
        assert!(err.to_string().contains("unknown target tier"));
    }

    #[test]
    fn validate_accepts_any_target_tier() {
        let file = BrandsFile {
            brands: vec![named("Nova Audio", Some("technology"), Some("any"))],
        };
        assert!(validate_brands(&file).is_ok());
    }

    #[test]
    fn validate_rejects_duplicate_names_case_insensitively() {
        let file = BrandsFile {
            brands: vec![
                named("Nova Audio", Some("technology"), None),
                named("nova audio", Some("beauty"), None),
            ],
        };
        let err = validate_brands(&file).unwrap_err();
        assert!(err.to_string().contains("duplicate brand name"));
    }

    #[test]
    fn validate_rejects_unidentified_entry() {
        let file = BrandsFile {
            brands: vec![BrandProfile::default()],
        };
        let err = validate_brands(&file).unwrap_err();
        assert!(err.to_string().contains("name or a category"));
    }

    #[test]
    fn find_is_case_insensitive() {
        let file = BrandsFile {
            brands: vec![named("Nova Audio", Some("technology"), Some("micro"))],
        };
        assert!(file.find("NOVA AUDIO").is_some());
        assert!(file.find("nova audio").is_some());
        assert!(file.find("peak fuel").is_none());
    }

    #[test]
    fn target_tier_accepts_snake_case_alias_in_yaml() {
        let file: BrandsFile =
            serde_yaml::from_str("brands:\n  - name: Nova Audio\n    target_tier: micro\n")
                .unwrap();
        assert_eq!(file.brands[0].target_tier.as_deref(), Some("micro"));
    }

    #[test]
    fn load_brands_from_real_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("config")
            .join("brands.yaml");
        assert!(
            path.exists(),
            "brands.yaml missing at {path:?} — required for this test"
        );
        let result = load_brands(&path);
        assert!(result.is_ok(), "failed to load brands.yaml: {result:?}");
        assert!(!result.unwrap().brands.is_empty());
    }
}

// Dinocompare - Human vs. Dinosaur Infographic
// Copyright (c) 2025 Filipe da Veiga Ventura Alves
// Licensed under MIT License

use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Versioned catalog shipped with the binary.
const BUILTIN_CATALOG_JSON: &str = include_str!("../assets/dinosaurs.json");

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{species}: {field} {value:?} is not a number")]
    NotNumeric {
        species: String,
        field: &'static str,
        value: String,
    },
    #[error("{species}: {field} must be positive, got {value}")]
    NotPositive {
        species: String,
        field: &'static str,
        value: f64,
    },
    #[error("{species}: unknown diet {diet:?}")]
    UnknownDiet { species: String, diet: String },
    #[error("catalog contains no entries")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Diet {
    Herbivore,
    Carnivore,
}

impl Diet {
    pub const ALL: [Diet; 2] = [Diet::Herbivore, Diet::Carnivore];

    pub fn as_str(self) -> &'static str {
        match self {
            Diet::Herbivore => "herbivore",
            Diet::Carnivore => "carnivore",
        }
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Diet {
    type Err = String;

    // Accepts the historical catalog spellings as well as the canonical ones.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "herbivore" | "herbavor" | "herbivor" => Ok(Diet::Herbivore),
            "carnivore" | "carnivor" => Ok(Diet::Carnivore),
            other => Err(other.to_string()),
        }
    }
}

/// Catalog numbers arrive either as JSON numbers or as numeric strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum NumericField {
    Number(f64),
    Text(String),
}

#[derive(Debug, Deserialize)]
struct DinosaurJson {
    species: String,
    weight: NumericField,
    height: NumericField,
    diet: String,
    #[serde(rename = "where")]
    habitat: String,
    #[serde(rename = "when")]
    era: String,
    fact: String,
    #[serde(default)]
    always_show_fact: bool,
}

#[derive(Debug, Deserialize)]
struct CatalogJson {
    #[serde(default)]
    version: u32,
    dinosaurs: Vec<DinosaurJson>,
}

/// A strictly typed catalog record. Numbers are coerced once at load time.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub species: String,
    /// Pounds.
    pub weight: f64,
    /// Inches.
    pub height: f64,
    pub diet: Diet,
    pub habitat: String,
    pub era: String,
    pub fact: String,
    /// Entries that make for poor ratio comparisons always show their own fact.
    pub always_show_fact: bool,
}

fn coerce_positive(
    species: &str,
    field: &'static str,
    raw: &NumericField,
) -> Result<f64, CatalogError> {
    let value = match raw {
        NumericField::Number(n) => *n,
        NumericField::Text(text) => {
            text.trim()
                .parse::<f64>()
                .map_err(|_| CatalogError::NotNumeric {
                    species: species.to_string(),
                    field,
                    value: text.clone(),
                })?
        }
    };
    // Fractional weights (e.g. 0.5) are fine; zero or negative are not.
    if !value.is_finite() || value <= 0.0 {
        return Err(CatalogError::NotPositive {
            species: species.to_string(),
            field,
            value,
        });
    }
    Ok(value)
}

impl TryFrom<&DinosaurJson> for CatalogEntry {
    type Error = CatalogError;

    fn try_from(json: &DinosaurJson) -> Result<Self, Self::Error> {
        let diet = json
            .diet
            .parse::<Diet>()
            .map_err(|diet| CatalogError::UnknownDiet {
                species: json.species.clone(),
                diet,
            })?;
        Ok(Self {
            species: json.species.clone(),
            weight: coerce_positive(&json.species, "weight", &json.weight)?,
            height: coerce_positive(&json.species, "height", &json.height)?,
            diet,
            habitat: json.habitat.clone(),
            era: json.era.clone(),
            fact: json.fact.clone(),
            always_show_fact: json.always_show_fact,
        })
    }
}

/// Immutable, ordered set of catalog entries owned by the composition root.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    version: u32,
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let config: CatalogJson = serde_json::from_str(content)?;
        if config.dinosaurs.is_empty() {
            return Err(CatalogError::Empty);
        }
        let entries = config
            .dinosaurs
            .iter()
            .map(CatalogEntry::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            version: config.version,
            entries,
        })
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let content = fs::read_to_string(path)?;
    Catalog::from_json(&content)
}

pub fn builtin_catalog() -> Result<Catalog, CatalogError> {
    Catalog::from_json(BUILTIN_CATALOG_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_eight_entries_in_order() {
        let catalog = builtin_catalog().expect("builtin catalog parses");
        let species: Vec<&str> = catalog.entries().iter().map(|e| e.species.as_str()).collect();
        assert_eq!(
            species,
            [
                "Triceratops",
                "Tyrannosaurus Rex",
                "Anklyosaurus",
                "Brachiosaurus",
                "Stegosaurus",
                "Elasmosaurus",
                "Pteranodon",
                "Pigeon",
            ]
        );
        assert_eq!(catalog.version(), 1);
    }

    #[test]
    fn text_height_is_coerced_once() {
        let catalog = builtin_catalog().unwrap();
        let brachio = &catalog.entries()[3];
        assert_eq!(brachio.species, "Brachiosaurus");
        assert_eq!(brachio.height, 372.0);
    }

    #[test]
    fn fractional_weight_is_accepted() {
        let catalog = builtin_catalog().unwrap();
        let pigeon = catalog.entries().last().unwrap();
        assert_eq!(pigeon.weight, 0.5);
        assert!(pigeon.always_show_fact);
        assert_eq!(
            catalog.entries().iter().filter(|e| e.always_show_fact).count(),
            1
        );
    }

    #[test]
    fn legacy_diet_spellings_parse() {
        assert_eq!("herbavor".parse::<Diet>(), Ok(Diet::Herbivore));
        assert_eq!("Carnivor".parse::<Diet>(), Ok(Diet::Carnivore));
        assert_eq!(" HERBIVORE ".parse::<Diet>(), Ok(Diet::Herbivore));
        assert!("omnivore".parse::<Diet>().is_err());
    }

    #[test]
    fn rejects_non_numeric_text() {
        let json = r#"{"dinosaurs":[{"species":"Oddity","weight":"heavy","height":1,
            "diet":"carnivor","where":"x","when":"y","fact":"z"}]}"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::NotNumeric { field: "weight", .. }));
    }

    #[test]
    fn rejects_zero_height() {
        let json = r#"{"dinosaurs":[{"species":"Flat","weight":1,"height":0,
            "diet":"carnivor","where":"x","when":"y","fact":"z"}]}"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::NotPositive { field: "height", .. }));
    }

    #[test]
    fn rejects_empty_catalog() {
        let err = Catalog::from_json(r#"{"dinosaurs":[]}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Empty));
    }

    #[test]
    fn loads_catalog_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dinos.json");
        fs::write(&path, BUILTIN_CATALOG_JSON).unwrap();
        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog, builtin_catalog().unwrap());
    }
}

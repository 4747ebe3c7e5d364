// Dinocompare - Human vs. Dinosaur Infographic
// Copyright (c) 2025 Filipe da Veiga Ventura Alves
// Licensed under MIT License

use crate::catalog::{CatalogEntry, Diet};
use crate::human::HumanProfile;

/// A catalog entry measured against one submitted human.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRecord {
    pub species: String,
    /// Used for image lookup.
    pub species_lowercase: String,
    pub weight: f64,
    pub height: f64,
    pub diet: Diet,
    pub habitat: String,
    pub era: String,
    pub fact: String,
    pub always_show_fact: bool,
    pub height_ratio: f64,
    pub weight_ratio: f64,
    pub diet_narrative: String,
}

/// One-decimal rounding on the exact decimal expansion of `value`, so
/// 0.95 (stored as 0.9499...) rounds to 0.9. Exact ties go away from zero.
pub fn round_to_tenth(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    // The only exact ties at one decimal are quarters (x.25, x.75).
    let frac = value.abs().fract();
    if frac == 0.25 || frac == 0.75 {
        return (value.abs() * 10.0).ceil() / 10.0 * value.signum();
    }
    format!("{value:.1}").parse().unwrap_or(value)
}

fn diet_narrative(entry: &CatalogEntry, human: &HumanProfile) -> String {
    if human.diet == entry.diet {
        format!("You are both {}s, pretty cool!", human.diet)
    } else {
        format!(
            "You're a {} but the {} was a {}.",
            human.diet, entry.species, entry.diet
        )
    }
}

/// Pure. Zero human height or weight (only reachable without validation)
/// yields a non-finite ratio rather than a panic.
pub fn normalize(entry: &CatalogEntry, human: &HumanProfile) -> ComparisonRecord {
    let human_height = human.total_height_inches();
    ComparisonRecord {
        species: entry.species.clone(),
        species_lowercase: entry.species.to_lowercase(),
        weight: entry.weight,
        height: entry.height,
        diet: entry.diet,
        habitat: entry.habitat.clone(),
        era: entry.era.clone(),
        fact: entry.fact.clone(),
        always_show_fact: entry.always_show_fact,
        height_ratio: round_to_tenth(entry.height / human_height),
        weight_ratio: round_to_tenth(entry.weight / human.weight),
        diet_narrative: diet_narrative(entry, human),
    }
}

pub fn normalize_all(entries: &[CatalogEntry], human: &HumanProfile) -> Vec<ComparisonRecord> {
    entries.iter().map(|entry| normalize(entry, human)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_catalog;

    fn ann(diet: Diet) -> HumanProfile {
        HumanProfile {
            name: "Ann".to_string(),
            height_feet: 5.0,
            height_inches: 6.0,
            weight: 150.0,
            diet,
        }
    }

    #[test]
    fn ratios_match_rounded_division_for_every_entry() {
        let catalog = builtin_catalog().unwrap();
        let human = ann(Diet::Herbivore);
        for entry in catalog.entries() {
            let record = normalize(entry, &human);
            assert_eq!(record.height_ratio, round_to_tenth(entry.height / 66.0));
            assert_eq!(record.weight_ratio, round_to_tenth(entry.weight / 150.0));
        }
    }

    #[test]
    fn known_ratios() {
        let catalog = builtin_catalog().unwrap();
        let human = ann(Diet::Herbivore);
        let records = normalize_all(catalog.entries(), &human);
        // 372 / 66 = 5.636..., 70000 / 150 = 466.66...
        assert_eq!(records[3].height_ratio, 5.6);
        assert_eq!(records[3].weight_ratio, 466.7);
        // 9 / 66 = 0.136..., 0.5 / 150 = 0.0033...
        assert_eq!(records[7].height_ratio, 0.1);
        assert_eq!(records[7].weight_ratio, 0.0);
        assert_eq!(records[1].species_lowercase, "tyrannosaurus rex");
    }

    #[test]
    fn rounding_follows_the_stored_decimal_value() {
        // 114 / 120 is stored just below 0.95.
        assert_eq!(round_to_tenth(114.0 / 120.0), 0.9);
        assert_eq!(round_to_tenth(0.25), 0.3);
        assert_eq!(round_to_tenth(2.75), 2.8);
        assert_eq!(round_to_tenth(5.636), 5.6);
        assert_eq!(round_to_tenth(466.666), 466.7);
        assert!(round_to_tenth(f64::INFINITY).is_infinite());
    }

    #[test]
    fn ten_foot_human_against_triceratops() {
        let catalog = builtin_catalog().unwrap();
        let mut human = ann(Diet::Herbivore);
        human.height_feet = 10.0;
        human.height_inches = 0.0;
        let record = normalize(&catalog.entries()[0], &human);
        assert_eq!(record.height_ratio, 0.9);
    }

    #[test]
    fn matching_diet_affirms() {
        let catalog = builtin_catalog().unwrap();
        let record = normalize(&catalog.entries()[0], &ann(Diet::Herbivore));
        assert_eq!(record.diet_narrative, "You are both herbivores, pretty cool!");
    }

    #[test]
    fn mismatched_diet_names_both_and_species() {
        let catalog = builtin_catalog().unwrap();
        let record = normalize(&catalog.entries()[1], &ann(Diet::Herbivore));
        assert_eq!(
            record.diet_narrative,
            "You're a herbivore but the Tyrannosaurus Rex was a carnivore."
        );
    }

    #[test]
    fn zero_weight_does_not_panic() {
        let catalog = builtin_catalog().unwrap();
        let mut human = ann(Diet::Carnivore);
        human.weight = 0.0;
        let record = normalize(&catalog.entries()[0], &human);
        assert!(record.weight_ratio.is_infinite());
    }
}

// Dinocompare - Human vs. Dinosaur Infographic
// Copyright (c) 2025 Filipe da Veiga Ventura Alves
// Licensed under MIT License

use crate::catalog::Diet;

pub const INCHES_PER_FOOT: f64 = 12.0;

/// Form values exactly as typed, before coercion.
#[derive(Debug, Clone, PartialEq)]
pub struct RawHumanInput {
    pub name: String,
    pub feet: String,
    pub inches: String,
    pub weight: String,
    pub diet: Diet,
}

/// Numbers are kept as typed (no truncation) so the validator sees the
/// real value, e.g. `-0.5` inches.
#[derive(Debug, Clone, PartialEq)]
pub struct HumanProfile {
    pub name: String,
    pub height_feet: f64,
    pub height_inches: f64,
    /// Pounds.
    pub weight: f64,
    pub diet: Diet,
}

impl HumanProfile {
    pub fn total_height_inches(&self) -> f64 {
        self.height_feet * INCHES_PER_FOOT + self.height_inches
    }
}

// Blank or unparsable text reads as zero so the validator sees it as missing.
fn coerce_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Read-and-coerce only. Validation happens separately.
pub fn collect(raw: &RawHumanInput) -> HumanProfile {
    HumanProfile {
        name: raw.name.clone(),
        height_feet: coerce_number(&raw.feet),
        height_inches: coerce_number(&raw.inches),
        weight: coerce_number(&raw.weight),
        diet: raw.diet,
    }
}

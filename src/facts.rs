// Dinocompare - Human vs. Dinosaur Infographic
// Copyright (c) 2025 Filipe da Veiga Ventura Alves
// Licensed under MIT License

use rand::Rng;

use crate::comparison::ComparisonRecord;
use crate::grid::Tile;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FactKind {
    Diet,
    Static,
    Height,
    Weight,
    Era,
    Habitat,
}

impl FactKind {
    /// Draw order: the random index maps into this table.
    pub const ALL: [FactKind; 6] = [
        FactKind::Diet,
        FactKind::Static,
        FactKind::Height,
        FactKind::Weight,
        FactKind::Era,
        FactKind::Habitat,
    ];
}

// Direction is read off the ratio itself, so exactly 1.0 reads as the smaller word.
fn direction(ratio: f64, bigger: &'static str, smaller: &'static str) -> &'static str {
    if ratio > 1.0 {
        bigger
    } else {
        smaller
    }
}

pub fn describe(record: &ComparisonRecord, kind: FactKind) -> String {
    match kind {
        FactKind::Diet => record.diet_narrative.clone(),
        FactKind::Static => record.fact.clone(),
        FactKind::Height => format!(
            "The {} was {:.1} times {} than you.",
            record.species,
            record.height_ratio,
            direction(record.height_ratio, "taller", "shorter")
        ),
        FactKind::Weight => format!(
            "The {} was {:.1} times {} than you.",
            record.species,
            record.weight_ratio,
            direction(record.weight_ratio, "heavier", "lighter")
        ),
        FactKind::Era => format!(
            "The {} existed during the {} period.",
            record.species, record.era
        ),
        FactKind::Habitat => format!("The {} lived in {}.", record.species, record.habitat),
    }
}

/// Picks the fact line for a tile. The human tile has none.
pub fn select_fact<R: Rng + ?Sized>(tile: &Tile, rng: &mut R) -> Option<String> {
    let record = tile.as_dinosaur()?;
    if record.always_show_fact {
        return Some(record.fact.clone());
    }
    let kind = FactKind::ALL[rng.gen_range(0..FactKind::ALL.len())];
    Some(describe(record, kind))
}

/// Every string `select_fact` could return for this tile.
pub fn possible_facts(tile: &Tile) -> Vec<String> {
    match tile.as_dinosaur() {
        None => Vec::new(),
        Some(record) if record.always_show_fact => vec![record.fact.clone()],
        Some(record) => FactKind::ALL
            .iter()
            .map(|&kind| describe(record, kind))
            .collect(),
    }
}

// Dinocompare - Human vs. Dinosaur Infographic
// Copyright (c) 2025 Filipe da Veiga Ventura Alves
// Licensed under MIT License

//! Compares a human against a catalog of dinosaurs and renders the result
//! as a grid of tiles.
//!
//! The pipeline is `human::collect` → `validation::validate` →
//! `comparison::normalize` per catalog entry → `grid` (with `facts` picking
//! one line per tile). `session::Session` wires these to a `ui::UiSurface`.

pub mod catalog;
pub mod comparison;
pub mod facts;
pub mod grid;
pub mod human;
pub mod session;
pub mod settings;
pub mod ui;
pub mod validation;

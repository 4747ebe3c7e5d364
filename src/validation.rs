// Dinocompare - Human vs. Dinosaur Infographic
// Copyright (c) 2025 Filipe da Veiga Ventura Alves
// Licensed under MIT License

use crate::human::HumanProfile;

/// General banner shown alongside the specific message on any failure.
pub const INCOMPLETE_FORM_BANNER: &str = "Please complete all fields";

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill out your name, human")]
    MissingName,
    #[error("Feet must be a number greater than 0")]
    FeetTooSmall,
    #[error("Inches must be a number 0 or greater")]
    NegativeInches,
    #[error("Weight must be a number greater than 0")]
    WeightTooSmall,
}

/// Reports only the first failing rule.
pub fn validate(human: &HumanProfile) -> Result<(), ValidationError> {
    if human.name.is_empty() {
        return Err(ValidationError::MissingName);
    }
    if human.height_feet < 1.0 {
        return Err(ValidationError::FeetTooSmall);
    }
    if human.height_inches < 0.0 {
        return Err(ValidationError::NegativeInches);
    }
    if human.weight < 1.0 {
        return Err(ValidationError::WeightTooSmall);
    }
    Ok(())
}

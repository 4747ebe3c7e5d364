// Dinocompare - Human vs. Dinosaur Infographic
// Copyright (c) 2025 Filipe da Veiga Ventura Alves
// Licensed under MIT License

use rand::Rng;

use crate::catalog::Catalog;
use crate::comparison::normalize_all;
use crate::grid::{arrange_tiles, describe_tiles, render_grid, TileView};
use crate::human::collect;
use crate::ui::UiSurface;
use crate::validation::{validate, ValidationError, INCOMPLETE_FORM_BANNER};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    Form,
    Results,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Form → Results. Carries what was rendered into the grid.
    Rendered(Vec<TileView>),
    /// Form → Form. Both message regions were written.
    Rejected(ValidationError),
    /// Submit arrived while results were showing.
    Ignored,
}

/// Drives the two-state form/results page over an owned UI surface.
pub struct Session<U: UiSurface, R: Rng> {
    catalog: Catalog,
    image_dir: String,
    ui: U,
    rng: R,
    state: SessionState,
}

impl<U: UiSurface, R: Rng> Session<U, R> {
    pub fn new(catalog: Catalog, image_dir: impl Into<String>, mut ui: U, rng: R) -> Self {
        ui.set_form_visible(true);
        ui.set_reset_visible(false);
        clear_form(&mut ui);
        Self {
            catalog,
            image_dir: image_dir.into(),
            ui,
            rng,
            state: SessionState::Form,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.state != SessionState::Form {
            log::warn!("Submit ignored: results are already showing");
            return SubmitOutcome::Ignored;
        }

        let human = collect(&self.ui.read_input());
        if let Err(err) = validate(&human) {
            log::info!("Submission rejected: {err}");
            self.ui.set_field_error(Some(&err.to_string()));
            self.ui.set_banner(Some(INCOMPLETE_FORM_BANNER));
            return SubmitOutcome::Rejected(err);
        }

        self.ui.set_form_visible(false);

        let records = normalize_all(self.catalog.entries(), &human);
        log::debug!("Comparison records: {records:#?}");

        let tiles = arrange_tiles(records, human);
        let views = describe_tiles(&tiles, &self.image_dir, &mut self.rng);
        self.ui.set_grid(render_grid(&views));
        self.ui.set_reset_visible(true);
        clear_form(&mut self.ui);

        self.state = SessionState::Results;
        log::info!("Rendered {} tiles", views.len());
        SubmitOutcome::Rendered(views)
    }

    /// Returns false when there was nothing to reset.
    pub fn reset(&mut self) -> bool {
        if self.state != SessionState::Results {
            log::warn!("Reset ignored: form is already showing");
            return false;
        }
        self.ui.set_grid(String::new());
        self.ui.set_reset_visible(false);
        self.ui.set_form_visible(true);
        self.state = SessionState::Form;
        log::info!("Session reset to form");
        true
    }
}

fn clear_form<U: UiSurface>(ui: &mut U) {
    ui.clear_inputs();
    ui.set_banner(None);
    ui.set_field_error(None);
}

// Dinocompare - Human vs. Dinosaur Infographic
// Copyright (c) 2025 Filipe da Veiga Ventura Alves
// Licensed under MIT License

use crate::catalog::Diet;
use crate::grid::escape_html;
use crate::human::RawHumanInput;

/// The replaceable presentation layer the session drives.
pub trait UiSurface {
    fn read_input(&self) -> RawHumanInput;
    fn clear_inputs(&mut self);
    fn set_form_visible(&mut self, visible: bool);
    /// Replaces the grid content wholesale.
    fn set_grid(&mut self, markup: String);
    fn set_banner(&mut self, message: Option<&str>);
    fn set_field_error(&mut self, message: Option<&str>);
    fn set_reset_visible(&mut self, visible: bool);
}

/// In-memory page: holds every region's state and renders a full document.
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlPage {
    pub name: String,
    pub feet: String,
    pub inches: String,
    pub weight: String,
    pub diet: Diet,
    pub form_visible: bool,
    pub grid: String,
    pub banner: Option<String>,
    pub field_error: Option<String>,
    pub reset_visible: bool,
}

impl Default for HtmlPage {
    fn default() -> Self {
        Self {
            name: String::new(),
            feet: String::new(),
            inches: String::new(),
            weight: String::new(),
            diet: Diet::Herbivore,
            form_visible: true,
            grid: String::new(),
            banner: None,
            field_error: None,
            reset_visible: false,
        }
    }
}

impl HtmlPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Types values into the form, as a user would.
    pub fn fill(&mut self, name: &str, feet: &str, inches: &str, weight: &str, diet: Diet) {
        self.name = name.to_string();
        self.feet = feet.to_string();
        self.inches = inches.to_string();
        self.weight = weight.to_string();
        self.diet = diet;
    }

    pub fn inputs_empty(&self) -> bool {
        self.name.is_empty() && self.feet.is_empty() && self.inches.is_empty() && self.weight.is_empty()
    }

    fn render_form(&self) -> String {
        let options: String = Diet::ALL
            .iter()
            .map(|diet| {
                let selected = if *diet == self.diet { " selected" } else { "" };
                format!("<option value=\"{diet}\"{selected}>{diet}</option>")
            })
            .collect();
        let input = |id: &str, kind: &str, value: &str| {
            format!(
                "<input id=\"{id}\" type=\"{kind}\" value=\"{}\">",
                escape_html(value)
            )
        };
        format!(
            "<form id=\"dino-compare\">\n      {}\n      {}\n      {}\n      {}\n      <select id=\"diet\">{}</select>\n      <div id=\"btn\">Compare Me!</div>\n    </form>",
            input("name", "text", &self.name),
            input("feet", "number", &self.feet),
            input("inches", "number", &self.inches),
            input("weight", "number", &self.weight),
            options
        )
    }

    pub fn to_html(&self) -> String {
        let mut body = String::new();
        if self.form_visible {
            body.push_str("    ");
            body.push_str(&self.render_form());
            body.push('\n');
        }
        body.push_str("    <div class=\"validation\">");
        if let Some(banner) = &self.banner {
            body.push_str(&format!("<span class=\"error\">{}</span>", escape_html(banner)));
        }
        body.push_str("</div>\n    <div class=\"validation-specific\">");
        if let Some(error) = &self.field_error {
            body.push_str(&format!("<p>{}</p>", escape_html(error)));
        }
        body.push_str("</div>\n");
        body.push_str(&format!("    <main id=\"grid\">{}\n    </main>\n", self.grid));
        body.push_str("    <footer>");
        if self.reset_visible {
            body.push_str("<div class=\"start-over btn\"><h1>Start over</h1></div>");
        }
        body.push_str("</footer>\n");

        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n  <head>\n    <meta charset=\"utf-8\">\n    <title>Dinosaurs</title>\n    <link rel=\"stylesheet\" href=\"css/styles.css\">\n  </head>\n  <body>\n{body}  </body>\n</html>\n"
        )
    }
}

impl UiSurface for HtmlPage {
    fn read_input(&self) -> RawHumanInput {
        RawHumanInput {
            name: self.name.clone(),
            feet: self.feet.clone(),
            inches: self.inches.clone(),
            weight: self.weight.clone(),
            diet: self.diet,
        }
    }

    fn clear_inputs(&mut self) {
        self.name.clear();
        self.feet.clear();
        self.inches.clear();
        self.weight.clear();
    }

    fn set_form_visible(&mut self, visible: bool) {
        self.form_visible = visible;
    }

    fn set_grid(&mut self, markup: String) {
        self.grid = markup;
    }

    fn set_banner(&mut self, message: Option<&str>) {
        self.banner = message.map(str::to_string);
    }

    fn set_field_error(&mut self, message: Option<&str>) {
        self.field_error = message.map(str::to_string);
    }

    fn set_reset_visible(&mut self, visible: bool) {
        self.reset_visible = visible;
    }
}

// Dinocompare - Human vs. Dinosaur Infographic
// Copyright (c) 2025 Filipe da Veiga Ventura Alves
// Licensed under MIT License

use rand::Rng;

use crate::comparison::ComparisonRecord;
use crate::facts::select_fact;
use crate::human::HumanProfile;

/// The human tile goes after the 4th dinosaur to break up the grid.
pub const HUMAN_TILE_INDEX: usize = 4;
const HUMAN_IMAGE_NAME: &str = "human";

#[derive(Debug, Clone, PartialEq)]
pub enum Tile {
    Dinosaur(ComparisonRecord),
    Human(HumanProfile),
}

impl Tile {
    pub fn as_dinosaur(&self) -> Option<&ComparisonRecord> {
        match self {
            Tile::Dinosaur(record) => Some(record),
            Tile::Human(_) => None,
        }
    }

    pub fn is_human(&self) -> bool {
        matches!(self, Tile::Human(_))
    }

    pub fn title(&self) -> &str {
        match self {
            Tile::Dinosaur(record) => &record.species,
            Tile::Human(human) => &human.name,
        }
    }

    fn image_name(&self) -> &str {
        match self {
            Tile::Dinosaur(record) => &record.species_lowercase,
            Tile::Human(_) => HUMAN_IMAGE_NAME,
        }
    }
}

/// Catalog order is kept; the human lands at `HUMAN_TILE_INDEX`, or last
/// when there are fewer records than that.
pub fn arrange_tiles(records: Vec<ComparisonRecord>, human: HumanProfile) -> Vec<Tile> {
    let insert_at = HUMAN_TILE_INDEX.min(records.len());
    let mut tiles: Vec<Tile> = records.into_iter().map(Tile::Dinosaur).collect();
    tiles.insert(insert_at, Tile::Human(human));
    tiles
}

/// What a single grid cell shows, independent of any markup.
#[derive(Debug, Clone, PartialEq)]
pub struct TileView {
    pub title: String,
    pub image_src: String,
    /// `None` keeps the fact line in the markup but hidden.
    pub fact: Option<String>,
}

pub fn describe_tiles<R: Rng + ?Sized>(tiles: &[Tile], image_dir: &str, rng: &mut R) -> Vec<TileView> {
    tiles
        .iter()
        .map(|tile| TileView {
            title: tile.title().to_string(),
            image_src: format!("{}/{}.png", image_dir.trim_end_matches('/'), tile.image_name()),
            fact: select_fact(tile, rng),
        })
        .collect()
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn render_tile(view: &TileView) -> String {
    let (style, fact) = match &view.fact {
        Some(fact) => ("", escape_html(fact)),
        None => ("display: none", String::new()),
    };
    format!(
        "\n        <div class=\"grid-item\">\n          <h3>{}</h3>\n          <img src=\"{}\">\n          <p style=\"{}\">{}</p>\n        </div>",
        escape_html(&view.title),
        escape_html(&view.image_src),
        style,
        fact
    )
}

/// Full replacement content for the grid container.
pub fn render_grid(views: &[TileView]) -> String {
    views.iter().map(render_tile).collect()
}

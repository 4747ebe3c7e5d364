// Dinocompare - Human vs. Dinosaur Infographic
// Copyright (c) 2025 Filipe da Veiga Ventura Alves
// Licensed under MIT License

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use dinocompare::catalog::Diet;
use dinocompare::grid::TileView;
use dinocompare::session::{Session, SubmitOutcome};
use dinocompare::settings::InfographicSettings;
use dinocompare::ui::HtmlPage;

const PAGE_FILE_PREFIX: &str = "infographic";

type Lines<'a> = io::Lines<io::StdinLock<'a>>;

fn prompt(lines: &mut Lines<'_>, label: &str) -> anyhow::Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}

// A selection control: only the offered choices are accepted.
fn prompt_diet(lines: &mut Lines<'_>) -> anyhow::Result<Option<Diet>> {
    let choices: Vec<&str> = Diet::ALL.iter().map(|d| d.as_str()).collect();
    loop {
        let Some(answer) = prompt(lines, &format!("Diet ({})", choices.join("/")))? else {
            return Ok(None);
        };
        match answer.parse::<Diet>() {
            Ok(diet) => return Ok(Some(diet)),
            Err(other) => eprintln!("'{other}' is not one of: {}", choices.join(", ")),
        }
    }
}

/// Fills the page form from the terminal. `false` means input ended.
fn read_form(lines: &mut Lines<'_>, page: &mut HtmlPage) -> anyhow::Result<bool> {
    let fields = [
        "Name",
        "Height (feet)",
        "Height (inches)",
        "Weight (lbs)",
    ];
    let mut values = Vec::with_capacity(fields.len());
    for label in fields {
        match prompt(lines, label)? {
            Some(value) => values.push(value),
            None => return Ok(false),
        }
    }
    let Some(diet) = prompt_diet(lines)? else {
        return Ok(false);
    };
    page.fill(&values[0], &values[1], &values[2], &values[3], diet);
    Ok(true)
}

fn page_file_name() -> String {
    // Milliseconds keep quick successive comparisons from overwriting each other.
    let now = chrono::Utc::now();
    format!(
        "{}_{}_{:03}UTC.html",
        PAGE_FILE_PREFIX,
        now.format("%Y%m%d_%H%M%S"),
        now.timestamp_subsec_millis()
    )
}

fn write_page(dir: &Path, html: &str) -> anyhow::Result<PathBuf> {
    if !dir.as_os_str().is_empty() {
        fs::create_dir_all(dir)?;
    }
    let path = dir.join(page_file_name());
    fs::write(&path, html)?;
    Ok(path)
}

fn print_tiles(views: &[TileView]) {
    for view in views {
        println!("── {} ({})", view.title, view.image_src);
        if let Some(fact) = &view.fact {
            println!("   {fact}");
        }
    }
}

fn load_settings() -> InfographicSettings {
    let path = InfographicSettings::default_path();
    match InfographicSettings::load_or_create(&path) {
        Ok(settings) => settings,
        Err(err) => {
            log::warn!("Failed to load settings from {}: {err:?}; using defaults", path.display());
            InfographicSettings::default()
        }
    }
}

fn run() -> anyhow::Result<()> {
    let settings = load_settings();
    let catalog = settings.resolve_catalog()?;
    log::info!(
        "Loaded catalog v{} with {} entries",
        catalog.version(),
        catalog.len()
    );

    let rng = match settings.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = Session::new(catalog, settings.image_dir.clone(), HtmlPage::new(), rng);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("How do you compare to a dinosaur?");
    loop {
        if !read_form(&mut lines, session.ui_mut())? {
            return Ok(());
        }

        match session.submit() {
            SubmitOutcome::Rejected(err) => {
                let page = session.ui();
                eprintln!(
                    "{} {}",
                    page.banner.as_deref().unwrap_or_default(),
                    page.field_error.as_deref().unwrap_or(&err.to_string())
                );
            }
            SubmitOutcome::Rendered(views) => {
                print_tiles(&views);
                let path = write_page(&settings.output_dir, &session.ui().to_html())?;
                println!("✓ Infographic written to {}", path.display());

                let again = prompt(&mut lines, "Start over? [y/N]")?.unwrap_or_default();
                if !again.trim().eq_ignore_ascii_case("y") {
                    return Ok(());
                }
                session.reset();
            }
            SubmitOutcome::Ignored => return Ok(()),
        }
    }
}

fn main() {
    use env_logger::Env;
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .init();

    if let Err(err) = run() {
        eprintln!("❌ {err:?}");
        std::process::exit(1);
    }
}

//! Vanity CLI - inspect character customization schemas.
//!
//! This is the main entry point for the Vanity command-line application.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use vanity::prelude::*;
use vanity::schema::is_identity;

/// Vanity - character customization schema tool
#[derive(Parser)]
#[command(name = "vanity")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build and print the schema of one clan and gender
    Schema {
        /// Path to the JSON sheet dump
        #[arg(short, long, env = "VANITY_DATA")]
        data: PathBuf,

        /// Clan name, e.g. "Midlander" or "Keeper of the Moon"
        #[arg(short, long, value_parser = parse_clan)]
        clan: Clan,

        /// Gender (male or female)
        #[arg(short, long, value_parser = parse_gender)]
        gender: Gender,

        /// Print the full schema as JSON
        #[arg(long)]
        json: bool,
    },

    /// List values only NPCs of one clan and gender use
    Npc {
        /// Path to the JSON sheet dump
        #[arg(short, long, env = "VANITY_DATA")]
        data: PathBuf,

        /// Clan name
        #[arg(short, long, value_parser = parse_clan)]
        clan: Clan,

        /// Gender (male or female)
        #[arg(short, long, value_parser = parse_gender)]
        gender: Gender,
    },

    /// Build every clan and gender and check the results for consistency
    Check {
        /// Path to the JSON sheet dump
        #[arg(short, long, env = "VANITY_DATA")]
        data: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Schema {
            data,
            clan,
            gender,
            json,
        } => cmd_schema(&data, clan, gender, json)?,
        Commands::Npc { data, clan, gender } => cmd_npc(&data, clan, gender)?,
        Commands::Check { data } => cmd_check(&data)?,
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn parse_clan(name: &str) -> std::result::Result<Clan, String> {
    Clan::from_name(name).ok_or_else(|| {
        let known: Vec<_> = Clan::all().iter().map(Clan::name).collect();
        format!("unknown clan '{name}' (expected one of: {})", known.join(", "))
    })
}

fn parse_gender(name: &str) -> std::result::Result<Gender, String> {
    match name.to_ascii_lowercase().as_str() {
        "m" | "male" | "0" => Ok(Gender::Male),
        "f" | "female" | "1" => Ok(Gender::Female),
        _ => Err(format!("unknown gender '{name}' (expected male or female)")),
    }
}

/// Loaded sheets plus the NPC catalog, which loads in the background.
struct Loaded {
    sheets: Sheets,
    npcs: NpcCatalog,
}

impl Loaded {
    fn open(path: &Path) -> Result<Self> {
        let start = Instant::now();
        let bundle = SheetBundle::load(path)
            .with_context(|| format!("Failed to read sheet dump {}", path.display()))?;
        let mut sheets = bundle.into_sheets().context("Failed to build sheets from dump")?;

        let entries = std::mem::take(&mut sheets.npcs);
        let npcs = NpcCatalog::spawn(move || entries);

        tracing::info!(
            rows = sheets.menus.len(),
            features = sheets.features.len(),
            elapsed = ?start.elapsed(),
            "loaded sheet dump"
        );
        Ok(Self { sheets, npcs })
    }

    fn sources(&self) -> SchemaSources<'_> {
        SchemaSources {
            palette: &self.sheets.palette,
            menus: &self.sheets.menus,
            features: &self.sheets.features,
            icons: &self.sheets.icons,
            names: &self.sheets.names,
            npcs: &self.npcs,
        }
    }
}

fn cmd_schema(data: &Path, clan: Clan, gender: Gender, json: bool) -> Result<()> {
    let loaded = Loaded::open(data)?;
    let schema = SchemaBuilder::new(loaded.sources())
        .build(clan, gender)
        .with_context(|| format!("Failed to build schema for {clan} {gender}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    println!("{} {} - {} faces", clan, gender, schema.face_count());
    for (kind, categories) in schema.display_groups() {
        if categories.is_empty() {
            continue;
        }
        println!();
        println!("{kind}:");
        for &category in categories {
            let options = schema.options(category);
            let values = match (options.first(), options.last()) {
                (Some(first), Some(last)) => format!("{}..={}", first.value, last.value),
                _ => "-".to_string(),
            };
            println!("  {:<24} {:>4} options  {}", schema.name(category), options.len(), values);
        }
    }

    let exclusive = schema.npc_exclusive().len();
    if exclusive > 0 {
        println!();
        println!("{exclusive} NPC-exclusive values (see `vanity npc`)");
    }

    Ok(())
}

fn cmd_npc(data: &Path, clan: Clan, gender: Gender) -> Result<()> {
    let loaded = Loaded::open(data)?;
    let schema = SchemaBuilder::new(loaded.sources())
        .build(clan, gender)
        .with_context(|| format!("Failed to build schema for {clan} {gender}"))?;

    for (category, value) in schema.npc_exclusive() {
        println!("{:<20} {}", category.name(), value);
    }
    println!("{} NPC-exclusive values", schema.npc_exclusive().len());

    Ok(())
}

fn cmd_check(data: &Path) -> Result<()> {
    let loaded = Loaded::open(data)?;
    let builder = SchemaBuilder::new(loaded.sources());
    let cache = SchemaCache::new();

    let pairs: Vec<(Clan, Gender)> = Clan::all()
        .into_iter()
        .flat_map(|clan| Gender::all().into_iter().map(move |gender| (clan, gender)))
        .collect();

    let start = Instant::now();
    let results: Vec<_> = pairs
        .par_iter()
        .map(|&(clan, gender)| (clan, gender, cache.get_or_build(clan, gender, &builder)))
        .collect();

    let mut built = 0;
    let mut problems = 0;
    for (clan, gender, result) in results {
        match result {
            Ok(schema) => {
                built += 1;
                for problem in check_schema(&schema) {
                    problems += 1;
                    println!("{clan} {gender}: {problem}");
                }
            }
            Err(SchemaError::MissingMenuRow { .. }) => {
                tracing::debug!(%clan, %gender, "no menu row, skipped");
            }
            Err(e) => return Err(e).with_context(|| format!("Failed to build {clan} {gender}")),
        }
    }

    println!("Checked {} schemas in {:?}", built, start.elapsed());
    if problems > 0 {
        bail!("{problems} problems found");
    }
    Ok(())
}

/// Consistency checks every schema must pass.
fn check_schema(schema: &CustomizationSchema) -> Vec<String> {
    let mut problems = Vec::new();

    for category in CustomizeIndex::all() {
        let options = schema.options(category);
        if !options.windows(2).all(|w| w[0].value < w[1].value) {
            problems.push(format!("{category} options are not sorted by value"));
        }
        if is_identity(category) && schema.is_available(category) {
            problems.push(format!("{category} is an identity category but marked available"));
        }
    }

    let hairstyles = schema.options(CustomizeIndex::Hairstyle);
    for face in 0..=schema.face_count() {
        let face = CustomizeValue(face as u8);
        if !schema.hair_for_face(face).iter().all(|o| hairstyles.contains(o)) {
            problems.push(format!("hairstyles of face {face} are not a subset of all hairstyles"));
        }
    }

    let paint = [
        CustomizeIndex::FacePaint,
        CustomizeIndex::FacePaintColor,
        CustomizeIndex::FacePaintReversed,
    ];
    if paint.iter().any(|&c| schema.is_available(c) != schema.is_available(CustomizeIndex::FacePaint)) {
        problems.push("face paint categories disagree on availability".to_string());
    }

    for (kind, categories) in schema.display_groups() {
        for &category in categories {
            if !schema.is_available(category) || schema.kind(category) != *kind {
                problems.push(format!("{category} is misplaced in the {kind} group"));
            }
        }
    }

    if !schema.npc_exclusive().windows(2).all(|w| w[0] < w[1]) {
        problems.push("NPC-exclusive values are not sorted".to_string());
    }

    problems
}

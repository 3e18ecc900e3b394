use std::fs;
use std::process;

use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use tracing_subscriber::EnvFilter;

use pianovoice::{
    degree_name, format_notes, generate_drill, templates, ChordCategory, ChordType, NoteName,
    PracticeMode, PracticeSettings, VoicingCatalog, VoicingEngine, VoicingError, VoicingStyle,
};

#[derive(Parser)]
#[command(name = "pianovoice", about = "Jazz piano voicing practice generator")]
struct Cli {
    /// Recipe catalog YAML to use instead of the built-in table
    #[arg(long, global = true)]
    catalog: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a progression with voicings
    Drill {
        /// Settings YAML; flags below override it
        #[arg(long)]
        config: Option<String>,
        #[arg(long)]
        key: Option<NoteName>,
        /// Template id, or `random`
        #[arg(long)]
        progression: Option<String>,
        #[arg(long)]
        bars: Option<usize>,
        /// Voicing style filter (repeatable)
        #[arg(long = "style")]
        styles: Vec<VoicingStyle>,
        /// Random voicings instead of smooth voice leading
        #[arg(long)]
        random: bool,
        /// Voice everything with the root (full voicings)
        #[arg(long)]
        solo: bool,
        /// Pick a random key
        #[arg(long)]
        random_key: bool,
        #[arg(long)]
        sharps: bool,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show a chord's definition and every voicing recipe on a root
    Chord {
        root: NoteName,
        chord_type: ChordType,
        #[arg(long)]
        sharps: bool,
    },
    /// List progressions, chord types and voicing styles
    List,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), VoicingError> {
    let catalog = match &cli.catalog {
        Some(path) => VoicingCatalog::from_yaml(&read(path)?)?,
        None => VoicingCatalog::builtin(),
    };
    let engine = VoicingEngine::new(catalog)?;

    match cli.command {
        Command::Drill {
            config,
            key,
            progression,
            bars,
            styles,
            random,
            solo,
            random_key,
            sharps,
            seed,
        } => {
            let mut settings = match config {
                Some(path) => PracticeSettings::from_yaml(&read(&path)?)?,
                None => PracticeSettings::default(),
            };
            if let Some(key) = key {
                settings.key = key;
            }
            if let Some(progression) = progression {
                settings.progression_id = progression;
            }
            if let Some(bars) = bars {
                settings.bars = bars;
            }
            if !styles.is_empty() {
                settings.voicing_styles = styles;
            }
            if random {
                settings.smooth = false;
            }
            if solo {
                settings.mode = PracticeMode::Solo;
            }
            if random_key {
                settings.random_key_per_loop = true;
            }
            if sharps {
                settings.prefer_flats = false;
            }

            let mut rng = match seed {
                Some(seed) => Pcg32::seed_from_u64(seed),
                None => Pcg32::from_entropy(),
            };
            let drill = generate_drill(&settings, &engine, &mut rng)?;

            if cli.json {
                print_json(&drill);
            } else {
                println!("Key: {}  Progression: {}", drill.key, drill.progression_id);
                for (chord, voicing) in drill.steps() {
                    println!(
                        "{:<10} {:<8} {:<16} LH: {:<14} RH: {}",
                        chord.symbol,
                        chord.numeral,
                        voicing.recipe.name,
                        format_notes(&voicing.left_hand),
                        format_notes(&voicing.right_hand)
                    );
                }
            }
        }
        Command::Chord {
            root,
            chord_type,
            sharps,
        } => {
            let voicings = engine.chord_reference(root, chord_type, !sharps);
            if cli.json {
                print_json(&voicings);
            } else {
                let def = chord_type.definition();
                println!("{}{} - {}", root, def.short_name, def.name);
                println!("  {}", def.description);
                println!("  Tones:    {}", degrees(def.intervals, chord_type));
                println!("  Tensions: {}", degrees(def.tensions, chord_type));
                for voicing in &voicings {
                    println!(
                        "  [{}] {} ({} | {})",
                        voicing.recipe.style,
                        voicing.recipe.name,
                        degrees(&voicing.recipe.left_hand, chord_type),
                        degrees(&voicing.recipe.right_hand, chord_type)
                    );
                    println!(
                        "      LH: {:<14} RH: {}",
                        format_notes(&voicing.left_hand),
                        format_notes(&voicing.right_hand)
                    );
                }
            }
        }
        Command::List => {
            if cli.json {
                print_json(templates());
                return Ok(());
            }
            println!("Progressions:");
            for template in templates() {
                let numerals: Vec<&str> = template.chords.iter().map(|c| c.symbol).collect();
                println!("  {:<20} {:<26} {}", template.id, template.name, numerals.join(" "));
            }
            println!("Chord types:");
            for category in ChordCategory::ALL {
                let codes: Vec<&str> = category.chord_types().iter().map(|ct| ct.code()).collect();
                println!("  {:<11} {}", format!("{:?}", category), codes.join(" "));
            }
            println!("Voicing styles:");
            for style in VoicingStyle::ALL {
                println!("  {:<11} {}", style.code(), style.display_name());
            }
        }
    }

    Ok(())
}

fn read(path: &str) -> Result<String, VoicingError> {
    fs::read_to_string(path).map_err(|e| VoicingError::ReadError {
        path: path.to_string(),
        message: e.to_string(),
    })
}

fn degrees(intervals: &[i32], chord_type: ChordType) -> String {
    if intervals.is_empty() {
        return "-".to_string();
    }
    intervals
        .iter()
        .map(|i| degree_name(*i, chord_type))
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            process::exit(1);
        }
    }
}

use anyhow::Result;
use automaton_palette::{PaletteKind, NUM_STATES};
use clap::{value_t, App, Arg};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const NAME: &str = env!("CARGO_PKG_NAME");
const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");

fn main() -> Result<()> {
    let default_states = NUM_STATES.to_string();
    let matches = App::new(NAME)
        .version(VERSION)
        .author(AUTHOR)
        .about("Preview cellular automaton palettes as a PNG swatch or a CSV table")
        .arg(
            Arg::with_name("KIND")
                .help("Palette to build: high-tech, banana, blue-candy, rainbow, contrast or random")
                .default_value("high-tech")
                .index(1),
        )
        .arg(
            Arg::with_name("states")
                .short("n")
                .long("states")
                .takes_value(true)
                .default_value(&default_states)
                .help("Number of distinct cell states"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .help("Destination file, .csv for a table, anything else for a PNG [default: <KIND>.png]"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .takes_value(true)
                .help("Seed for the random palette"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Sets the level of verbosity"),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .help("Silence all output"),
        )
        .get_matches();

    let verbose = matches.occurrences_of("verbose") as usize;
    let quiet = matches.is_present("quiet");
    stderrlog::new()
        .module(module_path!())
        .quiet(quiet)
        .verbosity(verbose)
        .init()?;

    let kind: PaletteKind = value_t!(matches, "KIND", PaletteKind).unwrap_or_else(|e| e.exit());
    let states = value_t!(matches, "states", usize).unwrap_or_else(|e| e.exit());
    let seed = if matches.is_present("seed") {
        Some(value_t!(matches, "seed", u64).unwrap_or_else(|e| e.exit()))
    } else {
        None
    };
    let output = matches
        .value_of("output")
        .map(str::to_string)
        .unwrap_or_else(|| format!("{}.png", kind));

    automaton_palette::export(kind, states, seed, output)
}

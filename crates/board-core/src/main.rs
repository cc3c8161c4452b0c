use anyhow::Context;
use board_core::{search_text, validation_text, BoardConfig, BoardError, BoardResult, HomePage, ValidationSummary};
use board_location::CellWidth;
use board_taxonomy::TaxonomySnapshot;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("board")
        .version(board_core::VERSION)
        .about("Classifieds board: taxonomy validation, category search and location labels")
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("json-logs")
                .long("json-logs")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON"),
        )
        .subcommand_required(true)
        .subcommand(
            Command::new("validate")
                .about("Validate a taxonomy document")
                .arg(
                    Arg::new("taxonomy")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Taxonomy JSON file"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(
            Command::new("search")
                .about("Filter the taxonomy by a search query")
                .arg(
                    Arg::new("taxonomy")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Taxonomy JSON file"),
                )
                .arg(Arg::new("query").default_value("").help("Search text"))
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(
            Command::new("label")
                .about("Compute the header location label")
                .arg(
                    Arg::new("city")
                        .long("city")
                        .action(ArgAction::Append)
                        .help("City id, in selection order (repeatable)"),
                )
                .arg(
                    Arg::new("radius")
                        .long("radius")
                        .value_parser(value_parser!(f64))
                        .allow_negative_numbers(true)
                        .help("Radius in miles, one of the configured presets"),
                )
                .arg(
                    Arg::new("max-width")
                        .long("max-width")
                        .value_parser(value_parser!(f64))
                        .help("Label width budget in pixels"),
                ),
        )
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn load_config(path: Option<&Path>) -> BoardResult<BoardConfig> {
    match path {
        Some(path) => Ok(BoardConfig::load(path)?),
        None => Ok(BoardConfig::default()),
    }
}

fn load_taxonomy(args: &ArgMatches) -> anyhow::Result<TaxonomySnapshot> {
    let path = args
        .get_one::<PathBuf>("taxonomy")
        .context("taxonomy path is required")?;
    Ok(TaxonomySnapshot::load(path).map_err(BoardError::from)?)
}

fn run_label(config: BoardConfig, args: &ArgMatches) -> BoardResult<String> {
    let config = match args.get_one::<f64>("max-width") {
        Some(&width) => config.with_label_max_width(width),
        None => config,
    };
    let measure = CellWidth::new(config.px_per_cell);
    let mut page = HomePage::new(config, TaxonomySnapshot::default());

    for city_id in args.get_many::<String>("city").into_iter().flatten() {
        page.select_city(city_id)?;
    }
    if let Some(&radius) = args.get_one::<f64>("radius") {
        page.set_radius(radius)?;
    }

    Ok(page.location_label(&measure))
}

fn main() -> anyhow::Result<()> {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("json-logs"));
    let config = load_config(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))?;

    match matches.subcommand() {
        Some(("validate", args)) => {
            let snapshot = load_taxonomy(args)?;
            if args.get_flag("json") {
                println!("{}", serde_json::to_string_pretty(&ValidationSummary::new(&snapshot))?);
            } else {
                print!("{}", validation_text(&snapshot));
            }
            std::process::exit(if snapshot.is_clean() { 0 } else { 1 });
        }
        Some(("search", args)) => {
            let snapshot = load_taxonomy(args)?;
            let query = args.get_one::<String>("query").map_or("", String::as_str);
            let mut page = HomePage::new(config, snapshot);
            page.set_query(query);

            let result = page.content();
            if args.get_flag("json") {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", search_text(&result));
            }
        }
        Some(("label", args)) => {
            println!("{}", run_label(config, args)?);
        }
        _ => {}
    }

    Ok(())
}

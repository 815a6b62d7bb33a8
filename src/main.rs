//! Filmroom CLI application entry point
//!
//! Command-line front end over the filmroom library. It loads JSON datasets
//! exported by the video tooling and runs the filter engine and searches on
//! them.
//!
//! # Usage
//!
//! ```bash
//! # Third down in the red zone
//! filmroom filter -p plays.json -f down=3 --zone "Red Zone"
//!
//! # First or second down runs between the 20s
//! filmroom filter -p plays.json -f down=1,2 -f playType=Run -r yardLine=20..80
//!
//! # What personnel groupings were used?
//! filmroom facets -p plays.json offensivePersonnel
//!
//! # Find library entries and navigate
//! filmroom search -l library.json "week 1"
//! filmroom breadcrumb -l library.json s24-w1-off
//!
//! # Keyword search over clips
//! filmroom clips -c clips.json red zone fade
//! ```
//!
//! # Configuration
//!
//! Defaults such as dataset paths and result limits are read from
//! `~/.config/filmroom/config.toml` on Linux; see `filmroom config show`.

use filmroom::{
    FilmroomError,
    cli::{Cli, Commands},
    commands::{self, filter::FilterArgs},
    config::FilmroomConfig,
};
use log::{debug, error};

type Result<T> = std::result::Result<T, FilmroomError>;

fn init_logging(cli: &Cli) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .format_timestamp_millis()
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = FilmroomConfig::load()?;
    let quiet = cli.quiet || config.quiet;
    debug!("Command-line args: {cli:?}");

    match &cli.command {
        Commands::Filter {
            plays,
            filters,
            ranges,
            zones,
            json,
        } => {
            let args = FilterArgs {
                plays: plays.as_deref(),
                filters,
                ranges,
                zones,
                json: *json,
            };
            commands::filter(&config, &args, quiet)
        }
        Commands::Facets { plays, category } => {
            commands::facets(&config, plays.as_deref(), category, quiet)
        }
        Commands::Search { library, query } => {
            commands::search(&config, library.as_deref(), query, quiet)
        }
        Commands::Breadcrumb { library, id } => {
            commands::breadcrumb(&config, library.as_deref(), id.as_deref(), quiet)
        }
        Commands::Clips {
            clips,
            limit,
            query,
        } => commands::clips(&config, clips.as_deref(), query, *limit, quiet),
        Commands::Config { command } => commands::config(&config, command, quiet),
    }
}

fn main() {
    let cli = Cli::parse_args();
    init_logging(&cli);

    if let Err(e) = run(&cli) {
        error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

use std::fmt::Display;

use clap::Parser;
use inquire::{CustomType, InquireError, Select};
use league_sim::core::{MAX_TEAMS, MIN_TEAMS, TeamId};
use league_sim::league::{RecordMode, Tournament, TournamentBuilder};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "league",
    about = "Simulate a round robin football league",
    long_about = "Draft teams from a fixed pool of 100 players, play every pairing once\n\
                  and print the resulting league table."
)]
struct Args {
    /// Random seed for a reproducible league
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Count wins, draws and losses as they happen instead of deriving
    /// them from points
    #[arg(long = "tracked-records")]
    tracked_records: bool,

    /// Log every simulated match
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

#[derive(Debug, Copy, Clone)]
enum MenuOption {
    Configure,
    Simulate,
    Standings,
    TeamDetail,
    Exit,
}

impl Display for MenuOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MenuOption::Configure => "Configure tournament",
            MenuOption::Simulate => "Simulate matches",
            MenuOption::Standings => "Show standings",
            MenuOption::TeamDetail => "Show team detail",
            MenuOption::Exit => "Exit",
        };
        f.write_str(label)
    }
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let mut builder = TournamentBuilder::new();
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    if args.tracked_records {
        builder = builder.record_mode(RecordMode::Tracked);
    }
    let mut tournament = builder.build();

    println!("=== FOOTBALL LEAGUE SIMULATOR ===");
    if let Some(seed) = tournament.config().seed {
        println!("Seed: {seed}");
    }

    if let Err(e) = run_menu(&mut tournament) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_menu(tournament: &mut Tournament) -> Result<(), InquireError> {
    let options = vec![
        MenuOption::Configure,
        MenuOption::Simulate,
        MenuOption::Standings,
        MenuOption::TeamDetail,
        MenuOption::Exit,
    ];

    loop {
        let choice = match Select::new("Main menu:", options.clone()).prompt() {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        match choice {
            MenuOption::Configure => {
                let num_teams = CustomType::<usize>::new("Number of teams:")
                    .with_help_message(&format!(
                        "requires a number between {MIN_TEAMS} - {MAX_TEAMS}"
                    ))
                    .with_error_message("Please type a whole number")
                    .prompt()?;

                match tournament.configure_tournament(num_teams) {
                    Ok(()) => println!("Tournament configured with {num_teams} teams!"),
                    Err(e) => println!("Error: {e}"),
                }
            }
            MenuOption::Simulate => {
                if !tournament.is_configured() {
                    println!("Configure the tournament first.");
                    continue;
                }
                tournament.simulate_round();
                println!("Matches simulated!");
            }
            MenuOption::Standings => {
                println!();
                println!("=== STANDINGS ===");
                print!("{}", tournament.get_standings().to_table());
            }
            MenuOption::TeamDetail => {
                let team_id = CustomType::<TeamId>::new("Team id:")
                    .with_error_message("Please type a whole number")
                    .prompt()?;

                match tournament.get_team_detail(team_id) {
                    Ok(detail) => {
                        println!();
                        print!("{}", detail.to_text());
                    }
                    Err(e) => println!("Error: {e}"),
                }
            }
            MenuOption::Exit => return Ok(()),
        }
    }
}

use stallpick::config::Config;
use stallpick::models::{Dataset, HomeChoice};
use stallpick::services::{FixedClock, RandomChooser, Session, SessionState, SystemClock, SystemLauncher};
use stallpick::AppError;
use std::env;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_help() {
    eprintln!(
        "\
Usage: stallpick [OPTIONS]

Pick a random food stall that is open right now near home.

Options:
  --dataset=PATH    Dataset JSON (default: $STALLPICK_DATASET or data/stalls.json)
  --home=a|b        Home to measure from (default: $STALLPICK_HOME or a)
  --at=DATETIME     Evaluate at a fixed local time, e.g. 2024-01-05T23:30
  --once            Pick once, print the result and exit
  --open            With --once, open walking directions after picking
  --json            Print state as JSON
  --help            Show this help message

Interactive commands (without --once):
  a | b             Switch home
  pick              Pick an open stall
  open              Open walking directions for the current pick
  list              List stalls open now
  state             Show the current state
  quit              Exit

Environment variables:
  STALLPICK_UTC_OFFSET    Offset for \"now\", e.g. +08:00
  STALLPICK_OPEN_COMMAND  Program used to open links
  STALLPICK_SEED          Seed for reproducible picks"
    );
}

fn render(state: &SessionState, json: bool) {
    if json {
        match serde_json::to_string_pretty(state) {
            Ok(out) => println!("{}", out),
            Err(e) => eprintln!("Failed to serialize state: {}", e),
        }
        return;
    }

    println!("Home: {}", state.home_choice);
    match &state.selected_stall {
        Some(stall) => {
            println!("Stall: {}", stall.name);
            match state.distance_km {
                Some(distance) => println!("Distance: {}", distance),
                None => println!("Distance: unavailable"),
            }
            if let Some(ref url) = state.directions_url {
                println!("Directions: {}", url);
            }
        }
        None => println!("Stall: none picked"),
    }
    if let Some(ref error) = state.error {
        println!("Error: {}", error);
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--help") {
        print_help();
        return Ok(());
    }

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stallpick=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration, then let CLI flags override it
    let config = Config::from_env()
        .map_err(AppError::Config)?
        .with_args(&args)?;

    let fixed_at = args
        .iter()
        .find_map(|a| a.strip_prefix("--at="))
        .map(|raw| {
            let format = time::macros::format_description!("[year]-[month]-[day]T[hour]:[minute]");
            time::PrimitiveDateTime::parse(raw, &format)
                .map_err(|e| AppError::Config(format!("Invalid --at '{}': {}", raw, e)))
        })
        .transpose()?;
    let once = args.iter().any(|a| a == "--once");
    let open = args.iter().any(|a| a == "--open");
    let json = args.iter().any(|a| a == "--json");

    let dataset = Arc::new(Dataset::load(&config.dataset_path)?);

    let mut session = Session::new(dataset, config.home_choice)
        .with_launcher(Arc::new(SystemLauncher::new(config.open_command.clone())));
    session = match fixed_at {
        Some(at) => {
            tracing::info!("Evaluating at fixed time {}", at);
            session.with_clock(FixedClock(at))
        }
        None => session.with_clock(SystemClock::new(config.utc_offset)),
    };
    if let Some(seed) = config.seed {
        session = session.with_chooser(RandomChooser::seeded(seed));
    }

    if once {
        session.pick();
        if open {
            session.open_directions_and_wait().await;
        }
        render(session.refresh(), json);
        return Ok(());
    }

    eprintln!("Commands: a, b, pick, open, list, state, quit");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "" => continue,
            "quit" | "exit" | "q" => break,
            "pick" | "p" => render(session.pick(), json),
            "open" | "o" => match session.open_directions_and_wait().await {
                Some(state) => render(state, json),
                None => println!("No directions yet; pick a stall first"),
            },
            "list" | "l" => {
                let open_now = session.open_now();
                if open_now.is_empty() {
                    println!(
                        "Nothing open in {}",
                        session.home_choice().stall_list_name()
                    );
                }
                for stall in open_now {
                    println!("- {}", stall.name);
                }
            }
            "state" | "s" => render(session.refresh(), json),
            other => match other.parse::<HomeChoice>() {
                Ok(choice) => {
                    session.set_home_choice(choice);
                    render(session.state(), json);
                }
                Err(_) => println!("Unknown command: {}", other),
            },
        }
    }

    Ok(())
}

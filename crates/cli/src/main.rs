mod console;
mod locale;
mod log;
mod narrate;

use anyhow::{Context, Result};
use clap::Parser;
use console::ConsoleInput;
use flip7_core::{Game, GameConfig, RngState};
use locale::UiLocale;
use log::{JsonlLog, Tee};
use narrate::Narrator;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "flip7", about = "Flip 7 push-your-luck card game for a shared terminal")]
struct Args {
    /// Seed for a reproducible shuffle.
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file overriding the game rules.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for the event log.
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,

    /// Player name, in seat order. Repeat once per player to skip setup prompts.
    #[arg(long = "player", value_name = "NAME")]
    players: Vec<String>,

    #[arg(long, short = 'l', env = "FLIP7_LANG")]
    lang: Option<String>,

    /// Debug diagnostics on stderr.
    #[arg(long, short)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);
    if let Err(err) = run(args) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let body = fs::read_to_string(path)
        .with_context(|| format!("read config from {}", path.display()))?;
    serde_json::from_str(&body).with_context(|| format!("parse config {}", path.display()))
}

fn run(args: Args) -> Result<()> {
    let locale = UiLocale::from_opt(args.lang.as_deref());
    let config = load_config(args.config.as_deref())?;
    let rng = args.seed.map_or_else(RngState::from_entropy, RngState::from_seed);
    tracing::debug!(seed = rng.seed(), locale = locale.code(), "starting");

    let (log_path, log) = JsonlLog::create_in(&args.log_dir)
        .with_context(|| format!("open event log in {}", args.log_dir.display()))?;
    println!("=== FLIP7 ===");
    println!(
        "{} {}",
        locale.text("All events are logged to:", "Tous les événements sont loggés dans:"),
        log_path.display()
    );

    let mut input = ConsoleInput::new(io::stdin().lock(), io::stdout(), locale);
    let names = if args.players.len() >= config.min_players {
        args.players
    } else {
        input.ask_players(config.min_players)?
    };

    let mut game = Game::new(names, config, rng)?;
    let mut sink = Tee::new(log, Narrator::new(io::stdout(), locale));
    let summary = game.run(&mut input, &mut sink)?;
    tracing::info!(rounds = summary.rounds, winners = ?summary.winners, "game finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_collect_repeated_players() {
        let args = Args::try_parse_from([
            "flip7", "--seed", "7", "--player", "Ada", "--player", "Bo", "-l", "fr",
        ])
        .unwrap();
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.players, vec!["Ada", "Bo"]);
        assert_eq!(UiLocale::from_opt(args.lang.as_deref()), UiLocale::FrFr);
        assert_eq!(args.log_dir, PathBuf::from("logs"));
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let path = std::env::temp_dir().join(format!("flip7-config-{}.json", std::process::id()));
        fs::write(&path, r#"{ "target_score": 50 }"#).unwrap();
        let config = load_config(Some(&path)).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(config.target_score, 50);
        assert_eq!(config.flip_seven_count, 7);
        assert_eq!(config.flip_seven_bonus, 15);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let path = Path::new("/definitely/not/here/flip7.json");
        assert!(load_config(Some(path)).is_err());
    }
}

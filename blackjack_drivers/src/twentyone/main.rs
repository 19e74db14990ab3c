mod terminal;

use std::io;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::info;
use twentyone::{parse_cards, Error, Round, Rule, Shoe};
use twentyone_drivers::{default_config_path, parse_config_from_file, Config};

use crate::terminal::{Prompt, TerminalObserver};

const DEFAULT_CONFIG_PATH: &str = "~/.twentyone.yml";

#[derive(Debug, Parser)]
#[command(author, about, long_about = None)]
struct CommandLineArgs {
    /// The path of the config file
    #[arg(short, long, default_value_t = String::from(DEFAULT_CONFIG_PATH))]
    config: String,

    /// Overrides the player name from the config file
    #[arg(short, long)]
    name: Option<String>,

    /// Seeds the shuffle so a session can be replayed
    #[arg(long)]
    seed: Option<u64>,

    /// Deals exactly these cards in order, e.g. "T,3,2,5,T"
    #[arg(long)]
    stack: Option<String>,

    /// Plays a single round and exits
    #[arg(long)]
    once: bool,
}

fn load_config(path: &str) -> anyhow::Result<Config> {
    if path != DEFAULT_CONFIG_PATH {
        return parse_config_from_file(path);
    }
    match default_config_path() {
        Some(path) if path.is_file() => parse_config_from_file(path),
        _ => {
            info!("no config file at {}, using the default rule", DEFAULT_CONFIG_PATH);
            Ok(Config::default())
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = CommandLineArgs::parse();

    let config = load_config(&args.config)?;
    let seed = args.seed.or(config.table.seed);
    let mut rule: Rule = config.try_into().context("invalid rule in config file")?;
    if let Some(name) = args.name {
        rule.player_name = name;
    }

    let shoe = match &args.stack {
        Some(stack) => Shoe::stacked(
            parse_cards(stack).context("invalid --stack")?,
            rule.exhaustion_policy,
        ),
        None => Shoe::shuffled(rule.exhaustion_policy, seed),
    };

    let mut prompt = Prompt::new(io::stdin().lock(), io::stdout());
    let mut observer = TerminalObserver::new(io::stdout());
    let mut round = Round::new(&rule, shoe);
    loop {
        match round.play(&mut prompt, &mut observer) {
            Ok(result) => info!("round finished: {:?}", result),
            Err(Error::Input(err)) if err.kind() == io::ErrorKind::UnexpectedEof => {
                println!("\nGoodbye!");
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        }

        if args.once {
            break;
        }
        match prompt.play_again() {
            Ok(true) => round.new_round()?,
            Ok(false) => break,
            Err(Error::Input(err)) if err.kind() == io::ErrorKind::UnexpectedEof => break,
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

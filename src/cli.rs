use std::collections::HashSet;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use rand::Rng;

use crate::expression::Operator;
use crate::operands::{MAX_SMALL_COUNT, MIN_SMALL_COUNT, NUMBER_COUNT, draw_numbers};
use crate::solver::{ParenthesesMode, SearchSettings, SolutionSearch};
use crate::target::pick_target;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Bracket layouts allowed in generated solutions
#[derive(Debug, Clone, ValueEnum)]
pub enum ParenthesesOption {
    Nested,
    Flat,
    Off,
}

impl ParenthesesOption {
    pub fn to_mode(&self) -> ParenthesesMode {
        match self {
            ParenthesesOption::Nested => ParenthesesMode::Nested,
            ParenthesesOption::Flat => ParenthesesMode::Flat,
            ParenthesesOption::Off => ParenthesesMode::None,
        }
    }
}

/// Numbersmith - fair targets and solutions for a numbers round
#[derive(Parser, Debug)]
#[command(name = "numbersmith")]
#[command(about = "Pick fair target numbers and search for matching expressions")]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Pick a fair target for seven numbers, drawing them first if none
    /// are given
    Pick {
        /// The seven drawn numbers; omit to draw a fresh selection
        numbers: Vec<i32>,

        /// How many small numbers to draw automatically (default: random)
        #[arg(short, long)]
        small: Option<usize>,

        /// Recently used targets to de-prioritize
        #[arg(short, long)]
        recent: Vec<i32>,
    },
    /// Search for expressions that evaluate exactly to a target
    Solve {
        /// The drawn numbers available to the search
        numbers: Vec<i32>,

        /// Target value expressions must hit
        #[arg(short, long)]
        target: i32,

        /// Minimum number count per solution
        #[arg(long, default_value_t = 4)]
        min_count: usize,

        /// Maximum number count per solution
        #[arg(long, default_value_t = 7)]
        max_count: usize,

        /// Maximum number of solutions to generate
        #[arg(long, default_value_t = 10)]
        max_solutions: usize,

        /// Bracket layouts to allow
        #[arg(long, value_enum, default_value = "nested")]
        parentheses: ParenthesesOption,

        /// Allowed operators, e.g. "+-*/"
        #[arg(long, default_value = "+-*/")]
        operators: String,

        /// Maximum seconds to search for
        #[arg(long, default_value_t = 10)]
        seconds: u64,
    },
}

pub fn parse_operators(symbols: &str) -> Result<Vec<Operator>> {
    let mut operators = Vec::new();
    for symbol in symbols.chars() {
        match Operator::from_symbol(symbol) {
            Some(op) => {
                if !operators.contains(&op) {
                    operators.push(op);
                }
            }
            None => bail!("unknown operator '{}', expected one of + - * /", symbol),
        }
    }
    Ok(operators)
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(&args.log_level)?;

    match args.command {
        Command::Pick {
            numbers,
            small,
            recent,
        } => run_pick(numbers, small, &recent),
        Command::Solve {
            numbers,
            target,
            min_count,
            max_count,
            max_solutions,
            parentheses,
            operators,
            seconds,
        } => {
            let operators = parse_operators(&operators)?;
            let settings = SearchSettings::new(
                min_count,
                max_count,
                &operators,
                parentheses.to_mode(),
                max_solutions,
                Duration::from_secs(seconds),
            )
            .context("Invalid search settings")?;
            run_solve(&numbers, target, &settings)
        }
    }
}

fn run_pick(numbers: Vec<i32>, small: Option<usize>, recent: &[i32]) -> Result<()> {
    let numbers = if numbers.is_empty() {
        let small_count = small
            .unwrap_or_else(|| rand::rng().random_range(MIN_SMALL_COUNT..=MAX_SMALL_COUNT));
        let drawn = draw_numbers(small_count).context("Invalid draw request")?;
        println!(
            "Numbers: {}",
            drawn
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        );
        drawn
    } else {
        numbers
    };

    let numbers: [i32; NUMBER_COUNT] = numbers
        .try_into()
        .map_err(|numbers: Vec<i32>| {
            anyhow::anyhow!(
                "expected exactly {} numbers, got {}",
                NUMBER_COUNT,
                numbers.len()
            )
        })?;

    let recent: HashSet<i32> = recent.iter().copied().collect();
    let target = pick_target(&numbers, &recent).context("No fair target for these numbers")?;
    println!("Target: {}", target);
    Ok(())
}

fn run_solve(numbers: &[i32], target: i32, settings: &SearchSettings) -> Result<()> {
    info!(
        "Searching for {} using numbers {:?} within {:?}",
        target, numbers, settings.time_limit
    );

    let search = SolutionSearch::new();
    let solutions = search
        .generate_solutions(numbers, target, settings)
        .context("Search rejected")?;

    if solutions.is_empty() {
        println!("No solutions found.");
    } else {
        for solution in solutions {
            println!("{}", solution);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_operators() {
        let result = parse_operators("+-*/");
        assert!(result.is_ok());
        if let Ok(operators) = result {
            assert_eq!(operators, Operator::ALL.to_vec());
        }

        let result = parse_operators("++");
        assert!(result.is_ok());
        if let Ok(operators) = result {
            assert_eq!(operators, vec![Operator::Add]);
        }

        assert!(parse_operators("+^").is_err());
    }

    #[test]
    fn test_parentheses_option_mapping() {
        assert_eq!(ParenthesesOption::Nested.to_mode(), ParenthesesMode::Nested);
        assert_eq!(ParenthesesOption::Flat.to_mode(), ParenthesesMode::Flat);
        assert_eq!(ParenthesesOption::Off.to_mode(), ParenthesesMode::None);
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}

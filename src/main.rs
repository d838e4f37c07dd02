mod cli;
mod expression;
mod operands;
mod placement;
mod solver;
mod target;
mod utils;

fn main() {
    if let Err(err) = cli::run() {
        eprintln!("Error: {}", err);
        #[allow(clippy::exit)]
        std::process::exit(1);
    }
}

mod handlers;
pub mod parse;

use clap::Parser;
pub use parse::Cli;

use crate::core::error::BumpError;

pub fn run() -> Result<(), BumpError> {
    let cli = parse::Cli::parse();
    match cli.cmd {
        parse::Command::Ranks(a) => handlers::ranks(&a),
        parse::Command::Layout(a) => handlers::layout(&a),
        parse::Command::Svg(a) => handlers::svg(&a),
        parse::Command::Examples => {
            handlers::examples();
            Ok(())
        }
    }
}

use clap::{Parser, Subcommand};

use crate::core::{opts::OptValue, rank::TieMethod};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "bumplot",
    about = "Rank wide CSV series per category and emit bump-chart geometry"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the per-row rank of every series
    Ranks(RankArgs),
    /// Print ticks, colours, style arguments and curves for every series
    Layout(ChartArgs),
    /// Print SVG path data, one line per series
    Svg(ChartArgs),
    /// Print example invocations
    Examples,
}

/// Flags shared by every data command.
#[derive(Parser, Debug)]
pub struct RankArgs {
    /// Wide CSV path (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    /// Series to use, comma separated (all non-category columns if omitted)
    #[arg(long, value_delimiter = ',')]
    pub series: Vec<String>,

    /// Give rank 1 to the smallest value instead of the largest
    #[arg(long)]
    pub ascending: bool,

    /// Tie handling: ordinal, min or dense
    #[arg(long, default_value = "ordinal")]
    pub ties: TieMethod,

    /// Label ranks 1st, 2nd, 3rd, ...
    #[arg(long)]
    pub ordinal: bool,

    /// Emit timing diagnostics
    #[arg(long)]
    pub debug: bool,
}

/// `bumplot layout …` / `bumplot svg …`
#[derive(Parser, Debug)]
pub struct ChartArgs {
    #[command(flatten)]
    pub rank: RankArgs,

    /// Curve tightness; 0 draws straight segments
    #[arg(long, default_value_t = crate::core::constants::DEFAULT_CURVE_FORCE)]
    pub force: f64,

    /// Put rank 1 at the bottom of the chart
    #[arg(long)]
    pub no_invert: bool,

    /// Explicit colours, comma separated, one per series
    #[arg(long, value_delimiter = ',')]
    pub colors: Option<Vec<String>>,

    /// Chart-wide styling option, `key=value` (repeatable)
    #[arg(long = "opt", value_name = "KEY=VALUE", value_parser = parse_opt)]
    pub opts: Vec<(String, OptValue)>,
}

fn parse_opt(s: &str) -> Result<(String, OptValue), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{s}`"))?;
    Ok((key.trim().to_owned(), OptValue::parse_str(value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_flags_parse() {
        let cli = Cli::try_parse_from([
            "bumplot",
            "layout",
            "data.csv",
            "--series",
            "a,b",
            "--ties",
            "dense",
            "--force",
            "0.5",
            "--colors",
            "red,blue",
            "--opt",
            "line_width=2",
            "--opt",
            "marker=o",
        ])
        .unwrap();
        let Command::Layout(a) = cli.cmd else {
            panic!("expected layout");
        };
        assert_eq!(a.rank.file, "data.csv");
        assert_eq!(a.rank.series, ["a", "b"]);
        assert_eq!(a.rank.ties, TieMethod::Dense);
        assert!((a.force - 0.5).abs() < f64::EPSILON);
        assert_eq!(a.colors, Some(vec!["red".to_owned(), "blue".to_owned()]));
        assert_eq!(
            a.opts,
            [
                ("line_width".to_owned(), OptValue::Int(2)),
                ("marker".to_owned(), OptValue::from("o")),
            ]
        );
    }

    #[test]
    fn opt_without_equals_is_rejected() {
        assert!(parse_opt("zorder").is_err());
    }

    #[test]
    fn ranks_defaults() {
        let cli = Cli::try_parse_from(["bumplot", "ranks"]).unwrap();
        let Command::Ranks(a) = cli.cmd else {
            panic!("expected ranks");
        };
        assert_eq!(a.file, "-");
        assert!(a.series.is_empty());
        assert_eq!(a.ties, TieMethod::Ordinal);
        assert!(!a.ascending);
    }
}

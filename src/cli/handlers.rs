use std::{fmt::Write as _, time::Instant};

use crate::{
    core::{
        config::ChartConfig,
        data::read_csv_from_path,
        error::BumpError,
        opts::{BackendArgs, BumpOpts},
        ordinal::to_ordinal,
        rank::{RankOptions, RankOrder, rank},
        table::{ObservationTable, RankedTable},
    },
    layout::{BumpChart, layout as layout_chart},
};

use super::parse::{ChartArgs, RankArgs};

/// Table plus the series to work on (all of them unless `--series` was given).
fn load(a: &RankArgs) -> Result<(ObservationTable, Vec<String>), BumpError> {
    let t_ingest = Instant::now();
    let table = read_csv_from_path(&a.file)?;
    if a.debug {
        eprintln!(
            "CSV ingest: {} µs   ({} rows, {} series)",
            t_ingest.elapsed().as_micros(),
            table.len(),
            table.series().len()
        );
    }
    let names = if a.series.is_empty() {
        table.series_names().map(str::to_owned).collect()
    } else {
        a.series.clone()
    };
    Ok((table, names))
}

fn rank_options(a: &RankArgs) -> RankOptions {
    RankOptions {
        order: if a.ascending {
            RankOrder::Ascending
        } else {
            RankOrder::Descending
        },
        ties: a.ties,
    }
}

pub fn ranks(a: &RankArgs) -> Result<(), BumpError> {
    let (table, names) = load(a)?;
    let t0 = Instant::now();
    let ranked = rank(&table, table.category_key(), &names, rank_options(a))?;
    if a.debug {
        eprintln!("rank: {} µs", t0.elapsed().as_micros());
    }
    print!("{}", format_ranked(&ranked, a.ordinal));
    Ok(())
}

fn chart(a: &ChartArgs) -> Result<BumpChart, BumpError> {
    let (table, names) = load(&a.rank)?;
    let defaults = BumpOpts::from_pairs(a.opts.iter().cloned())?;
    let cfg = ChartConfig::builder()
        .curve_force(a.force)
        .invert_y_axis(!a.no_invert)
        .ordinal_labels(a.rank.ordinal)
        .order(rank_options(&a.rank).order)
        .ties(a.rank.ties)
        .colors_opt(a.colors.clone())
        .defaults(defaults)
        .build()?;

    let t0 = Instant::now();
    let chart = layout_chart(&table, table.category_key(), &names, &cfg)?;
    if a.rank.debug {
        eprintln!(
            "layout: {} µs   ({} curves)",
            t0.elapsed().as_micros(),
            chart.series.len()
        );
    }
    Ok(chart)
}

pub fn layout(a: &ChartArgs) -> Result<(), BumpError> {
    let chart = chart(a)?;
    print!("{}", format_layout(&chart));
    Ok(())
}

pub fn svg(a: &ChartArgs) -> Result<(), BumpError> {
    let chart = chart(a)?;
    for s in &chart.series {
        println!("{}\t{}", s.name, s.curve.to_svg_path());
    }
    Ok(())
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "cargo run --"; // adjust if you rename the binary
    println!(
        "
Example invocations
-------------------
• Ranks             : {bin} ranks sample_data/league.csv
• Ordinal labels    : {bin} ranks sample_data/league.csv --ordinal
• Lowest wins       : {bin} ranks sample_data/league.csv --ascending --ties min
• Chart layout      : {bin} layout sample_data/league.csv --force 0.5
• Own colours       : {bin} layout sample_data/league.csv --colors #ffbe0b,#ff006e,#3a86ff
• Styling           : {bin} layout sample_data/league.csv --opt line_width=2 --opt marker=o
• SVG path data     : {bin} svg sample_data/league.csv --series red,blue
• From stdin        : cat sample_data/league.csv | {bin} ranks -
"
    );
}

// --- Formatting ---

/// Ranked table as CSV, category first.
fn format_ranked(ranked: &RankedTable, ordinal: bool) -> String {
    let mut out = String::new();
    out.push_str(ranked.category_key());
    for name in ranked.series_names() {
        out.push(',');
        out.push_str(name);
    }
    out.push('\n');

    for (i, cat) in ranked.categories().iter().enumerate() {
        let _ = write!(out, "{cat}");
        for (_, col) in ranked.columns() {
            let r = col[i];
            if ordinal {
                let _ = write!(out, ",{}", to_ordinal(r));
            } else {
                let _ = write!(out, ",{r}");
            }
        }
        out.push('\n');
    }
    out
}

fn format_args(args: &BackendArgs) -> String {
    let mut out = String::new();
    for (i, (k, v)) in args.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{k}={v}");
    }
    out
}

fn format_layout(chart: &BumpChart) -> String {
    let mut out = String::new();

    let direction = if chart.invert_y_axis {
        "top to bottom"
    } else {
        "bottom to top"
    };
    let y: Vec<&str> = chart.y_ticks.iter().map(|t| t.label.as_str()).collect();
    let _ = writeln!(out, "y ticks ({direction}): {}", y.join(" "));

    let x: Vec<String> = chart
        .x_axis
        .ticks()
        .iter()
        .map(|t| format!("{}={}", t.value, t.label))
        .collect();
    let _ = writeln!(out, "x ticks: {}", x.join(" "));

    for s in &chart.series {
        let ranks: Vec<String> = s.ranks.iter().map(u32::to_string).collect();
        let _ = writeln!(out, "\n[{}] color={}", s.name, s.color);
        let _ = writeln!(out, "  ranks : {}", ranks.join(" "));
        let _ = writeln!(out, "  line  : {}", format_args(&s.line_args));
        let _ = writeln!(out, "  marker: {}", format_args(&s.marker_args));
        let _ = writeln!(out, "  path  : {}", s.curve.to_svg_path());
    }
    out
}

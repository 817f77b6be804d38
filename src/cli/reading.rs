//! Casting commands and reading tables

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use super::output::Output;
use crate::domain::{
    cast_by_coins, cast_by_time, cast_for_date, cast_manual, parse_date, CastMethod, Chart,
    Hexagram, LineKind, Reading,
};
use crate::storage::Corpus;

/// Options shared by every casting command
#[derive(Args, Debug, Clone, Default)]
pub struct ReadingArgs {
    /// Show only the primary hexagram, without the five derived ones
    #[arg(long)]
    pub primary_only: bool,
}

/// Casts with three coins per line
pub fn coins(output: &Output, corpus: &Corpus, with_derived: bool) -> Result<()> {
    let hexagram = cast_by_coins()?;
    show(output, CastMethod::Coins, &hexagram, corpus, with_derived)
}

/// Casts from the clock, or from a given date and hour
pub fn time(
    output: &Output,
    corpus: &Corpus,
    date: Option<&str>,
    hour: Option<u32>,
    lunar: bool,
    with_derived: bool,
) -> Result<()> {
    let (method, hexagram) = match date {
        Some(date) => {
            let (year, month, day) = parse_date(date)?;
            let hour = hour.unwrap_or(0);
            output.verbose_ctx(
                "time",
                &format!("Casting for {year}-{month}-{day} hour {hour} (lunar: {lunar})"),
            );
            let hexagram = cast_for_date(year, month, day, hour, lunar)
                .with_context(|| format!("Cannot cast for date '{date}'"))?;
            (CastMethod::SpecifiedDate, hexagram)
        }
        None => (CastMethod::Time, cast_by_time()),
    };
    show(output, method, &hexagram, corpus, with_derived)
}

/// Casts from explicit line values, bottom first
pub fn manual(output: &Output, corpus: &Corpus, values: &[String], with_derived: bool) -> Result<()> {
    let kinds = values
        .iter()
        .map(|v| v.parse::<LineKind>())
        .collect::<Result<Vec<_>, _>>()?;
    let hexagram = cast_manual(&kinds)?;
    show(output, CastMethod::Manual, &hexagram, corpus, with_derived)
}

fn show(
    output: &Output,
    method: CastMethod,
    hexagram: &Hexagram,
    corpus: &Corpus,
    with_derived: bool,
) -> Result<()> {
    info!(method = method.as_str(), index = hexagram.index, "cast");
    output.verbose_ctx(
        "cast",
        &format!(
            "Cast {} by {}: index {}, lines {:?}",
            hexagram.name,
            method.as_str(),
            hexagram.index,
            hexagram.kinds().map(LineKind::code)
        ),
    );

    let reading = Reading::from_cast(method, hexagram, corpus, with_derived)?;

    if output.is_json() {
        output.data(&reading);
        return Ok(());
    }

    for chart in reading.charts() {
        print_chart(output, chart);
        println!();
    }
    println!("{}", reading.interpretation);

    Ok(())
}

fn print_chart(output: &Output, chart: &Chart) {
    let hex = &chart.hexagram;
    let body = chart
        .body_branch
        .map(|b| b.hanzi().to_string())
        .unwrap_or_default();

    println!(
        "{}: {}  [{}]  body: {}",
        chart.title(),
        hex.name,
        chart.ruling_description,
        body
    );
    if output.is_verbose() {
        println!(
            "index {}, upper {} ({}), lower {} ({}), element {}",
            hex.index,
            hex.upper_trigram,
            hex.upper_trigram.hanzi(),
            hex.lower_trigram,
            hex.lower_trigram.hanzi(),
            hex.element
        );
    }
    println!(
        "{:<6} {:<6} {:<4} {:<8} {:<6} {:<6} {:<6} TEXT",
        "LINE", "FIGURE", "", "KINSHIP", "GANZHI", "ELEM", "SPIRIT"
    );
    println!("{}", "-".repeat(70));

    for line in hex.lines.iter().rev() {
        let marker = if line.is_ruling {
            "世"
        } else if line.is_mirror {
            "应"
        } else {
            ""
        };
        let kinship = line.kinship.map(|k| k.hanzi()).unwrap_or("");
        let ganzhi = format!(
            "{}{}",
            line.stem.map(|s| s.hanzi()).unwrap_or(""),
            line.branch.map(|b| b.hanzi()).unwrap_or("")
        );
        let element = line.element.map(|e| e.hanzi()).unwrap_or("");
        let spirit = line.spirit.map(|s| s.hanzi()).unwrap_or("");
        let text = chart
            .texts
            .get((line.position - 1) as usize)
            .map(String::as_str)
            .unwrap_or("");

        println!(
            "{:<6} {:<6} {:<4} {:<8} {:<6} {:<6} {:<6} {}",
            line.traditional_name(),
            line.kind.glyph(),
            marker,
            kinship,
            ganzhi,
            element,
            spirit,
            text
        );
    }
}

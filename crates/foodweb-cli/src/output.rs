//! Output formatting utilities

use std::io::Write;

use clap::ValueEnum;
use foodweb_core::{analysis, analyze_all, Error, FoodWeb, NamedReport};
use serde::{Deserialize, Serialize};

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print each organism with what it eats
pub fn write_web<W: Write>(
    out: &mut W,
    web: &FoodWeb,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(web)?)?,
        OutputFormat::Text => {
            for (i, org) in web.iter() {
                write!(out, "  ({}) {}", i, org.name())?;
                if !org.is_producer() {
                    let prey = org
                        .prey()
                        .iter()
                        .map(|&p| web.name_of(p))
                        .collect::<Result<Vec<_>, _>>()?;
                    write!(out, " eats {}", prey.join(", "))?;
                }
                writeln!(out)?;
            }
        }
    }
    Ok(())
}

/// JSON form of a report, tagged with whether the web has been modified
#[derive(Serialize)]
struct JsonReport<'a> {
    updated: bool,
    #[serde(flatten)]
    report: &'a NamedReport,
}

/// Print every characteristic of the web
///
/// `updated` prefixes each text section header with `UPDATED ` and sets the
/// `updated` field of the JSON report.
pub fn write_characteristics<W: Write>(
    out: &mut W,
    web: &FoodWeb,
    updated: bool,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let value = match analyze_all(web) {
                Ok(report) => {
                    let report = report.named(web)?;
                    serde_json::to_value(JsonReport {
                        updated,
                        report: &report,
                    })?
                }
                Err(Error::Cycle) => serde_json::json!({
                    "updated": updated,
                    "error": Error::Cycle.to_string(),
                }),
                Err(e) => return Err(e.into()),
            };
            writeln!(out, "{}\n", serde_json::to_string_pretty(&value)?)?;
        }
        OutputFormat::Text => {
            let prefix = if updated { "UPDATED " } else { "" };
            write_text_report(out, web, prefix)?
        }
    }
    Ok(())
}

fn write_text_report<W: Write>(out: &mut W, web: &FoodWeb, prefix: &str) -> anyhow::Result<()> {
    writeln!(out, "{}Food Web Predators & Prey:", prefix)?;
    write_web(out, web, OutputFormat::Text)?;
    writeln!(out)?;

    let sections = [
        ("Apex Predators", analysis::apex_predators(web)),
        ("Producers", analysis::producers(web)),
        ("Most Flexible Eaters", analysis::most_flexible_eaters(web)),
        ("Tastiest Food", analysis::tastiest_food(web)),
    ];
    for (title, members) in &sections {
        writeln!(out, "{}{}:", prefix, title)?;
        for &i in members {
            writeln!(out, "  {}", web.name_of(i)?)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "{}Food Web Heights:", prefix)?;
    match analysis::heights(web) {
        Ok(heights) => {
            for (i, height) in heights.iter().enumerate() {
                writeln!(out, "  {}: {}", web.name_of(i)?, height)?;
            }
        }
        Err(Error::Cycle) => writeln!(out, "  {}", Error::Cycle)?,
        Err(e) => return Err(e.into()),
    }
    writeln!(out)?;

    let classes = analysis::vore_classes(web);
    writeln!(out, "{}Vore Types:", prefix)?;
    for (label, members) in [
        ("Producers", &classes.producers),
        ("Herbivores", &classes.herbivores),
        ("Omnivores", &classes.omnivores),
        ("Carnivores", &classes.carnivores),
    ] {
        writeln!(out, "  {}:", label)?;
        for &i in members {
            writeln!(out, "    {}", web.name_of(i)?)?;
        }
    }
    writeln!(out)?;
    Ok(())
}

//! Command execution. Produces reports; printing is left to `main`.

use crate::cli::Commands;
use serde::Serialize;
use v6_abbrev::{compare, expand, Abbreviator, SAMPLE_ADDRESSES};
use v6_core::{AbbreviationConfig, Comparison, InvalidAddress, Strategy};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum Report {
    Abbreviate { input: String, strategy: Strategy, output: String },
    Expand { input: String, output: String },
    Compare(Comparison),
}

impl Report {
    pub fn render(&self) -> String {
        match self {
            Report::Abbreviate { output, .. } | Report::Expand { output, .. } => output.clone(),
            Report::Compare(c) => {
                let verdict = if c.diverges() { "strategies differ" } else { "strategies agree" };
                format!(
                    "Original:  {}\nRightmost: {}\nLeftmost:  {}\n           {}",
                    c.input, c.rightmost, c.leftmost, verdict
                )
            }
        }
    }
}

pub type Outcome = Result<Report, InvalidAddress>;

pub fn run(command: &Commands, config: &AbbreviationConfig) -> Vec<Outcome> {
    match command {
        Commands::Abbreviate { addresses, strategy } => {
            let abbreviator = strategy.map(Abbreviator::new).unwrap_or_else(|| Abbreviator::from_config(config));
            addresses
                .iter()
                .map(|input| {
                    let output = abbreviator.abbreviate(input)?;
                    Ok(Report::Abbreviate {
                        input: input.trim().to_string(),
                        strategy: abbreviator.strategy,
                        output,
                    })
                })
                .collect()
        }
        Commands::Expand { addresses } => addresses
            .iter()
            .map(|input| {
                let output = expand(input)?;
                Ok(Report::Expand { input: input.trim().to_string(), output })
            })
            .collect(),
        Commands::Compare { addresses } => compare_all(addresses.iter().map(String::as_str)),
        Commands::Demo => compare_all(SAMPLE_ADDRESSES.iter().copied()),
    }
}

fn compare_all<'a>(inputs: impl Iterator<Item = &'a str>) -> Vec<Outcome> {
    inputs.map(|input| Ok(Report::Compare(compare(input)?))).collect()
}

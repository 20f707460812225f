//! Gearcraft - Entry Point
//!
//! Command line front end over the resolver and aggregator. Prints what a
//! pantogram selection costs and how it encodes, and ranks familiars for
//! stillsuit distillate.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use gearcraft::core::config::{set_config, GearConfig};
use gearcraft::core::error::{GearError, Result};
use gearcraft::pantogram::{
    Alignment, CompleteSelection, Configurator, Element, LeftSacrifice, MiddleSacrifice,
    PartialSelection, RightSacrifice, SacrificeTables,
};
use gearcraft::stillsuit::{
    compute_distribution, distillate_adventures, DistillateModifier, FamiliarRoster, FamiliarTag,
    Tagged,
};

/// Pantogram and stillsuit helper
#[derive(Parser, Debug)]
#[command(name = "gearcraft")]
#[command(about = "Price and encode pantogram pants, rank familiars for stillsuit distillate")]
struct Args {
    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Component items needed for the given sacrifices
    Requirements {
        #[arg(long)]
        left: Option<LeftSacrifice>,
        #[arg(long)]
        middle: Option<MiddleSacrifice>,
        #[arg(long)]
        right: Option<RightSacrifice>,
    },
    /// Request fields for a complete selection
    Encode {
        #[arg(long)]
        alignment: Alignment,
        #[arg(long)]
        element: Element,
        #[arg(long)]
        left: LeftSacrifice,
        #[arg(long)]
        middle: MiddleSacrifice,
        #[arg(long)]
        right: RightSacrifice,
    },
    /// Modifier weights for a roster familiar or an explicit tag list
    Distribution {
        #[arg(long, conflicts_with = "tags")]
        familiar: Option<String>,
        #[arg(long, value_delimiter = ',')]
        tags: Vec<FamiliarTag>,
    },
    /// Roster familiar with the highest weight for a modifier
    Best {
        #[arg(long)]
        modifier: DistillateModifier,
    },
    /// Adventures from drinking distillate of the given sweat
    Adventures { sweat: u32 },
}

#[derive(Serialize)]
struct EncodeOutput {
    query: String,
    fields: Vec<(String, String)>,
    requirements: gearcraft::RequirementSet,
}

#[derive(Serialize)]
struct WeightOutput {
    modifier: DistillateModifier,
    weight: f64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GearConfig::load(path)?,
        None => GearConfig::default(),
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if set_config(config.clone()).is_err() {
        tracing::warn!("Global config was already set");
    }

    run(&args, &config)
}

fn run(args: &Args, config: &GearConfig) -> Result<()> {
    match &args.command {
        Command::Requirements { left, middle, right } => {
            let tables = load_tables(config)?;
            let selection = PartialSelection {
                left_sacrifice: *left,
                middle_sacrifice: *middle,
                right_sacrifice: *right,
                ..PartialSelection::default()
            };
            let requirements = Configurator::new(&tables).requirements(&selection);

            if args.json {
                print_json(&requirements)?;
            } else if requirements.is_empty() {
                println!("No components required");
            } else {
                for requirement in &requirements {
                    println!("{:>3} x {}", requirement.quantity, requirement.item);
                }
            }
        }
        Command::Encode {
            alignment,
            element,
            left,
            middle,
            right,
        } => {
            let tables = load_tables(config)?;
            let configurator = Configurator::new(&tables);
            let selection = CompleteSelection::new(*alignment, *element, *left, *middle, *right);
            let encoded = configurator.encode(&selection);
            let requirements = configurator.requirements(&selection.into());

            if args.json {
                print_json(&EncodeOutput {
                    query: encoded.query_string(),
                    fields: encoded
                        .fields()
                        .into_iter()
                        .map(|(name, value)| (name.to_string(), value))
                        .collect(),
                    requirements,
                })?;
            } else {
                println!("{}", encoded);
                for requirement in &requirements {
                    println!("  consumes {} x {}", requirement.quantity, requirement.item);
                }
            }
        }
        Command::Distribution { familiar, tags } => {
            let weights = match familiar {
                Some(name) => {
                    let roster = load_roster(config)?;
                    let familiar = roster
                        .get(name)
                        .ok_or_else(|| GearError::UnknownFamiliar(name.clone()))?;
                    familiar.distribution()
                }
                None => compute_distribution(tags.iter().copied()),
            };

            let total = weights.total();
            if !weights.is_empty() && (total - 1.0).abs() > config.weight_tolerance {
                tracing::warn!("Distribution sums to {} rather than 1.0", total);
            }

            let ranked: Vec<_> = weights
                .ranked()
                .into_iter()
                .map(|(modifier, weight)| WeightOutput { modifier, weight })
                .collect();

            if args.json {
                print_json(&ranked)?;
            } else if ranked.is_empty() {
                println!("No contributing tags");
            } else {
                for entry in &ranked {
                    println!("{:>6.1}%  {}", entry.weight * 100.0, entry.modifier);
                }
            }
        }
        Command::Best { modifier } => {
            let roster = load_roster(config)?;
            println!("{}", render_best(&roster, *modifier, args.json)?);
        }
        Command::Adventures { sweat } => {
            let adventures = distillate_adventures(*sweat);
            if args.json {
                print_json(&adventures)?;
            } else {
                println!("{} sweat -> {} adventures", sweat, adventures);
            }
        }
    }

    Ok(())
}

fn load_tables(config: &GearConfig) -> Result<SacrificeTables> {
    match &config.pantogram_tables {
        Some(path) => SacrificeTables::load_from_toml(path),
        None => Ok(SacrificeTables::with_defaults()),
    }
}

fn load_roster(config: &GearConfig) -> Result<FamiliarRoster> {
    match &config.familiar_roster {
        Some(path) => FamiliarRoster::load_from_toml(path),
        None => Ok(FamiliarRoster::with_defaults()),
    }
}

/// The best roster familiar for `modifier`, `null` under JSON for an empty roster
fn render_best(roster: &FamiliarRoster, modifier: DistillateModifier, json: bool) -> Result<String> {
    let best = roster.best_for(modifier);
    if json {
        return Ok(serde_json::to_string_pretty(&best)?);
    }
    Ok(match best {
        Some(familiar) => {
            let weight = familiar.distribution().get(modifier);
            format!("{} ({:.1}% {})", familiar.name, weight * 100.0, modifier)
        }
        None => "Roster is empty".to_string(),
    })
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_on_empty_roster() {
        let roster = FamiliarRoster::new();
        assert_eq!(render_best(&roster, DistillateModifier::ItemDrop, true).unwrap(), "null");
        assert_eq!(
            render_best(&roster, DistillateModifier::ItemDrop, false).unwrap(),
            "Roster is empty"
        );
    }

    #[test]
    fn test_best_json_is_the_familiar() {
        let roster = FamiliarRoster::with_defaults();
        let json = render_best(&roster, DistillateModifier::FoodDrop, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "Cocoabo");
    }
}

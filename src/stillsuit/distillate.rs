//! Stillsuit distillate - adventures from sweat and the current modifier string
//!
//! The game reports the distillate's effect as a comma separated list such as
//! `"Experience (Muscle): +3, Item Drop: +20, Initiative: +15"`.

use nom::{
    branch::alt,
    bytes::complete::{take_till, take_till1},
    character::complete::{char, digit1, multispace0, space0},
    combinator::{all_consuming, map, map_res, opt, recognize},
    multi::separated_list0,
    sequence::{delimited, separated_pair},
    IResult, Parser,
};

use crate::core::config::DISTILLATE_EXPONENT;
use crate::core::error::{GearError, Result};

/// Adventures gained from drinking distillate made of `sweat`
pub fn distillate_adventures(sweat: u32) -> u32 {
    f64::from(sweat).powf(DISTILLATE_EXPONENT).round() as u32
}

/// Parse a distillate modifier string into `(name, value)` pairs
///
/// Entries whose value is not a whole number (e.g. `12.5`) are skipped; a
/// string that is not a comma separated `Name: value` list is an error.
pub fn parse_distillate_mods(mods: &str) -> Result<Vec<(String, i32)>> {
    let mut parser = all_consuming(delimited(multispace0, modifier_list, multispace0));
    match parser.parse(mods) {
        Ok((_, entries)) => Ok(entries
            .into_iter()
            .filter_map(|(name, value)| match value {
                Some(value) => Some((name, value)),
                None => {
                    tracing::debug!("Skipping unreadable distillate modifier {:?}", name);
                    None
                }
            })
            .collect()),
        Err(e) => Err(GearError::DistillateParse(format!("{:?}: {}", mods, e))),
    }
}

/// Value the distillate grants for a modifier, 0 when absent
///
/// `"Muscle Experience"` and friends are looked up under the game's
/// `"Experience (Muscle)"` spelling.
pub fn distillate_modifier(mods: &str, modifier: &str) -> Result<i32> {
    let wanted = canonical_name(modifier.trim());
    let value = parse_distillate_mods(mods)?
        .into_iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(&wanted))
        .map(|(_, value)| value)
        .unwrap_or(0);
    Ok(value)
}

fn canonical_name(modifier: &str) -> String {
    for stat in ["Muscle", "Mysticality", "Moxie"] {
        if modifier.eq_ignore_ascii_case(&format!("{} Experience", stat)) {
            return format!("Experience ({})", stat);
        }
    }
    modifier.to_string()
}

fn modifier_list(input: &str) -> IResult<&str, Vec<(String, Option<i32>)>> {
    separated_list0((char(','), space0), modifier_entry).parse(input)
}

fn modifier_entry(input: &str) -> IResult<&str, (String, Option<i32>)> {
    separated_pair(modifier_name, (char(':'), space0), modifier_value).parse(input)
}

/// Everything up to the next comma, `None` unless it is a whole number
fn modifier_value(input: &str) -> IResult<&str, Option<i32>> {
    map(take_till(|c: char| c == ','), |raw: &str| {
        all_consuming(delimited(space0, signed_int, multispace0))
            .parse(raw)
            .ok()
            .map(|(_, value)| value)
    })
    .parse(input)
}

fn modifier_name(input: &str) -> IResult<&str, String> {
    map(take_till1(|c: char| c == ':' || c == ','), |name: &str| {
        name.trim().to_string()
    })
    .parse(input)
}

fn signed_int(input: &str) -> IResult<&str, i32> {
    map_res(
        recognize((opt(alt((char('+'), char('-')))), digit1)),
        |digits: &str| digits.trim_start_matches('+').parse::<i32>(),
    )
    .parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Experience (Muscle): +3, Item Drop: +20, Initiative: +15, Cold Damage: -2";

    #[test]
    fn test_adventures_curve() {
        assert_eq!(distillate_adventures(0), 0);
        assert_eq!(distillate_adventures(1), 1);
        assert_eq!(distillate_adventures(100), 6);
        assert_eq!(distillate_adventures(450), 12);
    }

    #[test]
    fn test_parse_mods() {
        let mods = parse_distillate_mods(SAMPLE).unwrap();
        assert_eq!(
            mods,
            vec![
                ("Experience (Muscle)".to_string(), 3),
                ("Item Drop".to_string(), 20),
                ("Initiative".to_string(), 15),
                ("Cold Damage".to_string(), -2),
            ]
        );
    }

    #[test]
    fn test_parse_empty_string() {
        assert!(parse_distillate_mods("").unwrap().is_empty());
        assert!(parse_distillate_mods("  ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_distillate_mods("no modifiers here"),
            Err(GearError::DistillateParse(_))
        ));
        assert!(parse_distillate_mods("Item Drop: +20,").is_err());
    }

    #[test]
    fn test_parse_skips_unreadable_values() {
        let mods = parse_distillate_mods("Item Drop: +20, Weapon Damage Percent: 12.5, Initiative: lots, Moxie: -1").unwrap();
        assert_eq!(mods, vec![("Item Drop".to_string(), 20), ("Moxie".to_string(), -1)]);
    }

    #[test]
    fn test_lookup_ignores_other_entries() {
        let mods = "Item Drop: +20, Weapon Damage Percent: 12.5";
        assert_eq!(distillate_modifier(mods, "Item Drop").unwrap(), 20);
        assert_eq!(distillate_modifier(mods, "Weapon Damage Percent").unwrap(), 0);
    }

    #[test]
    fn test_modifier_lookup() {
        assert_eq!(distillate_modifier(SAMPLE, "Item Drop").unwrap(), 20);
        assert_eq!(distillate_modifier(SAMPLE, "cold damage").unwrap(), -2);
        assert_eq!(distillate_modifier(SAMPLE, "Meat Drop").unwrap(), 0);
    }

    #[test]
    fn test_experience_alias() {
        assert_eq!(distillate_modifier(SAMPLE, "Muscle Experience").unwrap(), 3);
        assert_eq!(distillate_modifier(SAMPLE, "Moxie Experience").unwrap(), 0);
        assert_eq!(canonical_name("Mysticality Experience"), "Experience (Mysticality)");
        assert_eq!(canonical_name("Initiative"), "Initiative");
    }
}

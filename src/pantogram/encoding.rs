//! Request encoding of a complete pantogram selection
//!
//! The game reads five positional fields: `m` (alignment code), `e`
//! (element code), then `s1`, `s2`, `s3` for the left, right and middle
//! sacrifices. Note the right sacrifice comes before the middle one.
//! Each sacrifice field is `"<cost>,<quantity>"` where cost is a sentinel
//! (-1/-2) or a component item id.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::pantogram::cost::SlotCost;

/// One `"<cost>,<quantity>"` sacrifice field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SacrificeCode {
    pub cost: i64,
    pub quantity: u32,
}

impl From<&SlotCost> for SacrificeCode {
    fn from(cost: &SlotCost) -> Self {
        Self {
            cost: cost.cost_code(),
            quantity: cost.quantity(),
        }
    }
}

impl fmt::Display for SacrificeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.cost, self.quantity)
    }
}

/// The five request fields for one pair of pants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EncodedSelection {
    pub alignment_code: u8,
    pub element_code: u8,
    pub left_sacrifice: SacrificeCode,
    pub right_sacrifice: SacrificeCode,
    pub middle_sacrifice: SacrificeCode,
}

impl EncodedSelection {
    /// Field names and values in the order the game expects
    pub fn fields(&self) -> [(&'static str, String); 5] {
        [
            ("m", self.alignment_code.to_string()),
            ("e", self.element_code.to_string()),
            ("s1", self.left_sacrifice.to_string()),
            ("s2", self.right_sacrifice.to_string()),
            ("s3", self.middle_sacrifice.to_string()),
        ]
    }

    /// `m=..&e=..&s1=..&s2=..&s3=..`
    pub fn query_string(&self) -> String {
        self.fields()
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl fmt::Display for EncodedSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.query_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pantogram::cost::Sentinel;

    fn sample() -> EncodedSelection {
        EncodedSelection {
            alignment_code: 2,
            element_code: 4,
            left_sacrifice: SacrificeCode::from(&SlotCost::NoComponent(Sentinel::Second)),
            right_sacrifice: SacrificeCode::from(&SlotCost::component(173, "taco shell", 1)),
            middle_sacrifice: SacrificeCode::from(&SlotCost::component(865, "lead necklace", 11)),
        }
    }

    #[test]
    fn test_sacrifice_code_format() {
        let free = SacrificeCode::from(&SlotCost::NoComponent(Sentinel::First));
        assert_eq!(free.to_string(), "-1,0");

        let necklace = SacrificeCode::from(&SlotCost::component(865, "lead necklace", 11));
        assert_eq!(necklace.to_string(), "865,11");
    }

    #[test]
    fn test_fields_are_positional() {
        let fields = sample().fields();
        let names: Vec<_> = fields.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["m", "e", "s1", "s2", "s3"]);

        // s2 is the right sacrifice, s3 the middle one
        assert_eq!(fields[3].1, "173,1");
        assert_eq!(fields[4].1, "865,11");
    }

    #[test]
    fn test_query_string() {
        assert_eq!(sample().query_string(), "m=2&e=4&s1=-2,0&s2=173,1&s3=865,11");
        assert_eq!(sample().to_string(), sample().query_string());
    }
}

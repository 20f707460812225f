//! Configurator resolver - turns selections into requirements and request codes
//!
//! Two selection types keep encoding honest: `PartialSelection` may leave any
//! slot empty and is enough to price a selection, while `CompleteSelection`
//! has all five slots and is the only thing that can be encoded.

use serde::{Deserialize, Serialize};

use crate::core::error::GearError;
use crate::pantogram::encoding::{EncodedSelection, SacrificeCode};
use crate::pantogram::requirements::RequirementSet;
use crate::pantogram::slots::{
    Alignment, Element, LeftSacrifice, MiddleSacrifice, RightSacrifice, Slot, SlotVariant,
};
use crate::pantogram::tables::{default_tables, SacrificeTables};

/// Any subset of the five slots
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartialSelection {
    #[serde(default)]
    pub alignment: Option<Alignment>,
    #[serde(default)]
    pub element: Option<Element>,
    #[serde(default, alias = "leftSac")]
    pub left_sacrifice: Option<LeftSacrifice>,
    #[serde(default, alias = "middleSac")]
    pub middle_sacrifice: Option<MiddleSacrifice>,
    #[serde(default, alias = "rightSac")]
    pub right_sacrifice: Option<RightSacrifice>,
}

impl PartialSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn with_element(mut self, element: Element) -> Self {
        self.element = Some(element);
        self
    }

    pub fn with_left(mut self, sacrifice: LeftSacrifice) -> Self {
        self.left_sacrifice = Some(sacrifice);
        self
    }

    pub fn with_middle(mut self, sacrifice: MiddleSacrifice) -> Self {
        self.middle_sacrifice = Some(sacrifice);
        self
    }

    pub fn with_right(mut self, sacrifice: RightSacrifice) -> Self {
        self.right_sacrifice = Some(sacrifice);
        self
    }

    /// Slots still unpopulated, in slot order
    pub fn missing_slots(&self) -> Vec<Slot> {
        let mut missing = Vec::new();
        if self.alignment.is_none() {
            missing.push(Alignment::SLOT);
        }
        if self.element.is_none() {
            missing.push(Element::SLOT);
        }
        if self.left_sacrifice.is_none() {
            missing.push(LeftSacrifice::SLOT);
        }
        if self.middle_sacrifice.is_none() {
            missing.push(MiddleSacrifice::SLOT);
        }
        if self.right_sacrifice.is_none() {
            missing.push(RightSacrifice::SLOT);
        }
        missing
    }
}

/// All five slots populated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompleteSelection {
    pub alignment: Alignment,
    pub element: Element,
    #[serde(alias = "leftSac")]
    pub left_sacrifice: LeftSacrifice,
    #[serde(alias = "middleSac")]
    pub middle_sacrifice: MiddleSacrifice,
    #[serde(alias = "rightSac")]
    pub right_sacrifice: RightSacrifice,
}

impl CompleteSelection {
    pub fn new(
        alignment: Alignment,
        element: Element,
        left_sacrifice: LeftSacrifice,
        middle_sacrifice: MiddleSacrifice,
        right_sacrifice: RightSacrifice,
    ) -> Self {
        Self {
            alignment,
            element,
            left_sacrifice,
            middle_sacrifice,
            right_sacrifice,
        }
    }
}

impl From<CompleteSelection> for PartialSelection {
    fn from(selection: CompleteSelection) -> Self {
        Self {
            alignment: Some(selection.alignment),
            element: Some(selection.element),
            left_sacrifice: Some(selection.left_sacrifice),
            middle_sacrifice: Some(selection.middle_sacrifice),
            right_sacrifice: Some(selection.right_sacrifice),
        }
    }
}

impl TryFrom<PartialSelection> for CompleteSelection {
    type Error = GearError;

    fn try_from(selection: PartialSelection) -> Result<Self, Self::Error> {
        match selection {
            PartialSelection {
                alignment: Some(alignment),
                element: Some(element),
                left_sacrifice: Some(left_sacrifice),
                middle_sacrifice: Some(middle_sacrifice),
                right_sacrifice: Some(right_sacrifice),
            } => Ok(Self::new(
                alignment,
                element,
                left_sacrifice,
                middle_sacrifice,
                right_sacrifice,
            )),
            incomplete => Err(GearError::IncompleteSelection {
                missing: incomplete.missing_slots(),
            }),
        }
    }
}

/// Resolves selections against a set of sacrifice tables
#[derive(Debug, Clone, Copy)]
pub struct Configurator<'t> {
    tables: &'t SacrificeTables,
}

impl<'t> Configurator<'t> {
    pub fn new(tables: &'t SacrificeTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &'t SacrificeTables {
        self.tables
    }

    /// Component items consumed by the populated sacrifice slots
    ///
    /// Alignment and element are free axes and never contribute.
    pub fn requirements(&self, selection: &PartialSelection) -> RequirementSet {
        let costs = [
            selection.left_sacrifice.map(|s| self.tables.left(s)),
            selection.right_sacrifice.map(|s| self.tables.right(s)),
            selection.middle_sacrifice.map(|s| self.tables.middle(s)),
        ];

        let mut requirements = RequirementSet::new();
        for (item, quantity) in costs.into_iter().flatten().filter_map(|c| c.requirement()) {
            requirements.add(item, quantity);
        }

        tracing::debug!(
            "Selection {:?} requires {} component item(s)",
            selection,
            requirements.len()
        );
        requirements
    }

    /// The five request fields for a complete selection
    pub fn encode(&self, selection: &CompleteSelection) -> EncodedSelection {
        let encoded = EncodedSelection {
            alignment_code: selection.alignment.code(),
            element_code: selection.element.code(),
            left_sacrifice: SacrificeCode::from(self.tables.left(selection.left_sacrifice)),
            right_sacrifice: SacrificeCode::from(self.tables.right(selection.right_sacrifice)),
            middle_sacrifice: SacrificeCode::from(self.tables.middle(selection.middle_sacrifice)),
        };
        tracing::debug!("Encoded {:?} as {}", selection, encoded);
        encoded
    }
}

impl Default for Configurator<'static> {
    fn default() -> Self {
        Self::new(default_tables())
    }
}

/// Requirements of a selection under the built-in tables
pub fn compute_requirements(selection: &PartialSelection) -> RequirementSet {
    Configurator::default().requirements(selection)
}

/// Request encoding of a selection under the built-in tables
pub fn compute_encoded_selection(selection: &CompleteSelection) -> EncodedSelection {
    Configurator::default().encode(selection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::ItemId;
    use crate::pantogram::cost::SlotCost;

    #[test]
    fn test_free_sacrifices_need_nothing() {
        let selection = PartialSelection::new()
            .with_left(LeftSacrifice::MaximumHp40)
            .with_middle(MiddleSacrifice::CombatRateDown)
            .with_right(RightSacrifice::WeaponDamage);

        assert!(compute_requirements(&selection).is_empty());
    }

    #[test]
    fn test_paid_sacrifices_need_one_of_each() {
        let selection = PartialSelection::new()
            .with_left(LeftSacrifice::HpRegen10)
            .with_middle(MiddleSacrifice::CriticalHit)
            .with_right(RightSacrifice::MeatDrop30);

        let requirements = compute_requirements(&selection);
        assert_eq!(requirements.len(), 3);

        let names: Vec<_> = requirements.iter().map(|r| r.item.name.as_str()).collect();
        assert_eq!(names, vec!["red pixel potion", "taco shell", "hamethyst"]);
        assert!(requirements.iter().all(|r| r.quantity == 1));
    }

    #[test]
    fn test_alignment_and_element_never_contribute() {
        let selection = PartialSelection::new()
            .with_alignment(Alignment::Moxie)
            .with_element(Element::Cold);
        assert!(compute_requirements(&selection).is_empty());
        assert!(compute_requirements(&PartialSelection::new()).is_empty());
    }

    #[test]
    fn test_shared_component_quantities_are_summed() {
        let mut tables = SacrificeTables::with_defaults();
        tables.set_left(LeftSacrifice::HpRegen10, SlotCost::component(173, "taco shell", 2));
        tables.set_middle(MiddleSacrifice::Initiative, SlotCost::component(173, "taco shell", 4));

        let configurator = Configurator::new(&tables);
        let selection = PartialSelection::new()
            .with_left(LeftSacrifice::HpRegen10)
            .with_middle(MiddleSacrifice::Initiative)
            .with_right(RightSacrifice::MeatDrop30);

        let requirements = configurator.requirements(&selection);
        assert_eq!(requirements.len(), 1);
        assert_eq!(requirements.quantity_of(ItemId(173)), 7);
    }

    #[test]
    fn test_encode_complete_selection() {
        let selection = CompleteSelection::new(
            Alignment::Mysticality,
            Element::Spooky,
            LeftSacrifice::MaximumMp20,
            MiddleSacrifice::FamiliarWeight,
            RightSacrifice::ItemDrop15,
        );

        let encoded = compute_encoded_selection(&selection);
        assert_eq!(encoded.alignment_code, 2);
        assert_eq!(encoded.element_code, 3);
        assert_eq!(encoded.query_string(), "m=2&e=3&s1=-2,0&s2=5110,1&s3=865,11");
    }

    #[test]
    fn test_encode_is_deterministic() {
        let selection = CompleteSelection::new(
            Alignment::Muscle,
            Element::Hot,
            LeftSacrifice::ManaCost,
            MiddleSacrifice::DropsItems,
            RightSacrifice::MeatDrop60,
        );
        assert_eq!(compute_encoded_selection(&selection), compute_encoded_selection(&selection));
    }

    #[test]
    fn test_incomplete_selection_is_rejected() {
        let partial = PartialSelection::new()
            .with_alignment(Alignment::Muscle)
            .with_right(RightSacrifice::MeatDrop30);

        match CompleteSelection::try_from(partial) {
            Err(GearError::IncompleteSelection { missing }) => assert_eq!(
                missing,
                vec![Slot::Element, Slot::LeftSacrifice, Slot::MiddleSacrifice]
            ),
            other => panic!("Expected IncompleteSelection, got {:?}", other),
        }
    }

    #[test]
    fn test_complete_round_trips_through_partial() {
        let complete = CompleteSelection::new(
            Alignment::Moxie,
            Element::Stench,
            LeftSacrifice::MpRegen20,
            MiddleSacrifice::PoolSkill,
            RightSacrifice::MoxieExperience,
        );
        let partial = PartialSelection::from(complete);
        assert!(partial.missing_slots().is_empty());
        assert_eq!(CompleteSelection::try_from(partial).unwrap(), complete);
    }

    #[test]
    fn test_selection_deserializes_short_field_names() {
        let partial: PartialSelection = serde_json::from_str(
            r#"{"leftSac": "Maximum HP: 40", "middleSac": "Combat Rate: -5", "rightSac": "Weapon Damage: 20"}"#,
        )
        .unwrap();
        assert_eq!(partial.left_sacrifice, Some(LeftSacrifice::MaximumHp40));
        assert_eq!(partial.alignment, None);

        let bad: Result<PartialSelection, _> = serde_json::from_str(r#"{"leftSac": "Meat Drop: 30"}"#);
        assert!(bad.is_err());
    }
}

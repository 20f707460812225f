//! Crafting plans - precondition checks and the request the dispatcher sends
//!
//! Nothing here performs I/O. The dispatch layer visits `use_path` and then
//! `choice_path`, and should re-check the inventory right before doing so.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::config::{PANTOGRAM_CHOICE, PANTOGRAM_ITEM, PANTOGRAM_PANTS_ITEM};
use crate::core::inventory::ItemCounts;
use crate::pantogram::encoding::EncodedSelection;
use crate::pantogram::requirements::{RequirementSet, Shortfall};
use crate::pantogram::resolver::{CompleteSelection, Configurator};

/// Why a pair of pants cannot be made right now
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("The portable pantogram is not in the inventory")]
    MissingPantogram,

    #[error("Pantogram pants are already owned")]
    PantsAlreadyOwned,

    #[error("Missing components: {}", describe(.0))]
    MissingComponents(Vec<Shortfall>),
}

fn describe(shortfalls: &[Shortfall]) -> String {
    shortfalls
        .iter()
        .map(|s| format!("{} ({}/{})", s.item.name, s.held, s.needed))
        .collect::<Vec<_>>()
        .join(", ")
}

/// The two requests that produce a pair of pants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PantogramRequest {
    pub encoded: EncodedSelection,
    pub requirements: RequirementSet,
}

impl PantogramRequest {
    /// Using the pantogram opens the configuration choice
    pub fn use_path(&self) -> String {
        format!("inv_use.php?pwd&whichitem={}", PANTOGRAM_ITEM)
    }

    /// Submits the configuration
    pub fn choice_path(&self) -> String {
        format!(
            "choice.php?whichchoice={}&pwd&option=1&{}",
            PANTOGRAM_CHOICE,
            self.encoded.query_string()
        )
    }
}

/// Check preconditions and build the request for a selection
pub fn plan_pants(
    configurator: &Configurator<'_>,
    selection: &CompleteSelection,
    inventory: &impl ItemCounts,
) -> Result<PantogramRequest, PlanError> {
    if !inventory.has(PANTOGRAM_ITEM, 1) {
        return Err(PlanError::MissingPantogram);
    }
    if inventory.has(PANTOGRAM_PANTS_ITEM, 1) {
        return Err(PlanError::PantsAlreadyOwned);
    }

    let requirements = configurator.requirements(&(*selection).into());
    let shortfalls = requirements.shortfalls(inventory);
    if !shortfalls.is_empty() {
        tracing::debug!("Cannot make pants, {} component(s) short", shortfalls.len());
        return Err(PlanError::MissingComponents(shortfalls));
    }

    Ok(PantogramRequest {
        encoded: configurator.encode(selection),
        requirements,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::inventory::Inventory;
    use crate::core::types::ItemId;
    use crate::pantogram::slots::{Alignment, Element, LeftSacrifice, MiddleSacrifice, RightSacrifice};

    fn selection() -> CompleteSelection {
        CompleteSelection::new(
            Alignment::Muscle,
            Element::Hot,
            LeftSacrifice::MaximumHp40,
            MiddleSacrifice::FamiliarWeight,
            RightSacrifice::MeatDrop30,
        )
    }

    #[test]
    fn test_requires_pantogram() {
        let inventory = Inventory::new();
        let result = plan_pants(&Configurator::default(), &selection(), &inventory);
        assert_eq!(result.unwrap_err(), PlanError::MissingPantogram);
    }

    #[test]
    fn test_rejects_when_pants_owned() {
        let inventory: Inventory = [(PANTOGRAM_ITEM, 1), (PANTOGRAM_PANTS_ITEM, 1)].into_iter().collect();
        let result = plan_pants(&Configurator::default(), &selection(), &inventory);
        assert_eq!(result.unwrap_err(), PlanError::PantsAlreadyOwned);
    }

    #[test]
    fn test_reports_missing_components() {
        let inventory: Inventory = [(PANTOGRAM_ITEM, 1), (ItemId(865), 5)].into_iter().collect();
        let err = plan_pants(&Configurator::default(), &selection(), &inventory).unwrap_err();

        match &err {
            PlanError::MissingComponents(shortfalls) => {
                assert_eq!(shortfalls.len(), 2);
                assert_eq!(shortfalls[0].item.name, "taco shell");
                assert_eq!(shortfalls[1].item.name, "lead necklace");
                assert_eq!(shortfalls[1].held, 5);
            }
            other => panic!("Expected MissingComponents, got {:?}", other),
        }
        assert_eq!(
            err.to_string(),
            "Missing components: taco shell (0/1), lead necklace (5/11)"
        );
    }

    #[test]
    fn test_builds_request_paths() {
        let inventory: Inventory = [(PANTOGRAM_ITEM, 1), (ItemId(865), 11), (ItemId(173), 1)]
            .into_iter()
            .collect();
        let request = plan_pants(&Configurator::default(), &selection(), &inventory).unwrap();

        assert_eq!(request.use_path(), "inv_use.php?pwd&whichitem=9573");
        assert_eq!(
            request.choice_path(),
            "choice.php?whichchoice=1270&pwd&option=1&m=1&e=1&s1=-1,0&s2=173,1&s3=865,11"
        );
        assert_eq!(request.requirements.len(), 2);
    }
}

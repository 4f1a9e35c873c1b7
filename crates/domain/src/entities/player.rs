//! Player sheet entity and its table rules.
//!
//! A sheet persists only base values; everything derived is recomputed
//! through [`Player::stats`] on each read. Older documents may lack the
//! `level`, `inventory`, `dice`, and current-pool fields; serde defaults
//! plus [`Player::backfill`] fill them on load.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::attributes::Attributes;
use crate::dice::Die;
use crate::error::DomainError;
use crate::ids::{ItemId, PlayerId};
use crate::stats::{calculate_stats, DerivedStats, PA_MAX};

/// Creation-time attribute point budget.
pub const ATTRIBUTE_BUDGET: i32 = 10;
/// Required number of specializations at creation.
pub const SPEC_COUNT: usize = 3;
const LEVEL_MIN: u8 = 1;
const LEVEL_MAX: u8 = 20;

/// A carried item. Quantity floors at zero and never auto-deletes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub qty: u32,
}

impl InventoryItem {
    pub fn new(name: &str) -> Self {
        Self {
            id: ItemId::new(),
            name: name.to_uppercase(),
            qty: 1,
        }
    }
}

/// Last result per player die size; each roll overwrites the previous.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceTray {
    #[serde(default)]
    pub d4: Option<u32>,
    #[serde(default)]
    pub d6: Option<u32>,
    #[serde(default)]
    pub d12: Option<u32>,
    #[serde(default)]
    pub d20: Option<u32>,
}

impl DiceTray {
    pub fn record(&mut self, die: Die, value: u32) {
        match die {
            Die::D4 => self.d4 = Some(value),
            Die::D6 => self.d6 = Some(value),
            Die::D12 => self.d12 = Some(value),
            Die::D20 => self.d20 = Some(value),
            // GM-only sizes have no tray slot.
            Die::D8 | Die::D10 | Die::D100 => {}
        }
    }

    pub fn get(&self, die: Die) -> Option<u32> {
        match die {
            Die::D4 => self.d4,
            Die::D6 => self.d6,
            Die::D12 => self.d12,
            Die::D20 => self.d20,
            Die::D8 | Die::D10 | Die::D100 => None,
        }
    }
}

/// One of the three depletable pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pool {
    /// Health (pontos de vida), capped at `pv_max`.
    Pv,
    /// Sanity (pontos de sanidade), capped at `ps_max`.
    Ps,
    /// Action points, capped at the flat 5.
    Pa,
}

impl FromStr for Pool {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "current_pv" => Ok(Self::Pv),
            "current_ps" => Ok(Self::Ps),
            "current_pa" => Ok(Self::Pa),
            _ => Err(()),
        }
    }
}

/// Increment or decrement; unknown wire values are treated as a no-op
/// by the callers, so parsing is fallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    Inc,
    Dec,
}

impl FromStr for StepAction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inc" => Ok(Self::Inc),
            "dec" => Ok(Self::Dec),
            _ => Err(()),
        }
    }
}

/// Direction for an adjacent inventory swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

impl FromStr for MoveDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            _ => Err(()),
        }
    }
}

/// A player's full sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub age: String,
    #[serde(default = "default_level")]
    pub level: u8,
    pub attributes: Attributes,
    pub specs: Vec<String>,
    #[serde(default)]
    pub inventory: Vec<InventoryItem>,
    #[serde(default)]
    pub dice: DiceTray,
    #[serde(default)]
    pub current_pv: Option<i32>,
    #[serde(default)]
    pub current_ps: Option<i32>,
    #[serde(default)]
    pub current_pa: Option<i32>,
}

fn default_level() -> u8 {
    LEVEL_MIN
}

impl Player {
    /// Create a fresh sheet with pools at their maxima.
    ///
    /// Fails when the base block exceeds the 10-point budget or the
    /// specialization count is not exactly 3.
    pub fn create(
        name: &str,
        age: &str,
        attributes: Attributes,
        specs: Vec<String>,
    ) -> Result<Self, DomainError> {
        if attributes.sum() > ATTRIBUTE_BUDGET {
            return Err(DomainError::validation(format!(
                "Attribute total {} exceeds the {ATTRIBUTE_BUDGET}-point budget",
                attributes.sum()
            )));
        }
        if specs.len() != SPEC_COUNT {
            return Err(DomainError::validation(format!(
                "Exactly {SPEC_COUNT} specializations required, got {}",
                specs.len()
            )));
        }
        let stats = calculate_stats(&attributes, &specs);
        Ok(Self {
            id: PlayerId::new(),
            name: name.to_uppercase(),
            age: age.to_string(),
            level: LEVEL_MIN,
            attributes,
            specs,
            inventory: Vec::new(),
            dice: DiceTray::default(),
            current_pv: Some(stats.pv_max),
            current_ps: Some(stats.ps_max),
            current_pa: Some(PA_MAX),
        })
    }

    /// Recompute derived stats from the base block and specializations.
    pub fn stats(&self) -> DerivedStats {
        calculate_stats(&self.attributes, &self.specs)
    }

    /// Fill current pools missing from an older document with the
    /// recomputed maxima. Applied uniformly on every load.
    pub fn backfill(&mut self) {
        let stats = self.stats();
        self.current_pv.get_or_insert(stats.pv_max);
        self.current_ps.get_or_insert(stats.ps_max);
        self.current_pa.get_or_insert(stats.pa_max);
    }

    /// Current value of a pool, defaulting to its recomputed max.
    pub fn pool(&self, pool: Pool) -> i32 {
        let stats = self.stats();
        match pool {
            Pool::Pv => self.current_pv.unwrap_or(stats.pv_max),
            Pool::Ps => self.current_ps.unwrap_or(stats.ps_max),
            Pool::Pa => self.current_pa.unwrap_or(stats.pa_max),
        }
    }

    /// Step a pool: inc clamps at the recomputed max, dec floors at 0.
    pub fn adjust_pool(&mut self, pool: Pool, action: StepAction) {
        let stats = self.stats();
        let max = match pool {
            Pool::Pv => stats.pv_max,
            Pool::Ps => stats.ps_max,
            Pool::Pa => stats.pa_max,
        };
        let next = match action {
            StepAction::Inc => (self.pool(pool) + 1).min(max),
            StepAction::Dec => (self.pool(pool) - 1).max(0),
        };
        match pool {
            Pool::Pv => self.current_pv = Some(next),
            Pool::Ps => self.current_ps = Some(next),
            Pool::Pa => self.current_pa = Some(next),
        }
    }

    /// Step the level within `[1, 20]`. Cosmetic; no stat effect.
    pub fn adjust_level(&mut self, action: StepAction) {
        self.level = match action {
            StepAction::Inc => (self.level + 1).min(LEVEL_MAX),
            StepAction::Dec => self.level.saturating_sub(1).max(LEVEL_MIN),
        };
    }

    /// Append an item with quantity 1. Blank names are rejected.
    pub fn add_item(&mut self, name: &str) -> Result<&InventoryItem, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::validation("Item name cannot be empty"));
        }
        self.inventory.push(InventoryItem::new(name.trim()));
        // push succeeded, last element exists
        Ok(&self.inventory[self.inventory.len() - 1])
    }

    /// Step an item's quantity. Unknown item id is a no-op.
    pub fn adjust_item_qty(&mut self, item_id: ItemId, action: StepAction) {
        if let Some(item) = self.inventory.iter_mut().find(|i| i.id == item_id) {
            item.qty = match action {
                StepAction::Inc => item.qty + 1,
                StepAction::Dec => item.qty.saturating_sub(1),
            };
        }
    }

    /// Remove an item by id; idempotent.
    pub fn remove_item(&mut self, item_id: ItemId) {
        self.inventory.retain(|i| i.id != item_id);
    }

    /// Swap an item with its neighbor. No-op at either boundary or
    /// when the id is unknown.
    pub fn reorder_item(&mut self, item_id: ItemId, direction: MoveDirection) {
        let Some(index) = self.inventory.iter().position(|i| i.id == item_id) else {
            return;
        };
        match direction {
            MoveDirection::Up if index > 0 => self.inventory.swap(index, index - 1),
            MoveDirection::Down if index + 1 < self.inventory.len() => {
                self.inventory.swap(index, index + 1)
            }
            _ => {}
        }
    }

    /// Record a die result in the tray, overwriting the previous one.
    pub fn record_roll(&mut self, die: Die, value: u32) {
        self.dice.record(die, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::Attributes;

    fn rook() -> Player {
        Player::create(
            "Rook",
            "34",
            Attributes::new(2, 2, 2, 2, 2),
            vec![
                "socorrista".to_string(),
                "cacador".to_string(),
                "atleta".to_string(),
            ],
        )
        .expect("valid sheet")
    }

    #[test]
    fn create_sets_pools_to_maxima() {
        let player = rook();
        let stats = player.stats();
        assert_eq!(player.name, "ROOK");
        assert_eq!(player.level, 1);
        assert_eq!(player.current_pv, Some(stats.pv_max));
        assert_eq!(player.current_ps, Some(stats.ps_max));
        assert_eq!(player.current_pa, Some(5));
    }

    #[test]
    fn create_rejects_blown_budget() {
        let err = Player::create(
            "Max",
            "20",
            Attributes::new(3, 3, 3, 1, 1),
            vec!["guarda".into(), "pastor".into(), "nativo".into()],
        )
        .expect_err("11 points over a 10-point budget");
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn create_rejects_wrong_spec_count() {
        let err = Player::create(
            "Duo",
            "20",
            Attributes::new(2, 2, 2, 2, 2),
            vec!["guarda".into(), "pastor".into()],
        )
        .expect_err("two specs");
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn pool_steps_clamp_at_both_ends() {
        let mut player = rook();
        let max = player.stats().pv_max;
        player.adjust_pool(Pool::Pv, StepAction::Inc);
        assert_eq!(player.pool(Pool::Pv), max, "inc at max stays at max");
        for _ in 0..(max + 5) {
            player.adjust_pool(Pool::Pv, StepAction::Dec);
        }
        assert_eq!(player.pool(Pool::Pv), 0);
        player.adjust_pool(Pool::Pv, StepAction::Dec);
        assert_eq!(player.pool(Pool::Pv), 0, "dec at zero stays at zero");
    }

    #[test]
    fn level_clamps_to_band() {
        let mut player = rook();
        player.adjust_level(StepAction::Dec);
        assert_eq!(player.level, 1);
        for _ in 0..30 {
            player.adjust_level(StepAction::Inc);
        }
        assert_eq!(player.level, 20);
    }

    #[test]
    fn item_qty_floors_at_zero_without_removal() {
        let mut player = rook();
        let id = player.add_item("corda").expect("named item").id;
        player.adjust_item_qty(id, StepAction::Dec);
        player.adjust_item_qty(id, StepAction::Dec);
        let item = player.inventory.iter().find(|i| i.id == id).expect("kept");
        assert_eq!(item.qty, 0);
        assert_eq!(item.name, "CORDA");
    }

    #[test]
    fn blank_item_name_is_rejected() {
        let mut player = rook();
        assert!(player.add_item("   ").is_err());
        assert!(player.inventory.is_empty());
    }

    #[test]
    fn reorder_swaps_neighbors_and_noops_at_boundaries() {
        let mut player = rook();
        let first = player.add_item("faca").expect("item").id;
        let second = player.add_item("mapa").expect("item").id;
        let third = player.add_item("isqueiro").expect("item").id;

        player.reorder_item(first, MoveDirection::Up);
        assert_eq!(player.inventory[0].id, first, "first up is a no-op");
        player.reorder_item(third, MoveDirection::Down);
        assert_eq!(player.inventory[2].id, third, "last down is a no-op");

        player.reorder_item(second, MoveDirection::Up);
        let order: Vec<ItemId> = player.inventory.iter().map(|i| i.id).collect();
        assert_eq!(order, vec![second, first, third]);

        player.reorder_item(ItemId::new(), MoveDirection::Up);
        let unchanged: Vec<ItemId> = player.inventory.iter().map(|i| i.id).collect();
        assert_eq!(unchanged, order, "unknown id is a no-op");
    }

    #[test]
    fn backfill_fills_missing_pools_only() {
        let json = r#"{
            "id": "4be0643f-1d98-573b-97cd-ca98a65347dd",
            "name": "VELHO",
            "age": "61",
            "attributes": {"vig": 1, "agi": 1, "int": 3, "per": 3, "pre": 2},
            "specs": ["socorrista", "nativo", "pastor"],
            "current_pv": 4
        }"#;
        let mut player: Player = serde_json::from_str(json).expect("old document");
        assert_eq!(player.level, 1, "level defaulted");
        assert!(player.inventory.is_empty(), "inventory defaulted");
        assert_eq!(player.dice, DiceTray::default(), "tray defaulted");
        player.backfill();
        let stats = player.stats();
        assert_eq!(player.current_pv, Some(4), "existing pool untouched");
        assert_eq!(player.current_ps, Some(stats.ps_max));
        assert_eq!(player.current_pa, Some(5));
    }

    #[test]
    fn roll_overwrites_previous_result() {
        let mut player = rook();
        player.record_roll(Die::D12, 7);
        player.record_roll(Die::D12, 3);
        assert_eq!(player.dice.get(Die::D12), Some(3));
        assert_eq!(player.dice.get(Die::D20), None);
    }
}

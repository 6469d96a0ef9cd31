//! Soldier roster entries, service diaries and death records.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::save::GameTime;

/// Side a battlefield unit fought for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Faction {
    /// Units under the player's command
    Player,
    /// Enemy units; assumed when a record does not name a side
    #[default]
    Hostile,
    /// Civilians and other bystanders
    Neutral,
}

/// State a unit was left in by a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitStatus {
    #[default]
    Dead,
    Unconscious,
}

/// One takedown on the battlefield.
///
/// Diaries fold these into their totals; a death record keeps the one that
/// finished the soldier off, with `faction` naming the side responsible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct KillRecord {
    #[serde(default)]
    pub victim: String,
    #[serde(default)]
    pub weapon: String,
    #[serde(default)]
    pub faction: Faction,
    #[serde(default)]
    pub status: UnitStatus,
}

/// Cumulative service record of a single soldier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ServiceDiary {
    #[serde(default)]
    pub kill_total: u32,
    #[serde(default)]
    pub stun_total: u32,
    #[serde(default)]
    pub days_wounded_total: u32,
    #[serde(default)]
    pub months_service: u32,
    #[serde(default)]
    pub weapon_totals: BTreeMap<String, u32>,
}

impl ServiceDiary {
    /// Fold a battlefield takedown into the diary totals.
    pub fn record_kill(&mut self, kill: &KillRecord) {
        let tally = self.weapon_totals.entry(kill.weapon.clone()).or_insert(0);
        *tally = tally.saturating_add(1);
        match kill.status {
            UnitStatus::Dead => self.kill_total = self.kill_total.saturating_add(1),
            UnitStatus::Unconscious => self.stun_total = self.stun_total.saturating_add(1),
        }
    }

    /// Add wounded days from a stay in the infirmary.
    pub fn record_recovery(&mut self, days: u32) {
        self.days_wounded_total = self.days_wounded_total.saturating_add(days);
    }

    /// Advance the service counter at a month boundary.
    pub fn record_month(&mut self) {
        self.months_service = self.months_service.saturating_add(1);
    }
}

/// How and when a soldier died.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SoldierDeath {
    #[serde(default)]
    pub time: GameTime,
    /// Missing when the soldier died off the battlefield.
    #[serde(default)]
    pub cause: Option<KillRecord>,
}

impl SoldierDeath {
    /// Whether the fatal blow came from the player's own side.
    #[must_use]
    pub fn is_friendly_fire(&self) -> bool {
        self.cause
            .as_ref()
            .is_some_and(|cause| cause.faction == Faction::Player)
    }
}

/// A roster entry, alive or dead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Soldier {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub diary: ServiceDiary,
    #[serde(default)]
    pub death: Option<SoldierDeath>,
}

impl Soldier {
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_diary(mut self, diary: ServiceDiary) -> Self {
        self.diary = diary;
        self
    }

    #[must_use]
    pub fn with_death(mut self, death: SoldierDeath) -> Self {
        self.death = Some(death);
        self
    }
}

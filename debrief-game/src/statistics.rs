//! Campaign-wide aggregation over a finished save.
//!
//! Everything here is a single read-only pass over the snapshot: sums,
//! extrema and one merge of per-weapon tallies. Empty collections fall back
//! to zero rather than leaking sentinels or dividing by zero.
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::constants::{CATALOG_ALIEN_BASE, CATALOG_TERROR_SITE, CATALOG_UFO};
use crate::numbers::{saturate_i64_to_i32, truncated_mean};
use crate::ruleset::Ruleset;
use crate::save::{Difficulty, GameEnding, SavedGame};
use crate::soldier::{ServiceDiary, Soldier, SoldierDeath};

/// Totals shown on the end-of-game statistics screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CampaignStatistics {
    pub difficulty: Difficulty,
    pub ending: GameEnding,
    pub average_monthly_score: i32,
    pub total_income: i64,
    pub total_expenditure: i64,
    pub missions_won: usize,
    pub missions_lost: usize,
    pub night_missions: usize,
    pub best_score: i32,
    pub worst_score: i32,
    pub soldiers_recruited: usize,
    pub soldiers_lost: usize,
    pub aliens_killed: u64,
    pub aliens_captured: u64,
    pub friendly_fire_incidents: usize,
    pub weapon_kills: BTreeMap<String, u64>,
    /// `None` when no weapon scored a single kill.
    pub most_effective_weapon: Option<String>,
    pub longest_service_months: u32,
    pub sick_days: u64,
    pub ufos_detected: u32,
    pub alien_bases_discovered: u32,
    pub terror_sites: u32,
    pub craft_owned: u64,
    pub bases_built: usize,
    pub scientists_hired: u64,
    pub engineers_hired: u64,
    pub countries_infiltrated: usize,
    pub research_completed: usize,
}

impl CampaignStatistics {
    /// Aggregate every statistic from a save snapshot.
    #[must_use]
    pub fn compute(save: &SavedGame, ruleset: &Ruleset) -> Self {
        let mut stats = Self {
            difficulty: save.difficulty,
            ending: save.ending,
            ..Self::default()
        };
        stats.tally_economy(save);
        stats.tally_missions(save);
        stats.tally_soldiers(save);
        stats.tally_catalog(save, ruleset);
        stats.tally_holdings(save);

        log::debug!(
            "campaign statistics: {} missions, {} soldiers, {} kills, best weapon {:?}",
            save.mission_statistics.len(),
            stats.soldiers_recruited,
            stats.aliens_killed,
            stats.most_effective_weapon
        );
        stats
    }

    #[must_use]
    pub const fn missions_total(&self) -> usize {
        self.missions_won + self.missions_lost
    }

    fn tally_economy(&mut self, save: &SavedGame) {
        let score_total: i64 = save.research_scores.iter().copied().map(i64::from).sum();
        self.average_monthly_score =
            saturate_i64_to_i32(truncated_mean(score_total, save.research_scores.len()));
        self.total_income = save
            .incomes
            .iter()
            .fold(0_i64, |acc, value| acc.saturating_add(*value));
        self.total_expenditure = save
            .expenditures
            .iter()
            .fold(0_i64, |acc, value| acc.saturating_add(*value));
    }

    fn tally_missions(&mut self, save: &SavedGame) {
        let missions = &save.mission_statistics;
        self.missions_won = missions.iter().filter(|m| m.success).count();
        self.missions_lost = missions.len() - self.missions_won;
        self.night_missions = missions.iter().filter(|m| m.is_night()).count();
        self.best_score = missions.iter().map(|m| m.score).max().unwrap_or(0);
        self.worst_score = missions.iter().map(|m| m.score).min().unwrap_or(0);
    }

    fn tally_soldiers(&mut self, save: &SavedGame) {
        let recruited = recruited_soldiers(save);
        self.soldiers_recruited = recruited.len();

        let fallen = fallen_soldiers(save);
        self.soldiers_lost = fallen.len();
        self.friendly_fire_incidents = fallen
            .iter()
            .filter(|s| s.death.as_ref().is_some_and(SoldierDeath::is_friendly_fire))
            .count();

        for soldier in &recruited {
            let diary = &soldier.diary;
            self.aliens_killed += u64::from(diary.kill_total);
            self.aliens_captured += u64::from(diary.stun_total);
            self.sick_days += u64::from(diary.days_wounded_total);
            self.longest_service_months = self.longest_service_months.max(diary.months_service);
        }

        self.weapon_kills = merge_weapon_kills(recruited.iter().map(|s| &s.diary));
        self.most_effective_weapon =
            most_effective_weapon(&self.weapon_kills).map(|(weapon, _)| weapon.to_string());
    }

    fn tally_catalog(&mut self, save: &SavedGame, ruleset: &Ruleset) {
        self.ufos_detected = save.ids.created(CATALOG_UFO);
        self.alien_bases_discovered = save.ids.created(CATALOG_ALIEN_BASE);
        self.terror_sites = save.ids.created(CATALOG_TERROR_SITE);
        self.craft_owned = ruleset
            .crafts
            .iter()
            .map(|craft| u64::from(save.ids.created(craft)))
            .sum();
    }

    fn tally_holdings(&mut self, save: &SavedGame) {
        self.bases_built = save.bases.len();
        self.scientists_hired = save.bases.iter().map(|b| u64::from(b.scientists)).sum();
        self.engineers_hired = save.bases.iter().map(|b| u64::from(b.engineers)).sum();
        self.countries_infiltrated = save.countries.iter().filter(|c| c.pact).count();
        self.research_completed = save.discovered_research.len();
    }
}

/// Living and fallen soldiers, each id counted once.
///
/// A soldier on both rosters means a corrupt save; the first entry wins.
#[must_use]
pub fn recruited_soldiers(save: &SavedGame) -> Vec<&Soldier> {
    unique_by_id(save.all_soldiers(), "more than one roster")
}

/// The dead roster, each id counted once.
///
/// Death records are read from here so a soldier duplicated onto a living
/// roster still keeps its cause of death.
#[must_use]
pub fn fallen_soldiers(save: &SavedGame) -> Vec<&Soldier> {
    unique_by_id(save.dead_soldiers.iter(), "the dead roster twice")
}

fn unique_by_id<'a, I>(soldiers: I, context: &str) -> Vec<&'a Soldier>
where
    I: IntoIterator<Item = &'a Soldier>,
{
    let mut seen = BTreeSet::new();
    soldiers
        .into_iter()
        .filter(|soldier| {
            let fresh = seen.insert(soldier.id);
            if !fresh {
                log::warn!(
                    "soldier {} ({}) appears on {context}",
                    soldier.id,
                    soldier.name
                );
            }
            fresh
        })
        .collect()
}

/// Sum per-weapon kill tallies across diaries.
pub fn merge_weapon_kills<'a, I>(diaries: I) -> BTreeMap<String, u64>
where
    I: IntoIterator<Item = &'a ServiceDiary>,
{
    let mut merged = BTreeMap::new();
    for diary in diaries {
        for (weapon, kills) in &diary.weapon_totals {
            *merged.entry(weapon.clone()).or_insert(0) += u64::from(*kills);
        }
    }
    merged
}

/// Weapon with the highest tally; ties keep the first key in sorted order.
#[must_use]
pub fn most_effective_weapon(weapon_kills: &BTreeMap<String, u64>) -> Option<(&str, u64)> {
    let mut best: Option<(&str, u64)> = None;
    for (weapon, &kills) in weapon_kills {
        let leading = best.map_or(0, |(_, top)| top);
        if kills > leading {
            best = Some((weapon.as_str(), kills));
        }
    }
    best
}

//! End game statistics screen contents.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::constants::{
    STAT_ALIEN_BASES, STAT_ALIENS_CAPTURED, STAT_ALIENS_KILLED, STAT_AVERAGE_MONTHLY_SCORE,
    STAT_BASES_BUILT, STAT_BEST_RATING, STAT_BEST_WEAPON, STAT_COUNTRIES_INFILTRATED,
    STAT_CRAFT_OWNED, STAT_DIFFICULTY, STAT_ENGINEERS, STAT_FRIENDLY_FIRE, STAT_LONGEST_SERVICE,
    STAT_MISSIONS_LOST, STAT_MISSIONS_WON, STAT_NIGHT_MISSIONS, STAT_RESEARCH, STAT_SCIENTISTS,
    STAT_SICK_DAYS, STAT_SOLDIERS_LOST, STAT_SOLDIERS_RECRUITED, STAT_TERROR_SITES,
    STAT_TOTAL_EXPENDITURE, STAT_TOTAL_INCOME, STAT_UFOS_DETECTED, STAT_WORST_RATING,
    STR_DATE_ORDINALS, STR_MONTHS, STR_NONE, STR_OK, TITLE_LINE_BREAK,
};
use crate::format::NumberFormat;
use crate::i18n::Localizer;
use crate::numbers::{u64_to_i64, usize_to_i64};
use crate::ruleset::Ruleset;
use crate::save::{GameEnding, GameTime, SavedGame};
use crate::statistics::CampaignStatistics;

/// One line of the two-column statistics list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatRow {
    pub label: String,
    pub value: String,
}

impl StatRow {
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Everything the statistics window displays, already localized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsScreen {
    pub title: String,
    pub rows: Vec<StatRow>,
    pub button: String,
    pub statistics: CampaignStatistics,
}

impl StatisticsScreen {
    /// Aggregate the save and localize the result for display.
    #[must_use]
    pub fn build(save: &SavedGame, ruleset: &Ruleset, localizer: &dyn Localizer) -> Self {
        let statistics = CampaignStatistics::compute(save, ruleset);
        Self {
            title: screen_title(save.ending, save.time, localizer),
            rows: statistic_rows(&statistics, localizer),
            button: localizer.tr(STR_OK),
            statistics,
        }
    }
}

/// Compute the ordered (label, value) rows for a save.
#[must_use]
pub fn compute_rows(
    save: &SavedGame,
    ruleset: &Ruleset,
    localizer: &dyn Localizer,
) -> Vec<StatRow> {
    statistic_rows(&CampaignStatistics::compute(save, ruleset), localizer)
}

/// Format aggregated statistics into display rows, in screen order.
#[must_use]
pub fn statistic_rows(stats: &CampaignStatistics, localizer: &dyn Localizer) -> Vec<StatRow> {
    let fmt = NumberFormat::from_localizer(localizer);
    let count = |value: usize| fmt.number(usize_to_i64(value));
    let total = |value: u64| fmt.number(u64_to_i64(value));
    let weapon = stats.most_effective_weapon.as_deref().unwrap_or(STR_NONE);

    [
        (STAT_DIFFICULTY, localizer.tr(stats.difficulty.string_key())),
        (STAT_AVERAGE_MONTHLY_SCORE, fmt.number(stats.average_monthly_score)),
        (STAT_TOTAL_INCOME, fmt.funding(stats.total_income)),
        (STAT_TOTAL_EXPENDITURE, fmt.funding(stats.total_expenditure)),
        (STAT_MISSIONS_WON, count(stats.missions_won)),
        (STAT_MISSIONS_LOST, count(stats.missions_lost)),
        (STAT_NIGHT_MISSIONS, count(stats.night_missions)),
        (STAT_BEST_RATING, fmt.number(stats.best_score)),
        (STAT_WORST_RATING, fmt.number(stats.worst_score)),
        (STAT_SOLDIERS_RECRUITED, count(stats.soldiers_recruited)),
        (STAT_SOLDIERS_LOST, count(stats.soldiers_lost)),
        (STAT_ALIENS_KILLED, total(stats.aliens_killed)),
        (STAT_ALIENS_CAPTURED, total(stats.aliens_captured)),
        (STAT_FRIENDLY_FIRE, count(stats.friendly_fire_incidents)),
        (STAT_BEST_WEAPON, localizer.tr(weapon)),
        (STAT_LONGEST_SERVICE, fmt.number(stats.longest_service_months)),
        (STAT_SICK_DAYS, total(stats.sick_days)),
        (STAT_UFOS_DETECTED, fmt.number(stats.ufos_detected)),
        (STAT_ALIEN_BASES, fmt.number(stats.alien_bases_discovered)),
        (STAT_COUNTRIES_INFILTRATED, count(stats.countries_infiltrated)),
        (STAT_TERROR_SITES, fmt.number(stats.terror_sites)),
        (STAT_BASES_BUILT, count(stats.bases_built)),
        (STAT_CRAFT_OWNED, total(stats.craft_owned)),
        (STAT_SCIENTISTS, total(stats.scientists_hired)),
        (STAT_ENGINEERS, total(stats.engineers_hired)),
        (STAT_RESEARCH, count(stats.research_completed)),
    ]
    .into_iter()
    .map(|(label, value)| StatRow::new(localizer.tr(label), value))
    .collect()
}

/// Ending banner followed by the final campaign date.
#[must_use]
pub fn screen_title(ending: GameEnding, time: GameTime, localizer: &dyn Localizer) -> String {
    let date = format!(
        "{} {} {}",
        day_string(time.day, localizer),
        month_string(time.month, localizer),
        time.year
    );
    match ending.banner_key() {
        Some(key) => format!("{}{TITLE_LINE_BREAK}{date}", localizer.tr(key)),
        None => date,
    }
}

/// Day of month with its localized ordinal suffix.
#[must_use]
pub fn day_string(day: u8, localizer: &dyn Localizer) -> String {
    let ordinal = match day {
        1 | 21 | 31 => STR_DATE_ORDINALS[0],
        2 | 22 => STR_DATE_ORDINALS[1],
        3 | 23 => STR_DATE_ORDINALS[2],
        _ => STR_DATE_ORDINALS[3],
    };
    let mut args = BTreeMap::new();
    args.insert("0", day.to_string());
    localizer.tr_args(ordinal, &args)
}

fn month_string(month: u8, localizer: &dyn Localizer) -> String {
    usize::from(month)
        .checked_sub(1)
        .and_then(|index| STR_MONTHS.get(index))
        .map_or_else(|| month.to_string(), |key| localizer.tr(key))
}

//! Centralized keys and thresholds for Debrief statistics.
//!
//! Catalog keys match the identifiers the save-game uses for its id
//! sequences; string keys match the entries in the bundled string table.

// Aggregation thresholds ----------------------------------------------------
/// Missions with a daylight level above this value were fought at night.
pub const NIGHT_DAYLIGHT_THRESHOLD: u8 = 5;
/// Catalog counters start at this value before any entity is created.
pub const CATALOG_BASELINE: i32 = 1;

// Catalog keys --------------------------------------------------------------
pub const CATALOG_UFO: &str = "STR_UFO";
pub const CATALOG_ALIEN_BASE: &str = "STR_ALIEN_BASE";
pub const CATALOG_TERROR_SITE: &str = "STR_TERROR_SITE";

// Screen strings ------------------------------------------------------------
pub(crate) const STR_NONE: &str = "STR_NONE";
pub(crate) const STR_MISSION_WIN: &str = "STR_MISSION_WIN";
pub(crate) const STR_MISSION_LOSS: &str = "STR_MISSION_LOSS";
pub(crate) const STR_THOUSANDS_SEPARATOR: &str = "STR_THOUSANDS_SEPARATOR";
pub(crate) const STR_OK: &str = "STR_OK";
pub(crate) const STR_DATE_ORDINALS: [&str; 4] = [
    "STR_DATE_FIRST",
    "STR_DATE_SECOND",
    "STR_DATE_THIRD",
    "STR_DATE_FOURTH",
];
pub(crate) const STR_MONTHS: [&str; 12] = [
    "STR_JAN", "STR_FEB", "STR_MAR", "STR_APR", "STR_MAY", "STR_JUN", "STR_JUL", "STR_AUG",
    "STR_SEP", "STR_OCT", "STR_NOV", "STR_DEC",
];

/// Separator between the ending banner and the date in the screen title.
pub const TITLE_LINE_BREAK: char = '\n';
/// Currency marker prepended to funding values.
pub const CURRENCY_SYMBOL: &str = "$";

// Row labels ----------------------------------------------------------------
pub(crate) const STAT_DIFFICULTY: &str = "STR_STAT_DIFFICULTY";
pub(crate) const STAT_AVERAGE_MONTHLY_SCORE: &str = "STR_STAT_AVERAGE_MONTHLY_SCORE";
pub(crate) const STAT_TOTAL_INCOME: &str = "STR_STAT_TOTAL_INCOME";
pub(crate) const STAT_TOTAL_EXPENDITURE: &str = "STR_STAT_TOTAL_EXPENDITURE";
pub(crate) const STAT_MISSIONS_WON: &str = "STR_STAT_MISSIONS_ACCOMPLISHED";
pub(crate) const STAT_MISSIONS_LOST: &str = "STR_STAT_MISSIONS_FAILED";
pub(crate) const STAT_NIGHT_MISSIONS: &str = "STR_STAT_NIGHT_MISSIONS";
pub(crate) const STAT_BEST_RATING: &str = "STR_STAT_BEST_RATING";
pub(crate) const STAT_WORST_RATING: &str = "STR_STAT_WORST_RATING";
pub(crate) const STAT_SOLDIERS_RECRUITED: &str = "STR_STAT_SOLDIERS_RECRUITED";
pub(crate) const STAT_SOLDIERS_LOST: &str = "STR_STAT_SOLDIERS_LOST";
pub(crate) const STAT_ALIENS_KILLED: &str = "STR_STAT_ALIENS_KILLED";
pub(crate) const STAT_ALIENS_CAPTURED: &str = "STR_STAT_ALIENS_CAPTURED";
pub(crate) const STAT_FRIENDLY_FIRE: &str = "STR_STAT_FRIENDLY_FIRE";
pub(crate) const STAT_BEST_WEAPON: &str = "STR_STAT_MOST_EFFECTIVE_WEAPON";
pub(crate) const STAT_LONGEST_SERVICE: &str = "STR_STAT_LONGEST_SERVICE";
pub(crate) const STAT_SICK_DAYS: &str = "STR_STAT_SICK_DAYS";
pub(crate) const STAT_UFOS_DETECTED: &str = "STR_STAT_UFOS_DETECTED";
pub(crate) const STAT_ALIEN_BASES: &str = "STR_STAT_ALIEN_BASES";
pub(crate) const STAT_COUNTRIES_INFILTRATED: &str = "STR_STAT_COUNTRIES_INFILTRATED";
pub(crate) const STAT_TERROR_SITES: &str = "STR_STAT_CITIES_TERRORIZED";
pub(crate) const STAT_BASES_BUILT: &str = "STR_STAT_BASES_BUILT";
pub(crate) const STAT_CRAFT_OWNED: &str = "STR_STAT_CRAFT_OWNED";
pub(crate) const STAT_SCIENTISTS: &str = "STR_STAT_SCIENTISTS_HIRED";
pub(crate) const STAT_ENGINEERS: &str = "STR_STAT_ENGINEERS_HIRED";
pub(crate) const STAT_RESEARCH: &str = "STR_STAT_RESEARCH_COMPLETED";

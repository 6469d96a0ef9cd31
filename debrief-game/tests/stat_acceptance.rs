use debrief_game::{
    Base, CampaignStatistics, Country, MissionStatistics, Ruleset, SavedGame, ServiceDiary, Soldier,
    StringTable, compute_rows, merge_weapon_kills, most_effective_weapon,
};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

const SAMPLE_SIZE: u64 = 200;
const WEAPONS: [&str; 6] = [
    "STR_RIFLE",
    "STR_LASER_RIFLE",
    "STR_HEAVY_PLASMA",
    "STR_GRENADE",
    "STR_STUN_ROD",
    "STR_AUTO_CANNON",
];

fn random_diary(rng: &mut SmallRng) -> ServiceDiary {
    let mut diary = ServiceDiary {
        days_wounded_total: rng.gen_range(0..60),
        months_service: rng.gen_range(0..36),
        ..ServiceDiary::default()
    };
    for weapon in WEAPONS {
        if rng.gen_bool(0.4) {
            let kills = rng.gen_range(1..8);
            diary.weapon_totals.insert(weapon.to_string(), kills);
            diary.kill_total += kills;
        }
    }
    diary
}

fn random_save(seed: u64) -> SavedGame {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mission_count = rng.gen_range(0..20);
    let mission_statistics = (0..mission_count)
        .map(|id| {
            MissionStatistics::new(
                id,
                rng.gen_bool(0.6),
                rng.gen_range(-500..=500),
                rng.gen_range(0..=15),
            )
        })
        .collect();

    let mut next_id = 0;
    let mut soldier = |rng: &mut SmallRng| {
        next_id += 1;
        Soldier::new(next_id, format!("Soldier {next_id}")).with_diary(random_diary(rng))
    };
    let bases = (0..rng.gen_range(1..4))
        .map(|index| Base {
            name: format!("Base {index}"),
            soldiers: (0..rng.gen_range(0..6)).map(|_| soldier(&mut rng)).collect(),
            scientists: rng.gen_range(0..50),
            engineers: rng.gen_range(0..50),
        })
        .collect();
    let dead_soldiers = (0..rng.gen_range(0..5)).map(|_| soldier(&mut rng)).collect();

    SavedGame {
        research_scores: (0..rng.gen_range(0..12))
            .map(|_| rng.gen_range(-200..800))
            .collect(),
        incomes: (0..6).map(|_| rng.gen_range(0..5_000_000)).collect(),
        expenditures: (0..6).map(|_| rng.gen_range(0..5_000_000)).collect(),
        mission_statistics,
        bases,
        dead_soldiers,
        countries: (0..16)
            .map(|index| Country {
                kind: format!("STR_COUNTRY_{index}"),
                pact: rng.gen_bool(0.2),
            })
            .collect(),
        ..SavedGame::default()
    }
}

#[test]
fn mission_outcomes_partition_the_record() {
    for seed in 0..SAMPLE_SIZE {
        let save = random_save(seed);
        let stats = CampaignStatistics::compute(&save, &Ruleset::default());
        assert_eq!(
            stats.missions_won + stats.missions_lost,
            save.mission_statistics.len(),
            "seed {seed}"
        );
        assert!(stats.night_missions <= save.mission_statistics.len());
        assert!(stats.best_score >= stats.worst_score, "seed {seed}");
    }
}

#[test]
fn recruited_counts_both_rosters() {
    for seed in 0..SAMPLE_SIZE {
        let save = random_save(seed);
        let stats = CampaignStatistics::compute(&save, &Ruleset::default());
        let active = save.active_soldiers().count();
        assert_eq!(
            stats.soldiers_recruited,
            active + save.dead_soldiers.len(),
            "seed {seed}"
        );
        assert_eq!(stats.soldiers_lost, save.dead_soldiers.len());
    }
}

#[test]
fn roster_order_does_not_change_statistics() {
    let mut rng = SmallRng::seed_from_u64(0x5EED);
    for seed in 0..SAMPLE_SIZE {
        let save = random_save(seed);
        let mut shuffled = save.clone();
        shuffled.bases.shuffle(&mut rng);
        for base in &mut shuffled.bases {
            base.soldiers.shuffle(&mut rng);
        }
        shuffled.dead_soldiers.shuffle(&mut rng);
        shuffled.mission_statistics.shuffle(&mut rng);

        let original = CampaignStatistics::compute(&save, &Ruleset::default());
        let reordered = CampaignStatistics::compute(&shuffled, &Ruleset::default());
        assert_eq!(original.weapon_kills, reordered.weapon_kills, "seed {seed}");
        assert_eq!(
            original.most_effective_weapon, reordered.most_effective_weapon,
            "seed {seed}"
        );
        assert_eq!(original, reordered, "seed {seed}");
    }
}

#[test]
fn weapon_merge_is_order_independent() {
    let diaries: Vec<ServiceDiary> = [
        vec![("A", 5)],
        vec![("A", 2), ("B", 3)],
        vec![("B", 1)],
    ]
    .into_iter()
    .map(|weapons| ServiceDiary {
        weapon_totals: weapons
            .into_iter()
            .map(|(weapon, kills)| (weapon.to_string(), kills))
            .collect(),
        ..ServiceDiary::default()
    })
    .collect();

    let forward = merge_weapon_kills(diaries.iter());
    let backward = merge_weapon_kills(diaries.iter().rev());
    let expected: BTreeMap<String, u64> = [("A".to_string(), 7), ("B".to_string(), 4)]
        .into_iter()
        .collect();
    assert_eq!(forward, expected);
    assert_eq!(backward, expected);
    assert_eq!(most_effective_weapon(&forward), Some(("A", 7)));
}

#[test]
fn compute_is_idempotent_and_read_only() {
    for seed in 0..SAMPLE_SIZE {
        let save = random_save(seed);
        let before = save.clone();
        let english = StringTable::english();
        let ruleset = Ruleset::load_from_static();
        let first = compute_rows(&save, &ruleset, &english);
        let second = compute_rows(&save, &ruleset, &english);
        assert_eq!(first, second, "seed {seed}");
        assert_eq!(save, before, "aggregation must not mutate the save");
    }
}

#[test]
fn degenerate_saves_fall_back_to_zero() {
    let save = SavedGame {
        research_scores: Vec::new(),
        mission_statistics: Vec::new(),
        ..random_save(7)
    };
    let stats = CampaignStatistics::compute(&save, &Ruleset::default());
    assert_eq!(stats.average_monthly_score, 0);
    assert_eq!(stats.best_score, 0);
    assert_eq!(stats.worst_score, 0);
    assert_eq!(stats.missions_won, 0);
    assert_eq!(stats.missions_lost, 0);
    assert_eq!(stats.night_missions, 0);
}

#[test]
fn countries_scenario() {
    let save = SavedGame {
        countries: [true, false, true]
            .into_iter()
            .enumerate()
            .map(|(index, pact)| Country {
                kind: format!("STR_COUNTRY_{index}"),
                pact,
            })
            .collect(),
        ..SavedGame::default()
    };
    let stats = CampaignStatistics::compute(&save, &Ruleset::default());
    assert_eq!(stats.countries_infiltrated, 2);
}

#[test]
fn craft_counter_scenario() {
    let mut save = SavedGame::default();
    save.ids.set("STR_INTERCEPTOR", 5);
    save.ids.set("STR_SKYRANGER", 3);
    let stats = CampaignStatistics::compute(&save, &Ruleset::load_from_static());
    assert_eq!(stats.craft_owned, 6);
}

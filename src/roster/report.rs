//! Participation counts over a scraped roster.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::types::{Group, Race, Runner};

/// Coarse gender bucket derived from the group label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Unspecified,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Unspecified];

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Unspecified => "unspecified gender",
        }
    }

    /// Marker substring looked up in the group label.
    fn marker(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
            Gender::Unspecified => "Sem",
        }
    }
}

/// Whether a bracket falls into a gender bucket.
///
/// The site encodes gender only in the bracket label ("Seniores F",
/// "Veteranos M40", "Sem escalão"), so this is a substring test on that
/// label. Kept in one place so a structured gender field can replace it
/// without touching the reporting loop.
pub fn group_matches_gender(group: Group, gender: Gender) -> bool {
    group.label().contains(gender.marker())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenderCount {
    pub gender: Gender,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupCount {
    pub group: Group,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceCount {
    pub race: Race,
    pub count: usize,
    /// One entry per bracket in declaration order, zero counts included.
    pub groups: Vec<GroupCount>,
}

/// Aggregate participation counts. Built in one read-only pass; `Display`
/// renders the full fixed-order report (total, genders, then each race with
/// its per-bracket lines).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterSummary {
    pub total: usize,
    pub genders: Vec<GenderCount>,
    pub races: Vec<RaceCount>,
}

impl RosterSummary {
    pub fn compute(runners: &[Runner]) -> Self {
        let genders = Gender::ALL
            .iter()
            .map(|&gender| GenderCount {
                gender,
                count: runners
                    .iter()
                    .filter(|r| group_matches_gender(r.group, gender))
                    .count(),
            })
            .collect();

        let races = Race::ALL
            .iter()
            .map(|&race| RaceCount {
                race,
                count: runners.iter().filter(|r| r.race == race).count(),
                groups: Group::ALL
                    .iter()
                    .map(|&group| GroupCount {
                        group,
                        count: runners
                            .iter()
                            .filter(|r| r.race == race && r.group == group)
                            .count(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            total: runners.len(),
            genders,
            races,
        }
    }
}

impl fmt::Display for RosterSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total number of runners: {}", self.total)?;
        for gc in &self.genders {
            writeln!(
                f,
                "Total number of {} runners: {}",
                gc.gender.label(),
                gc.count
            )?;
        }
        for rc in &self.races {
            writeln!(
                f,
                "Total number of runners competing in {}: {}",
                rc.race, rc.count
            )?;
            for gc in &rc.groups {
                writeln!(
                    f,
                    "Total number of runners competing in {} - {}: {}",
                    rc.race, gc.group, gc.count
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::types::Paid;

    fn runner(id: &str, group: Group, race: Race) -> Runner {
        Runner {
            id: id.to_string(),
            name: format!("Runner {}", id),
            team: None,
            group,
            paid: Paid::Paid,
            race,
        }
    }

    fn sample_roster() -> Vec<Runner> {
        vec![
            runner("101", Group::SenioresF, Race::Walk),
            runner("102", Group::VeteranosM40, Race::MiniTrail),
        ]
    }

    fn count_for(summary: &RosterSummary, race: Race, group: Group) -> usize {
        summary
            .races
            .iter()
            .find(|rc| rc.race == race)
            .unwrap()
            .groups
            .iter()
            .find(|gc| gc.group == group)
            .unwrap()
            .count
    }

    #[test]
    fn test_sample_roster_counts() {
        let summary = RosterSummary::compute(&sample_roster());

        assert_eq!(summary.total, 2);
        assert_eq!(summary.genders[0].count, 1); // male
        assert_eq!(summary.genders[1].count, 1); // female
        assert_eq!(summary.genders[2].count, 0); // unspecified

        let walk = &summary.races[0];
        assert_eq!(walk.race, Race::Walk);
        assert_eq!(walk.count, 1);
        assert_eq!(count_for(&summary, Race::Walk, Group::SenioresF), 1);

        let mini = &summary.races[1];
        assert_eq!(mini.count, 1);
        assert_eq!(count_for(&summary, Race::MiniTrail, Group::VeteranosM40), 1);

        // everything else is zero
        let nonzero: usize = summary
            .races
            .iter()
            .flat_map(|rc| rc.groups.iter())
            .filter(|gc| gc.count > 0)
            .count();
        assert_eq!(nonzero, 2);
    }

    #[test]
    fn test_group_counts_sum_to_race_totals() {
        let roster = vec![
            runner("1", Group::SenioresF, Race::Walk),
            runner("2", Group::SenioresF, Race::Walk),
            runner("3", Group::Sub18M, Race::Walk),
            runner("4", Group::SenioresF, Race::MiniTrail),
            runner("5", Group::Sem, Race::ShortTrail),
        ];
        let summary = RosterSummary::compute(&roster);

        for rc in &summary.races {
            let group_sum: usize = rc.groups.iter().map(|gc| gc.count).sum();
            assert_eq!(group_sum, rc.count);
        }

        // and across races, per-group sums match the roster
        for group in Group::ALL {
            let across_races: usize = summary
                .races
                .iter()
                .map(|rc| count_for(&summary, rc.race, group))
                .sum();
            let expected = roster.iter().filter(|r| r.group == group).count();
            assert_eq!(across_races, expected);
        }
    }

    #[test]
    fn test_gender_bucketing_by_label_substring() {
        assert!(group_matches_gender(Group::VeteranosM55, Gender::Male));
        assert!(!group_matches_gender(Group::VeteranosM55, Gender::Female));
        assert!(group_matches_gender(Group::Sub20F, Gender::Female));
        assert!(group_matches_gender(Group::Sem, Gender::Unspecified));
        // "Sem escalão" carries neither gender marker
        assert!(!group_matches_gender(Group::Sem, Gender::Male));
        assert!(!group_matches_gender(Group::Sem, Gender::Female));
    }

    #[test]
    fn test_report_shape_and_order() {
        let summary = RosterSummary::compute(&sample_roster());
        let report = summary.to_string();
        let lines: Vec<&str> = report.lines().collect();

        // 1 total + 3 genders + 3 races x (1 + 27 groups)
        assert_eq!(lines.len(), 1 + 3 + 3 * 28);
        assert_eq!(lines[0], "Total number of runners: 2");
        assert_eq!(lines[1], "Total number of male runners: 1");
        assert_eq!(lines[2], "Total number of female runners: 1");
        assert_eq!(lines[3], "Total number of unspecified gender runners: 0");
        assert_eq!(lines[4], "Total number of runners competing in Caminhada: 1");
        assert_eq!(
            lines[5],
            "Total number of runners competing in Caminhada - Sem escalão: 0"
        );
        assert!(report.contains("Total number of runners competing in Caminhada - Seniores F: 1"));
        assert!(report
            .contains("Total number of runners competing in Mini Trail - Veteranos M40: 1"));
    }

    #[test]
    fn test_empty_roster_reports_zeros() {
        let summary = RosterSummary::compute(&[]);
        assert_eq!(summary.total, 0);
        assert!(summary.genders.iter().all(|gc| gc.count == 0));
        assert!(summary.races.iter().all(|rc| rc.count == 0));
    }
}

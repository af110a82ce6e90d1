//! Record types for the registration roster.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScraperError;

/// One table row as extracted from the page, cell text in column order.
pub type RawRow = Vec<String>;

/// Every results-table row carries exactly this many columns.
pub const COLUMN_COUNT: usize = 7;

/// Demographic/competition bracket, age range crossed with gender plus the
/// "no bracket" entry. Labels are the exact site strings, matched
/// case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Group {
    #[serde(rename = "Sem escalão")]
    Sem,
    #[serde(rename = "Sub18 F")]
    Sub18F,
    #[serde(rename = "Sub18 M")]
    Sub18M,
    #[serde(rename = "Sub20 F")]
    Sub20F,
    #[serde(rename = "Sub20 M")]
    Sub20M,
    #[serde(rename = "Sub23 F")]
    Sub23F,
    #[serde(rename = "Sub23 M")]
    Sub23M,
    #[serde(rename = "Seniores F")]
    SenioresF,
    #[serde(rename = "Seniores M")]
    SenioresM,
    #[serde(rename = "Veteranas F35")]
    VeteranasF35,
    #[serde(rename = "Veteranos M35")]
    VeteranosM35,
    #[serde(rename = "Veteranas F40")]
    VeteranasF40,
    #[serde(rename = "Veteranos M40")]
    VeteranosM40,
    #[serde(rename = "Veteranas F45")]
    VeteranasF45,
    #[serde(rename = "Veteranos M45")]
    VeteranosM45,
    #[serde(rename = "Veteranas F50")]
    VeteranasF50,
    #[serde(rename = "Veteranos M50")]
    VeteranosM50,
    #[serde(rename = "Veteranas F55")]
    VeteranasF55,
    #[serde(rename = "Veteranos M55")]
    VeteranosM55,
    #[serde(rename = "Veteranas F60")]
    VeteranasF60,
    #[serde(rename = "Veteranos M60")]
    VeteranosM60,
    #[serde(rename = "Veteranas F65")]
    VeteranasF65,
    #[serde(rename = "Veteranos M65")]
    VeteranosM65,
    #[serde(rename = "Veteranas F70")]
    VeteranasF70,
    #[serde(rename = "Veteranos M70")]
    VeteranosM70,
    #[serde(rename = "Veteranas F75")]
    VeteranasF75,
    #[serde(rename = "Veteranos M75")]
    VeteranosM75,
}

impl Group {
    /// All brackets in declaration order; reporting enumerates in this order.
    pub const ALL: [Group; 27] = [
        Group::Sem,
        Group::Sub18F,
        Group::Sub18M,
        Group::Sub20F,
        Group::Sub20M,
        Group::Sub23F,
        Group::Sub23M,
        Group::SenioresF,
        Group::SenioresM,
        Group::VeteranasF35,
        Group::VeteranosM35,
        Group::VeteranasF40,
        Group::VeteranosM40,
        Group::VeteranasF45,
        Group::VeteranosM45,
        Group::VeteranasF50,
        Group::VeteranosM50,
        Group::VeteranasF55,
        Group::VeteranosM55,
        Group::VeteranasF60,
        Group::VeteranosM60,
        Group::VeteranasF65,
        Group::VeteranosM65,
        Group::VeteranasF70,
        Group::VeteranosM70,
        Group::VeteranasF75,
        Group::VeteranosM75,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Group::Sem => "Sem escalão",
            Group::Sub18F => "Sub18 F",
            Group::Sub18M => "Sub18 M",
            Group::Sub20F => "Sub20 F",
            Group::Sub20M => "Sub20 M",
            Group::Sub23F => "Sub23 F",
            Group::Sub23M => "Sub23 M",
            Group::SenioresF => "Seniores F",
            Group::SenioresM => "Seniores M",
            Group::VeteranasF35 => "Veteranas F35",
            Group::VeteranosM35 => "Veteranos M35",
            Group::VeteranasF40 => "Veteranas F40",
            Group::VeteranosM40 => "Veteranos M40",
            Group::VeteranasF45 => "Veteranas F45",
            Group::VeteranosM45 => "Veteranos M45",
            Group::VeteranasF50 => "Veteranas F50",
            Group::VeteranosM50 => "Veteranos M50",
            Group::VeteranasF55 => "Veteranas F55",
            Group::VeteranosM55 => "Veteranos M55",
            Group::VeteranasF60 => "Veteranas F60",
            Group::VeteranosM60 => "Veteranos M60",
            Group::VeteranasF65 => "Veteranas F65",
            Group::VeteranosM65 => "Veteranos M65",
            Group::VeteranasF70 => "Veteranas F70",
            Group::VeteranosM70 => "Veteranos M70",
            Group::VeteranasF75 => "Veteranas F75",
            Group::VeteranosM75 => "Veteranos M75",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Group {
    type Err = ScraperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Group::ALL
            .iter()
            .copied()
            .find(|g| g.label() == s)
            .ok_or_else(|| ScraperError::InvalidEnumValue {
                field: "group",
                value: s.to_string(),
            })
    }
}

/// Competition type a registrant is entered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Race {
    #[serde(rename = "Caminhada")]
    Walk,
    #[serde(rename = "Mini Trail")]
    MiniTrail,
    #[serde(rename = "Trail Curto (Sprint)")]
    ShortTrail,
}

impl Race {
    pub const ALL: [Race; 3] = [Race::Walk, Race::MiniTrail, Race::ShortTrail];

    pub fn label(&self) -> &'static str {
        match self {
            Race::Walk => "Caminhada",
            Race::MiniTrail => "Mini Trail",
            Race::ShortTrail => "Trail Curto (Sprint)",
        }
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Race {
    type Err = ScraperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Race::ALL
            .iter()
            .copied()
            .find(|r| r.label() == s)
            .ok_or_else(|| ScraperError::InvalidEnumValue {
                field: "race",
                value: s.to_string(),
            })
    }
}

/// Payment status. The roster only lists confirmed entries, so the single
/// allowed value is "Pago"; anything else fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Paid {
    #[serde(rename = "Pago")]
    Paid,
}

impl Paid {
    pub fn label(&self) -> &'static str {
        match self {
            Paid::Paid => "Pago",
        }
    }
}

impl fmt::Display for Paid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Paid {
    type Err = ScraperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Paid::Paid.label() {
            Ok(Paid::Paid)
        } else {
            Err(ScraperError::InvalidEnumValue {
                field: "paid",
                value: s.to_string(),
            })
        }
    }
}

/// One validated registrant entry. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Runner {
    pub id: String,
    pub name: String,
    /// Affiliated team; an empty cell on the site means no team.
    pub team: Option<String>,
    pub group: Group,
    pub paid: Paid,
    pub race: Race,
}

impl Runner {
    /// Map one raw 7-cell row onto a validated record.
    ///
    /// Cell 0 is the site's bib column and carries no modeled field; cells
    /// 1..=6 map to id, name, team, group, paid and race.
    pub fn from_cells(cells: &[String]) -> Result<Self, ScraperError> {
        if cells.len() != COLUMN_COUNT {
            return Err(ScraperError::ColumnCount {
                expected: COLUMN_COUNT,
                actual: cells.len(),
            });
        }

        Ok(Self {
            id: cells[1].clone(),
            name: cells[2].clone(),
            team: if cells[3].is_empty() {
                None
            } else {
                Some(cells[3].clone())
            },
            group: cells[4].parse()?,
            paid: cells[5].parse()?,
            race: cells[6].parse()?,
        })
    }
}

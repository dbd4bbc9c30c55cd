use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Category of a logged lift. Descriptive only, never used for ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum LiftType {
    Squat,
    #[serde(rename = "Bench Press")]
    BenchPress,
    Deadlift,
    #[serde(rename = "Overhead Press")]
    OverheadPress,
    #[serde(rename = "Barbell Row")]
    BarbellRow,
    #[serde(rename = "Pull-up")]
    PullUp,
    Dip,
    Other,
}

impl LiftType {
    pub const ALL: [LiftType; 8] = [
        LiftType::Squat,
        LiftType::BenchPress,
        LiftType::Deadlift,
        LiftType::OverheadPress,
        LiftType::BarbellRow,
        LiftType::PullUp,
        LiftType::Dip,
        LiftType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Squat => "Squat",
            Self::BenchPress => "Bench Press",
            Self::Deadlift => "Deadlift",
            Self::OverheadPress => "Overhead Press",
            Self::BarbellRow => "Barbell Row",
            Self::PullUp => "Pull-up",
            Self::Dip => "Dip",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for LiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

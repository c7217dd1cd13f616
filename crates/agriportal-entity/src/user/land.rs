//! Land attribute enumerations: soil and irrigation types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Soil classification for a farmer's land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "soil_type", rename_all = "snake_case")]
pub enum SoilType {
    Alluvial,
    Black,
    Red,
    Clay,
    Sandy,
    Other,
}

impl Default for SoilType {
    fn default() -> Self {
        Self::Alluvial
    }
}

impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Alluvial => "Alluvial",
            Self::Black => "Black",
            Self::Red => "Red",
            Self::Clay => "Clay",
            Self::Sandy => "Sandy",
            Self::Other => "Other",
        };
        write!(f, "{s}")
    }
}

/// Irrigation method used on a farmer's land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "irrigation_type", rename_all = "snake_case")]
pub enum IrrigationType {
    Rainfed,
    #[serde(rename = "Tube Well")]
    TubeWell,
    Canal,
    Drip,
    Sprinkler,
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soil_type_json_values() {
        assert_eq!(
            serde_json::to_value(SoilType::Alluvial).unwrap(),
            serde_json::json!("Alluvial")
        );
        assert_eq!(
            serde_json::from_value::<SoilType>(serde_json::json!("Sandy")).unwrap(),
            SoilType::Sandy
        );
    }

    #[test]
    fn test_irrigation_type_json_values() {
        assert_eq!(
            serde_json::to_value(IrrigationType::TubeWell).unwrap(),
            serde_json::json!("Tube Well")
        );
        assert_eq!(
            serde_json::from_value::<IrrigationType>(serde_json::json!("Drip")).unwrap(),
            IrrigationType::Drip
        );
    }
}

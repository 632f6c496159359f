//! Level definitions and their TOML loader

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{GameError, Result};
use crate::core::types::Money;

/// One career rank of the launderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub name: String,
    /// Clean balance needed to advance. `None` on the final level.
    #[serde(default)]
    pub goal: Option<Money>,
    /// Dirty money in each cartel delivery
    pub bag_size: Money,
    /// Base days between deliveries
    pub bag_interval: u32,
    /// Largest loan, in identities
    pub max_batch: u32,
    /// Suspicion per identity laundered
    pub susp_rate: f64,
}

impl Level {
    fn new(
        name: &str,
        goal: Option<Money>,
        bag_size: Money,
        bag_interval: u32,
        max_batch: u32,
        susp_rate: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            goal,
            bag_size,
            bag_interval,
            max_batch,
            susp_rate,
        }
    }
}

/// The built-in career ladder
pub fn standard_levels() -> Vec<Level> {
    vec![
        Level::new("Laranja", Some(500_000.0), 500_000.0, 45, 10, 0.2),
        Level::new("Gerente", Some(5_000_000.0), 1_500_000.0, 40, 50, 0.3),
        Level::new("Doleiro", Some(20_000_000.0), 5_000_000.0, 30, 100, 0.4),
        Level::new("O Mestre", None, 10_000_000.0, 20, 100, 0.5),
    ]
}

#[derive(Deserialize)]
struct LevelFile {
    level: Vec<Level>,
}

/// Parse a `[[level]]` table array
pub fn parse_levels(content: &str) -> Result<Vec<Level>> {
    let file: LevelFile = toml::from_str(content)?;
    validate_levels(&file.level)?;
    Ok(file.level)
}

/// Load levels from a TOML file
pub fn load_levels(path: &Path) -> Result<Vec<Level>> {
    let content = fs::read_to_string(path)?;
    parse_levels(&content)
}

/// Every level but the last needs a goal; the last must not have one
pub fn validate_levels(levels: &[Level]) -> Result<()> {
    let Some((last, rest)) = levels.split_last() else {
        return Err(GameError::Config("level table is empty".into()));
    };

    for level in rest {
        match level.goal {
            Some(goal) if goal > 0.0 => {}
            _ => {
                return Err(GameError::Config(format!(
                    "level '{}' needs a positive goal",
                    level.name
                )))
            }
        }
    }

    if last.goal.is_some() {
        return Err(GameError::Config(format!(
            "final level '{}' cannot have a goal",
            last.name
        )));
    }

    for level in levels {
        if level.bag_interval == 0 || level.max_batch == 0 || level.bag_size <= 0.0 {
            return Err(GameError::Config(format!(
                "level '{}' has a zero bag size, interval or batch limit",
                level.name
            )));
        }
        if level.susp_rate < 0.0 {
            return Err(GameError::Config(format!(
                "level '{}' has a negative suspicion rate",
                level.name
            )));
        }
    }

    Ok(())
}

//! Run file loading: problem instances and engine limits, read from YAML.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use search_core::SearchConfig;
use search_local::{AnnealConfig, ClimbConfig, InverseTime};
use search_problems::{Board, BlockWorld, Jugs, SlidingTile, Stacks, WaterJug};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Engine limits shared by every `solve` run
    pub search: SearchConfig,
    pub water_jug: WaterJugConfig,
    pub blocks: BlocksConfig,
    pub sliding_tile: SlidingTileConfig,
    pub climb: ClimbConfig,
    pub anneal: AnnealSection,
    pub vacuum: VacuumSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaterJugConfig {
    pub capacities: (u32, u32),
    pub initial: (u32, u32),
    pub goal: (u32, u32),
}

impl Default for WaterJugConfig {
    fn default() -> Self {
        let classic = WaterJug::classic();
        Self {
            capacities: (classic.capacities().first, classic.capacities().second),
            initial: (0, 0),
            goal: (classic.goal().first, classic.goal().second),
        }
    }
}

impl WaterJugConfig {
    pub fn problem(&self) -> Result<WaterJug> {
        WaterJug::new(
            Jugs::from(self.capacities),
            Jugs::from(self.initial),
            Jugs::from(self.goal),
        )
        .context("Invalid water_jug instance")
    }
}

/// Stacks as label strings, bottom block first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlocksConfig {
    pub initial: Vec<String>,
    pub goal: Vec<String>,
}

impl Default for BlocksConfig {
    fn default() -> Self {
        Self {
            initial: vec!["AB".into(), "C".into(), String::new()],
            goal: vec!["CBA".into(), String::new(), String::new()],
        }
    }
}

impl BlocksConfig {
    pub fn initial_stacks(&self) -> Stacks {
        Stacks::from_labels(&self.initial)
    }

    pub fn goal_stacks(&self) -> Stacks {
        Stacks::from_labels(&self.goal)
    }

    pub fn problem(&self) -> Result<BlockWorld> {
        BlockWorld::new(self.initial_stacks(), self.goal_stacks()).context("Invalid blocks instance")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlidingTileConfig {
    pub initial: Vec<Vec<u8>>,
    pub goal: Vec<Vec<u8>>,
}

impl Default for SlidingTileConfig {
    fn default() -> Self {
        Self {
            initial: vec![vec![1, 2, 3], vec![4, 0, 5], vec![7, 8, 6]],
            goal: vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 0]],
        }
    }
}

impl SlidingTileConfig {
    pub fn problem(&self) -> Result<SlidingTile> {
        let initial = Board::from_rows(&self.initial).context("Invalid sliding_tile.initial")?;
        let goal = Board::from_rows(&self.goal).context("Invalid sliding_tile.goal")?;
        SlidingTile::new(initial, goal).context("Invalid sliding_tile instance")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnealSection {
    pub max_iterations: usize,
    pub initial_temperature: f64,
    pub seed: u64,
}

impl Default for AnnealSection {
    fn default() -> Self {
        Self {
            max_iterations: AnnealConfig::default().max_iterations,
            initial_temperature: InverseTime::default().initial,
            seed: 42,
        }
    }
}

impl AnnealSection {
    pub fn config(&self) -> AnnealConfig {
        AnnealConfig {
            max_iterations: self.max_iterations,
        }
    }

    pub fn schedule(&self) -> InverseTime {
        InverseTime {
            initial: self.initial_temperature,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VacuumSection {
    pub max_steps: usize,
    pub seed: u64,
}

impl Default for VacuumSection {
    fn default() -> Self {
        Self {
            max_steps: 10,
            seed: 42,
        }
    }
}

impl RunConfig {
    /// Load a run file from YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read run file {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse run file {}", path.display()))?;
        Ok(config)
    }

    /// Defaults when no path is given or the file does not exist.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if path.exists() => Self::load(path),
            Some(path) => {
                tracing::warn!(path = %path.display(), "Run file not found, using defaults");
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }
}

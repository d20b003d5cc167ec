//! Static guide content: tab and scenario identifiers plus the constant
//! tables in [`catalog`].
//!
//! Identifiers are closed enums. Strings only appear at the edges (CLI
//! arguments, config files) and are parsed with `FromStr`.

pub mod catalog;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GuideError;

/// One of the five mutually exclusive content panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    #[serde(alias = "intro")]
    Introduction,
    Symbolic,
    Concolic,
    Hoare,
    Tools,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Tab; 5] = [
        Tab::Introduction,
        Tab::Symbolic,
        Tab::Concolic,
        Tab::Hoare,
        Tab::Tools,
    ];

    /// Stable identifier (CLI / config form).
    pub fn id(self) -> &'static str {
        match self {
            Tab::Introduction => "introduction",
            Tab::Symbolic => "symbolic",
            Tab::Concolic => "concolic",
            Tab::Hoare => "hoare",
            Tab::Tools => "tools",
        }
    }

    /// Label shown in the tab bar.
    pub fn label(self) -> &'static str {
        match self {
            Tab::Introduction => "Introduction",
            Tab::Symbolic => "Exécution Symbolique",
            Tab::Concolic => "Exécution Concolique",
            Tab::Hoare => "Logique de Hoare",
            Tab::Tools => "Outils",
        }
    }

    /// Zero-based position in [`Tab::ALL`].
    pub fn index(self) -> usize {
        match self {
            Tab::Introduction => 0,
            Tab::Symbolic => 1,
            Tab::Concolic => 2,
            Tab::Hoare => 3,
            Tab::Tools => 4,
        }
    }

    /// Tab for a zero-based position, if in range.
    pub fn from_index(index: usize) -> Option<Tab> {
        Tab::ALL.get(index).copied()
    }

    /// Next tab, wrapping around.
    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    /// Previous tab, wrapping around.
    pub fn prev(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Tab {
    type Err = GuideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "introduction" | "intro" => Ok(Tab::Introduction),
            "symbolic" => Ok(Tab::Symbolic),
            "concolic" => Ok(Tab::Concolic),
            "hoare" => Ok(Tab::Hoare),
            "tools" => Ok(Tab::Tools),
            _ => Err(GuideError::UnknownTab(s.to_string())),
        }
    }
}

/// Proof scenario shown on the Hoare tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HoareScenario {
    Linear,
    Conditional,
    Loop,
}

impl HoareScenario {
    pub const ALL: [HoareScenario; 3] = [
        HoareScenario::Linear,
        HoareScenario::Conditional,
        HoareScenario::Loop,
    ];

    pub fn id(self) -> &'static str {
        match self {
            HoareScenario::Linear => "linear",
            HoareScenario::Conditional => "conditional",
            HoareScenario::Loop => "loop",
        }
    }

    /// Button title.
    pub fn title(self) -> &'static str {
        match self {
            HoareScenario::Linear => "1. Programme Linéaire (séquence)",
            HoareScenario::Conditional => "2. Programme avec Condition",
            HoareScenario::Loop => "3. Programme avec Boucle",
        }
    }

    /// Button subtitle.
    pub fn subtitle(self) -> &'static str {
        match self {
            HoareScenario::Linear => "Sans branchement ni boucle",
            HoareScenario::Conditional => "Instruction if-else",
            HoareScenario::Loop => "Nécessite un invariant de boucle",
        }
    }
}

impl fmt::Display for HoareScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for HoareScenario {
    type Err = GuideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(HoareScenario::Linear),
            "conditional" => Ok(HoareScenario::Conditional),
            "loop" => Ok(HoareScenario::Loop),
            _ => Err(GuideError::UnknownScenario(s.to_string())),
        }
    }
}

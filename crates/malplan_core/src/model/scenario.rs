//! The closed set of intervention scenarios
//!
//! Every scenario the simulation service can report on has a variant here.
//! Code that needs per-scenario behaviour matches exhaustively so adding a
//! scenario is a compile error everywhere it matters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StrategiseError;

/// Insecticide-treated net products that can be procured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItnType {
    /// Standard pyrethroid-only net
    PyOnly,
    /// Pyrethroid + piperonyl butoxide
    PyPbo,
    /// Pyrethroid + chlorfenapyr (pyrrole)
    PyPyrrole,
    /// Pyrethroid + pyriproxyfen
    PyPpf,
}

impl ItnType {
    pub const ALL: [ItnType; 4] = [
        ItnType::PyOnly,
        ItnType::PyPbo,
        ItnType::PyPyrrole,
        ItnType::PyPpf,
    ];
}

/// An intervention package evaluated over the three-year horizon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    NoIntervention,
    IrsOnly,
    LsmOnly,
    PyOnlyOnly,
    PyOnlyWithLsm,
    PyPboOnly,
    PyPboWithLsm,
    PyPyrroleOnly,
    PyPyrroleWithLsm,
    PyPpfOnly,
    PyPpfWithLsm,
}

impl Scenario {
    /// Every scenario, in declaration order
    pub const ALL: [Scenario; 11] = [
        Scenario::NoIntervention,
        Scenario::IrsOnly,
        Scenario::LsmOnly,
        Scenario::PyOnlyOnly,
        Scenario::PyOnlyWithLsm,
        Scenario::PyPboOnly,
        Scenario::PyPboWithLsm,
        Scenario::PyPyrroleOnly,
        Scenario::PyPyrroleWithLsm,
        Scenario::PyPpfOnly,
        Scenario::PyPpfWithLsm,
    ];

    /// Snake-case identifier as used by the simulation service
    #[must_use]
    pub fn id(&self) -> &'static str {
        match self {
            Self::NoIntervention => "no_intervention",
            Self::IrsOnly => "irs_only",
            Self::LsmOnly => "lsm_only",
            Self::PyOnlyOnly => "py_only_only",
            Self::PyOnlyWithLsm => "py_only_with_lsm",
            Self::PyPboOnly => "py_pbo_only",
            Self::PyPboWithLsm => "py_pbo_with_lsm",
            Self::PyPyrroleOnly => "py_pyrrole_only",
            Self::PyPyrroleWithLsm => "py_pyrrole_with_lsm",
            Self::PyPpfOnly => "py_ppf_only",
            Self::PyPpfWithLsm => "py_ppf_with_lsm",
        }
    }

    /// Human readable label for tables and charts
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::NoIntervention => "No Intervention",
            Self::IrsOnly => "IRS Only",
            Self::LsmOnly => "LSM Only",
            Self::PyOnlyOnly => "Pyrethroid ITN (Only)",
            Self::PyOnlyWithLsm => "Pyrethroid ITN (with LSM)",
            Self::PyPboOnly => "Pyrethroid-PBO (Only)",
            Self::PyPboWithLsm => "Pyrethroid-PBO (with LSM)",
            Self::PyPyrroleOnly => "Pyrethroid-Pyrrole (Only)",
            Self::PyPyrroleWithLsm => "Pyrethroid-Pyrrole (with LSM)",
            Self::PyPpfOnly => "Pyrethroid-PPF (Only)",
            Self::PyPpfWithLsm => "Pyrethroid-PPF (with LSM)",
        }
    }

    /// The bednet product in this package, if any
    #[must_use]
    pub fn itn_type(&self) -> Option<ItnType> {
        match self {
            Self::NoIntervention | Self::IrsOnly | Self::LsmOnly => None,
            Self::PyOnlyOnly | Self::PyOnlyWithLsm => Some(ItnType::PyOnly),
            Self::PyPboOnly | Self::PyPboWithLsm => Some(ItnType::PyPbo),
            Self::PyPyrroleOnly | Self::PyPyrroleWithLsm => Some(ItnType::PyPyrrole),
            Self::PyPpfOnly | Self::PyPpfWithLsm => Some(ItnType::PyPpf),
        }
    }

    /// Whether larval source management is part of the package
    #[must_use]
    pub fn includes_lsm(&self) -> bool {
        matches!(
            self,
            Self::LsmOnly
                | Self::PyOnlyWithLsm
                | Self::PyPboWithLsm
                | Self::PyPyrroleWithLsm
                | Self::PyPpfWithLsm
        )
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Scenario {
    type Err = StrategiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.id() == s)
            .ok_or_else(|| StrategiseError::UnknownScenario(s.to_string()))
    }
}

//! Species known to the gas-surface interaction model
//!
//! ethylene is the injected fuel (paraffin pyrolysis product), the rest are the
//! oxidiser and the combustion products of the reduced C2H4/O2 mixture. Molar masses
//! live with the coefficients in `NASA7table::ThermoTable`
use crate::Thermodynamics::NASA7table::ThermoError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Species {
    C2H4,
    O2,
    O,
    H2O,
    OH,
    CO2,
    CO,
    H2,
    H,
}

/// number of species in the mixture
pub const N_SPECIES: usize = 9;

impl Species {
    /// all species in table order
    pub const ALL: [Species; N_SPECIES] = [
        Species::C2H4,
        Species::O2,
        Species::O,
        Species::H2O,
        Species::OH,
        Species::CO2,
        Species::CO,
        Species::H2,
        Species::H,
    ];

    /// position of the species in the coefficient table
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Species::C2H4 => "C2H4",
            Species::O2 => "O2",
            Species::O => "O",
            Species::H2O => "H2O",
            Species::OH => "OH",
            Species::CO2 => "CO2",
            Species::CO => "CO",
            Species::H2 => "H2",
            Species::H => "H",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Species {
    type Err = ThermoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Species::ALL
            .iter()
            .copied()
            .find(|sp| sp.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ThermoError::UnknownSpecies(name.to_string()))
    }
}

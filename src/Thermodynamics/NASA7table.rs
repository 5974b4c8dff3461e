//! # NASA-7 coefficient table
//!
//! ## Purpose
//! Immutable store of the two-range NASA-7 fits (a1..a6, the entropy constant is not
//! needed by the model) for every species of the reduced C2H4/O2 mixture, plus the closed
//! form evaluators built on it.
//!
//! ## Range selection
//! `T < T_SPLIT` picks the low-temperature set, `T >= T_SPLIT` the high one. At exactly
//! 1000 K the high-temperature fit is used. The two fits agree at the split to better than
//! one part in 10^6 in enthalpy, so the choice only matters for bit-reproducibility.
//!
//! ## Domain
//! No bounds are enforced. The polynomial is evaluated as-is far outside its fit window and
//! `a6/T` diverges as T -> 0; such calls are computed anyway. Non-physical temperatures
//! (T <= 0 or non-finite) are logged at warn level, merely out-of-window ones at debug.
//!
//! ## Usage
//! ```rust
//! use HybridGSI::Thermodynamics::NASA7table::ThermoTable;
//! use HybridGSI::Thermodynamics::species::Species;
//! let table = ThermoTable::default();
//! let h = table.enthalpy(Species::C2H4, 750.0); // J/kg
//! assert!(h > 0.0);
//! ```
use crate::Thermodynamics::species::{N_SPECIES, Species};
use log::{debug, info, warn};
use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// universal gas constant, J/(mol K)
pub const R_UNIV: f64 = 8.314462618;
/// boundary between the low- and high-temperature fits, K
pub const T_SPLIT: f64 = 1000.0;
/// nominal validity window of the fits, K. Only used for logging
pub const T_FIT_MIN: f64 = 200.0;
pub const T_FIT_MAX: f64 = 6000.0;

pub type NASA7Coeffs = [f64; 6];

#[derive(Debug, Error)]
pub enum ThermoError {
    #[error("Unknown species: {0}")]
    UnknownSpecies(String),
    #[error("No coefficients found for species {0}")]
    MissingSpecies(Species),
    #[error("Species {0} appears more than once in the coefficient table")]
    DuplicateSpecies(Species),
    #[error("Invalid molar mass {value} kg/mol for species {species}")]
    InvalidMolarMass { species: Species, value: f64 },
    #[error("Failed to deserialize NASA data: {0}")]
    SerdeError(#[from] serde_json::Error),
    #[error("Failed to read coefficient table: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempRange {
    Low,
    High,
}

impl TempRange {
    pub fn for_temperature(t: f64) -> Self {
        if t < T_SPLIT {
            TempRange::Low
        } else {
            TempRange::High
        }
    }
}

/// molar heat capacity, J/(mol K)
#[allow(non_snake_case)]
pub fn Cp(t: f64, a: &NASA7Coeffs) -> f64 {
    R_UNIV * (a[0] + a[1] * t + a[2] * t.powi(2) + a[3] * t.powi(3) + a[4] * t.powi(4))
}

/// molar enthalpy, J/mol
pub fn dh(t: f64, a: &NASA7Coeffs) -> f64 {
    R_UNIV
        * t
        * (a[0]
            + a[1] * t / 2.0
            + a[2] * t.powi(2) / 3.0
            + a[3] * t.powi(3) / 4.0
            + a[4] * t.powi(4) / 5.0
            + a[5] / t)
}

/// one species record of the table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeciesThermo {
    pub species: Species,
    /// kg/mol
    pub molar_mass: f64,
    /// fit for T < T_SPLIT
    pub low: NASA7Coeffs,
    /// fit for T >= T_SPLIT
    pub high: NASA7Coeffs,
}

impl SpeciesThermo {
    pub fn coeffs(&self, range: TempRange) -> &NASA7Coeffs {
        match range {
            TempRange::Low => &self.low,
            TempRange::High => &self.high,
        }
    }
}

const BUILTIN: [SpeciesThermo; N_SPECIES] = [
    SpeciesThermo {
        species: Species::C2H4,
        molar_mass: 0.02805418,
        low: [-8.614880e-01, 2.796162e-02, -3.388677e-05, 2.785152e-08, -9.737879e-12, 5.573046e+03],
        high: [3.528418e+00, 1.148519e-02, -4.418385e-06, 7.844600e-10, -5.266848e-14, 4.428288e+03],
    },
    SpeciesThermo {
        species: Species::O2,
        molar_mass: 0.0319988,
        low: [3.212936e+00, 1.127486e-03, -5.756150e-07, 1.313877e-09, -8.768554e-13, -1.005249e+03],
        high: [3.697578e+00, 6.135197e-04, -1.258842e-07, 1.775281e-11, -1.136435e-15, -1.233930e+03],
    },
    SpeciesThermo {
        species: Species::O,
        molar_mass: 0.0159994,
        low: [2.946428e+00, -1.638167e-03, 2.421031e-06, -1.602843e-09, 3.890696e-13, 2.914764e+04],
        high: [2.542059e+00, -2.755061e-05, -3.102803e-09, 4.551067e-12, -4.368051e-16, 2.923080e+04],
    },
    SpeciesThermo {
        species: Species::H2O,
        molar_mass: 0.01801534,
        low: [3.262451e+00, 1.511941e-03, -3.881755e-06, 5.581944e-09, -2.474951e-12, -1.431054e+04],
        high: [3.025078e+00, 1.442689e-03, -5.630827e-07, 1.018581e-10, -6.910951e-15, -1.426835e+04],
    },
    SpeciesThermo {
        species: Species::OH,
        molar_mass: 0.01700737,
        low: [2.275724e+00, 9.922072e-03, -1.040911e-05, 6.866686e-09, -2.117280e-12, -4.837314e+04],
        high: [4.453623e+00, 3.140168e-03, -1.278411e-06, 2.393996e-10, -1.669033e-14, -4.896696e+04],
    },
    SpeciesThermo {
        species: Species::CO2,
        molar_mass: 0.04400995,
        low: [3.637266e+00, 1.850910e-04, -1.676165e-06, 2.387202e-09, -8.431442e-13, 3.606781e+03],
        high: [2.882730e+00, 1.013974e-03, -2.276877e-07, 2.174683e-11, -5.126305e-16, 3.886888e+03],
    },
    SpeciesThermo {
        species: Species::CO,
        molar_mass: 0.02801055,
        low: [3.386842e+00, 3.474982e-03, -6.354696e-06, 6.968581e-09, -2.506588e-12, -3.020811e+04],
        high: [2.672145e+00, 3.056293e-03, -8.730260e-07, 1.200996e-10, -6.391618e-15, -2.989921e+04],
    },
    SpeciesThermo {
        species: Species::H2,
        molar_mass: 0.00201594,
        low: [3.298124e+00, 8.249441e-04, -8.143015e-07, -9.475434e-11, 4.134872e-13, -1.012521e+03],
        high: [2.991423e+00, 7.000644e-04, -5.633828e-08, -9.231578e-12, 1.582752e-15, -8.350340e+02],
    },
    SpeciesThermo {
        species: Species::H,
        molar_mass: 0.00100797,
        low: [2.500000e+00, 0.0, 0.0, 0.0, 0.0, 2.547162e+04],
        high: [2.500000e+00, 0.0, 0.0, 0.0, 0.0, 2.547162e+04],
    },
];

/// Per-species NASA-7 coefficients and molar masses.
///
/// Never mutated after construction, so one instance can be shared by reference between
/// any number of concurrent source-term evaluations.
#[derive(Debug, Clone, PartialEq)]
pub struct ThermoTable {
    records: [SpeciesThermo; N_SPECIES],
}

impl Default for ThermoTable {
    fn default() -> Self {
        Self { records: BUILTIN }
    }
}

impl ThermoTable {
    /// build a table from an unordered list of records; every species must appear once
    pub fn from_records(records: Vec<SpeciesThermo>) -> Result<Self, ThermoError> {
        let mut slots: [Option<SpeciesThermo>; N_SPECIES] = [None; N_SPECIES];
        for rec in records {
            if !(rec.molar_mass.is_finite() && rec.molar_mass > 0.0) {
                return Err(ThermoError::InvalidMolarMass {
                    species: rec.species,
                    value: rec.molar_mass,
                });
            }
            let slot = &mut slots[rec.species.index()];
            if slot.is_some() {
                return Err(ThermoError::DuplicateSpecies(rec.species));
            }
            *slot = Some(rec);
        }
        let mut table = BUILTIN;
        for sp in Species::ALL {
            table[sp.index()] = slots[sp.index()].ok_or(ThermoError::MissingSpecies(sp))?;
        }
        Ok(Self { records: table })
    }

    /// parse a JSON array of `SpeciesThermo` records
    pub fn from_json_str(json: &str) -> Result<Self, ThermoError> {
        let records: Vec<SpeciesThermo> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ThermoError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let table = Self::from_json_str(&content)?;
        info!("NASA-7 table loaded from '{}'", path.display());
        Ok(table)
    }

    pub fn to_json_string(&self) -> Result<String, ThermoError> {
        Ok(serde_json::to_string_pretty(&self.records.to_vec())?)
    }

    pub fn record(&self, species: Species) -> &SpeciesThermo {
        &self.records[species.index()]
    }

    /// kg/mol
    pub fn molar_mass(&self, species: Species) -> f64 {
        self.record(species).molar_mass
    }

    /// coefficient set used at temperature `t`
    pub fn coeffs(&self, species: Species, t: f64) -> &NASA7Coeffs {
        self.record(species).coeffs(TempRange::for_temperature(t))
    }

    /// molar enthalpy, J/mol
    pub fn molar_enthalpy(&self, species: Species, t: f64) -> f64 {
        check_temperature(species, t);
        dh(t, self.coeffs(species, t))
    }

    /// mass-specific enthalpy, J/kg
    pub fn enthalpy(&self, species: Species, t: f64) -> f64 {
        self.molar_enthalpy(species, t) / self.molar_mass(species)
    }

    /// mass-specific heat capacity, J/(kg K)
    #[allow(non_snake_case)]
    pub fn Cp(&self, species: Species, t: f64) -> f64 {
        check_temperature(species, t);
        Cp(t, self.coeffs(species, t)) / self.molar_mass(species)
    }

    /// mass-weighted enthalpy of a mixture, J/kg. Fractions are used as given, not normalised
    pub fn mixture_enthalpy(&self, mass_fractions: &[(Species, f64)], t: f64) -> f64 {
        mass_fractions
            .iter()
            .map(|(sp, y)| y * self.enthalpy(*sp, t))
            .sum()
    }

    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(Row::new(
            ["species", "range", "M, kg/mol", "a1", "a2", "a3", "a4", "a5", "a6"]
                .iter()
                .map(|h| Cell::new(h))
                .collect(),
        ));
        for rec in self.records.iter() {
            for (label, coeffs) in [("T < 1000 K", &rec.low), ("T >= 1000 K", &rec.high)] {
                let mut cells = vec![
                    Cell::new(rec.species.as_str()),
                    Cell::new(label),
                    Cell::new(&format!("{:.6}", rec.molar_mass)),
                ];
                cells.extend(coeffs.iter().map(|a| Cell::new(&format!("{:.6e}", a))));
                table.add_row(Row::new(cells));
            }
        }
        table
    }

    pub fn pretty_print_data(&self) {
        self.to_table().printstd();
    }
}

/// true inside the nominal validity window of the fits
pub fn in_fit_window(t: f64) -> bool {
    (T_FIT_MIN..=T_FIT_MAX).contains(&t)
}

fn check_temperature(species: Species, t: f64) {
    if !(t.is_finite() && t > 0.0) {
        warn!(
            "NASA-7 evaluation for {} at non-physical temperature {} K",
            species, t
        );
    } else if !in_fit_window(t) {
        debug!(
            "NASA-7 evaluation for {} at {} K is outside the fit window {}-{} K",
            species, t, T_FIT_MIN, T_FIT_MAX
        );
    }
}

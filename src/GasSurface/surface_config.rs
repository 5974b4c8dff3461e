//! # Surface configuration
//!
//! Everything the host used to hard-code: which boundary zone is the regressing fuel grain,
//! the solid material constants, the injected species and the per-cell storage slots used
//! for diagnostic export. Defaults describe a paraffin grain pyrolysing into ethylene.
//!
//! ```json
//! {
//!   "surface_zone_id": 9,
//!   "solid_density": 870.0,
//!   "regression_rate": 0.002,
//!   "injection_scale": 0.1,
//!   "fuel": "C2H4",
//!   "regression_law": "Fixed",
//!   "slots": { "mass_flux": 0, "heat_flux": 1, "regression": 2, "velocity": 3 }
//! }
//! ```
use crate::GasSurface::diagnostics::MAX_DIAGNOSTIC_SLOT;
use crate::Thermodynamics::species::Species;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// paraffin wall zone
pub const PARAFFIN_WALL_ID: i32 = 9;
/// kg/m^3
pub const PARAFFIN_RHO: f64 = 870.0;
/// m/s
pub const PARAFFIN_RDOT: f64 = 2e-3;
/// J/kg, paraffin at 340 K to ethylene at 750 K
pub const ETHYLENE_DELTA_H: f64 = 4.6902e6;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be positive and finite, got {value}")]
    NonPositive { name: &'static str, value: f64 },
    #[error("diagnostic slot {0} is assigned to more than one quantity")]
    DuplicateSlot(usize),
    #[error("diagnostic slot {slot} exceeds the largest supported slot {max}")]
    SlotOutOfRange { slot: usize, max: usize },
    #[error("Failed to deserialize surface configuration: {0}")]
    SerdeError(#[from] serde_json::Error),
    #[error("Failed to read surface configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// How the injected mass flux is obtained
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum RegressionLaw {
    /// imposed regression rate: rho_s * rdot * scale * A / V
    #[default]
    Fixed,
    /// wall heat absorbed by the grain divided by the solid-to-gas enthalpy jump.
    /// Heat entering the solid is negative in the host convention
    HeatFluxDriven { vaporisation_enthalpy: f64 },
}

/// indices of the per-cell storage slots receiving diagnostic values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticSlots {
    /// injected mass flow per unit area, kg/(m^2 s)
    pub mass_flux: usize,
    /// wall heat flux per unit area, W/m^2
    pub heat_flux: usize,
    /// regression rate, m/s
    pub regression: usize,
    /// injection velocity, m/s
    pub velocity: usize,
}

impl Default for DiagnosticSlots {
    fn default() -> Self {
        Self {
            mass_flux: 0,
            heat_flux: 1,
            regression: 2,
            velocity: 3,
        }
    }
}

impl DiagnosticSlots {
    pub fn as_array(&self) -> [usize; 4] {
        [self.mass_flux, self.heat_flux, self.regression, self.velocity]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// boundary zone identifier of the regressing surface
    pub surface_zone_id: i32,
    /// solid fuel density, kg/m^3
    pub solid_density: f64,
    /// imposed regression rate, m/s
    pub regression_rate: f64,
    /// tuning factor applied to the imposed regression rate
    pub injection_scale: f64,
    /// gaseous species injected by the surface
    pub fuel: Species,
    pub regression_law: RegressionLaw,
    pub slots: DiagnosticSlots,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            surface_zone_id: PARAFFIN_WALL_ID,
            solid_density: PARAFFIN_RHO,
            regression_rate: PARAFFIN_RDOT,
            injection_scale: 0.1,
            fuel: Species::C2H4,
            regression_law: RegressionLaw::Fixed,
            slots: DiagnosticSlots::default(),
        }
    }
}

impl SurfaceConfig {
    pub fn new(surface_zone_id: i32) -> Self {
        Self {
            surface_zone_id,
            ..Self::default()
        }
    }

    pub fn with_solid(mut self, density: f64, regression_rate: f64, scale: f64) -> Self {
        self.solid_density = density;
        self.regression_rate = regression_rate;
        self.injection_scale = scale;
        self
    }

    pub fn with_regression_law(mut self, law: RegressionLaw) -> Self {
        self.regression_law = law;
        self
    }

    pub fn with_slots(mut self, slots: DiagnosticSlots) -> Self {
        self.slots = slots;
        self
    }

    /// regression rate actually imposed at the wall, m/s
    pub fn effective_regression_rate(&self) -> f64 {
        self.regression_rate * self.injection_scale
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut checks = vec![
            ("solid_density", self.solid_density),
            ("regression_rate", self.regression_rate),
            ("injection_scale", self.injection_scale),
        ];
        if let RegressionLaw::HeatFluxDriven {
            vaporisation_enthalpy,
        } = self.regression_law
        {
            checks.push(("vaporisation_enthalpy", vaporisation_enthalpy));
        }
        for (name, value) in checks {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        let slots = self.slots.as_array();
        if let Some(slot) = slots.iter().find(|s| **s > MAX_DIAGNOSTIC_SLOT) {
            return Err(ConfigError::SlotOutOfRange {
                slot: *slot,
                max: MAX_DIAGNOSTIC_SLOT,
            });
        }
        for (i, slot) in slots.iter().enumerate() {
            if slots[i + 1..].contains(slot) {
                return Err(ConfigError::DuplicateSlot(*slot));
            }
        }
        Ok(())
    }

    /// parse and validate; missing keys fall back to the paraffin defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SurfaceConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;
        info!(
            "surface configuration loaded from '{}': zone {}, fuel {}",
            path.display(),
            config.surface_zone_id,
            config.fuel
        );
        Ok(config)
    }
}

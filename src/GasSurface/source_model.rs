//! # Surface source model
//!
//! ## Purpose
//! Turns the wall state seen by one boundary-adjacent cell into explicit volumetric sources
//! for the mass, momentum and energy equations of the flow solver.
//!
//! ## Main quantities
//! For a cell of volume V touching the grain through a face of area A:
//! - `mdot = rho_s * rdot * scale * A / V`, kg/(m^3 s) (fixed regression law)
//! - `rho_w = P * M_fuel / (R * T_w)`, ideal-gas density of the fuel at the wall
//! - `regression = mdot * V / (A * rho_s)`, recovers `rdot * scale`
//! - `vel = mdot * V / (A * rho_w)`, injection velocity magnitude
//!
//! and the sources
//! - mass: `mdot`
//! - momentum along axis i: `-mdot * vel * n_i`, `n_i = A_i / A`
//! - energy: `mdot * (h_fuel(T_w) + vel^2 / 2)`
//!
//! Every source is fully explicit, the implicit coefficient handed back is always zero.
//! A cell without a face on the regressing zone yields zero for every source and writes
//! no diagnostics.
//!
//! ## Heat flux
//! The wall heat flux is read and exported but does not drive the fixed law. Only
//! `RegressionLaw::HeatFluxDriven` couples injection to the wall heat flux.
use crate::GasSurface::diagnostics::DiagnosticSink;
use crate::GasSurface::face_state::{BoundaryFaceState, CellState, extract_face_state};
use crate::GasSurface::surface_config::{ConfigError, RegressionLaw, SurfaceConfig};
use crate::Thermodynamics::NASA7table::{R_UNIV, ThermoTable};
use log::{debug, warn};
use nalgebra::Vector3;
use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// governing equation a source belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceKind {
    Mass,
    Momentum(Axis),
    Energy,
}

/// one volumetric source with its linearisation coefficient dS/dphi
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceTerm {
    pub kind: SourceKind,
    pub value: f64,
    pub implicit_coeff: f64,
}

impl SourceTerm {
    pub fn explicit(kind: SourceKind, value: f64) -> Self {
        Self {
            kind,
            value,
            implicit_coeff: 0.0,
        }
    }

    pub fn zero(kind: SourceKind) -> Self {
        Self::explicit(kind, 0.0)
    }
}

/// Injection quantities derived from the wall state of one cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceInjectionState {
    pub face: BoundaryFaceState,
    /// volumetric mass source, kg/(m^3 s)
    pub mdot: f64,
    /// fuel density at the wall, kg/m^3
    pub wall_density: f64,
    /// m/s
    pub regression: f64,
    /// m/s
    pub velocity: f64,
}

impl SurfaceInjectionState {
    /// injected mass flow per unit wall area, kg/(m^2 s)
    pub fn mass_flux(&self) -> f64 {
        self.mdot * self.face.volume / self.face.area
    }

    pub fn mass_source(&self) -> f64 {
        self.mdot
    }

    pub fn momentum_source(&self, axis: Axis) -> f64 {
        let n_i = self.face.area_vector[axis.index()] / self.face.area;
        -self.mdot * self.velocity * n_i
    }

    /// injected kinetic energy per unit mass, J/kg
    pub fn kinetic_energy(&self) -> f64 {
        self.velocity * self.velocity / 2.0
    }
}

/// every source of one cell from a single extraction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSources {
    pub mass: f64,
    pub momentum: Vector3<f64>,
    pub energy: f64,
    pub injection: Option<SurfaceInjectionState>,
}

impl CellSources {
    pub fn zero() -> Self {
        Self {
            mass: 0.0,
            momentum: Vector3::zeros(),
            energy: 0.0,
            injection: None,
        }
    }

    pub fn get(&self, kind: SourceKind) -> SourceTerm {
        let value = match kind {
            SourceKind::Mass => self.mass,
            SourceKind::Momentum(axis) => self.momentum[axis.index()],
            SourceKind::Energy => self.energy,
        };
        SourceTerm::explicit(kind, value)
    }

    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(Row::new(vec![Cell::new("quantity"), Cell::new("value")]));
        let mut rows = vec![
            ("S_mass, kg/(m3 s)", self.mass),
            ("S_mom_x, N/m3", self.momentum.x),
            ("S_mom_y, N/m3", self.momentum.y),
            ("S_mom_z, N/m3", self.momentum.z),
            ("S_energy, W/m3", self.energy),
        ];
        if let Some(inj) = &self.injection {
            rows.extend([
                ("mass flux, kg/(m2 s)", inj.mass_flux()),
                ("wall density, kg/m3", inj.wall_density),
                ("regression rate, m/s", inj.regression),
                ("injection velocity, m/s", inj.velocity),
            ]);
        }
        for (name, value) in rows {
            table.add_row(Row::new(vec![
                Cell::new(name),
                Cell::new(&format!("{:.6e}", value)),
            ]));
        }
        table
    }

    pub fn pretty_print_data(&self) {
        self.to_table().printstd();
    }
}

/// Stateless source-term evaluator for the cells adjacent to a regressing fuel grain
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceSourceModel {
    config: SurfaceConfig,
    thermo: ThermoTable,
}

impl Default for SurfaceSourceModel {
    fn default() -> Self {
        Self {
            config: SurfaceConfig::default(),
            thermo: ThermoTable::default(),
        }
    }
}

impl SurfaceSourceModel {
    pub fn new(config: SurfaceConfig, thermo: ThermoTable) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, thermo })
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    pub fn thermo(&self) -> &ThermoTable {
        &self.thermo
    }

    /// regressing face of `cell`, if any
    pub fn face_state(&self, cell: &CellState) -> Option<BoundaryFaceState> {
        extract_face_state(self.config.surface_zone_id, cell)
    }

    /// volumetric mass source for a cell touching the grain, kg/(m^3 s)
    pub fn mass_flow(&self, face: &BoundaryFaceState) -> f64 {
        match self.config.regression_law {
            RegressionLaw::Fixed => {
                self.config.solid_density * self.config.effective_regression_rate() * face.area
                    / face.volume
            }
            RegressionLaw::HeatFluxDriven {
                vaporisation_enthalpy,
            } => (-face.heat_flux).max(0.0) / (vaporisation_enthalpy * face.volume),
        }
    }

    /// ideal-gas density of the injected species at wall temperature, kg/m^3
    ///
    /// The host state is trusted: a non-positive pressure or wall temperature is only
    /// logged. The density is then zero, negative or infinite, and the injection velocity,
    /// momentum and energy sources built on it are non-finite or of the wrong sign. The mass
    /// source does not depend on it and stays valid.
    pub fn wall_density(&self, face: &BoundaryFaceState) -> f64 {
        let t = face.wall_temperature;
        if !(t > 0.0 && face.pressure > 0.0) {
            warn!(
                "wall state T = {} K, P = {} Pa gives a non-physical fuel density",
                t, face.pressure
            );
        }
        face.pressure * self.thermo.molar_mass(self.config.fuel) / (R_UNIV * t)
    }

    pub fn injection_state(&self, face: &BoundaryFaceState) -> SurfaceInjectionState {
        let mdot = self.mass_flow(face);
        let wall_density = self.wall_density(face);
        let per_area = mdot * face.volume / face.area;
        SurfaceInjectionState {
            face: *face,
            mdot,
            wall_density,
            regression: per_area / self.config.solid_density,
            velocity: per_area / wall_density,
        }
    }

    /// extraction plus derived quantities, `None` for cells away from the grain
    pub fn injection(&self, cell: &CellState) -> Option<SurfaceInjectionState> {
        self.face_state(cell).map(|face| self.injection_state(&face))
    }

    /// stagnation enthalpy flux added by injection, W/m^3
    pub fn energy_from_state(&self, inj: &SurfaceInjectionState) -> f64 {
        let h = self
            .thermo
            .enthalpy(self.config.fuel, inj.face.wall_temperature);
        inj.mdot * (h + inj.kinetic_energy())
    }

    pub fn mass_source(&self, cell: &CellState, sink: &mut dyn DiagnosticSink) -> SourceTerm {
        let Some(inj) = self.injection(cell) else {
            return SourceTerm::zero(SourceKind::Mass);
        };
        let slots = &self.config.slots;
        sink.write(cell.cell, slots.mass_flux, inj.mass_flux());
        sink.write(cell.cell, slots.heat_flux, inj.face.heat_flux_per_area());
        SourceTerm::explicit(SourceKind::Mass, inj.mass_source())
    }

    pub fn momentum_source(
        &self,
        cell: &CellState,
        axis: Axis,
        sink: &mut dyn DiagnosticSink,
    ) -> SourceTerm {
        let kind = SourceKind::Momentum(axis);
        let Some(inj) = self.injection(cell) else {
            return SourceTerm::zero(kind);
        };
        let slots = &self.config.slots;
        sink.write(cell.cell, slots.regression, inj.regression);
        sink.write(cell.cell, slots.velocity, inj.velocity);
        SourceTerm::explicit(kind, inj.momentum_source(axis))
    }

    pub fn energy_source(&self, cell: &CellState, _sink: &mut dyn DiagnosticSink) -> SourceTerm {
        match self.injection(cell) {
            Some(inj) => SourceTerm::explicit(SourceKind::Energy, self.energy_from_state(&inj)),
            None => SourceTerm::zero(SourceKind::Energy),
        }
    }

    pub fn evaluate(
        &self,
        kind: SourceKind,
        cell: &CellState,
        sink: &mut dyn DiagnosticSink,
    ) -> SourceTerm {
        match kind {
            SourceKind::Mass => self.mass_source(cell, sink),
            SourceKind::Momentum(axis) => self.momentum_source(cell, axis, sink),
            SourceKind::Energy => self.energy_source(cell, sink),
        }
    }

    /// all sources of a cell at once; writes all four diagnostic slots when the cell
    /// touches the grain
    pub fn evaluate_all(&self, cell: &CellState, sink: &mut dyn DiagnosticSink) -> CellSources {
        let Some(inj) = self.injection(cell) else {
            return CellSources::zero();
        };
        let slots = &self.config.slots;
        sink.write(cell.cell, slots.mass_flux, inj.mass_flux());
        sink.write(cell.cell, slots.heat_flux, inj.face.heat_flux_per_area());
        sink.write(cell.cell, slots.regression, inj.regression);
        sink.write(cell.cell, slots.velocity, inj.velocity);
        let momentum = Vector3::new(
            inj.momentum_source(Axis::X),
            inj.momentum_source(Axis::Y),
            inj.momentum_source(Axis::Z),
        );
        let sources = CellSources {
            mass: inj.mass_source(),
            momentum,
            energy: self.energy_from_state(&inj),
            injection: Some(inj),
        };
        debug!(
            "cell {}: mdot = {:e}, vel = {:e}, S_e = {:e}",
            cell.cell, sources.mass, inj.velocity, sources.energy
        );
        sources
    }
}

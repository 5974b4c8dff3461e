//! Demonstration tasks on a synthetic host: a flat duct strip whose lower wall is the fuel
//! grain.
use crate::GasSurface::diagnostics::DiagnosticStore;
use crate::GasSurface::face_state::{BoundaryFace, CellState};
use crate::GasSurface::source_model::{CellSources, SurfaceSourceModel};
use crate::GasSurface::source_terms::{duct_sources, evaluate_sources};
use crate::GasSurface::surface_config::{ETHYLENE_DELTA_H, RegressionLaw, SurfaceConfig};
use crate::Thermodynamics::NASA7table::ThermoTable;
use crate::Thermodynamics::species::Species;
use crate::Utils::pressure_report::{REPORT_FILE, write_max_pressure_report};
use log::{error, info};
use nalgebra::Vector3;

pub const INTERIOR_ZONE: i32 = 1;
pub const TOP_WALL_ZONE: i32 = 3;
pub const INLET_ZONE: i32 = 5;
pub const OUTLET_ZONE: i32 = 6;
pub const SIDE_ZONE: i32 = 7;

/// `nx` by `ny` cells of size dx * dy * dz; row j = 0 sits on the grain
#[derive(Debug, Clone)]
pub struct SyntheticDuct {
    pub nx: usize,
    pub ny: usize,
    pub dx: f64,
    pub dy: f64,
    pub dz: f64,
    pub grain_zone: i32,
    /// K
    pub wall_temperature: f64,
    /// heat flux into the grain, W/m^2 (negative: absorbed by the solid)
    pub wall_heat_flux: f64,
    /// Pa at the inlet and at the outlet, linear in between
    pub p_inlet: f64,
    pub p_outlet: f64,
}

impl Default for SyntheticDuct {
    fn default() -> Self {
        Self {
            nx: 20,
            ny: 5,
            dx: 1e-2,
            dy: 1e-4,
            dz: 1e-3,
            grain_zone: 9,
            wall_temperature: 750.0,
            wall_heat_flux: -1.0e6,
            p_inlet: 25.2e5,
            p_outlet: 24.8e5,
        }
    }
}

impl SyntheticDuct {
    pub fn n_cells(&self) -> usize {
        self.nx * self.ny
    }

    pub fn cell_index(&self, i: usize, j: usize) -> usize {
        j * self.nx + i
    }

    pub fn volume(&self) -> f64 {
        self.dx * self.dy * self.dz
    }

    pub fn pressure(&self, i: usize) -> f64 {
        let s = (i as f64 + 0.5) / self.nx as f64;
        self.p_inlet + (self.p_outlet - self.p_inlet) * s
    }

    /// grain area wetted by the strip, m^2
    pub fn grain_area(&self) -> f64 {
        self.nx as f64 * self.dx * self.dz
    }

    pub fn faces(&self, i: usize, j: usize) -> Vec<BoundaryFace> {
        let ax = self.dy * self.dz;
        let ay = self.dx * self.dz;
        let az = self.dx * self.dy;
        let west = if i == 0 { INLET_ZONE } else { INTERIOR_ZONE };
        let east = if i + 1 == self.nx { OUTLET_ZONE } else { INTERIOR_ZONE };
        let top = if j + 1 == self.ny { TOP_WALL_ZONE } else { INTERIOR_ZONE };
        let mut faces = vec![
            BoundaryFace::new(west, Vector3::new(-ax, 0.0, 0.0), 0.0, 0.0),
            BoundaryFace::new(east, Vector3::new(ax, 0.0, 0.0), 0.0, 0.0),
            BoundaryFace::new(top, Vector3::new(0.0, ay, 0.0), 0.0, 0.0),
            BoundaryFace::new(SIDE_ZONE, Vector3::new(0.0, 0.0, -az), 0.0, 0.0),
            BoundaryFace::new(SIDE_ZONE, Vector3::new(0.0, 0.0, az), 0.0, 0.0),
        ];
        let bottom = if j == 0 {
            BoundaryFace::new(
                self.grain_zone,
                Vector3::new(0.0, -ay, 0.0),
                self.wall_heat_flux * ay,
                self.wall_temperature,
            )
        } else {
            BoundaryFace::new(INTERIOR_ZONE, Vector3::new(0.0, -ay, 0.0), 0.0, 0.0)
        };
        faces.push(bottom);
        faces
    }

    /// every cell's sources, in cell-index order
    pub fn evaluate(&self, model: &SurfaceSourceModel, store: &mut DiagnosticStore) -> Vec<CellSources> {
        let volume = self.volume();
        let mut out = Vec::with_capacity(self.n_cells());
        for j in 0..self.ny {
            for i in 0..self.nx {
                let faces = self.faces(i, j);
                let cell = CellState::new(self.cell_index(i, j), volume, self.pressure(i), &faces);
                out.push(model.evaluate_all(&cell, store));
            }
        }
        out
    }

    /// total injected mass flow, kg/s
    pub fn injected_mass(&self, sources: &[CellSources]) -> f64 {
        sources.iter().map(|s| s.mass).sum::<f64>() * self.volume()
    }
}

fn fuel_enthalpy_sweep(table: &ThermoTable) {
    table.pretty_print_data();
    for t in [300.0, 500.0, 750.0, 999.0, 1000.0, 1500.0, 2500.0] {
        info!(
            "h_C2H4({} K) = {:.4e} J/kg, Cp = {:.1} J/(kg K)",
            t,
            table.enthalpy(Species::C2H4, t),
            table.Cp(Species::C2H4, t)
        );
    }
    let products = [(Species::CO2, 0.45), (Species::H2O, 0.25), (Species::CO, 0.3)];
    info!(
        "products mixture at 3000 K: h = {:.4e} J/kg",
        table.mixture_enthalpy(&products, 3000.0)
    );
}

fn duct_run(model: &SurfaceSourceModel, duct: &SyntheticDuct) {
    let mut store = DiagnosticStore::new();
    let sources = duct.evaluate(model, &mut store);
    let config = model.config();
    info!(
        "injected {:.4e} kg/s over {:.3e} m^2 of grain (imposed {:.4e} kg/s)",
        duct.injected_mass(&sources),
        duct.grain_area(),
        config.solid_density * config.effective_regression_rate() * duct.grain_area()
    );
    if let Some(first) = sources.first() {
        first.pretty_print_data();
    }

    // the per-equation path gives the same numbers
    let faces = duct.faces(0, 0);
    let cell = CellState::new(0, duct.volume(), duct.pressure(0), &faces);
    for term in evaluate_sources(&duct_sources(), model, &cell, &mut store) {
        info!("{:?}: {:.4e}", term.kind, term.value);
    }

    let pressures = (0..duct.ny).flat_map(move |_| (0..duct.nx).map(move |i| duct.pressure(i)));
    match write_max_pressure_report(REPORT_FILE, pressures) {
        Ok(Some(p)) => info!("pmax = {} bar", p),
        Ok(None) => info!("non-positive maximum pressure, no report written"),
        Err(e) => error!("{}", e),
    }
}

pub fn gsi_examples(task: usize) {
    match task {
        0 => fuel_enthalpy_sweep(&ThermoTable::default()),
        1 => duct_run(&SurfaceSourceModel::default(), &SyntheticDuct::default()),
        2 => {
            let config = SurfaceConfig::default().with_regression_law(RegressionLaw::HeatFluxDriven {
                vaporisation_enthalpy: ETHYLENE_DELTA_H,
            });
            match SurfaceSourceModel::new(config, ThermoTable::default()) {
                Ok(model) => duct_run(&model, &SyntheticDuct::default()),
                Err(e) => error!("{}", e),
            }
        }
        _ => error!("unknown example task {}", task),
    }
}

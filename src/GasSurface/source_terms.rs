//! One evaluator per governing equation, registered by the host for the equations it
//! solves. Dispatch goes through an enum so the set can be stored in a plain `Vec`.
use crate::GasSurface::diagnostics::DiagnosticSink;
use crate::GasSurface::face_state::CellState;
use crate::GasSurface::source_model::{Axis, SourceKind, SourceTerm, SurfaceSourceModel};
use enum_dispatch::enum_dispatch;

#[enum_dispatch]
pub trait SourceEvaluator {
    fn kind(&self) -> SourceKind;
    fn evaluate(
        &self,
        model: &SurfaceSourceModel,
        cell: &CellState,
        sink: &mut dyn DiagnosticSink,
    ) -> SourceTerm;
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MassSource;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentumSource {
    pub axis: Axis,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EnergySource;

impl SourceEvaluator for MassSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Mass
    }
    fn evaluate(
        &self,
        model: &SurfaceSourceModel,
        cell: &CellState,
        sink: &mut dyn DiagnosticSink,
    ) -> SourceTerm {
        model.mass_source(cell, sink)
    }
}

impl SourceEvaluator for MomentumSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Momentum(self.axis)
    }
    fn evaluate(
        &self,
        model: &SurfaceSourceModel,
        cell: &CellState,
        sink: &mut dyn DiagnosticSink,
    ) -> SourceTerm {
        model.momentum_source(cell, self.axis, sink)
    }
}

impl SourceEvaluator for EnergySource {
    fn kind(&self) -> SourceKind {
        SourceKind::Energy
    }
    fn evaluate(
        &self,
        model: &SurfaceSourceModel,
        cell: &CellState,
        sink: &mut dyn DiagnosticSink,
    ) -> SourceTerm {
        model.energy_source(cell, sink)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[enum_dispatch(SourceEvaluator)]
pub enum SourceTermEnum {
    Mass(MassSource),
    Momentum(MomentumSource),
    Energy(EnergySource),
}

pub fn create_source(kind: SourceKind) -> SourceTermEnum {
    match kind {
        SourceKind::Mass => SourceTermEnum::Mass(MassSource),
        SourceKind::Momentum(axis) => SourceTermEnum::Momentum(MomentumSource { axis }),
        SourceKind::Energy => SourceTermEnum::Energy(EnergySource),
    }
}

/// Sources of a grain lying in the x direction: mass, in-plane momentum (y, z) and energy
pub fn duct_sources() -> Vec<SourceTermEnum> {
    vec![
        create_source(SourceKind::Mass),
        create_source(SourceKind::Momentum(Axis::Y)),
        create_source(SourceKind::Momentum(Axis::Z)),
        create_source(SourceKind::Energy),
    ]
}

/// runs every evaluator of `sources` on one cell, in order
pub fn evaluate_sources(
    sources: &[SourceTermEnum],
    model: &SurfaceSourceModel,
    cell: &CellState,
    sink: &mut dyn DiagnosticSink,
) -> Vec<SourceTerm> {
    sources
        .iter()
        .map(|s| s.evaluate(model, cell, sink))
        .collect()
}

//! Gas-surface interaction at a regressing solid fuel wall
//!
//! The host solver builds a [`face_state::CellState`] for each cell it wants a source for
//! and calls [`source_model::SurfaceSourceModel`] directly, or through the evaluators of
//! [`source_terms`] registered per governing equation.
/// regressing-surface identifier, solid constants, diagnostic slots
pub mod surface_config;
/// cell snapshot and extraction of the regressing face
pub mod face_state;
/// per-cell diagnostic export
pub mod diagnostics;
/// injection state and the mass, momentum and energy sources
pub mod source_model;
/// per-equation evaluators
pub mod source_terms;

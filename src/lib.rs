//! # HybridGSI
//!
//! Gas-surface interaction closure for a regressing solid fuel wall (paraffin pyrolysing
//! into ethylene) next to a reacting flow:
//! - [`Thermodynamics`]: NASA-7 enthalpy and heat capacity of the nine mixture species
//! - [`GasSurface`]: mass, momentum and energy volumetric sources for the cells touching the
//!   grain, evaluated from an explicit per-cell snapshot
//! - [`Utils`]: logging set-up and the domain maximum-pressure report
#[allow(non_snake_case)]
pub mod Examples;
#[allow(non_snake_case)]
pub mod GasSurface;
#[allow(non_snake_case)]
pub mod Thermodynamics;
#[allow(non_snake_case)]
pub mod Utils;

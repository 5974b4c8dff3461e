//! Snapshot of one boundary-adjacent cell as handed over by the flow solver, and the shared
//! routine that pulls the regressing-surface face out of it.
use log::{trace, warn};
use nalgebra::Vector3;

/// one bounding face of a cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryFace {
    /// identifier of the boundary zone owning the face
    pub zone_id: i32,
    /// outward area vector, m^2
    pub area: Vector3<f64>,
    /// boundary heat transfer rate through the face, W
    pub heat_flux: f64,
    /// face (wall) temperature, K
    pub temperature: f64,
}

impl BoundaryFace {
    pub fn new(zone_id: i32, area: Vector3<f64>, heat_flux: f64, temperature: f64) -> Self {
        Self {
            zone_id,
            area,
            heat_flux,
            temperature,
        }
    }
}

/// read-only view of a cell for a single source-term call
#[derive(Debug, Clone, Copy)]
pub struct CellState<'a> {
    /// cell index, only used to key diagnostic export
    pub cell: usize,
    /// m^3
    pub volume: f64,
    /// Pa
    pub pressure: f64,
    /// bounding faces in host order
    pub faces: &'a [BoundaryFace],
}

impl<'a> CellState<'a> {
    pub fn new(cell: usize, volume: f64, pressure: f64, faces: &'a [BoundaryFace]) -> Self {
        Self {
            cell,
            volume,
            pressure,
            faces,
        }
    }
}

/// Wall state seen by a cell through its regressing face
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryFaceState {
    /// |A|, m^2, always > 0
    pub area: f64,
    pub area_vector: Vector3<f64>,
    /// W
    pub heat_flux: f64,
    /// K
    pub wall_temperature: f64,
    /// Pa
    pub pressure: f64,
    /// m^3, always > 0
    pub volume: f64,
}

impl BoundaryFaceState {
    /// unit outward normal of the face
    pub fn normal(&self) -> Vector3<f64> {
        self.area_vector / self.area
    }

    /// W/m^2
    pub fn heat_flux_per_area(&self) -> f64 {
        self.heat_flux / self.area
    }
}

/// Finds the first face of `cell` owned by zone `zone_id` and captures the wall state there.
///
/// Further matching faces are ignored. `None` means the cell does not touch the surface
/// (or touches it through a degenerate face, or has no volume) and must contribute nothing.
pub fn extract_face_state(zone_id: i32, cell: &CellState) -> Option<BoundaryFaceState> {
    let face = match cell.faces.iter().find(|f| f.zone_id == zone_id) {
        Some(face) => face,
        None => {
            trace!("cell {} has no face on zone {}", cell.cell, zone_id);
            return None;
        }
    };
    let area = face.area.norm();
    if !(area > 0.0) {
        trace!("cell {}: zero-area face on zone {}", cell.cell, zone_id);
        return None;
    }
    if !(cell.volume > 0.0) {
        warn!(
            "cell {} touches zone {} but has non-positive volume {}",
            cell.cell, zone_id, cell.volume
        );
        return None;
    }
    Some(BoundaryFaceState {
        area,
        area_vector: face.area,
        heat_flux: face.heat_flux,
        wall_temperature: face.temperature,
        pressure: cell.pressure,
        volume: cell.volume,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn interior(area: Vector3<f64>) -> BoundaryFace {
        BoundaryFace::new(2, area, 0.0, 300.0)
    }

    #[test]
    fn test_extracts_matching_face() {
        let faces = [
            interior(Vector3::new(1e-2, 0.0, 0.0)),
            BoundaryFace::new(9, Vector3::new(0.0, -6e-3, -8e-3), -150.0, 750.0),
            interior(Vector3::new(-1e-2, 0.0, 0.0)),
        ];
        let cell = CellState::new(7, 1e-6, 1e5, &faces);
        let state = extract_face_state(9, &cell).unwrap();
        assert_relative_eq!(state.area, 1e-2, max_relative = 1e-12);
        assert_eq!(state.wall_temperature, 750.0);
        assert_eq!(state.pressure, 1e5);
        assert_relative_eq!(state.heat_flux_per_area(), -1.5e4, max_relative = 1e-12);
        let n = state.normal();
        assert_relative_eq!(n.norm(), 1.0, max_relative = 1e-12);
        assert_relative_eq!(n.y, -0.6, max_relative = 1e-12);
        assert_relative_eq!(n.z, -0.8, max_relative = 1e-12);
    }

    #[test]
    fn test_first_match_wins() {
        let faces = [
            BoundaryFace::new(9, Vector3::new(0.0, -1e-2, 0.0), 0.0, 700.0),
            BoundaryFace::new(9, Vector3::new(0.0, 0.0, -4e-2), 0.0, 900.0),
        ];
        let cell = CellState::new(0, 1e-6, 1e5, &faces);
        let state = extract_face_state(9, &cell).unwrap();
        assert_eq!(state.wall_temperature, 700.0);
        assert_relative_eq!(state.area, 1e-2, max_relative = 1e-12);
    }

    #[test]
    fn test_no_match_or_degenerate_geometry() {
        let faces = [interior(Vector3::new(1e-2, 0.0, 0.0))];
        assert!(extract_face_state(9, &CellState::new(0, 1e-6, 1e5, &faces)).is_none());
        assert!(extract_face_state(9, &CellState::new(0, 1e-6, 1e5, &[])).is_none());

        let zero_area = [BoundaryFace::new(9, Vector3::zeros(), 0.0, 700.0)];
        assert!(extract_face_state(9, &CellState::new(0, 1e-6, 1e5, &zero_area)).is_none());

        let wall = [BoundaryFace::new(9, Vector3::new(0.0, -1e-2, 0.0), 0.0, 700.0)];
        assert!(extract_face_state(9, &CellState::new(0, 0.0, 1e5, &wall)).is_none());
    }
}

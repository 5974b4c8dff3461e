//! Domain maximum pressure report: largest cell pressure, in bar rounded half-up to one
//! decimal, written to a small text file other tools poll for.
use log::info;
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const PA_PER_BAR: f64 = 1e5;
pub const REPORT_FILE: &str = "pmax_udf.txt";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("no cell pressures to scan")]
    EmptyDomain,
    #[error("Failed to write pressure report: {0}")]
    Io(#[from] std::io::Error),
}

/// largest finite value, Pa
pub fn max_pressure<I: IntoIterator<Item = f64>>(pressures: I) -> Option<f64> {
    pressures
        .into_iter()
        .filter(|p| p.is_finite())
        .fold(None, |acc: Option<f64>, p| match acc {
            Some(m) if m >= p => Some(m),
            _ => Some(p),
        })
}

/// bar, rounded half-up to 0.1
pub fn round_bar(p_pa: f64) -> f64 {
    (p_pa / PA_PER_BAR * 10.0 + 0.5).trunc() / 10.0
}

pub fn max_pressure_bar<I: IntoIterator<Item = f64>>(pressures: I) -> Option<f64> {
    max_pressure(pressures).map(round_bar)
}

/// Writes the rounded maximum to `path`. Nothing is written when the rounded value is not
/// positive, in which case `Ok(None)` is returned.
pub fn write_max_pressure_report<P, I>(path: P, pressures: I) -> Result<Option<f64>, ReportError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = f64>,
{
    let pmax_bar = max_pressure_bar(pressures).ok_or(ReportError::EmptyDomain)?;
    if !(pmax_bar > 0.0) {
        return Ok(None);
    }
    fs::write(path.as_ref(), format!("{}\n", pmax_bar))?;
    info!(
        "maximum pressure {} bar written to '{}'",
        pmax_bar,
        path.as_ref().display()
    );
    Ok(Some(pmax_bar))
}

/// logging initialisation
pub mod logger;
/// domain maximum-pressure report
pub mod pressure_report;

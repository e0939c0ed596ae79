//! Wake modeling collaborator and the wake-loss evaluator.
//!
//! The model here is a deliberately simple engineering stand-in (top-hat
//! deficit, quadratic superposition, piecewise power curve) so the
//! interactive loop has real energy tables to work with; it is not a
//! replication of a research wake code.

/// Flow-map grid of effective wind speeds for one wind condition.
pub mod flow_map;
/// Local wake-loss percentage from paired energy tables.
pub mod loss;
/// Wake deficit model, power curve, and AEP table computation.
pub mod model;
/// Wind rose: direction/speed axes and joint bin frequencies.
pub mod site;
/// Direction/speed-indexed energy tables.
pub mod tables;

pub use model::WakeModelOutput;
pub use site::Site;
pub use tables::EnergyTable;

//! Farm layout components: turbine records, grid generation, and the
//! geometric transforms applied after generation.

/// Mooring anchor position computation.
pub mod anchors;
/// Grid layout generation and farm boundary.
pub mod layout;
/// Rigid translation and mooring-heading rotation of a generated layout.
pub mod transform;
pub mod turbine;

// Re-export the main types for convenience
pub use turbine::Turbine;
pub use turbine::TurbineSet;

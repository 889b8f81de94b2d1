/// Census Core — dataset loading, aggregation, and report generation.
///
/// This crate contains all business logic with zero CLI dependencies.
/// It is designed to be reusable across different frontends (batch binary,
/// future notebook bindings).
///
/// # Modules
///
/// - [`model`] — Record types for the two datasets and the ordered
///   frequency tally.
/// - [`reader`] — Projected CSV loading with missing-value normalization.
/// - [`analysis`] — Extension derivation, catalog/log join, and rollups.
/// - [`report`] — Two-block ranked CSV report writer.
/// - [`pipeline`] — Orchestration of the three report sections.
/// - [`config`] — Run configuration (input paths, output directory).
pub mod analysis;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod reader;
pub mod report;

pub use config::CensusConfig;
pub use error::CensusError;

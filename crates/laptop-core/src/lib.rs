//! Laptop Advisor Core: data model, weights, wire contract and errors
//!
//! Shared vocabulary for every other crate in the workspace. Nothing in
//! here talks to the network; it only describes what goes over it.

pub mod catalog;
pub mod config;
pub mod context;
pub mod data_model;
pub mod error;
pub mod weights;
pub mod wire;

pub use config::{
    AdvisorConfig, ComparisonConfig, ComparisonMode, PresentationConfig, ServiceConfig,
    ShapingConfig,
};
pub use context::RequestContext;
pub use data_model::{
    CandidateId, CandidateRecord, ComparisonResult, LaptopDraft, LooseNumber, ServiceMetrics,
    SpecificationProfile,
};
pub use error::{AdvisorError, AdvisorResult, ComparisonSide, ErrorKind};
pub use weights::{Criterion, WeightError, WeightProfile};

/// Advisor client version
pub const ADVISOR_VERSION: &str = "1.0.0";

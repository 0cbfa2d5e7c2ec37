//! Laptop Advisor: recommend, predict and compare flows
//!
//! Every flow validates its inputs before touching the network, so an
//! invalid profile or weight table never costs a request.

pub mod advisor;
pub mod comparator;
pub mod session;

pub use advisor::{configuration_candidate, Advisor, DEFAULT_PAGE_LIMIT};
pub use comparator::Comparator;
pub use session::AdvisorSession;

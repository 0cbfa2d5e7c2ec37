//! Laptop Client: the network boundary to the prediction service
//!
//! | Operation | Route |
//! |---|---|
//! | predict | `POST /api/predict` |
//! | recommend | `POST /api/recommend` |
//! | compare | `POST /api/compare` |
//! | metrics | `GET /api/metrics` |
//! | catalog | `GET/POST /api/laptops`, `GET/PATCH/DELETE /api/laptops/{id}` |

pub mod http;
pub mod service;

pub use http::HttpPredictionService;
pub use service::PredictionService;

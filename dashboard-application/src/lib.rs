// Dashboard Application Layer

pub mod metrics;
pub mod queries;
pub mod state;

pub use metrics::Metrics;
pub use state::AppState;

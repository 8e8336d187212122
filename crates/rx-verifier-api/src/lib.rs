//! HTTP surface for the prescription verifier.
//!
//! Routes:
//!
//! | Method | Path                | Body                    |
//! |--------|---------------------|-------------------------|
//! | GET    | `/`                 | none                    |
//! | POST   | `/api/analyze`      | `AnalysisRequest`       |
//! | POST   | `/api/interactions` | `{"drugs": [...]}`      |
//! | POST   | `/api/alternatives` | `{"drugs": [...]}`      |

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;

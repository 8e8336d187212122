//! Domain models for the prescription verifier.

mod analysis;
mod drug;
mod findings;
mod rules;

pub use analysis::*;
pub use drug::*;
pub use findings::*;
pub use rules::*;

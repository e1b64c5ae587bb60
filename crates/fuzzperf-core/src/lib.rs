pub mod defuzz;
pub mod engine;
pub mod error;
pub mod level;
pub mod membership;
pub mod rules;

pub use defuzz::*;
pub use engine::*;
pub use error::*;
pub use level::*;
pub use membership::*;
pub use rules::*;

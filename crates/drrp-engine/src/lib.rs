//! Regex-driven DRRP detection for legislative text.
//!
//! Finds who holds duties, rights, responsibilities and powers in a
//! provision, refines each hit into a readable clause, and classifies the
//! provision into its duty-type categories.

mod actors;
pub mod catalogue;
pub mod engine;
pub mod error;
pub mod extract;
pub mod patterns;
pub mod preprocess;
pub mod refine;
pub mod resolver;
pub mod score;
pub mod structural;
mod text;
pub mod windowing;

pub use catalogue::{ActorCatalogue, ActorCategory};
pub use engine::{Engine, PresentActors};
pub use error::PatternError;
pub use refine::{ClauseRefiner, Refined};
pub use resolver::RoleHolders;
pub use score::{MAX_CONFIDENCE, score};

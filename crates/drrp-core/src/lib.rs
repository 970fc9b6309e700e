pub mod config;
pub mod drrp;
pub mod duty_type;
pub mod role;
pub mod schema;

pub use config::{ConfigError, EngineConfig, PatternVariant};
pub use drrp::Annotation;
pub use duty_type::{DutyType, DutyTypeResult};
pub use role::{Role, RoleMatch, Side};

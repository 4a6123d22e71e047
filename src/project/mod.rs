/// Project domain module
///
/// Holds the single business entity exposed by the service.

pub mod types;

pub use types::Project;

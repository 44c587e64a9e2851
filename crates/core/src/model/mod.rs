pub mod era;
pub mod registry;

pub use era::{EraDescriptor, GlobalTag};
pub use registry::{RegistryDoc, VersionEntry};

// Collaborator exports
pub mod identity;
pub mod source;

pub use identity::{IdentitySource, SequenceIdentity, SystemIdentity};
pub use source::{InMemoryProfileSource, JsonProfileSource, LoadError, ProfileSource};

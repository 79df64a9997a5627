pub mod manifest;

pub use manifest::{
    AgentDescriptor, DocDescriptor, Manifest, ManifestError, ReferenceDescriptor,
};

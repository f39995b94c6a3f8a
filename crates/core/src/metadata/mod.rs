mod error;
mod key;
mod target;
mod types;

pub use error::MetadataError;
pub use key::generate_scoped_key;
pub use target::{MetadataTarget, MosaicId, NamespaceId};
pub use types::{format_id, Metadata, MetadataModel, MetadataType};

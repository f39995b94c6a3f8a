mod error;
mod traits;
mod types;

pub use error::{RemoteQueryError, Result};
pub use traits::MetadataRepository;
pub use types::{MetadataSearchCriteria, Page, DEFAULT_PAGE_SIZE};

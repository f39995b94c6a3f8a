mod metadata;

pub use metadata::MetadataService;

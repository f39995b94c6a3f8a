use serde::{Deserialize, Serialize};

use crate::account::Address;
use crate::metadata::MetadataType;

/// Default number of records requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Search criteria for metadata queries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MetadataSearchCriteria {
    pub target_address: Option<Address>,
    pub source_address: Option<Address>,
    pub metadata_type: Option<MetadataType>,
    pub scoped_metadata_key: Option<u64>,
    pub target_id: Option<u64>,
    pub page_size: Option<u32>,
    pub page_number: Option<u32>,
}

impl MetadataSearchCriteria {
    /// Criteria matching every entry of `metadata_type` attached to `address`.
    pub fn for_target(address: Address, metadata_type: MetadataType) -> Self {
        Self {
            target_address: Some(address),
            metadata_type: Some(metadata_type),
            ..Self::default()
        }
    }

    /// Sets the page size.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Sets the 1-based page number.
    pub fn with_page_number(mut self, page_number: u32) -> Self {
        self.page_number = Some(page_number);
        self
    }
}

/// One page of results from a remote search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Records in server order.
    pub data: Vec<T>,
    pub page_number: u32,
    pub page_size: u32,
}

impl<T> Page<T> {
    /// Returns true if this page is the last one.
    pub fn is_last_page(&self) -> bool {
        self.data.len() < self.page_size as usize
    }

    /// Maps every record of the page, keeping order.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            data: self.data.into_iter().map(f).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
        }
    }
}

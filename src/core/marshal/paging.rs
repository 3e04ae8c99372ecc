//! Paging defaults for list-style requests

use super::specified::Specified;

/// Largest page size the service accepts
pub const MAX_PAGE_SIZE: u32 = 100;

/// Page size used when the configuration does not say otherwise
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Mutable view of a request item's paging fields
pub struct Paging<'a> {
    pub page_size: &'a mut Specified<u32>,
    pub page_number: &'a mut Specified<u32>,
}

impl<'a> Paging<'a> {
    pub fn new(page_size: &'a mut Specified<u32>, page_number: &'a mut Specified<u32>) -> Self {
        Self {
            page_size,
            page_number,
        }
    }

    /// Fill page size and number when the caller set neither
    ///
    /// Page size is `default_page_size` capped at [`MAX_PAGE_SIZE`], page
    /// number is 1. Returns whether defaults were applied.
    pub fn apply_defaults(self, default_page_size: u32) -> bool {
        if self.page_size.is_specified() || self.page_number.is_specified() {
            return false;
        }
        self.page_size.set(default_page_size.clamp(1, MAX_PAGE_SIZE));
        self.page_number.set(1);
        true
    }
}

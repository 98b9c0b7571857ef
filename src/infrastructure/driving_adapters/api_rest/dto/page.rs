//! Pagination DTOs

use serde::{Deserialize, Serialize};

use crate::domain::models::page::{Page, PageRequest, DEFAULT_PAGE_SIZE};

/// `page` / `size` query parameters
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageQueryDto {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl From<PageQueryDto> for PageRequest {
    fn from(dto: PageQueryDto) -> Self {
        PageRequest::new(dto.page.unwrap_or(0), dto.size.unwrap_or(DEFAULT_PAGE_SIZE))
    }
}

/// Paginated response body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDto<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,
    pub page: u32,
    pub size: u32,
}

impl<T> PageDto<T> {
    /// Convert a domain page, mapping each item to its response DTO
    pub fn from_page<D, F>(page: Page<D>, f: F) -> Self
    where
        F: FnMut(D) -> T,
    {
        let page = page.map(f);
        let request = page.request();
        Self {
            total_elements: page.total(),
            total_pages: page.total_pages(),
            page: request.page(),
            size: request.size(),
            content: page.into_items(),
        }
    }
}

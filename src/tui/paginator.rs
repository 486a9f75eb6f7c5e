//! Page math for the conversation menu.
//!
//! Pure functions over slices; the menu owns no pagination state beyond
//! the current page number.

/// Entries shown per menu page.
pub const PAGE_SIZE: usize = 12;

/// Number of pages needed for `total` entries; an empty set still has one
/// (empty) page.
pub fn num_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size).max(1)
}

/// Clamp a page number into `[0, num_pages - 1]`.
pub fn clamp_page(page: usize, num_pages: usize) -> usize {
    page.min(num_pages.saturating_sub(1))
}

/// Circular successor: the last page wraps to page 0.
pub fn next_page(page: usize, num_pages: usize) -> usize {
    (page + 1) % num_pages
}

/// Circular predecessor: page 0 wraps to the last page.
pub fn prev_page(page: usize, num_pages: usize) -> usize {
    (page + num_pages - 1) % num_pages
}

/// The slice of entries visible on `page`.
pub fn window<T>(entries: &[T], page: usize, page_size: usize) -> &[T] {
    let start = (page * page_size).min(entries.len());
    let end = (start + page_size).min(entries.len());
    &entries[start..end]
}

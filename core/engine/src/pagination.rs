//! FILENAME: core/engine/src/pagination.rs
//! PURPOSE: Server-side pagination controls: page window and change requests.
//! CONTEXT: The paginator never fetches anything. It keeps the page number
//! and page size the user picked and emits a `PageRequest` for the data
//! source to act on. `total_pages` is pushed in by that data source.

use crate::config::GridConfig;
use crate::locale::LocaleContext;
use serde::{Deserialize, Serialize};
use std::fmt;

/// At or below this many pages every page gets a button.
const MAX_UNCOMPRESSED_PAGES: u32 = 6;

// ============================================================================
// PAGE WINDOW
// ============================================================================

/// One slot in the pager strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "page", rename_all = "camelCase")]
pub enum PageButton {
    Page(u32),
    Ellipsis,
}

/// Buttons to render for `page_number` out of `total_pages`.
///
/// Up to six pages are all shown. Beyond that the first page, the last page
/// and the current page with its two neighbours are shown, and each gap
/// next to the first or last page collapses into a single ellipsis.
pub fn visible_page_buttons(page_number: u32, total_pages: u32) -> Vec<PageButton> {
    if total_pages <= MAX_UNCOMPRESSED_PAGES {
        return (1..=total_pages).map(PageButton::Page).collect();
    }

    let mut buttons = Vec::new();
    for page in 1..=total_pages {
        let near_current =
            page.saturating_add(1) >= page_number && page <= page_number.saturating_add(1);

        if page == 1 || page == total_pages || near_current {
            buttons.push(PageButton::Page(page));
        } else if page == 2 && page_number > 3 {
            buttons.push(PageButton::Ellipsis);
        } else if page == total_pages - 1 && page_number.saturating_add(2) < total_pages {
            buttons.push(PageButton::Ellipsis);
        }
    }
    buttons
}

// ============================================================================
// PAGINATOR
// ============================================================================

/// What the data source should load next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

pub type PageListener = Box<dyn FnMut(PageRequest)>;

pub struct Paginator {
    page_number: u32,
    page_size: u32,
    allowed_page_sizes: Vec<u32>,
    total_pages: u32,
    listener: Option<PageListener>,
}

impl fmt::Debug for Paginator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paginator")
            .field("page_number", &self.page_number)
            .field("page_size", &self.page_size)
            .field("allowed_page_sizes", &self.allowed_page_sizes)
            .field("total_pages", &self.total_pages)
            .finish_non_exhaustive()
    }
}

impl Paginator {
    pub fn new(allowed_page_sizes: Vec<u32>, default_page_size: u32, total_pages: u32) -> Self {
        Paginator {
            page_number: 1,
            page_size: default_page_size,
            allowed_page_sizes,
            total_pages,
            listener: None,
        }
    }

    pub fn from_config(config: &GridConfig, total_pages: u32) -> Self {
        Self::new(
            config.allowed_page_sizes.clone(),
            config.default_page_size,
            total_pages,
        )
    }

    pub fn on_change(&mut self, listener: impl FnMut(PageRequest) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn allowed_page_sizes(&self) -> &[u32] {
        &self.allowed_page_sizes
    }

    /// New page count from the data source. Pulls the current page back into
    /// range without issuing a request.
    pub fn set_total_pages(&mut self, total_pages: u32) {
        self.total_pages = total_pages;
        let last = total_pages.max(1);
        if self.page_number > last {
            log::debug!("page {} beyond new total {}, clamping", self.page_number, total_pages);
            self.page_number = last;
        }
    }

    /// Switch page size. The page number goes back to 1 locally, matching
    /// the `(1, size)` request sent to the data source.
    pub fn select_page_size(&mut self, page_size: u32) -> bool {
        if page_size == self.page_size {
            return false;
        }
        if !self.allowed_page_sizes.is_empty() && !self.allowed_page_sizes.contains(&page_size) {
            log::debug!("page size {} not in {:?}", page_size, self.allowed_page_sizes);
            return false;
        }

        self.page_size = page_size;
        self.page_number = 1;
        self.notify();
        true
    }

    /// Go to `page`. Ignored when it is the current page or out of range.
    pub fn select_page(&mut self, page: u32) -> bool {
        if page == self.page_number || !self.is_selectable(page) {
            return false;
        }

        self.page_number = page;
        self.notify();
        true
    }

    pub fn is_selectable(&self, page: u32) -> bool {
        (1..=self.total_pages).contains(&page)
    }

    pub fn can_go_previous(&self) -> bool {
        self.page_number > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.page_number < self.total_pages
    }

    pub fn previous_page(&mut self) -> bool {
        self.can_go_previous() && self.select_page(self.page_number - 1)
    }

    pub fn next_page(&mut self) -> bool {
        self.can_go_next() && self.select_page(self.page_number + 1)
    }

    pub fn first_page(&mut self) -> bool {
        self.select_page(1)
    }

    pub fn last_page(&mut self) -> bool {
        self.select_page(self.total_pages)
    }

    pub fn visible_buttons(&self) -> Vec<PageButton> {
        visible_page_buttons(self.page_number, self.total_pages)
    }

    pub fn label(&self, locale: &LocaleContext) -> String {
        locale.page_label(self.page_number, self.total_pages)
    }

    fn notify(&mut self) {
        let request = PageRequest {
            page: self.page_number,
            page_size: self.page_size,
        };
        log::debug!("page request: page {} size {}", request.page, request.page_size);
        if let Some(listener) = self.listener.as_mut() {
            listener(request);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use super::PageButton::{Ellipsis, Page};

    fn recording(total_pages: u32) -> (Paginator, Rc<RefCell<Vec<PageRequest>>>) {
        let requests = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&requests);
        let mut pager = Paginator::new(vec![10, 20, 30, 40, 50], 10, total_pages);
        pager.on_change(move |request| sink.borrow_mut().push(request));
        (pager, requests)
    }

    #[test]
    fn test_small_totals_show_every_page() {
        for page in 1..=5 {
            assert_eq!(
                visible_page_buttons(page, 5),
                vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
            );
        }
        assert_eq!(visible_page_buttons(1, 6).len(), 6);
        assert!(visible_page_buttons(1, 0).is_empty());
    }

    #[test]
    fn test_middle_page_gets_two_ellipses() {
        assert_eq!(
            visible_page_buttons(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_first_page_has_no_leading_ellipsis() {
        assert_eq!(visible_page_buttons(1, 10), vec![Page(1), Page(2), Ellipsis, Page(10)]);
    }

    #[test]
    fn test_window_edges() {
        assert_eq!(
            visible_page_buttons(3, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
        assert_eq!(
            visible_page_buttons(4, 10),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Ellipsis, Page(10)]
        );
        assert_eq!(
            visible_page_buttons(8, 10),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
        assert_eq!(visible_page_buttons(10, 10), vec![Page(1), Ellipsis, Page(9), Page(10)]);
    }

    #[test]
    fn test_select_same_page_is_noop() {
        let (mut pager, requests) = recording(10);
        assert!(!pager.select_page(1));
        assert!(requests.borrow().is_empty());
    }

    #[test]
    fn test_select_page_notifies() {
        let (mut pager, requests) = recording(10);
        assert!(pager.select_page(4));
        assert_eq!(pager.page_number(), 4);
        assert_eq!(*requests.borrow(), vec![PageRequest { page: 4, page_size: 10 }]);
    }

    #[test]
    fn test_out_of_range_pages_are_rejected() {
        let (mut pager, requests) = recording(3);
        assert!(!pager.select_page(0));
        assert!(!pager.select_page(4));
        assert!(requests.borrow().is_empty());
    }

    #[test]
    fn test_page_size_change_requests_first_page() {
        let (mut pager, requests) = recording(10);
        pager.select_page(6);
        assert!(pager.select_page_size(30));
        assert_eq!(pager.page_number(), 1);
        assert_eq!(pager.page_size(), 30);
        assert_eq!(requests.borrow().last(), Some(&PageRequest { page: 1, page_size: 30 }));
    }

    #[test]
    fn test_same_or_unknown_page_size_is_noop() {
        let (mut pager, requests) = recording(10);
        assert!(!pager.select_page_size(10));
        assert!(!pager.select_page_size(15));
        assert!(requests.borrow().is_empty());
    }

    #[test]
    fn test_from_config_uses_configured_sizes() {
        let config = GridConfig::from_json(r#"{"allowedPageSizes":[25,50],"defaultPageSize":25}"#).unwrap();
        let mut pager = Paginator::from_config(&config, 4);
        assert_eq!(pager.allowed_page_sizes(), &[25, 50]);
        assert_eq!(pager.page_size(), 25);
        assert!(!pager.select_page_size(10));
        assert!(pager.select_page_size(50));
    }

    #[test]
    fn test_navigation_bounds() {
        let (mut pager, _) = recording(2);
        assert!(!pager.can_go_previous());
        assert!(!pager.previous_page());
        assert!(pager.next_page());
        assert!(!pager.can_go_next());
        assert!(!pager.next_page());
        assert!(pager.first_page());
        assert!(pager.last_page());
    }

    #[test]
    fn test_no_pages_disables_both_directions() {
        let (pager, _) = recording(0);
        assert!(!pager.can_go_previous());
        assert!(!pager.can_go_next());
    }

    #[test]
    fn test_shrinking_total_clamps_page() {
        let (mut pager, requests) = recording(10);
        pager.select_page(9);
        pager.set_total_pages(4);
        assert_eq!(pager.page_number(), 4);
        pager.set_total_pages(0);
        assert_eq!(pager.page_number(), 1);
        assert_eq!(requests.borrow().len(), 1);
    }

    #[test]
    fn test_button_serialization() {
        let json = serde_json::to_string(&vec![Page(1), Ellipsis]).unwrap();
        assert_eq!(json, r#"[{"kind":"page","page":1},{"kind":"ellipsis"}]"#);
    }
}

use serde::{Serialize, Serializer};

/// Pages on each side of the current one shown by the pagination control
pub const DEFAULT_PAGE_WINDOW: usize = 2;

/// One slot of the pagination control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Number(usize),
    /// Skipped run of pages, rendered as an ellipsis
    Gap,
}

impl Serialize for PageLink {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageLink::Number(n) => serializer.serialize_u64(*n as u64),
            PageLink::Gap => serializer.serialize_str("..."),
        }
    }
}

/// A 1-based slice of query results
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
    /// Page numbers to render, with gaps
    pub window: Vec<PageLink>,
}

impl<T> Page<T> {
    /// Slices `items` into the requested page
    ///
    /// There is always at least one page, even for an empty result, and the
    /// requested page is clamped into `1..=total_pages`.
    pub fn paginate(items: Vec<T>, page: usize, per_page: usize) -> Self {
        let per_page = per_page.max(1);
        let total_items = items.len();
        let total_pages = total_items.div_ceil(per_page).max(1);
        let page = page.clamp(1, total_pages);

        let items: Vec<T> = items
            .into_iter()
            .skip((page - 1) * per_page)
            .take(per_page)
            .collect();

        Self {
            items,
            page,
            per_page,
            total_items,
            total_pages,
            window: visible_pages(page, total_pages, DEFAULT_PAGE_WINDOW),
        }
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

/// Computes the page numbers shown around `current`
///
/// The first page is always present, the last page whenever there is more
/// than one, and pages within `delta` of `current` in between. Skipped runs
/// collapse into a single [`PageLink::Gap`].
pub fn visible_pages(current: usize, total: usize, delta: usize) -> Vec<PageLink> {
    let mut links = vec![PageLink::Number(1)];
    if total == 0 {
        return links;
    }

    let start = current.saturating_sub(delta).max(2);
    let end = (current + delta).min(total.saturating_sub(1));

    if current > delta + 2 {
        links.push(PageLink::Gap);
    }

    links.extend((start..=end).map(PageLink::Number));

    if current + delta + 1 < total {
        links.push(PageLink::Gap);
        links.push(PageLink::Number(total));
    } else if total > 1 {
        links.push(PageLink::Number(total));
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageLink::{Gap, Number};

    #[test]
    fn test_paginate_middle_page() {
        let page = Page::paginate((1..=25).collect::<Vec<_>>(), 2, 9);
        assert_eq!(page.items, (10..=18).collect::<Vec<_>>());
        assert_eq!(page.total_items, 25);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_next());
        assert!(page.has_previous());
    }

    #[test]
    fn test_paginate_clamps_out_of_range_page() {
        let page = Page::paginate((1..=25).collect::<Vec<_>>(), 99, 9);
        assert_eq!(page.page, 3);
        assert_eq!(page.items, (19..=25).collect::<Vec<_>>());
        assert!(!page.has_next());

        let page = Page::paginate((1..=25).collect::<Vec<_>>(), 0, 9);
        assert_eq!(page.page, 1);
    }

    #[test]
    fn test_paginate_empty_has_single_page() {
        let page = Page::<u32>::paginate(Vec::new(), 3, 9);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
        assert_eq!(page.window, vec![Number(1)]);
    }

    #[test]
    fn test_window_near_start() {
        assert_eq!(
            visible_pages(1, 10, 2),
            vec![Number(1), Number(2), Number(3), Gap, Number(10)]
        );
    }

    #[test]
    fn test_window_in_middle() {
        assert_eq!(
            visible_pages(5, 10, 2),
            vec![
                Number(1),
                Gap,
                Number(3),
                Number(4),
                Number(5),
                Number(6),
                Number(7),
                Gap,
                Number(10)
            ]
        );
    }

    #[test]
    fn test_window_near_end() {
        assert_eq!(
            visible_pages(10, 10, 2),
            vec![Number(1), Gap, Number(8), Number(9), Number(10)]
        );
    }

    #[test]
    fn test_window_small_totals() {
        assert_eq!(visible_pages(1, 1, 2), vec![Number(1)]);
        assert_eq!(visible_pages(1, 2, 2), vec![Number(1), Number(2)]);
        assert_eq!(
            visible_pages(2, 4, 2),
            vec![Number(1), Number(2), Number(3), Number(4)]
        );
    }

    #[test]
    fn test_gap_serializes_as_ellipsis() {
        let json = serde_json::to_string(&vec![Number(1), Gap, Number(9)]).unwrap();
        assert_eq!(json, "[1,\"...\",9]");
    }
}

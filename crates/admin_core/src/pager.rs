use std::{fmt, num::NonZeroUsize, ops::Range, str::FromStr};

pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(size) => size,
    None => unreachable!(),
};

/// Page navigation request. Targets outside `[1, page_count]` are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    First,
    Prev,
    Next,
    Last,
    To(usize),
}

impl fmt::Display for PageNav {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("first"),
            Self::Prev => f.write_str("prev"),
            Self::Next => f.write_str("next"),
            Self::Last => f.write_str("last"),
            Self::To(page) => write!(f, "{page}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a page (expected first, prev, next, last or a number)")]
pub struct PageNavParseError(pub String);

impl FromStr for PageNav {
    type Err = PageNavParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(Self::First),
            "prev" | "previous" => Ok(Self::Prev),
            "next" => Ok(Self::Next),
            "last" => Ok(Self::Last),
            other => other
                .parse::<usize>()
                .map(Self::To)
                .map_err(|_| PageNavParseError(s.to_string())),
        }
    }
}

/// `max(1, ceil(len / page_size))`.
pub fn page_count(len: usize, page_size: NonZeroUsize) -> usize {
    len.div_ceil(page_size.get()).max(1)
}

/// Index range of `current_page` within a view of `len` entries. Empty when the
/// view is empty.
pub fn page_range(len: usize, page_size: NonZeroUsize, current_page: usize) -> Range<usize> {
    let start = current_page
        .saturating_sub(1)
        .saturating_mul(page_size.get())
        .min(len);
    let end = start.saturating_add(page_size.get()).min(len);
    start..end
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    page_size: NonZeroUsize,
    current_page: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageState {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            page_size,
            current_page: 1,
        }
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_count(&self, view_len: usize) -> usize {
        page_count(view_len, self.page_size)
    }

    /// Slice of `view` shown on the current page, plus the page count.
    pub fn page<'a, T>(&self, view: &'a [T]) -> (&'a [T], usize) {
        let range = page_range(view.len(), self.page_size, self.current_page);
        (&view[range], self.page_count(view.len()))
    }

    pub fn navigate(&mut self, nav: PageNav, view_len: usize) -> usize {
        let last = self.page_count(view_len);
        let target = match nav {
            PageNav::First => 1,
            PageNav::Prev => self.current_page.saturating_sub(1),
            PageNav::Next => self.current_page.saturating_add(1),
            PageNav::Last => last,
            PageNav::To(page) => page,
        };
        self.current_page = target.clamp(1, last);
        self.current_page
    }

    /// Pulls the current page back into range after the view changed size.
    pub fn clamp(&mut self, view_len: usize) -> usize {
        self.current_page = self.current_page.clamp(1, self.page_count(view_len));
        self.current_page
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }
}

#[cfg(test)]
#[path = "tests/pager_tests.rs"]
mod tests;

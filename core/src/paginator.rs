use std::fmt;

use crate::error::{Result, SearchError};

/// Splits `items` into consecutive pages of `page_size`; the last page holds
/// the remainder.
pub fn paginate<T>(items: &[T], page_size: usize) -> Result<Paginator<'_, T>> {
    Paginator::new(items, page_size)
}

/// Restartable page view over a slice. Iterating twice yields the same pages.
#[derive(Debug)]
pub struct Paginator<'a, T> {
    items: &'a [T],
    page_size: usize,
}

// Derives would require `T: Clone`; only the slice reference is copied.
impl<T> Clone for Paginator<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Paginator<'_, T> {}

impl<'a, T> Paginator<'a, T> {
    pub fn new(items: &'a [T], page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(SearchError::invalid_argument("page size must be positive"));
        }
        Ok(Self { items, page_size })
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_count(&self) -> usize {
        self.items.len().div_ceil(self.page_size)
    }

    pub fn iter(&self) -> Pages<'a, T> {
        Pages { items: self.items, offset: 0, page_size: self.page_size }
    }
}

impl<'a, T> IntoIterator for Paginator<'a, T> {
    type Item = Page<'a, T>;
    type IntoIter = Pages<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &Paginator<'a, T> {
    type Item = Page<'a, T>;
    type IntoIter = Pages<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Pages<'a, T> {
    items: &'a [T],
    offset: usize,
    page_size: usize,
}

impl<'a, T> Iterator for Pages<'a, T> {
    type Item = Page<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.items.is_empty() {
            return None;
        }
        let (head, tail) = self.items.split_at(self.page_size.min(self.items.len()));
        let page = Page { items: head, offset: self.offset };
        self.items = tail;
        self.offset += head.len();
        Some(page)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.items.len().div_ceil(self.page_size);
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for Pages<'_, T> {}

/// One contiguous page, `offset` being the position of its first item in the
/// paginated sequence.
#[derive(Debug, PartialEq)]
pub struct Page<'a, T> {
    items: &'a [T],
    offset: usize,
}

impl<'a, T> Page<'a, T> {
    pub fn items(&self) -> &'a [T] {
        self.items
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: fmt::Display> fmt::Display for Page<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in self.items {
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

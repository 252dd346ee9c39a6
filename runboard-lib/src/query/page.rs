//! Page slicing and navigation.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Rows per page, limited to the sizes the page-size selector offers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    Five,
    #[default]
    Ten,
    TwentyFive,
    Fifty,
}

impl PageSize {
    /// Offered sizes, smallest first.
    pub const ALL: [PageSize; 4] = [
        PageSize::Five,
        PageSize::Ten,
        PageSize::TwentyFive,
        PageSize::Fifty,
    ];

    pub fn get(self) -> usize {
        match self {
            Self::Five => 5,
            Self::Ten => 10,
            Self::TwentyFive => 25,
            Self::Fifty => 50,
        }
    }

    /// Next larger size, saturating at the largest.
    pub fn next(self) -> Self {
        match self {
            Self::Five => Self::Ten,
            Self::Ten => Self::TwentyFive,
            Self::TwentyFive | Self::Fifty => Self::Fifty,
        }
    }

    /// Next smaller size, saturating at the smallest.
    pub fn previous(self) -> Self {
        match self {
            Self::Five | Self::Ten => Self::Five,
            Self::TwentyFive => Self::Ten,
            Self::Fifty => Self::TwentyFive,
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|size| size.get() == value)
            .ok_or(Error::InvalidPageSize(value))
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Number of pages needed for `total` rows. Never less than one.
pub fn total_pages(total: usize, size: usize) -> usize {
    if size == 0 {
        return 1;
    }
    total.div_ceil(size).max(1)
}

/// Index range of a 1-based `page`, clamped to `total`.
///
/// Pages past the end yield an empty range. Page 0 is read as page 1.
pub fn page_bounds(total: usize, page: usize, size: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(size).min(total);
    let end = start.saturating_add(size).min(total);
    start..end
}

/// The rows on a 1-based `page`.
pub fn page_slice<T>(rows: &[T], page: usize, size: usize) -> &[T] {
    &rows[page_bounds(rows.len(), page, size)]
}

/// A pagination request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageNav {
    First,
    Previous,
    Next,
    Last,
    /// Direct request for a page number.
    Goto(usize),
}

impl PageNav {
    /// The page this request lands on, clamped into `[1, total_pages]`.
    ///
    /// First and previous stay put on page 1; next and last stay put on the
    /// final page.
    pub fn resolve(self, current: usize, total_pages: usize) -> usize {
        let last = total_pages.max(1);
        let target = match self {
            Self::First => 1,
            Self::Previous => current.saturating_sub(1),
            Self::Next => current.saturating_add(1),
            Self::Last => last,
            Self::Goto(page) => page,
        };
        target.clamp(1, last)
    }
}

/// Which pagination controls are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControls {
    pub first: bool,
    pub previous: bool,
    pub next: bool,
    pub last: bool,
}

impl PageControls {
    pub fn new(current: usize, total_pages: usize) -> Self {
        let back = current > 1;
        let forward = current < total_pages;
        Self {
            first: back,
            previous: back,
            next: forward,
            last: forward,
        }
    }

    pub fn is_enabled(&self, nav: PageNav) -> bool {
        match nav {
            PageNav::First => self.first,
            PageNav::Previous => self.previous,
            PageNav::Next => self.next,
            PageNav::Last => self.last,
            PageNav::Goto(_) => true,
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::{Lesson, LessonStatus};

/// Lessons shown per page on the course detail screen.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Filter criteria applied before pagination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonFilter {
    title: String,
    status: Option<LessonStatus>,
}

impl LessonFilter {
    /// Creates a filter; an empty title and `None` status match everything.
    #[must_use]
    pub fn new(title: impl Into<String>, status: Option<LessonStatus>) -> Self {
        Self {
            title: title.into(),
            status,
        }
    }

    /// Returns the title fragment, matched case-insensitively.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Returns the status constraint, if any.
    #[must_use]
    pub fn status(&self) -> Option<LessonStatus> {
        self.status
    }

    /// Returns whether a lesson passes the filter.
    ///
    /// Title containment uses locale-independent lowercasing on both
    /// sides, so `"OWN"` matches `"Ownership"` regardless of locale.
    #[must_use]
    pub fn matches(&self, lesson: &Lesson) -> bool {
        self.matches_lowered(lesson, self.title.to_lowercase().as_str())
    }

    // Takes the pre-lowered title fragment so a projection pass lowers
    // the filter once, not once per lesson.
    fn matches_lowered(&self, lesson: &Lesson, lowered_title: &str) -> bool {
        let title_matches =
            lowered_title.is_empty() || lesson.title().to_lowercase().contains(lowered_title);
        let status_matches = self
            .status
            .is_none_or(|status| lesson.status() == status);

        title_matches && status_matches
    }
}

/// One page of the filtered lesson list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonPage {
    /// Lessons on the requested page, in stored order.
    pub items: Vec<Lesson>,
    /// Number of pages the filtered list spans; 0 when nothing matched.
    pub total_pages: usize,
    /// The page that was projected.
    pub page: usize,
}

/// Projects the filtered, paginated slice of a lesson collection.
///
/// Never fails: an out-of-range page or a zero page size produces an
/// empty item list. Filtering is stable; the input order is preserved.
#[must_use]
pub fn project(
    lessons: &[Lesson],
    filter: &LessonFilter,
    page: usize,
    page_size: usize,
) -> LessonPage {
    let lowered_title = filter.title.to_lowercase();
    let filtered: Vec<&Lesson> = lessons
        .iter()
        .filter(|lesson| filter.matches_lowered(lesson, lowered_title.as_str()))
        .collect();

    let total_pages = if page_size == 0 {
        0
    } else {
        filtered.len().div_ceil(page_size)
    };

    let start = page.saturating_sub(1).saturating_mul(page_size);
    let items = filtered
        .into_iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    LessonPage {
        items,
        total_pages,
        page,
    }
}

/// Ephemeral per-screen view state for the lesson list.
///
/// Holds the two filters and the current page. Changing either filter
/// resets the page to 1 so a shrinking result set never lands on an
/// empty page; changing the page alone leaves the filters untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonBrowser {
    filter: LessonFilter,
    page: usize,
    page_size: usize,
}

impl LessonBrowser {
    /// Creates view state at page 1 with no filters.
    #[must_use]
    pub fn new() -> Self {
        Self {
            filter: LessonFilter::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Replaces the title filter, resetting to page 1 when it changed.
    pub fn set_title_filter(&mut self, title: impl Into<String>) {
        let title = title.into();
        if self.filter.title != title {
            self.filter.title = title;
            self.page = 1;
        }
    }

    /// Replaces the status filter, resetting to page 1 when it changed.
    pub fn set_status_filter(&mut self, status: Option<LessonStatus>) {
        if self.filter.status != status {
            self.filter.status = status;
            self.page = 1;
        }
    }

    /// Moves to another page without touching the filters.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Returns the active filter.
    #[must_use]
    pub fn filter(&self) -> &LessonFilter {
        &self.filter
    }

    /// Returns the current page, always at least 1.
    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    /// Projects the current page over a lesson collection.
    #[must_use]
    pub fn project(&self, lessons: &[Lesson]) -> LessonPage {
        project(lessons, &self.filter, self.page, self.page_size)
    }
}

impl Default for LessonBrowser {
    fn default() -> Self {
        Self::new()
    }
}

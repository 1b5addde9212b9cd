//! Fixed-size page slicing over an ordered result set.
//!
//! The page token is raw query-string input and may be missing,
//! non-numeric, or out of range. Resolution policy: a non-numeric token
//! falls back to the first page, an integer outside [1, num_pages] falls
//! back to the last page, anything else is taken verbatim. No wraparound.

/// Posts shown per listing page.
pub const POSTS_PER_PAGE: i64 = 3;

#[derive(Debug, Clone, Copy)]
pub struct Paginator {
    total: i64,
    per_page: i64,
}

/// One slice of an ordered sequence, with the page number that produced it.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: i64,
    pub num_pages: i64,
}

impl Paginator {
    pub fn new(total: i64, per_page: i64) -> Self {
        Self { total, per_page }
    }

    /// Total page count. An empty collection still has one (empty) page.
    pub fn num_pages(&self) -> i64 {
        if self.total == 0 {
            1
        } else {
            (self.total + self.per_page - 1) / self.per_page
        }
    }

    /// Resolve a raw page token to a page number within [1, num_pages].
    ///
    /// A missing token reads as page 1: the caller may still display the
    /// token as absent, but item retrieval always happens.
    pub fn resolve(&self, requested: Option<&str>) -> i64 {
        let num_pages = self.num_pages();
        match requested {
            None => 1,
            Some(raw) => match raw.trim().parse::<i64>() {
                Err(_) => 1,
                Ok(number) if number < 1 => num_pages,
                Ok(number) if number > num_pages => num_pages,
                Ok(number) => number,
            },
        }
    }

    /// SQL offset for a resolved page number.
    pub fn offset(&self, number: i64) -> i64 {
        (number - 1) * self.per_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 7 items at 3 per page = pages {1,2,3}, last page holds 1 item.
    fn seven() -> Paginator {
        Paginator::new(7, POSTS_PER_PAGE)
    }

    #[test]
    fn test_num_pages() {
        assert_eq!(seven().num_pages(), 3);
        assert_eq!(Paginator::new(6, 3).num_pages(), 2);
        assert_eq!(Paginator::new(1, 3).num_pages(), 1);
    }

    #[test]
    fn test_empty_collection_has_one_page() {
        let p = Paginator::new(0, POSTS_PER_PAGE);
        assert_eq!(p.num_pages(), 1);
        assert_eq!(p.resolve(Some("99")), 1);
        assert_eq!(p.offset(1), 0);
    }

    #[test]
    fn test_valid_page_verbatim() {
        assert_eq!(seven().resolve(Some("2")), 2);
        assert_eq!(seven().offset(2), 3);
    }

    #[test]
    fn test_missing_token_reads_first_page() {
        assert_eq!(seven().resolve(None), 1);
    }

    #[test]
    fn test_non_integer_falls_back_to_first_page() {
        assert_eq!(seven().resolve(Some("abc")), 1);
        assert_eq!(seven().resolve(Some("2.5")), 1);
        assert_eq!(seven().resolve(Some("")), 1);
    }

    #[test]
    fn test_too_large_falls_back_to_last_page() {
        assert_eq!(seven().resolve(Some("99")), 3);
        assert_eq!(seven().offset(3), 6);
    }

    #[test]
    fn test_below_one_falls_back_to_last_page() {
        assert_eq!(seven().resolve(Some("0")), 3);
        assert_eq!(seven().resolve(Some("-1")), 3);
    }

    #[test]
    fn test_whitespace_tolerated() {
        assert_eq!(seven().resolve(Some(" 2 ")), 2);
    }
}

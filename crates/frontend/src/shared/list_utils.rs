//! List utilities shared by the table pages: sorting, pagination, indicators.

use std::cmp::Ordering;

/// Implemented by row types that support column sorting.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Sort indicator for a column header.
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// One visible page of a larger list.
#[derive(Clone, Debug, PartialEq)]
pub struct PageSlice<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

/// Cuts one page out of `items`. An out-of-range page is clamped to the last
/// one, so deleting the only row of the last page never shows an empty view.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> PageSlice<T> {
    let total_count = items.len();
    let total_pages = if total_count == 0 {
        1
    } else {
        total_count.div_ceil(page_size)
    };
    let page = page.min(total_pages - 1);
    let start = page * page_size;
    let end = (start + page_size).min(total_count);

    PageSlice {
        items: items.get(start..end).unwrap_or(&[]).to_vec(),
        page,
        total_pages,
        total_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(i64);

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, _field: &str) -> Ordering {
            self.0.cmp(&other.0)
        }
    }

    #[test]
    fn sorts_both_directions() {
        let mut rows = vec![Row(3), Row(1), Row(2)];
        sort_list(&mut rows, "id", true);
        assert_eq!(rows.iter().map(|r| r.0).collect::<Vec<_>>(), vec![1, 2, 3]);
        sort_list(&mut rows, "id", false);
        assert_eq!(rows.iter().map(|r| r.0).collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn paginate_basic() {
        let items: Vec<i64> = (1..=45).collect();
        let slice = paginate(&items, 0, 20);
        assert_eq!(slice.items.len(), 20);
        assert_eq!(slice.total_pages, 3);
        assert_eq!(slice.total_count, 45);

        let slice = paginate(&items, 2, 20);
        assert_eq!(slice.items.len(), 5);
    }

    #[test]
    fn out_of_range_page_is_clamped() {
        let items: Vec<i64> = (1..=10).collect();
        let slice = paginate(&items, 9, 20);
        assert_eq!(slice.page, 0);
        assert_eq!(slice.items.len(), 10);
    }

    #[test]
    fn empty_list_has_one_empty_page() {
        let slice = paginate(&Vec::<i64>::new(), 0, 20);
        assert_eq!(slice.total_pages, 1);
        assert!(slice.items.is_empty());
    }

    #[test]
    fn indicator_reflects_active_column() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("name", "date", true), " ⇅");
    }
}

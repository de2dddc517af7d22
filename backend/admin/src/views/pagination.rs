use super::urls;

/// Page links kept on either side of the current page once the page
/// count forces a windowed slider.
const ON_EACH_SIDE: i64 = 3;

/// The rendered pagination control: previous/next plus a numeric window
/// with `...` gaps. Computed purely from page metadata.
pub struct Pager {
    pub current_page: i64,
    pub last_page: i64,
    pub prev: Option<String>,
    pub next: Option<String>,
    pub items: Vec<PagerItem>,
}

pub struct PagerItem {
    pub label: String,
    pub href: Option<String>,
    pub current: bool,
}

impl Pager {
    pub fn new(current_page: i64, last_page: i64) -> Self {
        let last_page = last_page.max(1);

        let items = window(current_page, last_page)
            .into_iter()
            .map(|slot| match slot {
                Some(page) => PagerItem {
                    label: page.to_string(),
                    href: (page != current_page).then(|| urls::chirps_index_page(page)),
                    current: page == current_page,
                },
                None => PagerItem {
                    label: "...".to_string(),
                    href: None,
                    current: false,
                },
            })
            .collect();

        Self {
            // An out-of-range page still gets a way back into range.
            prev: (current_page > 1).then(|| urls::chirps_index_page((current_page - 1).min(last_page))),
            next: (current_page < last_page).then(|| urls::chirps_index_page(current_page + 1)),
            current_page,
            last_page,
            items,
        }
    }
}

/// Numeric link window; `None` slots render as `...` gaps.
fn window(current: i64, last: i64) -> Vec<Option<i64>> {
    let window = ON_EACH_SIDE * 2;

    // Few enough pages to list them all.
    if last <= window + 6 {
        return (1..=last).map(Some).collect();
    }

    if current <= window {
        // Close to the start: a run from the first page, then the tail.
        (1..=window + 2)
            .map(Some)
            .chain([None])
            .chain((last - 1..=last).map(Some))
            .collect()
    } else if current > last - window {
        // Close to the end: the head, then a run up to the last page.
        [Some(1), Some(2), None]
            .into_iter()
            .chain((last - (window + 1)..=last).map(Some))
            .collect()
    } else {
        // Somewhere in the middle: head, sliding window, tail.
        [Some(1), Some(2), None]
            .into_iter()
            .chain((current - ON_EACH_SIDE..=current + ON_EACH_SIDE).map(Some))
            .chain([None])
            .chain((last - 1..=last).map(Some))
            .collect()
    }
}

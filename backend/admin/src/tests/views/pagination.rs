use crate::views::pagination::Pager;

fn labels(pager: &Pager) -> Vec<String> {
    pager.items.iter().map(|i| i.label.clone()).collect()
}

#[test]
fn test_short_run_shows_every_page() {
    let pager = Pager::new(2, 5);

    assert_eq!(labels(&pager), ["1", "2", "3", "4", "5"]);
    assert!(pager.items[1].current);
    assert!(pager.items[1].href.is_none());
    assert_eq!(pager.prev.as_deref(), Some("/admin/chirps?page=1"));
    assert_eq!(pager.next.as_deref(), Some("/admin/chirps?page=3"));
}

#[test]
fn test_single_page_has_no_links() {
    let pager = Pager::new(1, 1);

    assert_eq!(labels(&pager), ["1"]);
    assert!(pager.prev.is_none());
    assert!(pager.next.is_none());
}

#[test]
fn test_window_near_start() {
    let pager = Pager::new(2, 50);

    assert_eq!(
        labels(&pager),
        ["1", "2", "3", "4", "5", "6", "7", "8", "...", "49", "50"]
    );
}

#[test]
fn test_window_in_middle() {
    let pager = Pager::new(25, 50);

    assert_eq!(
        labels(&pager),
        ["1", "2", "...", "22", "23", "24", "25", "26", "27", "28", "...", "49", "50"]
    );
}

#[test]
fn test_window_near_end() {
    let pager = Pager::new(49, 50);

    assert_eq!(
        labels(&pager),
        ["1", "2", "...", "43", "44", "45", "46", "47", "48", "49", "50"]
    );
}

#[test]
fn test_out_of_range_page_links_back() {
    let pager = Pager::new(9, 3);

    assert_eq!(pager.prev.as_deref(), Some("/admin/chirps?page=3"));
    assert!(pager.next.is_none());
}

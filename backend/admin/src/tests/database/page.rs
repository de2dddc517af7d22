use crate::database::page::Page;

#[test]
fn test_last_page_rounds_up() {
    let page: Page<i64> = Page::new(vec![], 1, 10, 0);
    assert_eq!(page.last_page(), 1);

    let page: Page<i64> = Page::new(vec![], 1, 10, 10);
    assert_eq!(page.last_page(), 1);

    let page: Page<i64> = Page::new(vec![], 1, 10, 11);
    assert_eq!(page.last_page(), 2);

    let page: Page<i64> = Page::new(vec![], 1, 10, 95);
    assert_eq!(page.last_page(), 10);
}

#[test]
fn test_last_page_survives_zero_per_page() {
    let page: Page<i64> = Page::new(vec![], 1, 0, 42);
    assert_eq!(page.last_page(), 42);
}

#[test]
fn test_is_empty() {
    let page = Page::new(Vec::<i64>::new(), 1, 10, 0);
    assert!(page.is_empty());

    let page = Page::new(vec![1], 1, 10, 1);
    assert!(!page.is_empty());
}

use super::*;

fn size(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).expect("non-zero")
}

#[test]
fn page_count_is_at_least_one() {
    assert_eq!(page_count(0, DEFAULT_PAGE_SIZE), 1);
    assert_eq!(page_count(10, DEFAULT_PAGE_SIZE), 1);
    assert_eq!(page_count(11, DEFAULT_PAGE_SIZE), 2);
    assert_eq!(page_count(25, DEFAULT_PAGE_SIZE), 3);
}

#[test]
fn last_page_slice_is_short() {
    let view: Vec<usize> = (0..25).collect();
    let mut pager = PageState::default();
    pager.navigate(PageNav::Last, view.len());

    let (slice, count) = pager.page(&view);
    assert_eq!(count, 3);
    assert_eq!(slice, &[20, 21, 22, 23, 24]);
}

#[test]
fn empty_view_gives_empty_slice_on_page_one() {
    let view: Vec<usize> = Vec::new();
    let pager = PageState::default();
    let (slice, count) = pager.page(&view);
    assert!(slice.is_empty());
    assert_eq!(count, 1);
}

#[test]
fn navigation_is_clamped_to_range() {
    let mut pager = PageState::new(size(10));
    assert_eq!(pager.navigate(PageNav::Prev, 25), 1);
    assert_eq!(pager.navigate(PageNav::To(0), 25), 1);
    assert_eq!(pager.navigate(PageNav::To(99), 25), 3);
    assert_eq!(pager.navigate(PageNav::Next, 25), 3);
    assert_eq!(pager.navigate(PageNav::Prev, 25), 2);
    assert_eq!(pager.navigate(PageNav::First, 25), 1);
    assert_eq!(pager.navigate(PageNav::Next, 25), 2);
}

#[test]
fn clamp_pulls_page_back_when_view_shrinks() {
    let mut pager = PageState::new(size(10));
    pager.navigate(PageNav::Last, 21);
    assert_eq!(pager.current_page(), 3);

    assert_eq!(pager.clamp(20), 2);
    assert_eq!(pager.clamp(0), 1);
}

#[test]
fn page_range_handles_out_of_range_page() {
    assert_eq!(page_range(5, size(10), 4), 5..5);
    assert_eq!(page_range(25, size(10), 2), 10..20);
}

#[test]
fn parses_navigation_words_and_numbers() {
    assert_eq!("first".parse::<PageNav>(), Ok(PageNav::First));
    assert_eq!("Previous".parse::<PageNav>(), Ok(PageNav::Prev));
    assert_eq!("next".parse::<PageNav>(), Ok(PageNav::Next));
    assert_eq!("LAST".parse::<PageNav>(), Ok(PageNav::Last));
    assert_eq!("7".parse::<PageNav>(), Ok(PageNav::To(7)));
    assert!("-1".parse::<PageNav>().is_err());
    assert!("middle".parse::<PageNav>().is_err());
}

use super::*;

#[test]
fn next_on_last_wraps_to_first() {
    let mut gallery = GalleryState::new(3);
    gallery.select(2);
    gallery.next();
    assert_eq!(gallery.index(), 0);
}

#[test]
fn previous_on_first_wraps_to_last() {
    let mut gallery = GalleryState::new(3);
    gallery.previous();
    assert_eq!(gallery.index(), 2);
}

#[test]
fn next_and_previous_step_by_one() {
    let mut gallery = GalleryState::new(4);
    gallery.next();
    gallery.next();
    assert_eq!(gallery.index(), 2);
    gallery.previous();
    assert_eq!(gallery.index(), 1);
}

#[test]
fn select_ignores_out_of_range_index() {
    let mut gallery = GalleryState::new(2);
    gallery.select(1);
    gallery.select(5);
    assert_eq!(gallery.index(), 1);
}

#[test]
fn empty_gallery_is_inert() {
    let mut gallery = GalleryState::default();
    gallery.next();
    gallery.previous();
    assert!(gallery.is_empty());
    assert_eq!(gallery.index(), 0);
    assert!(!gallery.has_controls());
}

#[test]
fn single_image_has_no_controls() {
    let gallery = GalleryState::new(1);
    assert!(!gallery.has_controls());
    assert_eq!(gallery.counter_label(), "1 / 1");
}

#[test]
fn zoom_toggles_between_fit_and_cover() {
    let mut gallery = GalleryState::new(2);
    assert!(gallery.is_fit());
    assert_eq!(gallery.object_fit(), "contain");
    gallery.toggle_zoom();
    assert_eq!(gallery.object_fit(), "cover");
    gallery.toggle_zoom();
    assert!(gallery.is_fit());
}

#[test]
fn counter_is_one_based() {
    let mut gallery = GalleryState::new(5);
    gallery.next();
    assert_eq!(gallery.counter_label(), "2 / 5");
    assert_eq!(gallery.len(), 5);
}

//! Keyboard routing across the carousel and several modal viewers.

use std::cell::RefCell;
use std::rc::Rc;

use crate::carousel::{Carousel, CarouselView};
use crate::keys::{KeyDispatcher, NavKey};
use crate::media::{MediaItem, MediaKind};
use crate::modal::{ModalVariant, ModalView, ModalViewer};

#[derive(Debug, Default)]
struct NullCarouselView;

impl CarouselView for NullCarouselView {
    fn clear_media(&mut self) {}
    fn show_image(&mut self, _src: &str, _alt: &str) {}
    fn show_video(&mut self, _src: &str) {}
    fn set_caption(&mut self, _title: &str, _description: &str) {}
    fn set_thumbnail_active(&mut self, _index: usize, _active: bool) {}
    fn reveal_thumbnail(&mut self, _index: usize) {}
}

#[derive(Debug, Default)]
struct OverlayLog {
    open: bool,
    playing: bool,
    counter: String,
    writes: usize,
}

impl ModalView for OverlayLog {
    fn set_open(&mut self, open: bool) {
        self.open = open;
        self.writes += 1;
    }

    fn pause_video(&mut self) {
        self.playing = false;
        self.writes += 1;
    }

    fn show_image(&mut self, _src: &str, _alt: &str) {
        self.writes += 1;
    }

    fn show_video(&mut self, _src: &str) {
        self.writes += 1;
    }

    fn set_title(&mut self, _title: &str) {
        self.writes += 1;
    }

    fn set_counter(&mut self, text: &str) {
        self.counter = text.to_string();
        self.writes += 1;
    }
}

fn items(count: usize) -> Vec<MediaItem> {
    (0..count)
        .map(|i| MediaItem::new(MediaKind::Image, format!("{}.jpg", i), i))
        .collect()
}

struct Page {
    dispatcher: KeyDispatcher,
    carousel: Rc<RefCell<Carousel<NullCarouselView>>>,
    work: Rc<RefCell<ModalViewer<OverlayLog>>>,
    talks: Rc<RefCell<ModalViewer<OverlayLog>>>,
    figure: Rc<RefCell<ModalViewer<OverlayLog>>>,
}

fn page() -> Page {
    let carousel = Rc::new(RefCell::new(
        Carousel::new(items(4), NullCarouselView).unwrap(),
    ));
    carousel.borrow_mut().render(0);

    let work = Rc::new(RefCell::new(
        ModalViewer::new("work", ModalVariant::Gallery, items(2), OverlayLog::default()).unwrap(),
    ));
    let talks = Rc::new(RefCell::new(
        ModalViewer::new("talks", ModalVariant::Gallery, items(3), OverlayLog::default()).unwrap(),
    ));
    let figure = Rc::new(RefCell::new(ModalViewer::single(
        "figure",
        MediaItem::new(MediaKind::Image, "figure.png", 0),
        OverlayLog::default(),
    )));

    let mut dispatcher = KeyDispatcher::new();
    dispatcher.register(carousel.clone());
    dispatcher.register(work.clone());
    dispatcher.register(talks.clone());
    dispatcher.register(figure.clone());

    Page {
        dispatcher,
        carousel,
        work,
        talks,
        figure,
    }
}

#[test]
fn test_escape_without_open_modal_changes_nothing() {
    let p = page();
    let writes_before: Vec<usize> = [&p.work, &p.talks, &p.figure]
        .iter()
        .map(|m| m.borrow().view().writes)
        .collect();

    assert!(!p.dispatcher.dispatch(NavKey::Escape));

    for (modal, before) in [&p.work, &p.talks, &p.figure].iter().zip(writes_before) {
        let modal = modal.borrow();
        assert!(!modal.is_open());
        assert_eq!(modal.current_index(), 0);
        assert_eq!(modal.view().writes, before);
    }
    assert_eq!(p.carousel.borrow().current_index(), 0);
}

#[test]
fn test_arrows_drive_carousel_when_no_modal_open() {
    let p = page();
    p.dispatcher.dispatch(NavKey::Left);
    assert_eq!(p.carousel.borrow().current_index(), 3);
    assert_eq!(p.work.borrow().current_index(), 0);
    assert_eq!(p.talks.borrow().current_index(), 0);
}

#[test]
fn test_only_open_modal_navigates() {
    let p = page();
    p.talks.borrow_mut().open_at(0);

    p.dispatcher.dispatch(NavKey::Right);
    assert_eq!(p.talks.borrow().current_index(), 1);
    assert_eq!(p.talks.borrow().view().counter, "2 / 3");
    assert_eq!(p.work.borrow().current_index(), 0);
    assert!(p.work.borrow().view().counter.is_empty());

    // The carousel listens globally and moves as well.
    assert_eq!(p.carousel.borrow().current_index(), 1);
}

#[test]
fn test_escape_closes_only_the_open_modal() {
    let p = page();
    p.work.borrow_mut().open_at(1);
    p.work.borrow_mut().view_mut().playing = true;

    assert!(p.dispatcher.dispatch(NavKey::Escape));
    assert!(!p.work.borrow().is_open());
    assert!(!p.work.borrow().view().open);
    assert!(!p.work.borrow().view().playing);
    assert!(!p.talks.borrow().is_open());

    // A second Escape finds nothing open.
    assert!(!p.dispatcher.dispatch(NavKey::Escape));
}

#[test]
fn test_figure_viewer_closes_on_escape_but_ignores_arrows() {
    let p = page();
    p.figure.borrow_mut().open_at(0);

    p.dispatcher.dispatch(NavKey::Right);
    assert!(p.figure.borrow().is_open());
    assert_eq!(p.figure.borrow().current_index(), 0);

    p.dispatcher.dispatch(NavKey::Escape);
    assert!(!p.figure.borrow().is_open());
}

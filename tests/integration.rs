// SPDX-License-Identifier: MPL-2.0
use iced_core::{Point, Rectangle, Size};
use lens_pager::browser::StaticBrowser;
use lens_pager::config::{self, CaptionLocation, Config, PagerOptions};
use lens_pager::media::{fulfil_load, ImageHandle, LoadState, MediaEvent, MediaType, Photo, SharedItem};
use lens_pager::pager::{PageGeometry, PagingViewport, Transition};
use std::rc::{Rc, Weak};
use std::sync::Arc;
use tempfile::tempdir;
use tokio::sync::mpsc;

fn bounds() -> Rectangle {
    Rectangle::new(Point::ORIGIN, Size::new(280.0, 400.0))
}

fn open_pager(browser: &Rc<StaticBrowser>, options: PagerOptions) -> PagingViewport {
    let host: Weak<StaticBrowser> = Rc::downgrade(browser);
    PagingViewport::new(bounds(), host, options)
}

fn collection(count: usize) -> (Vec<Arc<Photo>>, Rc<StaticBrowser>) {
    let photos: Vec<Arc<Photo>> = (0..count)
        .map(|i| Arc::new(Photo::image().with_caption(format!("Photo {i}"))))
        .collect();
    let items = photos.iter().map(|p| Arc::clone(p) as SharedItem).collect();
    (photos, Rc::new(StaticBrowser::new(items)))
}

#[test]
fn swiping_through_collection_keeps_memory_bounded() {
    let (_photos, browser) = collection(200);
    let mut pager = open_pager(&browser, PagerOptions::default());
    let geometry = PageGeometry::default();

    let mut x = 0.0;
    while x <= 199.0 * 300.0 {
        pager.set_content_offset(Point::new(x, 0.0));
        pager.tile_pages();
        let expected: Vec<usize> = geometry
            .visible_range(pager.bounds(), 200)
            .map(|range| range.collect())
            .unwrap_or_default();
        assert_eq!(pager.visible_indices(), expected, "offset {x}");
        assert!(pager.visible_indices().len() <= 2);
        assert!(pager.recycled_count(MediaType::Image) <= 2);
        x += 75.0;
    }

    assert_eq!(pager.visible_indices(), vec![199]);
}

#[test]
fn every_visible_page_shows_the_item_at_its_index() {
    let (photos, browser) = collection(20);
    let mut pager = open_pager(&browser, PagerOptions::default());

    for x in [0.0, 450.0, 3000.0, 1200.0, 5700.0] {
        pager.set_content_offset(Point::new(x, 0.0));
        pager.tile_pages();
        for (index, page) in pager.visible_pages() {
            let expected: SharedItem = photos[index].clone();
            assert!(page
                .item()
                .is_some_and(|item| lens_pager::media::same_item(item, &expected)));
            assert_eq!(page.frame(), pager.frame_for_page_at_index(index));
        }
    }
}

#[test]
fn removing_an_item_and_reloading_retiles_from_scratch() {
    let (photos, browser) = collection(5);
    let mut pager = open_pager(&browser, PagerOptions::default());
    pager.tile_pages();

    let caption = pager.delete_image();
    assert_eq!(caption.map(|c| c.text().to_string()), Some("Photo 0".to_string()));

    browser.remove_photo(0);
    pager.reload();
    pager.update_content_size();
    pager.tile_pages();

    let shown = pager.page_displayed_at_index(0).and_then(|page| page.item().cloned());
    let expected: SharedItem = photos[1].clone();
    assert!(shown.is_some_and(|item| lens_pager::media::same_item(&item, &expected)));
    assert!((pager.content_size().width - 1200.0).abs() < f32::EPSILON);
}

#[test]
fn hiding_controls_fades_every_caption() {
    let (_photos, browser) = collection(5);
    let mut pager = open_pager(&browser, PagerOptions::default());
    pager.set_content_offset(Point::new(150.0, 0.0));
    pager.tile_pages();

    browser.set_controls_hidden(true);
    let transition = pager.set_controls_hidden(true);

    assert!(matches!(transition, Transition::Fade { ref captions, .. } if captions.len() == 2));
    assert!(pager
        .caption_overlays()
        .iter()
        .all(|caption| caption.opacity().is_transparent()));
}

#[tokio::test]
async fn prefetched_neighbor_is_displayed_once_loaded() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let photos: Vec<Arc<Photo>> = (0..3)
        .map(|_| Arc::new(Photo::image().with_events(tx.clone())))
        .collect();
    let items = photos.iter().map(|p| Arc::clone(p) as SharedItem).collect();
    let browser = Rc::new(StaticBrowser::new(items).with_init_page_index(1));
    let mut pager = open_pager(&browser, PagerOptions::default());
    pager.tile_pages();

    let current: SharedItem = photos[1].clone();
    assert_eq!(pager.load_adjacent_photos_if_necessary(&current, 1), vec![0, 2]);
    assert!(matches!(rx.recv().await, Some(MediaEvent::LoadRequested(id)) if id == photos[0].id()));
    assert!(matches!(rx.recv().await, Some(MediaEvent::LoadRequested(id)) if id == photos[2].id()));

    fulfil_load(Arc::clone(&photos[2]), || {
        Ok(ImageHandle::from_rgba(560, 400, vec![0u8; 560 * 400 * 4]))
    })
    .await
    .expect("decode succeeds");
    assert!(matches!(rx.recv().await, Some(MediaEvent::Loaded(id)) if id == photos[2].id()));
    assert!(matches!(photos[2].load_state(), LoadState::Loaded(_)));

    pager.set_content_offset(Point::new(600.0, 0.0));
    pager.tile_pages();
    let page = pager.page_displayed_at_index(2).expect("page attached");
    assert!(page.displayed_image().is_some());
}

#[test]
fn pager_options_follow_saved_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let config = Config {
        display_paging_horizontal_scroll_indicator: Some(false),
        caption_location: Some(CaptionLocation::Bottom),
        prefetch_count: Some(2),
        reuse_recycled_pages: Some(false),
    };
    config::save_to_path(&config, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    let options = PagerOptions::from(&loaded);

    let (_photos, browser) = collection(3);
    let pager = open_pager(&browser, options);
    assert!(!pager.shows_horizontal_scroll_indicator());
    assert_eq!(pager.options().caption_location, CaptionLocation::Bottom);
    assert_eq!(pager.options().prefetch_count.value(), 2);
    assert!(!pager.options().reuse_recycled_pages);

    dir.close().expect("Failed to close temporary directory");
}

// SPDX-License-Identifier: MPL-2.0
//! Headless demo: scrolls a pager over a synthetic collection and reports
//! what it tiles, recycles and prefetches at each offset.

use iced_core::{Point, Rectangle, Size};
use lens_pager::browser::StaticBrowser;
use lens_pager::config::{self, PagerOptions};
use lens_pager::error::{Error, Result};
use lens_pager::media::{fulfil_load, ImageHandle, MediaEvent, MediaType, Photo, SharedItem};
use lens_pager::pager::PagingViewport;
use std::path::PathBuf;
use std::rc::{Rc, Weak};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

struct Flags {
    items: usize,
    width: f32,
    height: f32,
    video_every: Option<usize>,
    config_path: Option<PathBuf>,
    offsets: Vec<f32>,
}

fn parse_flags() -> Result<Flags> {
    let mut args = pico_args::Arguments::from_env();
    let arg_error = |err: pico_args::Error| Error::Config(err.to_string());

    let items = args.opt_value_from_str("--items").map_err(arg_error)?;
    let width = args.opt_value_from_str("--width").map_err(arg_error)?;
    let height = args.opt_value_from_str("--height").map_err(arg_error)?;
    let video_every = args
        .opt_value_from_str("--video-every")
        .map_err(arg_error)?;
    let config_path = args.opt_value_from_str("--config").map_err(arg_error)?;

    let offsets = args
        .finish()
        .into_iter()
        .map(|raw| {
            raw.to_str()
                .and_then(|s| s.parse::<f32>().ok())
                .ok_or_else(|| Error::Config(format!("invalid offset: {}", raw.to_string_lossy())))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Flags {
        items: items.unwrap_or(10),
        width: width.unwrap_or(280.0),
        height: height.unwrap_or(400.0),
        video_every: video_every.filter(|k| *k > 0),
        config_path,
        offsets,
    })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[allow(clippy::cast_possible_truncation)]
fn synthetic_image(index: usize) -> ImageHandle {
    let shade = (index % 256) as u8;
    ImageHandle::from_rgba(4, 4, vec![shade; 64])
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let flags = parse_flags()?;

    let config = match &flags.config_path {
        Some(path) => config::load_from_path(path)?,
        None => config::load()?,
    };
    let options = PagerOptions::from(&config);

    let (events, mut received) = mpsc::unbounded_channel();
    let photos: Vec<Arc<Photo>> = (0..flags.items)
        .map(|index| {
            let photo = match flags.video_every {
                Some(k) if index % k == k - 1 => Photo::video(),
                _ => Photo::image(),
            };
            Arc::new(
                photo
                    .with_caption(format!("Item {index}"))
                    .with_events(events.clone()),
            )
        })
        .collect();
    let items: Vec<SharedItem> = photos
        .iter()
        .map(|photo| Arc::clone(photo) as SharedItem)
        .collect();

    let browser = Rc::new(StaticBrowser::new(items));
    let bounds = Rectangle::new(Point::ORIGIN, Size::new(flags.width, flags.height));
    let host: Weak<StaticBrowser> = Rc::downgrade(&browser);
    let mut pager = PagingViewport::new(bounds, host, options);

    let offsets = if flags.offsets.is_empty() {
        vec![0.0]
    } else {
        flags.offsets
    };

    for offset in offsets {
        pager.set_content_offset(Point::new(offset, 0.0));
        let outcome = pager.tile_pages();

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let current = (offset / pager.page_width()).round().max(0.0) as usize;
        browser.set_current_page_index(current);

        let prefetched = photos
            .get(current)
            .map(|photo| {
                let item: SharedItem = Arc::clone(photo) as SharedItem;
                pager.load_adjacent_photos_if_necessary(&item, current)
            })
            .unwrap_or_default();

        for index in &prefetched {
            let index = *index;
            if let Some(photo) = photos.get(index) {
                if let Err(err) =
                    fulfil_load(Arc::clone(photo), move || Ok(synthetic_image(index))).await
                {
                    tracing::warn!(index, %err, "prefetch failed");
                }
            }
        }

        println!(
            "offset {offset:>8.1}: visible {:?}, attached {:?}, detached {:?}, reused {}, \
             recycled images {}, recycled videos {}, prefetched {:?}",
            pager.visible_indices(),
            outcome.attached,
            outcome.detached,
            outcome.reused,
            pager.recycled_count(MediaType::Image),
            pager.recycled_count(MediaType::Video),
            prefetched,
        );
    }

    drop(events);
    drop(photos);
    drop(pager);
    drop(browser);
    while let Some(event) = received.recv().await {
        if let MediaEvent::LoadFailed { id, message } = event {
            tracing::warn!(id = id.value(), %message, "load failed");
        }
    }

    Ok(())
}

// SPDX-License-Identifier: MPL-2.0
//! Virtualized, horizontally paged media surface.
//!
//! # Design
//!
//! - **Range-driven**: every tiling pass recomputes the visible index range
//!   from the bounds, so arbitrary jumps need no incremental bookkeeping
//! - **Bounded memory**: live pages are limited to the visible range and the
//!   recycle pool keeps at most a couple of detached pages per media kind
//! - **Kind-matched reuse**: a new index rebinds a recycled page of the
//!   same kind before constructing one
//!
//! # Usage
//!
//! ```
//! use lens_pager::browser::StaticBrowser;
//! use lens_pager::config::PagerOptions;
//! use lens_pager::media::{Photo, SharedItem};
//! use lens_pager::pager::PagingViewport;
//! use iced_core::{Point, Rectangle, Size};
//! use std::rc::{Rc, Weak};
//! use std::sync::Arc;
//!
//! let photos: Vec<SharedItem> = (0..10).map(|_| Arc::new(Photo::image()) as SharedItem).collect();
//! let browser = Rc::new(StaticBrowser::new(photos));
//! let bounds = Rectangle::new(Point::ORIGIN, Size::new(280.0, 400.0));
//! let host: Weak<StaticBrowser> = Rc::downgrade(&browser);
//! let mut pager = PagingViewport::new(bounds, host, PagerOptions::default());
//!
//! pager.tile_pages();
//! assert_eq!(pager.visible_indices(), vec![0]);
//!
//! pager.set_content_offset(Point::new(300.0, 0.0));
//! pager.tile_pages();
//! assert_eq!(pager.visible_indices(), vec![1]);
//! ```

pub mod geometry;
pub mod pool;
pub mod transition;
pub mod viewport;

pub use geometry::PageGeometry;
pub use pool::RecyclePool;
pub use transition::{TilingOutcome, Transition};
pub use viewport::PagingViewport;

// SPDX-License-Identifier: MPL-2.0
//! Pages and the overlays attached to them.
//!
//! ```text
//! factory      - item kind -> page variant
//! presentable  - PresentableView, common to every variant
//!     ├── zooming - image page (zoom bounds)
//!     └── video   - video page (playback, poster rect)
//! caption      - caption overlay positioned below a page
//! ```

pub mod caption;
pub mod factory;
pub mod presentable;
pub mod video;
pub mod zooming;

pub use caption::{CaptionId, CaptionOverlay};
pub use factory::make_presentable_view;
pub use presentable::{PageBehavior, PageId, PageVariant, PresentableView};
pub use video::VideoPage;
pub use zooming::ZoomingPage;

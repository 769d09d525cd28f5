// SPDX-License-Identifier: MPL-2.0
//! `lens_pager` is the recycling, paginated core of a photo/video browser.
//!
//! It keeps live pages only for the items overlapping a horizontally paged
//! viewport, recycles the pages that scroll away, and asks the neighbors of
//! the current item to load ahead of time.

#![doc(html_root_url = "https://docs.rs/lens_pager/0.1.0")]

pub mod browser;
pub mod config;
pub mod domain;
pub mod error;
pub mod media;
pub mod pager;
pub mod view;

#[cfg(test)]
pub(crate) mod test_utils;

// SPDX-License-Identifier: MPL-2.0
//! Bounded pool of detached pages, partitioned by media kind.

use crate::domain::media::MediaType;
use crate::view::PresentableView;
use std::collections::VecDeque;

/// Detached pages waiting to be rebound.
///
/// Pushing is unbounded; [`trim`](Self::trim) enforces the per-kind cap by
/// dropping the oldest entries. The pool only amortizes construction cost,
/// so dropping a page is always safe.
#[derive(Debug)]
pub struct RecyclePool {
    images: VecDeque<PresentableView>,
    videos: VecDeque<PresentableView>,
    per_kind: usize,
}

impl RecyclePool {
    #[must_use]
    pub fn new(per_kind: usize) -> Self {
        Self {
            images: VecDeque::new(),
            videos: VecDeque::new(),
            per_kind,
        }
    }

    #[must_use]
    pub fn capacity_per_kind(&self) -> usize {
        self.per_kind
    }

    /// Adds a detached page. The page should already be reset.
    pub fn push(&mut self, page: PresentableView) {
        self.queue_mut(page.kind()).push_back(page);
    }

    /// Keeps only the most recently pushed pages of each kind.
    /// Returns how many pages were dropped.
    pub fn trim(&mut self) -> usize {
        let per_kind = self.per_kind;
        [&mut self.images, &mut self.videos]
            .into_iter()
            .map(|queue| {
                let excess = queue.len().saturating_sub(per_kind);
                queue.drain(..excess).count()
            })
            .sum()
    }

    /// Takes the most recently recycled page of `kind`.
    pub fn take(&mut self, kind: MediaType) -> Option<PresentableView> {
        self.queue_mut(kind).pop_back()
    }

    #[must_use]
    pub fn len_of(&self, kind: MediaType) -> usize {
        self.queue(kind).len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len() + self.videos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty() && self.videos.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PresentableView> {
        self.images.iter().chain(self.videos.iter())
    }

    pub fn clear(&mut self) {
        self.images.clear();
        self.videos.clear();
    }

    fn queue(&self, kind: MediaType) -> &VecDeque<PresentableView> {
        match kind {
            MediaType::Image => &self.images,
            MediaType::Video => &self.videos,
        }
    }

    fn queue_mut(&mut self, kind: MediaType) -> &mut VecDeque<PresentableView> {
        match kind {
            MediaType::Image => &mut self.images,
            MediaType::Video => &mut self.videos,
        }
    }
}

impl Default for RecyclePool {
    fn default() -> Self {
        Self::new(crate::config::RECYCLED_PAGES_PER_KIND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{Photo, SharedItem};
    use crate::view::{make_presentable_view, PageId};
    use iced_core::{Point, Rectangle, Size};
    use std::sync::Arc;

    fn page(kind: MediaType) -> PresentableView {
        let item: SharedItem = match kind {
            MediaType::Image => Arc::new(Photo::image()),
            MediaType::Video => Arc::new(Photo::video()),
        };
        let mut page = make_presentable_view(
            item,
            Rectangle::new(Point::ORIGIN, Size::new(280.0, 400.0)),
        );
        page.prepare_for_reuse();
        page
    }

    #[test]
    fn trim_keeps_two_most_recent_per_kind() {
        let mut pool = RecyclePool::new(2);
        let images: Vec<PageId> = (0..4)
            .map(|_| {
                let p = page(MediaType::Image);
                let id = p.id();
                pool.push(p);
                id
            })
            .collect();
        pool.push(page(MediaType::Video));

        let dropped = pool.trim();

        assert_eq!(dropped, 2);
        assert_eq!(pool.len_of(MediaType::Image), 2);
        assert_eq!(pool.len_of(MediaType::Video), 1);
        let kept: Vec<PageId> = pool.iter().filter(|p| !p.is_video()).map(PresentableView::id).collect();
        assert_eq!(kept, images[2..].to_vec());
    }

    #[test]
    fn take_returns_most_recent_of_kind() {
        let mut pool = RecyclePool::new(2);
        let first = page(MediaType::Image);
        let second = page(MediaType::Image);
        let second_id = second.id();
        pool.push(first);
        pool.push(second);
        pool.push(page(MediaType::Video));

        assert_eq!(pool.take(MediaType::Image).map(|p| p.id()), Some(second_id));
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn take_from_empty_kind_is_none() {
        let mut pool = RecyclePool::new(2);
        pool.push(page(MediaType::Image));
        assert!(pool.take(MediaType::Video).is_none());
    }

    #[test]
    fn clear_empties_both_kinds() {
        let mut pool = RecyclePool::default();
        pool.push(page(MediaType::Image));
        pool.push(page(MediaType::Video));

        pool.clear();
        assert!(pool.is_empty());
        assert_eq!(pool.capacity_per_kind(), 2);
    }
}

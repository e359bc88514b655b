use tracing::{debug, warn};

use crate::config::SortableConfig;
use crate::error::Result;
use crate::event::SortEvent;
use crate::reorder::reorder_with;

#[derive(Debug, Clone)]
struct Pending<T, H> {
    items: Vec<T>,
    deselect: Vec<H>,
}

/// [SortableList] owns the sequence a drag & drop list is showing.
///
/// Completed drags are handed to [SortableList::on_update]. The new order is only queued
/// there; it replaces the published items on the next [SortableList::flush], so several
/// updates arriving in quick succession are published once. Each queued update is computed
/// against the latest queued order, never against a stale one.
///
/// # Example
/// ```rust
/// use dnd_reorder::{SortEvent, SortableConfig, SortableList};
///
/// let config = SortableConfig {
///     multi_drag: true,
///     ..Default::default()
/// };
/// let mut list = SortableList::with_config(vec!["a", "b", "c", "d", "e"], config);
///
/// list.on_update(SortEvent::multi([(0u32, 0, 3), (1u32, 1, 4)])).unwrap();
/// assert_eq!(list.items(), &["a", "b", "c", "d", "e"]);
///
/// let mut deselected = Vec::new();
/// assert!(list.flush(|handle| deselected.push(*handle)));
/// assert_eq!(list.items(), &["c", "d", "a", "b", "e"]);
/// assert_eq!(deselected, vec![0, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct SortableList<T, H> {
    items: Vec<T>,
    config: SortableConfig,
    pending: Option<Pending<T, H>>,
}

impl<T: PartialEq + Clone, H> SortableList<T, H> {
    pub fn new(items: Vec<T>) -> Self {
        Self::with_config(items, SortableConfig::default())
    }

    pub fn with_config(items: Vec<T>, config: SortableConfig) -> Self {
        Self {
            items,
            config,
            pending: None,
        }
    }

    /// The published sequence.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn config(&self) -> &SortableConfig {
        &self.config
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn latest(&self) -> &[T] {
        match &self.pending {
            Some(pending) => &pending.items,
            None => &self.items,
        }
    }

    /// The order `event` would produce, without queueing it. Useful while a drag is still in
    /// progress.
    pub fn preview(&self, event: &SortEvent<H>) -> Result<Vec<T>> {
        reorder_with(self.latest(), &event.move_request(), self.config.invalid_moves)
    }

    /// Queues the order produced by a completed drag. Nothing is published until the next
    /// [SortableList::flush]. A rejected event leaves both the published and queued order as
    /// they were.
    pub fn on_update(&mut self, event: SortEvent<H>) -> Result<()> {
        let request = event.move_request();
        let reordered = reorder_with(self.latest(), &request, self.config.invalid_moves)
            .map_err(|err| {
                warn!(%err, "rejected sort update");
                err
            })?;
        debug!(
            sources = ?request.sources(),
            destinations = ?request.destinations(),
            "queued reordered sequence"
        );

        let handles = event.into_handles();
        match &mut self.pending {
            Some(pending) => {
                pending.items = reordered;
                pending.deselect.extend(handles);
            }
            None => {
                self.pending = Some(Pending {
                    items: reordered,
                    deselect: handles,
                })
            }
        }
        Ok(())
    }

    /// Publishes the queued order. With multi-drag enabled, `deselect` is then called for every
    /// element that was part of a queued drag. Returns `false` if nothing was queued.
    pub fn flush(&mut self, mut deselect: impl FnMut(&H)) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };

        self.items = pending.items;
        if self.config.multi_drag {
            pending.deselect.iter().for_each(&mut deselect);
        }
        debug!(
            len = self.items.len(),
            deselected = ?self.config.multi_drag.then_some(pending.deselect.len()),
            "published reordered sequence"
        );
        true
    }
}

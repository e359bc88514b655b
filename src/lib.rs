//! Reordering sequences after drag & drop, including drags that move several elements at
//! once.
//!
//! [move_items] and [reorder] are the pure core. [SortableList] is a small owner for a
//! sequence that queues the results of completed drags and publishes them on demand.

pub use config::{InvalidMovePolicy, SortableConfig};
pub use error::{ReorderError, Result};
pub use event::{MultiDragIndex, SortEvent};
pub use list::SortableList;
pub use reorder::{move_items, move_items_by_key, reorder, reorder_with};
pub use request::MoveRequest;

mod config;
mod error;
mod event;
mod list;
mod reorder;
mod request;
pub mod utils;

//! A one-to-one map between two key domains.
//!
//! [`BiMap`] keeps every key of the first side paired with exactly one key of
//! the second side and the other way round. Either key finds its partner in
//! O(log n) with ordered indices or O(1) on average with hashed ones.
//!
//! ```
//! use bimap::{BiBTreeMap, Error, Side};
//!
//! let mut ports = BiBTreeMap::new();
//! assert!(ports.insert("http", 80).is_inserted());
//! assert!(ports.insert("https", 443).is_inserted());
//! // 80 is already taken, so nothing changes
//! assert!(!ports.insert("alt-http", 80).is_inserted());
//!
//! assert_eq!(ports.get_by_first("https"), Some(&443));
//! assert_eq!(ports.get_by_second(&80), Some(&"http"));
//! assert_eq!(ports.at_second(&8080), Err(Error::NotFound { side: Side::Second }));
//!
//! assert_eq!(ports.erase_by_second(&80), 1);
//! assert_eq!(ports.iter().collect::<Vec<_>>(), [(&"https", &443)]);
//! ```
//!
//! # Threads
//!
//! A map does no locking of its own. Share it between threads behind a lock,
//! for instance an `RwLock` guarding the whole map, so that inserts and
//! erasures stay exclusive.

#![forbid(unsafe_code)]

mod error;
pub mod index;
mod iter;
mod locator;
mod map;
mod side;
mod store;

pub use error::{Error, ValidationError};
pub use index::{HashedIndex, OrderedIndex};
pub use iter::{IntoIter, Iter, IterFrom};
pub use locator::{Insertion, Locator};
pub use map::{BiBTreeMap, BiHashMap, BiMap};
pub use side::{Conflict, Side};

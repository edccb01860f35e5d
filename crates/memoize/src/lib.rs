//! # memoize
//!
//! [`Memoized`] is a per-instance slot for a derived value: the first access runs the
//! computation and stores its result, every later access returns the stored value without
//! running the computation again.
//!
//! A type declares one slot per memoized attribute and routes the accessor through it:
//!
//! ```
//! use memoize::Memoized;
//!
//! struct Report {
//!     rows: Vec<u32>,
//!     total: Memoized<u32>,
//! }
//!
//! impl Report {
//!     fn total(&self) -> u32 {
//!         *self.total.get_or_init(|| self.rows.iter().sum())
//!     }
//! }
//!
//! let report = Report { rows: vec![1, 2, 3], total: Memoized::new("total") };
//! assert_eq!(report.total(), 6);
//! assert!(report.total.is_set());
//! ```
//!
//! ## Semantics
//!
//! - A hit is decided by presence of a stored value, never by the value itself: `0`, `""`,
//!   `None` or an empty collection are cached like anything else.
//! - A failed computation stores nothing, so the next access computes again.
//! - Nothing is ever invalidated. If inputs of the computation change after the first access,
//!   the slot keeps returning the old value.
//! - The check-then-set sequence takes no lock. Two first accesses racing from different
//!   threads may both run the computation; the first result stored wins and is returned to
//!   both callers.

use std::convert::Infallible;
use std::fmt;
use std::future::Future;
use std::sync::OnceLock;

use tracing::{debug, trace};

/// Memoized slot: unset until the first successful computation, then set for its lifetime.
#[derive(Clone)]
pub struct Memoized<T> {
    /// Identity of the computation, used in logs and `Debug` output.
    name: &'static str,
    slot: OnceLock<T>,
}

impl<T> Memoized<T> {
    /// Creates an unset slot for the computation called `name`.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            slot: OnceLock::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the stored value without computing.
    pub fn get(&self) -> Option<&T> {
        self.slot.get()
    }

    pub fn is_set(&self) -> bool {
        self.slot.get().is_some()
    }

    /// Returns the stored value, computing it with `f` on first access.
    pub fn get_or_init<F>(&self, f: F) -> &T
    where
        F: FnOnce() -> T,
    {
        match self.get_or_try_init(|| Ok::<T, Infallible>(f())) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    /// Returns the stored value, computing it with `f` on first access.
    ///
    /// An `Err` from `f` is returned as is and leaves the slot unset.
    pub fn get_or_try_init<F, E>(&self, f: F) -> Result<&T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        if let Some(value) = self.slot.get() {
            trace!(memo = self.name, "memo hit");
            return Ok(value);
        }
        debug!(memo = self.name, "memo miss, computing");
        let value = f()?;
        Ok(self.store(value))
    }

    /// Async form of [`Memoized::get_or_try_init`]: awaits the future produced by `f` on first
    /// access.
    pub async fn get_or_try_init_async<F, Fut, E>(&self, f: F) -> Result<&T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(value) = self.slot.get() {
            trace!(memo = self.name, "memo hit");
            return Ok(value);
        }
        debug!(memo = self.name, "memo miss, computing");
        let value = f().await?;
        Ok(self.store(value))
    }

    /// Consumes the slot, returning the stored value if any.
    pub fn into_inner(self) -> Option<T> {
        self.slot.into_inner()
    }

    fn store(&self, value: T) -> &T {
        let mut raced = true;
        let stored = self.slot.get_or_init(|| {
            raced = false;
            value
        });
        if raced {
            debug!(memo = self.name, "memo already set by a concurrent access, keeping first value");
        }
        stored
    }
}

impl<T: fmt::Debug> fmt::Debug for Memoized<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Memoized");
        s.field("name", &self.name);
        match self.slot.get() {
            Some(value) => s.field("value", value),
            None => s.field("value", &format_args!("<unset>")),
        };
        s.finish()
    }
}

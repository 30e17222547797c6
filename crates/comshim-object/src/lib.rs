//! Versioned interface-identity proxies for interception shims.
//!
//! Native object models with capability levels (COM-style driver APIs, plugin
//! ABIs) expose families of progressively more capable interfaces: version
//! `k + 1` of an interface is a strict superset of version `k`, identity
//! queries hand out whichever version the caller asks for, and object
//! lifetime is governed by a reference count the object itself owns. A shim
//! that wraps such an object must answer identity queries for *every* version
//! in the family, upgrade its wrapped handle when a caller asks for a newer
//! version than it currently holds, and decide its own lifetime by observing
//! the wrapped object's count rather than its own bookkeeping, since holders
//! that obtained the object before the shim was installed never go through
//! the proxy at all.
//!
//! [`VersionedProxy`] implements that protocol generically: a family is
//! described by a static [`InterfaceFamily`] token table (index == capability
//! level, plus always-accepted generic role identities), the wrapped object
//! is reached through the [`NativeObject`] seam, and the proxy is a single
//! tagged value (one ownership slot plus an ordinal level) rather than a
//! chain of per-version wrapper types.
//!
//! # Threading
//!
//! A proxy instance is single-threaded by construction: every mutating
//! operation takes `&mut self` and the proxy adds no locking of its own.
//! The wrapped object's counting may well be atomic internally (that is its
//! business); callers that need one proxy on several threads must serialize
//! access themselves.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use comshim_object::{
//!     Guid, InterfaceFamily, InterfaceLevel, NativeObject, ReleaseOutcome, Resolved,
//!     VersionedProxy, IID_UNKNOWN,
//! };
//!
//! const WIDGET_V0: Guid = Guid::from_u128(0xA0);
//! const WIDGET_V1: Guid = Guid::from_u128(0xA1);
//!
//! static WIDGET: InterfaceFamily = InterfaceFamily {
//!     name: "widget",
//!     generic: &[IID_UNKNOWN],
//!     versions: &[WIDGET_V0, WIDGET_V1],
//! };
//!
//! #[derive(Clone)]
//! struct Widget(Rc<Cell<u32>>);
//!
//! impl NativeObject for Widget {
//!     fn resolve_identity(&self, token: &Guid) -> Option<Self> {
//!         WIDGET.version_of(token).map(|_| {
//!             self.retain();
//!             self.clone()
//!         })
//!     }
//!     fn retain(&self) -> u32 {
//!         self.0.set(self.0.get() + 1);
//!         self.0.get()
//!     }
//!     fn release(&self) -> u32 {
//!         self.0.set(self.0.get() - 1);
//!         self.0.get()
//!     }
//! }
//!
//! // The factory hands over a retained handle at level 0.
//! let widget = Widget(Rc::new(Cell::new(1)));
//! let mut proxy = VersionedProxy::new(widget, &WIDGET, InterfaceLevel::BASE);
//!
//! // Asking for the level-1 identity upgrades the proxy in place.
//! assert!(matches!(proxy.query_identity(&WIDGET_V1), Ok(Resolved::Shim)));
//! assert_eq!(proxy.level(), InterfaceLevel(1));
//!
//! // The wrapped object's count, not the local one, decides destruction.
//! assert!(matches!(
//!     proxy.release(),
//!     ReleaseOutcome::Alive { wrapped_refs: 1 }
//! ));
//! assert!(matches!(
//!     proxy.release(),
//!     ReleaseOutcome::Destroyed { local_refs: -1 }
//! ));
//! ```

mod error;
mod family;
mod guid;
mod proxy;

pub use error::{IdentityError, Result};
pub use family::{InterfaceFamily, InterfaceLevel};
pub use guid::{Guid, IID_UNKNOWN};
pub use proxy::{NativeObject, ReleaseOutcome, Resolved, VersionedProxy};

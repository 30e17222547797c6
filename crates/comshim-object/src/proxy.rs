use tracing::{debug, warn};

use crate::error::{IdentityError, Result};
use crate::family::{InterfaceFamily, InterfaceLevel};
use crate::guid::Guid;

/// Collaborator seam to the underlying native object.
///
/// Implementations are opaque, level-agnostic handles (the proxy tracks the
/// capability level, not the handle). Handles are plain values with explicit
/// counting: dropping one has no effect on the object's shared count, exactly
/// like letting a raw COM pointer go out of scope.
pub trait NativeObject: Sized {
    /// Asks the object to resolve `token` to a new, already-retained handle.
    ///
    /// Returns `None` when the object does not support that identity. This is
    /// the only point where the wrapped object's own identity resolution is
    /// invoked.
    fn resolve_identity(&self, token: &Guid) -> Option<Self>;

    /// Increments the object's shared reference count; returns the
    /// post-increment count.
    fn retain(&self) -> u32;

    /// Decrements the object's shared reference count; returns the
    /// post-decrement count. A return of 0 means the object has been torn
    /// down and this handle must not be used again.
    fn release(&self) -> u32;
}

/// Successful outcome of [`VersionedProxy::query_identity`].
#[derive(Debug)]
pub enum Resolved<T> {
    /// The proxy itself answers for the requested identity. The acquire
    /// count has already been incremented; the caller keeps using the proxy
    /// it already holds (upgraded in place if the identity demanded it).
    Shim,
    /// An identity outside the proxy's family, resolved by the wrapped
    /// object and returned untouched.
    Native(T),
}

/// Outcome of [`VersionedProxy::release`].
#[derive(Debug, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// The wrapped object still has holders; the proxy stays alive even if
    /// the local use count reached zero (someone else may hold the wrapped
    /// object directly, bypassing the proxy).
    Alive { wrapped_refs: u32 },
    /// The wrapped object's count reached zero. The proxy is defunct and its
    /// owner must drop it; no further operation may be invoked on it.
    /// `local_refs` carries whatever the local use count was at that moment
    /// (positive values indicate acquire/release drift and have already been
    /// reported through the diagnostic sink).
    Destroyed { local_refs: i32 },
}

/// Identity proxy over one member of a versioned native interface family.
///
/// Holds exactly one live handle to the wrapped object plus the capability
/// level that handle was resolved at. Identity queries for family members
/// above the current level upgrade the proxy in place (handle swapped, level
/// raised); the level never moves backward. Lifetime is decided by the
/// wrapped object's own reference count, not the local use count, which is
/// diagnostic only. See the crate docs for the threading contract.
pub struct VersionedProxy<T: NativeObject> {
    raw: T,
    family: &'static InterfaceFamily,
    level: InterfaceLevel,
    local_refs: i32,
}

impl<T: NativeObject> VersionedProxy<T> {
    /// Wraps `raw`, which the factory already resolved at `level`.
    ///
    /// The proxy takes over the factory's reference: `raw` must be retained
    /// for the proxy, and the proxy releases it on upgrade.
    pub fn new(raw: T, family: &'static InterfaceFamily, level: InterfaceLevel) -> Self {
        debug_assert!(level <= family.max_level());
        Self {
            raw,
            family,
            level,
            local_refs: 0,
        }
    }

    /// Capability level the proxy currently presents.
    pub fn level(&self) -> InterfaceLevel {
        self.level
    }

    /// Diagnostic count of acquisitions made through the proxy itself.
    pub fn local_refs(&self) -> i32 {
        self.local_refs
    }

    /// The wrapped handle, for forwarding baseline (level 0) operations.
    pub fn raw(&self) -> &T {
        &self.raw
    }

    /// The wrapped handle, for forwarding an operation introduced at `min`.
    ///
    /// # Panics
    ///
    /// Panics if the proxy's current level is below `min`. That is a
    /// programming error in the calling shim (it skipped the mandatory
    /// upgrade through [`Self::query_identity`]), not a recoverable
    /// condition, so no error path is offered.
    pub fn raw_at_least(&self, min: InterfaceLevel) -> &T {
        assert!(
            self.level >= min,
            "{} level {} operation invoked on a level {} proxy",
            self.family.name,
            min,
            self.level,
        );
        &self.raw
    }

    /// Answers an identity query, upgrading the wrapped handle when `token`
    /// names a family member above the current level.
    ///
    /// Generic role identities and family identities at or below the current
    /// level succeed in place. Family identities above the current level
    /// succeed only if the wrapped object can produce them; the jump goes
    /// directly to the requested level (never step-by-step) and each level is
    /// resolved at most once over the proxy's lifetime. Identities outside
    /// the family are forwarded to the wrapped object verbatim and its
    /// answer returned untouched.
    ///
    /// On `Ok(Resolved::Shim)` the acquire count has been incremented, same
    /// as a successful native identity query.
    pub fn query_identity(&mut self, token: &Guid) -> Result<Resolved<T>> {
        if self.family.is_generic(token) {
            self.acquire();
            return Ok(Resolved::Shim);
        }

        match self.family.version_of(token) {
            Some(requested) => {
                // Requests at or below the current level never re-resolve;
                // the protocol stays monotonic and idempotent.
                if requested > self.level && !self.upgrade_to(requested, token) {
                    return Err(IdentityError::NotSupported(*token));
                }
                self.acquire();
                Ok(Resolved::Shim)
            }
            None => match self.raw.resolve_identity(token) {
                Some(native) => Ok(Resolved::Native(native)),
                None => Err(IdentityError::NotSupported(*token)),
            },
        }
    }

    /// Swaps in a handle at `requested`, releasing the old one. Returns
    /// false (with no state change) if the wrapped object cannot produce the
    /// requested identity: a requested-but-unavailable higher capability is
    /// an outright failure, never a fallback to the old level.
    fn upgrade_to(&mut self, requested: InterfaceLevel, token: &Guid) -> bool {
        debug_assert!(requested > self.level);
        let Some(upgraded) = self.raw.resolve_identity(token) else {
            return false;
        };
        debug!(
            family = self.family.name,
            from = self.level.0,
            to = requested.0,
            "upgraded wrapped interface"
        );
        self.raw.release();
        self.raw = upgraded;
        self.level = requested;
        true
    }

    /// Acquires the proxy: bumps the local use count and the wrapped
    /// object's own count. Returns the wrapped object's post-increment
    /// count.
    pub fn acquire(&mut self) -> u32 {
        self.local_refs += 1;
        self.raw.retain()
    }

    /// Releases the proxy, deferring the liveness decision to the wrapped
    /// object's count: the proxy survives while that count is nonzero, no
    /// matter what the local count says, and is destroyed exactly when it
    /// reaches zero. On [`ReleaseOutcome::Destroyed`] the wrapped handle is
    /// already dead (its count is zero) and the owner must drop the proxy.
    pub fn release(&mut self) -> ReleaseOutcome {
        self.local_refs -= 1;
        let wrapped_refs = self.raw.release();
        if wrapped_refs != 0 {
            return ReleaseOutcome::Alive { wrapped_refs };
        }

        if self.local_refs > 0 {
            warn!(
                family = self.family.name,
                level = self.level.0,
                local_refs = self.local_refs,
                "wrapped object released to zero while proxy acquisitions are outstanding"
            );
        }
        debug!(
            family = self.family.name,
            level = self.level.0,
            "destroyed interface proxy"
        );
        ReleaseOutcome::Destroyed {
            local_refs: self.local_refs,
        }
    }
}

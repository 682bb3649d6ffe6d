use crate::error::ResolveError;
use crate::request::ResolutionRequest;
use crate::resolver::{Installation, Resolver};
use std::collections::HashMap;

/// Result of [`find_installation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(Installation),
    NotFound,
    /// Not found, and the caller asked for a disabler in place of a
    /// missing installation.
    Disabler,
}

impl Lookup {
    /// The installation when one was found, `None` for both absent outcomes.
    pub fn installation(&self) -> Option<&Installation> {
        match self {
            Lookup::Found(i) => Some(i),
            _ => None,
        }
    }
}

/// Caller-owned memo of successful resolutions, keyed by package name.
#[derive(Debug, Default, Clone)]
pub struct InstallationCache {
    entries: HashMap<String, Installation>,
}

impl InstallationCache {
    /// An empty cache; the caller decides how long it lives.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached installation for `package`, regardless of which modules it verified.
    pub fn get(&self, package: &str) -> Option<&Installation> {
        self.entries.get(package)
    }

    /// Store a successful resolution, replacing any earlier entry.
    pub fn insert(&mut self, package: impl Into<String>, installation: Installation) {
        self.entries.insert(package.into(), installation);
    }

    /// Number of cached packages.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// No package has resolved yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolve `request`, reusing a cached installation when it already
/// verified every requested module.
///
/// Flow:
/// 1. Cache hit covering the requested modules: return it, no lookup.
/// 2. Otherwise resolve and cache a success.
/// 3. Map an absent result to `Disabler` or `NotFound`.
///
/// # Boundaries
/// - Only successes are cached; a later call for an absent package
///   searches again.
/// - Required failures propagate unchanged, disabler or not.
pub fn find_installation(
    resolver: &Resolver<'_>,
    cache: &mut InstallationCache,
    request: &ResolutionRequest,
) -> Result<Lookup, ResolveError> {
    if let Some(hit) = cache.get(request.package()) {
        if hit.provides(request.modules()) {
            return Ok(Lookup::Found(hit.clone()));
        }
    }

    match resolver.resolve(request)? {
        Some(installation) => {
            cache.insert(request.package(), installation.clone());
            Ok(Lookup::Found(installation))
        }
        None if request.disabler() => Ok(Lookup::Disabler),
        None => Ok(Lookup::NotFound),
    }
}

//! Weighted consistent hashing ("ketama"): register weighted servers,
//! build the continuum once, then map arbitrary keys to the owning
//! server. Built rings are immutable; new membership means a new ring
//! the caller swaps in.

mod continuum;
mod error;
pub mod hash;
mod registry;

pub use continuum::{Continuum, Point};
pub use error::{Error, Result};
pub use hash::key_hash32;
pub use registry::{Registry, Server, MAX_ADDR_LEN};

#[derive(Debug, Default)]
pub struct Ketama {
    registry: Registry,
    continuum: Option<Continuum>,
}

impl Ketama {
    pub fn new() -> Self {
        Default::default()
    }

    /// Registers one `host:port` with a weight > 0. Refused once built.
    pub fn add_server(&mut self, host: &str, port: u16, weight: u64) -> Result<()> {
        if self.continuum.is_some() {
            return Err(Error::AlreadyBuilt);
        }
        self.registry.add(host, port, weight)
    }

    /// Constructs the continuum. Callable exactly once.
    pub fn build(&mut self) -> Result<()> {
        if self.continuum.is_some() {
            return Err(Error::AlreadyBuilt);
        }
        if self.registry.is_empty() {
            return Err(Error::NoServers);
        }
        let continuum = Continuum::build(&self.registry);
        log::debug!(
            "continuum built: {} servers, total weight {}, {} points",
            self.registry.len(),
            self.registry.total_weight(),
            continuum.len()
        );
        self.continuum = Some(continuum);
        Ok(())
    }

    /// Owning server of `key`, as its `"host:port"` string.
    #[inline]
    pub fn lookup(&self, key: &[u8]) -> Result<&str> {
        self.lookup_hash(hash::key_hash32(key))
    }

    /// Hash-level lookup seam; `lookup` is `lookup_hash(key_hash32(key))`.
    #[inline]
    pub fn lookup_hash(&self, hash: u32) -> Result<&str> {
        match &self.continuum {
            Some(c) => Ok(c.locate(hash).addr()),
            None => Err(Error::NotBuilt),
        }
    }

    #[inline]
    pub fn server_count(&self) -> usize {
        self.registry.len()
    }
    #[inline]
    pub fn total_weight(&self) -> u64 {
        self.registry.total_weight()
    }
    #[inline]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
    #[inline]
    pub fn continuum(&self) -> Option<&Continuum> {
        self.continuum.as_ref()
    }
}

use crate::error::{Error, Result};

/// Longest supported `"host:port"` string, in bytes.
pub const MAX_ADDR_LEN: usize = 21;

#[derive(Debug, Clone)]
pub struct Server {
    addr: String,
    weight: u64,
}

impl Server {
    #[inline]
    pub fn addr(&self) -> &str {
        &self.addr
    }
    #[inline]
    pub fn weight(&self) -> u64 {
        self.weight
    }
}

/// Ordered `(address, weight)` entries plus the running weight total.
/// Append-only; membership changes mean a fresh registry.
#[derive(Debug, Default)]
pub struct Registry {
    servers: Vec<Server>,
    total_weight: u64,
}

impl Registry {
    pub(crate) fn add(&mut self, host: &str, port: u16, weight: u64) -> Result<()> {
        if weight == 0 {
            return Err(Error::InvalidWeight);
        }
        let addr = format!("{}:{}", host, port);
        if addr.len() > MAX_ADDR_LEN {
            return Err(Error::InvalidWeight);
        }
        self.total_weight += weight;
        self.servers.push(Server { addr, weight });
        Ok(())
    }
    #[inline]
    pub fn servers(&self) -> &[Server] {
        &self.servers
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.servers.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }
    #[inline]
    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }
}

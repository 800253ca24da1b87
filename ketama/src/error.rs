#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    // build called with an empty registry
    NoServers,
    // second build, or add_server once the continuum exists
    AlreadyBuilt,
    // lookup before a successful build
    NotBuilt,
    // zero weight, or formatted address longer than MAX_ADDR_LEN
    InvalidWeight,
}

impl std::error::Error for Error {}
use std::fmt::{self, Display, Formatter};
impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("floor {0} is not modelled, only 0 (ground) and 1 (first) exist")]
    UnsupportedFloor(u8),
}

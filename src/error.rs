use thiserror::Error;

use crate::resources::ResourceId;

/// Failures of the host services the watchface depends on.
///
/// None of these are recoverable on the watch: the firmware halts on them.
#[derive(Error, Debug)]
pub enum Error {
    #[error("resource {0:?} could not be decoded: {1:?}")]
    ResourceDecode(ResourceId, tinybmp::ParseError),

    #[error("watchface window is already loaded")]
    AlreadyLoaded,
}

pub type Result<T> = core::result::Result<T, Error>;

pub use crate::error::{BoxError, Error, ErrorKind, SsResult};
pub use crate::raw_value::{ConfigMap, RawValue};
pub use crate::types::Timestamp;

pub use tracing::{debug, error, info, trace, warn};

// vim: ts=4

use thiserror::Error;

use crate::models::phase::Phase;
use crate::models::question::TargetField;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("assessment is already complete")]
    AlreadyComplete,

    #[error("value for {got:?} does not belong to phase {expected}")]
    FieldMismatch { expected: Phase, got: TargetField },
}

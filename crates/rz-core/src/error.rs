//! Error types for the character document model.

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when manipulating a character record.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A skill name is not part of the fixed skill list.
    #[error("unknown skill: \"{0}\"")]
    UnknownSkill(String),

    /// A gear index does not refer to an existing entry.
    #[error("gear index {index} out of range (have {len} entries)")]
    GearIndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of gear entries at the time of the call.
        len: usize,
    },
}

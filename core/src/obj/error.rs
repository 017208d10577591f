//! Error types for OBJ parsing.

/// Errors that can occur while parsing an OBJ resource.
///
/// All variants are fatal: the parser stops at the first malformed line
/// and no partial mesh is returned. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjError {
    /// A numeric token could not be parsed.
    InvalidNumber {
        /// Source line number.
        line: usize,
        /// The offending token.
        token: String,
    },
    /// A `v`, `vn`, or `f` line has fewer fields than required.
    MissingFields {
        /// Source line number.
        line: usize,
        /// The line keyword (`v`, `vn`, or `f`).
        keyword: String,
    },
    /// A face corner references a position that has not been declared.
    PositionOutOfRange {
        /// Source line number.
        line: usize,
        /// The 1-based index as written in the file.
        index: usize,
        /// Number of positions declared so far.
        declared: usize,
    },
    /// A face corner references a normal that has not been declared.
    NormalOutOfRange {
        /// Source line number.
        line: usize,
        /// The 1-based index as written in the file.
        index: usize,
        /// Number of normals declared so far.
        declared: usize,
    },
}

impl std::fmt::Display for ObjError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidNumber { line, token } => {
                write!(f, "line {line}: invalid numeric token '{token}'")
            }
            Self::MissingFields { line, keyword } => {
                write!(f, "line {line}: '{keyword}' line has too few fields")
            }
            Self::PositionOutOfRange {
                line,
                index,
                declared,
            } => write!(
                f,
                "line {line}: position index {index} out of range ({declared} declared)"
            ),
            Self::NormalOutOfRange {
                line,
                index,
                declared,
            } => write!(
                f,
                "line {line}: normal index {index} out of range ({declared} declared)"
            ),
        }
    }
}

impl std::error::Error for ObjError {}

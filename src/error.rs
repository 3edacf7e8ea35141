//! Crate-level error types.

use std::fmt;

/// Which attribute table a face corner indexes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    /// `v` records.
    Position,
    /// `vt` records.
    TexCoord,
    /// `vn` records.
    Normal,
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Position => "position",
            Self::TexCoord => "texture coordinate",
            Self::Normal => "normal",
        };
        f.write_str(name)
    }
}

/// What went wrong while reading a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A `v`, `vt` or `vn` record with too few or unparsable components.
    MalformedRecord {
        /// Record tag (`v`, `vt`, `vn`).
        tag: String,
        /// Minimum number of float components the tag requires.
        expected: usize,
    },
    /// A face record with other than three corners.
    FaceArity {
        /// Number of corners found on the line.
        corners: usize,
    },
    /// A face corner that is not `pos/tex/norm` with three integer indices.
    MalformedCorner {
        /// The offending corner text.
        corner: String,
    },
    /// A 1-based face index that does not name an existing table entry.
    IndexOutOfRange {
        /// Table the index points into.
        attribute: Attribute,
        /// The index as written in the source (1-based).
        index: usize,
        /// Number of entries in that table.
        len: usize,
    },
}

/// A fatal model parse failure, tagged with the 1-based source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Line the failing record was read from.
    pub line: usize,
    /// Failure category.
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(line: usize, kind: ParseErrorKind) -> Self {
        Self { line, kind }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: ", self.line)?;
        match &self.kind {
            ParseErrorKind::MalformedRecord { tag, expected } => {
                write!(f, "`{tag}` record needs {expected} numeric components")
            }
            ParseErrorKind::FaceArity { corners } => write!(
                f,
                "face has {corners} corners, only triangles are supported"
            ),
            ParseErrorKind::MalformedCorner { corner } => write!(
                f,
                "face corner `{corner}` is not of the form pos/tex/norm"
            ),
            ParseErrorKind::IndexOutOfRange {
                attribute,
                index,
                len,
            } => write!(
                f,
                "{attribute} index {index} out of range (have {len})"
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Errors produced by the meshcam crate.
#[derive(Debug)]
pub enum MeshcamError {
    /// The model text could not be parsed or resolved.
    Parse(ParseError),
    /// Generic I/O failure (unreadable or non-UTF-8 source).
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// More unique vertices than a 32-bit index buffer can address.
    IndexOverflow,
}

impl fmt::Display for MeshcamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "model parse error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::IndexOverflow => f.write_str(
                "mesh has more unique vertices than 32-bit indices can address",
            ),
        }
    }
}

impl std::error::Error for MeshcamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) | Self::IndexOverflow => None,
        }
    }
}

impl From<ParseError> for MeshcamError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<std::io::Error> for MeshcamError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

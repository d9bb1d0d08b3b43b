//! Error taxonomy for tessellation

/// Tessellation error
///
/// Topology errors are fatal for the shape being tessellated: no partial
/// mesh is produced, and retrying the same input reproduces the failure.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TessellationError {
    /// A hole's rightward ray crossed no outer edge, so nothing encloses it
    #[error("hole anchored at ({x}, {y}) is not enclosed by any outer contour")]
    UnenclosedHole { x: f64, y: f64 },

    /// Ear clipping ran out of ears before the polygon was reduced to a triangle
    #[error("no ear found with {remaining} vertices left; polygon is not simple")]
    NoEarFound { remaining: usize },

    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

impl TessellationError {
    /// True for errors caused by malformed outline topology rather than by
    /// the caller's configuration
    pub fn is_topology_error(&self) -> bool {
        matches!(
            self,
            TessellationError::UnenclosedHole { .. } | TessellationError::NoEarFound { .. }
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ColorError {
    #[error("invalid color: {0}")]
    InvalidColor(String),
}

#[derive(Debug, thiserror::Error)]
pub enum FigureError {
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error("column count must be positive")]
    InvalidColumnCount,
}

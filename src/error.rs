use std::path::PathBuf;

/// Errors raised while building a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid cell value {value} at ({row}, {col}), expected 0, 1 or 2")]
    InvalidCell { row: usize, col: usize, value: u8 },

    #[error("board has {found} rows, expected {expected}")]
    RowCount { expected: usize, found: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("column {col} is out of range for a board {width} wide")]
    InvalidColumn { col: usize, width: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_display() {
        let err = BoardError::RowLength {
            row: 3,
            expected: 7,
            found: 6,
        };
        assert_eq!(err.to_string(), "row 3 has 6 cells, expected 7");
    }

    #[test]
    fn test_invalid_cell_display() {
        let err = BoardError::InvalidCell {
            row: 0,
            col: 2,
            value: 9,
        };
        assert_eq!(
            err.to_string(),
            "invalid cell value 9 at (0, 2), expected 0, 1 or 2"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("display.empty must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: display.empty must not be empty"
        );
    }
}

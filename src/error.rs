use thiserror::Error;

#[derive(Error, Debug)]
pub enum CircularError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
    #[error("Impossible de trouver le nombre de pages: {0}")]
    PageCount(String),
    #[error("Malformed row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, CircularError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_use_display_text() {
        let err = CircularError::PageCount("no page info cell".to_string());
        assert_eq!(
            err.to_string(),
            "Impossible de trouver le nombre de pages: no page info cell"
        );

        let err = CircularError::MalformedRow {
            row: 3,
            reason: "store cell has no link".to_string(),
        };
        assert_eq!(err.to_string(), "Malformed row 3: store cell has no link");
        assert!(!err.to_string().contains("MalformedRow"));
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Illegal contact: {0}")]
    IllegalContact(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("No contact ids left to issue")]
    IdsExhausted,

    #[error("Invalid JSON data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid CSV data: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid socket address: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("Invalid url: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Request failed: {0}")]
    FailedRequest(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_not_found_message() {
        let err = AppError::NotFound("Contact '7'".to_string());

        assert_eq!(format!("{}", err), "Contact '7' not found");
    }

    #[test]
    fn confirm_illegal_contact_message() {
        let err = AppError::IllegalContact("id mismatch".to_string());

        assert_eq!(format!("{}", err), "Illegal contact: id mismatch");
    }

    #[test]
    fn confirm_ids_exhausted_message() {
        assert_eq!(
            format!("{}", AppError::IdsExhausted),
            "No contact ids left to issue"
        );
    }

    #[test]
    fn confirm_parse_errors_convert() {
        let addr_err = "not-an-address"
            .parse::<std::net::SocketAddr>()
            .unwrap_err();
        let err: AppError = addr_err.into();
        assert!(format!("{}", err).contains("Invalid socket address: "));

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: AppError = json_err.into();
        assert!(matches!(err, AppError::Json(_)));
    }
}

#[cfg(test)]
pub mod fixtures {
    use crate::models::dto::request::SyllabusRequest;

    pub const SQL_SYLLABUS: &str =
        "1. Introduction\n- basics\n- overview\n2. SQL\n- SELECT, WHERE";

    /// Two-topic database syllabus used across service and handler tests
    pub fn sql_syllabus_request() -> SyllabusRequest {
        SyllabusRequest {
            syllabus_text: SQL_SYLLABUS.to_string(),
        }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_sql_syllabus_request() {
        let request = sql_syllabus_request();
        assert_eq!(request.syllabus_text, SQL_SYLLABUS);
        assert_eq!(request.syllabus_text.lines().count(), 5);
    }
}

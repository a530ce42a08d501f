use crate::data::RequestOutcome;

/// Turn the result of a content-type query into an outcome.
///
/// Only called after a completed transfer. A failed query, an absent header
/// and a blank header all mean the same thing to the caller.
///
/// # Examples
///
/// ```
/// use ctprobe_fetch::{FetchError, Status, classify_content_type};
///
/// let outcome = classify_content_type::<FetchError>(Ok(Some("application/json")));
/// assert_eq!(outcome.content_type(), Some("application/json"));
///
/// let outcome = classify_content_type(Err(FetchError::NotPerformed));
/// assert_eq!(outcome.status(), Status::NoContentType);
/// ```
pub fn classify_content_type<E>(query: Result<Option<&str>, E>) -> RequestOutcome {
    match query {
        Ok(Some(value)) => RequestOutcome::success(value),
        Ok(None) | Err(_) => RequestOutcome::no_content_type(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Status;
    use crate::error::FetchError;

    #[test]
    fn test_present_value_is_success() {
        let outcome = classify_content_type::<FetchError>(Ok(Some("text/plain")));
        assert_eq!(outcome.status(), Status::Success);
        assert_eq!(outcome.content_type(), Some("text/plain"));
    }

    #[test]
    fn test_absent_value() {
        let outcome = classify_content_type::<FetchError>(Ok(None));
        assert_eq!(outcome, RequestOutcome::no_content_type());
    }

    #[test]
    fn test_empty_value() {
        let outcome = classify_content_type::<FetchError>(Ok(Some("")));
        assert_eq!(outcome, RequestOutcome::no_content_type());
    }

    #[test]
    fn test_failed_query() {
        let outcome = classify_content_type(Err(FetchError::NotPerformed));
        assert_eq!(outcome, RequestOutcome::no_content_type());
    }
}

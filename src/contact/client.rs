use gloo_net::http::Request;
use thiserror::Error;

use super::form::FormState;

/// A contact message was not accepted by the intake endpoint, for whatever
/// reason. The detail is only for the log.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("contact submission failed: {0}")]
pub struct SubmissionFailed(pub String);

pub fn check_status(status: u16) -> Result<(), SubmissionFailed> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmissionFailed(format!("endpoint answered with status {}", status)))
    }
}

/// POSTs the form as JSON. The response body is ignored.
pub async fn send_contact(endpoint: &str, fields: &FormState) -> Result<(), SubmissionFailed> {
    let request = Request::post(endpoint)
        .header("Content-Type", "application/json")
        .json(fields)
        .map_err(|e| SubmissionFailed(format!("could not encode request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| SubmissionFailed(format!("request failed: {}", e)))?;

    check_status(response.status())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_2xx_is_accepted() {
        for status in [200, 201, 202, 204, 299] {
            assert_eq!(check_status(status), Ok(()));
        }
    }

    #[test]
    fn everything_else_is_rejected() {
        for status in [0, 100, 199, 300, 302, 400, 404, 422, 500, 503] {
            assert!(check_status(status).is_err(), "status {} accepted", status);
        }
    }

    #[test]
    fn rejection_names_the_status() {
        assert_eq!(
            check_status(500).unwrap_err().to_string(),
            "contact submission failed: endpoint answered with status 500"
        );
    }
}

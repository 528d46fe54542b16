//! Request extractors.

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::error::ApiError;

/// JSON body that has passed `validator` checks.
///
/// Malformed JSON and failed field rules are both reported as 422
/// `VALIDATION_ERROR`.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::validation(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| ApiError::validation(describe(&errors)))?;

        Ok(Self(value))
    }
}

/// Flattens field errors into `field: reason; field: reason`, sorted by field.
fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |e| {
                let reason = e
                    .message
                    .as_ref()
                    .map_or_else(|| e.code.to_string(), ToString::to_string);
                format!("{field}: {reason}")
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{StatusCode, header};
    use axum::response::IntoResponse;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Contact {
        #[validate(length(min = 1, max = 60))]
        name: String,
        #[validate(email)]
        email: String,
    }

    fn json_request(body: &str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_accepts_valid_body() {
        let ValidatedJson(contact) = ValidatedJson::<Contact>::from_request(
            json_request(r#"{"name":"Marta","email":"marta@example.com"}"#),
            &(),
        )
        .await
        .unwrap();

        assert_eq!(contact.name, "Marta");
        assert_eq!(contact.email, "marta@example.com");
    }

    #[tokio::test]
    async fn test_rejects_invalid_email() {
        let err = ValidatedJson::<Contact>::from_request(
            json_request(r#"{"name":"Marta","email":"not-an-email"}"#),
            &(),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(err.0.message().starts_with("email:"));
    }

    #[tokio::test]
    async fn test_rejects_missing_field() {
        let err = ValidatedJson::<Contact>::from_request(json_request(r#"{"name":"Marta"}"#), &())
            .await
            .unwrap_err();

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_describe_sorts_fields() {
        let contact = Contact {
            name: String::new(),
            email: "nope".to_string(),
        };
        let errors = contact.validate().unwrap_err();

        assert_eq!(describe(&errors), "email: email; name: length");
    }
}

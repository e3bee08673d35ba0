//! Projects backend and contact form
//!
//! Payload shapes and validation are plain serde types. Network calls use the
//! browser `fetch` and only exist on wasm.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Portfolio backend
pub const API_BASE_URL: &str = "http://localhost:8080/api/v1";
/// Project list endpoint, relative to [`API_BASE_URL`]
pub const PROJECTS_PATH: &str = "/projects";
/// Mail relay the contact form posts to
pub const CONTACT_WORKER_URL: &str = "https://portfolio-email-sender.saayush97.workers.dev";
/// Shown when the relay gives no usable reason
pub const DEFAULT_FAILURE_MESSAGE: &str = "An error occurred. Please try again.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("malformed response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{0}")]
    Rejected(String),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// A portfolio project card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub repo_url: String,
    pub live_url: String,
}

pub fn parse_projects(json: &str) -> Result<Vec<Project>, ApiError> {
    Ok(serde_json::from_str(json)?)
}

pub fn projects_url() -> String {
    format!("{API_BASE_URL}{PROJECTS_PATH}")
}

/// Contact form fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ContactPayload<'a> {
    form_data: &'a ContactMessage,
}

impl ContactMessage {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    /// Every field must be non-blank
    pub fn validate(&self) -> Result<(), ContactError> {
        let fields = [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        Ok(())
    }

    /// Request body: `{"formData": {...}}`
    pub fn payload(&self) -> Result<String, ApiError> {
        Ok(serde_json::to_string(&ContactPayload { form_data: self })?)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Reason text from a failed relay response
pub fn failure_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message")?.as_str().map(str::to_string))
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string())
}

#[cfg(target_arch = "wasm32")]
pub use web::{fetch_projects, send_contact};

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    use super::*;

    fn js_error(value: JsValue) -> ApiError {
        ApiError::Network(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }

    async fn send(url: &str, method: &str, body: Option<&str>) -> Result<Response, ApiError> {
        let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".into()))?;

        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);
        if let Some(body) = body {
            opts.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_error)?;

        let value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?;
        value.dyn_into::<Response>().map_err(js_error)
    }

    async fn body_text(response: &Response) -> Result<String, ApiError> {
        let promise = response.text().map_err(js_error)?;
        let text = JsFuture::from(promise).await.map_err(js_error)?;
        Ok(text.as_string().unwrap_or_default())
    }

    /// GET the project list
    pub async fn fetch_projects() -> Result<Vec<Project>, ApiError> {
        let response = send(&projects_url(), "GET", None).await?;
        if !response.ok() {
            let body = body_text(&response).await.unwrap_or_default();
            return Err(ApiError::Status {
                status: response.status(),
                message: failure_message(&body),
            });
        }
        let projects = parse_projects(&body_text(&response).await?)?;
        log::info!("Loaded {} projects", projects.len());
        Ok(projects)
    }

    /// POST the contact form to the mail relay
    pub async fn send_contact(message: &ContactMessage) -> Result<(), ContactError> {
        message.validate()?;
        let response = send(CONTACT_WORKER_URL, "POST", Some(&message.payload()?)).await?;
        if !response.ok() {
            let body = body_text(&response).await.unwrap_or_default();
            return Err(ContactError::Rejected(failure_message(&body)));
        }
        log::info!("Contact message sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_projects_camel_case() {
        let json = r#"[{
            "id": 7,
            "title": "Arcade",
            "description": "Retro portfolio",
            "imageUrl": "https://img/7.png",
            "repoUrl": "https://git/7",
            "liveUrl": "https://live/7"
        }]"#;
        let projects = parse_projects(json).unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].id, 7);
        assert_eq!(projects[0].image_url, "https://img/7.png");
        assert_eq!(projects[0].live_url, "https://live/7");
    }

    #[test]
    fn test_parse_projects_rejects_malformed() {
        assert!(matches!(parse_projects("{"), Err(ApiError::Json(_))));
        assert!(parse_projects(r#"[{"id": 1}]"#).is_err());
        assert!(parse_projects("[]").unwrap().is_empty());
    }

    #[test]
    fn test_projects_url() {
        assert_eq!(projects_url(), "http://localhost:8080/api/v1/projects");
    }

    #[test]
    fn test_contact_validation() {
        let ok = ContactMessage::new("Ada", "ada@example.com", "Hello");
        assert!(ok.validate().is_ok());

        let blank = ContactMessage::new("Ada", "   ", "Hello");
        assert!(matches!(blank.validate(), Err(ContactError::MissingField("email"))));

        let empty = ContactMessage::default();
        assert!(matches!(empty.validate(), Err(ContactError::MissingField("name"))));
    }

    #[test]
    fn test_contact_payload_shape() {
        let msg = ContactMessage::new("Ada", "ada@example.com", "Hi there");
        let value: serde_json::Value = serde_json::from_str(&msg.payload().unwrap()).unwrap();
        assert_eq!(value["formData"]["name"], "Ada");
        assert_eq!(value["formData"]["email"], "ada@example.com");
        assert_eq!(value["formData"]["message"], "Hi there");
    }

    #[test]
    fn test_failure_message() {
        assert_eq!(failure_message(r#"{"message":"Rate limited"}"#), "Rate limited");
        assert_eq!(failure_message(r#"{"message":""}"#), DEFAULT_FAILURE_MESSAGE);
        assert_eq!(failure_message(r#"{"error":"x"}"#), DEFAULT_FAILURE_MESSAGE);
        assert_eq!(failure_message("<html>502</html>"), DEFAULT_FAILURE_MESSAGE);
    }

    #[test]
    fn test_status_error_carries_message() {
        let err = ApiError::Status {
            status: 503,
            message: failure_message(r#"{"message":"Maintenance"}"#),
        };
        assert_eq!(err.to_string(), "server responded with status 503: Maintenance");
        let err: ContactError = err.into();
        assert!(matches!(err, ContactError::Api(ApiError::Status { status: 503, .. })));
    }

    #[test]
    fn test_clear_resets_fields() {
        let mut msg = ContactMessage::new("Ada", "ada@example.com", "Hi");
        msg.clear();
        assert_eq!(msg, ContactMessage::default());
    }
}

//! Backend API Client
//!
//! Typed wrappers around the todo backend's REST endpoints, built on the
//! browser fetch API. Every mutating request echoes the `csrftoken`
//! cookie in the `X-CSRFToken` header.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCredentials, RequestInit, Response};

use crate::models::Task;

const BASE_PATH: &str = "/api/todos/";
const CSRF_COOKIE: &str = "csrftoken";
const CSRF_HEADER: &str = "X-CSRFToken";

/// Endpoint path for the collection (`None`) or a single task (`Some(id)`)
pub fn todo_url(id: Option<u32>) -> String {
    match id {
        Some(id) => format!("{BASE_PATH}{id}/"),
        None => BASE_PATH.to_string(),
    }
}

/// Method and path used to persist a task: update when it already carries
/// an id, create otherwise
pub fn save_request(task: &Task) -> (&'static str, String) {
    match task.id {
        Some(id) => ("PUT", todo_url(Some(id))),
        None => ("POST", todo_url(None)),
    }
}

/// Extract one cookie's value from a `document.cookie` string
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key.trim() == name && !value.is_empty()).then(|| value.to_string())
    })
}

fn csrf_token() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let document = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
    let cookies = document.cookie().ok()?;
    cookie_value(&cookies, CSRF_COOKIE)
}

fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Issue one request and fail on any non-2xx status
async fn fetch(method: &str, url: &str, body: Option<&Task>) -> Result<Response, String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_credentials(RequestCredentials::SameOrigin);
    if let Some(task) = body {
        let json = serde_json::to_string(task).map_err(|e| e.to_string())?;
        opts.set_body(&JsValue::from_str(&json));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    let headers = request.headers();
    if body.is_some() {
        headers.set("Content-Type", "application/json").map_err(js_error)?;
    }
    if method != "GET" {
        // Absent cookie sends no header; the backend's rejection comes
        // back as the usual HTTP failure
        if let Some(token) = csrf_token() {
            headers.set(CSRF_HEADER, &token).map_err(js_error)?;
        }
    }

    let window = web_sys::window().ok_or("no window")?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let response: Response = response.dyn_into().map_err(js_error)?;
    if !response.ok() {
        return Err(format!("HTTP {} on {} {}", response.status(), method, url));
    }
    Ok(response)
}

async fn json_body<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, String> {
    let promise: js_sys::Promise = response.json().map_err(js_error)?;
    let value = JsFuture::from(promise).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
}

/// Fetch the full task list
pub async fn list_todos() -> Result<Vec<Task>, String> {
    let response = fetch("GET", &todo_url(None), None).await?;
    json_body(response).await
}

/// Persist a task: PUT for an existing one, POST for an unsaved draft
pub async fn save_todo(task: &Task) -> Result<Task, String> {
    let (method, url) = save_request(task);
    let response = fetch(method, &url, Some(task)).await?;
    json_body(response).await
}

/// Delete a task by id
pub async fn delete_todo(id: u32) -> Result<(), String> {
    fetch("DELETE", &todo_url(Some(id)), None).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_url() {
        assert_eq!(todo_url(None), "/api/todos/");
        assert_eq!(todo_url(Some(7)), "/api/todos/7/");
    }

    #[test]
    fn test_save_request_dispatch() {
        let draft = Task::draft();
        assert_eq!(save_request(&draft), ("POST", "/api/todos/".to_string()));

        let saved = Task { id: Some(42), ..Task::draft() };
        assert_eq!(save_request(&saved), ("PUT", "/api/todos/42/".to_string()));
    }

    #[test]
    fn test_cookie_value_single() {
        assert_eq!(
            cookie_value("csrftoken=abc123", "csrftoken"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_cookie_value_among_many_with_spaces() {
        let cookies = "sessionid=xyz; csrftoken=abc123; theme=dark";
        assert_eq!(cookie_value(cookies, "csrftoken"), Some("abc123".to_string()));
        assert_eq!(cookie_value(cookies, "theme"), Some("dark".to_string()));
    }

    #[test]
    fn test_cookie_value_absent_or_empty() {
        assert_eq!(cookie_value("", "csrftoken"), None);
        assert_eq!(cookie_value("sessionid=xyz", "csrftoken"), None);
        assert_eq!(cookie_value("csrftoken=", "csrftoken"), None);
        // Name must match exactly, not as a suffix
        assert_eq!(cookie_value("xcsrftoken=abc", "csrftoken"), None);
    }
}

//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so fetch
//! failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Comment, LikeStatus, PostDetail, PostSummary, User, UserProfile};

#[cfg(any(test, feature = "hydrate"))]
fn post_endpoint(post_id: &str) -> String {
    format!("/api/posts/{post_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn post_comments_endpoint(post_id: &str) -> String {
    format!("/api/posts/{post_id}/comments")
}

#[cfg(any(test, feature = "hydrate"))]
fn post_like_endpoint(post_id: &str) -> String {
    format!("/api/posts/{post_id}/like")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_profile_endpoint(user_id: &str) -> String {
    format!("/api/users/{user_id}/profile")
}

#[cfg(any(test, feature = "hydrate"))]
fn register_failed_message(status: u16) -> String {
    match status {
        409 => "Username or email already taken.".to_owned(),
        400 => "Invalid registration details.".to_owned(),
        _ => format!("registration failed: {status}"),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    match status {
        401 => "Invalid username or password.".to_owned(),
        _ => format!("login failed: {status}"),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Create an account via `POST /api/auth/register`; the server also starts
/// a session so no separate login call is needed.
///
/// # Errors
///
/// Returns a display-ready error string if the HTTP request fails or the
/// server rejects the registration.
pub async fn register(username: &str, email: &str, password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "username": username,
            "email": email,
            "password": password,
        });
        let resp = gloo_net::http::Request::post("/api/auth/register")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(register_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, email, password);
        Err("not available on server".to_owned())
    }
}

/// Sign in via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns a display-ready error string on bad credentials or HTTP failure.
pub async fn login(username: &str, password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "username": username, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(login_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err("not available on server".to_owned())
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}

/// Fetch the feed from `/api/posts`, optionally filtered by a search term.
/// Returns `None` on any failure.
pub async fn fetch_feed(search: Option<&str>) -> Option<Vec<PostSummary>> {
    #[cfg(feature = "hydrate")]
    {
        let request = match search.map(str::trim).filter(|s| !s.is_empty()) {
            Some(term) => gloo_net::http::Request::get("/api/posts")
                .query([("search", term)]),
            None => gloo_net::http::Request::get("/api/posts"),
        };
        let resp = request.send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<PostSummary>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = search;
        None
    }
}

/// Create a post via `POST /api/posts`.
///
/// # Errors
///
/// Returns a display-ready error string on validation or HTTP failure.
pub async fn create_post(title: &str, content: &str, tags: &str) -> Result<PostSummary, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "title": title, "content": content, "tags": tags });
        let resp = gloo_net::http::Request::post("/api/posts")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("post create", resp.status()));
        }
        resp.json::<PostSummary>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (title, content, tags);
        Err("not available on server".to_owned())
    }
}

/// Fetch a post with comments from `/api/posts/{id}`.
/// Returns `None` when missing or on failure.
pub async fn fetch_post(post_id: &str) -> Option<PostDetail> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&post_endpoint(post_id))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<PostDetail>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = post_id;
        None
    }
}

/// Edit a post via `PATCH /api/posts/{id}`.
///
/// # Errors
///
/// Returns a display-ready error string on rejection or HTTP failure.
pub async fn update_post(post_id: &str, title: &str, content: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "title": title, "content": content });
        let resp = gloo_net::http::Request::patch(&post_endpoint(post_id))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("post update", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (post_id, title, content);
        Err("not available on server".to_owned())
    }
}

/// Delete a post via `DELETE /api/posts/{id}`.
///
/// # Errors
///
/// Returns a display-ready error string on rejection or HTTP failure.
pub async fn delete_post(post_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&post_endpoint(post_id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("post delete", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = post_id;
        Err("not available on server".to_owned())
    }
}

/// Add a comment via `POST /api/posts/{id}/comments`.
///
/// # Errors
///
/// Returns a display-ready error string on rejection or HTTP failure.
pub async fn add_comment(post_id: &str, content: &str) -> Result<Comment, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "content": content });
        let resp = gloo_net::http::Request::post(&post_comments_endpoint(post_id))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("comment", resp.status()));
        }
        resp.json::<Comment>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (post_id, content);
        Err("not available on server".to_owned())
    }
}

/// Toggle a like via `POST /api/posts/{id}/like`.
///
/// # Errors
///
/// Returns a display-ready error string on rejection or HTTP failure.
pub async fn toggle_like(post_id: &str) -> Result<LikeStatus, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&post_like_endpoint(post_id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("like", resp.status()));
        }
        resp.json::<LikeStatus>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = post_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch a user's profile from `/api/users/{user_id}/profile`.
pub async fn fetch_user_profile(user_id: &str) -> Option<UserProfile> {
    #[cfg(feature = "hydrate")]
    {
        let url = user_profile_endpoint(user_id);
        let resp = gloo_net::http::Request::get(&url).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<UserProfile>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        None
    }
}

//! Admin page routes: login gate, navigation shell, section views.
//!
//! The whole UI hangs off `GET /`: it renders the login page while the
//! session is logged out and the navigation shell with the active section's
//! view once the admin pair was accepted. The POST routes mutate the
//! in-memory shell and redirect back to `/`.

pub mod render;

use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use axum::routing::{get, post};
use axum::{Form, Router};
use tracing::info;

use hekto_core::{LoginForm, Section, Session, ViewData, aggregate};
use hekto_shared::AppError;

use crate::AppState;
use crate::error::ApiError;
use render::CardStyle;

/// Creates the page routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/section/{section}", post(navigate))
}

/// GET /
///
/// Every render of a logged-in section mounts that view afresh: one store
/// fetch per page load, nothing cached between requests. Abandoning the
/// request abandons the fetch with it.
async fn index(State(state): State<AppState>) -> Html<String> {
    let (session, section, form, errors) = {
        let shell = state.shell.read().await;
        (
            shell.session(),
            shell.active_section(),
            shell.form().clone(),
            shell.errors().clone(),
        )
    };

    if session == Session::LoggedOut {
        return Html(render::login_page(&form, &errors));
    }

    let mut view = ViewData::mounting();
    view.resolve(state.store.fetch_customers().await);

    let content = match section {
        Section::Dashboard => render::dashboard(&aggregate(view.records())),
        Section::Users | Section::Products => {
            render::customer_cards(view.records(), CardStyle::Plain)
        }
        Section::Orders => render::customer_cards(view.records(), CardStyle::WithItems),
    };
    Html(render::shell_page(section, &content))
}

/// POST /login — submit the credential form.
async fn login(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Redirect {
    let session = state.shell.write().await.submit_login(form);
    match session {
        Session::LoggedIn => info!("Admin logged in"),
        Session::LoggedOut => info!("Login submission rejected"),
    }
    Redirect::to("/")
}

/// POST /logout — end the session and reset the shell.
async fn logout(State(state): State<AppState>) -> Redirect {
    state.shell.write().await.log_out();
    info!("Admin logged out");
    Redirect::to("/")
}

/// POST /section/{section} — select the active section, unconditionally.
async fn navigate(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> Result<Redirect, ApiError> {
    let section = section
        .parse::<Section>()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    state.shell.write().await.navigate(section);
    Ok(Redirect::to("/"))
}

#[cfg(test)]
mod tests {
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use serde_json::json;
    use tower::ServiceExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::test_util::state_with_store;
    use crate::create_router;

    async fn get_index(app: &Router) -> String {
        let response = app
            .clone()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(body.to_vec()).unwrap()
    }

    async fn post_form(app: &Router, uri: &str, body: &str) -> StatusCode {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        response.status()
    }

    async fn mock_store() -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/query/production"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "result": [
                    {"name": "Ayesha Khan", "email": "ayesha@example.com", "city": "Karachi",
                     "items": [{"id": "sofa-01", "name": "Sofa", "description": "Two-seater", "price": 250}]}
                ]
            })))
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn logged_out_index_shows_the_login_page() {
        let app = create_router(state_with_store("http://127.0.0.1:9"));
        let html = get_index(&app).await;
        assert!(html.contains("Hekto Admin Login"));
        assert!(!html.contains("Hekto Dashboard"));
    }

    #[tokio::test]
    async fn successful_login_redirects_and_shows_the_dashboard() {
        let server = mock_store().await;
        let app = create_router(state_with_store(&server.uri()));

        let status = post_form(&app, "/login", "admin_name=ZubairRiaz&password=1718").await;
        assert_eq!(status, StatusCode::SEE_OTHER);

        let html = get_index(&app).await;
        assert!(html.contains("Dashboard Overview"));
        assert!(html.contains("Total Revenue"));
        assert!(html.contains("PKR 250"));
    }

    #[tokio::test]
    async fn rejected_login_rerenders_with_credentials_error() {
        let app = create_router(state_with_store("http://127.0.0.1:9"));

        let status = post_form(&app, "/login", "admin_name=ZubairRiaz&password=wrong").await;
        assert_eq!(status, StatusCode::SEE_OTHER);

        let html = get_index(&app).await;
        assert!(html.contains("Hekto Admin Login"));
        assert!(html.contains("Invalid Admin Name or Password"));
    }

    #[tokio::test]
    async fn empty_field_rerenders_with_field_error() {
        let app = create_router(state_with_store("http://127.0.0.1:9"));

        post_form(&app, "/login", "admin_name=&password=1718").await;

        let html = get_index(&app).await;
        assert!(html.contains("Admin Name is required"));
        assert!(!html.contains("Password is required"));
        assert!(!html.contains("Invalid Admin Name or Password"));
    }

    #[tokio::test]
    async fn navigation_switches_the_rendered_section() {
        let server = mock_store().await;
        let app = create_router(state_with_store(&server.uri()));
        post_form(&app, "/login", "admin_name=ZubairRiaz&password=1718").await;

        for (slug, heading) in [
            ("users", "Users Overview"),
            ("products", "Products Overview"),
            ("orders", "Orders Overview"),
            ("dashboard", "Dashboard Overview"),
        ] {
            let status = post_form(&app, &format!("/section/{slug}"), "").await;
            assert_eq!(status, StatusCode::SEE_OTHER);
            let html = get_index(&app).await;
            assert!(html.contains(heading), "missing heading: {heading}");
        }
    }

    #[tokio::test]
    async fn orders_section_lists_items_inline() {
        let server = mock_store().await;
        let app = create_router(state_with_store(&server.uri()));
        post_form(&app, "/login", "admin_name=ZubairRiaz&password=1718").await;
        post_form(&app, "/section/orders", "").await;

        let html = get_index(&app).await;
        assert!(html.contains("Ayesha Khan"));
        assert!(html.contains("Items:"));
        assert!(html.contains("Amount - PKR 250"));
    }

    #[tokio::test]
    async fn products_section_aliases_the_customer_list() {
        let server = mock_store().await;
        let app = create_router(state_with_store(&server.uri()));
        post_form(&app, "/login", "admin_name=ZubairRiaz&password=1718").await;
        post_form(&app, "/section/products", "").await;

        let html = get_index(&app).await;
        assert!(html.contains("Ayesha Khan"));
        assert!(!html.contains("Items:"));
    }

    #[tokio::test]
    async fn unknown_section_is_a_bad_request() {
        let server = mock_store().await;
        let app = create_router(state_with_store(&server.uri()));
        post_form(&app, "/login", "admin_name=ZubairRiaz&password=1718").await;

        let status = post_form(&app, "/section/settings", "").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        // Active section is unchanged.
        let html = get_index(&app).await;
        assert!(html.contains("Dashboard Overview"));
    }

    #[tokio::test]
    async fn broken_store_renders_the_empty_state_not_an_error() {
        let app = create_router(state_with_store("http://127.0.0.1:9"));
        post_form(&app, "/login", "admin_name=ZubairRiaz&password=1718").await;
        post_form(&app, "/section/users", "").await;

        let html = get_index(&app).await;
        assert!(html.contains("No customers found"));
    }

    #[tokio::test]
    async fn logout_returns_to_a_clean_login_page() {
        let server = mock_store().await;
        let app = create_router(state_with_store(&server.uri()));
        post_form(&app, "/login", "admin_name=ZubairRiaz&password=1718").await;
        post_form(&app, "/section/orders", "").await;

        let status = post_form(&app, "/logout", "").await;
        assert_eq!(status, StatusCode::SEE_OTHER);

        let html = get_index(&app).await;
        assert!(html.contains("Hekto Admin Login"));
        // Form fields were reset, nothing leaks from the old session.
        assert!(!html.contains("ZubairRiaz"));
    }
}

//! OpenAPI specification for the Jotter web server

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::{
    auth::accounts::{AccountInfo, AuthResponse, LoginRequest, RegisterRequest},
    handlers::{CreateNoteRequest, DeletedNoteResponse, HealthResponse},
    notes::{Note, NotePatch},
};

/// Main OpenAPI specification for the Jotter API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Jotter API",
        version = "0.1.0",
        description = "Personal note-taking service with bearer-token authentication",
        license(name = "MIT OR Apache-2.0")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        crate::handlers::health_check,
        crate::auth::handlers::register,
        crate::auth::handlers::login,
        crate::auth::handlers::me,
        crate::handlers::list_notes,
        crate::handlers::create_note,
        crate::handlers::update_note,
        crate::handlers::delete_note,
    ),
    components(
        schemas(
            HealthResponse,
            RegisterRequest,
            LoginRequest,
            AuthResponse,
            AccountInfo,
            Note,
            NotePatch,
            CreateNoteRequest,
            DeletedNoteResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Auth", description = "Registration, login, and account lookup"),
        (name = "Notes", description = "Owner-scoped note CRUD operations"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Security configuration for the API
pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Get the OpenAPI specification as JSON
pub fn get_openapi_json() -> String {
    ApiDoc::openapi().to_pretty_json().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_generation() {
        let openapi = ApiDoc::openapi();
        assert_eq!(openapi.info.title, "Jotter API");
        assert!(!openapi.paths.paths.is_empty());
    }

    #[test]
    fn test_openapi_json() {
        let json = get_openapi_json();
        assert!(json.contains("Jotter API"));
        assert!(json.contains("/api/notes"));
    }
}

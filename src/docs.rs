use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use tableside_config::JwtConfig;

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{Role, SessionResponse, SignInRequest, SignUpRequest};
use crate::modules::orders::model::{
    CreateOrderDto, Order, OrderItem, OrderLineDto, OrderStatus, OrderWithItems,
    UpdateOrderStatusDto,
};
use crate::modules::products::model::{CreateProductDto, Product};
use crate::modules::restaurants::model::{CreateRestaurantDto, CreateStaffDto, Restaurant, Staff};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::health::controller::health_check,
        crate::modules::auth::controller::sign_up_owner,
        crate::modules::auth::controller::sign_in_owner,
        crate::modules::auth::controller::sign_in_staff,
        crate::modules::auth::controller::me,
        crate::modules::restaurants::controller::create_restaurant,
        crate::modules::restaurants::controller::list_restaurants,
        crate::modules::restaurants::controller::get_restaurant,
        crate::modules::restaurants::controller::register_staff,
        crate::modules::products::controller::create_product,
        crate::modules::products::controller::list_products,
        crate::modules::orders::controller::create_order,
        crate::modules::orders::controller::list_orders,
        crate::modules::orders::controller::get_order,
        crate::modules::orders::controller::update_order_status,
    ),
    components(
        schemas(
            Role,
            SignUpRequest,
            SignInRequest,
            SessionResponse,
            Restaurant,
            CreateRestaurantDto,
            Staff,
            CreateStaffDto,
            Product,
            CreateProductDto,
            Order,
            OrderItem,
            OrderStatus,
            OrderWithItems,
            OrderLineDto,
            CreateOrderDto,
            UpdateOrderStatusDto,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness"),
        (name = "Authentication", description = "Owner sign-up, sign-in and session identity"),
        (name = "Restaurants", description = "Restaurants and their staff"),
        (name = "Products", description = "Restaurant catalog"),
        (name = "Orders", description = "Table orders")
    ),
    info(
        title = "Tableside API",
        version = "0.1.0",
        description = "Restaurant ordering backend with cookie-based session authentication.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                session_scheme(JwtConfig::DEFAULT_COOKIE_NAME),
            )
        }
    }
}

fn session_scheme(cookie_name: &str) -> SecurityScheme {
    SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(cookie_name)))
}

/// [`ApiDoc`] with the session scheme pointing at the configured cookie.
pub fn api_doc(jwt_config: &JwtConfig) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    if let Some(components) = doc.components.as_mut() {
        components.add_security_scheme("session_cookie", session_scheme(&jwt_config.cookie_name));
    }
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_all_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/api/_health",
            "/api/auth/owners/sign-up",
            "/api/auth/owners/sign-in",
            "/api/auth/staff/sign-in",
            "/api/auth/me",
            "/api/restaurants",
            "/api/restaurants/{restaurant_id}",
            "/api/restaurants/{restaurant_id}/staff",
            "/api/restaurants/{restaurant_id}/products",
            "/api/restaurants/{restaurant_id}/orders",
            "/api/restaurants/{restaurant_id}/orders/{order_id}",
            "/api/restaurants/{restaurant_id}/orders/{order_id}/status",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn test_openapi_declares_cookie_security() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("session_cookie"));
    }

    #[test]
    fn test_session_scheme_follows_configured_cookie_name() {
        let mut config = JwtConfig::new("docs-test-secret-at-least-32-characters");
        config.cookie_name = "tableside_session".to_string();

        let doc = api_doc(&config);
        let components = doc.components.expect("components");
        let scheme = serde_json::to_value(&components.security_schemes["session_cookie"]).unwrap();

        assert_eq!(scheme["in"], "cookie");
        assert_eq!(scheme["name"], "tableside_session");
    }
}

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        address::AddressDto,
        api::ErrorDto,
        customer::CustomerDto,
        order::{OrderDto, PilotesNumber},
    },
    server::{
        controller::{
            auth::{self, login},
            order::{self, create_order, get_order, search_by_customer, update_order},
            receiver::{self, prepare_orders},
        },
        middleware::auth::require_search,
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Pilotes", description = "Pilotes order backend"),
    paths(
        order::get_order,
        order::create_order,
        order::update_order,
        order::search_by_customer,
        auth::login,
        receiver::prepare_orders,
    ),
    components(schemas(OrderDto, AddressDto, CustomerDto, PilotesNumber, ErrorDto)),
    modifiers(&BearerSecurity),
    tags(
        (name = "Order", description = "Order management"),
        (name = "Authentication", description = "Token issuing"),
        (name = "Receiver", description = "Local order-processing stand-in"),
    )
)]
pub struct ApiDoc;

struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
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

pub fn router(state: AppState) -> Router {
    let search = Router::new()
        .route("/v1.0/orders/searchByCustomer", post(search_by_customer))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_search));

    Router::new()
        .route("/v1.0/orders/{number}", get(get_order))
        .route("/v1.0/orders", post(create_order).put(update_order))
        .merge(search)
        .route("/v1.0/auth/login", post(login))
        .route("/prepareOrders", post(prepare_orders))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod test;

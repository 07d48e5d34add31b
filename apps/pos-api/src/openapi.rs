use core_config::AppInfo;
use core_config::api::ApiConfig;
use utoipa::openapi::{InfoBuilder, OpenApi, OpenApiBuilder};

/// Full API document: each resource document nested at its mount point.
pub fn document(app: &AppInfo, api: &ApiConfig) -> OpenApi {
    let base = format!("/api{}", api.prefix());
    let info = InfoBuilder::new()
        .title("POS API")
        .version(app.version)
        .description(Some(
            "Point-of-sale backend: cashiers, categories, products, payments and orders",
        ))
        .build();

    OpenApiBuilder::new()
        .info(info)
        .build()
        .nest(format!("{}/cashiers", base), domain_cashiers::handlers::openapi())
        .nest(format!("{}/categories", base), domain_categories::handlers::openapi())
        .nest(format!("{}/products", base), domain_products::handlers::openapi())
        .nest(format!("{}/payments", base), domain_payments::handlers::openapi())
        .nest(format!("{}/orders", base), domain_orders::handlers::openapi())
}

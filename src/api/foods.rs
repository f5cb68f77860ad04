use actix_web::{web, HttpResponse, ResponseError};
use serde::Deserialize;

use crate::database::MongoDB;
use crate::models::FoodItem;
use crate::services::food_service;

#[derive(Debug, Deserialize)]
pub struct FoodListQuery {
    pub page: Option<u64>,
    pub size: Option<u64>,
}

#[utoipa::path(
    post,
    path = "/allFoods",
    tag = "Foods",
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Insertion result"),
        (status = 500, description = "Database failure")
    )
)]
pub async fn add_food(db: web::Data<MongoDB>, food: web::Json<FoodItem>) -> HttpResponse {
    log::info!("🍔 POST /allFoods - adding food item");

    match food_service::add_food(&db, &food).await {
        Ok(inserted_id) => {
            log::info!("✅ Food item added: {}", inserted_id);
            HttpResponse::Ok().json(serde_json::json!({
                "acknowledged": true,
                "insertedId": inserted_id
            }))
        }
        Err(e) => {
            log::error!("❌ Failed to add food item: {}", e);
            e.error_response()
        }
    }
}

/// One route serves both listing modes: with `page` and `size` present the
/// result is a pagination window plus the page count, otherwise the full
/// unfiltered list.
#[utoipa::path(
    get,
    path = "/allFoods",
    tag = "Foods",
    params(
        ("page" = Option<u64>, Query, description = "1-indexed page number"),
        ("size" = Option<u64>, Query, description = "Records per page")
    ),
    responses(
        (status = 200, description = "Food items: a plain array, or { food, totalPages } when paginated"),
        (status = 400, description = "Page outside [1, totalPages]"),
        (status = 500, description = "Database failure")
    )
)]
pub async fn get_foods(db: web::Data<MongoDB>, query: web::Query<FoodListQuery>) -> HttpResponse {
    match (query.page, query.size) {
        (Some(page), Some(size)) => {
            log::info!("🍽️ GET /allFoods - page {} size {}", page, size);

            match food_service::list_food_page(&db, page, size).await {
                Ok(food_page) => HttpResponse::Ok().json(food_page),
                Err(e) => {
                    log::error!("❌ Failed to fetch food page {}: {}", page, e);
                    e.error_response()
                }
            }
        }
        _ => {
            log::info!("🍽️ GET /allFoods - full list");

            match food_service::list_foods(&db).await {
                Ok(foods) => HttpResponse::Ok().json(foods),
                Err(e) => {
                    log::error!("❌ Failed to list foods: {}", e);
                    e.error_response()
                }
            }
        }
    }
}

use crate::database::MongoDB;
use crate::models::FoodItem;
use crate::utils::error::AppError;
use mongodb::bson::Bson;
use serde::Serialize;

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct FoodPage {
    #[schema(value_type = Vec<Object>)]
    pub food: Vec<FoodItem>,
    #[serde(rename = "totalPages")]
    pub total_pages: u64,
}

pub async fn add_food(db: &MongoDB, food: &FoodItem) -> Result<String, AppError> {
    let result = db.insert_one("foods", food).await?;
    let inserted_id = match result.inserted_id {
        Bson::ObjectId(id) => id.to_hex(),
        other => other.to_string(),
    };

    Ok(inserted_id)
}

pub async fn list_foods(db: &MongoDB) -> Result<Vec<FoodItem>, AppError> {
    Ok(db.find_all::<FoodItem>("foods", None, None, None).await?)
}

pub async fn list_food_page(db: &MongoDB, page: u64, size: u64) -> Result<FoodPage, AppError> {
    let total = db.count("foods", None).await?;
    let (skip, total_pages) = page_window(page, size, total)?;

    let food = db
        .find_all::<FoodItem>("foods", None, Some(skip), Some(size as i64))
        .await?;

    Ok(FoodPage { food, total_pages })
}

/// (skip, totalPages) for a 1-indexed `page` of `size` records over `total`.
/// Pages outside [1, totalPages] are a client error.
fn page_window(page: u64, size: u64, total: u64) -> Result<(u64, u64), AppError> {
    if size == 0 {
        return Err(AppError::InvalidPage);
    }

    let total_pages = total.div_ceil(size);
    if page < 1 || page > total_pages {
        return Err(AppError::InvalidPage);
    }

    Ok(((page - 1) * size, total_pages))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_of_twenty_by_five() {
        let (skip, total_pages) = page_window(1, 5, 20).unwrap();
        assert_eq!(skip, 0);
        assert_eq!(total_pages, 4);
    }

    #[test]
    fn last_partial_page_counts_as_a_page() {
        let (skip, total_pages) = page_window(5, 5, 21).unwrap();
        assert_eq!(skip, 20);
        assert_eq!(total_pages, 5);
    }

    #[test]
    fn page_past_the_end_is_invalid() {
        assert!(matches!(page_window(5, 5, 20), Err(AppError::InvalidPage)));
    }

    #[test]
    fn page_zero_is_invalid() {
        assert!(matches!(page_window(0, 5, 20), Err(AppError::InvalidPage)));
    }

    #[test]
    fn size_zero_is_invalid() {
        assert!(matches!(page_window(1, 0, 20), Err(AppError::InvalidPage)));
    }

    #[test]
    fn empty_collection_has_no_valid_page() {
        assert!(matches!(page_window(1, 5, 0), Err(AppError::InvalidPage)));
    }
}

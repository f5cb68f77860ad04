use mongodb::bson::Document;

/// Food items are schema-less: whatever document the caller posts is
/// persisted and listed back unchanged.
pub type FoodItem = Document;

use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub availability: Option<bool>,
    pub photo: Option<Vec<u8>>,
}

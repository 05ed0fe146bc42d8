/// Trait for records that carry a unique integer id within their collection
pub trait Identifiable {
    /// Returns the unique identifier of the record
    fn get_id(&self) -> i64;
}

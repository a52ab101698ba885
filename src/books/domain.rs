use crate::core::domain::Identifiable;

pub mod model;

// Book exposes the typed fields the query stages read from a record.
pub trait Book: Identifiable {
    fn name(&self) -> &str;
    fn author(&self) -> &str;
    fn publish_year(&self) -> i64;
    fn pages_count(&self) -> i64;
    fn price(&self) -> f64;
}

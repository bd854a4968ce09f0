//! Effects - side effects declared by the reducer

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch every city concurrently and report once all settle
    FetchDefaults { cities: Vec<String> },
    /// Fetch one city for the search slot
    FetchCity { seq: u64, city: String },
}

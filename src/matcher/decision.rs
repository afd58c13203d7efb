use crate::matcher::relevancy::Relevancy;

/// Expected cost of accepting one more listing: the chance it is a false
/// positive, discounted by how many listings were already accepted.
pub fn expected_cost(relevancy: f64, accepted: usize) -> f64 {
    (1.0 - relevancy) * (1.0 / (accepted as f64 + 1.0))
}

/// Accept/reject policy applied to candidates in ranked order.
#[derive(Debug, Clone, Copy)]
pub struct MatchDecider {
    error_tolerance: f64,
}

impl MatchDecider {
    pub fn new(error_tolerance: f64) -> Self {
        Self { error_tolerance }
    }

    pub fn error_tolerance(&self) -> f64 {
        self.error_tolerance
    }

    /// `accepted` counts listings already accepted for the same product.
    pub fn decide(&self, relevancy: Relevancy, accepted: usize) -> bool {
        match relevancy {
            Relevancy::Exact => true,
            Relevancy::None => false,
            other => expected_cost(other.value(), accepted) <= self.error_tolerance,
        }
    }
}

impl Default for MatchDecider {
    fn default() -> Self {
        Self::new(0.01)
    }
}

//! Per-session viewer state
//!
//! Owned by whichever front end is driving the interaction and handed to
//! each command explicitly.

use crate::config::SessionDefaults;
use oncoscore_classifier::FeatureVector;

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user_name: String,
    pub user_rating: u8,
    /// Current form inputs; unset features stay at 0.0
    pub features: FeatureVector,
}

impl Session {
    pub fn new(defaults: &SessionDefaults) -> Self {
        Self {
            user_name: defaults.name.clone(),
            user_rating: defaults.rating,
            features: FeatureVector::default(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&SessionDefaults::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session() {
        let session = Session::default();
        assert_eq!(session.user_name, "Anonymous");
        assert_eq!(session.user_rating, 5);
        assert!(session.features.as_slice().iter().all(|v| *v == 0.0));
    }
}

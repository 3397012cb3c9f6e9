//! Evaluation context
//!
//! The subject attributes a caller supplies for one evaluation. The engine
//! never fetches anything itself: residence, community membership, and the
//! means-tested index are resolved by the calling service beforehand.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Subject attributes for one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationContext {
    /// Age in whole years
    pub age: u32,

    /// Means-tested index (quotient familial), absent when not declared
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qf: Option<Decimal>,

    /// Residence identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub residence_id: Option<String>,

    /// Communities the residence belongs to, resolved by the caller
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub community_ids: Vec<String>,

    /// Social status code, absent when not declared
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_status: Option<String>,

    /// Years of continuous membership
    #[serde(default)]
    pub membership_years: u32,

    /// Number of registrants in the household
    #[serde(default = "default_household_count")]
    pub household_count: u32,
}

fn default_household_count() -> u32 {
    1
}

impl EvaluationContext {
    /// Create a context for a subject of the given age
    pub fn new(age: u32) -> Self {
        EvaluationContext {
            age,
            qf: None,
            residence_id: None,
            community_ids: Vec::new(),
            social_status: None,
            membership_years: 0,
            household_count: 1,
        }
    }

    /// Set the means-tested index
    pub fn with_qf(mut self, qf: Decimal) -> Self {
        self.qf = Some(qf);
        self
    }

    /// Set the residence identifier
    pub fn with_residence(mut self, residence_id: impl Into<String>) -> Self {
        self.residence_id = Some(residence_id.into());
        self
    }

    /// Add a community the residence belongs to
    pub fn with_community(mut self, community_id: impl Into<String>) -> Self {
        self.community_ids.push(community_id.into());
        self
    }

    /// Set the social status code
    pub fn with_social_status(mut self, status: impl Into<String>) -> Self {
        self.social_status = Some(status.into());
        self
    }

    /// Set the years of continuous membership
    pub fn with_membership_years(mut self, years: u32) -> Self {
        self.membership_years = years;
        self
    }

    /// Set the household registrant count
    pub fn with_household_count(mut self, count: u32) -> Self {
        self.household_count = count;
        self
    }
}

/// Age in whole years on a given date, truncated down
///
/// Returns 0 for a birth date in the future.
pub fn age_on(birth_date: NaiveDate, as_of: NaiveDate) -> u32 {
    let mut age = as_of.year() - birth_date.year();
    if (as_of.month(), as_of.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age.max(0) as u32
}

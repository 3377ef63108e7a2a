//! Picks the service point a caller meant out of a bounding-box result.
//!
//! A candidate matches when its unaccented `"<postal code> <house number>"`
//! equals the requested one, or when its code equals the requested code.
//! Candidates are tried in server order and the first hit wins.

use crate::domain::matcher::ServicePointLookup;
use crate::domain::model::ServicePoint;
use crate::utils::error::{Result, SendcloudError};
use crate::utils::normalize::unaccent;

/// Normalized `"<postal code> <house number>"` the candidates are compared against.
pub fn target_identifier(postal_code: &str, house_number: &str) -> String {
    unaccent(&format!("{} {}", postal_code, house_number))
}

pub fn matches_identifier(candidate: &ServicePoint, target: &str) -> bool {
    unaccent(&candidate.identifier()) == target
}

/// Never matches when no code was requested.
pub fn matches_code(candidate: &ServicePoint, spid: Option<&str>) -> bool {
    spid.is_some_and(|code| candidate.code == code)
}

pub fn find_match<'c>(
    lookup: &ServicePointLookup<'_>,
    candidates: &'c [ServicePoint],
) -> Option<&'c ServicePoint> {
    let target = target_identifier(lookup.postal_code, lookup.house_number);

    candidates
        .iter()
        .find(|candidate| matches_identifier(candidate, &target) || matches_code(candidate, lookup.spid))
}

pub fn resolve(lookup: &ServicePointLookup<'_>, candidates: &[ServicePoint]) -> Result<i64> {
    find_match(lookup, candidates)
        .map(|point| point.id)
        .ok_or(SendcloudError::NoSuitableServicePointFound)
}

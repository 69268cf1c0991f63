//! Keyed data queries.
//!
//! Every query currently resolves synchronously to compiled-in data. Keys are
//! taken from the settings file, so a future backend can replace the match
//! below without touching the views.

use crate::error::{Result, SiteError};
use crate::roster::{team_members, TeamMember};

/// Query key that resolves to the team roster.
pub const TEAM_QUERY: &str = "/api/team";

/// Resolve a roster query. Unknown keys are programming errors and fail loudly.
pub fn query_roster(key: &str) -> Result<&'static [TeamMember]> {
    match key {
        TEAM_QUERY => {
            tracing::debug!(key, count = team_members().len(), "roster query resolved");
            Ok(team_members())
        }
        other => Err(SiteError::UnknownQuery(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_query_returns_roster() {
        let members = query_roster(TEAM_QUERY).unwrap();
        assert_eq!(members, team_members());
        assert_eq!(members.len(), 8);
    }

    #[test]
    fn test_unknown_query_fails() {
        match query_roster("/api/alumni") {
            Err(SiteError::UnknownQuery(key)) => assert_eq!(key, "/api/alumni"),
            other => panic!("expected UnknownQuery, got {:?}", other),
        }
    }

    #[test]
    fn test_query_is_exact_match() {
        assert!(query_roster("/api/team/").is_err());
        assert!(query_roster("").is_err());
    }
}

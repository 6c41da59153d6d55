//! Data structures exchanged over the Mergington HTTP API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::id::{ActivityId, ParticipantId};

/// An extracurricular activity and its roster.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Advertised capacity. Reported to clients but never enforced on signup.
    pub max_participants: u32,
    /// Enrolled participant emails, in signup order.
    pub participants: Vec<ParticipantId>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants<I, P>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<ParticipantId>,
    {
        for participant in participants {
            self.add_participant(participant.into());
        }
        self
    }

    pub fn has_participant(&self, participant: &ParticipantId) -> bool {
        self.participants.contains(participant)
    }

    /// Appends a participant to the roster.
    ///
    /// Returns `false` and leaves the roster untouched if the participant is
    /// already enrolled.
    pub fn add_participant(&mut self, participant: ParticipantId) -> bool {
        if self.has_participant(&participant) {
            return false;
        }
        self.participants.push(participant);
        true
    }

    /// Removes a participant, keeping the order of the remaining entries.
    ///
    /// Returns `false` if the participant was not enrolled.
    pub fn remove_participant(&mut self, participant: &ParticipantId) -> bool {
        match self.participants.iter().position(|p| p == participant) {
            Some(index) => {
                self.participants.remove(index);
                true
            }
            None => false,
        }
    }
}

/// The full activity directory as returned by `GET /activities`.
pub type ActivityDirectory = BTreeMap<ActivityId, Activity>;

/// Query string accepted by the signup and unregister endpoints.
///
/// `email` is collected as a list so that a missing parameter can be reported
/// as a validation error and a repeated one resolves to its last value.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct SignupQuery {
    #[serde(default)]
    pub email: Vec<String>,
}

impl SignupQuery {
    /// The email to act on: the last `email` given, if any.
    pub fn email(&self) -> Option<&str> {
        self.email.last().map(String::as_str)
    }
}

/// A human readable confirmation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn signed_up(participant: &ParticipantId, activity: &ActivityId) -> Self {
        Self {
            message: format!("Signed up {participant} for {activity}"),
        }
    }

    pub fn unregistered(participant: &ParticipantId, activity: &ActivityId) -> Self {
        Self {
            message: format!("Unregistered {participant} from {activity}"),
        }
    }
}

/// Error body for domain failures, e.g. `{"detail": "Activity not found"}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Error body for request validation failures.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ValidationErrorResponse {
    pub detail: Vec<ValidationIssue>,
}

/// A single invalid or missing request field.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    #[serde(rename = "type")]
    pub kind: String,
    /// Location of the field, e.g. `["query", "email"]`.
    pub loc: Vec<String>,
    pub msg: String,
    /// The offending input, `null` when the field was absent.
    pub input: serde_json::Value,
}

impl ValidationIssue {
    pub fn missing(location: &str, field: &str) -> Self {
        Self {
            kind: "missing".to_string(),
            loc: vec![location.to_string(), field.to_string()],
            msg: "Field required".to_string(),
            input: serde_json::Value::Null,
        }
    }

    /// A request part that could not be parsed at all.
    pub fn unparsable(location: &str, msg: impl Into<String>) -> Self {
        Self {
            kind: "parsing".to_string(),
            loc: vec![location.to_string()],
            msg: msg.into(),
            input: serde_json::Value::Null,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UptimeInfo {
    pub seconds: i64,
    pub human: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ServiceInfo {
    pub activities: String,
    pub activity_count: usize,
    pub enrollment_count: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub timestamp: String,
    pub started_at: String,
    pub uptime: UptimeInfo,
    pub services: ServiceInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chess() -> Activity {
        Activity::new("Chess", "Fridays", 12)
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"])
    }

    #[test]
    fn add_participant_appends_in_order() {
        let mut activity = chess();
        assert!(activity.add_participant("zoe@mergington.edu".into()));

        let emails: Vec<&str> = activity.participants.iter().map(|p| p.as_str()).collect();
        assert_eq!(
            emails,
            ["michael@mergington.edu", "daniel@mergington.edu", "zoe@mergington.edu"]
        );
    }

    #[test]
    fn add_participant_rejects_duplicates() {
        let mut activity = chess();
        assert!(!activity.add_participant("daniel@mergington.edu".into()));
        assert_eq!(activity.participants.len(), 2);
    }

    #[test]
    fn with_participants_skips_duplicates() {
        let activity = Activity::new("Chess", "Fridays", 12)
            .with_participants(["a@mergington.edu", "a@mergington.edu"]);
        assert_eq!(activity.participants.len(), 1);
    }

    #[test]
    fn remove_participant_preserves_order() {
        let mut activity = chess().with_participants(["zoe@mergington.edu"]);
        assert!(activity.remove_participant(&"daniel@mergington.edu".into()));

        let emails: Vec<&str> = activity.participants.iter().map(|p| p.as_str()).collect();
        assert_eq!(emails, ["michael@mergington.edu", "zoe@mergington.edu"]);
    }

    #[test]
    fn remove_missing_participant_is_noop() {
        let mut activity = chess();
        assert!(!activity.remove_participant(&"nobody@mergington.edu".into()));
        assert_eq!(activity, chess());
    }

    #[test]
    fn activity_serializes_four_fields() {
        let value = serde_json::to_value(chess()).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(
            keys,
            ["description", "max_participants", "participants", "schedule"]
        );
        assert_eq!(value["participants"][0], "michael@mergington.edu");
    }

    #[test]
    fn messages_reference_email_and_activity() {
        let participant: ParticipantId = "newstudent@mergington.edu".into();
        let activity: ActivityId = "Chess Club".into();

        assert_eq!(
            MessageResponse::signed_up(&participant, &activity).message,
            "Signed up newstudent@mergington.edu for Chess Club"
        );
        assert_eq!(
            MessageResponse::unregistered(&participant, &activity).message,
            "Unregistered newstudent@mergington.edu from Chess Club"
        );
    }

    #[test]
    fn missing_field_issue_shape() {
        let body = ValidationErrorResponse {
            detail: vec![ValidationIssue::missing("query", "email")],
        };
        let value = serde_json::to_value(body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "detail": [{
                    "type": "missing",
                    "loc": ["query", "email"],
                    "msg": "Field required",
                    "input": null
                }]
            })
        );
    }

    #[test]
    fn signup_query_takes_last_email() {
        let query = SignupQuery {
            email: vec!["a@mergington.edu".to_string(), "b@mergington.edu".to_string()],
        };
        assert_eq!(query.email(), Some("b@mergington.edu"));
        assert_eq!(SignupQuery::default().email(), None);
    }
}

use async_trait::async_trait;
use dashmap::DashMap;

use mergington::data::{Activity, ActivityDirectory};
use mergington::errors::ActivityError;
use mergington::id::{ActivityId, ParticipantId};

/// A trait for managing the activity directory and its rosters.
///
/// The set of activities is fixed once the service is built; only rosters
/// change. Implementations must make each signup and unregister atomic per
/// activity so that a participant can never be enrolled twice.
///
/// # Examples
///
/// ```rust
/// use mergington::id::ActivityId;
///
/// async fn example_usage<S: ActivityService>(service: &S) -> Result<(), S::Error> {
///     let chess: ActivityId = "Chess Club".into();
///
///     service.signup(&chess, "newstudent@mergington.edu".into()).await?;
///     service.unregister(&chess, &"newstudent@mergington.edu".into()).await?;
///
///     let directory = service.list().await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait ActivityService<Directory = ActivityDirectory> {
    /// The error type returned by operations on this service.
    type Error;

    /// Returns every activity keyed by name.
    async fn list(&self) -> Result<Directory, Self::Error>;

    /// Appends a participant to an activity's roster.
    ///
    /// # Errors
    ///
    /// Returns an error if the activity doesn't exist or the participant is
    /// already enrolled. The roster is unchanged in both cases.
    async fn signup(
        &self,
        activity_id: &ActivityId,
        participant_id: ParticipantId,
    ) -> Result<(), Self::Error>;

    /// Removes a participant from an activity's roster.
    ///
    /// # Errors
    ///
    /// Returns an error if the activity doesn't exist, or if it does but the
    /// participant is not enrolled. Unknown activities are reported first.
    async fn unregister(
        &self,
        activity_id: &ActivityId,
        participant_id: &ParticipantId,
    ) -> Result<(), Self::Error>;
}

/// An in-memory implementation of the `ActivityService` trait.
///
/// Activities live in a `DashMap`, so a roster mutation holds the write guard
/// for its entry for the whole check-then-modify step. Nothing is persisted;
/// a restart returns to the seed.
pub struct ActivityServiceInMemory {
    activities: DashMap<ActivityId, Activity>,
}

impl ActivityServiceInMemory {
    pub fn new<I>(activities: I) -> Self
    where
        I: IntoIterator<Item = (ActivityId, Activity)>,
    {
        Self {
            activities: activities.into_iter().collect(),
        }
    }

    /// Builds a directory containing the school's standard activities.
    pub fn seeded() -> Self {
        Self::new(crate::seed::activities())
    }

    pub fn activity_count(&self) -> usize {
        self.activities.len()
    }

    /// Total number of enrollments across all activities.
    pub fn enrollment_count(&self) -> usize {
        self.activities
            .iter()
            .map(|entry| entry.value().participants.len())
            .sum()
    }
}

#[async_trait]
impl ActivityService for ActivityServiceInMemory {
    type Error = ActivityError;

    async fn list(&self) -> Result<ActivityDirectory, Self::Error> {
        Ok(self
            .activities
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect())
    }

    async fn signup(
        &self,
        activity_id: &ActivityId,
        participant_id: ParticipantId,
    ) -> Result<(), Self::Error> {
        let mut activity = self
            .activities
            .get_mut(activity_id)
            .ok_or(ActivityError::ActivityNotFound)?;

        if activity.add_participant(participant_id) {
            Ok(())
        } else {
            Err(ActivityError::AlreadySignedUp)
        }
    }

    async fn unregister(
        &self,
        activity_id: &ActivityId,
        participant_id: &ParticipantId,
    ) -> Result<(), Self::Error> {
        let mut activity = self
            .activities
            .get_mut(activity_id)
            .ok_or(ActivityError::ActivityNotFound)?;

        if activity.remove_participant(participant_id) {
            Ok(())
        } else {
            Err(ActivityError::NotSignedUp)
        }
    }
}

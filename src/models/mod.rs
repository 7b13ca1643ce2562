pub mod activity;

pub use activity::{Activity, ActivitiesRow, ActivityDirectory, ActivityParticipantsRow};

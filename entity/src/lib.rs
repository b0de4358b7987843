//! SeaORM entities for the club hub database.

pub mod prelude;

pub mod club;
pub mod club_meeting;
pub mod club_notification;
pub mod club_subscription;
pub mod user;

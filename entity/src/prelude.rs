pub use super::club::Entity as Club;
pub use super::club_meeting::Entity as ClubMeeting;
pub use super::club_notification::Entity as ClubNotification;
pub use super::club_subscription::Entity as ClubSubscription;
pub use super::user::Entity as User;

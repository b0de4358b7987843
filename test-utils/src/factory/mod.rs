//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories that need
//! a parent row take its id explicitly; `helpers` creates whole dependency chains.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let owner = factory::user::create_user(&db).await?;
//! let club = factory::club::create_club(&db, owner.id).await?;
//!
//! let (owner, club, meeting) = factory::helpers::create_club_with_meeting(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let meeting = factory::club_meeting::ClubMeetingFactory::new(&db, club.id)
//!     .event_name("Weekly Match")
//!     .meeting_time(Utc::now() + Duration::days(2))
//!     .build()
//!     .await?;
//! ```

pub mod club;
pub mod club_meeting;
pub mod club_notification;
pub mod club_subscription;
pub mod helpers;
pub mod user;

pub use club::create_club;
pub use club_meeting::create_meeting;
pub use club_notification::create_notification;
pub use club_subscription::create_subscription;
pub use user::create_user;

pub use sea_orm_migration::prelude::*;

mod m20241015_000001_create_user_table;
mod m20241015_000002_create_club_table;
mod m20241015_000003_create_club_meeting_table;
mod m20241015_000004_create_club_subscription_table;
mod m20241015_000005_create_club_notification_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241015_000001_create_user_table::Migration),
            Box::new(m20241015_000002_create_club_table::Migration),
            Box::new(m20241015_000003_create_club_meeting_table::Migration),
            Box::new(m20241015_000004_create_club_subscription_table::Migration),
            Box::new(m20241015_000005_create_club_notification_table::Migration),
        ]
    }
}

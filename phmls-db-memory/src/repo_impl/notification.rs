use phmls_core::authorization::notification::NotificationFilter;

use super::*;

impl NotificationRepo for DbConnection<'_> {
    fn create_notification(&self, mut notification: Notification) -> Result<Notification> {
        let mut tables = self.tables_mut()?;
        notification.id = next_id(&mut tables.sequences.notifications)?;
        tables
            .notifications
            .insert(notification.id, notification.clone());
        Ok(notification)
    }
    fn get_notification(&self, id: Id) -> Result<Notification> {
        get(&self.tables().notifications, &id)
    }
    fn update_notification(&self, notification: &Notification) -> Result<()> {
        replace(
            &mut self.tables_mut()?.notifications,
            notification.id,
            notification.clone(),
        )
    }
    fn find_notifications(&self, filter: &NotificationFilter) -> Result<Vec<Notification>> {
        Ok(filtered(&self.tables().notifications, filter))
    }
    fn delete_notifications_of_listing(&self, listing: Id) -> Result<usize> {
        Ok(remove_where(&mut self.tables_mut()?.notifications, |n| {
            n.listing == listing
        }))
    }
}

use super::*;
use crate::entities::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum NotificationField {
    Recipient,
    Listing,
    Read,
}

impl Record for Notification {
    type Field = NotificationField;

    fn value_of(&self, field: NotificationField) -> Value {
        match field {
            NotificationField::Recipient => self.recipient.into(),
            NotificationField::Listing => self.listing.into(),
            NotificationField::Read => self.read.into(),
        }
    }
}

pub type NotificationFilter = Predicate<NotificationField>;

/// Notifications are created by the system on behalf of a
/// workflow change and never directly by regular users.
pub fn access(actor: &User, op: Operation) -> AccessDecision<NotificationField> {
    match (op, actor.role) {
        (_, Role::Admin) => AccessDecision::Allow,
        (Operation::Create, _) => AccessDecision::Deny,
        (Operation::Read | Operation::Update | Operation::Delete, _) => AccessDecision::FilterBy(
            Predicate::equals(NotificationField::Recipient, actor.id),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phmls_entities::builders::*;

    #[test]
    fn only_recipients_see_their_notifications() {
        let notification = Notification {
            id: Id::new(1),
            recipient: Id::new(7),
            listing: Id::new(3),
            kind: NotificationKind::ListingPublished,
            message: "published".into(),
            read: false,
            created_at: Timestamp::now(),
        };
        let recipient = User::build().id(7).finish();
        let approver = User::build().id(8).role(Role::Approver).finish();
        let admin = User::build().id(9).role(Role::Admin).finish();
        assert!(access(&recipient, Operation::Read).permits(&notification));
        assert!(!access(&approver, Operation::Read).permits(&notification));
        assert!(access(&admin, Operation::Delete).permits(&notification));
        assert!(access(&recipient, Operation::Create).is_denied());
    }
}

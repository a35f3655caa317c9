use crate::{id::*, time::Timestamp};

/// Grants read access to a single listing for people
/// without an account.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExternalShareLink {
    pub id             : Id,
    pub token          : Token,
    pub listing        : Id,
    pub created_by     : Id,
    pub is_active      : bool,
    pub expires_at     : Option<Timestamp>,
    pub view_count     : u64,
    pub last_viewed_at : Option<Timestamp>,
    pub created_at     : Timestamp,
}

impl ExternalShareLink {
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn link(expires_at: Option<Timestamp>) -> ExternalShareLink {
        ExternalShareLink {
            id: Id::new(1),
            token: Token::new(),
            listing: Id::new(2),
            created_by: Id::new(3),
            is_active: true,
            expires_at,
            view_count: 0,
            last_viewed_at: None,
            created_at: Timestamp::now(),
        }
    }

    #[test]
    fn links_without_expiry_never_expire() {
        assert!(!link(None).is_expired_at(Timestamp::now()));
    }

    #[test]
    fn expiry_is_exclusive() {
        let now = Timestamp::now();
        let later = now.checked_add(Duration::from_secs(10)).unwrap();
        assert!(!link(Some(later)).is_expired_at(now));
        assert!(link(Some(now)).is_expired_at(now));
        assert!(link(Some(now)).is_expired_at(later));
    }
}

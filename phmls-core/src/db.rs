use crate::repositories::*;

/// Everything a use case may need from the storage layer.
pub trait Db:
    ListingRepo
    + UserRepo
    + LocationRepo
    + ClassificationRepo
    + DocumentRepo
    + NotificationRepo
    + ShareLinkRepo
{
}

impl<T> Db for T where
    T: ListingRepo
        + UserRepo
        + LocationRepo
        + ClassificationRepo
        + DocumentRepo
        + NotificationRepo
        + ShareLinkRepo
{
}

/// Read access to the reference collections that
/// listings point into.
pub trait ReferenceRepo: LocationRepo + ClassificationRepo {}

impl<T> ReferenceRepo for T where T: LocationRepo + ClassificationRepo {}

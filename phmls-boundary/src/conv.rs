use super::*;
use phmls_entities as e;

macro_rules! convert_enum {
    ($boundary:ident, $entity:ty, [$($variant:ident),+ $(,)?]) => {
        impl From<$entity> for $boundary {
            fn from(from: $entity) -> Self {
                type Entity = $entity;
                match from {
                    $(Entity::$variant => Self::$variant,)+
                }
            }
        }

        impl From<$boundary> for $entity {
            fn from(from: $boundary) -> Self {
                match from {
                    $($boundary::$variant => Self::$variant,)+
                }
            }
        }
    };
}

convert_enum!(ListingType, e::listing::ListingType, [Resale, Preselling]);
convert_enum!(
    ListingStatus,
    e::listing::ListingStatus,
    [Draft, Submitted, NeedsRevision, Published, Rejected]
);
convert_enum!(TransactionType, e::listing::TransactionType, [Sale, Rent]);
convert_enum!(
    Furnishing,
    e::listing::Furnishing,
    [Unfurnished, SemiFurnished, FullyFurnished]
);
convert_enum!(Tenure, e::listing::Tenure, [Freehold, Leasehold]);
convert_enum!(TitleStatus, e::listing::TitleStatus, [Clean, Mortgaged, Pending]);
convert_enum!(
    PaymentTerm,
    e::listing::PaymentTerm,
    [Cash, BankFinancing, PagIbig, InHouseFinancing, Installment]
);
convert_enum!(UserRole, e::user::Role, [Agent, Approver, Admin]);
convert_enum!(Visibility, e::document::Visibility, [Private, Internal]);
convert_enum!(
    NotificationKind,
    e::notification::NotificationKind,
    [
        ListingSubmitted,
        ListingPublished,
        ListingNeedsRevision,
        ListingRejected,
    ]
);

fn convert_all<F, T>(from: Vec<F>) -> Vec<T>
where
    T: From<F>,
{
    from.into_iter().map(T::from).collect()
}

impl From<e::listing::Listing> for Listing {
    fn from(from: e::listing::Listing) -> Self {
        let e::listing::Listing {
            id,
            revision,
            title,
            description,
            listing_type,
            status,
            created_by,
            created_at,
            updated_at,
            property_category,
            property_type,
            property_subtype,
            province,
            city,
            barangay,
            development,
            street_address,
            transaction_types,
            price,
            price_per_sqm,
            floor_area_sqm,
            lot_area_sqm,
            bedrooms,
            bathrooms,
            parking_slots,
            furnishing,
            construction_year,
            tenure,
            title_status,
            payment_terms,
            model_name,
            indicative_price_min,
            indicative_price_max,
            min_floor_area_sqm,
            min_lot_area_sqm,
            standard_inclusions,
            preselling_notes,
        } = from;
        Self {
            id: id.into(),
            revision: revision.into(),
            title,
            description,
            listing_type: listing_type.into(),
            status: status.into(),
            created_by: created_by.into(),
            created_at: created_at.as_millis(),
            updated_at: updated_at.as_millis(),
            fields: ListingFields {
                property_category: property_category.map(Into::into),
                property_type: property_type.map(Into::into),
                property_subtype: property_subtype.map(Into::into),
                province: province.map(Into::into),
                city: city.map(Into::into),
                barangay: barangay.map(Into::into),
                development: development.map(Into::into),
                street_address,
                transaction_types: convert_all(transaction_types),
                price,
                price_per_sqm,
                floor_area_sqm,
                lot_area_sqm,
                bedrooms,
                bathrooms,
                parking_slots,
                furnishing: furnishing.map(Into::into),
                construction_year,
                tenure: tenure.map(Into::into),
                title_status: title_status.map(Into::into),
                payment_terms: convert_all(payment_terms),
                model_name,
                indicative_price_min,
                indicative_price_max,
                min_floor_area_sqm,
                min_lot_area_sqm,
                standard_inclusions,
                preselling_notes,
            },
        }
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id,
            email,
            name,
            role,
        } = from;
        Self {
            id: id.into(),
            email,
            name,
            role: role.into(),
        }
    }
}

impl From<e::document::Document> for Document {
    fn from(from: e::document::Document) -> Self {
        let e::document::Document {
            id,
            listing,
            title,
            file_name,
            visibility,
            uploaded_by,
            created_at,
        } = from;
        Self {
            id: id.into(),
            listing: listing.into(),
            title,
            file_name,
            visibility: visibility.into(),
            uploaded_by: uploaded_by.into(),
            created_at: created_at.as_millis(),
        }
    }
}

impl From<e::notification::Notification> for Notification {
    fn from(from: e::notification::Notification) -> Self {
        let e::notification::Notification {
            id,
            recipient,
            listing,
            kind,
            message,
            read,
            created_at,
        } = from;
        Self {
            id: id.into(),
            recipient: recipient.into(),
            listing: listing.into(),
            kind: kind.into(),
            message,
            read,
            created_at: created_at.as_millis(),
        }
    }
}

impl From<e::share_link::ExternalShareLink> for ShareLink {
    fn from(from: e::share_link::ExternalShareLink) -> Self {
        let e::share_link::ExternalShareLink {
            id,
            token,
            listing,
            created_by,
            is_active,
            expires_at,
            view_count,
            last_viewed_at,
            created_at,
        } = from;
        Self {
            id: id.into(),
            token: token.into(),
            listing: listing.into(),
            created_by: created_by.into(),
            is_active,
            expires_at: expires_at.map(e::time::Timestamp::as_millis),
            view_count,
            last_viewed_at: last_viewed_at.map(e::time::Timestamp::as_millis),
            created_at: created_at.as_millis(),
        }
    }
}

impl From<Province> for e::location::Province {
    fn from(from: Province) -> Self {
        let Province { code, name } = from;
        Self {
            code: code.into(),
            name,
        }
    }
}

impl From<City> for e::location::City {
    fn from(from: City) -> Self {
        let City {
            code,
            name,
            province,
        } = from;
        Self {
            code: code.into(),
            name,
            province: province.into(),
        }
    }
}

impl From<Barangay> for e::location::Barangay {
    fn from(from: Barangay) -> Self {
        let Barangay { code, name, city } = from;
        Self {
            code: code.into(),
            name,
            city: city.into(),
        }
    }
}

impl From<Development> for e::location::Development {
    fn from(from: Development) -> Self {
        let Development {
            id,
            name,
            barangay,
            developer,
        } = from;
        Self {
            id: id.into(),
            name,
            barangay: barangay.into(),
            developer,
        }
    }
}

impl From<PropertyCategory> for e::classification::PropertyCategory {
    fn from(from: PropertyCategory) -> Self {
        let PropertyCategory { id, name } = from;
        Self {
            id: id.into(),
            name,
        }
    }
}

impl From<PropertyType> for e::classification::PropertyType {
    fn from(from: PropertyType) -> Self {
        let PropertyType {
            id,
            name,
            category,
            lot_like,
        } = from;
        Self {
            id: id.into(),
            name,
            category: category.into(),
            lot_like,
        }
    }
}

impl From<PropertySubtype> for e::classification::PropertySubtype {
    fn from(from: PropertySubtype) -> Self {
        let PropertySubtype {
            id,
            name,
            property_type,
        } = from;
        Self {
            id: id.into(),
            name,
            property_type: property_type.into(),
        }
    }
}

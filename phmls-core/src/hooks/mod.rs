//! Pre-save hooks of listings.
//!
//! Every create or update runs the candidate listing through an ordered
//! chain of hooks. A hook may rewrite the candidate or reject it. The
//! chain stops at the first rejection and nothing is stored.
//!
//! The order matters: defaults are applied first, the location and the
//! classification are checked next (with dependent classification fields
//! being reset before they are checked), followed by the rules that
//! depend on the listing type and finally the status transition.

use crate::{
    authorization::Operation,
    db::ReferenceRepo,
    entities::{Listing, User},
};

mod classification;
mod defaults;
mod error;
mod listing_type;
mod location;
mod status;

pub use self::{
    classification::{ClassificationHierarchy, ResetClassification},
    defaults::Defaults,
    error::Error,
    listing_type::ListingTypeFields,
    location::LocationHierarchy,
    status::StatusTransition,
};

pub(crate) use self::error::lookup;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy)]
pub struct ChangeContext<'a> {
    pub operation: Operation,
    pub actor: &'a User,
    /// The persisted state before the change,
    /// `None` when creating a new listing.
    pub original: Option<&'a Listing>,
}

impl<'a> ChangeContext<'a> {
    pub const fn create(actor: &'a User) -> Self {
        Self {
            operation: Operation::Create,
            actor,
            original: None,
        }
    }

    pub const fn update(actor: &'a User, original: &'a Listing) -> Self {
        Self {
            operation: Operation::Update,
            actor,
            original: Some(original),
        }
    }
}

pub trait Hook {
    fn name(&self) -> &'static str;

    fn run(
        &self,
        ctx: &ChangeContext,
        candidate: Listing,
        refs: &dyn ReferenceRepo,
    ) -> Result<Listing>;
}

pub struct Pipeline {
    hooks: Vec<Box<dyn Hook>>,
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_list()
            .entries(self.hooks.iter().map(|h| h.name()))
            .finish()
    }
}

impl Pipeline {
    pub fn new(hooks: Vec<Box<dyn Hook>>) -> Self {
        Self { hooks }
    }

    pub fn listing() -> Self {
        Self::new(vec![
            Box::new(Defaults),
            Box::new(LocationHierarchy),
            Box::new(ResetClassification),
            Box::new(ClassificationHierarchy),
            Box::new(ListingTypeFields),
            Box::new(StatusTransition),
        ])
    }

    pub fn hook_names(&self) -> Vec<&'static str> {
        self.hooks.iter().map(|h| h.name()).collect()
    }

    pub fn run(
        &self,
        ctx: &ChangeContext,
        candidate: Listing,
        refs: &dyn ReferenceRepo,
    ) -> Result<Listing> {
        self.hooks.iter().try_fold(candidate, |candidate, hook| {
            hook.run(ctx, candidate, refs).inspect_err(|err| {
                log::debug!("Hook '{}' rejected listing: {err}", hook.name());
            })
        })
    }
}

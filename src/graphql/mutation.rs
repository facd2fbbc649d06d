//! Mutation resolvers - the write side of the contact API
//!
//! Every mutation is a single autocommitted write. Update and delete key on
//! the immutable id and report NOT_FOUND when no row matched, rather than
//! claiming success for a no-op.

use async_graphql::{Context, ErrorExtensions, ID, Object};

use super::parse_id;
use crate::contact::Contact;
use crate::storage::ContactStore;

/// Root mutation type
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a contact, returning it with the storage-assigned id.
    ///
    /// A duplicate email fails with UNIQUE_VIOLATION and leaves the store
    /// untouched.
    async fn create_contact(
        &self,
        ctx: &Context<'_>,
        first_name: String,
        last_name: String,
        email: String,
    ) -> async_graphql::Result<Contact> {
        let store = ctx.data::<ContactStore>()?;
        store
            .insert_contact(&first_name, &last_name, &email)
            .await
            .map_err(|e| e.extend())
    }

    /// Overwrite every mutable field of an existing contact (the id never
    /// changes). Returns a confirmation string naming the contact.
    async fn update_contact(
        &self,
        ctx: &Context<'_>,
        id: ID,
        first_name: String,
        last_name: String,
        email: String,
    ) -> async_graphql::Result<String> {
        let store = ctx.data::<ContactStore>()?;
        let id = parse_id(&id)?;
        store
            .update_contact(id, &first_name, &last_name, &email)
            .await
            .map_err(|e| e.extend())?;
        Ok(format!("Contact #{} updated", id))
    }

    /// Permanently remove a contact. Returns a confirmation string naming
    /// the contact.
    async fn delete_contact(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<String> {
        let store = ctx.data::<ContactStore>()?;
        let id = parse_id(&id)?;
        store.delete_contact(id).await.map_err(|e| e.extend())?;
        Ok(format!("Contact #{} deleted", id))
    }
}

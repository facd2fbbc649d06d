//! Query resolvers - the read side of the contact API

use async_graphql::{Context, ErrorExtensions, ID, Object};

use super::parse_id;
use crate::contact::Contact;
use crate::storage::ContactStore;

/// Root query type
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All contacts in the store, in storage scan order.
    ///
    /// A storage failure propagates as a field error; it is never
    /// flattened into an empty list.
    async fn contacts(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Contact>> {
        let store = ctx.data::<ContactStore>()?;
        store.list_contacts().await.map_err(|e| e.extend())
    }

    /// A single contact by id, or null when no row matches.
    ///
    /// A miss is a valid outcome, not an error.
    async fn contact(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<Option<Contact>> {
        let store = ctx.data::<ContactStore>()?;
        let id = parse_id(&id)?;
        store.get_contact(id).await.map_err(|e| e.extend())
    }
}

#[cfg(test)]
mod tests {
    use async_graphql::value;

    use crate::graphql::{ContactSchema, build_schema};
    use crate::storage::ContactStore;

    async fn seeded_schema() -> (ContactSchema, ContactStore) {
        let store = ContactStore::open_in_memory().unwrap();
        store
            .insert_contact("Ada", "Lovelace", "ada@example.com")
            .await
            .unwrap();
        (build_schema(store.clone()), store)
    }

    #[tokio::test]
    async fn test_contacts_lists_all_fields() {
        let (schema, _store) = seeded_schema().await;

        let resp = schema
            .execute("{ contacts { id firstName lastName email } }")
            .await;

        assert!(resp.errors.is_empty());
        assert_eq!(
            resp.data,
            value!({
                "contacts": [{
                    "id": "1",
                    "firstName": "Ada",
                    "lastName": "Lovelace",
                    "email": "ada@example.com",
                }],
            })
        );
    }

    #[tokio::test]
    async fn test_contact_by_id() {
        let (schema, _store) = seeded_schema().await;

        let resp = schema
            .execute(r#"{ contact(id: "1") { firstName email } }"#)
            .await;

        assert!(resp.errors.is_empty());
        assert_eq!(
            resp.data,
            value!({
                "contact": { "firstName": "Ada", "email": "ada@example.com" },
            })
        );
    }

    #[tokio::test]
    async fn test_contact_miss_is_null_not_error() {
        let (schema, _store) = seeded_schema().await;

        let resp = schema.execute(r#"{ contact(id: "999") { id } }"#).await;

        assert!(resp.errors.is_empty());
        assert_eq!(resp.data, value!({ "contact": null }));
    }

    #[tokio::test]
    async fn test_contacts_propagates_storage_failure() {
        let (schema, store) = seeded_schema().await;

        // Pull the table out from under the live store
        store.execute("DROP TABLE contacts", vec![]).await.unwrap();

        let resp = schema.execute("{ contacts { id } }").await;
        let body = serde_json::to_value(&resp).unwrap();

        assert_eq!(body["errors"][0]["extensions"]["code"], "STORAGE");
        assert_eq!(body["data"], serde_json::Value::Null);
    }
}

//! Contact entity - the sole resource exposed by the API
//!
//! A flat record of four fields. `id` is assigned by storage on creation
//! and never mutated or reused; `email` is unique across all contacts.

use async_graphql::{ComplexObject, ID, SimpleObject};

/// A contact record as exposed through the API.
///
/// Stored with an integer primary key, surfaced to clients as the GraphQL
/// `ID` scalar. Field names render in camelCase on the wire
/// (`firstName`, `lastName`, `email`).
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
#[graphql(complex)]
pub struct Contact {
    /// Storage-assigned row id, immutable after creation
    #[graphql(skip)]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[ComplexObject]
impl Contact {
    /// The storage-assigned identifier, exposed as the `ID` scalar
    async fn id(&self) -> ID {
        ID(self.id.to_string())
    }
}

impl Contact {
    /// Create a contact from its stored fields
    pub fn new(
        id: i64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_creation() {
        let contact = Contact::new(1, "Ada", "Lovelace", "ada@example.com");

        assert_eq!(contact.id, 1);
        assert_eq!(contact.first_name, "Ada");
        assert_eq!(contact.last_name, "Lovelace");
        assert_eq!(contact.email, "ada@example.com");
    }
}

//! GraphQL layer - resolver roots and schema assembly
//!
//! The executable schema is the single entry point the HTTP transport
//! invokes: it validates each incoming operation against the declared
//! field/argument types, dispatches to the matching resolver, and shapes
//! the outcome into a response with per-field error isolation (a failing
//! field reports into `errors` with its path while sibling fields still
//! resolve).

pub mod mutation;
pub mod query;

use async_graphql::{EmptySubscription, ErrorExtensions, ID, Schema};

pub use mutation::MutationRoot;
pub use query::QueryRoot;

use crate::storage::ContactStore;

/// The complete GraphQL schema
pub type ContactSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Create a new GraphQL schema with the given storage gateway.
///
/// The gateway is injected as schema data; resolvers pull it from the
/// request context instead of reaching for process-wide state.
pub fn build_schema(store: ContactStore) -> ContactSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

impl ErrorExtensions for crate::Error {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, ext| match self {
            crate::Error::UniqueViolation(_) => ext.set("code", "UNIQUE_VIOLATION"),
            crate::Error::NotFound(_) => ext.set("code", "NOT_FOUND"),
            crate::Error::Storage(_) => ext.set("code", "STORAGE"),
        })
    }
}

/// Parse the integer key out of a GraphQL `ID` argument.
///
/// The `ID` scalar admits arbitrary strings; a non-integer id is rejected
/// here instead of being handed to SQLite's loose text comparison.
pub(crate) fn parse_id(id: &ID) -> async_graphql::Result<i64> {
    id.parse::<i64>().map_err(|_| {
        async_graphql::Error::new(format!("Invalid contact id: {}", id.as_str()))
            .extend_with(|_, ext| ext.set("code", "INVALID_ID"))
    })
}

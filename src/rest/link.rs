//! Weak client handles carried by returned entities.
//!
//! An entity returned by a facade keeps a [`ClientLink`] so it can issue its
//! own follow-up lookups. The link never keeps the client alive; once every
//! [`Bricklink`](crate::Bricklink) handle is dropped, or for an entity the
//! caller built or deserialized, the link is dead and the lookup fails with
//! [`RestError::Unassociated`].

use std::sync::{Arc, Weak};

use crate::clients::{RestClient, RestError};

/// A weak reference to the client that produced an entity.
#[derive(Clone, Debug, Default)]
pub struct ClientLink(Option<Weak<RestClient>>);

impl ClientLink {
    /// Links to a live client.
    #[must_use]
    pub fn new(client: &Arc<RestClient>) -> Self {
        Self(Some(Arc::downgrade(client)))
    }

    /// A link to nothing.
    #[must_use]
    pub const fn detached() -> Self {
        Self(None)
    }

    /// Returns `true` if the client is still alive.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.0.as_ref().is_some_and(|weak| weak.strong_count() > 0)
    }

    /// Upgrades to the client for one call.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Unassociated`] naming `resource` and `operation`
    /// if the link is detached or the client has been dropped.
    pub fn client(
        &self,
        resource: &'static str,
        operation: &'static str,
    ) -> Result<Arc<RestClient>, RestError> {
        self.0
            .as_ref()
            .and_then(Weak::upgrade)
            .ok_or(RestError::Unassociated {
                resource,
                operation,
            })
    }
}

impl PartialEq for ClientLink {
    /// Links never affect entity equality.
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ClientLink {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BricklinkConfig;
    use crate::Credentials;

    fn create_test_client() -> Arc<RestClient> {
        let credentials = Credentials::new("ck", "cs", "tk", "ts").unwrap();
        Arc::new(RestClient::new(&BricklinkConfig::from_credentials(credentials)).unwrap())
    }

    #[test]
    fn test_detached_link_is_unassociated() {
        let link = ClientLink::detached();
        assert!(!link.is_live());
        assert!(matches!(
            link.client("Order", "fetch items"),
            Err(RestError::Unassociated {
                resource: "Order",
                operation: "fetch items"
            })
        ));
    }

    #[test]
    fn test_live_link_upgrades() {
        let client = create_test_client();
        let link = ClientLink::new(&client);
        assert!(link.is_live());
        assert!(link.client("Order", "fetch items").is_ok());
    }

    #[test]
    fn test_link_does_not_keep_client_alive() {
        let client = create_test_client();
        let link = ClientLink::new(&client);
        drop(client);

        assert!(!link.is_live());
        assert!(link.client("CatalogItem", "fetch image").is_err());
    }

    #[test]
    fn test_links_compare_equal() {
        let client = create_test_client();
        assert_eq!(ClientLink::new(&client), ClientLink::detached());
    }
}

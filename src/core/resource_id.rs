//! Fully-qualified resource id parsing and construction.
//!
//! A fully-qualified id has the form
//! `/subscriptions/{sub}/resourceGroups/{rg}/providers/{namespace}/{type}/{name}`,
//! optionally followed by further `{type}/{name}` child pairs. Path keywords
//! are matched case-insensitively, the way the management API accepts them.

/// A parsed fully-qualified resource id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceId {
    pub subscription: String,
    pub resource_group: String,
    pub namespace: String,
    pub resource_type: String,
    pub name: String,
}

impl ResourceId {
    /// Parse a fully-qualified resource id, or `None` if the string is a
    /// short name or otherwise malformed.
    pub fn parse(id: &str) -> Option<Self> {
        let mut parts = id.strip_prefix('/')?.split('/');

        if !parts.next()?.eq_ignore_ascii_case("subscriptions") {
            return None;
        }
        let subscription = nonempty(parts.next()?)?;

        if !parts.next()?.eq_ignore_ascii_case("resourceGroups") {
            return None;
        }
        let resource_group = nonempty(parts.next()?)?;

        if !parts.next()?.eq_ignore_ascii_case("providers") {
            return None;
        }
        let namespace = nonempty(parts.next()?)?;
        let mut resource_type = nonempty(parts.next()?)?;
        let mut name = nonempty(parts.next()?)?;

        // Child resources replace the leaf type/name pair by pair.
        loop {
            match (parts.next(), parts.next()) {
                (None, _) => break,
                (Some(t), Some(n)) => {
                    resource_type = nonempty(t)?;
                    name = nonempty(n)?;
                }
                (Some(_), None) => return None,
            }
        }

        Some(Self {
            subscription: subscription.to_string(),
            resource_group: resource_group.to_string(),
            namespace: namespace.to_string(),
            resource_type: resource_type.to_string(),
            name: name.to_string(),
        })
    }
}

fn nonempty(segment: &str) -> Option<&str> {
    if segment.is_empty() {
        None
    } else {
        Some(segment)
    }
}

/// Whether a string is already a fully-qualified resource id.
pub fn is_valid_resource_id(id: &str) -> bool {
    ResourceId::parse(id).is_some()
}

/// Build a fully-qualified resource id from its components.
pub fn resource_id(
    subscription: &str,
    resource_group: &str,
    namespace: &str,
    resource_type: &str,
    name: &str,
) -> String {
    format!(
        "/subscriptions/{}/resourceGroups/{}/providers/{}/{}/{}",
        subscription, resource_group, namespace, resource_type, name
    )
}

use std::fmt;
use std::rc::Rc;

/// Application-chosen identity of a stateful element (button, container).
///
/// Identities are compared by string value. Two interactive elements that share
/// an identity within one frame share hover/press attribution as well.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(Rc<str>);

impl ItemId {
    pub fn new(id: impl AsRef<str>) -> Self {
        ItemId(Rc::from(id.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Identity of the scrollbar thumb owned by the container named `self`.
    pub fn scrollbar(&self) -> ItemId {
        ItemId::new(format!("{}::scrollbar", self.0))
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId::new(s)
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        ItemId(Rc::from(s))
    }
}

impl From<&String> for ItemId {
    fn from(s: &String) -> Self {
        ItemId::new(s)
    }
}

impl From<&ItemId> for ItemId {
    fn from(id: &ItemId) -> Self {
        id.clone()
    }
}

impl PartialEq<str> for ItemId {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for ItemId {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl fmt::Debug for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemId({:?})", &*self.0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

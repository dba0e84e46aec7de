//! The hero resource type and related values.
//!
//! A [`Hero`] is owned by the backend store; this crate holds no hero
//! state between calls. Beyond the identifier and name, the backend may
//! attach arbitrary fields, which pass through (de)serialization
//! unmodified via a flattened map.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An opaque acknowledgement body returned by a write operation.
///
/// The shape is backend-defined; the SDK does not interpret it.
pub type Ack = Value;

/// A hero as served by the backend.
///
/// The `id` is assigned by the backend and is absent on heroes that have
/// not been created yet. Once assigned, an id is immutable for the life
/// of the record.
///
/// # Field Passthrough
///
/// Any fields the backend defines beyond `id` and `name` are preserved in
/// `extra` and serialized back out unchanged.
///
/// # Example
///
/// ```rust
/// use heroes_api::Hero;
///
/// let hero: Hero = serde_json::from_str(r#"{"id":11,"name":"Dr Nice","power":"empathy"}"#).unwrap();
/// assert_eq!(hero.id, Some(11));
/// assert_eq!(hero.extra.get("power").unwrap(), "empathy");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    /// The backend-assigned unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// The hero's name.
    pub name: String,
    /// Backend-defined fields, passed through unmodified.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Hero {
    /// Creates a hero that has not been created on the backend yet.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            extra: Map::new(),
        }
    }

    /// Creates a hero with a known backend id.
    #[must_use]
    pub fn with_id(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            extra: Map::new(),
        }
    }
}

/// A reference to a hero for removal: either a bare id or a full record.
///
/// Callers pass either form directly; the variant is chosen by the
/// argument's type at the call site, so no runtime shape inspection is
/// needed.
///
/// # Example
///
/// ```rust
/// use heroes_api::{Hero, HeroRef};
///
/// let by_id: HeroRef = 7.into();
/// let by_value: HeroRef = Hero::with_id(7, "Zorg").into();
/// assert_eq!(by_id.id(), Some(7));
/// assert_eq!(by_value.id(), Some(7));
/// ```
#[derive(Clone, Debug)]
pub enum HeroRef {
    /// A bare backend id.
    Id(u64),
    /// A full hero record; its `id` field addresses the backend resource.
    Hero(Hero),
}

impl HeroRef {
    /// Returns the backend id this reference addresses, if it has one.
    #[must_use]
    pub const fn id(&self) -> Option<u64> {
        match self {
            Self::Id(id) => Some(*id),
            Self::Hero(hero) => hero.id,
        }
    }
}

impl From<u64> for HeroRef {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

impl From<Hero> for HeroRef {
    fn from(hero: Hero) -> Self {
        Self::Hero(hero)
    }
}

impl From<&Hero> for HeroRef {
    fn from(hero: &Hero) -> Self {
        Self::Hero(hero.clone())
    }
}

//! Identity-based equality for models with an `id`.

/// A model identified by a unique id.
///
/// Models implementing this through [`impl_identity!`](crate::impl_identity)
/// compare and hash by id alone, so a stale and a refreshed copy of the same
/// item are equal.
pub trait HasIdentity {
    /// The unique id.
    fn id(&self) -> &str;
}

/// Implement [`HasIdentity`], `PartialEq`, `Eq` and `Hash` from an `id: String` field.
#[macro_export]
macro_rules! impl_identity {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::identity::HasIdentity for $ty {
                fn id(&self) -> &str {
                    &self.id
                }
            }

            impl ::std::cmp::PartialEq for $ty {
                fn eq(&self, other: &Self) -> bool {
                    self.id == other.id
                }
            }

            impl ::std::cmp::Eq for $ty {}

            impl ::std::hash::Hash for $ty {
                fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                    ::std::hash::Hash::hash(&self.id, state);
                }
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use super::HasIdentity;
    use std::collections::HashSet;

    #[derive(Debug)]
    struct Playlist {
        id: String,
        name: String,
    }

    crate::impl_identity!(Playlist);

    #[test]
    fn equality_and_hash_use_id_only() {
        let stale = Playlist {
            id: "Playlist_DefaultSolo".to_string(),
            name: "Solo".to_string(),
        };
        let fresh = Playlist {
            id: "Playlist_DefaultSolo".to_string(),
            name: "Solo (updated)".to_string(),
        };
        let other = Playlist {
            id: "Playlist_DefaultDuo".to_string(),
            name: "Solo".to_string(),
        };

        assert_eq!(stale, fresh);
        assert_ne!(stale, other);
        assert_eq!(stale.id(), "Playlist_DefaultSolo");
        assert_ne!(stale.name, fresh.name);

        let set: HashSet<Playlist> = [stale, fresh, other].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}

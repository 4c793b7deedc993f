//! Forward-only lifecycle state machine.
//!
//! A lifecycle is a fixed, ordered status sequence. Records move one step at
//! a time towards the terminal (last) status; advancing a record that is
//! already terminal leaves it unchanged. [`define_lifecycle!`] declares a
//! status enum together with its sequence, and [`TrackedList`] holds the
//! records a caller owns, newest first.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::RecordId;

/// A status type with a fixed forward-only sequence.
pub trait LifecycleStatus: Copy + Eq + std::fmt::Debug + Send + Sync + 'static {
    /// Lifecycle name used in error messages.
    const NAME: &'static str;

    /// Every status, in transition order. The first entry is the initial
    /// status and the last entry is terminal.
    const SEQUENCE: &'static [Self];

    /// Status new records are created in.
    fn initial() -> Self;

    /// Wire value.
    fn as_str(self) -> &'static str;

    /// The status after `self`, or `None` at the terminal status.
    fn next(self) -> Option<Self> {
        Self::SEQUENCE
            .iter()
            .position(|s| *s == self)
            .and_then(|i| Self::SEQUENCE.get(i + 1))
            .copied()
    }

    fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    /// Parse a wire value, rejecting anything outside the sequence.
    fn parse(s: &str) -> Result<Self, CoreError> {
        Self::SEQUENCE
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = Self::SEQUENCE.iter().map(|s| s.as_str()).collect();
                CoreError::Validation(format!(
                    "Invalid {} status '{s}'. Must be one of: {}",
                    Self::NAME,
                    valid.join(", ")
                ))
            })
    }
}

/// Declare a lifecycle status enum.
///
/// Variants are listed in transition order; the first is initial and the
/// last is terminal.
///
/// ```
/// use castline_core::define_lifecycle;
/// use castline_core::lifecycle::LifecycleStatus;
///
/// define_lifecycle! {
///     /// Review of a draft.
///     DraftStatus ("draft") {
///         Open = "open",
///         Closed = "closed",
///     }
/// }
///
/// assert_eq!(DraftStatus::initial(), DraftStatus::Open);
/// assert_eq!(DraftStatus::Open.next(), Some(DraftStatus::Closed));
/// assert!(DraftStatus::Closed.is_terminal());
/// ```
#[macro_export]
macro_rules! define_lifecycle {
    (
        $(#[$meta:meta])*
        $name:ident ($lifecycle:literal) {
            $(#[$fmeta:meta])* $first:ident = $first_val:literal
            $(, $(#[$vmeta:meta])* $variant:ident = $val:literal )* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        pub enum $name {
            $(#[$fmeta])* #[serde(rename = $first_val)] $first,
            $( $(#[$vmeta])* #[serde(rename = $val)] $variant ),*
        }

        impl $crate::lifecycle::LifecycleStatus for $name {
            const NAME: &'static str = $lifecycle;
            const SEQUENCE: &'static [Self] = &[$name::$first $(, $name::$variant)*];

            fn initial() -> Self {
                $name::$first
            }

            fn as_str(self) -> &'static str {
                match self {
                    $name::$first => $first_val,
                    $( $name::$variant => $val ),*
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::lifecycle::LifecycleStatus::as_str(*self))
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Tracked records
// ---------------------------------------------------------------------------

/// A record whose status follows a lifecycle.
pub trait Tracked {
    type Status: LifecycleStatus;

    /// Entity name used in not-found errors.
    const ENTITY: &'static str;

    fn id(&self) -> RecordId;
    fn status(&self) -> Self::Status;
    fn set_status(&mut self, status: Self::Status);
}

/// Result of [`TrackedList::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Transition<S> {
    /// The record moved one step forward.
    Advanced { from: S, to: S },
    /// The record was already terminal.
    Unchanged { status: S },
}

impl<S: Copy> Transition<S> {
    /// Status after the transition.
    pub fn status(&self) -> S {
        match self {
            Self::Advanced { to, .. } => *to,
            Self::Unchanged { status } => *status,
        }
    }
}

/// A caller's list of tracked records, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackedList<T> {
    items: Vec<T>,
}

impl<T> Default for TrackedList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Tracked> TrackedList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record at the front of the list.
    pub fn push_front(&mut self, record: T) {
        self.items.insert(0, record);
    }

    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.items.iter().find(|r| r.id() == id)
    }

    /// Advance the record with `id` one step along its lifecycle.
    ///
    /// Terminal records are left unchanged. An unknown id is an error.
    pub fn advance(&mut self, id: RecordId) -> Result<Transition<T::Status>, CoreError> {
        let record = self
            .items
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(CoreError::RecordNotFound {
                entity: T::ENTITY,
                id,
            })?;

        let from = record.status();
        match from.next() {
            Some(to) => {
                record.set_status(to);
                Ok(Transition::Advanced { from, to })
            }
            None => Ok(Transition::Unchanged { status: from }),
        }
    }

    /// Remove the record with `id`. Returns `None` if it is not (or no
    /// longer) present.
    pub fn withdraw(&mut self, id: RecordId) -> Option<T> {
        let index = self.items.iter().position(|r| r.id() == id)?;
        Some(self.items.remove(index))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> From<Vec<T>> for TrackedList<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use uuid::Uuid;

    use super::*;

    define_lifecycle! {
        Stage ("stage") {
            Draft = "draft",
            Review = "review",
            Done = "done",
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: RecordId,
        stage: Stage,
    }

    impl Item {
        fn new() -> Self {
            Self {
                id: Uuid::new_v4(),
                stage: Stage::initial(),
            }
        }
    }

    impl Tracked for Item {
        type Status = Stage;
        const ENTITY: &'static str = "item";

        fn id(&self) -> RecordId {
            self.id
        }
        fn status(&self) -> Stage {
            self.stage
        }
        fn set_status(&mut self, status: Stage) {
            self.stage = status;
        }
    }

    #[test]
    fn sequence_is_declaration_order() {
        assert_eq!(Stage::SEQUENCE, &[Stage::Draft, Stage::Review, Stage::Done]);
        assert_eq!(Stage::initial(), Stage::Draft);
        assert_eq!(Stage::Draft.next(), Some(Stage::Review));
        assert_eq!(Stage::Review.next(), Some(Stage::Done));
        assert_eq!(Stage::Done.next(), None);
        assert!(Stage::Done.is_terminal());
        assert!(!Stage::Draft.is_terminal());
    }

    #[test]
    fn parse_and_display_use_wire_values() {
        assert_eq!(Stage::parse("review").unwrap(), Stage::Review);
        assert_eq!(Stage::Review.to_string(), "review");
        let err = Stage::parse("shipped").unwrap_err().to_string();
        assert!(err.contains("Invalid stage status 'shipped'"));
        assert!(err.contains("draft, review, done"));
    }

    #[test]
    fn serde_uses_wire_values() {
        assert_eq!(serde_json::to_string(&Stage::Done).unwrap(), r#""done""#);
    }

    #[test]
    fn push_front_puts_newest_first() {
        let mut list = TrackedList::new();
        let a = Item::new();
        let b = Item::new();
        list.push_front(a.clone());
        list.push_front(b.clone());
        let order: Vec<RecordId> = list.iter().map(|i| i.id).collect();
        assert_eq!(order, vec![b.id, a.id]);
    }

    #[test]
    fn advance_moves_one_step() {
        let mut list = TrackedList::new();
        let item = Item::new();
        list.push_front(item.clone());

        assert_eq!(
            list.advance(item.id).unwrap(),
            Transition::Advanced {
                from: Stage::Draft,
                to: Stage::Review
            }
        );
        assert_eq!(list.get(item.id).unwrap().stage, Stage::Review);
    }

    #[test]
    fn advance_at_terminal_is_noop() {
        let mut list = TrackedList::new();
        let item = Item::new();
        list.push_front(item.clone());
        list.advance(item.id).unwrap();
        list.advance(item.id).unwrap();

        for _ in 0..3 {
            assert_eq!(
                list.advance(item.id).unwrap(),
                Transition::Unchanged { status: Stage::Done }
            );
        }
        assert_eq!(list.get(item.id).unwrap().stage, Stage::Done);
    }

    #[test]
    fn advance_unknown_id_is_not_found() {
        let mut list: TrackedList<Item> = TrackedList::new();
        assert_matches!(
            list.advance(Uuid::new_v4()),
            Err(CoreError::RecordNotFound { entity: "item", .. })
        );
    }

    #[test]
    fn withdraw_removes_exactly_one_and_is_idempotent() {
        let mut list = TrackedList::new();
        let keep = Item::new();
        let drop = Item::new();
        list.push_front(keep.clone());
        list.push_front(drop.clone());

        assert_eq!(list.withdraw(drop.id), Some(drop.clone()));
        assert_eq!(list.len(), 1);
        assert_eq!(list.withdraw(drop.id), None);
        assert_eq!(list.len(), 1);
        assert!(list.get(keep.id).is_some());
    }

    #[test]
    fn transition_status_reports_final_status() {
        let advanced = Transition::Advanced {
            from: Stage::Draft,
            to: Stage::Review,
        };
        assert_eq!(advanced.status(), Stage::Review);
        assert_eq!(Transition::Unchanged { status: Stage::Done }.status(), Stage::Done);
    }
}

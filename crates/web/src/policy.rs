//! Authorization layer.
//!
//! Every resource maps to a class-level policy, checked before the handler
//! runs, and an object-level policy, checked once the target object is
//! loaded. Anonymous callers are denied by every policy.

use axum::http::Method;
use storage::models::{Equipment, Exercise, Movement, MovementSetting, Principal, Training};

use crate::error::WebError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Read,
    Write,
}

impl Action {
    /// GET, HEAD and OPTIONS are reads; every other method writes.
    pub fn from_method(method: &Method) -> Self {
        if matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS) {
            Self::Read
        } else {
            Self::Write
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Any authenticated principal
    Authenticated,
    /// Everyone authenticated reads, admins write
    AdminOrReadOnly,
    /// Everyone authenticated reads, admins and the founder write
    AdminOrFounderOrReadOnly,
    /// Reads need a default object, ownership or admin; writes need
    /// ownership or admin
    ExerciseDefaultOrAdminOrFounder,
    /// Only admins and the founder, for reads and writes
    AdminOrFounder,
}

/// Objects that carry an owner, and optionally a public default flag
pub trait Owned {
    fn founder_id(&self) -> i32;

    fn is_default(&self) -> bool {
        false
    }
}

impl Policy {
    /// Class-level decision, made before any object is known
    pub fn has_permission(self, principal: Option<&Principal>, action: Action) -> bool {
        let Some(principal) = principal else {
            return false;
        };

        match self {
            Self::AdminOrReadOnly => action == Action::Read || principal.is_admin,
            Self::Authenticated
            | Self::AdminOrFounderOrReadOnly
            | Self::ExerciseDefaultOrAdminOrFounder
            | Self::AdminOrFounder => true,
        }
    }

    /// Object-level decision for a loaded object
    pub fn has_object_permission(
        self,
        principal: Option<&Principal>,
        action: Action,
        object: &impl Owned,
    ) -> bool {
        let Some(principal) = principal else {
            return false;
        };
        let is_founder = principal.is_founder_of(object.founder_id());

        match self {
            Self::Authenticated => true,
            Self::AdminOrReadOnly => action == Action::Read || principal.is_admin,
            Self::AdminOrFounderOrReadOnly => {
                action == Action::Read || principal.is_admin || is_founder
            }
            Self::ExerciseDefaultOrAdminOrFounder => match action {
                Action::Read => object.is_default() || principal.is_admin || is_founder,
                Action::Write => principal.is_admin || is_founder,
            },
            Self::AdminOrFounder => principal.is_admin || is_founder,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Equipment,
    Movement,
    MovementSetting,
    Exercise,
    Training,
    MovementsPerExercise,
}

impl Resource {
    pub fn policy(self) -> Policy {
        match self {
            Self::Equipment | Self::Movement | Self::MovementSetting => Policy::AdminOrReadOnly,
            Self::Exercise => Policy::AdminOrFounderOrReadOnly,
            Self::Training => Policy::AdminOrFounder,
            Self::MovementsPerExercise => Policy::Authenticated,
        }
    }

    /// For `MovementsPerExercise` the object is the parent exercise.
    pub fn object_policy(self) -> Policy {
        match self {
            Self::Equipment | Self::Movement | Self::MovementSetting => Policy::AdminOrReadOnly,
            Self::Exercise => Policy::ExerciseDefaultOrAdminOrFounder,
            Self::Training | Self::MovementsPerExercise => Policy::AdminOrFounder,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Equipment => "equipment",
            Self::Movement => "movement",
            Self::MovementSetting => "movement_setting",
            Self::Exercise => "exercise",
            Self::Training => "training",
            Self::MovementsPerExercise => "movements_per_exercise",
        }
    }

    /// Run the object-level policy, turning a denial into `403`
    pub fn authorize(
        self,
        principal: &Principal,
        action: Action,
        object: &impl Owned,
    ) -> Result<(), WebError> {
        if self
            .object_policy()
            .has_object_permission(Some(principal), action, object)
        {
            return Ok(());
        }

        tracing::warn!(
            user_id = principal.user_id,
            resource = self.name(),
            ?action,
            "Object permission denied"
        );
        Err(WebError::Forbidden)
    }
}

impl Owned for Equipment {
    fn founder_id(&self) -> i32 {
        self.founder_id
    }
}

impl Owned for MovementSetting {
    fn founder_id(&self) -> i32 {
        self.founder_id
    }
}

impl Owned for Movement {
    fn founder_id(&self) -> i32 {
        self.founder_id
    }
}

impl Owned for Exercise {
    fn founder_id(&self) -> i32 {
        self.founder_id
    }

    fn is_default(&self) -> bool {
        self.is_default
    }
}

impl Owned for Training {
    fn founder_id(&self) -> i32 {
        self.founder_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADMIN: Principal = Principal {
        user_id: 1,
        is_admin: true,
    };
    const FOUNDER: Principal = Principal {
        user_id: 2,
        is_admin: false,
    };
    const STRANGER: Principal = Principal {
        user_id: 3,
        is_admin: false,
    };

    struct Object {
        founder: i32,
        default: bool,
    }

    impl Owned for Object {
        fn founder_id(&self) -> i32 {
            self.founder
        }

        fn is_default(&self) -> bool {
            self.default
        }
    }

    const PRIVATE: Object = Object {
        founder: 2,
        default: false,
    };
    const DEFAULT: Object = Object {
        founder: 1,
        default: true,
    };

    const ALL_POLICIES: [Policy; 5] = [
        Policy::Authenticated,
        Policy::AdminOrReadOnly,
        Policy::AdminOrFounderOrReadOnly,
        Policy::ExerciseDefaultOrAdminOrFounder,
        Policy::AdminOrFounder,
    ];

    #[test]
    fn test_action_from_method() {
        assert_eq!(Action::from_method(&Method::GET), Action::Read);
        assert_eq!(Action::from_method(&Method::HEAD), Action::Read);
        assert_eq!(Action::from_method(&Method::OPTIONS), Action::Read);
        assert_eq!(Action::from_method(&Method::POST), Action::Write);
        assert_eq!(Action::from_method(&Method::PUT), Action::Write);
        assert_eq!(Action::from_method(&Method::PATCH), Action::Write);
        assert_eq!(Action::from_method(&Method::DELETE), Action::Write);
    }

    #[test]
    fn test_anonymous_is_always_denied() {
        for policy in ALL_POLICIES {
            for action in [Action::Read, Action::Write] {
                assert!(!policy.has_permission(None, action), "{policy:?}");
                assert!(!policy.has_object_permission(None, action, &DEFAULT), "{policy:?}");
            }
        }
    }

    #[test]
    fn test_admin_or_read_only() {
        let policy = Policy::AdminOrReadOnly;
        assert!(policy.has_permission(Some(&STRANGER), Action::Read));
        assert!(!policy.has_permission(Some(&STRANGER), Action::Write));
        assert!(!policy.has_permission(Some(&FOUNDER), Action::Write));
        assert!(policy.has_permission(Some(&ADMIN), Action::Write));

        assert!(policy.has_object_permission(Some(&STRANGER), Action::Read, &PRIVATE));
        assert!(!policy.has_object_permission(Some(&FOUNDER), Action::Write, &PRIVATE));
        assert!(policy.has_object_permission(Some(&ADMIN), Action::Write, &PRIVATE));
    }

    #[test]
    fn test_admin_or_founder_or_read_only() {
        let policy = Policy::AdminOrFounderOrReadOnly;
        assert!(policy.has_permission(Some(&STRANGER), Action::Write));

        assert!(policy.has_object_permission(Some(&STRANGER), Action::Read, &PRIVATE));
        assert!(!policy.has_object_permission(Some(&STRANGER), Action::Write, &PRIVATE));
        assert!(policy.has_object_permission(Some(&FOUNDER), Action::Write, &PRIVATE));
        assert!(policy.has_object_permission(Some(&ADMIN), Action::Write, &PRIVATE));
    }

    #[test]
    fn test_exercise_visibility() {
        let policy = Policy::ExerciseDefaultOrAdminOrFounder;

        // Private exercise of someone else is hidden from non-admins.
        assert!(!policy.has_object_permission(Some(&STRANGER), Action::Read, &PRIVATE));
        assert!(!policy.has_object_permission(Some(&STRANGER), Action::Write, &PRIVATE));
        assert!(policy.has_object_permission(Some(&FOUNDER), Action::Read, &PRIVATE));
        assert!(policy.has_object_permission(Some(&FOUNDER), Action::Write, &PRIVATE));
        assert!(policy.has_object_permission(Some(&ADMIN), Action::Read, &PRIVATE));
        assert!(policy.has_object_permission(Some(&ADMIN), Action::Write, &PRIVATE));

        // Default exercises are readable by all but writable only by owner/admin.
        assert!(policy.has_object_permission(Some(&STRANGER), Action::Read, &DEFAULT));
        assert!(!policy.has_object_permission(Some(&STRANGER), Action::Write, &DEFAULT));
        assert!(!policy.has_object_permission(Some(&FOUNDER), Action::Write, &DEFAULT));
        assert!(policy.has_object_permission(Some(&ADMIN), Action::Write, &DEFAULT));
    }

    #[test]
    fn test_admin_or_founder() {
        let policy = Policy::AdminOrFounder;
        assert!(policy.has_permission(Some(&STRANGER), Action::Write));

        for action in [Action::Read, Action::Write] {
            assert!(!policy.has_object_permission(Some(&STRANGER), action, &PRIVATE));
            assert!(policy.has_object_permission(Some(&FOUNDER), action, &PRIVATE));
            assert!(policy.has_object_permission(Some(&ADMIN), action, &PRIVATE));
        }

        // The default flag grants nothing here.
        assert!(!policy.has_object_permission(Some(&STRANGER), Action::Read, &DEFAULT));
    }

    #[test]
    fn test_resource_table() {
        assert_eq!(Resource::Equipment.policy(), Policy::AdminOrReadOnly);
        assert_eq!(Resource::Movement.object_policy(), Policy::AdminOrReadOnly);
        assert_eq!(Resource::MovementSetting.policy(), Policy::AdminOrReadOnly);
        assert_eq!(Resource::Exercise.policy(), Policy::AdminOrFounderOrReadOnly);
        assert_eq!(
            Resource::Exercise.object_policy(),
            Policy::ExerciseDefaultOrAdminOrFounder
        );
        assert_eq!(Resource::Training.policy(), Policy::AdminOrFounder);
        assert_eq!(Resource::Training.object_policy(), Policy::AdminOrFounder);
        assert_eq!(Resource::MovementsPerExercise.policy(), Policy::Authenticated);
    }

    #[test]
    fn test_authorize_maps_denial_to_forbidden() {
        assert!(Resource::Exercise.authorize(&FOUNDER, Action::Write, &PRIVATE).is_ok());
        assert!(matches!(
            Resource::Exercise.authorize(&STRANGER, Action::Read, &PRIVATE),
            Err(WebError::Forbidden)
        ));
    }
}

//! Route guard policy. Each shell maps a session snapshot to what it may show.
//! The default is never the wrapped content: children render only once the
//! session has proven the shell's requirement, so a non-admin never sees a
//! frame of admin content while a redirect is pending.
//!
//! This is UX gating. The API must still authorize every request.

use crate::app_lib::paths;
use crate::features::auth::{
    session::{Phase, SessionSnapshot},
    types::Role,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shell {
    Public,
    Member,
    Admin,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session still settling; show a neutral placeholder.
    Loading,
    /// Show a placeholder and navigate to the target.
    Redirect(&'static str),
    Render,
}

pub fn evaluate(shell: Shell, session: &SessionSnapshot) -> GuardOutcome {
    match shell {
        Shell::Public => GuardOutcome::Render,
        Shell::Member => member_shell(session),
        Shell::Admin => admin_shell(session),
    }
}

fn member_shell(session: &SessionSnapshot) -> GuardOutcome {
    match (session.phase, session.user.as_ref()) {
        (Phase::Initializing | Phase::Resolving, _) => GuardOutcome::Loading,
        (Phase::Anonymous, _) => GuardOutcome::Redirect(paths::LOGIN),
        (Phase::Resolved, None) => GuardOutcome::Loading,
        (Phase::Resolved, Some(_)) => GuardOutcome::Render,
    }
}

fn admin_shell(session: &SessionSnapshot) -> GuardOutcome {
    match (session.phase, session.user.as_ref()) {
        (Phase::Initializing | Phase::Resolving, _) => GuardOutcome::Loading,
        (Phase::Anonymous, _) => GuardOutcome::Redirect(paths::LOGIN),
        (Phase::Resolved, None) => GuardOutcome::Loading,
        (Phase::Resolved, Some(user)) => match user.role {
            Role::Admin => GuardOutcome::Render,
            Role::Mentor | Role::Member | Role::Alumni | Role::Unknown => {
                GuardOutcome::Redirect(paths::MEMBER_DASHBOARD)
            }
        },
    }
}

/// Where a freshly resolved user is sent.
pub fn landing_route(role: Role) -> &'static str {
    match role {
        Role::Admin => paths::ADMIN_LANDING,
        Role::Mentor | Role::Member | Role::Alumni | Role::Unknown => paths::MEMBER_DASHBOARD,
    }
}

/// The admin settings page brings its own chrome.
pub fn shows_admin_header(path: &str) -> bool {
    let path = path.trim_end_matches('/');
    path != paths::ADMIN_SETTINGS
}

#[cfg(test)]
mod tests {
    use super::{GuardOutcome, Shell, evaluate, landing_route, shows_admin_header};
    use crate::app_lib::paths;
    use crate::features::auth::{
        session::{Phase, SessionSnapshot},
        types::{Role, User},
    };

    const ALL_ROLES: [Role; 5] = [
        Role::Admin,
        Role::Mentor,
        Role::Member,
        Role::Alumni,
        Role::Unknown,
    ];

    fn user(role: Role) -> User {
        User {
            id: "u1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.test".to_string(),
            role,
            about_me: None,
            occupation: None,
            linkedin: None,
            profile_picture: None,
            is_verified: true,
        }
    }

    fn snapshot(phase: Phase, role: Option<Role>) -> SessionSnapshot {
        SessionSnapshot {
            phase,
            user: role.map(user),
        }
    }

    #[test]
    fn member_shell_table() {
        let cases = [
            (snapshot(Phase::Initializing, None), GuardOutcome::Loading),
            (snapshot(Phase::Resolving, None), GuardOutcome::Loading),
            (
                snapshot(Phase::Anonymous, None),
                GuardOutcome::Redirect(paths::LOGIN),
            ),
            (snapshot(Phase::Resolved, None), GuardOutcome::Loading),
            (
                snapshot(Phase::Resolved, Some(Role::Member)),
                GuardOutcome::Render,
            ),
        ];

        for (session, expected) in cases {
            assert_eq!(evaluate(Shell::Member, &session), expected, "{session:?}");
        }
    }

    #[test]
    fn every_resolved_role_passes_member_shell() {
        for role in ALL_ROLES {
            assert_eq!(
                evaluate(Shell::Member, &snapshot(Phase::Resolved, Some(role))),
                GuardOutcome::Render
            );
        }
    }

    #[test]
    fn admin_shell_waits_until_resolved() {
        assert_eq!(
            evaluate(Shell::Admin, &snapshot(Phase::Initializing, None)),
            GuardOutcome::Loading
        );
        assert_eq!(
            evaluate(Shell::Admin, &snapshot(Phase::Resolving, None)),
            GuardOutcome::Loading
        );
        assert_eq!(
            evaluate(Shell::Admin, &snapshot(Phase::Resolved, None)),
            GuardOutcome::Loading
        );
        assert_eq!(
            evaluate(Shell::Admin, &snapshot(Phase::Anonymous, None)),
            GuardOutcome::Redirect(paths::LOGIN)
        );
    }

    #[test]
    fn admin_shell_renders_only_for_admins() {
        for role in ALL_ROLES {
            let outcome = evaluate(Shell::Admin, &snapshot(Phase::Resolved, Some(role)));
            if role == Role::Admin {
                assert_eq!(outcome, GuardOutcome::Render);
            } else {
                assert_eq!(outcome, GuardOutcome::Redirect(paths::MEMBER_DASHBOARD));
            }
        }
    }

    #[test]
    fn stale_user_during_resolution_never_renders_admin() {
        // A user left over from a previous session must not leak through.
        let session = snapshot(Phase::Resolving, Some(Role::Admin));
        assert_eq!(evaluate(Shell::Admin, &session), GuardOutcome::Loading);
    }

    #[test]
    fn public_shell_always_renders() {
        for phase in [
            Phase::Initializing,
            Phase::Resolving,
            Phase::Resolved,
            Phase::Anonymous,
        ] {
            assert_eq!(
                evaluate(Shell::Public, &snapshot(phase, None)),
                GuardOutcome::Render
            );
        }
    }

    #[test]
    fn landing_route_splits_admin_from_everyone_else() {
        assert_eq!(landing_route(Role::Admin), paths::ADMIN_LANDING);
        for role in [Role::Mentor, Role::Member, Role::Alumni, Role::Unknown] {
            assert_eq!(landing_route(role), paths::MEMBER_DASHBOARD);
        }
    }

    #[test]
    fn admin_header_hidden_only_on_settings() {
        assert!(shows_admin_header(paths::ADMIN_LANDING));
        assert!(shows_admin_header("/admin/members"));
        assert!(!shows_admin_header(paths::ADMIN_SETTINGS));
        assert!(!shows_admin_header("/admin/settings/"));
    }
}

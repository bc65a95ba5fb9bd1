//! Route Table and Guard
//!
//! Declarative table of every portal path plus the guard that decides, for
//! a path and the current session role, whether to render, redirect or show
//! NotFound. The guard is a pure function evaluated on every navigation.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::{portal_root, Role};

pub const SIGN_IN: &str = "/sign-in";

/// Characters escaped inside a path parameter
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Every screen the app can render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    SignIn,
    Profile,
    Messages,
    Notifications,
    AdminDashboard,
    AdminUsers,
    AdminClasses,
    AdminBilling,
    TutorDashboard,
    TutorClasses,
    TutorClassDetail,
    TutorAssignments,
    TutorStudents,
    StudentDashboard,
    StudentClasses,
    StudentAssignments,
    StudentAssignmentDetail,
    StudentGrades,
    StudentResources,
    StudentBooking,
    ParentDashboard,
    ParentClasses,
    ParentGrades,
    ParentAssignments,
    ParentResources,
    ParentBilling,
}

/// One row of the route table. An empty `allowed_roles` means public.
#[derive(Debug, PartialEq, Eq)]
pub struct RouteDef {
    pub pattern: &'static str,
    pub page: Page,
    pub allowed_roles: &'static [Role],
}

impl RouteDef {
    pub fn is_public(&self) -> bool {
        self.allowed_roles.is_empty()
    }

    pub fn allows(&self, role: Role) -> bool {
        self.allowed_roles.contains(&role)
    }
}

const PUBLIC: &[Role] = &[];
const EVERYONE: &[Role] = &Role::ALL;
const ADMIN: &[Role] = &[Role::Admin];
const TUTOR: &[Role] = &[Role::Tutor];
const STUDENT: &[Role] = &[Role::Student];
const PARENT: &[Role] = &[Role::Parent];

const fn route(pattern: &'static str, page: Page, allowed_roles: &'static [Role]) -> RouteDef {
    RouteDef { pattern, page, allowed_roles }
}

pub static ROUTES: &[RouteDef] = &[
    route(SIGN_IN, Page::SignIn, PUBLIC),
    route("/profile", Page::Profile, EVERYONE),
    // Admin
    route("/admin", Page::AdminDashboard, ADMIN),
    route("/admin/users", Page::AdminUsers, ADMIN),
    route("/admin/classes", Page::AdminClasses, ADMIN),
    route("/admin/billing", Page::AdminBilling, ADMIN),
    route("/admin/messages", Page::Messages, ADMIN),
    route("/admin/notifications", Page::Notifications, ADMIN),
    // Tutor
    route("/tutor", Page::TutorDashboard, TUTOR),
    route("/tutor/classes", Page::TutorClasses, TUTOR),
    route("/tutor/classes/:id", Page::TutorClassDetail, TUTOR),
    route("/tutor/assignments", Page::TutorAssignments, TUTOR),
    route("/tutor/students", Page::TutorStudents, TUTOR),
    route("/tutor/messages", Page::Messages, TUTOR),
    route("/tutor/notifications", Page::Notifications, TUTOR),
    // Student
    route("/student", Page::StudentDashboard, STUDENT),
    route("/student/classes", Page::StudentClasses, STUDENT),
    route("/student/assignments", Page::StudentAssignments, STUDENT),
    route("/student/assignments/:id", Page::StudentAssignmentDetail, STUDENT),
    route("/student/grades", Page::StudentGrades, STUDENT),
    route("/student/resources", Page::StudentResources, STUDENT),
    route("/student/booking", Page::StudentBooking, STUDENT),
    route("/student/messages", Page::Messages, STUDENT),
    route("/student/notifications", Page::Notifications, STUDENT),
    // Parent
    route("/parent", Page::ParentDashboard, PARENT),
    route("/parent/classes", Page::ParentClasses, PARENT),
    route("/parent/grades", Page::ParentGrades, PARENT),
    route("/parent/assignments", Page::ParentAssignments, PARENT),
    route("/parent/resources", Page::ParentResources, PARENT),
    route("/parent/billing", Page::ParentBilling, PARENT),
    route("/parent/messages", Page::Messages, PARENT),
    route("/parent/notifications", Page::Notifications, PARENT),
];

/// A path matched against the table, with its decoded `:params`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub route: &'static RouteDef,
    pub path: String,
    pub params: Vec<(&'static str, String)>,
}

impl RouteMatch {
    pub fn page(&self) -> Page {
        self.route.page
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.iter().find(|(key, _)| *key == name).map(|(_, value)| value.as_str())
    }
}

/// Outcome of the guard for one navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Render(RouteMatch),
    Redirect(String),
    NotFound,
}

/// Strip query and fragment, ensure a leading slash, drop trailing slashes
pub fn normalize(path: &str) -> String {
    let end = path.find(&['?', '#'][..]).unwrap_or(path.len());
    let trimmed = path[..end].trim().trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

fn match_pattern(pattern: &'static str, path: &str) -> Option<Vec<(&'static str, String)>> {
    let pattern_segments: Vec<&'static str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
    let path_segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if pattern_segments.len() != path_segments.len() {
        return None;
    }

    let mut params = Vec::new();
    for (expected, actual) in pattern_segments.iter().zip(path_segments) {
        if let Some(name) = expected.strip_prefix(':') {
            let decoded = percent_decode_str(actual).decode_utf8().ok()?.into_owned();
            if decoded.is_empty() {
                return None;
            }
            params.push((name, decoded));
        } else if *expected != actual {
            return None;
        }
    }
    Some(params)
}

/// Find the route for `path`, ignoring access rules
pub fn match_path(path: &str) -> Option<RouteMatch> {
    let path = normalize(path);
    ROUTES.iter().find_map(|route| {
        match_pattern(route.pattern, &path).map(|params| RouteMatch {
            route,
            path: path.clone(),
            params,
        })
    })
}

/// The route guard.
///
/// Without a session every path except sign-in redirects to sign-in. With
/// one, `/` and sign-in redirect to the portal root, routes the role may not
/// open redirect to the portal root, and unknown paths are NotFound.
pub fn resolve(path: &str, role: Option<Role>) -> Resolution {
    let path = normalize(path);

    let Some(role) = role else {
        return match match_path(&path) {
            Some(found) if found.route.is_public() => Resolution::Render(found),
            _ => Resolution::Redirect(SIGN_IN.to_string()),
        };
    };

    if path == "/" || path == SIGN_IN {
        return Resolution::Redirect(portal_root(role));
    }

    match match_path(&path) {
        Some(found) if found.route.allows(role) => Resolution::Render(found),
        Some(_) => Resolution::Redirect(portal_root(role)),
        None => Resolution::NotFound,
    }
}

/// Fill a pattern's `:params`, percent-encoding each value
pub fn build_path(pattern: &str, params: &[(&str, &str)]) -> String {
    pattern
        .split('/')
        .map(|segment| match segment.strip_prefix(':') {
            Some(name) => params
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| utf8_percent_encode(value, SEGMENT).to_string())
                .unwrap_or_default(),
            None => segment.to_string(),
        })
        .collect::<Vec<_>>()
        .join("/")
}

pub fn tutor_class_path(class_id: &str) -> String {
    build_path("/tutor/classes/:id", &[("id", class_id)])
}

pub fn student_assignment_path(assignment_id: &str) -> String {
    build_path("/student/assignments/:id", &[("id", assignment_id)])
}

/// Path of a page shared by all portals ("messages", "notifications")
pub fn portal_path(role: Role, section: &str) -> String {
    format!("{}/{}", portal_root(role), section)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_redirects_to_portal_for_every_role() {
        for role in Role::ALL {
            assert_eq!(resolve("/", Some(role)), Resolution::Redirect(format!("/{}", role.as_str())));
            assert_eq!(resolve("", Some(role)), Resolution::Redirect(format!("/{}", role.as_str())));
        }
    }

    #[test]
    fn test_signed_in_user_leaves_sign_in() {
        assert_eq!(resolve("/sign-in", Some(Role::Parent)), Resolution::Redirect("/parent".into()));
    }

    #[test]
    fn test_anonymous_is_forced_to_sign_in() {
        for path in ["/", "/admin", "/student/grades", "/nope", "/profile"] {
            assert_eq!(resolve(path, None), Resolution::Redirect(SIGN_IN.into()), "{}", path);
        }
        match resolve("/sign-in?next=/admin", None) {
            Resolution::Render(found) => assert_eq!(found.page(), Page::SignIn),
            other => panic!("expected sign-in to render, got {:?}", other),
        }
    }

    #[test]
    fn test_disallowed_roles_never_render_protected_routes() {
        for route in ROUTES.iter().filter(|r| !r.is_public()) {
            let concrete = build_path(route.pattern, &[("id", "x-1")]);
            for role in Role::ALL {
                let resolution = resolve(&concrete, Some(role));
                if route.allows(role) {
                    assert!(
                        matches!(&resolution, Resolution::Render(found) if found.route == route),
                        "{} should render for {:?}",
                        route.pattern,
                        role
                    );
                } else {
                    assert_eq!(resolution, Resolution::Redirect(portal_root(role)), "{} for {:?}", route.pattern, role);
                }
            }
        }
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        assert_eq!(resolve("/admin/reports", Some(Role::Admin)), Resolution::NotFound);
        assert_eq!(resolve("/tutor/classes/a/b", Some(Role::Tutor)), Resolution::NotFound);
    }

    #[test]
    fn test_shared_profile_route() {
        for role in Role::ALL {
            assert!(matches!(resolve("/profile", Some(role)), Resolution::Render(_)));
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("/admin/"), "/admin");
        assert_eq!(normalize("admin/users?tab=2#top"), "/admin/users");
        assert_eq!(normalize("///"), "/");
        assert_eq!(normalize("/#hash"), "/");
    }

    #[test]
    fn test_params_are_decoded() {
        let found = match_path("/tutor/classes/class%201/").expect("matches");
        assert_eq!(found.page(), Page::TutorClassDetail);
        assert_eq!(found.param("id"), Some("class 1"));
        assert_eq!(found.param("other"), None);
    }

    #[test]
    fn test_build_path_round_trips() {
        let path = student_assignment_path("assignment 7/b");
        assert_eq!(path, "/student/assignments/assignment%207%2Fb");
        assert_eq!(match_path(&path).unwrap().param("id"), Some("assignment 7/b"));
        assert_eq!(tutor_class_path("class-2"), "/tutor/classes/class-2");
    }

    #[test]
    fn test_patterns_are_unique() {
        for (i, a) in ROUTES.iter().enumerate() {
            for b in &ROUTES[i + 1..] {
                assert_ne!(a.pattern, b.pattern);
            }
        }
    }
}

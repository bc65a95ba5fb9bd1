//! Per-Role Navigation
//!
//! Static sidebar configuration for each portal. Badges are resolved against
//! the activity counts loaded for the signed-in user.

use crate::models::{ActivityCounts, Role};

/// Which count a nav item shows as its badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeSource {
    UnreadMessages,
    UnreadNotifications,
    OpenAssignments,
    UnpaidInvoices,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub route: &'static str,
    pub icon: &'static str,
    pub badge: Option<BadgeSource>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSection {
    pub title: &'static str,
    pub items: &'static [NavItem],
}

const fn item(label: &'static str, route: &'static str, icon: &'static str) -> NavItem {
    NavItem { label, route, icon, badge: None }
}

const fn badged(label: &'static str, route: &'static str, icon: &'static str, badge: BadgeSource) -> NavItem {
    NavItem { label, route, icon, badge: Some(badge) }
}

const ADMIN_NAV: &[NavSection] = &[
    NavSection {
        title: "Overview",
        items: &[item("Dashboard", "/admin", "🏠")],
    },
    NavSection {
        title: "Management",
        items: &[
            item("Users", "/admin/users", "👥"),
            item("Classes", "/admin/classes", "📅"),
            item("Billing", "/admin/billing", "💳"),
        ],
    },
    NavSection {
        title: "Communication",
        items: &[
            badged("Messages", "/admin/messages", "✉️", BadgeSource::UnreadMessages),
            badged("Notifications", "/admin/notifications", "🔔", BadgeSource::UnreadNotifications),
        ],
    },
];

const TUTOR_NAV: &[NavSection] = &[
    NavSection {
        title: "Overview",
        items: &[item("Dashboard", "/tutor", "🏠")],
    },
    NavSection {
        title: "Teaching",
        items: &[
            item("My Classes", "/tutor/classes", "📅"),
            badged("Assignments", "/tutor/assignments", "📝", BadgeSource::OpenAssignments),
            item("Students", "/tutor/students", "🎓"),
        ],
    },
    NavSection {
        title: "Communication",
        items: &[
            badged("Messages", "/tutor/messages", "✉️", BadgeSource::UnreadMessages),
            badged("Notifications", "/tutor/notifications", "🔔", BadgeSource::UnreadNotifications),
        ],
    },
];

const STUDENT_NAV: &[NavSection] = &[
    NavSection {
        title: "Overview",
        items: &[item("Dashboard", "/student", "🏠")],
    },
    NavSection {
        title: "Learning",
        items: &[
            item("My Classes", "/student/classes", "📅"),
            badged("Assignments", "/student/assignments", "📝", BadgeSource::OpenAssignments),
            item("Grades", "/student/grades", "📊"),
            item("Resources", "/student/resources", "📚"),
            item("Book a Session", "/student/booking", "🗓️"),
        ],
    },
    NavSection {
        title: "Communication",
        items: &[
            badged("Messages", "/student/messages", "✉️", BadgeSource::UnreadMessages),
            badged("Notifications", "/student/notifications", "🔔", BadgeSource::UnreadNotifications),
        ],
    },
];

const PARENT_NAV: &[NavSection] = &[
    NavSection {
        title: "Overview",
        items: &[item("Dashboard", "/parent", "🏠")],
    },
    NavSection {
        title: "My Child",
        items: &[
            item("Classes", "/parent/classes", "📅"),
            item("Grades", "/parent/grades", "📊"),
            item("Assignments", "/parent/assignments", "📝"),
            item("Resources", "/parent/resources", "📚"),
            badged("Billing", "/parent/billing", "💳", BadgeSource::UnpaidInvoices),
        ],
    },
    NavSection {
        title: "Communication",
        items: &[
            badged("Messages", "/parent/messages", "✉️", BadgeSource::UnreadMessages),
            badged("Notifications", "/parent/notifications", "🔔", BadgeSource::UnreadNotifications),
        ],
    },
];

pub fn sections_for(role: Role) -> &'static [NavSection] {
    match role {
        Role::Admin => ADMIN_NAV,
        Role::Tutor => TUTOR_NAV,
        Role::Student => STUDENT_NAV,
        Role::Parent => PARENT_NAV,
    }
}

pub fn badge_count(source: BadgeSource, counts: &ActivityCounts) -> usize {
    match source {
        BadgeSource::UnreadMessages => counts.unread_messages,
        BadgeSource::UnreadNotifications => counts.unread_notifications,
        BadgeSource::OpenAssignments => counts.open_assignments,
        BadgeSource::UnpaidInvoices => counts.unpaid_invoices,
    }
}

/// Text shown in a badge, `None` hides it
pub fn badge_label(count: usize) -> Option<String> {
    match count {
        0 => None,
        1..=99 => Some(count.to_string()),
        _ => Some("99+".to_string()),
    }
}

/// Whether a nav item is highlighted for the current path.
/// Portal roots only match themselves so the dashboard is not always lit.
pub fn is_active(item_route: &str, current_path: &str) -> bool {
    let current = crate::router::normalize(current_path);
    let is_portal_root = item_route.matches('/').count() == 1;
    if is_portal_root {
        return current == item_route;
    }
    current == item_route
        || current
            .strip_prefix(item_route)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Label of the nav item lit for `current_path`, used as the page heading
pub fn title_for(role: Role, current_path: &str) -> Option<&'static str> {
    sections_for(role)
        .iter()
        .flat_map(|section| section.items.iter())
        .find(|item| is_active(item.route, current_path))
        .map(|item| item.label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::{resolve, Resolution};

    #[test]
    fn test_every_nav_route_renders_for_its_role() {
        for role in Role::ALL {
            for section in sections_for(role) {
                for nav_item in section.items {
                    assert!(
                        matches!(resolve(nav_item.route, Some(role)), Resolution::Render(_)),
                        "{} should render for {:?}",
                        nav_item.route,
                        role
                    );
                }
            }
        }
    }

    #[test]
    fn test_each_portal_starts_with_its_dashboard() {
        for role in Role::ALL {
            let first = sections_for(role)[0].items[0];
            assert_eq!(first.route, format!("/{}", role.as_str()));
        }
    }

    #[test]
    fn test_badge_label_bounds() {
        assert_eq!(badge_label(0), None);
        assert_eq!(badge_label(1).as_deref(), Some("1"));
        assert_eq!(badge_label(99).as_deref(), Some("99"));
        assert_eq!(badge_label(100).as_deref(), Some("99+"));
    }

    #[test]
    fn test_badge_count_picks_matching_field() {
        let counts = ActivityCounts {
            unread_messages: 2,
            unread_notifications: 5,
            open_assignments: 1,
            unpaid_invoices: 3,
        };
        assert_eq!(badge_count(BadgeSource::UnreadMessages, &counts), 2);
        assert_eq!(badge_count(BadgeSource::UnreadNotifications, &counts), 5);
        assert_eq!(badge_count(BadgeSource::OpenAssignments, &counts), 1);
        assert_eq!(badge_count(BadgeSource::UnpaidInvoices, &counts), 3);
    }

    #[test]
    fn test_is_active() {
        assert!(is_active("/tutor", "/tutor"));
        assert!(is_active("/tutor", "/tutor/"));
        assert!(!is_active("/tutor", "/tutor/classes"));
        assert!(is_active("/tutor/classes", "/tutor/classes/class-1"));
        assert!(!is_active("/tutor/classes", "/tutor/classesx"));
        assert!(!is_active("/student/assignments", "/student/grades"));
    }

    #[test]
    fn test_title_for() {
        assert_eq!(title_for(Role::Tutor, "/tutor/classes/class-1"), Some("My Classes"));
        assert_eq!(title_for(Role::Parent, "/parent"), Some("Dashboard"));
        assert_eq!(title_for(Role::Parent, "/profile"), None);
    }
}

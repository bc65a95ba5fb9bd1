use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::info;

use crate::components::{FilterTabs, Loading};
use crate::context::use_app;
use crate::models::{ClassSession, ClassStatus, Session};
use crate::pages::tables::{ClassAction, ClassLinks, ClassTable};
use crate::toast::use_toasts;

/// Which classes the list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClassWindow {
    Upcoming,
    Past,
    All,
}

impl ClassWindow {
    const ALL: [ClassWindow; 3] = [ClassWindow::Upcoming, ClassWindow::Past, ClassWindow::All];

    fn label(&self) -> &'static str {
        match self {
            ClassWindow::Upcoming => "Upcoming",
            ClassWindow::Past => "Past",
            ClassWindow::All => "All",
        }
    }

    fn matches(&self, class: &ClassSession) -> bool {
        match self {
            ClassWindow::Upcoming => class.status == ClassStatus::Scheduled,
            ClassWindow::Past => class.status != ClassStatus::Scheduled,
            ClassWindow::All => true,
        }
    }
}

#[component]
pub fn TutorClasses(session: Session) -> impl IntoView {
    let ctx = use_app();
    let toasts = use_toasts();
    let tutor_id = session.user_id;

    let (classes, set_classes) = signal::<Option<Vec<ClassSession>>>(None);
    let which = RwSignal::new(ClassWindow::Upcoming);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let api = ctx.api();
        let tutor_id = tutor_id.clone();
        spawn_local(async move {
            match api.classes_for_tutor(&tutor_id).await {
                Ok(list) => set_classes.set(Some(list)),
                Err(e) => toasts.failed("Loading classes", &e),
            }
        });
    });

    let on_action = Callback::new(move |(id, action): (String, ClassAction)| {
        let api = ctx.api();
        spawn_local(async move {
            let result = match action {
                ClassAction::Complete => api.complete_class(&id).await,
                ClassAction::Cancel => api.cancel_class(&id).await,
            };
            match result {
                Ok(class) => {
                    info!(class = %class.id, status = class.status.label(), "class updated");
                    toasts.success(format!("{} is {}", class.title, class.status.label().to_lowercase()));
                    ctx.reload();
                }
                Err(e) => toasts.failed("Updating class", &e),
            }
        });
    });

    view! {
        <section class="page classes-page">
            <div class="page-toolbar">
                <FilterTabs options=ClassWindow::ALL.to_vec() label=ClassWindow::label selected=which />
            </div>
            {move || {
                let filter = which.get();
                match classes.get() {
                    None => view! { <Loading /> }.into_any(),
                    Some(list) => {
                        let list: Vec<_> = list.into_iter().filter(|c| filter.matches(c)).collect();
                        view! { <ClassTable classes=list links=ClassLinks::TutorDetail on_action=on_action /> }.into_any()
                    }
                }
            }}
        </section>
    }
}

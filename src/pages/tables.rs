//! Tables shared between portals

use chrono::NaiveDate;
use leptos::prelude::*;
use portal_data::{overall_average, subject_averages};

use crate::components::{assignment_tone, class_tone, invoice_tone, DeleteConfirmButton, EmptyState, Link, StatusBadge};
use crate::format;
use crate::models::{Assignment, ClassSession, ClassStatus, Grade, Invoice};
use crate::router::{student_assignment_path, tutor_class_path};

/// Where a class title links to, if anywhere
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassLinks {
    None,
    TutorDetail,
}

/// Status changes offered on scheduled classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassAction {
    Complete,
    Cancel,
}

#[component]
pub fn ClassTable(
    classes: Vec<ClassSession>,
    #[prop(optional)] links: Option<ClassLinks>,
    /// Adds Complete/Cancel buttons to scheduled rows
    #[prop(optional, into)]
    on_action: Option<Callback<(String, ClassAction)>>,
) -> impl IntoView {
    if classes.is_empty() {
        return view! { <EmptyState message="No classes to show" icon="📅" /> }.into_any();
    }
    let links = links.unwrap_or(ClassLinks::None);
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Class"</th>
                    <th>"Subject"</th>
                    <th>"Tutor"</th>
                    <th>"When"</th>
                    <th>"Where"</th>
                    <th>"Students"</th>
                    <th>"Status"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {classes
                    .into_iter()
                    .map(|class| {
                        let name = class.title.clone();
                        let title = match links {
                            ClassLinks::TutorDetail => {
                                view! { <Link href=tutor_class_path(&class.id)>{name}</Link> }.into_any()
                            }
                            ClassLinks::None => name.into_any(),
                        };
                        let when = format!("{} – {}", format::date_time(class.starts_at), format::time(class.ends_at()));
                        let actions = on_action.filter(|_| class.status == ClassStatus::Scheduled).map(|on_action| {
                            let (complete_id, cancel_id) = (class.id.clone(), class.id.clone());
                            view! {
                                <button
                                    type="button"
                                    class="btn btn-secondary btn-small"
                                    on:click=move |_| on_action.run((complete_id.clone(), ClassAction::Complete))
                                >
                                    "Complete"
                                </button>
                                <DeleteConfirmButton
                                    label="Cancel"
                                    on_confirm=move |_| on_action.run((cancel_id.clone(), ClassAction::Cancel))
                                />
                            }
                        });
                        view! {
                            <tr>
                                <td>{title}</td>
                                <td>{class.subject.clone()}</td>
                                <td>{class.tutor_name.clone()}</td>
                                <td>{when}</td>
                                <td>{class.location.clone()}</td>
                                <td>{class.student_ids.len()}</td>
                                <td><StatusBadge label=class.status.label() tone=class_tone(class.status) /></td>
                                <td class="row-actions">{actions}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}

#[component]
pub fn AssignmentTable(
    assignments: Vec<Assignment>,
    today: NaiveDate,
    /// Link titles to the student detail page
    #[prop(optional)]
    link_detail: bool,
) -> impl IntoView {
    if assignments.is_empty() {
        return view! { <EmptyState message="No assignments here" icon="📝" /> }.into_any();
    }
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Assignment"</th>
                    <th>"Subject"</th>
                    <th>"Due"</th>
                    <th>"Status"</th>
                    <th>"Score"</th>
                </tr>
            </thead>
            <tbody>
                {assignments
                    .into_iter()
                    .map(|a| {
                        let overdue = a.is_overdue(today);
                        let name = a.title.clone();
                        let title = if link_detail {
                            view! { <Link href=student_assignment_path(&a.id)>{name}</Link> }.into_any()
                        } else {
                            name.into_any()
                        };
                        let status_label = if overdue { "Overdue" } else { a.status.label() };
                        let score = a.score.map(|s| format!("{} / {}", s, a.max_score)).unwrap_or_else(|| "—".into());
                        view! {
                            <tr class:overdue=overdue>
                                <td>{title}</td>
                                <td>{a.subject.clone()}</td>
                                <td>
                                    {format::date(a.due_on)}
                                    <span class="muted">{format!(" · {}", format::due_relative(a.due_on, today))}</span>
                                </td>
                                <td><StatusBadge label=status_label tone=assignment_tone(a.status, overdue) /></td>
                                <td>{score}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}

/// Per-subject averages followed by the recent grades list
#[component]
pub fn GradeSummary(grades: Vec<Grade>) -> impl IntoView {
    if grades.is_empty() {
        return view! { <EmptyState message="No grades recorded yet" icon="📊" /> }.into_any();
    }
    let averages = subject_averages(&grades);
    let overall = overall_average(&grades);
    view! {
        <div class="grade-summary">
            <div class="subject-averages">
                <div class="subject-average overall">
                    <span class="subject-name">"Overall"</span>
                    <span class="subject-score">{format::optional_percent(overall)}</span>
                </div>
                {averages
                    .into_iter()
                    .map(|avg| {
                        view! {
                            <div class="subject-average">
                                <span class="subject-name">{avg.subject.clone()}</span>
                                <span class="subject-score">{format::percent(avg.average)}</span>
                                <div class="progress">
                                    <div class="progress-bar" style=format!("width: {:.0}%", avg.average.min(100.0))></div>
                                </div>
                                <span class="muted">{format!("{} assessments", avg.count)}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th>"Subject"</th>
                        <th>"Assessment"</th>
                        <th>"Score"</th>
                        <th>"Grade"</th>
                    </tr>
                </thead>
                <tbody>
                    {grades
                        .into_iter()
                        .map(|g| {
                            view! {
                                <tr>
                                    <td>{format::date(g.recorded_on)}</td>
                                    <td>{g.subject.clone()}</td>
                                    <td>{g.assessment.clone()}</td>
                                    <td>{format!("{} / {} ({})", g.score, g.max_score, format::percent(g.percentage()))}</td>
                                    <td class="letter-grade">{g.letter().to_string()}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
    .into_any()
}

#[component]
pub fn InvoiceTable(
    invoices: Vec<Invoice>,
    today: NaiveDate,
    /// Shows a Pay button on unpaid rows when set
    #[prop(optional, into)]
    on_pay: Option<Callback<String>>,
) -> impl IntoView {
    if invoices.is_empty() {
        return view! { <EmptyState message="No invoices" icon="💳" /> }.into_any();
    }
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Invoice"</th>
                    <th>"Description"</th>
                    <th>"Issued"</th>
                    <th>"Due"</th>
                    <th>"Amount"</th>
                    <th>"Status"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {invoices
                    .into_iter()
                    .map(|inv| {
                        let overdue = inv.is_overdue(today);
                        let status_label = if inv.is_paid() {
                            inv.paid_on.map(|d| format!("Paid {}", format::date(d))).unwrap_or_else(|| "Paid".into())
                        } else if overdue {
                            "Overdue".to_string()
                        } else {
                            "Unpaid".to_string()
                        };
                        let pay_button = on_pay.filter(|_| !inv.is_paid()).map(|on_pay| {
                            let id = inv.id.clone();
                            view! {
                                <button type="button" class="btn btn-primary btn-small" on:click=move |_| on_pay.run(id.clone())>
                                    "Pay now"
                                </button>
                            }
                        });
                        view! {
                            <tr class:overdue=overdue>
                                <td class="mono">{inv.id.clone()}</td>
                                <td>{inv.description.clone()}</td>
                                <td>{format::date(inv.issued_on)}</td>
                                <td>{format::date(inv.due_on)}</td>
                                <td class="amount">{format::format_cents(inv.amount_cents)}</td>
                                <td><StatusBadge label=status_label tone=invoice_tone(inv.status, overdue) /></td>
                                <td>{pay_button}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}

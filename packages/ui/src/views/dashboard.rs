//! # Dashboard page — progress overview and AI picks
//!
//! On mount the page runs one explicit pipeline: load the persisted profile,
//! and if one exists, issue exactly one recommendation request with it. The
//! "Refresh AI Picks" button re-issues the same request with the same
//! profile; overlapping refreshes resolve last-issued-wins via the request
//! tag. A failed fetch is not distinguished from an empty result — the list
//! stays empty, the snapshot shows its floor values, and the error goes to
//! the diagnostic log only.
//!
//! The application tracker is a fixed in-memory sample set; in a real system
//! these would be backend-owned records.

use dioxus::prelude::*;

use advisor::{Category, University};
use store::UserProfile;

use crate::request::{RequestSeq, RequestState};
use crate::{make_advisor, make_profiles};

const DASHBOARD_CSS: Asset = asset!("/assets/styling/dashboard.css");

/// A tracked application (sample data).
#[derive(Clone, Debug, PartialEq)]
pub struct Application {
    pub id: &'static str,
    pub university_name: &'static str,
    pub program: &'static str,
    pub status: ApplicationStatus,
    pub deadline: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplicationStatus {
    Draft,
    Submitted,
    UnderReview,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Draft => "Draft",
            ApplicationStatus::Submitted => "Submitted",
            ApplicationStatus::UnderReview => "Under Review",
            ApplicationStatus::Accepted => "Accepted",
            ApplicationStatus::Rejected => "Rejected",
        }
    }

    fn badge_class(&self) -> &'static str {
        match self {
            ApplicationStatus::Accepted => "badge badge-green",
            ApplicationStatus::Draft => "badge badge-gray",
            _ => "badge badge-blue",
        }
    }
}

fn sample_applications() -> Vec<Application> {
    vec![
        Application {
            id: "1",
            university_name: "Stanford University",
            program: "MS in Computer Science",
            status: ApplicationStatus::Submitted,
            deadline: "Dec 15, 2024",
        },
        Application {
            id: "2",
            university_name: "Georgia Tech",
            program: "MS in CS",
            status: ApplicationStatus::Draft,
            deadline: "Jan 5, 2025",
        },
        Application {
            id: "3",
            university_name: "ETH Zurich",
            program: "MS Data Science",
            status: ApplicationStatus::Accepted,
            deadline: "Completed",
        },
    ]
}

/// One category's share of the eligibility snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategorySlice {
    pub category: Category,
    /// Display count, floored at 1 so an empty category still renders a
    /// visible slice.
    pub count: usize,
}

/// Derive the three category counts for the summary display.
pub fn category_slices(recommendations: &[University]) -> [CategorySlice; 3] {
    [Category::Safe, Category::Moderate, Category::Reach].map(|category| {
        let count = recommendations
            .iter()
            .filter(|u| u.category == category)
            .count();
        CategorySlice {
            category,
            count: count.max(1),
        }
    })
}

fn slice_class(category: Category) -> &'static str {
    match category {
        Category::Safe => "slice slice-safe",
        Category::Moderate => "slice slice-moderate",
        Category::Reach => "slice slice-reach",
    }
}

fn category_badge_class(category: Category) -> &'static str {
    match category {
        Category::Safe => "badge badge-green",
        Category::Moderate => "badge badge-yellow",
        Category::Reach => "badge badge-red",
    }
}

/// Issue one recommendation request, tagged against the page's request slot.
async fn fetch_picks(
    profile: UserProfile,
    mut picks: Signal<RequestState<Vec<University>>>,
    mut seq: Signal<RequestSeq>,
) {
    let tag = seq.write().begin();
    picks.set(RequestState::Pending);

    let result = make_advisor().recommendations(&profile).await;
    if !seq.peek().is_current(tag) {
        return; // superseded by a newer refresh
    }
    match result {
        Ok(list) => picks.set(RequestState::Succeeded(list)),
        Err(e) => {
            // Rendered the same as "no data"; the log line is the only trace.
            tracing::warn!("recommendation fetch failed: {e}");
            picks.set(RequestState::Failed(e.to_string()));
        }
    }
}

#[component]
pub fn DashboardView() -> Element {
    let mut profile = use_signal(|| Option::<UserProfile>::None);
    let picks = use_signal(RequestState::<Vec<University>>::default);
    let seq = use_signal(RequestSeq::default);

    // Mount pipeline: profile load feeding the recommendation fetch.
    let _loader = use_resource(move || async move {
        let loaded = make_profiles().load().await;
        profile.set(loaded.clone());
        if let Some(p) = loaded {
            fetch_picks(p, picks, seq).await;
        }
    });

    let refresh = move |_| {
        if let Some(p) = profile() {
            spawn(async move {
                fetch_picks(p, picks, seq).await;
            });
        }
    };

    let name = profile()
        .map(|p| p.name)
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| "Student".to_string());
    let picks_now = picks();
    let loading = picks_now.is_pending();
    let recommendations = picks_now.value().cloned().unwrap_or_default();
    let slices = category_slices(&recommendations);
    let applications = sample_applications();
    let cards: Vec<(University, String)> = recommendations
        .iter()
        .map(|u| (u.clone(), u.programs.join(", ")))
        .collect();

    rsx! {
        document::Stylesheet { href: DASHBOARD_CSS }

        div {
            class: "dashboard-page",

            header {
                class: "dashboard-header",
                div {
                    h2 { class: "page-title", "Welcome back, {name}!" }
                    p { class: "page-subtitle", "Here is your study abroad progress overview." }
                }
                button {
                    class: "refresh-button",
                    disabled: loading || profile().is_none(),
                    onclick: refresh,
                    "Refresh AI Picks"
                }
            }

            div {
                class: "dashboard-grid",

                div {
                    class: "card snapshot-card",
                    h3 { class: "card-title", "Eligibility Snapshot" }
                    div {
                        class: "snapshot-bar",
                        for slice in slices {
                            span {
                                key: "{slice.category}",
                                class: slice_class(slice.category),
                                style: "flex: {slice.count};",
                            }
                        }
                    }
                    div {
                        class: "snapshot-legend",
                        for slice in slices {
                            div {
                                key: "{slice.category}",
                                class: "snapshot-legend-item",
                                span { class: slice_class(slice.category) }
                                span { "{slice.category} ({slice.count})" }
                            }
                        }
                    }
                }

                div {
                    class: "card tracker-card",
                    h3 { class: "card-title", "Application Tracker" }
                    table {
                        class: "tracker-table",
                        thead {
                            tr {
                                th { "University" }
                                th { "Program" }
                                th { "Status" }
                                th { "Deadline" }
                            }
                        }
                        tbody {
                            for app in applications {
                                tr {
                                    key: "{app.id}",
                                    td { class: "tracker-university", "{app.university_name}" }
                                    td { "{app.program}" }
                                    td {
                                        span {
                                            class: app.status.badge_class(),
                                            "{app.status.as_str()}"
                                        }
                                    }
                                    td { "{app.deadline}" }
                                }
                            }
                        }
                    }
                }
            }

            section {
                class: "picks-section",
                div {
                    class: "picks-heading",
                    h3 { "Top University Picks for You" }
                }

                if loading {
                    div {
                        class: "picks-loading",
                        div { class: "spinner" }
                        p { "Analyzing your profile for the best fit..." }
                    }
                } else if recommendations.is_empty() {
                    div {
                        class: "picks-empty",
                        p { "No recommendations yet. Complete your profile, then refresh." }
                    }
                } else {
                    div {
                        class: "picks-grid",
                        for (uni, programs) in cards {
                            div {
                                key: "{uni.id}",
                                class: "card pick-card",
                                div {
                                    class: "pick-card-head",
                                    div {
                                        h4 { "{uni.name}" }
                                        p { class: "pick-location", "{uni.location}" }
                                    }
                                    span {
                                        class: category_badge_class(uni.category),
                                        "{uni.category}"
                                    }
                                }
                                div {
                                    class: "pick-score-row",
                                    span { "Match Score" }
                                    span { class: "pick-score", "{uni.match_score}%" }
                                }
                                div {
                                    class: "pick-score-track",
                                    div {
                                        class: "pick-score-fill",
                                        style: "width: {uni.match_score}%;",
                                    }
                                }
                                p {
                                    class: "pick-programs",
                                    strong { "Programs: " }
                                    "{programs}"
                                }
                                button { class: "pick-details", "View Program Details" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uni(id: &str, category: Category) -> University {
        University {
            id: id.to_string(),
            name: "U".to_string(),
            location: "Somewhere".to_string(),
            rank: 10,
            programs: vec!["MS".to_string()],
            category,
            fee: "$1".to_string(),
            match_score: 50,
        }
    }

    #[test]
    fn test_empty_list_floors_every_category_at_one() {
        let slices = category_slices(&[]);
        assert!(slices.iter().all(|s| s.count == 1));
    }

    #[test]
    fn test_counts_per_category() {
        let recs = vec![
            uni("1", Category::Safe),
            uni("2", Category::Safe),
            uni("3", Category::Reach),
        ];
        let slices = category_slices(&recs);
        assert_eq!(slices[0].category, Category::Safe);
        assert_eq!(slices[0].count, 2);
        // Empty category still rendered with the floor value
        assert_eq!(slices[1].category, Category::Moderate);
        assert_eq!(slices[1].count, 1);
        assert_eq!(slices[2].count, 1);
    }

    #[test]
    fn test_sample_applications_are_stable() {
        let apps = sample_applications();
        assert_eq!(apps.len(), 3);
        assert_eq!(apps[2].status.as_str(), "Accepted");
    }
}

//! # Documents page — AI review of application documents
//!
//! One active document kind (SOP/LOR/CV) gates a single content buffer.
//! Submitting sends the full text plus the selected kind; the result replaces
//! any prior feedback, and a rejected request displays a fixed fallback
//! string instead of an error trace. No review history is kept.
//!
//! The "My Documents" list is a fixed sample set, not wired to the review
//! flow's output.

use dioxus::prelude::*;

use advisor::DocumentKind;

use crate::request::{RequestSeq, RequestState};
use crate::make_advisor;

const DOCUMENTS_CSS: Asset = asset!("/assets/styling/documents.css");

/// Shown when the review request fails.
pub const REVIEW_FALLBACK: &str = "Failed to get review from AI.";

/// Kinds offered for review, in tab order.
pub const REVIEW_KINDS: [DocumentKind; 3] =
    [DocumentKind::Sop, DocumentKind::Lor, DocumentKind::Cv];

/// A document on file (sample data).
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentInfo {
    pub id: &'static str,
    pub kind: DocumentKind,
    pub status: DocumentStatus,
    pub last_updated: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentStatus {
    Pending,
    Reviewed,
    NeedsRevision,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Pending => "Pending",
            DocumentStatus::Reviewed => "Reviewed",
            DocumentStatus::NeedsRevision => "Needs Revision",
        }
    }

    fn badge_class(&self) -> &'static str {
        match self {
            DocumentStatus::Reviewed => "badge badge-green",
            DocumentStatus::Pending => "badge badge-yellow",
            DocumentStatus::NeedsRevision => "badge badge-red",
        }
    }
}

fn sample_documents() -> Vec<DocumentInfo> {
    vec![
        DocumentInfo {
            id: "1",
            kind: DocumentKind::Transcript,
            status: DocumentStatus::Reviewed,
            last_updated: "2023-10-12",
        },
        DocumentInfo {
            id: "2",
            kind: DocumentKind::Sop,
            status: DocumentStatus::NeedsRevision,
            last_updated: "2023-11-05",
        },
        DocumentInfo {
            id: "3",
            kind: DocumentKind::Lor,
            status: DocumentStatus::Pending,
            last_updated: "2023-11-10",
        },
    ]
}

#[component]
pub fn DocumentsView() -> Element {
    let mut active_kind = use_signal(|| DocumentKind::Sop);
    let mut content = use_signal(String::new);
    let feedback = use_signal(RequestState::<String>::default);
    let seq = use_signal(RequestSeq::default);

    let run_review = move |_| {
        let text = content().trim().to_string();
        if text.is_empty() || feedback.peek().is_pending() {
            return;
        }
        let kind = active_kind();
        spawn(async move {
            review(kind, text, feedback, seq).await;
        });
    };

    let feedback_now = feedback();
    let reviewing = feedback_now.is_pending();
    let feedback_text = match &feedback_now {
        RequestState::Succeeded(text) => Some(text.clone()),
        RequestState::Failed(message) => Some(message.clone()),
        _ => None,
    };
    let documents = sample_documents();
    let kind = active_kind();

    rsx! {
        document::Stylesheet { href: DOCUMENTS_CSS }

        div {
            class: "documents-page",

            header {
                class: "documents-header",
                h2 { class: "page-title", "Document Review" }
                p {
                    class: "page-subtitle",
                    "Upload your documents and get instant AI-powered formatting and quality feedback."
                }
            }

            div {
                class: "documents-grid",

                div {
                    class: "card documents-list",
                    h3 { class: "card-title", "My Documents" }
                    for doc in documents {
                        div {
                            key: "{doc.id}",
                            class: "document-row",
                            div {
                                p { class: "document-kind", "{doc.kind}" }
                                p { class: "document-updated", "{doc.last_updated}" }
                            }
                            span {
                                class: doc.status.badge_class(),
                                "{doc.status.as_str()}"
                            }
                        }
                    }
                    button { class: "upload-button", "+ Upload New File" }
                }

                div {
                    class: "documents-editor",

                    div {
                        class: "card",
                        div {
                            class: "kind-tabs",
                            for tab_kind in REVIEW_KINDS {
                                button {
                                    key: "{tab_kind}",
                                    class: if tab_kind == kind { "kind-tab active" } else { "kind-tab" },
                                    onclick: move |_| active_kind.set(tab_kind),
                                    "{tab_kind}"
                                }
                            }
                        }

                        label {
                            class: "editor-label",
                            "Paste your {kind} content here:"
                        }
                        textarea {
                            class: "editor-textarea",
                            placeholder: "Type or paste your {kind} here for AI analysis...",
                            value: content(),
                            oninput: move |evt| content.set(evt.value()),
                        }
                        button {
                            class: "review-button",
                            disabled: reviewing || content().trim().is_empty(),
                            onclick: run_review,
                            if reviewing {
                                "Reviewing with AI..."
                            } else {
                                "Run AI Quality Check"
                            }
                        }
                    }

                    if let Some(text) = feedback_text {
                        div {
                            class: "card feedback-card",
                            h4 { class: "feedback-title", "AI Feedback Report" }
                            div { class: "feedback-body", "{text}" }
                        }
                    }
                }
            }
        }
    }
}

/// Issue one review request, tagged against the page's request slot.
async fn review(
    kind: DocumentKind,
    text: String,
    mut feedback: Signal<RequestState<String>>,
    mut seq: Signal<RequestSeq>,
) {
    let tag = seq.write().begin();
    feedback.set(RequestState::Pending);

    let result = make_advisor().review_document(kind, &text).await;
    if !seq.peek().is_current(tag) {
        return; // superseded by a newer submission
    }
    match result {
        Ok(report) => feedback.set(RequestState::Succeeded(report)),
        Err(e) => {
            tracing::error!("document review failed: {e}");
            feedback.set(RequestState::Failed(REVIEW_FALLBACK.to_string()));
        }
    }
}

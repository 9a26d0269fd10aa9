//! # Onboarding wizard — three linear steps over one draft profile
//!
//! Step transitions are pure local state advances with no network call, and
//! they never touch the entered fields, so stepping back always shows exactly
//! what was typed. The final submit persists the profile and hands control
//! back to the caller for the one-way navigation to the dashboard.

use dioxus::prelude::*;

use store::UserProfile;

use crate::{make_profiles, Logo};

const WIZARD_CSS: Asset = asset!("/assets/styling/wizard.css");

/// Number of wizard steps.
pub const STEPS: usize = 3;

const FIELDS_OF_STUDY: [&str; 8] = [
    "Computer Science",
    "Business Administration",
    "Mathematics",
    "Data Science",
    "Psychology",
    "Economics",
    "Health",
    "Finance",
];

const COUNTRIES: [&str; 5] = ["USA", "Canada", "UK", "Germany", "Australia"];

const BUDGETS: [&str; 4] = [
    "$10,000 - $30,000",
    "$30,000 - $50,000",
    "$50,000 - $75,000",
    "$75,000+",
];

/// Pure wizard state: current step plus the draft profile.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WizardState {
    step: usize,
    pub profile: UserProfile,
}

impl WizardState {
    /// 1-based current step, clamped to `1..=STEPS`.
    pub fn step(&self) -> usize {
        self.step.max(1)
    }

    pub fn next(&mut self) {
        if self.step() < STEPS {
            self.step = self.step() + 1;
        }
    }

    pub fn back(&mut self) {
        if self.step() > 1 {
            self.step = self.step() - 1;
        }
    }

    pub fn is_first(&self) -> bool {
        self.step() == 1
    }

    pub fn is_last(&self) -> bool {
        self.step() == STEPS
    }
}

fn step_heading(step: usize) -> (&'static str, &'static str) {
    match step {
        1 => ("Tell us about yourself", "Start by filling in your basic details."),
        2 => ("Academic Profile", "Enter your GPA and standardized test scores."),
        _ => ("Preferences & Goals", "Select your desired destination and budget."),
    }
}

#[component]
pub fn GetStartedView(on_complete: EventHandler<()>) -> Element {
    let mut wizard = use_signal(WizardState::default);

    let submit = move |_| {
        let profile = wizard().profile;
        spawn(async move {
            make_profiles().save(&profile).await;
            on_complete.call(());
        });
    };

    let state = wizard();
    let step = state.step();
    let (title, subtitle) = step_heading(step);
    let profile = state.profile.clone();

    let fields = match step {
        1 => rsx! {
            div {
                class: "form-field",
                label { "Full Name" }
                input {
                    r#type: "text",
                    required: true,
                    value: profile.name.clone(),
                    oninput: move |evt| wizard.write().profile.name = evt.value(),
                }
            }
            div {
                class: "form-field",
                label { "Email Address" }
                input {
                    r#type: "email",
                    required: true,
                    placeholder: "you@university.com",
                    value: profile.email.clone(),
                    oninput: move |evt| wizard.write().profile.email = evt.value(),
                }
            }
            div {
                class: "form-field",
                label { "Field of Study" }
                select {
                    value: profile.field_of_study.clone(),
                    oninput: move |evt| wizard.write().profile.field_of_study = evt.value(),
                    for field in FIELDS_OF_STUDY {
                        option {
                            key: "{field}",
                            value: "{field}",
                            selected: field == profile.field_of_study,
                            "{field}"
                        }
                    }
                }
            }
        },
        2 => rsx! {
            div {
                class: "form-field",
                label { "GPA (Out of 4.0)" }
                input {
                    r#type: "number",
                    step: "0.01",
                    required: true,
                    placeholder: "3.85",
                    value: profile.gpa.clone(),
                    oninput: move |evt| wizard.write().profile.gpa = evt.value(),
                }
            }
            div {
                class: "form-row",
                div {
                    class: "form-field",
                    label { "IELTS Score" }
                    input {
                        r#type: "text",
                        placeholder: "7.5",
                        value: profile.exam_scores.ielts.clone().unwrap_or_default(),
                        oninput: move |evt| {
                            let v = evt.value();
                            wizard.write().profile.exam_scores.ielts =
                                if v.is_empty() { None } else { Some(v) };
                        },
                    }
                }
                div {
                    class: "form-field",
                    label { "GRE Score" }
                    input {
                        r#type: "text",
                        placeholder: "320",
                        value: profile.exam_scores.gre.clone().unwrap_or_default(),
                        oninput: move |evt| {
                            let v = evt.value();
                            wizard.write().profile.exam_scores.gre =
                                if v.is_empty() { None } else { Some(v) };
                        },
                    }
                }
            }
        },
        _ => rsx! {
            div {
                class: "form-field",
                label { "Target Country" }
                select {
                    value: profile.target_country.clone(),
                    oninput: move |evt| wizard.write().profile.target_country = evt.value(),
                    for country in COUNTRIES {
                        option {
                            key: "{country}",
                            value: "{country}",
                            selected: country == profile.target_country,
                            "{country}"
                        }
                    }
                }
            }
            div {
                class: "form-field",
                label { "Annual Budget" }
                select {
                    value: profile.budget.clone(),
                    oninput: move |evt| wizard.write().profile.budget = evt.value(),
                    for budget in BUDGETS {
                        option {
                            key: "{budget}",
                            value: "{budget}",
                            selected: budget == profile.budget,
                            "{budget}"
                        }
                    }
                }
            }
        },
    };

    rsx! {
        document::Stylesheet { href: WIZARD_CSS }

        div {
            class: "wizard-page",
            div {
                class: "wizard-panel",

                div {
                    class: "wizard-top",
                    Logo { size: 60 }
                    div {
                        class: "wizard-progress",
                        div {
                            class: "wizard-pills",
                            for s in 1..=STEPS {
                                div {
                                    key: "{s}",
                                    class: if step >= s { "wizard-pill filled" } else { "wizard-pill" },
                                }
                            }
                        }
                        span { class: "wizard-step-count", "Step {step} of {STEPS}" }
                    }
                }

                h2 { class: "wizard-title", "{title}" }
                p { class: "wizard-subtitle", "{subtitle}" }

                div {
                    class: "wizard-fields",
                    {fields}
                }

                div {
                    class: "wizard-actions",
                    if !state.is_first() {
                        button {
                            class: "wizard-back",
                            onclick: move |_| wizard.write().back(),
                            "Back"
                        }
                    } else {
                        div {}
                    }

                    if !state.is_last() {
                        button {
                            class: "wizard-continue",
                            onclick: move |_| wizard.write().next(),
                            "Continue"
                        }
                    } else {
                        button {
                            class: "wizard-continue",
                            onclick: submit,
                            "Generate My Plan"
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

    #[test]
    fn test_starts_at_step_one_with_draft_defaults() {
        let state = WizardState::default();
        assert_eq!(state.step(), 1);
        assert!(state.is_first());
        assert_eq!(state.profile.field_of_study, "Computer Science");
        assert_eq!(state.profile.target_country, "USA");
        assert_eq!(state.profile.budget, "$30,000 - $50,000");
    }

    #[test]
    fn test_steps_clamp_at_both_ends() {
        let mut state = WizardState::default();
        state.back();
        assert_eq!(state.step(), 1);

        state.next();
        state.next();
        assert!(state.is_last());
        state.next();
        assert_eq!(state.step(), STEPS);
    }

    #[test]
    fn test_round_trip_preserves_entered_fields() {
        let mut state = WizardState::default();
        state.profile.name = "Asha Rao".to_string();
        state.profile.email = "asha@example.com".to_string();

        state.next();
        state.profile.gpa = "3.9".to_string();
        state.profile.exam_scores.ielts = Some("7.5".to_string());

        state.next();
        state.profile.target_country = "Canada".to_string();

        // Walk all the way back; nothing entered earlier may change.
        state.back();
        state.back();
        assert_eq!(state.step(), 1);
        assert_eq!(state.profile.name, "Asha Rao");
        assert_eq!(state.profile.email, "asha@example.com");
        assert_eq!(state.profile.gpa, "3.9");
        assert_eq!(state.profile.exam_scores.ielts.as_deref(), Some("7.5"));
        assert_eq!(state.profile.target_country, "Canada");
    }
}

use log::{error, info};

use super::client::SubmitError;
use super::draft::EnquiryDraft;
use crate::i18n::Strings;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}

/// How a settled submission ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Rejected { status: u16 },
    NetworkFailure,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Default,
    Destructive,
}

/// Toast shown to the visitor once a submission settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: &'static str,
    pub description: &'static str,
}

impl Outcome {
    pub fn notice(&self, strings: &Strings) -> Notice {
        match self {
            Outcome::Success => Notice {
                kind: NoticeKind::Default,
                title: strings.enquiry_success_title,
                description: strings.enquiry_success_description,
            },
            Outcome::Rejected { .. } => Notice {
                kind: NoticeKind::Destructive,
                title: strings.enquiry_rejected_title,
                description: strings.enquiry_rejected_description,
            },
            Outcome::NetworkFailure => Notice {
                kind: NoticeKind::Destructive,
                title: strings.enquiry_network_title,
                description: strings.enquiry_network_description,
            },
        }
    }
}

/// Draft plus submission state for one enquiry form.
///
/// `begin_submit` and `settle` bracket the single network call of an attempt:
/// the first hands out the payload, locks the form and withdraws the previous
/// attempt's outcome, the second always unlocks it and decides what happens
/// to the draft.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnquiryWorkflow {
    pub draft: EnquiryDraft,
    state: SubmissionState,
    outcome: Option<Outcome>,
}

impl EnquiryWorkflow {
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Outcome of the last settled attempt, until dismissed or resubmitted.
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn dismiss_outcome(&mut self) {
        self.outcome = None;
    }

    /// Returns the draft to transmit, or `None` while a submission is
    /// already in flight.
    pub fn begin_submit(&mut self) -> Option<EnquiryDraft> {
        if self.is_submitting() {
            return None;
        }
        self.state = SubmissionState::Submitting;
        self.outcome = None;
        Some(self.draft.clone())
    }

    pub fn settle(&mut self, result: Result<(), SubmitError>) -> Outcome {
        self.state = SubmissionState::Idle;
        let outcome = match result {
            Ok(()) => {
                info!("Enquiry submitted, clearing form");
                self.draft = EnquiryDraft::default();
                Outcome::Success
            }
            Err(SubmitError::Rejected { status }) => Outcome::Rejected { status },
            Err(SubmitError::Network(detail)) => {
                error!("Network Error: {}", detail);
                Outcome::NetworkFailure
            }
        };
        self.outcome = Some(outcome.clone());
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enquiry::draft::{Interest, TextField};
    use crate::i18n::Lang;

    fn filled_workflow() -> EnquiryWorkflow {
        let mut workflow = EnquiryWorkflow::default();
        let draft = &mut workflow.draft;
        draft.set_text(TextField::FullName, "John Doe".to_string());
        draft.set_text(TextField::Email, "john@example.com".to_string());
        draft.set_text(TextField::Phone, "+1 (555) 123-4567".to_string());
        draft.set_text(TextField::Message, "I want to learn Rust".to_string());
        draft.select_interest("bootcamp");
        workflow
    }

    #[test]
    fn success_clears_the_draft() {
        let mut workflow = filled_workflow();
        let sent = workflow.begin_submit().expect("idle form submits");
        assert_eq!(sent.interest, Some(Interest::Bootcamp));
        assert_eq!(sent.form_fields()[3], ("interest", "bootcamp"));

        let outcome = workflow.settle(Ok(()));
        assert_eq!(outcome, Outcome::Success);
        assert!(workflow.draft.is_empty());
        assert_eq!(workflow.draft.interest, None);
        assert_eq!(workflow.state(), SubmissionState::Idle);

        let notice = outcome.notice(Lang::En.strings());
        assert_eq!(notice.kind, NoticeKind::Default);
        assert_eq!(notice.title, "Enquiry Submitted Successfully! 🎉");
    }

    #[test]
    fn rejection_keeps_the_draft() {
        let mut workflow = filled_workflow();
        let before = workflow.draft.clone();
        workflow.begin_submit();

        let outcome = workflow.settle(Err(SubmitError::Rejected { status: 422 }));
        assert_eq!(outcome, Outcome::Rejected { status: 422 });
        assert_eq!(workflow.draft, before);
        assert_eq!(workflow.state(), SubmissionState::Idle);

        let notice = outcome.notice(Lang::En.strings());
        assert_eq!(notice.kind, NoticeKind::Destructive);
        assert_eq!(notice.title, "Submission Failed");
    }

    #[test]
    fn network_failure_keeps_the_draft() {
        let mut workflow = filled_workflow();
        let before = workflow.draft.clone();
        workflow.begin_submit();

        let outcome = workflow.settle(Err(SubmitError::Network(
            "connection refused".to_string(),
        )));
        assert_eq!(outcome, Outcome::NetworkFailure);
        assert_eq!(workflow.draft, before);
        assert!(!workflow.is_submitting());

        let notice = outcome.notice(Lang::En.strings());
        assert_eq!(notice.kind, NoticeKind::Destructive);
        assert_eq!(
            notice.description,
            "A network error occurred. Please check your connection."
        );
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let mut workflow = filled_workflow();
        assert!(workflow.begin_submit().is_some());
        assert!(workflow.is_submitting());
        assert_eq!(workflow.begin_submit(), None);
        assert_eq!(workflow.begin_submit(), None);

        workflow.settle(Ok(()));
        assert!(workflow.begin_submit().is_some());
    }

    #[test]
    fn retry_after_failure_resends_the_same_draft() {
        let mut workflow = filled_workflow();
        let first = workflow.begin_submit();
        workflow.settle(Err(SubmitError::Rejected { status: 500 }));
        let second = workflow.begin_submit();
        assert_eq!(first, second);
    }

    #[test]
    fn every_outcome_returns_to_idle() {
        let results = [
            Ok(()),
            Err(SubmitError::Rejected { status: 503 }),
            Err(SubmitError::Network("timeout".to_string())),
        ];
        for result in results {
            let mut workflow = filled_workflow();
            workflow.begin_submit();
            workflow.settle(result);
            assert_eq!(workflow.state(), SubmissionState::Idle);
        }
    }

    #[test]
    fn resubmitting_withdraws_the_previous_outcome() {
        let mut workflow = filled_workflow();
        workflow.begin_submit();
        workflow.settle(Err(SubmitError::Rejected { status: 422 }));
        assert_eq!(workflow.outcome(), Some(&Outcome::Rejected { status: 422 }));

        workflow.begin_submit();
        assert_eq!(workflow.outcome(), None);

        workflow.settle(Err(SubmitError::Rejected { status: 422 }));
        assert_eq!(workflow.outcome(), Some(&Outcome::Rejected { status: 422 }));

        workflow.dismiss_outcome();
        assert_eq!(workflow.outcome(), None);
    }

    #[test]
    fn ignored_submit_keeps_nothing_visible_until_settle() {
        let mut workflow = filled_workflow();
        workflow.begin_submit();
        assert_eq!(workflow.begin_submit(), None);
        assert_eq!(workflow.outcome(), None);
        workflow.settle(Ok(()));
        assert_eq!(workflow.outcome(), Some(&Outcome::Success));
    }
}

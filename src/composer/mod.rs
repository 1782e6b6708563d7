pub mod input;
pub mod state;
pub mod view;

use std::sync::Arc;

use tokio::{sync::watch, task::JoinHandle};

use crate::{
    classifier::Classifier,
    domain::{Draft, SpamStatus},
};

use self::{input::FormCommand, state::StatusCell};

/// What the session loop should do after a command was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Redraw,
    Sent,
    Help,
    Quit,
}

pub struct EmailComposer<C> {
    classifier: Arc<C>,
    draft: Draft,
    status: Arc<StatusCell>,
    in_flight: Vec<JoinHandle<()>>,
}

impl<C: Classifier> EmailComposer<C> {
    pub fn new(classifier: Arc<C>) -> Self {
        Self {
            classifier,
            draft: Draft::default(),
            status: Arc::new(StatusCell::new()),
            in_flight: Vec::new(),
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn status(&self) -> SpamStatus {
        self.status.current()
    }

    pub fn watch_status(&self) -> watch::Receiver<SpamStatus> {
        self.status.subscribe()
    }

    pub fn apply(&mut self, command: FormCommand) -> Outcome {
        match command {
            FormCommand::To(recipient) => {
                self.draft.recipient = recipient;
                Outcome::Continue
            }
            FormCommand::Subject(subject) => {
                self.draft.subject = subject;
                Outcome::Continue
            }
            FormCommand::Body(line) => {
                self.draft.push_body_line(&line);
                Outcome::Continue
            }
            FormCommand::Send => {
                let handle = self.send_draft();
                self.in_flight.retain(|task| !task.is_finished());
                self.in_flight.push(handle);
                Outcome::Sent
            }
            FormCommand::Show => Outcome::Redraw,
            FormCommand::Clear => {
                self.draft.clear();
                Outcome::Redraw
            }
            FormCommand::Help | FormCommand::Unknown(_) => Outcome::Help,
            FormCommand::Quit => Outcome::Quit,
        }
    }

    /// Waits for every send issued through `apply` to resolve.
    pub async fn settle(&mut self) {
        for task in self.in_flight.drain(..) {
            if let Err(err) = task.await {
                tracing::error!(target: "composer", error = %err, "send task did not complete");
            }
        }
    }

    /// Sends whatever the body holds right now. The draft stays in the form.
    pub fn send_draft(&self) -> JoinHandle<()> {
        self.handle_send(self.draft.body.clone())
    }

    /// Fires one classification request without waiting for it. A successful
    /// reply updates the status unless a newer reply already landed; a failed
    /// one is only logged.
    pub fn handle_send(&self, body_text: String) -> JoinHandle<()> {
        let ticket = self.status.issue();
        let classifier = self.classifier.clone();
        let status = self.status.clone();

        tracing::info!(
            target: "composer",
            ?ticket,
            chars = body_text.chars().count(),
            "sending message for classification"
        );

        tokio::spawn(async move {
            match classifier.classify(&body_text).await {
                Ok(verdict) => {
                    if status.apply(ticket, verdict) {
                        tracing::info!(
                            target: "composer",
                            ?ticket,
                            status = verdict.label(),
                            "classification applied"
                        );
                    } else {
                        tracing::debug!(
                            target: "composer",
                            ?ticket,
                            "discarding reply to an older send"
                        );
                    }
                }
                Err(err) => {
                    tracing::error!(
                        target: "composer",
                        ?ticket,
                        error = %format!("{err:#}"),
                        "classification request failed"
                    );
                }
            }
        })
    }
}

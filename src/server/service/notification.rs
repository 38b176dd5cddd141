//! Email notifications.
//!
//! Services never talk to the mail transport directly. They hand an
//! `EmailMessage` to the `NotificationQueue`, and a background worker drains the
//! queue into a `Mailer`. Enqueueing cannot fail the caller, and delivery
//! failures are only logged.

use async_trait::async_trait;
use dioxus_logger::tracing;
use std::sync::Arc;
use tokio::{
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
    task::JoinHandle,
};

use crate::server::{
    error::AppError,
    model::{
        context::ActorContext,
        email::{self, EmailMessage},
    },
};

/// Email delivery transport.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<(), AppError>;
}

/// Mailer that renders the template and logs the delivery.
///
/// Only the subject and recipients reach the log; bodies may carry credentials.
pub struct LogMailer;

impl LogMailer {
    pub fn shared() -> Arc<dyn Mailer> {
        Arc::new(Self)
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, message: &EmailMessage) -> Result<(), AppError> {
        let (subject, _) = render_template(message)?;

        tracing::info!("{}", delivery_summary(&subject, message));

        Ok(())
    }
}

fn delivery_summary(subject: &str, message: &EmailMessage) -> String {
    format!("Sending '{}' to {}", subject, message.to.join(", "))
}

/// Renders the subject and body for a message's template code.
///
/// # Returns
/// - `Ok((subject, body))` - Rendered template
/// - `Err(AppError::BadRequest)` - Unknown template code
pub fn render_template(message: &EmailMessage) -> Result<(String, String), AppError> {
    let user = message.get("user").unwrap_or_default();

    let rendered = match message.code.as_str() {
        email::FORGOT_PASSWORD => (
            "Password recovery".to_string(),
            format!(
                "Hello {},\nyour password is: {}",
                user,
                message.get("password").unwrap_or_default()
            ),
        ),
        email::ONE_TIME_PASSWORD => (
            "One-time password".to_string(),
            format!(
                "Hello {},\nyour one-time password is {}. It is valid for 5 minutes.",
                user,
                message.get("otp").unwrap_or_default()
            ),
        ),
        email::CHANGE_PASSWORD => (
            "Password changed".to_string(),
            format!("Hello {},\nyour password has been changed.", user),
        ),
        email::REGISTRATION => (
            "Registration successful".to_string(),
            format!(
                "Hello {},\nyou have been registered.\nLogin Id: {}\nPassword: {}",
                user,
                message.get("login").unwrap_or_default(),
                message.get("password").unwrap_or_default()
            ),
        ),
        other => {
            return Err(AppError::BadRequest(format!(
                "Unknown email template '{}'",
                other
            )))
        }
    };

    Ok(rendered)
}

/// Handle used by services to queue outgoing email.
#[derive(Clone)]
pub struct NotificationQueue {
    sender: UnboundedSender<EmailMessage>,
}

impl NotificationQueue {
    /// Creates the queue and spawns the worker that delivers through `mailer`.
    ///
    /// The worker stops once every queue handle has been dropped.
    pub fn start(mailer: Arc<dyn Mailer>) -> (Self, JoinHandle<()>) {
        let (queue, receiver) = Self::channel();
        let worker = tokio::spawn(run_worker(receiver, mailer));

        (queue, worker)
    }

    /// Creates the queue without a worker, leaving the receiving end to the caller.
    pub fn channel() -> (Self, UnboundedReceiver<EmailMessage>) {
        let (sender, receiver) = mpsc::unbounded_channel();

        (Self { sender }, receiver)
    }

    /// Queues a message for delivery. Never fails the caller.
    pub fn enqueue(&self, message: EmailMessage, ctx: &ActorContext) {
        tracing::debug!("{} queued '{}' email", ctx.login_id, message.code);

        if let Err(e) = self.sender.send(message) {
            tracing::warn!("Notification worker is gone, dropping '{}' email", e.0.code);
        }
    }
}

async fn run_worker(mut receiver: UnboundedReceiver<EmailMessage>, mailer: Arc<dyn Mailer>) {
    while let Some(message) = receiver.recv().await {
        if let Err(e) = mailer.send(&message).await {
            tracing::warn!("Failed to deliver '{}' email: {}", message.code, e);
        }
    }
}

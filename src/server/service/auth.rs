//! Authentication workflow.
//!
//! This module provides the `AuthService`, a stateless sequence of operations over
//! the account record: credential check with failed attempt bookkeeping, token
//! issuance, forgot password, one-time passwords, change password, sign-up and the
//! profile picture. Domain failures come back as `None`/`false` so controllers
//! can turn them into failure envelopes; only lower-layer failures are errors.

use chrono::Utc;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{repository::Repository, role::RoleRepository, user::UserRepository},
    error::AppError,
    model::{
        attachment::Attachment,
        context::ActorContext,
        email::{self, EmailMessage},
        user::User,
    },
    service::{
        attachment::AttachmentService, entity::EntityService, notification::NotificationQueue,
        otp::OtpService,
        token::{Claims, TokenService},
    },
};

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// Account as it is after the login was recorded.
    pub user: User,
    pub token: String,
    /// Name of the account's role, if the role still exists.
    pub role_name: Option<String>,
}

/// Service providing the authentication workflow.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    otp: &'a OtpService,
    notifications: &'a NotificationQueue,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService over the shared collaborators.
    pub fn new(
        db: &'a DatabaseConnection,
        tokens: &'a TokenService,
        otp: &'a OtpService,
        notifications: &'a NotificationQueue,
    ) -> Self {
        Self {
            db,
            tokens,
            otp,
            notifications,
        }
    }

    pub async fn find_by_login_id(&self, login_id: &str) -> Result<Option<User>, AppError> {
        let user_repo = UserRepository::new(self.db);
        Ok(user_repo.find_by_login_id(login_id).await?)
    }

    /// Checks credentials and, on success, issues a bearer token.
    ///
    /// A wrong password increments the account's failed attempt counter; a correct
    /// one resets it and stamps the last login time. Unknown login id and wrong
    /// password are indistinguishable to the caller.
    ///
    /// # Returns
    /// - `Ok(Some(LoginOutcome))` - Credentials matched
    /// - `Ok(None)` - Unknown login id or wrong password
    /// - `Err(AppError)` - Database or token error
    pub async fn login(
        &self,
        login_id: &str,
        password: &str,
    ) -> Result<Option<LoginOutcome>, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(mut user) = user_repo.find_by_login_id(login_id).await? else {
            tracing::debug!("Login attempt for unknown login id");
            return Ok(None);
        };
        let Some(id) = user.id else {
            return Ok(None);
        };

        if !user.password_matches(password) {
            user_repo.record_login_failure(id).await?;
            tracing::info!("Failed login attempt for account {}", id);
            return Ok(None);
        }

        let now = Utc::now();
        user_repo.record_login_success(id, now).await?;
        user.failed_login_attempts = 0;
        user.last_login = Some(now);

        let token = self.tokens.issue(&user.login_id)?;

        let ctx = ActorContext::from_user(&user);
        let role_name = match user.role_id {
            Some(role_id) => RoleRepository::new(self.db)
                .find_by_id(role_id, &ctx)
                .await?
                .map(|role| role.name),
            None => None,
        };

        Ok(Some(LoginOutcome {
            user,
            token,
            role_name,
        }))
    }

    /// Checks a bearer token's signature and expiry.
    pub fn verify_token(&self, token: &str) -> Result<Claims, AppError> {
        self.tokens.verify(token)
    }

    /// Resolves the caller behind a verified token subject.
    ///
    /// # Returns
    /// - `Ok(Some(ActorContext))` - Subject maps to an account
    /// - `Ok(None)` - No account holds that login id any more
    pub async fn resolve_actor(&self, login_id: &str) -> Result<Option<ActorContext>, AppError> {
        let user = self.find_by_login_id(login_id).await?;
        Ok(user.as_ref().map(ActorContext::from_user))
    }

    /// Mails the stored password to the account owner.
    ///
    /// Runs under the system context since the caller is unauthenticated. The
    /// password is only ever sent by email, never returned.
    ///
    /// # Returns
    /// - `Ok(true)` - Account found and the email queued
    /// - `Ok(false)` - Unknown login id, nothing sent
    pub async fn forgot_password(&self, login_id: &str) -> Result<bool, AppError> {
        let ctx = ActorContext::system();
        let user_service = EntityService::new(UserRepository::new(self.db));

        let Some(user) = user_service
            .find_by_unique_key("loginId", login_id, &ctx)
            .await?
        else {
            return Ok(false);
        };

        // Plaintext password by email; a reset link would avoid this.
        let message = EmailMessage::new(email::FORGOT_PASSWORD)
            .to(&user.login_id)
            .param("user", user.full_name())
            .param("password", &user.password);
        self.notifications.enqueue(message, &ctx);

        Ok(true)
    }

    /// Issues a one-time password and mails it to the account owner.
    ///
    /// # Returns
    /// - `Ok(Some(code))` - Code issued and email queued
    /// - `Ok(None)` - Unknown login id
    pub async fn issue_otp(&self, login_id: &str) -> Result<Option<String>, AppError> {
        let Some(user) = self.find_by_login_id(login_id).await? else {
            return Ok(None);
        };

        let code = self.otp.issue(&user.login_id).await;

        let message = EmailMessage::new(email::ONE_TIME_PASSWORD)
            .to(&user.login_id)
            .param("user", user.full_name())
            .param("otp", &code);
        self.notifications.enqueue(message, &ActorContext::system());

        Ok(Some(code))
    }

    /// Redeems a one-time password previously issued for `login_id`.
    pub async fn verify_otp(&self, login_id: &str, code: &str) -> bool {
        self.otp.verify_and_consume(login_id, code).await
    }

    /// Changes the caller's password after checking the current one.
    ///
    /// # Returns
    /// - `Ok(true)` - Password changed and notification queued
    /// - `Ok(false)` - Current password did not match, nothing changed
    /// - `Err(AppError::NotFound)` - The caller's account no longer exists
    pub async fn change_password(
        &self,
        old_password: &str,
        new_password: &str,
        ctx: &ActorContext,
    ) -> Result<bool, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_login_id(&ctx.login_id).await? else {
            return Err(AppError::NotFound("Record not found".to_string()));
        };
        let Some(id) = user.id else {
            return Err(AppError::NotFound("Record not found".to_string()));
        };

        if !user.password_matches(old_password) {
            return Ok(false);
        }

        user_repo.set_password(id, new_password, ctx).await?;

        let message = EmailMessage::new(email::CHANGE_PASSWORD)
            .to(&user.login_id)
            .param("user", user.full_name());
        self.notifications.enqueue(message, ctx);

        Ok(true)
    }

    /// Registers a new account under the system context.
    ///
    /// The account is stored as given; callers build it with
    /// `user_from_registration` so it starts inactive with the member role.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the new account
    /// - `Err(AppError::Conflict)` - Login id already registered
    pub async fn register(&self, user: User) -> Result<i32, AppError> {
        let ctx = ActorContext::system();
        let user_service = EntityService::new(UserRepository::new(self.db));

        let id = user_service.add(&user, &ctx).await?;

        // The welcome mail carries the plaintext password.
        let message = EmailMessage::new(email::REGISTRATION)
            .to(&user.login_id)
            .param("user", user.full_name())
            .param("login", &user.login_id)
            .param("password", &user.password);
        self.notifications.enqueue(message, &ctx);

        Ok(id)
    }

    /// Stores a profile picture and points the account at it.
    ///
    /// An existing picture is replaced in place; the account's image reference is
    /// written every time.
    ///
    /// # Returns
    /// - `Ok(Some(image_id))` - Picture stored
    /// - `Ok(None)` - No account with that id
    pub async fn upload_profile_picture(
        &self,
        user_id: i32,
        mut picture: Attachment,
        ctx: &ActorContext,
    ) -> Result<Option<i32>, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_id(user_id, ctx).await? else {
            return Ok(None);
        };

        picture.user_id = user_id;
        picture.id = user.image_id.filter(|id| *id > 0);

        let image_id = AttachmentService::new(self.db).save(picture, ctx).await?;
        user_repo.set_image(user_id, image_id, ctx).await?;

        Ok(Some(image_id))
    }

    /// Loads the account's profile picture.
    ///
    /// # Returns
    /// - `Ok(None)` - Unknown account or no picture uploaded yet
    pub async fn profile_picture(
        &self,
        user_id: i32,
        ctx: &ActorContext,
    ) -> Result<Option<Attachment>, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(image_id) = user_repo
            .find_by_id(user_id, ctx)
            .await?
            .and_then(|user| user.image_id)
        else {
            return Ok(None);
        };

        AttachmentService::new(self.db).find_by_id(image_id).await
    }
}

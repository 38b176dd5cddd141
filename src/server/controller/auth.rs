use axum::{
    extract::{
        multipart::MultipartRejection,
        rejection::{JsonRejection, PathRejection},
        Multipart, Path, State,
    },
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    model::{
        api::ResponseEnvelope,
        auth::{ChangePasswordForm, LoginForm, OtpVerifyForm, RegistrationForm},
    },
    server::{
        controller::base::RECORD_NOT_FOUND,
        error::AppError,
        middleware::auth::{Actor, Authenticated},
        model::{
            attachment::Attachment,
            auth::{
                user_from_registration, validate_change_password, validate_login, validate_otp,
                validate_registration,
            },
            record::Record,
        },
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

pub const INVALID_CREDENTIALS: &str = "Invalid ID or Password";
pub const INVALID_LOGIN_ID: &str = "Invalid Login Id";
pub const PASSWORD_SENT: &str = "Password has been sent to email id";
pub const EMPTY_FIELDS: &str = "Please fill following empty fields";
pub const LOGIN_ID_TAKEN: &str = "Login Id already exists";
pub const REGISTERED: &str = "User Registered Successfully";
pub const PASSWORD_CHANGED: &str = "Password has been changed successfully";
pub const WRONG_OLD_PASSWORD: &str = "Old password is incorrect";
pub const OTP_SENT: &str = "OTP has been sent to email id";
pub const OTP_VERIFIED: &str = "OTP verified";
pub const OTP_INVALID: &str = "Invalid or expired OTP";
pub const FILE_REQUIRED: &str = "Please select a file to upload";

/// Multipart field carrying the uploaded picture.
const FILE_FIELD: &str = "file";

fn auth_service(state: &AppState) -> AuthService<'_> {
    AuthService::new(&state.db, &state.tokens, &state.otp, &state.notifications)
}

/// Authenticate with login id and password.
///
/// On success the account is returned as data and the bearer token together with
/// the login id, role name and names are returned under `results`. Unknown login
/// id and wrong password produce the same failure.
///
/// # Returns
/// - `200 OK` - Envelope with `success` telling whether the credentials matched
/// - `400 Bad Request` - Body is not a login form
/// - `500 Internal Server Error` - Database or token error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginForm,
    responses(
        (status = 200, description = "Login outcome", body = ResponseEnvelope),
        (status = 400, description = "Malformed login form", body = ResponseEnvelope),
        (status = 500, description = "Internal server error", body = ResponseEnvelope)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    form: Result<Json<LoginForm>, JsonRejection>,
) -> Result<Json<ResponseEnvelope>, AppError> {
    let Json(form) = form?;

    let errors = validate_login(&form);
    if !errors.is_empty() {
        let mut res = ResponseEnvelope::new(false);
        res.add_input_errors(errors);
        return Ok(Json(res));
    }

    let Some(outcome) = auth_service(&state)
        .login(form.login_id.trim(), &form.password)
        .await?
    else {
        return Ok(Json(ResponseEnvelope::failure(INVALID_CREDENTIALS)));
    };

    let user = outcome.user;

    let mut res = ResponseEnvelope::new(true);
    res.add_result("token", outcome.token);
    res.add_result("loginId", user.login_id.clone());
    res.add_result("role", outcome.role_name);
    res.add_result("fname", user.first_name.clone());
    res.add_result("lname", user.last_name.clone());
    res.add_data(user.into_dto());

    Ok(Json(res))
}

/// Public lookup returning only the names and login id of an account.
#[utoipa::path(
    get,
    path = "/api/auth/login/{login_id}",
    tag = AUTH_TAG,
    params(
        ("login_id" = String, Path, description = "Login id of the account")
    ),
    responses(
        (status = 200, description = "Account summary or not found", body = ResponseEnvelope),
        (status = 500, description = "Internal server error", body = ResponseEnvelope)
    ),
)]
pub async fn find_by_login_id(
    State(state): State<AppState>,
    Path(login_id): Path<String>,
) -> Result<Json<ResponseEnvelope>, AppError> {
    let res = match auth_service(&state).find_by_login_id(&login_id).await? {
        Some(user) => {
            let mut res = ResponseEnvelope::new(true);
            res.add_data(user.into_summary_dto());
            res
        }
        None => ResponseEnvelope::failure(RECORD_NOT_FOUND),
    };

    Ok(Json(res))
}

/// Mails the account's password to its owner.
///
/// The password itself is never part of the response.
#[utoipa::path(
    get,
    path = "/api/auth/fp/{login_id}",
    tag = AUTH_TAG,
    params(
        ("login_id" = String, Path, description = "Login id of the account")
    ),
    responses(
        (status = 200, description = "Whether the email was queued", body = ResponseEnvelope),
        (status = 500, description = "Internal server error", body = ResponseEnvelope)
    ),
)]
pub async fn forgot_password(
    State(state): State<AppState>,
    Path(login_id): Path<String>,
) -> Result<Json<ResponseEnvelope>, AppError> {
    let res = if auth_service(&state).forgot_password(&login_id).await? {
        let mut res = ResponseEnvelope::new(true);
        res.add_message(PASSWORD_SENT);
        res
    } else {
        ResponseEnvelope::failure(INVALID_LOGIN_ID)
    };

    Ok(Json(res))
}

/// Self-service registration.
///
/// New accounts start inactive with the member role.
#[utoipa::path(
    post,
    path = "/api/auth/signUp",
    tag = AUTH_TAG,
    request_body = RegistrationForm,
    responses(
        (status = 200, description = "Registration outcome", body = ResponseEnvelope),
        (status = 400, description = "Malformed registration form", body = ResponseEnvelope),
        (status = 500, description = "Internal server error", body = ResponseEnvelope)
    ),
)]
pub async fn sign_up(
    State(state): State<AppState>,
    form: Result<Json<RegistrationForm>, JsonRejection>,
) -> Result<Json<ResponseEnvelope>, AppError> {
    let Json(form) = form?;

    let errors = validate_registration(&form);
    if !errors.is_empty() {
        let mut res = ResponseEnvelope::new(false);
        res.add_input_errors(errors);
        res.add_message(EMPTY_FIELDS);
        return Ok(Json(res));
    }

    let service = auth_service(&state);
    let user = user_from_registration(&form);

    if service.find_by_login_id(&user.login_id).await?.is_some() {
        return Ok(Json(ResponseEnvelope::failure(LOGIN_ID_TAKEN)));
    }

    let res = match service.register(user).await {
        Ok(_) => {
            let mut res = ResponseEnvelope::new(true);
            res.add_message(REGISTERED);
            res
        }
        // Lost a race with a concurrent sign-up for the same login id.
        Err(AppError::Conflict(_)) => ResponseEnvelope::failure(LOGIN_ID_TAKEN),
        Err(e) => return Err(e),
    };

    Ok(Json(res))
}

/// Changes the caller's password after checking the current one.
#[utoipa::path(
    post,
    path = "/api/auth/changePassword",
    tag = AUTH_TAG,
    request_body = ChangePasswordForm,
    responses(
        (status = 200, description = "Change outcome", body = ResponseEnvelope),
        (status = 401, description = "Caller not authenticated", body = ResponseEnvelope),
        (status = 500, description = "Internal server error", body = ResponseEnvelope)
    ),
)]
pub async fn change_password(
    State(state): State<AppState>,
    Authenticated(ctx): Authenticated,
    form: Result<Json<ChangePasswordForm>, JsonRejection>,
) -> Result<Json<ResponseEnvelope>, AppError> {
    let Json(form) = form?;

    let errors = validate_change_password(&form);
    if !errors.is_empty() {
        let mut res = ResponseEnvelope::new(false);
        res.add_input_errors(errors);
        return Ok(Json(res));
    }

    let changed = auth_service(&state)
        .change_password(&form.old_password, &form.new_password, &ctx)
        .await?;

    let res = if changed {
        let mut res = ResponseEnvelope::new(true);
        res.add_message(PASSWORD_CHANGED);
        res
    } else {
        ResponseEnvelope::failure(WRONG_OLD_PASSWORD)
    };

    Ok(Json(res))
}

/// Uploads or replaces an account's profile picture.
///
/// Expects a multipart body with the picture in the `file` field. The id of the
/// stored picture is returned under `results.imageId`.
#[utoipa::path(
    post,
    path = "/api/auth/profilePic/{user_id}",
    tag = AUTH_TAG,
    params(
        ("user_id" = i32, Path, description = "Id of the account")
    ),
    responses(
        (status = 200, description = "Upload outcome", body = ResponseEnvelope),
        (status = 400, description = "Malformed multipart body", body = ResponseEnvelope),
        (status = 500, description = "Internal server error", body = ResponseEnvelope)
    ),
)]
pub async fn upload_profile_picture(
    State(state): State<AppState>,
    Actor(ctx): Actor,
    user_id: Result<Path<i32>, PathRejection>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ResponseEnvelope>, AppError> {
    let Path(user_id) = user_id?;
    let mut multipart = multipart?;

    let mut picture = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let name = field.file_name().unwrap_or_default().to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = field.bytes().await?;

        picture = Some(Attachment {
            name,
            content_type,
            description: "Profile picture".to_string(),
            path: format!("/api/auth/profilePic/{}", user_id),
            data: data.to_vec(),
            ..Default::default()
        });
        break;
    }

    let Some(picture) = picture else {
        return Ok(Json(ResponseEnvelope::failure(FILE_REQUIRED)));
    };

    let res = match auth_service(&state)
        .upload_profile_picture(user_id, picture, &ctx)
        .await?
    {
        Some(image_id) => {
            let mut res = ResponseEnvelope::new(true);
            res.add_result("imageId", image_id);
            res
        }
        None => ResponseEnvelope::failure(RECORD_NOT_FOUND),
    };

    Ok(Json(res))
}

/// Serves an account's profile picture with its stored content type.
#[utoipa::path(
    get,
    path = "/api/auth/profilePic/{user_id}",
    tag = AUTH_TAG,
    params(
        ("user_id" = i32, Path, description = "Id of the account")
    ),
    responses(
        (status = 200, description = "Picture bytes", body = String, content_type = "application/octet-stream"),
        (status = 404, description = "No account or no picture", body = ResponseEnvelope),
        (status = 500, description = "Internal server error", body = ResponseEnvelope)
    ),
)]
pub async fn get_profile_picture(
    State(state): State<AppState>,
    Actor(ctx): Actor,
    user_id: Result<Path<i32>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(user_id) = user_id?;

    let Some(picture) = auth_service(&state).profile_picture(user_id, &ctx).await? else {
        return Err(AppError::NotFound(RECORD_NOT_FOUND.to_string()));
    };

    Ok(([(header::CONTENT_TYPE, picture.content_type)], picture.data).into_response())
}

/// Issues a one-time password and mails it to the account owner.
///
/// The code is only ever delivered by email.
#[utoipa::path(
    get,
    path = "/api/auth/otp/{login_id}",
    tag = AUTH_TAG,
    params(
        ("login_id" = String, Path, description = "Login id of the account")
    ),
    responses(
        (status = 200, description = "Whether a code was issued", body = ResponseEnvelope),
        (status = 500, description = "Internal server error", body = ResponseEnvelope)
    ),
)]
pub async fn issue_otp(
    State(state): State<AppState>,
    Path(login_id): Path<String>,
) -> Result<Json<ResponseEnvelope>, AppError> {
    let res = match auth_service(&state).issue_otp(&login_id).await? {
        Some(_) => {
            let mut res = ResponseEnvelope::new(true);
            res.add_message(OTP_SENT);
            res
        }
        None => ResponseEnvelope::failure(INVALID_LOGIN_ID),
    };

    Ok(Json(res))
}

/// Redeems a one-time password. A redeemed code cannot be used again.
#[utoipa::path(
    post,
    path = "/api/auth/otp/verify",
    tag = AUTH_TAG,
    request_body = OtpVerifyForm,
    responses(
        (status = 200, description = "Verification outcome", body = ResponseEnvelope),
        (status = 400, description = "Malformed form", body = ResponseEnvelope)
    ),
)]
pub async fn verify_otp(
    State(state): State<AppState>,
    form: Result<Json<OtpVerifyForm>, JsonRejection>,
) -> Result<Json<ResponseEnvelope>, AppError> {
    let Json(form) = form?;

    let errors = validate_otp(&form);
    if !errors.is_empty() {
        let mut res = ResponseEnvelope::new(false);
        res.add_input_errors(errors);
        return Ok(Json(res));
    }

    let res = if auth_service(&state)
        .verify_otp(form.login_id.trim(), form.otp.trim())
        .await
    {
        let mut res = ResponseEnvelope::new(true);
        res.add_message(OTP_VERIFIED);
        res
    } else {
        ResponseEnvelope::failure(OTP_INVALID)
    };

    Ok(Json(res))
}

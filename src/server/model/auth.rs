//! Validation and record conversion for the authentication forms.

use crate::{
    model::{
        api::InputErrors,
        auth::{ChangePasswordForm, LoginForm, OtpVerifyForm, RegistrationForm},
    },
    server::{
        model::user::{User, DEFAULT_MEMBER_ROLE_ID, STATUS_INACTIVE},
        util::validate::Validator,
    },
};

pub fn validate_login(form: &LoginForm) -> InputErrors {
    Validator::new()
        .required("loginId", &form.login_id)
        .required("password", &form.password)
        .finish()
}

pub fn validate_registration(form: &RegistrationForm) -> InputErrors {
    Validator::new()
        .required("firstName", &form.first_name)
        .max_len("firstName", &form.first_name, 50)
        .required("lastName", &form.last_name)
        .max_len("lastName", &form.last_name, 50)
        .required("login", &form.login)
        .email("login", &form.login)
        .required("password", &form.password)
        .finish()
}

pub fn validate_change_password(form: &ChangePasswordForm) -> InputErrors {
    Validator::new()
        .required("oldPassword", &form.old_password)
        .required("newPassword", &form.new_password)
        .finish()
}

pub fn validate_otp(form: &OtpVerifyForm) -> InputErrors {
    Validator::new()
        .required("loginId", &form.login_id)
        .required("otp", &form.otp)
        .finish()
}

/// Builds the account a sign-up creates: inactive, default member role, login id
/// doubling as email.
pub fn user_from_registration(form: &RegistrationForm) -> User {
    let login = form.login.trim().to_string();

    User {
        id: None,
        first_name: form.first_name.trim().to_string(),
        last_name: form.last_name.trim().to_string(),
        email: login.clone(),
        login_id: login,
        password: form.password.clone(),
        gender: form.gender.clone(),
        dob: form.dob,
        phone: form.phone.clone(),
        alternate_mobile: form.alternate_mobile.clone(),
        status: STATUS_INACTIVE.to_string(),
        role_id: Some(DEFAULT_MEMBER_ROLE_ID),
        ..Default::default()
    }
}

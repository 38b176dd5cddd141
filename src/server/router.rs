use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{BaseForm, ResponseEnvelope},
        auth::{ChangePasswordForm, LoginForm, OtpVerifyForm, RegistrationForm},
        course::{CourseDto, CourseForm},
        role::{RoleDto, RoleForm},
        user::{UserDto, UserForm, UserSummaryDto},
    },
    server::{
        controller::{
            auth,
            course::{CourseResource, COURSE_PATH},
            crud::{self, routes},
            role::{RoleResource, ROLE_PATH},
            user::{UserResource, USER_PATH},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::login,
        auth::find_by_login_id,
        auth::forgot_password,
        auth::sign_up,
        auth::change_password,
        auth::upload_profile_picture,
        auth::get_profile_picture,
        auth::issue_otp,
        auth::verify_otp,
        crud::get_default,
        crud::get_one,
        crud::delete_one,
        crud::delete_many,
        crud::search,
        crud::search_page,
        crud::save,
    ),
    components(schemas(
        ResponseEnvelope,
        BaseForm,
        LoginForm,
        RegistrationForm,
        ChangePasswordForm,
        OtpVerifyForm,
        UserForm,
        UserDto,
        UserSummaryDto,
        RoleForm,
        RoleDto,
        CourseForm,
        CourseDto,
    )),
    tags(
        (name = "auth", description = "Login, sign-up and account recovery"),
        (name = "crud", description = "Generic operations shared by user, role and course")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/login/{login_id}", get(auth::find_by_login_id))
        .route("/api/auth/fp/{login_id}", get(auth::forgot_password))
        .route("/api/auth/signUp", post(auth::sign_up))
        .route("/api/auth/changePassword", post(auth::change_password))
        .route(
            "/api/auth/profilePic/{user_id}",
            post(auth::upload_profile_picture).get(auth::get_profile_picture),
        )
        .route("/api/auth/otp/verify", post(auth::verify_otp))
        .route("/api/auth/otp/{login_id}", get(auth::issue_otp))
        .nest(USER_PATH, routes::<UserResource>())
        .nest(ROLE_PATH, routes::<RoleResource>())
        .nest(COURSE_PATH, routes::<CourseResource>())
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}

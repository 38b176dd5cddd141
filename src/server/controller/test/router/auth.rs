use super::*;

/// Tests a successful login over HTTP.
///
/// Expected: success with token, loginId and names in the results
#[tokio::test]
async fn login_returns_token_and_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::role::RoleFactory::new(db)
        .id(2)
        .name("Student")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .login_id("a@x.com")
        .password("p1")
        .name("Ada", "Lovelace")
        .build()
        .await?;
    let (app, state) = app(db);

    let body = json!({ "loginId": "a@x.com", "password": "p1" });
    let (_, res) = send(app, json_request(Method::POST, "/api/auth/login", body)).await;

    assert!(res.success);
    assert_eq!(res.results.get("loginId"), Some(&json!("a@x.com")));
    assert_eq!(res.results.get("role"), Some(&json!("Student")));
    assert_eq!(res.results.get("fname"), Some(&json!("Ada")));
    assert_eq!(res.results.get("lname"), Some(&json!("Lovelace")));

    let token = res.results.get("token").and_then(Value::as_str).unwrap();
    assert_eq!(state.tokens.verify(token).unwrap().sub, "a@x.com");

    Ok(())
}

/// Tests wrong password and unknown login id.
///
/// Expected: the same generic failure for both
#[tokio::test]
async fn login_failures_are_indistinguishable() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::user::create_user_with_credentials(db, "a@x.com", "p1").await?;
    let (app, _state) = app(db);

    let (_, wrong_password) = send(
        app.clone(),
        json_request(
            Method::POST,
            "/api/auth/login",
            json!({ "loginId": "a@x.com", "password": "wrong" }),
        ),
    )
    .await;
    let (_, unknown) = send(
        app,
        json_request(
            Method::POST,
            "/api/auth/login",
            json!({ "loginId": "b@x.com", "password": "wrong" }),
        ),
    )
    .await;

    assert!(!wrong_password.success);
    assert_eq!(wrong_password.messages, unknown.messages);
    assert_eq!(wrong_password.messages, vec!["Invalid ID or Password".to_string()]);

    Ok(())
}

/// Tests sign-up followed by a second sign-up with the same login.
///
/// Expected: first registers an inactive account, second is rejected
#[tokio::test]
async fn sign_up_rejects_existing_login() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (app, _state) = app(db);

    let body = json!({
        "firstName": "Ada",
        "lastName": "Lovelace",
        "login": "a@x.com",
        "password": "p1"
    });

    let (_, first) = send(
        app.clone(),
        json_request(Method::POST, "/api/auth/signUp", body.clone()),
    )
    .await;
    let (_, second) = send(app, json_request(Method::POST, "/api/auth/signUp", body)).await;

    assert!(first.success);
    assert_eq!(first.messages, vec!["User Registered Successfully".to_string()]);
    assert!(!second.success);
    assert_eq!(second.messages, vec!["Login Id already exists".to_string()]);

    let accounts = entity::prelude::User::find().all(db).await?;
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].status, "Inactive");
    assert_eq!(accounts[0].role_id, 2);

    Ok(())
}

/// Tests sign-up with empty required fields.
///
/// Expected: failure with input errors and the empty fields message
#[tokio::test]
async fn sign_up_reports_empty_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (app, _state) = app(db);

    let (_, res) = send(app, json_request(Method::POST, "/api/auth/signUp", json!({}))).await;

    assert!(!res.success);
    assert!(res.input_errors.contains_key("firstName"));
    assert_eq!(res.messages, vec!["Please fill following empty fields".to_string()]);

    Ok(())
}

/// Tests forgot password for an unknown login id.
///
/// Expected: "Invalid Login Id" failure
#[tokio::test]
async fn forgot_password_unknown_login() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (app, _state) = app(db);

    let (_, res) = send(app, get_request("/api/auth/fp/nobody@x.com")).await;

    assert!(!res.success);
    assert_eq!(res.messages, vec!["Invalid Login Id".to_string()]);

    Ok(())
}

/// Tests that the OTP endpoint never returns the code.
///
/// Expected: success without data or results
#[tokio::test]
async fn otp_issue_does_not_leak_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::user::create_user_with_credentials(db, "a@x.com", "p1").await?;
    let (app, _state) = app(db);

    let (_, res) = send(app, get_request("/api/auth/otp/a@x.com")).await;

    assert!(res.success);
    assert!(res.data.is_none());
    assert!(res.results.is_empty());

    Ok(())
}

/// Tests redeeming an issued OTP twice.
///
/// Expected: first verification succeeds, the second fails
#[tokio::test]
async fn otp_verify_consumes_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (app, state) = app(db);
    let code = state.otp.issue("a@x.com").await;

    let body = json!({ "loginId": "a@x.com", "otp": code });
    let (_, first) = send(
        app.clone(),
        json_request(Method::POST, "/api/auth/otp/verify", body.clone()),
    )
    .await;
    let (_, second) = send(app, json_request(Method::POST, "/api/auth/otp/verify", body)).await;

    assert!(first.success);
    assert!(!second.success);

    Ok(())
}

/// Tests changing a password without a token.
///
/// Expected: 401 failure envelope
#[tokio::test]
async fn change_password_requires_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (app, _state) = app(db);

    let body = json!({ "oldPassword": "p1", "newPassword": "p2" });
    let (status, res) = send(
        app,
        json_request(Method::POST, "/api/auth/changePassword", body),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(!res.success);

    Ok(())
}

/// Tests changing a password with a valid token.
///
/// Expected: success and the new password stored
#[tokio::test]
async fn change_password_with_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let account = factory::user::create_user_with_credentials(db, "a@x.com", "p1").await?;
    let (app, state) = app(db);
    let token = state.tokens.issue("a@x.com").unwrap();

    let mut request = json_request(
        Method::POST,
        "/api/auth/changePassword",
        json!({ "oldPassword": "p1", "newPassword": "p2" }),
    );
    request.headers_mut().insert(
        header::AUTHORIZATION,
        format!("Bearer {}", token).parse().unwrap(),
    );

    let (_, res) = send(app, request).await;

    assert!(res.success);
    let stored = entity::prelude::User::find_by_id(account.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.password, "p2");

    Ok(())
}

/// Tests uploading a profile picture as multipart.
///
/// Expected: success with imageId and the account pointing at it
#[tokio::test]
async fn profile_picture_upload() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let account = factory::user::create_user(db).await?;
    let (app, _state) = app(db);

    let boundary = "XBOUNDARY";
    let body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"me.png\"\r\nContent-Type: image/png\r\n\r\nPNGDATA\r\n--{b}--\r\n",
        b = boundary
    );
    let request = Request::builder()
        .method(Method::POST)
        .uri(format!("/api/auth/profilePic/{}", account.id))
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(Body::from(body))
        .unwrap();

    let (_, res) = send(app, request).await;

    assert!(res.success);
    let image_id = res.results.get("imageId").and_then(Value::as_i64).unwrap();

    let stored = entity::prelude::User::find_by_id(account.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.image_id, Some(image_id as i32));

    Ok(())
}

/// Tests the public login id lookup.
///
/// Expected: only names and login id for a known account, failure otherwise
#[tokio::test]
async fn login_lookup_returns_summary() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::user::UserFactory::new(db)
        .login_id("a@x.com")
        .name("Ada", "Lovelace")
        .build()
        .await?;
    let (app, _state) = app(db);

    let (_, found) = send(app.clone(), get_request("/api/auth/login/a@x.com")).await;
    let (_, missing) = send(app, get_request("/api/auth/login/b@x.com")).await;

    assert_eq!(
        found.data,
        Some(json!({ "firstName": "Ada", "lastName": "Lovelace", "loginId": "a@x.com" }))
    );
    assert!(!missing.success);
    assert_eq!(missing.messages, vec!["Record not found".to_string()]);

    Ok(())
}

mod common;

use common::credentials;
use common::TestApp;
use credential_service::identity::errors::AuthError;
use credential_service::identity::ports::AuthServicePort;

#[tokio::test]
async fn test_register_then_login_share_subject() {
    let app = TestApp::spawn();

    let registered = app
        .service
        .register(credentials("a@x.com", "secret1"))
        .await
        .expect("Registration failed");

    let logged_in = app
        .service
        .login(credentials("a@x.com", "secret1"))
        .await
        .expect("Login failed");

    let first = app
        .token_issuer
        .verify(registered.access_token.as_str())
        .expect("Invalid registration token");
    let second = app
        .token_issuer
        .verify(logged_in.access_token.as_str())
        .expect("Invalid login token");

    assert_eq!(first.sub, second.sub);
    assert_eq!(first.email, "a@x.com");
    assert_eq!(second.email, "a@x.com");
}

#[tokio::test]
async fn test_worked_example() {
    let app = TestApp::spawn();

    let t1 = app
        .service
        .register(credentials("a@x.com", "secret1"))
        .await
        .expect("Registration failed");

    let wrong = app.service.login(credentials("a@x.com", "wrong")).await;
    assert!(matches!(wrong, Err(AuthError::CredentialsIncorrect)));

    let t2 = app
        .service
        .login(credentials("a@x.com", "secret1"))
        .await
        .expect("Login failed");

    let c1 = app.service.verify_token(t1.access_token.as_str()).await.unwrap();
    let c2 = app.service.verify_token(t2.access_token.as_str()).await.unwrap();
    assert_eq!(c1.sub, c2.sub);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::spawn();

    app.service
        .register(credentials("a@x.com", "secret1"))
        .await
        .expect("Registration failed");

    let result = app
        .service
        .register(credentials("a@x.com", "a-different-password"))
        .await;
    assert!(matches!(result, Err(AuthError::CredentialsTaken)));
    assert_eq!(app.store.len(), 1);

    // The original password still works
    assert!(app
        .service
        .login(credentials("a@x.com", "secret1"))
        .await
        .is_ok());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_registration_has_one_winner() {
    let app = TestApp::spawn();

    let first = {
        let service = app.service.clone();
        tokio::spawn(async move { service.register(credentials("race@x.com", "one")).await })
    };
    let second = {
        let service = app.service.clone();
        tokio::spawn(async move { service.register(credentials("race@x.com", "two")).await })
    };

    let outcomes = [first.await.unwrap(), second.await.unwrap()];

    let successes = outcomes.iter().filter(|o| o.is_ok()).count();
    let taken = outcomes
        .iter()
        .filter(|o| matches!(o, Err(AuthError::CredentialsTaken)))
        .count();

    assert_eq!(successes, 1);
    assert_eq!(taken, 1);
    assert_eq!(app.store.len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_many_concurrent_registrations_same_email() {
    let app = TestApp::spawn();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let service = app.service.clone();
            tokio::spawn(async move {
                service
                    .register(credentials("crowd@x.com", &format!("password-{}", i)))
                    .await
            })
        })
        .collect();

    let mut successes = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successes += 1,
            Err(AuthError::CredentialsTaken) => {}
            Err(other) => panic!("unexpected outcome: {other}"),
        }
    }

    assert_eq!(successes, 1);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::spawn();

    app.service
        .register(credentials("a@x.com", "secret1"))
        .await
        .expect("Registration failed");

    let wrong_password = app
        .service
        .login(credentials("a@x.com", "wrong"))
        .await
        .unwrap_err();
    let unknown_email = app
        .service
        .login(credentials("nobody@x.com", "secret1"))
        .await
        .unwrap_err();

    assert!(matches!(wrong_password, AuthError::CredentialsIncorrect));
    assert!(matches!(unknown_email, AuthError::CredentialsIncorrect));
    assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    assert!(!wrong_password.is_unexpected());
}

#[tokio::test]
async fn test_email_is_case_sensitive() {
    let app = TestApp::spawn();

    app.service
        .register(credentials("a@x.com", "secret1"))
        .await
        .expect("Registration failed");

    let login = app.service.login(credentials("A@x.com", "secret1")).await;
    assert!(matches!(login, Err(AuthError::CredentialsIncorrect)));

    assert!(app
        .service
        .register(credentials("A@x.com", "secret1"))
        .await
        .is_ok());
}

#[tokio::test]
async fn test_distinct_identities_get_distinct_subjects() {
    let app = TestApp::spawn();

    let a = app
        .service
        .register(credentials("a@x.com", "secret1"))
        .await
        .unwrap();
    let b = app
        .service
        .register(credentials("b@x.com", "secret1"))
        .await
        .unwrap();

    let a = app.token_issuer.verify(a.access_token.as_str()).unwrap();
    let b = app.token_issuer.verify(b.access_token.as_str()).unwrap();
    assert_ne!(a.sub, b.sub);
}

#[tokio::test]
async fn test_tampered_token_is_rejected() {
    let app = TestApp::spawn();

    let result = app
        .service
        .register(credentials("a@x.com", "secret1"))
        .await
        .unwrap();

    let token = result.access_token.as_str();
    let (signing_input, signature) = token.rsplit_once('.').unwrap();
    let replacement = if signature.starts_with('A') { "B" } else { "A" };
    let forged = format!("{}.{}{}", signing_input, replacement, &signature[1..]);

    let outcome = app.service.verify_token(&forged).await;
    assert!(matches!(outcome, Err(AuthError::InvalidToken)));
}

#[tokio::test]
async fn test_bearer_header_round_trip() {
    let app = TestApp::spawn();

    let result = app
        .service
        .register(credentials("a@x.com", "secret1"))
        .await
        .unwrap();

    let header = format!("Bearer {}", result.access_token.as_str());
    let token = auth::extract_bearer(&header).expect("Bearer token expected");

    let claims = app.service.verify_token(token).await.unwrap();
    assert_eq!(claims.email, "a@x.com");
}

#[tokio::test]
async fn test_response_shape() {
    let app = TestApp::spawn();

    let result = app
        .service
        .register(credentials("a@x.com", "secret1"))
        .await
        .unwrap();

    let body = serde_json::to_value(&result).unwrap();
    assert_eq!(body["access_token"], result.access_token.as_str());
    assert_eq!(body.as_object().unwrap().len(), 1);
}

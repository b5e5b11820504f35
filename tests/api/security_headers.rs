use fortisure_site::security_headers::POLICY;

use crate::helpers::mailjet_accepts_everything;
use crate::helpers::spawn_app;

#[tokio::test]
async fn every_response_has_csp() {
    let app = spawn_app().await;
    mailjet_accepts_everything(&app.email_server).await;

    let responses = [
        app.get("/").await,
        app.get("/css/main.css").await,
        app.get("/does-not-exist").await,
        app.post_training("firstName=Ann".to_string()).await,
    ];

    for resp in responses {
        assert_eq!(
            resp.headers()
                .get("Content-Security-Policy")
                .unwrap_or_else(|| panic!("no csp on {}", resp.url())),
            POLICY
        );
    }
}

#[tokio::test]
async fn error_responses_have_csp() {
    let app = spawn_app().await;
    // nothing mounted: wiremock answers 404 to every send

    let resp = app.post_service("firstName=Bo".to_string()).await;
    assert_eq!(resp.status().as_u16(), 502);
    assert!(resp.headers().get("Content-Security-Policy").is_some());
}

use wiremock::matchers::body_string_contains;
use wiremock::ResponseTemplate;

use crate::helpers::accepted;
use crate::helpers::assert_is_redirect_to;
use crate::helpers::contact_endpoint;
use crate::helpers::mailjet_accepts_everything;
use crate::helpers::send_endpoint;
use crate::helpers::spawn_app;

fn form(message: &str) -> String {
    serde_urlencoded::to_string([
        ("firstName", "Bo"),
        ("organization", "Acme"),
        ("email", "bo@x.com"),
        ("phone", "555-2000"),
        ("interest", "networking"),
        ("message", message),
    ])
    .unwrap()
}

#[tokio::test]
async fn service_redirects_to_success() {
    let app = spawn_app().await;

    send_endpoint()
        .respond_with(accepted())
        .expect(2)
        .mount(&app.email_server)
        .await;
    contact_endpoint()
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let resp = app.post_service(form("please call")).await;
    assert_is_redirect_to(&resp, "/success");
}

#[tokio::test]
async fn notification_is_copied_to_staff() {
    let app = spawn_app().await;
    mailjet_accepts_everything(&app.email_server).await;

    app.post_service(form("please call")).await;

    assert_eq!(app.sent_messages().await.len(), 2);

    let notice = app.message_to("info@fortisureit.com").await;
    assert_eq!(notice["Cc"][0]["Email"], "rob.kozak@fortisureit.com");
    assert_eq!(notice["Bcc"][0]["Email"], "scott.arnold@fortisureit.com");
    let html = notice["HTMLPart"].as_str().unwrap();
    assert!(html.contains("networking"));
    assert!(html.contains("please call"));

    let ack = app.message_to("bo@x.com").await;
    assert_eq!(ack["Subject"], "Thank You for Contacting Us!");
    assert_eq!(ack["From"]["Email"], "info@fortisureit.com");
    assert!(ack["HTMLPart"].as_str().unwrap().contains("networking"));
    assert!(ack.get("Cc").is_none());
}

#[tokio::test]
async fn message_is_escaped() {
    let app = spawn_app().await;
    mailjet_accepts_everything(&app.email_server).await;

    app.post_service(form("<script>alert(1)</script>")).await;

    let notice = app.message_to("info@fortisureit.com").await;
    let html = notice["HTMLPart"].as_str().unwrap();
    assert!(html.contains("&lt;script&gt;"));
    assert!(!html.contains("<script>"));
}

#[tokio::test]
async fn contact_name_includes_organization() {
    let app = spawn_app().await;
    mailjet_accepts_everything(&app.email_server).await;

    app.post_service(form("please call")).await;

    let reqs = app.email_server.received_requests().await.unwrap();
    let contact = reqs
        .iter()
        .find(|r| r.url.path() == "/v3/REST/contact")
        .expect("contact upsert");
    let body: serde_json::Value = serde_json::from_slice(&contact.body).unwrap();
    assert_eq!(body["Email"], "bo@x.com");
    assert_eq!(body["Name"], "Bo Acme");
}

#[tokio::test]
async fn rejected_notification_is_a_502() {
    let app = spawn_app().await;

    send_endpoint()
        .and(body_string_contains("New Contact Info Form"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "Messages": [{ "Status": "error" }] })),
        )
        .with_priority(1)
        .expect(1)
        .mount(&app.email_server)
        .await;
    mailjet_accepts_everything(&app.email_server).await;

    let resp = app.post_service(form("please call")).await;
    assert_eq!(resp.status().as_u16(), 502);

    // the acknowledgment was still sent
    app.message_to("bo@x.com").await;
}

#[tokio::test]
async fn existing_contact_is_fine() {
    let app = spawn_app().await;

    send_endpoint()
        .respond_with(accepted())
        .expect(2)
        .mount(&app.email_server)
        .await;
    contact_endpoint()
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "ErrorMessage": "MJ18 A Contact resource with value \"bo@x.com\" for Email already exists.",
            "StatusCode": 400
        })))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let resp = app.post_service(form("please call")).await;
    assert_is_redirect_to(&resp, "/success");
}

#[tokio::test]
async fn long_message_is_delivered_whole() {
    let app = spawn_app().await;
    mailjet_accepts_everything(&app.email_server).await;

    let message = "we need help with our network. ".repeat(650);
    assert!(message.len() > 20_000);

    let resp = app.post_service(form(&message)).await;
    assert_is_redirect_to(&resp, "/success");

    let notice = app.message_to("info@fortisureit.com").await;
    assert!(notice["TextPart"].as_str().unwrap().contains(&message));
}

#[tokio::test]
async fn json_body_is_accepted() {
    let app = spawn_app().await;
    mailjet_accepts_everything(&app.email_server).await;

    let resp = app
        .post_json(
            "/service",
            &serde_json::json!({
                "firstName": "Bo",
                "organization": "Acme",
                "email": "bo@x.com",
                "interest": "networking",
                "message": "please call",
            }),
        )
        .await;
    assert_is_redirect_to(&resp, "/success");

    let notice = app.message_to("info@fortisureit.com").await;
    assert_eq!(notice["Cc"][0]["Email"], "rob.kozak@fortisureit.com");
    assert!(notice["HTMLPart"].as_str().unwrap().contains("please call"));
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let app = spawn_app().await;

    send_endpoint()
        .respond_with(accepted())
        .expect(0)
        .mount(&app.email_server)
        .await;

    let resp = app.post_service(form(&"x".repeat(200 * 1024))).await;
    assert!(resp.status().is_client_error(), "got {}", resp.status());
}

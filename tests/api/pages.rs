use crate::helpers::spawn_app;

#[tokio::test]
async fn every_page_renders() {
    let app = spawn_app().await;

    for (route, title, style) in [
        ("/", "Fortisure IT", "home.css"),
        ("/about", "About", "about.css"),
        ("/careers", "Career Development", "careers.css"),
        ("/services", "Services", "services.css"),
        ("/success", "Thank You", "success.css"),
    ] {
        let resp = app.get(route).await;
        assert_eq!(resp.status().as_u16(), 200, "{route}");
        assert!(
            resp.headers()
                .get("Content-Type")
                .unwrap()
                .to_str()
                .unwrap()
                .starts_with("text/html"),
            "{route}"
        );

        let html = resp.text().await.unwrap();
        assert!(html.contains(&format!("<title>{title}</title>")), "{route}");
        assert!(html.contains(&format!("/css/{style}")), "{route}");
    }
}

#[tokio::test]
async fn forms_post_to_intake_endpoints() {
    let app = spawn_app().await;

    let careers = app.get("/careers").await.text().await.unwrap();
    assert!(careers.contains(r#"action="/training""#));
    for field in ["firstName", "lastName", "email", "phone", "school"] {
        assert!(careers.contains(&format!(r#"name="{field}""#)), "{field}");
    }

    let services = app.get("/services").await.text().await.unwrap();
    assert!(services.contains(r#"action="/service""#));
    for field in ["firstName", "organization", "email", "phone", "interest", "message"] {
        assert!(services.contains(&format!(r#"name="{field}""#)), "{field}");
    }
}

#[tokio::test]
async fn static_files_are_served() {
    let app = spawn_app().await;

    let resp = app.get("/css/home.css").await;
    assert_eq!(resp.status().as_u16(), 200);
    assert!(resp.text().await.unwrap().contains(".hero"));

    let resp = app.get("/css/missing.css").await;
    assert_eq!(resp.status().as_u16(), 404);
}

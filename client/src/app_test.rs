use super::*;
use leptos::tachys::view::RenderHtml;

fn options() -> LeptosOptions {
    LeptosOptions::builder().output_name("hoops-mania").build()
}

fn render_layout_around_probe() -> String {
    view! {
        <RootLayout options=options()>
            <p class="probe">"opaque content"</p>
        </RootLayout>
    }
    .to_html()
}

#[test]
fn root_layout_declares_language() {
    let html = render_layout_around_probe();
    assert!(html.starts_with(r#"<html lang="en">"#), "unexpected document start: {html}");
}

#[test]
fn root_layout_has_exactly_one_body() {
    let html = render_layout_around_probe();
    assert_eq!(html.matches("<body").count(), 1);
    assert_eq!(html.matches("</body>").count(), 1);
}

#[test]
fn root_layout_embeds_children_unchanged() {
    let html = render_layout_around_probe();
    let body_start = html.find("<body>").expect("body open tag") + "<body>".len();
    let body_end = html.find("</body>").expect("body close tag");
    assert_eq!(&html[body_start..body_end], r#"<p class="probe">opaque content</p>"#);
}

#[test]
fn root_layout_head_references_output_bundle() {
    let html = render_layout_around_probe();
    let head_end = html.find("</head>").expect("head close tag");
    assert!(html[..head_end].contains("hoops-mania"));
}

#[test]
fn root_layout_wraps_home_page_hero_only() {
    let html = view! {
        <RootLayout options=options()>
            <HomePage/>
        </RootLayout>
    }
    .to_html();
    let body_start = html.find("<body>").expect("body open tag") + "<body>".len();
    let body_end = html.find("</body>").expect("body close tag");
    let body = &html[body_start..body_end];
    assert!(body.starts_with(r#"<main class="home"><section class="hero">"#));
    assert!(body.ends_with("</section></main>"));
    assert_eq!(body.matches("<section").count(), 1);
}

#[test]
fn root_layout_is_idempotent() {
    assert_eq!(render_layout_around_probe(), render_layout_around_probe());
}

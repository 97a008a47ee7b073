use homepage_menu::{
    create_flowlist, load_menu, main_menu, MemoryDocument, PageInitializer, MENU_CONTAINER_ID,
    YEAR_ELEMENT_ID,
};
use tokio::sync::oneshot;

#[tokio::test]
async fn homepage_is_filled_on_ready() {
    let mut document = MemoryDocument::new()
        .with_element(YEAR_ELEMENT_ID)
        .with_element(MENU_CONTAINER_ID);
    let mut initializer = PageInitializer::new();
    let (ready, on_ready) = oneshot::channel();

    let host = tokio::spawn(async move {
        ready.send(()).unwrap();
    });
    let report = initializer.initialize_when_ready(on_ready, &mut document).await;
    host.await.unwrap();

    assert!(report.year_written);
    assert!(report.menu_rendered);
    assert!(!report.tooltips_activated);

    let menu = &document.element(MENU_CONTAINER_ID).unwrap().inner_html;
    assert!(menu.starts_with("<div class=\"flow-list center-text\">"));
    assert_eq!(menu.matches("<div class=\"flow-list-item\">").count(), 2);
    assert!(menu.contains("<i class=\"lime mdi mdi-github\"></i>"));
    assert!(!menu.contains("smallt"));
}

#[test]
fn json_menu_renders_like_builtin() {
    let json = serde_json::to_string(main_menu()).unwrap();
    let entries = load_menu(&json).unwrap();
    assert_eq!(
        create_flowlist(&entries, false, true),
        create_flowlist(main_menu(), false, true)
    );
}

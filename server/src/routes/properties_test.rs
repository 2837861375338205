use super::*;

#[tokio::test]
async fn api_status_reports_healthy() {
    let Json(body) = api_status().await;
    let value = serde_json::to_value(body).unwrap();
    assert_eq!(value["status"], "healthy");
    assert_eq!(value["message"], "Velan Properties API is running");
}

#[tokio::test]
async fn list_properties_returns_fixture_in_order() {
    let Json(listings) = list_properties(State(AppState::default())).await;
    let titles: Vec<&str> = listings.iter().map(|l| l.title).collect();
    assert_eq!(
        titles,
        vec![
            "Modern Family Villa",
            "Luxury Apartment",
            "Cozy Suburban Home",
            "Penthouse Suite",
            "Investment Property",
            "Family Townhouse",
        ]
    );
}

#[tokio::test]
async fn list_properties_serializes_display_fields() {
    let Json(listings) = list_properties(State(AppState::default())).await;
    let value = serde_json::to_value(listings).unwrap();
    assert_eq!(value[1]["price"], "2,200/month");
    assert_eq!(value[1]["type"], "For Rent");
    assert_eq!(value[1]["area"], "1,200 sq ft");
    assert_eq!(value[1]["parking"], 1);
}

#[tokio::test]
async fn get_property_finds_by_id() {
    let Json(listing) = get_property(State(AppState::default()), Path(3)).await.unwrap();
    assert_eq!(listing.title, "Cozy Suburban Home");
}

#[tokio::test]
async fn get_property_unknown_id_is_not_found() {
    let err = get_property(State(AppState::default()), Path(7)).await.unwrap_err();
    assert_eq!(err, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_property_uses_state_listings() {
    let state = AppState::new(&[], agency::AGENCY);
    let err = get_property(State(state), Path(1)).await.unwrap_err();
    assert_eq!(err, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn contact_includes_digits_only_whatsapp_link() {
    let Json(body) = contact(State(AppState::default())).await;
    assert_eq!(body.phone, "+919443246742");
    assert!(body.whatsapp_link.starts_with("https://wa.me/919443246742?text="));
}

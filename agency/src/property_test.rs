use super::*;

// =============================================================
// Fixture
// =============================================================

#[test]
fn featured_has_six_listings_in_declaration_order() {
    let ids: Vec<u32> = featured().iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn featured_ids_are_pairwise_distinct() {
    assert!(ids_are_unique(featured()));
}

#[test]
fn ids_are_unique_detects_duplicates() {
    let mut listings = featured().to_vec();
    listings[5].id = 2;
    assert!(!ids_are_unique(&listings));
}

#[test]
fn ids_are_unique_accepts_empty_list() {
    assert!(ids_are_unique(&[]));
}

#[test]
fn featured_first_listing_matches_literal_values() {
    let villa = &featured()[0];
    assert_eq!(villa.title, "Modern Family Villa");
    assert_eq!(villa.price, "450,000");
    assert_eq!(villa.location, "Riverside Gardens, Property City");
    assert_eq!(villa.bedrooms, 4);
    assert_eq!(villa.parking, 2);
    assert_eq!(villa.area, "2,800 sq ft");
    assert_eq!(villa.listing_type, ListingType::ForSale);
}

#[test]
fn featured_contains_one_investment_listing() {
    let investments: Vec<_> = featured()
        .iter()
        .filter(|l| l.listing_type == ListingType::Investment)
        .collect();
    assert_eq!(investments.len(), 1);
    assert_eq!(investments[0].title, "Investment Property");
}

#[test]
fn featured_images_are_https_urls() {
    for listing in featured() {
        assert!(listing.image.starts_with("https://"), "{}", listing.image);
    }
}

#[test]
fn find_returns_listing_by_id() {
    let listing = find(4).expect("listing 4 exists");
    assert_eq!(listing.title, "Penthouse Suite");
}

#[test]
fn find_returns_none_for_unknown_id() {
    assert!(find(0).is_none());
    assert!(find(7).is_none());
}

// =============================================================
// Labels
// =============================================================

#[test]
fn labels_format_counts_and_price() {
    let apartment = find(2).expect("listing 2 exists");
    assert_eq!(apartment.price_label(), "$2,200/month");
    assert_eq!(apartment.bedrooms_label(), "2 Beds");
    assert_eq!(apartment.parking_label(), "1 Parking");
}

// =============================================================
// ListingType
// =============================================================

#[test]
fn listing_type_parses_display_strings() {
    for ty in [ListingType::ForSale, ListingType::ForRent, ListingType::Investment] {
        assert_eq!(ty.as_str().parse::<ListingType>(), Ok(ty));
        assert_eq!(ty.to_string(), ty.as_str());
    }
}

#[test]
fn listing_type_rejects_unknown_string() {
    let err = "For Lease".parse::<ListingType>().unwrap_err();
    assert_eq!(err, ListingError::UnknownType("For Lease".to_owned()));
    assert_eq!(err.to_string(), "unknown listing type: For Lease");
}

#[test]
fn listing_type_badge_modifiers_are_distinct() {
    assert_eq!(ListingType::ForSale.badge_modifier(), "sale");
    assert_eq!(ListingType::ForRent.badge_modifier(), "rent");
    assert_eq!(ListingType::Investment.badge_modifier(), "investment");
}

#[test]
fn listing_serializes_type_under_display_name() {
    let value = serde_json::to_value(find(5).expect("listing 5 exists")).unwrap();
    assert_eq!(value["type"], "Investment");
    assert_eq!(value["id"], 5);
    assert_eq!(value["bedrooms"], 2);
    assert!(value.get("listing_type").is_none());
}

#[test]
fn listing_type_deserializes_from_display_string() {
    let ty: ListingType = serde_json::from_str("\"For Rent\"").unwrap();
    assert_eq!(ty, ListingType::ForRent);
}

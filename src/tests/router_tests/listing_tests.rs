use crate::tests::utils::{body_string, get, test_app};
use scraper::{Html, Selector};

fn card_ids(html: &str) -> Vec<i64> {
    let doc = Html::parse_document(html);
    let sel = Selector::parse("article.hostel-card").unwrap();
    doc.select(&sel)
        .filter_map(|el| el.value().attr("data-id"))
        .filter_map(|id| id.parse().ok())
        .collect()
}

fn text_of(html: &str, selector: &str) -> String {
    let doc = Html::parse_document(html);
    let sel = Selector::parse(selector).unwrap();
    doc.select(&sel)
        .next()
        .map(|el| el.text().collect::<String>())
        .unwrap_or_default()
}

#[test]
fn listing_shows_whole_catalog_in_featured_order() {
    let app = test_app("listing_all");
    let resp = get(&app, "/hostels");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert_eq!(card_ids(&body), vec![1, 2, 3]);
    assert_eq!(text_of(&body, "#resultsCount"), "3");
    assert_eq!(text_of(&body, "#totalHostels"), "3");
}

#[test]
fn price_filter_from_query_string() {
    let app = test_app("listing_price");
    let body = body_string(get(&app, "/hostels?max_price=6500"));
    assert_eq!(card_ids(&body), vec![1, 3]);
    assert_eq!(text_of(&body, "#resultsCount"), "2");
    assert_eq!(text_of(&body, "#totalHostels"), "3");
}

#[test]
fn search_term_matches_location_case_insensitively() {
    let app = test_app("listing_search");
    let body = body_string(get(&app, "/hostels?q=gate"));
    assert_eq!(card_ids(&body), vec![2, 3]);
}

#[test]
fn roommate_and_rating_filters_combine() {
    let app = test_app("listing_combined");
    let body = body_string(get(&app, "/hostels?roommate=alone&min_rating=4"));
    assert_eq!(card_ids(&body), vec![1]);
}

#[test]
fn sort_key_orders_results() {
    let app = test_app("listing_sort");
    let body = body_string(get(&app, "/hostels?sort=price-low"));
    assert_eq!(card_ids(&body), vec![3, 1, 2]);

    let body = body_string(get(&app, "/hostels?sort=newest"));
    assert_eq!(card_ids(&body), vec![3, 2, 1]);
}

#[test]
fn no_results_panel_when_nothing_matches() {
    let app = test_app("listing_empty");
    let body = body_string(get(&app, "/hostels?q=mombasa"));
    assert!(card_ids(&body).is_empty());
    assert!(text_of(&body, "#noResults").contains("No hostels found"));
}

#[test]
fn out_of_range_page_is_clamped() {
    let app = test_app("listing_clamp");
    let resp = get(&app, "/hostels?page=9");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert_eq!(card_ids(&body).len(), 3);
    // One page only, so no pagination links.
    assert!(!body.contains("class=\"pagination\""));
}

#[test]
fn junk_parameters_fall_back_to_defaults() {
    let app = test_app("listing_junk");
    let body = body_string(get(
        &app,
        "/hostels?max_price=cheap&roommate=maybe&min_rating=high&sort=random&page=-4",
    ));
    assert_eq!(card_ids(&body), vec![1, 2, 3]);
}

#[test]
fn forms_carry_the_current_state() {
    let app = test_app("listing_state");
    let body = body_string(get(&app, "/hostels?q=gate&sort=rating"));
    let doc = Html::parse_document(&body);

    let sel = Selector::parse("form.filter-form input[type=hidden][name=q]").unwrap();
    let q = doc
        .select(&sel)
        .next()
        .and_then(|el| el.value().attr("value"));
    assert_eq!(q, Some("gate"));

    let book = Selector::parse("a.book-btn").unwrap();
    let href = doc
        .select(&book)
        .next()
        .and_then(|el| el.value().attr("href"))
        .unwrap_or("");
    assert_eq!(href, "/hostels/action?q=gate&sort=rating&event=book&hostel=2");
}

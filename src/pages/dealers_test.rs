use super::*;
use uuid::Uuid;

fn dealer(name: &str, city: &str) -> Dealer {
    Dealer {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        city: city.to_owned(),
        active: true,
        contact_email: None,
        phone: None,
    }
}

#[test]
fn city_options_are_sorted_and_deduplicated() {
    let dealers = vec![
        dealer("AutoCentrum", "Praha"),
        dealer("CarHouse", "Brno"),
        dealer("Vozy Novák", "Praha"),
    ];
    let options = city_options(&dealers);
    let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, vec!["Brno", "Praha"]);
}

#[test]
fn filter_by_city_keeps_only_matching_dealers() {
    let dealers = vec![
        dealer("AutoCentrum", "Praha"),
        dealer("CarHouse", "Brno"),
    ];
    let filtered = filter_by_city(dealers, Some("Brno"));
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "CarHouse");
}

#[test]
fn no_selected_city_keeps_everything() {
    let dealers = vec![
        dealer("AutoCentrum", "Praha"),
        dealer("CarHouse", "Brno"),
    ];
    assert_eq!(filter_by_city(dealers, None).len(), 2);
}

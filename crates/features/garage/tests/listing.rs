pub mod fixtures;

use bolt_garage::{CarCard, GaragePage, GarageView, load_cars};
use bolt_kernel::prelude::*;
use fixtures::*;

#[tokio::test]
async fn mounted_page_lists_every_car() {
    let gateway = ListingGateway::serving(vec![
        car("1", "Speedy", Some(true), &[50_000, 150_000]),
        car("2", "Old Faithful", None, &[]),
    ]);
    let mut page = GaragePage::new();

    page.mount(&gateway).await;

    let GarageView::List(cards) = page.view() else { panic!("expected a listing") };
    assert_eq!(cards.len(), 2);
    assert_eq!(
        cards[0],
        CarCard {
            id: CarId::new("1"),
            name: "Speedy".to_owned(),
            is_convertible: true,
            options: vec!["Option 1".to_owned(), "Option 2".to_owned()],
            total: Cents(200_000),
            edit_route: Route::EditCar(CarId::new("1")),
        }
    );
    assert_eq!(cards[1].total.to_string(), "$0");
    assert_eq!(gateway.listings(), 1);
}

#[tokio::test]
async fn failed_listing_shows_the_error() {
    let gateway = ListingGateway::failing(GatewayError::Transport {
        message: "connection refused".into(),
        context: None,
    });

    let err = load_cars(&gateway).await.expect_err("backend down");
    assert_eq!(err.message(), "connection refused");

    let mut page = GaragePage::new();
    page.mount(&gateway).await;
    assert_eq!(page.view(), GarageView::Failed("Error: connection refused".to_owned()));
}

#[tokio::test]
async fn a_settled_page_is_not_reloaded_by_late_results() {
    let gateway = ListingGateway::serving(vec![car("1", "Speedy", None, &[100])]);
    let mut page = GaragePage::new();
    page.mount(&gateway).await;

    let late = load_cars(&ListingGateway::default()).await;
    assert!(!page.finish_load(late));
    assert!(matches!(page.view(), GarageView::List(cards) if cards.len() == 1));
}

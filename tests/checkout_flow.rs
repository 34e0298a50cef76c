//! End-to-end checkout journey against a mocked backend.

use testresult::TestResult;

use shopfront::{
    addresses::{Profile, ShippingAddress},
    api::{MockStorefrontApi, OrderConfirmation, OrderItem},
    cart::{CartLine, CartView, CartViewError},
    checkout::{self, LedChoice},
    session::{AuthState, Identity, SessionHandle},
};

fn session() -> SessionHandle {
    let handle = SessionHandle::new();

    handle.login(AuthState {
        access_token: "tok".to_owned(),
        refresh_token: None,
        identity: Identity {
            account_id: 1,
            email: "an@example.com".to_owned(),
            display_name: "An".to_owned(),
        },
    });

    handle
}

fn address(address_id: i64, phone: &str, is_default: bool) -> ShippingAddress {
    ShippingAddress {
        address_id,
        full_name: "Nguyễn Văn An".to_owned(),
        phone: phone.to_owned(),
        line1: "12 Lý Thường Kiệt".to_owned(),
        district: "Hoàn Kiếm".to_owned(),
        city: "Hà Nội".to_owned(),
        country: "Việt Nam".to_owned(),
        postal_code: "100000".to_owned(),
        is_default,
    }
}

fn line(line_id: i64, product_id: i64, quantity: u32, unit_price: u64) -> CartLine {
    CartLine {
        line_id,
        product_id,
        product_name: format!("Sản phẩm {product_id}"),
        quantity,
        unit_price,
    }
}

fn stocked_backend() -> MockStorefrontApi {
    let mut api = MockStorefrontApi::new();

    api.expect_get_cart()
        .once()
        .return_once(|| Ok(vec![line(1, 100, 2, 100_000), line(2, 200, 1, 50_000)]));

    api.expect_get_profile().once().return_once(|| {
        Ok(Profile {
            account_id: 1,
            email: "an@example.com".to_owned(),
            display_name: "An".to_owned(),
            addresses: vec![
                address(3, "0912345678", true),
                address(4, "no phone", false),
            ],
        })
    });

    api
}

#[tokio::test]
async fn full_checkout_journey_places_one_order_and_reconciles() -> TestResult {
    let mut api = stocked_backend();

    api.expect_create_order()
        .once()
        .withf(|request| {
            request.shipping_address_id == 3
                && request.shipping_fee == 0
                && request.method == "COD"
                && request.comment
                    == "Phụ kiện: Nơ đỏ | Đèn LED: Có | Thiệp: Chúc mừng | Lời chúc: Vui vẻ"
                && request.items
                    == vec![
                        OrderItem {
                            product_id: 100,
                            quantity: 2,
                        },
                        OrderItem {
                            product_id: 200,
                            quantity: 1,
                        },
                    ]
        })
        .return_once(|_| {
            Ok(OrderConfirmation {
                order_code: "DH-2026-0042".to_owned(),
            })
        });

    api.expect_remove_item().times(2).returning(|_| Ok(()));

    // The reconciling reload after cleanup.
    api.expect_get_cart().once().return_once(|| Ok(Vec::new()));

    let mut view = CartView::load(&api, &session()).await?;

    assert_eq!(view.chosen_address(), Some(3), "default usable preselected");
    assert_eq!(
        view.usable_addresses().len(),
        1,
        "implausible phone excluded"
    );

    view.toggle_select_all();
    assert_eq!(view.selected_total(), 250_000);

    view.gift_note.accessory = "Nơ đỏ".to_owned();
    view.gift_note.led = Some(LedChoice::Co);
    view.gift_note.card_message = "Chúc mừng".to_owned();
    view.gift_note.wish = "Vui vẻ".to_owned();

    let confirmation = checkout::place_order(&api, &mut view).await?;

    assert_eq!(confirmation.order_code, "DH-2026-0042");
    assert!(view.lines().is_empty());
    assert_eq!(view.selection_len(), 0);

    Ok(())
}

#[tokio::test]
async fn quantity_edits_keep_totals_consistent_through_checkout() -> TestResult {
    let mut api = stocked_backend();

    api.expect_update_quantity()
        .once()
        .withf(|line_id, quantity| *line_id == 1 && *quantity == 3)
        .return_once(|_, _| Ok(()));

    let mut view = CartView::load(&api, &session()).await?;

    view.set_quantity(&api, 1, 3).await?;
    view.toggle_select(1)?;

    assert_eq!(view.selected_total(), 300_000);

    let by_product: u64 = view
        .lines()
        .iter()
        .map(|l| u64::from(l.quantity) * l.unit_price)
        .sum();
    let by_line_total: u64 = view.lines().iter().map(CartLine::line_total).sum();
    assert_eq!(by_line_total, by_product);

    Ok(())
}

#[tokio::test]
async fn unauthenticated_cart_load_redirects_with_reason() {
    let api = MockStorefrontApi::new();

    let result = CartView::load(&api, &SessionHandle::new()).await;

    assert!(
        matches!(
            result,
            Err(CartViewError::NotAuthenticated { reason: "cart" })
        ),
        "expected NotAuthenticated, got {result:?}"
    );
}

#[tokio::test]
async fn checkout_without_gift_note_makes_no_order_call() -> TestResult {
    let mut api = stocked_backend();
    api.expect_create_order().never();

    let mut view = CartView::load(&api, &session()).await?;
    view.toggle_select_all();

    let result = checkout::place_order(&api, &mut view).await;

    assert!(result.is_err(), "incomplete gift note must be rejected");
    assert_eq!(view.lines().len(), 2, "cart untouched");

    Ok(())
}
